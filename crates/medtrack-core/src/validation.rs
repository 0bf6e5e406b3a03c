//! # Validation Module
//!
//! Boundary validation for raw input before it reaches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Console shell (apps/cli)                                  │
//! │  ├── numeric parsing with re-prompt on garbage                      │
//! │  └── out-of-range integers clamped to the nearest bound             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── field-level domain rules (length, charset, range)              │
//! │  └── returns typed ValidationError, never panics                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Store invariants                                          │
//! │  ├── unique id enforcement on insert                                │
//! │  └── capacity bound on insert                                       │
//! │                                                                     │
//! │  Defense in depth: each layer catches a different class of error    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_COMPANY_LEN, MAX_EXPIRY_YEAR, MAX_NAME_LEN, MAX_UNITS, MIN_EXPIRY_YEAR};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a medicine name.
///
/// ## Rules
/// - Must not be empty
/// - Must be a single token: no whitespace anywhere
/// - Must be shorter than [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use medtrack_core::validation::validate_name;
///
/// assert!(validate_name("Paracetamol").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("two words").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_token("name", name, MAX_NAME_LEN)
}

/// Validates a company name. Same token rules as [`validate_name`] with
/// the [`MAX_COMPANY_LEN`] bound.
pub fn validate_company(company: &str) -> ValidationResult<()> {
    validate_token("company", company, MAX_COMPANY_LEN)
}

fn validate_token(field: &'static str, value: &str, max_len: usize) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a single token without whitespace",
        });
    }

    // Exclusive bound: the display layer reserves one column position
    if value.chars().count() >= max_len {
        return Err(ValidationError::TooLong {
            field,
            max: max_len,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a record id: positive and within [`MAX_UNITS`].
pub fn validate_id(id: u32) -> ValidationResult<()> {
    if id == 0 || id > MAX_UNITS {
        return Err(ValidationError::OutOfRange {
            field: "id",
            min: 1,
            max: MAX_UNITS as i64,
        });
    }

    Ok(())
}

/// Validates a stock quantity: zero allowed, bounded by [`MAX_UNITS`].
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity > MAX_UNITS {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 0,
            max: MAX_UNITS as i64,
        });
    }

    Ok(())
}

/// Validates a unit price: zero allowed (free samples), bounded by
/// [`MAX_UNITS`].
pub fn validate_price(price: u32) -> ValidationResult<()> {
    if price > MAX_UNITS {
        return Err(ValidationError::OutOfRange {
            field: "price",
            min: 0,
            max: MAX_UNITS as i64,
        });
    }

    Ok(())
}

/// Validates an expiry month (1 through 12).
pub fn validate_month(month: u8) -> ValidationResult<()> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: "expiry month",
            min: 1,
            max: 12,
        });
    }

    Ok(())
}

/// Validates an expiry year ([`MIN_EXPIRY_YEAR`] through
/// [`MAX_EXPIRY_YEAR`]).
pub fn validate_year(year: u16) -> ValidationResult<()> {
    if !(MIN_EXPIRY_YEAR..=MAX_EXPIRY_YEAR).contains(&year) {
        return Err(ValidationError::OutOfRange {
            field: "expiry year",
            min: MIN_EXPIRY_YEAR as i64,
            max: MAX_EXPIRY_YEAR as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Paracetamol").is_ok());
        assert!(validate_name("Dolo650").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("has space").is_err());
        assert!(validate_name("tabbed\tname").is_err());
        assert!(validate_name(&"A".repeat(50)).is_err());
        assert!(validate_name(&"A".repeat(49)).is_ok());
    }

    #[test]
    fn test_validate_company() {
        assert!(validate_company("HealCo").is_ok());
        assert!(validate_company(&"B".repeat(40)).is_err());
        assert!(validate_company(&"B".repeat(39)).is_ok());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(1_000_000).is_ok());

        assert!(validate_id(0).is_err());
        assert!(validate_id(1_000_001).is_err());
    }

    #[test]
    fn test_validate_month_and_year() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());

        assert!(validate_year(2020).is_ok());
        assert!(validate_year(9999).is_ok());
        assert!(validate_year(2019).is_err());
    }

    #[test]
    fn test_validate_quantity_and_price_allow_zero() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_price(0).is_ok());
        assert!(validate_quantity(1_000_001).is_err());
        assert!(validate_price(1_000_001).is_err());
    }
}
