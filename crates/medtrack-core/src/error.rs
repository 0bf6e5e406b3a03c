//! # Error Types
//!
//! Domain-specific error types for medtrack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  medtrack-core errors (this file)                                   │
//! │  ├── StoreError       - Store operation failures                    │
//! │  └── ValidationError  - Raw input validation failures               │
//! │                                                                     │
//! │  CLI shell (apps/cli)                                               │
//! │  └── renders either kind as a one-line message and returns to       │
//! │      the menu; no error here ever terminates the process            │
//! │                                                                     │
//! │  Flow: ValidationError → StoreError → message → menu loop           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, capacity, field name)
//! 3. Errors are enum variants, never String
//! 4. Every failed store operation leaves the store unchanged

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Store operation errors.
///
/// These errors represent domain rule violations. All are recoverable by
/// the caller; the shell turns them into user-visible messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this id already exists in the store.
    ///
    /// ## When This Occurs
    /// - Inserting a record whose id is already present
    /// - Merging a branch record whose id collides with the main store
    #[error("A medicine with id {id} already exists")]
    DuplicateId { id: u32 },

    /// No record with this id exists in the store.
    ///
    /// ## When This Occurs
    /// - Update, delete or toggle by an unknown id
    #[error("Medicine with id {id} not found")]
    NotFound { id: u32 },

    /// The store is full.
    ///
    /// ## When This Occurs
    /// - Inserting into a store that already holds `capacity` records.
    ///   Merge never raises this; it reports capacity skips instead.
    #[error("Store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw input doesn't meet domain requirements.
/// Used by the shell for early validation before store logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be shorter than {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Invalid format (e.g., whitespace in a token field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::DuplicateId { id: 101 };
        assert_eq!(err.to_string(), "A medicine with id 101 already exists");

        let err = StoreError::CapacityExceeded { capacity: 200 };
        assert_eq!(err.to_string(), "Store is full (capacity 200)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "expiry month",
            min: 1,
            max: 12,
        };
        assert_eq!(err.to_string(), "expiry month must be between 1 and 12");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
