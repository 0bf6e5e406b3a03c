//! # Domain Types
//!
//! Core domain types used throughout MedTrack.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Medicine     │   │   ExpiryDate    │   │ MedicineFlags   │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (u32)       │   │  month (1..12)  │   │  bits (u8)      │    │
//! │  │  name           │   │  year (>=2020)  │   │  0b01 available │    │
//! │  │  quantity       │   │  orders by      │   │  0b10 rx-only   │    │
//! │  │  expiry, price  │   │  (year, month)  │   │                 │    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘    │
//! │                                                                     │
//! │  ┌─────────────────┐                                                │
//! │  │   FieldUpdate   │  One store mutation per variant: rename,       │
//! │  │  ─────────────  │  recompany, requantify, re-expire, re-price,   │
//! │  │  enum           │  toggle the prescription flag                  │
//! │  └─────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Availability Semantics (load-bearing, do not "fix")
//! The `Available` flag has three distinct write paths:
//! 1. Creation: set iff `quantity > 0`
//! 2. Quantity update: fully re-derived, both directions
//! 3. Explicit toggle: flipped regardless of quantity
//!
//! Paths 1 and 2 derive; path 3 is independent and is never re-derived by
//! later non-quantity mutations. Tests pin all three paths.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Expiry Date
// =============================================================================

/// A month-granularity expiry date.
///
/// ## Ordering
/// Total order by `(year, month)`, soonest first. Implemented by hand so
/// the declaration order of the fields can follow the display order
/// (`MM/YYYY`) without affecting comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryDate {
    /// Calendar month, 1 through 12.
    pub month: u8,

    /// Four-digit year, 2020 or later in this domain.
    pub year: u16,
}

impl ExpiryDate {
    /// Creates an expiry date. Range checking happens at the boundary
    /// (see [`crate::validation`]); the core trusts its inputs.
    #[inline]
    pub const fn new(month: u8, year: u16) -> Self {
        ExpiryDate { month, year }
    }

    /// The sort key: year first, then month.
    #[inline]
    pub const fn key(&self) -> (u16, u8) {
        (self.year, self.month)
    }
}

impl Ord for ExpiryDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for ExpiryDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExpiryDate {
    /// Renders as zero-padded `MM/YYYY`, e.g. `04/2024`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

// =============================================================================
// Medicine Flags
// =============================================================================

/// Bit positions for [`MedicineFlags`].
const FLAG_AVAILABLE: u8 = 0b01;
const FLAG_PRESCRIPTION: u8 = 0b10;

/// A two-bit flag set: availability and prescription requirement.
///
/// ## Why a bitset and not two bools?
/// The flags are independent attributes with identical get/set/toggle
/// shapes; a small bitset keeps that symmetry explicit and keeps the
/// serialized form a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedicineFlags(u8);

impl MedicineFlags {
    /// No flags set: not available, no prescription required.
    #[inline]
    pub const fn empty() -> Self {
        MedicineFlags(0)
    }

    /// Builds a flag set from the two attributes.
    pub const fn new(available: bool, prescription_required: bool) -> Self {
        let mut bits = 0;
        if available {
            bits |= FLAG_AVAILABLE;
        }
        if prescription_required {
            bits |= FLAG_PRESCRIPTION;
        }
        MedicineFlags(bits)
    }

    #[inline]
    pub const fn is_available(&self) -> bool {
        self.0 & FLAG_AVAILABLE != 0
    }

    #[inline]
    pub const fn prescription_required(&self) -> bool {
        self.0 & FLAG_PRESCRIPTION != 0
    }

    /// Sets the availability bit to an explicit value.
    pub fn set_available(&mut self, available: bool) {
        if available {
            self.0 |= FLAG_AVAILABLE;
        } else {
            self.0 &= !FLAG_AVAILABLE;
        }
    }

    /// Flips the availability bit; returns the new state.
    pub fn toggle_available(&mut self) -> bool {
        self.0 ^= FLAG_AVAILABLE;
        self.is_available()
    }

    /// Flips the prescription bit; returns the new state.
    pub fn toggle_prescription(&mut self) -> bool {
        self.0 ^= FLAG_PRESCRIPTION;
        self.prescription_required()
    }
}

// =============================================================================
// Medicine
// =============================================================================

/// One tracked medicine record.
///
/// ## Identity
/// `id` is the natural key, unique within a [`crate::store::Store`].
/// `name` is a secondary key: exact-match name search and merge duplicate
/// detection treat it as unique in practice, though the store does not
/// enforce name uniqueness on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Unique positive identifier within a store.
    pub id: u32,

    /// Medicine name. Single whitespace-free token, non-empty.
    pub name: String,

    /// Manufacturer name. Descriptive only.
    pub company: String,

    /// Units in stock.
    pub quantity: u32,

    /// Month-granularity expiry date.
    pub expiry: ExpiryDate,

    /// Price per unit, plain integer currency units.
    pub price: u32,

    /// Availability / prescription flag set.
    pub flags: MedicineFlags,
}

impl Medicine {
    /// Creates a record, deriving initial availability from the quantity.
    ///
    /// ## Availability Derivation (creation path)
    /// `Available` starts true iff `quantity > 0`. After creation the flag
    /// is only re-derived by quantity updates, never by other mutations;
    /// see the module docs for the full three-path semantics.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        company: impl Into<String>,
        quantity: u32,
        expiry: ExpiryDate,
        price: u32,
        prescription_required: bool,
    ) -> Self {
        Medicine {
            id,
            name: name.into(),
            company: company.into(),
            quantity,
            expiry,
            price,
            flags: MedicineFlags::new(quantity > 0, prescription_required),
        }
    }

    /// Convenience accessor for the availability flag.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.flags.is_available()
    }

    /// Convenience accessor for the prescription flag.
    #[inline]
    pub fn prescription_required(&self) -> bool {
        self.flags.prescription_required()
    }
}

// =============================================================================
// Field Update
// =============================================================================

/// A single field-level mutation applied by [`crate::store::Store::update`].
///
/// One variant per entry in the update menu. `Quantity` is the only
/// variant that touches the availability flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the medicine name.
    Name(String),

    /// Replace the company name.
    Company(String),

    /// Replace the stock quantity and fully re-derive `Available`
    /// (true iff the new quantity is positive).
    Quantity(u32),

    /// Replace the expiry month and year together.
    Expiry(ExpiryDate),

    /// Replace the unit price.
    Price(u32),

    /// Flip the prescription-required flag.
    TogglePrescription,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_date_orders_by_year_then_month() {
        let a = ExpiryDate::new(12, 2024);
        let b = ExpiryDate::new(1, 2025);
        let c = ExpiryDate::new(3, 2025);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_expiry_date_display_zero_pads() {
        assert_eq!(ExpiryDate::new(4, 2024).to_string(), "04/2024");
        assert_eq!(ExpiryDate::new(11, 2025).to_string(), "11/2025");
    }

    #[test]
    fn test_flags_are_independent_bits() {
        let mut flags = MedicineFlags::new(true, true);
        assert!(flags.is_available());
        assert!(flags.prescription_required());

        assert!(!flags.toggle_available());
        // Toggling availability must not disturb the prescription bit
        assert!(flags.prescription_required());

        assert!(!flags.toggle_prescription());
        assert!(!flags.is_available());
    }

    #[test]
    fn test_new_medicine_derives_availability_from_quantity() {
        let expiry = ExpiryDate::new(8, 2023);
        let in_stock = Medicine::new(1, "Amoxicillin", "BioPharm", 40, expiry, 12, true);
        let out_of_stock = Medicine::new(2, "Amoxicillin", "BioPharm", 0, expiry, 12, true);

        assert!(in_stock.is_available());
        assert!(!out_of_stock.is_available());
        assert!(out_of_stock.prescription_required());
    }

    #[test]
    fn test_medicine_serializes_with_stable_field_names() {
        let med = Medicine::new(101, "Paracetamol", "HealCo", 120, ExpiryDate::new(11, 2025), 5, false);
        let json = serde_json::to_value(&med).unwrap();

        assert_eq!(json["id"], 101);
        assert_eq!(json["name"], "Paracetamol");
        assert_eq!(json["expiry"]["month"], 11);
        assert_eq!(json["expiry"]["year"], 2025);
        assert_eq!(json["price"], 5);
    }
}
