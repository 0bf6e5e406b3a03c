//! # medtrack-core: Pure Inventory Logic for MedTrack
//!
//! This crate is the **heart** of MedTrack. It contains the whole medicine
//! inventory model as pure functions and value types with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      MedTrack Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Console Shell (apps/cli)                     │  │
//! │  │   menu loop ──► prompt parsing ──► table/detail printing      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │ validated primitives              │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ medtrack-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │  │
//! │  │  │  types  │ │  store  │ │ report  │ │  merge  │ │ display │ │  │
//! │  │  │Medicine │ │  Store  │ │ queries │ │ branch  │ │  rows   │ │  │
//! │  │  │  Flags  │ │ CRUD +  │ │ filters │ │ fold-in │ │ tables  │ │  │
//! │  │  │ Expiry  │ │  sorts  │ │         │ │         │ │         │ │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CLOCK • NO GLOBALS • PURE FUNCTIONS             │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Medicine, ExpiryDate, MedicineFlags)
//! - [`store`] - Capacity-bounded ordered record collection
//! - [`report`] - Read-only searches and reminders
//! - [`merge`] - Branch-into-main merge with duplicate suppression
//! - [`validation`] - Boundary validation of raw input
//! - [`display`] - Stable field-order rendering as plain strings
//! - [`seed`] - Sample data for quick interactive testing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic
//! 2. **No I/O**: The shell owns all prompting and printing
//! 3. **Integer Arithmetic**: Prices and quantities are plain integers
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use medtrack_core::store::Store;
//! use medtrack_core::types::{ExpiryDate, Medicine};
//!
//! let mut store = Store::main();
//! let med = Medicine::new(
//!     101,
//!     "Paracetamol",
//!     "HealCo",
//!     120,
//!     ExpiryDate::new(11, 2025),
//!     5,
//!     false,
//! );
//! store.insert(med).unwrap();
//!
//! assert!(store.find_by_id(101).is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod merge;
pub mod report;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use medtrack_core::Store` instead of
// `use medtrack_core::store::Store`

pub use error::{StoreError, StoreResult, ValidationError};
pub use merge::{merge_into, MergeReport};
pub use store::Store;
pub use types::{ExpiryDate, FieldUpdate, Medicine, MedicineFlags};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum records in the main store.
///
/// ## Business Reason
/// The pharmacy counter terminal tracks a bounded formulary; the bound also
/// keeps merge behavior well-defined (see [`merge::merge_into`]).
pub const MAIN_STORE_CAPACITY: usize = 200;

/// Maximum records in a branch store used as a merge source.
pub const BRANCH_STORE_CAPACITY: usize = 50;

/// Maximum length of a medicine name, in characters (exclusive bound:
/// names may be at most `MAX_NAME_LEN - 1` characters long).
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a company name, same exclusive-bound convention.
pub const MAX_COMPANY_LEN: usize = 40;

/// Smallest expiry year the domain accepts.
pub const MIN_EXPIRY_YEAR: u16 = 2020;

/// Largest expiry year the domain accepts.
pub const MAX_EXPIRY_YEAR: u16 = 9999;

/// Upper bound for ids, unit quantities and unit prices.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing an extra digit); the
/// console shell clamps to this bound before the core ever sees a value.
pub const MAX_UNITS: u32 = 1_000_000;
