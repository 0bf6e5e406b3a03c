//! # Store
//!
//! The capacity-bounded, ordered medicine collection.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store Operations                              │
//! │                                                                     │
//! │  Shell Action             Store Call              State Change      │
//! │  ────────────             ──────────              ────────────      │
//! │                                                                     │
//! │  Add medicine ──────────► insert(med) ──────────► records.push      │
//! │                                                                     │
//! │  Update field ──────────► update(id, upd) ──────► records[i].field  │
//! │                                                                     │
//! │  Delete by id ──────────► delete(id) ───────────► records.remove(i) │
//! │                                                                     │
//! │  Toggle stock flag ─────► toggle_availability ──► flip one bit      │
//! │                                                                     │
//! │  Sort menu entries ─────► sort_by_* ────────────► reorder in place  │
//! │                                                                     │
//! │  NOTE: every failing call leaves the store byte-for-byte unchanged. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two records share an `id`
//! - `records.len() <= capacity`, always
//! - Insertion order is preserved until an explicit sort; delete compacts
//!   without reordering the survivors

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::types::{FieldUpdate, Medicine};
use crate::{BRANCH_STORE_CAPACITY, MAIN_STORE_CAPACITY};

/// An ordered, capacity-bounded collection of medicine records.
///
/// Replaces the classic fixed-array-plus-count pair with one owned value:
/// the vector carries the length, the `capacity` field carries the bound,
/// and the type enforces the bound on every insert. Two instances exist in
/// a running system, the main store and the branch store; they never alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    records: Vec<Medicine>,
    capacity: usize,
}

impl Store {
    /// Creates an empty store with the given capacity bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Store {
            records: Vec::new(),
            capacity,
        }
    }

    /// Creates an empty main store ([`MAIN_STORE_CAPACITY`] records).
    pub fn main() -> Self {
        Store::with_capacity(MAIN_STORE_CAPACITY)
    }

    /// Creates an empty branch store ([`BRANCH_STORE_CAPACITY`] records).
    pub fn branch() -> Self {
        Store::with_capacity(BRANCH_STORE_CAPACITY)
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if another insert would exceed the capacity bound.
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// The configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The records in store order (insertion order, or the order produced
    /// by the most recent sort).
    pub fn records(&self) -> &[Medicine] {
        &self.records
    }

    /// Iterates the records in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Medicine> {
        self.records.iter()
    }

    /// First-match linear lookup by id.
    pub fn find_by_id(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|m| m.id == id)
    }

    /// First-match linear lookup by exact, case-sensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|m| m.name == name)
    }

    /// The record with the given id, if present.
    pub fn get(&self, id: u32) -> Option<&Medicine> {
        self.find_by_id(id).map(|i| &self.records[i])
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a record, preserving insertion order.
    ///
    /// ## Errors
    /// - [`StoreError::DuplicateId`] if the id is already present
    /// - [`StoreError::CapacityExceeded`] if the store is full
    pub fn insert(&mut self, medicine: Medicine) -> StoreResult<()> {
        if self.find_by_id(medicine.id).is_some() {
            return Err(StoreError::DuplicateId { id: medicine.id });
        }

        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.records.push(medicine);
        Ok(())
    }

    /// Applies one field-level mutation to the record with the given id.
    ///
    /// ## Availability Derivation (quantity path)
    /// [`FieldUpdate::Quantity`] re-derives the `Available` flag in both
    /// directions: true iff the new quantity is positive. This is the only
    /// update variant that touches the flag; the explicit toggle path
    /// ([`Store::toggle_availability`]) stays independent of quantity.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no record has the id
    pub fn update(&mut self, id: u32, update: FieldUpdate) -> StoreResult<()> {
        let idx = self.find_by_id(id).ok_or(StoreError::NotFound { id })?;
        let record = &mut self.records[idx];

        match update {
            FieldUpdate::Name(name) => record.name = name,
            FieldUpdate::Company(company) => record.company = company,
            FieldUpdate::Quantity(quantity) => {
                record.quantity = quantity;
                record.flags.set_available(quantity > 0);
            }
            FieldUpdate::Expiry(expiry) => record.expiry = expiry,
            FieldUpdate::Price(price) => record.price = price,
            FieldUpdate::TogglePrescription => {
                record.flags.toggle_prescription();
            }
        }

        Ok(())
    }

    /// Removes the record with the given id.
    ///
    /// Later records shift down one position, so the surviving sequence
    /// stays contiguous and keeps its relative order.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no record has the id
    pub fn delete(&mut self, id: u32) -> StoreResult<()> {
        let idx = self.find_by_id(id).ok_or(StoreError::NotFound { id })?;
        self.records.remove(idx);
        Ok(())
    }

    /// Flips the `Available` flag regardless of quantity.
    ///
    /// ## Returns
    /// The new flag state.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no record has the id
    pub fn toggle_availability(&mut self, id: u32) -> StoreResult<bool> {
        let idx = self.find_by_id(id).ok_or(StoreError::NotFound { id })?;
        Ok(self.records[idx].flags.toggle_available())
    }

    // =========================================================================
    // Sorts
    // =========================================================================

    /// Reorders ascending by `(expiry year, expiry month)`, soonest first.
    ///
    /// Stable: records with equal expiry keep their current relative order.
    pub fn sort_by_expiry(&mut self) {
        self.records.sort_by_key(|m| m.expiry.key());
    }

    /// Reorders ascending by byte-lexicographic name comparison.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExpiryDate;

    fn med(id: u32, name: &str, quantity: u32, month: u8, year: u16) -> Medicine {
        Medicine::new(
            id,
            name,
            "TestPharm",
            quantity,
            ExpiryDate::new(month, year),
            10,
            false,
        )
    }

    #[test]
    fn test_insert_then_find_returns_record_unchanged() {
        let mut store = Store::main();
        let original = med(101, "Paracetamol", 120, 11, 2025);

        store.insert(original.clone()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(101), Some(&original));
        assert_eq!(store.find_by_name("Paracetamol"), Some(0));
    }

    #[test]
    fn test_duplicate_id_rejected_store_unchanged() {
        let mut store = Store::main();
        store.insert(med(101, "Paracetamol", 120, 11, 2025)).unwrap();

        let err = store.insert(med(101, "Ibuprofen", 60, 4, 2024)).unwrap_err();

        assert_eq!(err, StoreError::DuplicateId { id: 101 });
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "Paracetamol");
    }

    #[test]
    fn test_insert_at_capacity_rejected() {
        let mut store = Store::with_capacity(2);
        store.insert(med(1, "A", 1, 1, 2024)).unwrap();
        store.insert(med(2, "B", 1, 1, 2024)).unwrap();

        let err = store.insert(med(3, "C", 1, 1, 2024)).unwrap_err();

        assert_eq!(err, StoreError::CapacityExceeded { capacity: 2 });
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_compacts_and_preserves_relative_order() {
        let mut store = Store::main();
        store.insert(med(1, "A", 1, 1, 2024)).unwrap();
        store.insert(med(2, "B", 1, 1, 2024)).unwrap();
        store.insert(med(3, "C", 1, 1, 2024)).unwrap();

        store.delete(2).unwrap();

        assert_eq!(store.find_by_id(2), None);
        let names: Vec<&str> = store.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let mut store = Store::main();
        assert_eq!(store.delete(99), Err(StoreError::NotFound { id: 99 }));
    }

    #[test]
    fn test_update_each_field_variant() {
        let mut store = Store::main();
        store.insert(med(7, "Cetirizine", 10, 2, 2024)).unwrap();

        store.update(7, FieldUpdate::Name("Loratadine".into())).unwrap();
        store.update(7, FieldUpdate::Company("Allergix".into())).unwrap();
        store.update(7, FieldUpdate::Price(4)).unwrap();
        store
            .update(7, FieldUpdate::Expiry(ExpiryDate::new(9, 2026)))
            .unwrap();
        store.update(7, FieldUpdate::TogglePrescription).unwrap();

        let m = store.get(7).unwrap();
        assert_eq!(m.name, "Loratadine");
        assert_eq!(m.company, "Allergix");
        assert_eq!(m.price, 4);
        assert_eq!(m.expiry, ExpiryDate::new(9, 2026));
        assert!(m.prescription_required());
    }

    /// Pins the three-path availability semantics: derived on creation,
    /// fully re-derived on quantity update, independent on toggle.
    #[test]
    fn test_availability_three_path_asymmetry() {
        let mut store = Store::main();
        store.insert(med(1, "Amoxicillin", 0, 8, 2023)).unwrap();

        // Path 1: created with zero stock, not available
        assert!(!store.get(1).unwrap().is_available());

        // Path 2: quantity update re-derives, both directions
        store.update(1, FieldUpdate::Quantity(25)).unwrap();
        assert!(store.get(1).unwrap().is_available());
        store.update(1, FieldUpdate::Quantity(0)).unwrap();
        assert!(!store.get(1).unwrap().is_available());

        // Path 3: toggle flips regardless of the zero quantity
        assert!(store.toggle_availability(1).unwrap());
        assert!(store.get(1).unwrap().is_available());
        assert_eq!(store.get(1).unwrap().quantity, 0);

        // A non-quantity update must not re-derive the toggled flag
        store.update(1, FieldUpdate::Price(15)).unwrap();
        assert!(store.get(1).unwrap().is_available());
    }

    #[test]
    fn test_sort_by_expiry_orders_adjacent_pairs() {
        let mut store = Store::main();
        store.insert(med(1, "A", 1, 11, 2025)).unwrap();
        store.insert(med(2, "B", 1, 4, 2024)).unwrap();
        store.insert(med(3, "C", 1, 8, 2023)).unwrap();
        store.insert(med(4, "D", 1, 2, 2024)).unwrap();

        store.sort_by_expiry();

        let records = store.records();
        for pair in records.windows(2) {
            assert!(pair[0].expiry.key() <= pair[1].expiry.key());
        }
        let ids: Vec<u32> = records.iter().map(|m| m.id).collect();
        assert_eq!(ids, [3, 4, 2, 1]);
    }

    #[test]
    fn test_sort_by_name_is_idempotent_and_nondecreasing() {
        let mut store = Store::main();
        store.insert(med(1, "VitaminC", 1, 6, 2026)).unwrap();
        store.insert(med(2, "Cetirizine", 1, 2, 2024)).unwrap();
        store.insert(med(3, "Paracetamol", 1, 11, 2025)).unwrap();

        store.sort_by_name();
        let once: Vec<u32> = store.iter().map(|m| m.id).collect();

        store.sort_by_name();
        let twice: Vec<u32> = store.iter().map(|m| m.id).collect();

        assert_eq!(once, twice);
        for pair in store.records().windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }
}
