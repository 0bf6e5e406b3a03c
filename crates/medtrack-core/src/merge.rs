//! # Branch Merge
//!
//! One-directional fold of a branch store into the main store.
//!
//! ## Merge Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Merge Decision                              │
//! │                                                                     │
//! │  for each branch record, in branch order:                           │
//! │                                                                     │
//! │    name already in main? ──────► skip, report as duplicate          │
//! │         │ no                                                        │
//! │         ▼                                                           │
//! │    main at capacity? ──────────► skip, report as capacity-skipped   │
//! │         │ no                                                        │
//! │         ▼                                                           │
//! │    id already in main? ────────► skip, report as duplicate          │
//! │         │ no                                                        │
//! │         ▼                                                           │
//! │    append a copy to main, report as merged                          │
//! │                                                                     │
//! │  The branch store is NEVER mutated. The branch itself is never      │
//! │  deduplicated: if two branch records share a name, the first one    │
//! │  merged makes the second a duplicate against main.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Merge is deliberately partial-success: filling main up mid-merge is a
//! reported outcome, not an error, and already-merged records stay merged.

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Outcome summary of one merge run.
///
/// Names are carried (not just counts) so the shell can show exactly which
/// records moved and which were passed over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Names appended to the main store, in merge order.
    pub merged: Vec<String>,

    /// Names skipped because main already had a record with that name
    /// (or, rarely, that id; see [`merge_into`]).
    pub skipped_duplicate: Vec<String>,

    /// Names that no longer fit once main reached capacity.
    pub skipped_capacity: Vec<String>,
}

impl MergeReport {
    /// Number of records actually copied into main.
    pub fn merged_count(&self) -> usize {
        self.merged.len()
    }

    /// Number of duplicate-suppressed records.
    pub fn skipped_duplicate_count(&self) -> usize {
        self.skipped_duplicate.len()
    }

    /// Number of records that did not fit.
    pub fn skipped_capacity_count(&self) -> usize {
        self.skipped_capacity.len()
    }

    /// True if nothing was copied and nothing was skipped.
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
            && self.skipped_duplicate.is_empty()
            && self.skipped_capacity.is_empty()
    }
}

/// Folds `branch` into `main`, skipping name duplicates and respecting
/// `main`'s capacity bound.
///
/// ## Behavior
/// - Branch records are visited in branch order
/// - A record is a duplicate iff `main` already holds its exact name;
///   the duplicate check runs before the capacity check, so duplicates
///   found after `main` fills up are still reported as duplicates
/// - Once `main` is full every remaining non-duplicate is reported as
///   capacity-skipped rather than attempted
/// - An id collision under a distinct name is skipped as a duplicate:
///   the unique-id invariant of [`Store`] outranks the merge
///
/// The branch is never mutated; merged records are copies.
pub fn merge_into(main: &mut Store, branch: &Store) -> MergeReport {
    let mut report = MergeReport::default();

    for record in branch.iter() {
        if main.find_by_name(&record.name).is_some() {
            report.skipped_duplicate.push(record.name.clone());
            continue;
        }

        if main.is_full() {
            report.skipped_capacity.push(record.name.clone());
            continue;
        }

        match main.insert(record.clone()) {
            Ok(()) => report.merged.push(record.name.clone()),
            // Same id, different name. Capacity was checked above, so
            // DuplicateId is the only reachable insert failure here.
            Err(_) => report.skipped_duplicate.push(record.name.clone()),
        }
    }

    report
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExpiryDate, Medicine};

    fn med(id: u32, name: &str) -> Medicine {
        Medicine::new(id, name, "TestPharm", 10, ExpiryDate::new(6, 2025), 5, false)
    }

    #[test]
    fn test_merge_suppresses_name_duplicates() {
        let mut main = Store::main();
        main.insert(med(1, "X")).unwrap();

        let mut branch = Store::branch();
        branch.insert(med(201, "X")).unwrap();
        branch.insert(med(202, "Y")).unwrap();

        let report = merge_into(&mut main, &branch);

        let names: Vec<&str> = main.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["X", "Y"]);
        assert_eq!(report.merged, ["Y"]);
        assert_eq!(report.skipped_duplicate, ["X"]);
        assert!(report.skipped_capacity.is_empty());
    }

    #[test]
    fn test_merge_stops_at_capacity_and_reports_overflow() {
        let mut main = Store::with_capacity(2);
        main.insert(med(1, "A")).unwrap();

        let mut branch = Store::branch();
        branch.insert(med(201, "B")).unwrap();
        branch.insert(med(202, "C")).unwrap();

        let report = merge_into(&mut main, &branch);

        assert_eq!(main.len(), 2);
        assert_eq!(report.merged, ["B"]);
        assert_eq!(report.skipped_capacity, ["C"]);
        assert_eq!(report.merged_count(), 1);
        assert_eq!(report.skipped_capacity_count(), 1);
    }

    #[test]
    fn test_duplicate_after_full_still_counts_as_duplicate() {
        let mut main = Store::with_capacity(1);
        main.insert(med(1, "A")).unwrap();

        let mut branch = Store::branch();
        branch.insert(med(201, "B")).unwrap(); // capacity skip
        branch.insert(med(202, "A")).unwrap(); // duplicate, even though full

        let report = merge_into(&mut main, &branch);

        assert_eq!(report.skipped_capacity, ["B"]);
        assert_eq!(report.skipped_duplicate, ["A"]);
        assert!(report.merged.is_empty());
    }

    #[test]
    fn test_branch_internal_collision_first_one_wins() {
        let mut main = Store::main();

        let mut branch = Store::branch();
        branch.insert(med(201, "Dolo650")).unwrap();
        branch.insert(med(202, "Dolo650")).unwrap();

        let report = merge_into(&mut main, &branch);

        assert_eq!(report.merged, ["Dolo650"]);
        assert_eq!(report.skipped_duplicate, ["Dolo650"]);
        assert_eq!(main.len(), 1);
        assert_eq!(main.records()[0].id, 201);
    }

    #[test]
    fn test_id_collision_under_distinct_name_is_skipped() {
        let mut main = Store::main();
        main.insert(med(7, "A")).unwrap();

        let mut branch = Store::branch();
        branch.insert(med(7, "B")).unwrap();

        let report = merge_into(&mut main, &branch);

        assert_eq!(report.skipped_duplicate, ["B"]);
        assert_eq!(main.len(), 1);
    }

    #[test]
    fn test_merge_never_mutates_the_branch() {
        let mut main = Store::main();
        let mut branch = Store::branch();
        branch.insert(med(201, "B")).unwrap();
        let before = branch.clone();

        merge_into(&mut main, &branch);

        assert_eq!(branch.records(), before.records());
    }
}
