//! # Reports
//!
//! Read-only searches and reminders over a [`Store`].
//!
//! Every function here borrows the store immutably and returns either a
//! single record or a lazy iterator in store order (post the most recent
//! sort, if any). Calling a function again restarts the scan; nothing is
//! cached and nothing is mutated.

use crate::store::Store;
use crate::types::Medicine;

// =============================================================================
// Expiry Filter
// =============================================================================

/// Month/year filter for [`search_by_expiry`].
///
/// `None` on either field means "don't filter on this field". The console
/// shell speaks the legacy sentinel convention where `0` means wildcard;
/// [`ExpiryFilter::from_raw`] performs that mapping so the core API stays
/// `Option`-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpiryFilter {
    pub month: Option<u8>,
    pub year: Option<u16>,
}

impl ExpiryFilter {
    /// Builds a filter from sentinel-encoded values: `0` means wildcard.
    pub fn from_raw(month: u8, year: u16) -> Self {
        ExpiryFilter {
            month: (month != 0).then_some(month),
            year: (year != 0).then_some(year),
        }
    }

    /// True if the record passes both field predicates.
    fn matches(&self, medicine: &Medicine) -> bool {
        self.month.map_or(true, |m| medicine.expiry.month == m)
            && self.year.map_or(true, |y| medicine.expiry.year == y)
    }
}

// =============================================================================
// Queries
// =============================================================================

/// First record whose name matches exactly (case-sensitive).
pub fn search_exact_name<'a>(store: &'a Store, name: &str) -> Option<&'a Medicine> {
    store.find_by_name(name).map(|i| &store.records()[i])
}

/// Records whose expiry passes the filter; a fully-wildcard filter
/// matches everything.
pub fn search_by_expiry(
    store: &Store,
    filter: ExpiryFilter,
) -> impl Iterator<Item = &Medicine> + '_ {
    store.iter().filter(move |m| filter.matches(m))
}

/// Records with `quantity <= threshold`. A threshold of 0 matches only
/// zero-stock records.
pub fn low_stock(store: &Store, threshold: u32) -> impl Iterator<Item = &Medicine> + '_ {
    store.iter().filter(move |m| m.quantity <= threshold)
}

/// Records expiring in `year` or any earlier year. The expiry month is
/// deliberately ignored: a record expiring in December of `year` still
/// counts, matching the coarse-grained reminder the pharmacy runs.
pub fn expiring_on_or_before(store: &Store, year: u16) -> impl Iterator<Item = &Medicine> + '_ {
    store.iter().filter(move |m| m.expiry.year <= year)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn seeded_store() -> Store {
        let mut store = Store::main();
        for med in seed::sample_inventory() {
            store.insert(med).unwrap();
        }
        store
    }

    #[test]
    fn test_search_exact_name_is_case_sensitive() {
        let store = seeded_store();

        assert_eq!(
            search_exact_name(&store, "Ibuprofen").map(|m| m.id),
            Some(102)
        );
        assert!(search_exact_name(&store, "ibuprofen").is_none());
        assert!(search_exact_name(&store, "Ibu").is_none());
    }

    #[test]
    fn test_expiry_filter_wildcards() {
        let store = seeded_store();

        // Both wildcards: everything matches
        let all: Vec<_> = search_by_expiry(&store, ExpiryFilter::from_raw(0, 0)).collect();
        assert_eq!(all.len(), store.len());

        // Year only: every 2024 expiry regardless of month
        let y2024: Vec<u32> = search_by_expiry(&store, ExpiryFilter::from_raw(0, 2024))
            .map(|m| m.id)
            .collect();
        assert_eq!(y2024, [102, 103]);

        // Month and year together
        let april: Vec<u32> = search_by_expiry(&store, ExpiryFilter::from_raw(4, 2024))
            .map(|m| m.id)
            .collect();
        assert_eq!(april, [102]);
    }

    #[test]
    fn test_expiry_search_restarts_from_the_top() {
        let store = seeded_store();
        let filter = ExpiryFilter::from_raw(0, 2024);

        let first: Vec<u32> = search_by_expiry(&store, filter).map(|m| m.id).collect();
        let second: Vec<u32> = search_by_expiry(&store, filter).map(|m| m.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let store = seeded_store();

        let low: Vec<u32> = low_stock(&store, 10).map(|m| m.id).collect();
        assert_eq!(low, [103, 104]); // qty 10 and qty 0

        let zero_only: Vec<u32> = low_stock(&store, 0).map(|m| m.id).collect();
        assert_eq!(zero_only, [104]);
    }

    #[test]
    fn test_expiring_on_or_before_ignores_month() {
        let store = seeded_store();

        // 103 expires 02/2024 and 104 expires 08/2023; both count for 2024
        let due: Vec<u32> = expiring_on_or_before(&store, 2024).map(|m| m.id).collect();
        assert_eq!(due, [102, 103, 104]);

        let none: Vec<u32> = expiring_on_or_before(&store, 2020).map(|m| m.id).collect();
        assert!(none.is_empty());
    }
}
