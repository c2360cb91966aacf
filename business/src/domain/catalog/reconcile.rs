use std::collections::HashSet;

use serde::Serialize;

use super::model::{Catalog, CatalogItem};

/// Display-ready intersection of the catalog with one detection pass.
///
/// Derived data only: recompute it from the current detection result
/// instead of storing it, so it can never go stale.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledView {
    pub matched_items: Vec<CatalogItem>,
    pub total_cost: u32,
}

/// Matches detected ids against the catalog.
///
/// Rules:
/// - Catalog order wins; the order ids were detected in is ignored.
/// - Membership is a set test, so repeated ids match an item once.
/// - Ids with no catalog entry are dropped silently. That is the
///   filtering policy, not an error.
pub fn reconcile(catalog: &Catalog, detected_ids: &[u32]) -> Vec<CatalogItem> {
    let detected: HashSet<u32> = detected_ids.iter().copied().collect();

    catalog
        .items()
        .iter()
        .filter(|item| detected.contains(&item.id))
        .cloned()
        .collect()
}

/// Sums the price of the matched items. Empty input costs 0.
pub fn total_cost(matched_items: &[CatalogItem]) -> u32 {
    matched_items.iter().map(|item| item.price).sum()
}

pub fn reconciled_view(catalog: &Catalog, detected_ids: &[u32]) -> ReconciledView {
    let matched_items = reconcile(catalog, detected_ids);
    let total_cost = total_cost(&matched_items);

    ReconciledView {
        matched_items,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn should_match_coke_and_dairy_milk() {
        let view = reconciled_view(&catalog(), &[0, 4]);

        let names: Vec<&str> = view
            .matched_items
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Coke", "Dairy milk"]);
        assert_eq!(view.total_cost, 60);
    }

    #[test]
    fn should_drop_unknown_ids_silently() {
        let view = reconciled_view(&catalog(), &[999]);

        assert!(view.matched_items.is_empty());
        assert_eq!(view.total_cost, 0);
    }

    #[test]
    fn should_match_once_when_id_repeated() {
        let view = reconciled_view(&catalog(), &[0, 0, 0]);

        assert_eq!(view.matched_items.len(), 1);
        assert_eq!(view.matched_items[0].name, "Coke");
        assert_eq!(view.total_cost, 40);
    }

    #[test]
    fn should_return_empty_view_when_nothing_detected() {
        let view = reconciled_view(&catalog(), &[]);

        assert!(view.matched_items.is_empty());
        assert_eq!(view.total_cost, 0);
    }

    #[test]
    fn should_keep_catalog_order_not_detection_order() {
        let matched = reconcile(&catalog(), &[10, 4, 0]);

        let ids: Vec<u32> = matched.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![0, 4, 10]);
    }

    #[test]
    fn should_cost_zero_for_empty_slice() {
        assert_eq!(total_cost(&[]), 0);
    }

    proptest! {
        #[test]
        fn matched_items_follow_catalog_order_without_duplicates(
            detected in proptest::collection::vec(0u32..20, 0..32)
        ) {
            let matched = reconcile(&catalog(), &detected);

            let ids: Vec<u32> = matched.iter().map(|item| item.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(ids, sorted);
        }

        #[test]
        fn every_match_was_detected_and_known(
            detected in proptest::collection::vec(0u32..20, 0..32)
        ) {
            let c = catalog();
            let matched = reconcile(&c, &detected);

            for item in &matched {
                prop_assert!(detected.contains(&item.id));
                prop_assert!(c.find(item.id).is_some());
            }
        }

        #[test]
        fn reconcile_is_idempotent(
            detected in proptest::collection::vec(0u32..20, 0..32)
        ) {
            let c = catalog();

            prop_assert_eq!(reconcile(&c, &detected), reconcile(&c, &detected));
        }

        #[test]
        fn total_cost_is_the_sum_of_matched_prices(
            detected in proptest::collection::vec(0u32..20, 0..32)
        ) {
            let matched = reconcile(&catalog(), &detected);

            let expected: u32 = matched.iter().map(|item| item.price).sum();
            prop_assert_eq!(total_cost(&matched), expected);
        }
    }
}
