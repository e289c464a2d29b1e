//! Sort composition: permutation, ordering, stability, direction.

use super::common::catalog_strategy;
use proptest::prelude::*;
use sheetdex::{
    advanced_search, compare_by, sort_sheets, SearchOptions, Sheet, SortKey, SortOrder,
};
use std::cmp::Ordering;

fn key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn order_strategy() -> impl Strategy<Value = SortOrder> {
    prop::sample::select(vec![SortOrder::Asc, SortOrder::Desc])
}

fn position(sheets: &[Sheet], id: &str) -> usize {
    sheets.iter().position(|s| s.id == id).unwrap()
}

proptest! {
    #[test]
    fn prop_sort_is_permutation(sheets in catalog_strategy(15), key in key_strategy(), order in order_strategy()) {
        let sorted = sort_sheets(&sheets, key, order);
        let mut before: Vec<_> = sheets.iter().map(|s| s.id.clone()).collect();
        let mut after: Vec<_> = sorted.iter().map(|s| s.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_sorted_and_stable(sheets in catalog_strategy(15), key in key_strategy(), order in order_strategy()) {
        let sorted = sort_sheets(&sheets, key, order);
        for pair in sorted.windows(2) {
            let mut ordering = compare_by(&pair[0], &pair[1], key);
            if order == SortOrder::Desc {
                ordering = ordering.reverse();
            }
            prop_assert_ne!(ordering, Ordering::Greater, "out of order under {}", key);
            if ordering == Ordering::Equal {
                // Ties keep input order in both directions
                prop_assert!(position(&sheets, &pair[0].id) < position(&sheets, &pair[1].id));
            }
        }
    }

    #[test]
    fn prop_unparseable_dates_sort_first_ascending(sheets in catalog_strategy(15)) {
        let sorted = sort_sheets(&sheets, SortKey::Created, SortOrder::Asc);
        let parsed: Vec<bool> = sorted
            .iter()
            .map(|s| sheetdex::parse_instant(&s.created_at).is_some())
            .collect();
        // Once a parseable date appears, no unparseable one follows
        prop_assert!(parsed.windows(2).all(|w| !(w[0] && !w[1])));
    }

    #[test]
    fn prop_relevance_sort_matches_ranking(sheets in catalog_strategy(15), query in "[a-z]{2,6}") {
        let outcome = advanced_search(&sheets, &query, &SearchOptions::default());
        let ranked = outcome.ranked().unwrap().to_vec();
        let resorted = sort_sheets(&ranked, SortKey::Relevance, SortOrder::Desc);
        prop_assert_eq!(resorted, ranked);
    }
}
