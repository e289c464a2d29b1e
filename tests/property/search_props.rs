//! Ranking, suggestion and relation invariants over random catalogs.

use super::common::{catalog_strategy, make_sheet, sheet_strategy, with_stats};
use proptest::prelude::*;
use sheetdex::scoring::popularity_boost;
use sheetdex::{
    advanced_search, related_sheets, search_suggestions, SearchOptions, SearchOutcome, Sheet,
};
use std::collections::HashSet;

/// Score of `sheet` searched on its own, zero when it was dropped.
fn score_alone(sheet: Sheet, query: &str) -> f64 {
    advanced_search(&[sheet], query, &SearchOptions::default())
        .ranked()
        .and_then(|ranked| ranked.first().map(|r| r.search_score))
        .unwrap_or(0.0)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["git", "react hooks", "css flex", "café", "guide", "es6"])
            .prop_map(str::to_string),
        "[a-z]{1,8}( [a-z]{1,8})?",
    ]
}

proptest! {
    #[test]
    fn prop_ranked_scores_positive_and_descending(sheets in catalog_strategy(12), query in query_strategy()) {
        let outcome = advanced_search(&sheets, &query, &SearchOptions::default());
        let ranked = outcome.ranked().unwrap();
        prop_assert!(ranked.iter().all(|r| r.search_score > 0.0));
        prop_assert!(ranked.windows(2).all(|w| w[0].search_score >= w[1].search_score));
        prop_assert!(ranked.len() <= sheets.len());
    }

    #[test]
    fn prop_blank_query_passes_through(sheets in catalog_strategy(8), blank in "[ \t\n]{0,4}") {
        let outcome = advanced_search(&sheets, &blank, &SearchOptions::default());
        prop_assert_eq!(outcome, SearchOutcome::Unscored(sheets));
    }

    #[test]
    fn prop_touched_sheets_always_returned(sheets in catalog_strategy(12), query in query_strategy()) {
        let outcome = advanced_search(&sheets, &query, &SearchOptions::default());
        let returned: HashSet<&str> = outcome.sheets().into_iter().map(|s| s.id.as_str()).collect();
        for sheet in sheets.iter().filter(|s| s.popularity() > 0) {
            prop_assert!(returned.contains(sheet.id.as_str()));
        }
    }

    #[test]
    fn prop_popularity_boost_monotonic(views in 0u64..1_000_000, extra in 1u64..1_000) {
        let base = with_stats(make_sheet("a", "A"), views, 0, 0);
        let more = with_stats(make_sheet("a", "A"), views + extra, 0, 0);
        prop_assert!(popularity_boost(&more) > popularity_boost(&base));
    }

    #[test]
    fn prop_more_views_never_scores_lower(sheet in sheet_strategy(), query in query_strategy(), extra in 1u64..10_000) {
        let mut busier = sheet.clone();
        busier.views += extra;
        prop_assert!(score_alone(busier, &query) >= score_alone(sheet, &query));
    }

    #[test]
    fn prop_suggestions_distinct_bounded_and_matching(
        sheets in catalog_strategy(12),
        query in "[a-zé]{0,4}",
        limit in 0usize..8,
    ) {
        let suggestions = search_suggestions(&sheets, &query, limit);
        prop_assert!(suggestions.len() <= limit);

        let distinct: HashSet<&String> = suggestions.iter().collect();
        prop_assert_eq!(distinct.len(), suggestions.len());

        let needle = query.to_lowercase();
        for s in &suggestions {
            prop_assert!(s.to_lowercase().contains(&needle));
        }
        if query.chars().count() < 2 {
            prop_assert!(suggestions.is_empty());
        }
    }

    #[test]
    fn prop_related_excludes_self_and_is_bounded(sheets in catalog_strategy(12), pick in any::<prop::sample::Index>(), limit in 0usize..6) {
        prop_assume!(!sheets.is_empty());
        let reference = &sheets[pick.index(sheets.len())];
        let related = related_sheets(reference, &sheets, limit);

        prop_assert!(related.len() <= limit);
        prop_assert!(related.iter().all(|r| r.sheet.id != reference.id && r.relation_score > 0));
        prop_assert!(related.windows(2).all(|w| w[0].relation_score >= w[1].relation_score));
    }
}
