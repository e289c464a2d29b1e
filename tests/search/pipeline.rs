//! Rank, filter, sort and recommend, composed the way a results page does.

use super::common::{by_id, ids, sample};
use sheetdex::{
    advanced_search, apply_filters, related_sheets, sheet_matches, sort_sheets, Filters,
    SearchOptions, SearchResult, SortKey, SortOrder, DEFAULT_RELATED_LIMIT,
};

fn ranked(query: &str) -> Vec<SearchResult> {
    advanced_search(&sample(), query, &SearchOptions::default())
        .ranked()
        .expect("non-blank query")
        .to_vec()
}

#[test]
fn test_search_then_filter_by_author() {
    let filters = Filters::new().author("mike");
    let results: Vec<_> = ranked("commands")
        .into_iter()
        .filter(|r| sheet_matches(&r.sheet, &filters))
        .collect();
    assert_eq!(ids(results.iter().map(|r| &r.sheet)), vec!["2", "6"]);
}

#[test]
fn test_search_then_sort_by_relevance_ascending() {
    let results = ranked("git");
    let ascending = sort_sheets(&results, SortKey::Relevance, SortOrder::Asc);
    assert_eq!(ascending.last().unwrap().sheet.id, "2");
    assert!(ascending
        .windows(2)
        .all(|w| w[0].search_score <= w[1].search_score));
}

#[test]
fn test_date_window_is_inclusive_instants() {
    let sheets = sample();
    let filters = Filters::new().date_from("2024-01-05").date_to("2024-01-10");
    // Sheet 2 was created at 14:20 on the 10th, after the midnight bound
    assert_eq!(ids(&apply_filters(&sheets, &filters)), vec!["3", "4"]);

    let filters = Filters::new()
        .date_from("2024-01-05")
        .date_to("2024-01-10T23:59:59Z");
    assert_eq!(ids(&apply_filters(&sheets, &filters)), vec!["2", "3", "4"]);
}

#[test]
fn test_invalid_date_bound_excludes_everything() {
    let sheets = sample();
    let filters = Filters::new().date_from("last tuesday");
    assert!(apply_filters(&sheets, &filters).is_empty());
}

#[test]
fn test_combined_filters() {
    let sheets = sample();
    let filters = Filters::new()
        .tags(["frontend", "python"])
        .min_views(1300)
        .min_likes(80);
    // 1 has frontend but 1250 views; 5 has python but 76 likes
    assert_eq!(ids(&apply_filters(&sheets, &filters)), vec!["3"]);
}

#[test]
fn test_sort_keys_on_sample() {
    let sheets = sample();
    let by = |key, order| ids(&sort_sheets(&sheets, key, order));

    assert_eq!(by(SortKey::Created, SortOrder::Desc), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(by(SortKey::Created, SortOrder::Asc), vec!["6", "5", "4", "3", "2", "1"]);
    assert_eq!(by(SortKey::Title, SortOrder::Asc), vec!["3", "6", "2", "4", "5", "1"]);
    assert_eq!(by(SortKey::Author, SortOrder::Asc), vec!["5", "3", "2", "6", "1", "4"]);
    assert_eq!(by(SortKey::Popular, SortOrder::Desc), vec!["2", "6", "3", "4", "5", "1"]);
    // Plain sheets have no score: every comparison ties and input order stays
    assert_eq!(by(SortKey::Relevance, SortOrder::Desc), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_related_for_react_sheet() {
    let sheets = sample();
    let react = by_id(&sheets, "1");
    let related = related_sheets(react, &sheets, DEFAULT_RELATED_LIMIT);

    let scored: Vec<(&str, u32)> = related
        .iter()
        .map(|r| (r.sheet.id.as_str(), r.relation_score))
        .collect();
    // 4: shared "javascript" tag + same author; 3: shared "frontend" tag
    assert_eq!(scored, vec![("4", 30), ("3", 20)]);
}
