//! Relevance ranking: which sheets come back and in what order.

use super::common::{by_id, git_and_js, ids, make_sheet, sample, with_stats};
use sheetdex::{advanced_search, MatchField, MatchKind, SearchOptions, SearchOutcome};

fn ranked_ids(sheets: &[sheetdex::Sheet], query: &str) -> Vec<String> {
    let outcome = advanced_search(sheets, query, &SearchOptions::default());
    ids(outcome.sheets())
}

// ============================================================================
// DOCUMENTED EXAMPLE
// ============================================================================

#[test]
fn test_git_query_ranks_git_sheet_first() {
    let sheets = git_and_js();
    let outcome = advanced_search(&sheets, "git", &SearchOptions::default());
    let ranked = outcome.ranked().expect("query is not blank");

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].sheet.title, "Git Commands");
    assert!(ranked[0].search_score >= 100.0);

    // No textual match, only the popularity boost: ln(51) * 2
    assert_eq!(ranked[1].sheet.title, "JavaScript ES6");
    assert!((ranked[1].search_score - 51f64.ln() * 2.0).abs() < 1e-9);
    assert!(ranked[1].search_matches.is_empty());
}

// ============================================================================
// SAMPLE CATALOG
// ============================================================================

#[test]
fn test_sample_single_topic_queries() {
    let sheets = sample();
    for (query, expected) in [("react", "1"), ("git", "2"), ("flexbox", "3"), ("hook", "1")] {
        let order = ranked_ids(&sheets, query);
        assert_eq!(order[0], expected, "query {:?}", query);
        // Every sample sheet has views, so every sheet scores above zero
        assert_eq!(order.len(), sheets.len(), "query {:?}", query);
    }
}

#[test]
fn test_sample_commands_prefers_git_then_docker() {
    let sheets = sample();
    let order = ranked_ids(&sheets, "commands");
    assert_eq!(&order[..2], &["2".to_string(), "6".to_string()]);
}

#[test]
fn test_unmatched_sheets_ordered_by_popularity() {
    let sheets = sample();
    // Nothing contains "xyzzy"; the popularity boost alone decides
    let order = ranked_ids(&sheets, "xyzzy");
    assert_eq!(order, vec!["2", "6", "3", "4", "5", "1"]);
}

#[test]
fn test_multi_word_query_fuzzy_title() {
    let sheets = sample();
    let outcome = advanced_search(&sheets, "docker compose", &SearchOptions::default());
    let top = &outcome.ranked().unwrap()[0];

    assert_eq!(top.sheet.id, "6");
    let title = top
        .search_matches
        .iter()
        .find(|m| m.field == MatchField::Title)
        .expect("fuzzy title match");
    assert_eq!(title.kind, MatchKind::Fuzzy);
    assert!((title.similarity.unwrap() - 0.48).abs() < 1e-9);

    let sections: Vec<_> = top
        .search_matches
        .iter()
        .filter_map(|m| m.section.as_deref())
        .collect();
    assert_eq!(sections, vec!["Docker Compose", "Docker Compose"]);
}

#[test]
fn test_match_trail_for_git() {
    let sheets = sample();
    let outcome = advanced_search(&sheets, "git", &SearchOptions::default());
    let git = &outcome.ranked().unwrap()[0];

    let fields: Vec<MatchField> = git.search_matches.iter().map(|m| m.field).collect();
    assert_eq!(
        fields,
        vec![
            MatchField::Title,
            MatchField::Description,
            MatchField::Tags,
            MatchField::Category,
            MatchField::SectionContent,
            MatchField::SectionContent,
            MatchField::SectionContent,
        ]
    );
    assert_eq!(git.search_matches[2].value.as_deref(), Some("git"));
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_blank_query_is_pass_through() {
    let sheets = sample();
    for query in ["", "   ", "\t\n"] {
        let outcome = advanced_search(&sheets, query, &SearchOptions::default());
        assert_eq!(outcome, SearchOutcome::Unscored(sheets.clone()));
    }
}

#[test]
fn test_untouched_unmatched_sheet_is_dropped() {
    let sheets = vec![
        with_stats(make_sheet("a", "Rust Traits"), 5, 0, 0),
        make_sheet("b", "Zzz"),
    ];
    let outcome = advanced_search(&sheets, "rust", &SearchOptions::default());
    assert_eq!(ids(outcome.sheets()), vec!["a"]);
}

#[test]
fn test_query_case_and_padding_ignored() {
    let sheets = sample();
    let plain = advanced_search(&sheets, "docker", &SearchOptions::default());
    let shouty = advanced_search(&sheets, "  DOCKER ", &SearchOptions::default());
    assert_eq!(plain, shouty);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let sheets = vec![
        make_sheet("first", "Vim"),
        make_sheet("second", "Vim"),
        make_sheet("third", "Vim"),
    ];
    let order = ranked_ids(&sheets, "vim");
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_input_not_mutated() {
    let sheets = sample();
    let before = sheets.clone();
    let _ = advanced_search(&sheets, "git", &SearchOptions::default());
    assert_eq!(sheets, before);
    assert_eq!(by_id(&sheets, "2").views, 2100);
}
