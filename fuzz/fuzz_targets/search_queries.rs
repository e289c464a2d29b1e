// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary queries and options against the bundled catalog. The ranker must
//! not panic on emoji, RTL text or control characters, and its output must keep
//! the ranking invariants whatever the threshold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetdex::{advanced_search, sample_catalog, search_suggestions, SearchOptions, Sheet};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    fuzzy_threshold: f64,
    include_content: bool,
    boost_title_matches: bool,
    suggestion_limit: u8,
}

fuzz_target!(|input: QueryInput| {
    static CATALOG: std::sync::OnceLock<Vec<Sheet>> = std::sync::OnceLock::new();
    let sheets = CATALOG.get_or_init(|| sample_catalog().expect("bundled catalog parses"));

    let query: String = input.query.chars().take(200).collect();
    let options = SearchOptions {
        fuzzy_threshold: input.fuzzy_threshold,
        include_content: input.include_content,
        boost_exact_matches: true,
        boost_title_matches: input.boost_title_matches,
    };

    let outcome = advanced_search(sheets, &query, &options);
    assert!(outcome.len() <= sheets.len());

    match outcome.ranked() {
        None => assert!(query.trim().is_empty(), "pass-through for non-blank query"),
        Some(ranked) => {
            for result in ranked {
                assert!(result.search_score > 0.0, "non-positive score kept");
            }
            for pair in ranked.windows(2) {
                assert!(pair[0].search_score >= pair[1].search_score, "not descending");
            }
        }
    }

    let limit = usize::from(input.suggestion_limit);
    let suggestions = search_suggestions(sheets, &query, limit);
    assert!(suggestions.len() <= limit);
});
