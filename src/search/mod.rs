// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: turning a query into an ordered list of sheets.
//!
//! `advanced_search` is the ranked path used by the results page. The rest
//! are helpers around it: autocomplete suggestions, match highlighting, and
//! the plain substring search the store exposes.

mod highlight;
mod quick;
mod suggest;

pub use highlight::*;
pub use quick::*;
pub use suggest::*;

use crate::config::SearchOptions;
use crate::scoring::ranking::compare_scores_desc;
use crate::scoring::{score_sheet, Query, SheetScore};
use crate::types::{SearchOutcome, SearchResult, Sheet};

/// Score every sheet against `query` and return the positives, best first.
///
/// A blank query returns the catalog untouched ([`SearchOutcome::Unscored`]).
/// Otherwise every sheet is scored with the rules in [`crate::scoring`],
/// sheets scoring `<= 0` are dropped, and the rest are sorted by descending
/// score. Equal scores keep their input order.
///
/// The popularity boost is unconditional, so a sheet with no textual match
/// but at least one view still comes back, near the bottom.
///
/// # Example
///
/// ```
/// use sheetdex::{advanced_search, SearchOptions};
/// use sheetdex::testing::git_and_js;
///
/// let sheets = git_and_js();
/// let outcome = advanced_search(&sheets, "git", &SearchOptions::default());
/// let ranked = outcome.ranked().unwrap();
/// assert_eq!(ranked[0].sheet.title, "Git Commands");
/// assert!(ranked[0].search_score >= 100.0);
/// ```
pub fn advanced_search(sheets: &[Sheet], query: &str, options: &SearchOptions) -> SearchOutcome {
    let Some(query) = Query::parse(query) else {
        return SearchOutcome::Unscored(sheets.to_vec());
    };

    let mut results: Vec<SearchResult> = sheets
        .iter()
        .filter_map(|sheet| {
            let SheetScore { score, matches } = score_sheet(sheet, &query, options);
            (score > 0.0).then(|| SearchResult {
                sheet: sheet.clone(),
                search_score: score,
                search_matches: matches,
            })
        })
        .collect();

    results.sort_by(|a, b| compare_scores_desc(a.search_score, b.search_score));

    tracing::debug!(
        query = %query.term,
        candidates = sheets.len(),
        results = results.len(),
        "advanced search"
    );

    SearchOutcome::Ranked(results)
}
