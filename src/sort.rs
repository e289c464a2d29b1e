// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sort composition: reorder sheets or search results by a named key.
//!
//! Every key compares one value only. Ties are never broken: the sort is
//! stable, so equal elements keep their input order in both directions.

use crate::types::{SearchResult, Sheet, SortKey, SortOrder};
use crate::utils::{collate, parse_instant};
use std::cmp::Ordering;

/// Anything that can be sorted as a sheet.
pub trait Sortable {
    fn sheet(&self) -> &Sheet;

    /// Relevance from a scored query, if any.
    fn search_score(&self) -> Option<f64> {
        None
    }
}

impl Sortable for Sheet {
    fn sheet(&self) -> &Sheet {
        self
    }
}

impl Sortable for SearchResult {
    fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    fn search_score(&self) -> Option<f64> {
        Some(self.search_score)
    }
}

/// Ascending comparison of two items under `key`.
///
/// Text keys use [`collate`]. Dates compare as instants; an unparseable date
/// sorts before every parseable one. `Relevance` treats a missing score as 0.
pub fn compare_by<T: Sortable + ?Sized>(a: &T, b: &T, key: SortKey) -> Ordering {
    let (x, y) = (a.sheet(), b.sheet());
    match key {
        SortKey::Title => collate(&x.title, &y.title),
        SortKey::Author => collate(&x.author_name, &y.author_name),
        SortKey::Category => collate(&x.category, &y.category),
        SortKey::Created => parse_instant(&x.created_at).cmp(&parse_instant(&y.created_at)),
        SortKey::Updated => parse_instant(&x.updated_at).cmp(&parse_instant(&y.updated_at)),
        SortKey::Views => x.views.cmp(&y.views),
        SortKey::Likes => x.likes.cmp(&y.likes),
        SortKey::Downloads => x.downloads.cmp(&y.downloads),
        SortKey::Popular => x.popularity().cmp(&y.popularity()),
        SortKey::Relevance => {
            let (sa, sb) = (a.search_score().unwrap_or(0.0), b.search_score().unwrap_or(0.0));
            sa.partial_cmp(&sb).unwrap_or(Ordering::Equal)
        }
    }
}

/// A reordered copy of `items`.
///
/// ```
/// use sheetdex::{sort_sheets, SortKey, SortOrder};
/// use sheetdex::testing::git_and_js;
///
/// let sorted = sort_sheets(&git_and_js(), SortKey::Views, SortOrder::Asc);
/// assert_eq!(sorted[0].title, "JavaScript ES6");
/// ```
pub fn sort_sheets<T: Sortable + Clone>(items: &[T], key: SortKey, order: SortOrder) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}
