// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter application: narrowing a catalog by metadata.
//!
//! Each active field of [`Filters`] becomes one predicate and a sheet must
//! pass all of them, so splitting one `Filters` into several and applying them
//! in any order selects the same sheets.
//!
//! # Dates
//!
//! Bounds accept RFC 3339 instants or `YYYY-MM-DD` dates and are compared as
//! instants, inclusive on both ends. A bound that does not parse excludes
//! every sheet, and a sheet whose `createdAt` does not parse fails any active
//! bound.

use crate::types::{Filters, Sheet};
use crate::utils::parse_instant;
use chrono::{DateTime, Utc};

/// One side of the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateBound {
    Unset,
    At(DateTime<Utc>),
    Invalid,
}

impl DateBound {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => DateBound::Unset,
            Some(raw) => parse_instant(raw).map_or(DateBound::Invalid, DateBound::At),
        }
    }
}

/// `Filters` with blanks dropped and dates parsed once per call.
struct Constraints<'a> {
    category: Option<&'a str>,
    tags: &'a [String],
    author: Option<String>,
    date_from: DateBound,
    date_to: DateBound,
    min_views: u64,
    min_likes: u64,
}

impl<'a> Constraints<'a> {
    fn new(filters: &'a Filters) -> Self {
        let non_empty = |value: &'a Option<String>| value.as_deref().filter(|v| !v.is_empty());
        Constraints {
            category: non_empty(&filters.category),
            tags: &filters.tags,
            author: non_empty(&filters.author).map(str::to_lowercase),
            date_from: DateBound::parse(filters.date_from.as_deref()),
            date_to: DateBound::parse(filters.date_to.as_deref()),
            min_views: filters.min_views.unwrap_or(0),
            min_likes: filters.min_likes.unwrap_or(0),
        }
    }

    fn admits(&self, sheet: &Sheet) -> bool {
        if let Some(category) = self.category {
            if sheet.category != category {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| sheet.tags.contains(tag)) {
            return false;
        }

        if let Some(author) = &self.author {
            if !sheet.author_name.to_lowercase().contains(author.as_str()) {
                return false;
            }
        }

        if !self.admits_date(sheet) {
            return false;
        }

        sheet.views >= self.min_views && sheet.likes >= self.min_likes
    }

    fn admits_date(&self, sheet: &Sheet) -> bool {
        if self.date_from == DateBound::Unset && self.date_to == DateBound::Unset {
            return true;
        }
        let Some(created) = parse_instant(&sheet.created_at) else {
            return false;
        };

        let after_from = match self.date_from {
            DateBound::Unset => true,
            DateBound::At(from) => created >= from,
            DateBound::Invalid => false,
        };
        let before_to = match self.date_to {
            DateBound::Unset => true,
            DateBound::At(to) => created <= to,
            DateBound::Invalid => false,
        };
        after_from && before_to
    }
}

/// Does `sheet` satisfy every active constraint in `filters`?
pub fn sheet_matches(sheet: &Sheet, filters: &Filters) -> bool {
    Constraints::new(filters).admits(sheet)
}

/// Sheets satisfying every active constraint, in their original order.
///
/// ```
/// use sheetdex::{apply_filters, Filters};
/// use sheetdex::testing::git_and_js;
///
/// let sheets = git_and_js();
/// let popular = apply_filters(&sheets, &Filters::new().min_views(75));
/// assert_eq!(popular.len(), 1);
/// assert_eq!(popular[0].title, "Git Commands");
/// ```
pub fn apply_filters(sheets: &[Sheet], filters: &Filters) -> Vec<Sheet> {
    let constraints = Constraints::new(filters);
    let filtered: Vec<Sheet> = sheets
        .iter()
        .filter(|sheet| constraints.admits(sheet))
        .cloned()
        .collect();

    tracing::trace!(before = sheets.len(), after = filtered.len(), "applied filters");
    filtered
}
