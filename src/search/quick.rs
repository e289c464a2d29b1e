// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unranked substring search, as used by catalog listings.

use crate::filter::apply_filters;
use crate::types::{Filters, Sheet};
use crate::utils::parse_instant;
use std::cmp::Reverse;
use std::str::FromStr;

/// Listing order for [`quick_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickOrder {
    /// likes + views, highest first. Downloads do not count here.
    Popular,
    /// Newest `createdAt` first.
    Recent,
    /// Most downloaded first.
    Downloads,
}

impl FromStr for QuickOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(QuickOrder::Popular),
            "recent" => Ok(QuickOrder::Recent),
            "downloads" => Ok(QuickOrder::Downloads),
            other => Err(format!("unknown listing order '{}'", other)),
        }
    }
}

/// Substring search over title, description, tags and category, then filters,
/// then an optional ordering.
///
/// An empty query keeps every sheet. Without an ordering the catalog order is
/// kept.
pub fn quick_search(
    sheets: &[Sheet],
    query: &str,
    filters: &Filters,
    order: Option<QuickOrder>,
) -> Vec<Sheet> {
    let needle = query.to_lowercase();
    let matched: Vec<Sheet> = if needle.is_empty() {
        sheets.to_vec()
    } else {
        sheets
            .iter()
            .filter(|sheet| {
                sheet.title.to_lowercase().contains(&needle)
                    || sheet.description.to_lowercase().contains(&needle)
                    || sheet.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
                    || sheet.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    };

    let mut results = apply_filters(&matched, filters);

    match order {
        Some(QuickOrder::Popular) => {
            results.sort_by_key(|s| Reverse(s.likes.saturating_add(s.views)));
        }
        Some(QuickOrder::Recent) => {
            results.sort_by_key(|s| Reverse(parse_instant(&s.created_at)));
        }
        Some(QuickOrder::Downloads) => results.sort_by_key(|s| Reverse(s.downloads)),
        None => {}
    }

    results
}
