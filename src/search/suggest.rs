// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions.

use crate::types::Sheet;
use std::collections::HashSet;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Queries shorter than this (in chars) get no suggestions.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

/// Titles, tags and categories containing `query`, case-insensitively.
///
/// Sheets are scanned in order; within a sheet the title comes first, then
/// each tag, then the category. Each distinct string is kept at its first
/// occurrence and the list stops at `limit`.
pub fn search_suggestions(sheets: &[Sheet], query: &str, limit: usize) -> Vec<String> {
    if query.chars().count() < MIN_SUGGESTION_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut suggestions = Vec::new();

    for sheet in sheets {
        let candidates = std::iter::once(sheet.title.as_str())
            .chain(sheet.tags.iter().map(String::as_str))
            .chain(std::iter::once(sheet.category.as_str()));

        for candidate in candidates {
            if suggestions.len() >= limit {
                return suggestions;
            }
            if candidate.to_lowercase().contains(&needle) && seen.insert(candidate) {
                suggestions.push(candidate.to_string());
            }
        }
    }

    suggestions.truncate(limit);
    suggestions
}
