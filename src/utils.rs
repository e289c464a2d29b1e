// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing and timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison: lowercase, strip diacritics, collapse whitespace.
///
/// - "Café" → "cafe"
/// - "  Ünïcode   Tips " → "unicode tips"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases and collapses whitespace only. Assumes ASCII or pre-normalized input.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Locale-style string ordering for display sorts.
///
/// Primary strength ignores case and accents ("apple" < "Banana" < "cherry").
/// Strings equal at that level order lowercase first ("git" < "Git").
pub fn collate(a: &str, b: &str) -> Ordering {
    normalize(a)
        .cmp(&normalize(b))
        .then_with(|| case_order(a, b))
}

/// Tertiary comparison: at the first differing char, lowercase wins.
fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return x
                .is_uppercase()
                .cmp(&y.is_uppercase())
                .then_with(|| x.cmp(&y));
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Parse a timestamp as the catalog stores it.
///
/// Accepts RFC 3339 instants ("2024-01-15T10:30:00Z") and bare dates
/// ("2024-01-15", read as midnight UTC). Anything else is `None`.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Current instant in the catalog's timestamp format.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
