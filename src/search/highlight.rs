// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for result snippets.
//!
//! Words are matched literally and case-insensitively. Ranges from different
//! words are merged before markers are inserted, so markers never nest even
//! when query words overlap ("git" and "github").

use std::ops::Range;

/// Query words shorter than this are not highlighted.
pub const MIN_HIGHLIGHT_WORD_CHARS: usize = 2;

/// Byte ranges of `text` matched by any word of `query`, sorted and merged.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let words: Vec<Vec<char>> = query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_HIGHLIGHT_WORD_CHARS)
        .map(|word| word.chars().collect())
        .collect();

    if words.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    for word in &words {
        let mut start = 0;
        while start < text.len() {
            if let Some(len) = match_len_at(text, start, word) {
                ranges.push(start..start + len);
                start += len;
            } else {
                start += text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    merge_ranges(ranges)
}

/// Wrap every match of `query` in `text` with `open` / `close`.
///
/// Returns `text` unchanged for an empty query or text.
///
/// ```
/// use sheetdex::highlight_terms;
///
/// let marked = highlight_terms("Git rebase and git merge", "GIT", "[", "]");
/// assert_eq!(marked, "[Git] rebase and [git] merge");
/// ```
pub fn highlight_terms(text: &str, query: &str, open: &str, close: &str) -> String {
    let ranges = highlight_ranges(text, query);
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        out.push_str(open);
        out.push_str(&text[range.clone()]);
        out.push_str(close);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Byte length of a case-insensitive match of `word` starting at `start`.
fn match_len_at(text: &str, start: usize, word: &[char]) -> Option<usize> {
    let mut chars = text[start..].char_indices();
    for wc in word {
        let (_, tc) = chars.next()?;
        if !tc.to_lowercase().eq(wc.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len() - start, |(offset, _)| offset))
}

fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| (r.start, r.end));
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}
