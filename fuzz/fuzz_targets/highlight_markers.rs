// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for match highlighting.
//!
//! Ranges must be sorted, disjoint, on char boundaries, and removing the
//! markers must give back the original text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetdex::{highlight_ranges, highlight_terms};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

const OPEN: &str = "\u{1}";
const CLOSE: &str = "\u{2}";

fuzz_target!(|input: HighlightInput| {
    let text: String = input.text.chars().take(500).collect();
    let query: String = input.query.chars().take(50).collect();

    let ranges = highlight_ranges(&text, &query);
    for range in &ranges {
        assert!(range.start < range.end);
        assert!(text.is_char_boundary(range.start) && text.is_char_boundary(range.end));
    }
    for pair in ranges.windows(2) {
        assert!(pair[0].end < pair[1].start, "ranges overlap or touch: {:?}", pair);
    }

    // Marker characters inside the input would make stripping ambiguous
    if text.contains(OPEN) || text.contains(CLOSE) {
        return;
    }
    let marked = highlight_terms(&text, &query, OPEN, CLOSE);
    assert_eq!(marked.replace(OPEN, "").replace(CLOSE, ""), text);
    assert_eq!(marked.matches(OPEN).count(), ranges.len());
});
