// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for filter application with arbitrary date strings.
//!
//! Dates come from users and from stored catalogs alike. Whatever they
//! contain, filtering must not panic and must keep an ordered subset.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetdex::{apply_filters, sample_catalog, sort_sheets, Filters, SortKey, SortOrder};

#[derive(Debug, Arbitrary)]
struct FilterInput {
    date_from: Option<String>,
    date_to: Option<String>,
    created_at: String,
    author: Option<String>,
    min_views: Option<u64>,
}

fuzz_target!(|input: FilterInput| {
    let mut sheets = sample_catalog().expect("bundled catalog parses");
    sheets[0].created_at = input.created_at;

    let filters = Filters {
        author: input.author,
        date_from: input.date_from,
        date_to: input.date_to,
        min_views: input.min_views,
        ..Filters::default()
    };

    let kept = apply_filters(&sheets, &filters);
    assert!(kept.len() <= sheets.len());
    let mut rest = sheets.iter();
    for sheet in &kept {
        assert!(rest.any(|s| s.id == sheet.id), "filter reordered sheets");
    }

    for order in [SortOrder::Asc, SortOrder::Desc] {
        let sorted = sort_sheets(&sheets, SortKey::Created, order);
        assert_eq!(sorted.len(), sheets.len());
    }
});
