// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and title similarity.
//!
//! Checks the metric properties the scorer leans on: bounded, symmetric,
//! zero only for equal strings, and never below the length difference.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetdex::{levenshtein_distance, similarity};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
}

fuzz_target!(|input: PairInput| {
    // Quadratic kernel: cap lengths (in chars) to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();

    let distance = levenshtein_distance(&a, &b);
    let (la, lb) = (a.chars().count(), b.chars().count());

    assert_eq!(distance, levenshtein_distance(&b, &a), "distance not symmetric");
    assert!(distance <= la.max(lb), "distance {} exceeds longer length", distance);
    assert!(distance >= la.abs_diff(lb), "distance {} below length difference", distance);
    assert_eq!(distance == 0, a == b);

    let sim = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&sim), "similarity {} out of range", sim);
    assert_eq!(sim, similarity(&b, &a));
});
