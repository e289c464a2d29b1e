// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the normalized similarity built on it.
//!
//! Distances are counted in Unicode scalar values, not bytes, so "café" and
//! "cafe" are one substitution apart.

/// Classic Levenshtein distance: minimum substitutions, insertions and
/// deletions turning `a` into `b`.
///
/// Dynamic programming over the `(len(a)+1) × (len(b)+1)` table, keeping only
/// one row alive at a time.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Similarity in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical (1.0). Callers lower-case both sides first;
/// this function compares characters exactly.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}
