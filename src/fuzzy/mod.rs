// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Only titles fall back to similarity when the query is not a substring,
//! so a plain two-string Levenshtein is all the engine needs.

mod levenshtein;

pub use levenshtein::*;
