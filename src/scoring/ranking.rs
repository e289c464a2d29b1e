// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score ordering and sheet-to-sheet relatedness.
//!
//! Both rankings sort by a single number, highest first, and never break
//! ties. Equal scores keep their input order because `sort_by` is stable.

use crate::types::Sheet;
use std::cmp::Ordering;

/// Same category as the reference sheet.
pub const SAME_CATEGORY_SCORE: u32 = 50;

/// Per tag the candidate shares with the reference sheet.
pub const SHARED_TAG_SCORE: u32 = 20;

/// Same author id as the reference sheet.
pub const SAME_AUTHOR_SCORE: u32 = 10;

/// Compare two scores for a highest-first sort.
///
/// NaN compares equal to everything, which leaves such entries where the
/// stable sort found them.
#[inline]
pub fn compare_scores_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// How related `candidate` is to `reference`.
///
/// `+50` same category, `+20` for each of the candidate's tags that the
/// reference also carries, `+10` same author. Zero means unrelated.
pub fn relation_score(reference: &Sheet, candidate: &Sheet) -> u32 {
    let mut score = 0;

    if candidate.category == reference.category {
        score += SAME_CATEGORY_SCORE;
    }

    let shared = candidate
        .tags
        .iter()
        .filter(|tag| reference.tags.contains(*tag))
        .count() as u32;
    score += shared * SHARED_TAG_SCORE;

    if candidate.author_id == reference.author_id {
        score += SAME_AUTHOR_SCORE;
    }

    score
}
