// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "You might also like": sheets related to the one being viewed.

use crate::scoring::ranking::relation_score;
use crate::types::Sheet;
use serde::{Deserialize, Serialize};

/// Default number of related sheets shown.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// A sheet with its relatedness to the reference sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSheet {
    #[serde(flatten)]
    pub sheet: Sheet,
    pub relation_score: u32,
}

/// The `limit` sheets most related to `reference`, best first.
///
/// The reference itself (matched by id) is skipped, and so is every sheet
/// scoring zero. See [`relation_score`] for the weights.
pub fn related_sheets(reference: &Sheet, all: &[Sheet], limit: usize) -> Vec<RelatedSheet> {
    let mut related: Vec<RelatedSheet> = all
        .iter()
        .filter(|sheet| sheet.id != reference.id)
        .filter_map(|sheet| {
            let score = relation_score(reference, sheet);
            (score > 0).then(|| RelatedSheet {
                sheet: sheet.clone(),
                relation_score: score,
            })
        })
        .collect();

    related.sort_by(|a, b| b.relation_score.cmp(&a.relation_score));
    related.truncate(limit);
    related
}
