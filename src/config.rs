// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options and the configuration file that carries them.
//!
//! Every field has a default, so `{}` and `{"fuzzyThreshold": 0.5}` are both
//! valid configuration files.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Minimum title similarity for a fuzzy title match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;

/// Knobs for [`crate::advanced_search`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Fuzzy title matches below this similarity contribute nothing.
    pub fuzzy_threshold: f64,
    /// Score section titles and section bodies.
    pub include_content: bool,
    /// Accepted for compatibility with stored configurations; no scoring
    /// rule currently reads it.
    pub boost_exact_matches: bool,
    /// Full title weights (100 exact / 80 fuzzy) instead of half weights.
    pub boost_title_matches: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            include_content: true,
            boost_exact_matches: true,
            boost_title_matches: true,
        }
    }
}

impl SearchOptions {
    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let options: SearchOptions = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), ?options, "loaded search options");
        Ok(options)
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_content(mut self, include: bool) -> Self {
        self.include_content = include;
        self
    }

    pub fn with_title_boost(mut self, boost: bool) -> Self {
        self.boost_title_matches = boost;
        self
    }
}
