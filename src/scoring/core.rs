// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! # Weights
//!
//! | Rule                                   | Score                         |
//! |----------------------------------------|-------------------------------|
//! | Title contains query                   | 100 (50 without title boost)  |
//! | Title similar to query (≥ threshold)   | sim × 80 (× 40 without boost) |
//! | Description contains query             | 30                            |
//! | Tag contains query or any query word   | 40 per tag                    |
//! | Category contains query                | 35                            |
//! | Section title contains query           | 25 per section                |
//! | Section content contains query         | 15 per section                |
//! | Query word (> 2 chars) in title        | 10 per word                   |
//! | Query word in description              | 5 per word                    |
//! | Query word in any tag                  | 8 per word                    |
//! | Popularity                             | ln(views+likes+downloads+1)×2 |
//!
//! The whole-query rules and the per-word rules both fire on the same text.
//! A one-word query "git" against the title "Git Commands" earns 100 + 10.

use crate::config::SearchOptions;
use crate::fuzzy::similarity;
use crate::types::{MatchField, SearchMatch, Sheet};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Title contains the whole query.
pub const TITLE_EXACT_SCORE: f64 = 100.0;

/// Title contains the whole query, title boost disabled.
pub const TITLE_EXACT_SCORE_UNBOOSTED: f64 = 50.0;

/// Multiplier for title similarity on a fuzzy title match.
pub const TITLE_FUZZY_WEIGHT: f64 = 80.0;

/// Multiplier for title similarity, title boost disabled.
pub const TITLE_FUZZY_WEIGHT_UNBOOSTED: f64 = 40.0;

pub const DESCRIPTION_SCORE: f64 = 30.0;
pub const TAG_SCORE: f64 = 40.0;
pub const CATEGORY_SCORE: f64 = 35.0;
pub const SECTION_TITLE_SCORE: f64 = 25.0;
pub const SECTION_CONTENT_SCORE: f64 = 15.0;

/// Per-word bonuses, only for words longer than [`MIN_BONUS_WORD_CHARS`] - 1 chars.
pub const WORD_TITLE_BONUS: f64 = 10.0;
pub const WORD_DESCRIPTION_BONUS: f64 = 5.0;
pub const WORD_TAG_BONUS: f64 = 8.0;

/// Words shorter than this earn no per-word bonus.
pub const MIN_BONUS_WORD_CHARS: usize = 3;

/// Multiplier on the natural log of engagement.
pub const POPULARITY_WEIGHT: f64 = 2.0;

// =============================================================================
// QUERY
// =============================================================================

/// A query ready for scoring: lower-cased, trimmed, split into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The whole query, used for substring checks.
    pub term: String,
    /// Whitespace-separated words of `term`. Never empty strings.
    pub words: Vec<String>,
}

impl Query {
    /// `None` for an empty or all-whitespace query.
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        let words = term.split_whitespace().map(str::to_string).collect();
        Some(Query { term, words })
    }

    /// Words long enough to earn per-word bonuses.
    fn bonus_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| word.chars().count() >= MIN_BONUS_WORD_CHARS)
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Score and match trail for one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetScore {
    pub score: f64,
    pub matches: Vec<SearchMatch>,
}

/// `ln(views + likes + downloads + 1) × 2`. Zero only for a sheet nobody touched.
pub fn popularity_boost(sheet: &Sheet) -> f64 {
    (sheet.popularity() as f64 + 1.0).ln() * POPULARITY_WEIGHT
}

/// Apply every rule in the weight table to one sheet.
pub fn score_sheet(sheet: &Sheet, query: &Query, options: &SearchOptions) -> SheetScore {
    let term = query.term.as_str();
    let mut score = 0.0;
    let mut matches = Vec::new();

    let title = sheet.title.to_lowercase();
    if title.contains(term) {
        score += if options.boost_title_matches {
            TITLE_EXACT_SCORE
        } else {
            TITLE_EXACT_SCORE_UNBOOSTED
        };
        matches.push(SearchMatch::exact(MatchField::Title));
    } else {
        let sim = similarity(&title, term);
        if sim >= options.fuzzy_threshold {
            let weight = if options.boost_title_matches {
                TITLE_FUZZY_WEIGHT
            } else {
                TITLE_FUZZY_WEIGHT_UNBOOSTED
            };
            score += sim * weight;
            matches.push(SearchMatch::fuzzy(MatchField::Title, sim));
        }
    }

    let description = sheet.description.to_lowercase();
    if description.contains(term) {
        score += DESCRIPTION_SCORE;
        matches.push(SearchMatch::exact(MatchField::Description));
    }

    let tags: Vec<String> = sheet.tags.iter().map(|tag| tag.to_lowercase()).collect();
    for (tag, lowered) in sheet.tags.iter().zip(&tags) {
        let hit = lowered.contains(term) || query.words.iter().any(|w| lowered.contains(w.as_str()));
        if hit {
            score += TAG_SCORE;
            matches.push(SearchMatch::exact(MatchField::Tags).with_value(tag.as_str()));
        }
    }

    if sheet.category.to_lowercase().contains(term) {
        score += CATEGORY_SCORE;
        matches.push(SearchMatch::exact(MatchField::Category));
    }

    if options.include_content {
        for section in &sheet.sections {
            if section.title.to_lowercase().contains(term) {
                score += SECTION_TITLE_SCORE;
                matches.push(
                    SearchMatch::exact(MatchField::SectionTitle).in_section(section.title.as_str()),
                );
            }
            if section.content.to_lowercase().contains(term) {
                score += SECTION_CONTENT_SCORE;
                matches.push(
                    SearchMatch::exact(MatchField::SectionContent)
                        .in_section(section.title.as_str()),
                );
            }
        }
    }

    for word in query.bonus_words() {
        if title.contains(word) {
            score += WORD_TITLE_BONUS;
        }
        if description.contains(word) {
            score += WORD_DESCRIPTION_BONUS;
        }
        if tags.iter().any(|tag| tag.contains(word)) {
            score += WORD_TAG_BONUS;
        }
    }

    score += popularity_boost(sheet);

    SheetScore { score, matches }
}
