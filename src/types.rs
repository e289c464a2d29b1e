// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog.
//!
//! A [`Sheet`] is the unit everything operates on: search scores it, filters
//! narrow it, sorts reorder it, the store persists it. The JSON shape uses
//! camelCase keys so catalogs exported from the web front end load as-is.
//!
//! # Invariants
//!
//! - **Sheet**: `id` is unique within a catalog and never changes.
//! - **SearchResult**: `search_score > 0`, and it is only comparable with
//!   scores produced by the same query.
//! - **Filters**: every field at its default value means "no constraint".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A titled block of free text inside a sheet, usually code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id used by the front end (e.g. "useState"). Optional in older catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// A cheat sheet.
///
/// Counters are adjusted by the store; the search engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_id: String,
    /// ISO-8601 instant. Parsed on demand; see [`crate::utils::parse_instant`].
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Sheet {
    /// Combined engagement: views + likes + downloads.
    #[inline]
    pub fn popularity(&self) -> u64 {
        self.views
            .saturating_add(self.likes)
            .saturating_add(self.downloads)
    }
}

// =============================================================================
// SEARCH RESULT TYPES
// =============================================================================

/// Which part of a sheet produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Title,
    Description,
    Tags,
    Category,
    SectionTitle,
    SectionContent,
}

impl MatchField {
    /// Matches the serde `rename_all = "snake_case"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Title => "title",
            MatchField::Description => "description",
            MatchField::Tags => "tags",
            MatchField::Category => "category",
            MatchField::SectionTitle => "section_title",
            MatchField::SectionContent => "section_content",
        }
    }
}

/// Substring hit or similarity-threshold hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Diagnostic record of one scoring contribution.
///
/// Only the whole-query checks record a match; per-word bonuses and the
/// popularity boost add to the score silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub field: MatchField,
    #[serde(rename = "type")]
    pub kind: MatchKind,
    /// The tag that matched, for `MatchField::Tags`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Section title, for section matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Title similarity, for fuzzy matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl SearchMatch {
    pub fn exact(field: MatchField) -> Self {
        SearchMatch {
            field,
            kind: MatchKind::Exact,
            value: None,
            section: None,
            similarity: None,
        }
    }

    pub fn fuzzy(field: MatchField, similarity: f64) -> Self {
        SearchMatch {
            field,
            kind: MatchKind::Fuzzy,
            value: None,
            section: None,
            similarity: Some(similarity),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// A sheet annotated with its relevance for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub sheet: Sheet,
    pub search_score: f64,
    pub search_matches: Vec<SearchMatch>,
}

/// What `advanced_search` hands back.
///
/// A blank query is a pass-through: the catalog comes back untouched and
/// unscored. Anything else is scored and ranked.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Unscored(Vec<Sheet>),
    Ranked(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Unscored(sheets) => sheets.len(),
            SearchOutcome::Ranked(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, SearchOutcome::Ranked(_))
    }

    /// The sheets in output order, scored or not.
    pub fn sheets(&self) -> Vec<&Sheet> {
        match self {
            SearchOutcome::Unscored(sheets) => sheets.iter().collect(),
            SearchOutcome::Ranked(results) => results.iter().map(|r| &r.sheet).collect(),
        }
    }

    /// Scored results, or `None` for a pass-through.
    pub fn ranked(&self) -> Option<&[SearchResult]> {
        match self {
            SearchOutcome::Ranked(results) => Some(results),
            SearchOutcome::Unscored(_) => None,
        }
    }
}

// =============================================================================
// FILTERS
// =============================================================================

/// Constraints for [`crate::apply_filters`]. All active constraints are ANDed.
///
/// Dates are kept as the caller supplied them (RFC 3339 or `YYYY-MM-DD`)
/// and parsed when the filter runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    pub category: Option<String>,
    /// A sheet passes if it shares ANY of these tags.
    pub tags: Vec<String>,
    /// Case-insensitive substring of the author name.
    pub author: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub min_views: Option<u64>,
    pub min_likes: Option<u64>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    pub fn min_views(mut self, views: u64) -> Self {
        self.min_views = Some(views);
        self
    }

    pub fn min_likes(mut self, likes: u64) -> Self {
        self.min_likes = Some(likes);
        self
    }

    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
        blank(&self.category)
            && self.tags.is_empty()
            && blank(&self.author)
            && blank(&self.date_from)
            && blank(&self.date_to)
            && self.min_views.unwrap_or(0) == 0
            && self.min_likes.unwrap_or(0) == 0
    }
}

// =============================================================================
// SORTING
// =============================================================================

/// Sort criterion for [`crate::sort_sheets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    Author,
    Category,
    #[default]
    Created,
    Updated,
    Views,
    Likes,
    Downloads,
    Popular,
    Relevance,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        SortKey::Title,
        SortKey::Author,
        SortKey::Category,
        SortKey::Created,
        SortKey::Updated,
        SortKey::Views,
        SortKey::Likes,
        SortKey::Downloads,
        SortKey::Popular,
        SortKey::Relevance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Category => "category",
            SortKey::Created => "created",
            SortKey::Updated => "updated",
            SortKey::Views => "views",
            SortKey::Likes => "likes",
            SortKey::Downloads => "downloads",
            SortKey::Popular => "popular",
            SortKey::Relevance => "relevance",
        }
    }
}

/// Unrecognized keys fall back to `Created`, so parsing never fails.
impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .unwrap_or(SortKey::Created);
        Ok(key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction. Descending unless asked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Only the exact string "asc" selects ascending order.
impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}
