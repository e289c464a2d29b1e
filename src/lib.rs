// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cheat-sheet catalog with fuzzy search, filtering and ranking.
//!
//! The engine is a set of pure functions over `&[Sheet]`: nothing here owns
//! global state, and no input is ever mutated. [`SheetStore`] is the one
//! stateful piece; it owns a catalog and writes it back through an injected
//! [`Persistence`] after every change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│  scoring/    │────▶│  search/         │
//! │  (Sheet,    │     │ (score_sheet,│     │ (advanced_search,│
//! │   Filters)  │     │  relation)   │     │  suggestions)    │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                     │
//!        ▼                   ▼                     ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  filter.rs  │     │  related.rs  │     │  sort.rs         │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  store.rs  (SheetStore<P: Persistence>, quick_search) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! A typical results page runs the stages in this order:
//!
//! | Stage            | Function              | Output                 |
//! |------------------|-----------------------|------------------------|
//! | Rank             | [`advanced_search`]   | `SearchOutcome`        |
//! | Narrow           | [`apply_filters`]     | sheets passing filters |
//! | Reorder          | [`sort_sheets`]       | sheets by a `SortKey`  |
//! | Recommend        | [`related_sheets`]    | up to 4 neighbours     |
//!
//! # Usage
//!
//! ```
//! use sheetdex::{advanced_search, apply_filters, Filters, SearchOptions};
//! use sheetdex::testing::git_and_js;
//!
//! let sheets = git_and_js();
//! let git_only = apply_filters(&sheets, &Filters::new().category("Git"));
//! let outcome = advanced_search(&git_only, "commands", &SearchOptions::default());
//! assert_eq!(outcome.len(), 1);
//! ```

mod config;
mod error;
mod filter;
mod fuzzy;
mod related;
pub mod scoring;
mod search;
mod sort;
pub mod store;
mod types;
mod utils;

pub mod testing;

pub use config::{SearchOptions, DEFAULT_FUZZY_THRESHOLD};
pub use error::{Error, Result};
pub use filter::{apply_filters, sheet_matches};
pub use fuzzy::{levenshtein_distance, similarity};
pub use related::{related_sheets, RelatedSheet, DEFAULT_RELATED_LIMIT};
pub use search::{
    advanced_search, highlight_ranges, highlight_terms, quick_search, search_suggestions,
    QuickOrder, DEFAULT_SUGGESTION_LIMIT,
};
pub use sort::{compare_by, sort_sheets, Sortable};
pub use store::{
    sample_catalog, JsonFilePersistence, MemoryPersistence, Persistence, SheetDraft, SheetStore,
    SheetUpdate,
};
pub use types::{
    Filters, MatchField, MatchKind, SearchMatch, SearchOutcome, SearchResult, Section, Sheet,
    SortKey, SortOrder,
};
pub use utils::{collate, normalize, parse_instant};
