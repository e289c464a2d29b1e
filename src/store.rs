// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store: the catalog as an owned value with pluggable persistence.
//!
//! `SheetStore` holds the sheets in memory and writes the whole catalog back
//! through its [`Persistence`] after every mutation. Tests plug in
//! [`MemoryPersistence`]; the CLI uses [`JsonFilePersistence`].
//!
//! A store that finds nothing persisted starts from the bundled sample
//! catalog and saves it immediately, so the next open sees the same data.

use crate::error::{Error, Result};
use crate::search::{quick_search, QuickOrder};
use crate::types::{Filters, Section, Sheet};
use crate::utils::now_iso;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Bundled demo catalog.
const SAMPLE_CATALOG: &str = include_str!("../data/sample_sheets.json");

/// Default number of trending sheets.
pub const DEFAULT_TRENDING_LIMIT: usize = 6;

/// Parse the bundled demo catalog.
pub fn sample_catalog() -> Result<Vec<Sheet>> {
    Ok(serde_json::from_str(SAMPLE_CATALOG)?)
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Where a store's catalog lives between runs.
pub trait Persistence {
    /// The saved catalog, or `None` if nothing has been saved yet.
    fn load(&mut self) -> Result<Option<Vec<Sheet>>>;

    /// Replace the saved catalog.
    fn save(&mut self, sheets: &[Sheet]) -> Result<()>;
}

/// Keeps the catalog in memory. Counts saves so tests can observe them.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    stored: Option<Vec<Sheet>>,
    saves: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-saved catalog.
    pub fn with_sheets(sheets: Vec<Sheet>) -> Self {
        MemoryPersistence {
            stored: Some(sheets),
            saves: 0,
        }
    }

    pub fn stored(&self) -> Option<&[Sheet]> {
        self.stored.as_deref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Persistence for MemoryPersistence {
    fn load(&mut self) -> Result<Option<Vec<Sheet>>> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, sheets: &[Sheet]) -> Result<()> {
        self.stored = Some(sheets.to_vec());
        self.saves += 1;
        Ok(())
    }
}

/// A JSON array of sheets in a single file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFilePersistence { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFilePersistence {
    fn load(&mut self) -> Result<Option<Vec<Sheet>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let sheets: Vec<Sheet> = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), sheets = sheets.len(), "loaded catalog");
        Ok(Some(sheets))
    }

    fn save(&mut self, sheets: &[Sheet]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(sheets)?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))?;
        debug!(path = %self.path.display(), sheets = sheets.len(), "saved catalog");
        Ok(())
    }
}

// =============================================================================
// EDITS
// =============================================================================

/// Editor input for a new sheet. Counters, ids and timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author_name: String,
    pub sections: Vec<Section>,
}

/// Partial update: `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub sections: Option<Vec<Section>>,
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::InvalidSheet("title must not be empty".to_string()));
    }
    Ok(())
}

// =============================================================================
// STORE
// =============================================================================

/// The catalog plus the persistence it is saved through.
#[derive(Debug)]
pub struct SheetStore<P: Persistence> {
    sheets: Vec<Sheet>,
    persistence: P,
}

impl<P: Persistence> SheetStore<P> {
    /// Load the catalog, seeding it with the sample catalog on first use.
    pub fn open(mut persistence: P) -> Result<Self> {
        let sheets = match persistence.load()? {
            Some(sheets) => sheets,
            None => {
                let sample = sample_catalog()?;
                info!(sheets = sample.len(), "no saved catalog, seeding sample data");
                persistence.save(&sample)?;
                sample
            }
        };
        Ok(SheetStore {
            sheets,
            persistence,
        })
    }

    /// Every sheet, newest-created first for sheets added through the store.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn get(&self, id: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.id == id)
    }

    /// Add a sheet at the front of the catalog.
    pub fn create(&mut self, draft: SheetDraft, author_id: &str) -> Result<Sheet> {
        validate_title(&draft.title)?;

        let now = now_iso();
        let sheet = Sheet {
            id: self.next_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            tags: draft.tags,
            author_name: draft.author_name,
            author_id: author_id.to_string(),
            created_at: now.clone(),
            updated_at: now,
            views: 0,
            likes: 0,
            downloads: 0,
            liked_by: Vec::new(),
            sections: draft.sections,
        };

        let created = sheet.clone();
        self.commit(|sheets| {
            sheets.insert(0, sheet);
            Ok(())
        })?;
        info!(id = %created.id, title = %created.title, "created sheet");
        Ok(created)
    }

    /// Merge `update` into the sheet and bump `updatedAt`.
    pub fn update(&mut self, id: &str, update: SheetUpdate) -> Result<Sheet> {
        if let Some(title) = &update.title {
            validate_title(title)?;
        }

        let updated = self.commit(|sheets| {
            let sheet = find_mut(sheets, id)?;
            if let Some(title) = update.title {
                sheet.title = title;
            }
            if let Some(description) = update.description {
                sheet.description = description;
            }
            if let Some(category) = update.category {
                sheet.category = category;
            }
            if let Some(tags) = update.tags {
                sheet.tags = tags;
            }
            if let Some(sections) = update.sections {
                sheet.sections = sections;
            }
            sheet.updated_at = now_iso();
            Ok(sheet.clone())
        })?;
        info!(id, "updated sheet");
        Ok(updated)
    }

    /// Remove a sheet, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Sheet> {
        let removed = self.commit(|sheets| {
            let position = sheets
                .iter()
                .position(|sheet| sheet.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            Ok(sheets.remove(position))
        })?;
        info!(id, "deleted sheet");
        Ok(removed)
    }

    pub fn increment_views(&mut self, id: &str) -> Result<u64> {
        self.commit(|sheets| {
            let sheet = find_mut(sheets, id)?;
            sheet.views = sheet.views.saturating_add(1);
            Ok(sheet.views)
        })
    }

    pub fn increment_downloads(&mut self, id: &str) -> Result<u64> {
        self.commit(|sheets| {
            let sheet = find_mut(sheets, id)?;
            sheet.downloads = sheet.downloads.saturating_add(1);
            Ok(sheet.downloads)
        })
    }

    /// Like or unlike on behalf of `user_id`. Returns whether the user now likes it.
    pub fn toggle_like(&mut self, id: &str, user_id: &str) -> Result<bool> {
        let liked = self.commit(|sheets| {
            let sheet = find_mut(sheets, id)?;
            if let Some(pos) = sheet.liked_by.iter().position(|u| u == user_id) {
                sheet.liked_by.remove(pos);
                sheet.likes = sheet.likes.saturating_sub(1);
                Ok(false)
            } else {
                sheet.liked_by.push(user_id.to_string());
                sheet.likes = sheet.likes.saturating_add(1);
                Ok(true)
            }
        })?;
        debug!(id, user_id, liked, "toggled like");
        Ok(liked)
    }

    /// Most engaged sheets (views + likes + downloads), highest first.
    pub fn trending(&self, limit: usize) -> Vec<Sheet> {
        let mut sheets = self.sheets.clone();
        sheets.sort_by_key(|sheet| Reverse(sheet.popularity()));
        sheets.truncate(limit);
        sheets
    }

    /// Sheets whose category equals `category`, in catalog order.
    pub fn by_category(&self, category: &str, limit: Option<usize>) -> Vec<Sheet> {
        let matching = self.sheets.iter().filter(|sheet| sheet.category == category);
        match limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.sheets.iter().map(|s| s.category.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct tags across all sheets, sorted.
    pub fn tags(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .sheets
            .iter()
            .flat_map(|s| s.tags.iter().map(String::as_str))
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Substring search with filters and an optional listing order.
    pub fn search(&self, query: &str, filters: &Filters, order: Option<QuickOrder>) -> Vec<Sheet> {
        quick_search(&self.sheets, query, filters, order)
    }

    /// Millisecond timestamp, bumped past any id already taken.
    fn next_id(&self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }

    /// Apply `change` to a copy of the catalog, save it, then swap it in.
    /// On any error the in-memory catalog is left as it was.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Vec<Sheet>) -> Result<T>) -> Result<T> {
        let mut candidate = self.sheets.clone();
        let outcome = change(&mut candidate)?;
        self.persistence.save(&candidate)?;
        self.sheets = candidate;
        Ok(outcome)
    }
}

fn find_mut<'a>(sheets: &'a mut [Sheet], id: &str) -> Result<&'a mut Sheet> {
    sheets
        .iter_mut()
        .find(|sheet| sheet.id == id)
        .ok_or_else(|| Error::NotFound(id.to_string()))
}
