//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::{Section, Sheet};

/// Create a sheet with the given id and title and every other field empty.
///
/// This is the canonical implementation used across all tests.
pub fn make_sheet(id: &str, title: &str) -> Sheet {
    Sheet {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: String::new(),
        tags: vec![],
        author_name: String::new(),
        author_id: String::new(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        views: 0,
        likes: 0,
        downloads: 0,
        liked_by: vec![],
        sections: vec![],
    }
}

/// Create a sheet with category, tags and view count.
pub fn make_sheet_full(id: &str, title: &str, category: &str, tags: &[&str], views: u64) -> Sheet {
    Sheet {
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        views,
        ..make_sheet(id, title)
    }
}

/// Append a section.
pub fn with_section(mut sheet: Sheet, title: &str, content: &str) -> Sheet {
    sheet.sections.push(Section {
        id: None,
        title: title.to_string(),
        content: content.to_string(),
    });
    sheet
}

/// Set the author.
pub fn with_author(mut sheet: Sheet, author_id: &str, author_name: &str) -> Sheet {
    sheet.author_id = author_id.to_string();
    sheet.author_name = author_name.to_string();
    sheet
}

/// Set both timestamps.
pub fn with_dates(mut sheet: Sheet, created_at: &str, updated_at: &str) -> Sheet {
    sheet.created_at = created_at.to_string();
    sheet.updated_at = updated_at.to_string();
    sheet
}

/// Set the engagement counters.
pub fn with_stats(mut sheet: Sheet, views: u64, likes: u64, downloads: u64) -> Sheet {
    sheet.views = views;
    sheet.likes = likes;
    sheet.downloads = downloads;
    sheet
}

/// The two-sheet catalog used throughout the docs:
/// "Git Commands" (100 views) and "JavaScript ES6" (50 views).
pub fn git_and_js() -> Vec<Sheet> {
    vec![
        make_sheet_full("1", "Git Commands", "Git", &["git", "cli"], 100),
        make_sheet_full("2", "JavaScript ES6", "JavaScript", &["javascript"], 50),
    ]
}

/// Ids in order, for compact assertions.
pub fn ids<'a, I>(sheets: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Sheet>,
{
    sheets.into_iter().map(|s| s.id.clone()).collect()
}
