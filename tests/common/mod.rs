//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use sheetdex::{sample_catalog, Section, Sheet};

// Re-export canonical test utilities from sheetdex::testing
pub use sheetdex::testing::{
    git_and_js, ids, make_sheet, make_sheet_full, with_author, with_dates, with_section,
    with_stats,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// The bundled six-sheet demo catalog.
pub fn sample() -> Vec<Sheet> {
    sample_catalog().expect("bundled catalog parses")
}

/// Look up a sheet by id, panicking with a readable message.
pub fn by_id<'a>(sheets: &'a [Sheet], id: &str) -> &'a Sheet {
    sheets
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no sheet with id {}", id))
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short lowercase words, drawn from a small vocabulary so sheets collide.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "git", "react", "hooks", "css", "flex", "docker", "python", "commands", "guide", "es6",
        "rust", "vim", "café", "résumé",
    ])
    .prop_map(str::to_string)
}

fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|words| words.join(" "))
}

/// An RFC 3339 instant in 2023-2024, or occasionally garbage.
pub fn date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (2023u32..=2024, 1u32..=12, 1u32..=28, 0u32..24)
            .prop_map(|(y, m, d, h)| format!("{:04}-{:02}-{:02}T{:02}:00:00Z", y, m, d, h)),
        1 => Just("not a date".to_string()),
    ]
}

/// A sheet with random text, tags, counters and dates. Ids are set by
/// [`catalog_strategy`].
pub fn sheet_strategy() -> impl Strategy<Value = Sheet> {
    (
        text_strategy(4),
        text_strategy(8),
        prop::sample::select(vec!["Git", "React", "CSS", "DevOps", "Python"]),
        prop::collection::vec(word_strategy(), 0..4),
        prop::sample::select(vec!["Sarah Chen", "Mike Johnson", "Ådne Ølstad"]),
        date_strategy(),
        date_strategy(),
        (0u64..5_000, 0u64..500, 0u64..500),
        prop::collection::vec((text_strategy(3), text_strategy(10)), 0..3),
    )
        .prop_map(
            |(title, description, category, tags, author, created, updated, stats, sections)| {
                let mut sheet = make_sheet("", &title);
                sheet.description = description;
                sheet.category = category.to_string();
                sheet.tags = tags;
                sheet.author_name = author.to_string();
                sheet.author_id = author.to_lowercase().replace(' ', "-");
                sheet.created_at = created;
                sheet.updated_at = updated;
                (sheet.views, sheet.likes, sheet.downloads) = stats;
                sheet.sections = sections
                    .into_iter()
                    .map(|(title, content)| Section {
                        id: None,
                        title,
                        content,
                    })
                    .collect();
                sheet
            },
        )
}

/// Up to `max` sheets with ids "0", "1", ...
pub fn catalog_strategy(max: usize) -> impl Strategy<Value = Vec<Sheet>> {
    prop::collection::vec(sheet_strategy(), 0..max).prop_map(|mut sheets| {
        for (i, sheet) in sheets.iter_mut().enumerate() {
            sheet.id = i.to_string();
        }
        sheets
    })
}
