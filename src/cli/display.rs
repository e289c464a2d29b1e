// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sheetdex CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Colors are dropped
//! when stdout is not a TTY or `NO_COLOR` is set, so piped output stays plain.
//!
//! # Theme detection order
//!
//! 1. `SHEETDEX_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use sheetdex::{MatchField, MatchKind, SearchMatch, Sheet};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";

/// What a piece of output is, independent of how it gets colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Box glyphs, ids, list numbers, description matches.
    Muted,
    /// Box labels.
    Heading,
    /// Sheet titles and section headings.
    Title,
    Category,
    Tag,
    /// Section title and content matches.
    Section,
    /// Fuzzy title matches.
    Fuzzy,
    /// Relation scores and highlighted terms.
    Accent,
    /// Scores of 50 and up, list values.
    Good,
    /// Scores of 100 and up, exact title matches.
    Strong,
}

fn light_theme() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| {
        if let Ok(theme) = std::env::var("SHEETDEX_THEME") {
            match theme.to_lowercase().as_str() {
                "light" | "l" => return true,
                "dark" | "d" => return false,
                _ => {}
            }
        }
        // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8)
    })
}

/// True-color escape for `role`: OneDark, or One Light on light terminals.
fn escape(role: Role, light: bool) -> &'static str {
    match (role, light) {
        (Role::Muted, false) => "\x1b[38;2;92;99;112m",
        (Role::Muted, true) => "\x1b[38;2;160;161;167m",
        (Role::Heading, false) => "\x1b[1m\x1b[38;2;86;182;194m",
        (Role::Heading, true) => "\x1b[1m\x1b[38;2;1;132;188m",
        (Role::Title, false) => "\x1b[1m\x1b[38;2;102;217;239m",
        (Role::Title, true) => "\x1b[1m\x1b[38;2;1;112;158m",
        (Role::Category, false) => "\x1b[38;2;229;192;123m",
        (Role::Category, true) => "\x1b[38;2;193;132;1m",
        (Role::Tag, false) => "\x1b[38;2;97;175;239m",
        (Role::Tag, true) => "\x1b[38;2;64;120;242m",
        (Role::Section, false) => "\x1b[38;2;86;182;194m",
        (Role::Section, true) => "\x1b[38;2;1;132;188m",
        (Role::Fuzzy, false) => "\x1b[38;2;198;120;221m",
        (Role::Fuzzy, true) => "\x1b[38;2;166;38;164m",
        (Role::Accent, false) => "\x1b[1m\x1b[38;2;229;192;123m",
        (Role::Accent, true) => "\x1b[1m\x1b[38;2;193;132;1m",
        (Role::Good, false) => "\x1b[38;2;152;195;121m",
        (Role::Good, true) => "\x1b[38;2;80;161;79m",
        (Role::Strong, false) => "\x1b[38;2;166;226;46m",
        (Role::Strong, true) => "\x1b[38;2;68;140;39m",
    }
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in the color for `role`, or return it as is when colors are off.
pub fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", escape(role, light_theme()), text, RESET)
    } else {
        text.to_string()
    }
}

/// Open and close markers for highlighted terms.
pub fn highlight_markers() -> (String, String) {
    if use_colors() {
        (escape(Role::Accent, light_theme()).to_string(), RESET.to_string())
    } else {
        ("[".to_string(), "]".to_string())
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in "…" when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(glyphs: &str) -> String {
    paint(Role::Muted, glyphs)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint(Role::Heading, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance score
pub fn score_value(score: f64) -> String {
    let role = if score >= 100.0 {
        Role::Strong
    } else if score >= 50.0 {
        Role::Good
    } else if score >= 20.0 {
        Role::Category
    } else {
        Role::Muted
    };
    paint(role, &format!("{:>7.1}", score))
}

/// Short label for one match, e.g. `title`, `tags:git`, `section_content@Basics`.
pub fn match_label(m: &SearchMatch) -> String {
    let mut label = m.field.as_str().to_string();
    if let Some(value) = &m.value {
        label.push(':');
        label.push_str(value);
    }
    if let Some(section) = &m.section {
        label.push('@');
        label.push_str(section);
    }
    if let Some(similarity) = m.similarity {
        label.push_str(&format!("~{:.2}", similarity));
    }

    let role = match (m.kind, m.field) {
        (MatchKind::Fuzzy, _) => Role::Fuzzy,
        (_, MatchField::Title) => Role::Strong,
        (_, MatchField::Tags | MatchField::Category) => Role::Tag,
        (_, MatchField::SectionTitle | MatchField::SectionContent) => Role::Section,
        (_, MatchField::Description) => Role::Muted,
    };
    paint(role, &label)
}

/// "1.2k views · 34 likes · 56 downloads"
pub fn counters(sheet: &Sheet) -> String {
    format!(
        "{} views · {} likes · {} downloads",
        compact_count(sheet.views),
        compact_count(sheet.likes),
        compact_count(sheet.downloads)
    )
}

fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Two-line summary of a sheet inside a box: title line, then metadata.
pub fn sheet_rows(sheet: &Sheet, prefix: &str) {
    let head = format!(
        " {}{} {}",
        prefix,
        paint(Role::Title, &truncate(&sheet.title, 48)),
        paint(Role::Muted, &format!("#{}", sheet.id))
    );
    row(&head);

    let meta = format!(
        "   {} · {} · {}",
        paint(Role::Category, &truncate(&sheet.category, 16)),
        truncate(&sheet.author_name, 20),
        counters(sheet)
    );
    row(&meta);

    if !sheet.tags.is_empty() {
        let tags = truncate(&sheet.tags.join(", "), BOX_WIDTH - 4);
        row(&format!("   {}", paint(Role::Tag, &tags)));
    }
}
