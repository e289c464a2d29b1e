//! How `SearchOptions` change scoring.

use super::common::{make_sheet, with_section};
use sheetdex::{advanced_search, SearchOptions, Sheet};
use std::io::Write;

fn score_of(sheet: &Sheet, query: &str, options: &SearchOptions) -> f64 {
    let outcome = advanced_search(std::slice::from_ref(sheet), query, options);
    outcome
        .ranked()
        .and_then(|r| r.first())
        .map_or(0.0, |r| r.search_score)
}

#[test]
fn test_title_boost_halves_exact_title() {
    let sheet = make_sheet("1", "Tmux Shortcuts");
    let boosted = score_of(&sheet, "tmux", &SearchOptions::default());
    let plain = score_of(&sheet, "tmux", &SearchOptions::default().with_title_boost(false));

    // 100 + word bonus 10 versus 50 + 10
    assert_eq!(boosted, 110.0);
    assert_eq!(plain, 60.0);
}

#[test]
fn test_content_toggle() {
    let sheet = with_section(make_sheet("1", "Shell"), "Loops", "for f in *.txt; do echo $f; done");
    let with_content = score_of(&sheet, "echo", &SearchOptions::default());
    let without = score_of(&sheet, "echo", &SearchOptions::default().with_content(false));

    assert_eq!(with_content, 15.0);
    assert_eq!(without, 0.0);
}

#[test]
fn test_threshold_gates_fuzzy_title() {
    let sheet = make_sheet("1", "kubectl");
    // "kubectx" vs "kubectl": one substitution in seven characters
    let lenient = score_of(&sheet, "kubectx", &SearchOptions::default());
    let strict = score_of(&sheet, "kubectx", &SearchOptions::default().with_fuzzy_threshold(0.9));

    assert!((lenient - 6.0 / 7.0 * 80.0).abs() < 1e-9);
    assert_eq!(strict, 0.0);
}

#[test]
fn test_boost_exact_matches_has_no_effect() {
    let sheet = make_sheet("1", "Regex Cheats");
    let on = SearchOptions::default();
    let off = SearchOptions {
        boost_exact_matches: false,
        ..SearchOptions::default()
    };
    assert_eq!(score_of(&sheet, "regex", &on), score_of(&sheet, "regex", &off));
}

#[test]
fn test_partial_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fuzzyThreshold": 0.9, "includeContent": false }}"#).unwrap();

    let options = SearchOptions::load(file.path()).unwrap();
    assert_eq!(options.fuzzy_threshold, 0.9);
    assert!(!options.include_content);
    assert!(options.boost_title_matches);
    assert!(options.boost_exact_matches);
}
