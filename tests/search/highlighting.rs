//! Highlighting query words inside sheet text.

use sheetdex::{highlight_ranges, highlight_terms};

#[test]
fn test_every_word_marked() {
    let marked = highlight_terms("docker compose up -d", "compose docker", "<", ">");
    assert_eq!(marked, "<docker> <compose> up -d");
}

#[test]
fn test_overlapping_words_do_not_nest() {
    let marked = highlight_terms("github actions", "git github", "<", ">");
    assert_eq!(marked, "<github> actions");
}

#[test]
fn test_adjacent_matches_merge() {
    assert_eq!(highlight_ranges("gitgit", "git"), vec![0..6]);
}

#[test]
fn test_case_preserved_in_output() {
    let marked = highlight_terms("useEffect and USEEFFECT", "useeffect", "*", "*");
    assert_eq!(marked, "*useEffect* and *USEEFFECT*");
}

#[test]
fn test_multibyte_text() {
    let marked = highlight_terms("Résumé tips for the résumé", "résumé", "[", "]");
    assert_eq!(marked, "[Résumé] tips for the [résumé]");
}

#[test]
fn test_no_match_is_unchanged() {
    assert_eq!(highlight_terms("git status", "docker", "[", "]"), "git status");
}
