//! Edit distance and similarity against an independent implementation.

use proptest::prelude::*;
use sheetdex::{levenshtein_distance, similarity};

fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cé ]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn prop_distance_matches_strsim(a in text(), b in text()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_similarity_in_unit_interval(a in text(), b in text()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }

    #[test]
    fn prop_similarity_symmetric(a in text(), b in text()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn prop_similarity_one_iff_equal(a in text(), b in text()) {
        prop_assert_eq!(similarity(&a, &b) == 1.0, a == b);
    }

    #[test]
    fn prop_similarity_matches_normalized_oracle(a in text(), b in text()) {
        // strsim normalizes by the longer length in chars, as we do
        let expected = strsim::normalized_levenshtein(&a, &b);
        prop_assert!((similarity(&a, &b) - expected).abs() < 1e-12);
    }
}

#[test]
fn test_empty_strings() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("abc", ""), 0.0);
    assert_eq!(levenshtein_distance("", "abc"), 3);
}
