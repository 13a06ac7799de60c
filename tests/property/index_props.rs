//! Inverted index property tests.
//!
//! - Posting lists are strictly ascending and non-empty
//! - Every token of every record is indexed under that record
//! - Every posting points at a record that contains the token
//! - Total records matches the input

use crate::common::assert_index_well_formed;
use proptest::prelude::*;
use rollcall::{build_inverted_index, tokenize};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like strings with mixed case so normalization is exercised.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@.]{1,8}").unwrap()
}

/// A record: words joined by runs of spaces or tabs, sometimes padded.
fn record_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word_strategy(), 0..6),
        prop::sample::select(vec![" ", "  ", "\t", " \t "]),
        any::<bool>(),
    )
        .prop_map(|(words, sep, pad)| {
            let joined = words.join(sep);
            if pad {
                format!("  {}  ", joined)
            } else {
                joined
            }
        })
}

fn roster_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(record_strategy(), 0..12)
}

// ============================================================================
// INDEX PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the built index passes the full structural verifier.
    #[test]
    fn prop_index_well_formed(roster in roster_strategy()) {
        let index = build_inverted_index(&roster);
        assert_index_well_formed(&index, &roster);
    }

    /// Property: every word of record i, lowercased, lists i.
    #[test]
    fn prop_index_complete(roster in roster_strategy()) {
        let index = build_inverted_index(&roster);

        for (position, record) in roster.iter().enumerate() {
            for word in record.split_whitespace() {
                let list = index.postings(&word.to_lowercase());
                prop_assert!(
                    list.is_some_and(|l| l.contains(position)),
                    "'{}' from record {} not indexed",
                    word, position
                );
            }
        }
    }

    /// Property: posting lists are strictly ascending.
    #[test]
    fn prop_postings_sorted(roster in roster_strategy()) {
        let index = build_inverted_index(&roster);

        for (term, list) in &index.terms {
            prop_assert!(!list.is_empty(), "empty posting list for '{}'", term);
            for pair in list.positions.windows(2) {
                prop_assert!(
                    pair[0] < pair[1],
                    "posting list for '{}' not ascending: {:?}",
                    term, list.positions
                );
            }
        }
    }

    /// Property: every key is already normalized.
    #[test]
    fn prop_terms_are_lowercase_tokens(roster in roster_strategy()) {
        let index = build_inverted_index(&roster);

        for term in index.terms.keys() {
            prop_assert!(!term.is_empty());
            prop_assert_eq!(term.to_lowercase(), term.clone());
            prop_assert!(!term.chars().any(char::is_whitespace));
        }
    }

    /// Property: total records matches roster size.
    #[test]
    fn prop_total_records(roster in roster_strategy()) {
        let index = build_inverted_index(&roster);
        prop_assert_eq!(index.total_records, roster.len());
    }

    /// Property: building twice gives the same index.
    #[test]
    fn prop_build_deterministic(roster in roster_strategy()) {
        prop_assert_eq!(build_inverted_index(&roster), build_inverted_index(&roster));
    }

    /// Property: tokenize agrees with lowercase + whitespace split.
    #[test]
    fn prop_tokenize_matches_split(record in record_strategy()) {
        let expected: Vec<String> = record
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(tokenize(&record).collect::<Vec<_>>(), expected);
    }
}
