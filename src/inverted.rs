// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! One pass over the records: lowercase, split on whitespace, append the
//! record position to each token's posting list. Because records are visited
//! in position order, every list comes out ascending for free; the only work
//! left is skipping a position that was already pushed for the same record.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_SORTED**: each posting list is strictly ascending
//! 2. **NON_EMPTY**: every term has at least one position
//! 3. **COMPLETE**: every token of every record is indexed under that record

use crate::contracts::check_index_well_formed;
use crate::types::{InvertedIndex, PostingList};
use std::collections::HashMap;
use tracing::debug;

/// Split text into lowercase whitespace-delimited tokens.
///
/// This is the only normalization the index and the query evaluator know
/// about. Punctuation is part of the token, so `alice@x.com` and `alice` are
/// different words.
///
/// ```ignore
/// let tokens: Vec<_> = tokenize("  Alice SMITH  ").collect();
/// assert_eq!(tokens, vec!["alice", "smith"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Build an inverted index from records.
///
/// Blank records contribute no tokens but still occupy a position, so
/// `total_records` always equals `records.len()`.
pub fn build_inverted_index(records: &[String]) -> InvertedIndex {
    let mut terms: HashMap<String, PostingList> = HashMap::new();

    for (position, record) in records.iter().enumerate() {
        for token in tokenize(record) {
            let list = terms.entry(token).or_default();
            // Same token twice in one record: the position is already last.
            if list.positions.last() != Some(&position) {
                list.positions.push(position);
            }
        }
    }

    let index = InvertedIndex {
        terms,
        total_records: records.len(),
    };

    check_index_well_formed(&index, records);
    debug!(
        records = index.total_records,
        terms = index.term_count(),
        "built inverted index"
    );

    index
}
