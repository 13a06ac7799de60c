// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full structural check of an inverted index against its records.
//!
//! `verify_index` walks every posting list and re-tokenizes every record, so
//! it costs about as much as building the index again. The build path only
//! runs it under `debug_assertions` (see `contracts`); tests call it directly.

use crate::inverted::tokenize;
use crate::types::InvertedIndex;
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Total records doesn't match the record slice.
    #[error("total_records {claimed} != records.len() {actual}")]
    IncorrectTotalRecords { claimed: usize, actual: usize },

    /// Posting list is empty (every term should have at least one position).
    #[error("posting list for '{term}' is empty")]
    EmptyPostingList { term: String },

    /// Posting list is not strictly ascending.
    #[error("posting list for '{term}' not strictly ascending at index {index}")]
    UnsortedPostingList { term: String, index: usize },

    /// Position points past the end of the record slice.
    #[error("posting list for '{term}' has position {position} >= {total}")]
    PositionOutOfBounds {
        term: String,
        position: usize,
        total: usize,
    },

    /// Record is listed under a token it does not contain.
    #[error("record {position} listed under '{term}' but does not contain it")]
    SpuriousPosting { term: String, position: usize },

    /// Record contains a token but is missing from its posting list.
    #[error("record {position} contains '{term}' but is not indexed under it")]
    MissingPosting { term: String, position: usize },
}

/// Check every index invariant, returning the first violation found.
pub fn verify_index(index: &InvertedIndex, records: &[String]) -> Result<(), InvariantError> {
    if index.total_records != records.len() {
        return Err(InvariantError::IncorrectTotalRecords {
            claimed: index.total_records,
            actual: records.len(),
        });
    }

    for (term, list) in &index.terms {
        if list.is_empty() {
            return Err(InvariantError::EmptyPostingList { term: term.clone() });
        }

        for (i, pair) in list.positions.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(InvariantError::UnsortedPostingList {
                    term: term.clone(),
                    index: i + 1,
                });
            }
        }

        for &position in &list.positions {
            let Some(record) = records.get(position) else {
                return Err(InvariantError::PositionOutOfBounds {
                    term: term.clone(),
                    position,
                    total: records.len(),
                });
            };
            if !tokenize(record).any(|token| &token == term) {
                return Err(InvariantError::SpuriousPosting {
                    term: term.clone(),
                    position,
                });
            }
        }
    }

    for (position, record) in records.iter().enumerate() {
        for token in tokenize(record) {
            let indexed = index
                .postings(&token)
                .is_some_and(|list| list.contains(position));
            if !indexed {
                return Err(InvariantError::MissingPosting {
                    term: token,
                    position,
                });
            }
        }
    }

    Ok(())
}
