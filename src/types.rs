// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a roster index.
//!
//! Records are plain lines of text addressed by position. The inverted index
//! maps each lowercased token to the positions of the records that contain it,
//! and a query pairs the words a user typed with one of three boolean
//! strategies.
//!
//! # Invariants
//!
//! 1. **POSTINGS_SORTED**: every posting list is strictly ascending (no duplicates)
//! 2. **POSTINGS_IN_BOUNDS**: every position is `< total_records`
//! 3. **NON_EMPTY**: every indexed token has at least one position
//! 4. **COMPLETE**: position `p` is under token `w` iff record `p` contains `w`
//!
//! Break these and the set algebra in `search` returns garbage.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One line of input: a person entry such as `"Alice Smith alice@x.com"`.
pub type Record = String;

/// Positions of every record containing a token.
///
/// Stored as a strictly ascending `Vec` rather than a hash set so that the
/// boolean strategies can merge lists in a single linear pass and the
/// output order falls out of the data layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    /// Record positions, strictly ascending
    pub positions: Vec<usize>,
}

impl PostingList {
    /// Number of distinct records containing the token.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }
}

/// The inverted index: token → posting list.
///
/// Built once from a static snapshot of records and never mutated afterwards.
/// `total_records` is the universe that NONE queries complement against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvertedIndex {
    /// Map from lowercased token to posting list
    pub terms: HashMap<String, PostingList>,
    /// Number of records the index was built from
    pub total_records: usize,
}

impl InvertedIndex {
    /// Posting list for an already-normalized token.
    pub fn postings(&self, token: &str) -> Option<&PostingList> {
        self.terms.get(token)
    }

    /// Number of distinct tokens.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// How the words of a query combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Record must contain every query word (intersection)
    All,
    /// Record must contain at least one query word (union)
    Any,
    /// Record must contain none of the query words (complement of union)
    None,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const VARIANTS: [Strategy; 3] = [Strategy::All, Strategy::Any, Strategy::None];

    /// Upper-case name as shown in the menu prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::All => "ALL",
            Strategy::Any => "ANY",
            Strategy::None => "NONE",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = QueryError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Strategy::All),
            "ANY" => Ok(Strategy::Any),
            "NONE" => Ok(Strategy::None),
            _ => Err(QueryError::UnknownStrategy {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// A single search request: the words as typed plus a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Raw words in input order; casing is kept for display only
    pub words: Vec<String>,
    pub strategy: Strategy,
}

impl Query {
    pub fn new(words: Vec<String>, strategy: Strategy) -> Self {
        Self { words, strategy }
    }

    /// Split a typed line on runs of whitespace.
    pub fn parse(line: &str, strategy: Strategy) -> Self {
        Self::new(
            line.split_whitespace().map(str::to_string).collect(),
            strategy,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.trim().is_empty())
    }
}

/// A matched record, as handed to display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub position: usize,
    pub record: &'a str,
}
