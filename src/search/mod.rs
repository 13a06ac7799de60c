// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean query evaluation over the inverted index.
//!
//! Three strategies, one merge primitive each:
//!
//! | Strategy | Set algebra                      | Missing word means        |
//! |----------|----------------------------------|---------------------------|
//! | `All`    | intersection of posting lists    | result is empty           |
//! | `Any`    | union of posting lists           | contributes nothing       |
//! | `None`   | universe minus union             | removes nothing           |
//!
//! Results are always strictly ascending record positions. An empty query
//! (no words left after trimming) gives `[]` for `All` and `Any` and the whole
//! universe for `None`: no word is contained, so no record is excluded.

pub mod utils;

use crate::contracts::{check_result_in_bounds, check_result_sorted};
use crate::error::QueryError;
use crate::types::{InvertedIndex, Query, Strategy};
use tracing::debug;
use utils::{complement_sorted, intersect_sorted, parse_query, union_sorted};

/// Evaluate `words` against `index` under `strategy`.
///
/// Words are lowercased before lookup, mirroring how records are tokenized.
pub fn search<S: AsRef<str>>(index: &InvertedIndex, words: &[S], strategy: Strategy) -> Vec<usize> {
    let terms = parse_query(words);

    let positions = match strategy {
        Strategy::All => match_all(index, &terms),
        Strategy::Any => match_any(index, &terms),
        Strategy::None => complement_sorted(&match_any(index, &terms), index.total_records),
    };

    check_result_sorted(&positions);
    check_result_in_bounds(&positions, index.total_records);
    debug!(
        %strategy,
        terms = terms.len(),
        matches = positions.len(),
        "evaluated query"
    );

    positions
}

/// Evaluate a parsed [`Query`].
pub fn search_query(index: &InvertedIndex, query: &Query) -> Vec<usize> {
    search(index, &query.words, query.strategy)
}

/// Evaluate with a strategy given by name (`"ALL"`, `"any"`, ...).
///
/// An unknown name is rejected before any lookup happens.
pub fn search_by_name<S: AsRef<str>>(
    index: &InvertedIndex,
    words: &[S],
    strategy: &str,
) -> Result<Vec<usize>, QueryError> {
    let strategy: Strategy = strategy.parse()?;
    Ok(search(index, words, strategy))
}

fn match_all(index: &InvertedIndex, terms: &[String]) -> Vec<usize> {
    let Some((first, rest)) = terms.split_first() else {
        return Vec::new();
    };
    let Some(list) = index.postings(first) else {
        return Vec::new();
    };

    let mut acc = list.positions.clone();
    for term in rest {
        match index.postings(term) {
            Some(list) => acc = intersect_sorted(&acc, &list.positions),
            None => return Vec::new(),
        }
    }
    acc
}

fn match_any(index: &InvertedIndex, terms: &[String]) -> Vec<usize> {
    terms
        .iter()
        .filter_map(|term| index.postings(term))
        .fold(Vec::new(), |acc, list| union_sorted(&acc, &list.positions))
}
