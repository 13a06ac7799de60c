// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for the query evaluator.
//!
//! Query word normalization and the three merge primitives over sorted
//! posting lists. All inputs must be strictly ascending; all outputs are.

use crate::inverted::tokenize;

/// Normalize raw query words with the record tokenizer. Order is kept.
///
/// A word containing whitespace splits into several terms, so `["Alice Jones"]`
/// and `["Alice", "Jones"]` are the same query. Blank words vanish.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query(&["Alice", "  ", "JONES smith"]);
/// assert_eq!(terms, vec!["alice", "jones", "smith"]);
/// ```
pub fn parse_query<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().flat_map(|w| tokenize(w.as_ref())).collect()
}

/// Positions present in both lists.
pub fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Positions present in either list.
pub fn union_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// `[0, universe)` minus the positions in `excluded`.
pub fn complement_sorted(excluded: &[usize], universe: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(universe.saturating_sub(excluded.len()));
    let mut skip = excluded.iter().copied().peekable();
    for position in 0..universe {
        if skip.next_if_eq(&position).is_none() {
            out.push(position);
        }
    }
    out
}
