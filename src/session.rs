// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A loaded roster: the records plus the index built from them.
//!
//! The session owns both and only hands out shared references, so once
//! constructed nothing can drift out of sync.

use crate::error::QueryError;
use crate::inverted::build_inverted_index;
use crate::search::{search, search_by_name, search_query};
use crate::types::{InvertedIndex, Match, Query, Record, Strategy};

#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
    index: InvertedIndex,
}

impl Session {
    /// Index `records` and take ownership of them.
    pub fn new(records: Vec<Record>) -> Self {
        let index = build_inverted_index(&records);
        Self { records, index }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record text at `position`, if it exists.
    pub fn record(&self, position: usize) -> Option<&str> {
        self.records.get(position).map(String::as_str)
    }

    /// Positions matching `words` under `strategy`, ascending.
    pub fn find<S: AsRef<str>>(&self, words: &[S], strategy: Strategy) -> Vec<usize> {
        search(&self.index, words, strategy)
    }

    /// Like [`Session::find`], with the strategy given by name.
    pub fn find_by_name<S: AsRef<str>>(
        &self,
        words: &[S],
        strategy: &str,
    ) -> Result<Vec<usize>, QueryError> {
        search_by_name(&self.index, words, strategy)
    }

    /// Evaluate `query` and resolve positions to record text.
    pub fn matches(&self, query: &Query) -> Vec<Match<'_>> {
        self.resolve(&search_query(&self.index, query))
    }

    /// Every record with its position, in load order.
    pub fn all(&self) -> Vec<Match<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| Match { position, record })
            .collect()
    }

    fn resolve(&self, positions: &[usize]) -> Vec<Match<'_>> {
        positions
            .iter()
            .filter_map(|&position| {
                self.record(position)
                    .map(|record| Match { position, record })
            })
            .collect()
    }
}
