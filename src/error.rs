// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading records and evaluating queries.
//!
//! Nothing here is fatal to the library. Callers decide whether to re-prompt
//! (the interactive menu) or bail out (the one-shot CLI commands).

use std::path::PathBuf;
use thiserror::Error;

/// Rejected search input. Raised before any evaluation work happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown strategy '{name}' (expected ALL, ANY or NONE)")]
    UnknownStrategy { name: String },
}

/// Failure to produce the record sequence.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unable to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Result alias for record loading.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
