// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-level inverted index with ALL / ANY / NONE boolean queries.
//!
//! Load a roster of people (one line each), index every lowercase
//! whitespace-delimited word, then ask which records contain all, any or
//! none of a set of query words.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   load.rs   │────▶│ inverted.rs  │────▶│  search/    │
//! │ (file or    │     │ (build_      │     │ (search,    │
//! │  prompt)    │     │  inverted_   │     │  ALL/ANY/   │
//! └─────────────┘     │  index)      │     │  NONE)      │
//!                     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    session.rs                        │
//! │       (owns records + index, resolves matches)       │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                   cli/ (menu, find, list)
//! ```
//!
//! # Usage
//!
//! ```
//! use rollcall::{build_inverted_index, search, Strategy};
//!
//! let records = vec![
//!     "Alice Smith alice@x.com".to_string(),
//!     "Bob Jones bob@x.com".to_string(),
//!     "Alice Jones alice@y.com".to_string(),
//! ];
//! let index = build_inverted_index(&records);
//!
//! assert_eq!(search(&index, &["alice", "jones"], Strategy::All), vec![2]);
//! assert_eq!(search(&index, &["alice", "jones"], Strategy::Any), vec![0, 1, 2]);
//! assert_eq!(search(&index, &["bob"], Strategy::None), vec![0, 2]);
//! ```

pub mod cli;
pub mod config;
pub mod contracts;
pub mod error;
mod inverted;
pub mod load;
mod search;
mod session;
pub mod testing;
mod types;
pub mod verify;

pub use error::{LoadError, QueryError};
pub use inverted::{build_inverted_index, tokenize};
pub use search::utils::{complement_sorted, intersect_sorted, union_sorted};
pub use search::{search, search_by_name, search_query};
pub use session::Session;
pub use types::{InvertedIndex, Match, PostingList, Query, Record, Strategy};
pub use verify::{verify_index, InvariantError};
