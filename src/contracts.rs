// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the query evaluator.
//!
//! Debug-mode assertions only: every check compiles to nothing in release
//! builds. They exist to fail loudly during development and under the
//! property tests, right where an invariant first breaks.
//!
//! | Contract Function          | Invariant                                  |
//! |----------------------------|--------------------------------------------|
//! | `check_index_well_formed`  | sorted, non-empty, complete posting lists  |
//! | `check_result_sorted`      | results strictly ascending, no duplicates  |
//! | `check_result_in_bounds`   | every result `< total_records`             |

use crate::types::InvertedIndex;
#[cfg(debug_assertions)]
use crate::verify::verify_index;

/// Check that an index matches the records it was built from.
///
/// # Panics (debug builds only)
/// Panics with the first `InvariantError` found.
#[inline]
pub fn check_index_well_formed(index: &InvertedIndex, records: &[String]) {
    #[cfg(debug_assertions)]
    if let Err(e) = verify_index(index, records) {
        panic!("Contract violation: {}", e);
    }
    #[cfg(not(debug_assertions))]
    let _ = (index, records);
}

/// Check that query results are strictly ascending.
///
/// # Panics (debug builds only)
/// Panics if two adjacent positions are out of order or equal.
#[inline]
pub fn check_result_sorted(positions: &[usize]) {
    debug_assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "Contract violation: result positions not strictly ascending: {:?}",
        positions
    );
}

/// Check that every result addresses an existing record.
///
/// # Panics (debug builds only)
/// Panics if a position is `>= total_records`.
#[inline]
pub fn check_result_in_bounds(positions: &[usize], total_records: usize) {
    debug_assert!(
        positions.iter().all(|&p| p < total_records),
        "Contract violation: result position out of bounds (total_records = {}): {:?}",
        total_records,
        positions
    );
}
