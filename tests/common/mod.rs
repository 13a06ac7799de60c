//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rollcall::{build_inverted_index, verify_index, InvertedIndex};

pub use rollcall::testing::{make_records, sample_roster, synthetic_roster};

/// A roster with mixed casing, repeated words, blank padding and e-mails.
pub fn messy_roster() -> Vec<String> {
    make_records(&[
        "  Dwight SCHRUTE dwight@dundermifflin.com ",
        "Jim Halpert jim@dundermifflin.com",
        "Pam Beesly pam@dundermifflin.com",
        "Michael Scott michael@dundermifflin.com Michael",
        "Jim Carrey jim@hollywood.com",
        "ANGELA martin",
    ])
}

/// Build an index and fail the test if any invariant is broken.
pub fn build_checked(records: &[String]) -> InvertedIndex {
    let index = build_inverted_index(records);
    assert_index_well_formed(&index, records);
    index
}

/// Assert that an index satisfies all structural invariants.
pub fn assert_index_well_formed(index: &InvertedIndex, records: &[String]) {
    if let Err(e) = verify_index(index, records) {
        panic!("index not well-formed: {}", e);
    }
}

/// Assert positions are strictly ascending and below `total`.
pub fn assert_result_well_formed(positions: &[usize], total: usize) {
    for pair in positions.windows(2) {
        assert!(
            pair[0] < pair[1],
            "positions not strictly ascending: {:?}",
            positions
        );
    }
    for &p in positions {
        assert!(p < total, "position {} out of bounds ({})", p, total);
    }
}
