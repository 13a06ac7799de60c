// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index construction and query evaluation.
//!
//! Arbitrary records and arbitrary query words, including control characters,
//! Unicode whitespace and letters whose lowercase form changes length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rollcall::{build_inverted_index, search, search_by_name, verify_index, Strategy};

#[derive(Debug, Arbitrary)]
struct Input {
    records: Vec<String>,
    words: Vec<String>,
    strategy_name: String,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let records: Vec<String> = input.records.into_iter().take(64).collect();
    let words: Vec<String> = input.words.into_iter().take(16).collect();

    let index = build_inverted_index(&records);

    // INVARIANT 1: the built index always verifies
    if let Err(e) = verify_index(&index, &records) {
        panic!("index invariant violated: {}", e);
    }

    for strategy in Strategy::VARIANTS {
        let positions = search(&index, &words, strategy);

        // INVARIANT 2: strictly ascending, in bounds
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(positions.iter().all(|&p| p < records.len()));
    }

    // INVARIANT 3: ANY and NONE partition the universe
    let any = search(&index, &words, Strategy::Any);
    let none = search(&index, &words, Strategy::None);
    assert_eq!(any.len() + none.len(), records.len());

    // INVARIANT 4: strategy names never panic
    let _ = search_by_name(&index, &words, &input.strategy_name);
});
