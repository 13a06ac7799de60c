// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// Owned records from string literals.
pub fn make_records(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// The three-person roster used throughout the docs and tests.
pub fn sample_roster() -> Vec<String> {
    make_records(&[
        "Alice Smith alice@x.com",
        "Bob Jones bob@x.com",
        "Alice Jones alice@y.com",
    ])
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Wilson", "Evans", "Thomas", "Roberts",
];

/// Deterministic synthetic roster of `n` people: `First Last first.last<i>@example.com`.
pub fn synthetic_roster(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            format!(
                "{} {} {}.{}{}@example.com",
                first,
                last,
                first.to_lowercase(),
                last.to_lowercase(),
                i
            )
        })
        .collect()
}
