// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering of match lists, shared by the menu and the one-shot commands.

use super::display::Painter;
use crate::types::{Match, Strategy};
use serde::Serialize;
use std::io::{self, Write};

pub const NO_MATCHES: &str = "No matching people found.";
pub const LIST_HEADER: &str = "=== List of people ===";

#[derive(Serialize)]
struct FindReport<'a> {
    strategy: Strategy,
    query: &'a [String],
    matches: &'a [Match<'a>],
}

#[derive(Serialize)]
struct ListReport<'a> {
    records: &'a [Match<'a>],
}

/// `N persons found:` followed by each record, or the no-match line.
pub fn write_matches<W: Write>(out: &mut W, painter: Painter, matches: &[Match<'_>]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "{}", painter.empty(NO_MATCHES));
    }
    writeln!(out, "{}", painter.found(&format!("{} persons found:", matches.len())))?;
    for m in matches {
        writeln!(out, "{}", m.record)?;
    }
    Ok(())
}

/// The list banner followed by every record.
pub fn write_all<W: Write>(out: &mut W, painter: Painter, records: &[Match<'_>]) -> io::Result<()> {
    writeln!(out, "{}", painter.header(LIST_HEADER))?;
    for m in records {
        writeln!(out, "{}", m.record)?;
    }
    Ok(())
}

pub fn write_matches_json<W: Write>(
    out: &mut W,
    strategy: Strategy,
    query: &[String],
    matches: &[Match<'_>],
) -> io::Result<()> {
    let report = FindReport {
        strategy,
        query,
        matches,
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)
}

pub fn write_all_json<W: Write>(out: &mut W, records: &[Match<'_>]) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &ListReport { records })?;
    writeln!(out)
}
