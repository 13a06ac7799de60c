// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record loading: from a line-delimited file or typed at the prompt.
//!
//! Both paths produce the same thing, an ordered `Vec<String>` of non-blank
//! records, and the index never learns which one was used.

use crate::error::{LoadError, LoadResult};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Parse file contents: one record per line, blank lines skipped.
///
/// Non-blank lines are kept verbatim (surrounding whitespace included); the
/// tokenizer trims anyway and display should show what the file said.
pub fn parse_records(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Read records from a line-delimited text file.
pub fn read_records_from_file(path: &Path) -> LoadResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&content);
    debug!(path = %path.display(), records = records.len(), "loaded records from file");
    Ok(records)
}

/// Prompt for a count, then read that many records.
///
/// An unparseable count prints `Invalid number entered.` and yields no
/// records. Blank lines count toward the total but are not kept. Running out
/// of input early stops reading with whatever was collected.
pub fn read_records_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> LoadResult<Vec<String>> {
    writeln!(output, "Enter the number of people:")?;
    let Some(line) = next_line(input)? else {
        return Ok(Vec::new());
    };
    let count: usize = match line.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            warn!(input = %line.trim(), "rejected record count");
            writeln!(output, "Invalid number entered.")?;
            return Ok(Vec::new());
        }
    };

    writeln!(output, "Enter all people:")?;
    let mut records = Vec::new();
    for _ in 0..count {
        let Some(line) = next_line(input)? else {
            warn!(expected = count, read = records.len(), "input ended early");
            break;
        };
        let record = line.trim();
        if !record.is_empty() {
            records.push(record.to_string());
        }
    }

    debug!(records = records.len(), "loaded records from input");
    Ok(records)
}

/// Read one line without its terminator; `None` at end of input.
pub(crate) fn next_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
