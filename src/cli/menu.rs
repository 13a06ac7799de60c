// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive menu loop.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so tests drive it with in-memory buffers. Every bad input is answered with
//! a message and a fresh prompt; end of input ends the loop quietly.

use super::display::Painter;
use super::report::{write_all, write_matches, NO_MATCHES};
use crate::load::next_line;
use crate::session::Session;
use crate::types::{Query, Strategy};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Find,
    PrintAll,
    Exit,
}

impl MenuOption {
    /// Parse the number typed at the menu; `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuOption::Find),
            2 => Some(MenuOption::PrintAll),
            0 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or input runs out.
pub fn run_menu<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
    painter: Painter,
) -> io::Result<()> {
    loop {
        print_menu(out, painter)?;
        let Some(line) = next_line(input)? else {
            debug!("input closed at menu");
            return Ok(());
        };

        match MenuOption::parse(&line) {
            Some(MenuOption::Find) => {
                if !find_person(session, input, out, painter)? {
                    return Ok(());
                }
            }
            Some(MenuOption::PrintAll) => write_all(out, painter, &session.all())?,
            Some(MenuOption::Exit) => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            None => writeln!(out, "{}", painter.error("Incorrect option! Try again."))?,
        }
    }
}

fn print_menu<W: Write>(out: &mut W, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}", painter.header("=== Menu ==="))?;
    writeln!(out, "1. Find a person")?;
    writeln!(out, "2. Print all people")?;
    writeln!(out, "0. Exit")?;
    out.flush()
}

/// One search round trip. Returns `false` when input ran out mid-dialog.
fn find_person<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
    painter: Painter,
) -> io::Result<bool> {
    writeln!(
        out,
        "{}",
        painter.prompt("Select a matching strategy: ALL, ANY, NONE")
    )?;
    out.flush()?;
    let Some(line) = next_line(input)? else {
        return Ok(false);
    };
    let strategy: Strategy = match line.parse() {
        Ok(strategy) => strategy,
        Err(e) => {
            debug!(error = %e, "rejected strategy");
            writeln!(out, "{}", painter.error("Unknown strategy."))?;
            return Ok(true);
        }
    };

    writeln!(
        out,
        "{}",
        painter.prompt("Enter a name or email to search all suitable people.")
    )?;
    out.flush()?;
    let Some(line) = next_line(input)? else {
        return Ok(false);
    };
    let query = Query::parse(&line, strategy);
    if query.is_empty() {
        writeln!(out, "{}", painter.empty(NO_MATCHES))?;
        return Ok(true);
    }

    write_matches(out, painter, &session.matches(&query))?;
    Ok(true)
}
