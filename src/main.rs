// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use rollcall::cli::display::Painter;
use rollcall::cli::menu::run_menu;
use rollcall::cli::report::{write_all, write_all_json, write_matches, write_matches_json};
use rollcall::cli::{Cli, Commands};
use rollcall::config::Config;
use rollcall::load::{read_records_from_file, read_records_interactive};
use rollcall::{Query, Session};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_file(path: &Path) -> Result<Vec<String>> {
    read_records_from_file(path).context("Unable to read the file")
}

fn run() -> Result<()> {
    // Diagnostics go to stderr so the menu on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new(cli.data, cli.color);
    let painter = Painter::new(config.color);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let records = match &config.data {
        Some(path) => load_file(path)?,
        None => read_records_interactive(&mut input, &mut out)
            .context("Unable to read people from input")?,
    };
    let session = Session::new(records);
    info!(
        records = session.len(),
        terms = session.index().term_count(),
        "roster ready"
    );

    match cli.command {
        None => run_menu(&session, &mut input, &mut out, painter)?,
        Some(Commands::Find {
            strategy,
            words,
            json,
        }) => {
            let query = Query::new(words, strategy);
            let matches = session.matches(&query);
            if json {
                write_matches_json(&mut out, strategy, &query.words, &matches)?;
            } else {
                write_matches(&mut out, painter, &matches)?;
            }
        }
        Some(Commands::List { json }) => {
            let records = session.all();
            if json {
                write_all_json(&mut out, &records)?;
            } else {
                write_all(&mut out, painter, &records)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
