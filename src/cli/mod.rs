// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rollcall command-line interface.
//!
//! With no subcommand the binary runs the interactive menu. `find` and `list`
//! answer one question and exit, optionally as JSON for scripting.

pub mod display;
pub mod menu;
pub mod report;

use crate::config::ColorChoice;
use crate::types::Strategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    about = "Find people in a roster with ALL / ANY / NONE word matching",
    version
)]
pub struct Cli {
    /// Line-delimited file of people; prompts on stdin when omitted
    #[arg(long, env = "ROLLCALL_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// When to color terminal output
    #[arg(long, env = "ROLLCALL_COLOR", value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the people matching a query and exit
    Find {
        /// Matching strategy: all, any or none
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Strategy,

        /// Words to look for (case-insensitive)
        #[arg(required = true)]
        words: Vec<String>,

        /// Emit matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every loaded person and exit
    List {
        /// Emit records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}
