// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration resolved from command-line flags and environment.

use std::path::PathBuf;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide once, given whether stdout is a TTY and whether `NO_COLOR` is set.
    pub fn resolve(self, is_tty: bool, no_color: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_tty && !no_color,
        }
    }

    /// Resolve against the current process environment.
    pub fn resolve_env(self) -> bool {
        self.resolve(
            atty::is(atty::Stream::Stdout),
            std::env::var_os("NO_COLOR").is_some(),
        )
    }
}

/// Everything the binary needs to know before loading records.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Line-delimited record file; `None` means prompt on stdin
    pub data: Option<PathBuf>,
    /// Whether terminal output is styled
    pub color: bool,
}

impl Config {
    pub fn new(data: Option<PathBuf>, color: ColorChoice) -> Self {
        Self {
            data,
            color: color.resolve_env(),
        }
    }
}
