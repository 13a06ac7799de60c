// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for the menu and the one-shot commands.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `ROLLCALL_THEME` first, then `COLORFGBG`, then defaults to dark. Whether to
//! style at all is decided once by the caller (see `ColorChoice`); with color
//! off every helper returns its input unchanged, so plain output is exactly
//! the menu text.

use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("ROLLCALL_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(BLUE);
theme_color!(GRAY);

/// Styles text for one output stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Plain output, used by tests and pipes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, styles: &[&str], text: &str) -> String {
        if self.color {
            format!("{}{}{}", styles.concat(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Section banners such as `=== Menu ===`.
    pub fn header(&self, text: &str) -> String {
        self.paint(&[BOLD, BLUE().as_str()], text)
    }

    /// Prompts asking the user for input.
    pub fn prompt(&self, text: &str) -> String {
        self.paint(&[BOLD], text)
    }

    /// Success summary such as `2 persons found:`.
    pub fn found(&self, text: &str) -> String {
        self.paint(&[GREEN().as_str()], text)
    }

    /// Nothing matched.
    pub fn empty(&self, text: &str) -> String {
        self.paint(&[DIM, GRAY().as_str()], text)
    }

    /// Rejected input.
    pub fn error(&self, text: &str) -> String {
        self.paint(&[RED().as_str()], text)
    }
}
