// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the gapfinder CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `GAPFINDER_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY detection
//! for pipelines.
//!
//! The [`ConsoleReporter`] plugs into the solver and prints each outcome as it
//! happens.

use gapfinder::{Reporter, SolveError, StrategyKind, MISSING_NUMBER_INDICATOR};
use std::sync::OnceLock;

// Box drawing constants - width between ║ and ║ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and up (except 8) are light
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("GAPFINDER_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Border color, or nothing when colors are off
fn border() -> String {
    if use_colors() {
        BLUE()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    println!("{}╔{}╗{}", border(), "═".repeat(BOX_WIDTH), reset());
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    println!("{}╚{}╝{}", border(), "═".repeat(BOX_WIDTH), reset());
}

/// Print centered title with bold
pub fn title(text: &str) {
    let colored = themed(CYAN, &[BOLD], text);
    let len = visible_len(&colored);
    let total_pad = BOX_WIDTH.saturating_sub(len);
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{}║{}{}{}{}{}║{}",
        border(),
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border(),
        reset()
    );
}

/// Boxed banner: ╔═╗ / ║ TITLE ║ / ╚═╝
pub fn banner(text: &str) {
    double_header();
    title(text);
    double_footer();
}

/// Print section rule: ── LABEL ─────────────
pub fn section(label: &str) {
    let label_part = format!("── {} ", themed(YELLOW, &[BOLD], label));
    let remaining = (BOX_WIDTH + 2).saturating_sub(visible_len(&label_part));
    println!("{}{}", label_part, themed(GRAY, &[], &"─".repeat(remaining)));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[3, 0, 1]`, or `null` for an absent array
pub fn format_array(array: Option<&[i64]>) -> String {
    match array {
        Some(values) => {
            let items: Vec<String> = values.iter().map(i64::to_string).collect();
            format!("[{}]", items.join(", "))
        }
        None => "null".to_string(),
    }
}

/// The answer as a user reads it: the number, or "None" for the sentinel
pub fn answer_label(answer: i64) -> String {
    if answer == MISSING_NUMBER_INDICATOR {
        themed(GRAY, &[], "None")
    } else {
        themed(GREEN, &[BOLD], &answer.to_string())
    }
}

/// ✓ or ✗
pub fn mark(ok: bool) -> String {
    if ok {
        themed(GREEN, &[BOLD], "\u{2713}")
    } else {
        themed(RED, &[BOLD], "\u{2717}")
    }
}

/// "Results: 5/5 tests passed", green when everything passed
pub fn results_line(passed: usize, total: usize) -> String {
    let counts = format!("{}/{}", passed, total);
    let counts = if passed == total {
        themed(GREEN, &[BOLD], &counts)
    } else {
        themed(RED, &[BOLD], &counts)
    };
    format!("Results: {} tests passed", counts)
}

// ═══════════════════════════════════════════════════════════════════════════
// CONSOLE REPORTER
// ═══════════════════════════════════════════════════════════════════════════

/// Prints every solver outcome to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_result(&self, _: StrategyKind, array: Option<&[i64]>, answer: i64) {
        println!("Array: {}", format_array(array));
        println!("Missing number: {}", answer_label(answer));
        println!();
    }

    fn on_error(&self, _: StrategyKind, _: Option<&[i64]>, error: &SolveError) {
        println!("{} {}", themed(RED, &[BOLD], "Error:"), error);
        println!();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
