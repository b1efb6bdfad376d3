// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gapfinder command-line interface.
//!
//! Two subcommands: `demo` replays the fixed demonstration tables against each
//! strategy, `solve` finds the missing number in the numbers given on the
//! command line.

pub mod demo;
pub mod display;
#[cfg(feature = "serde_json")]
pub mod report;

use clap::{Parser, Subcommand};
use gapfinder::StrategyKind;

#[derive(Parser)]
#[command(
    name = "gapfinder",
    about = "Find the missing number in an array of distinct naturals",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration tables for each strategy
    Demo {
        /// Strategy to demonstrate (repeatable). Defaults to all of them,
        /// sort-and-search first.
        #[arg(short, long = "strategy", value_name = "NAME")]
        strategies: Vec<StrategyKind>,
    },

    /// Find the missing number in NUMBERS
    Solve {
        /// Strategy to solve with: sort-and-search or presence-table
        #[arg(short, long, default_value = "sort-and-search")]
        strategy: StrategyKind,

        /// Print a JSON report instead of the terminal display
        #[arg(long)]
        json: bool,

        /// The array, e.g. `3 0 1`. Negative values are accepted and rejected
        /// by validation.
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}
