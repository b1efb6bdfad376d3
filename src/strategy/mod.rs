// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The find-missing-number capability and its two implementations.
//!
//! | Strategy        | Time       | Extra space        | Module         |
//! |-----------------|------------|--------------------|----------------|
//! | Sort-and-Search | O(n log n) | O(n) sorted copy   | `sort_search`  |
//! | Presence-Table  | O(n)       | O(min(max, n))     | `presence`     |
//!
//! Both validate first and agree on every input: the answer is the smallest
//! value in `[0, n)` absent from the array, or [`MISSING_NUMBER_INDICATOR`]
//! when the array is exactly `{0, ..., n - 1}`.

mod presence;
mod sort_search;

pub use presence::PresenceTable;
pub use sort_search::SortAndSearch;

use crate::error::SolveError;
use crate::validate::{ArrayValidator, InputValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Answer returned when no number is missing.
pub const MISSING_NUMBER_INDICATOR: i64 = -1;

/// A missing-number algorithm.
pub trait MissingNumberFinder: Send + Sync {
    /// Validate `array`, then return the missing number or the sentinel.
    fn find_missing_number(&self, array: Option<&[i64]>) -> Result<i64, SolveError>;

    /// Which variant this is.
    fn kind(&self) -> StrategyKind;

    /// Human-readable name, defaults to the kind's name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// The available strategy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    SortAndSearch,
    PresenceTable,
}

impl StrategyKind {
    /// All variants, in demo order.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::SortAndSearch, StrategyKind::PresenceTable];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::SortAndSearch => "sort-and-search",
            StrategyKind::PresenceTable => "presence-table",
        }
    }

    /// Build a boxed strategy of this kind around `validator`.
    pub fn build<V>(self, validator: V) -> Box<dyn MissingNumberFinder>
    where
        V: InputValidator + 'static,
    {
        match self {
            StrategyKind::SortAndSearch => Box::new(SortAndSearch::new(validator)),
            StrategyKind::PresenceTable => Box::new(PresenceTable::new(validator)),
        }
    }

    /// Build a boxed strategy with the default [`ArrayValidator`].
    pub fn build_default(self) -> Box<dyn MissingNumberFinder> {
        self.build(ArrayValidator::new())
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}' (expected one of: sort-and-search, presence-table)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sort-and-search" | "sort" => Ok(StrategyKind::SortAndSearch),
            "presence-table" | "presence" | "table" => Ok(StrategyKind::PresenceTable),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
