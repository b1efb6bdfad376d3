// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sort-and-Search: sort a copy, then walk it against a running index.
//!
//! After sorting, a complete prefix `0, 1, 2, ...` lines up with its
//! positions. The first position whose value disagrees is the gap. Values are
//! distinct (validated), so there is at most one such first disagreement.
//! Input a custom validator lets through still gets an answer in `[0, len)`
//! or the sentinel.
//!
//! The caller's slice is never reordered; the sort happens on a private copy.

use super::{MissingNumberFinder, StrategyKind, MISSING_NUMBER_INDICATOR};
use crate::contracts::{check_answer, check_sorted_ascending};
use crate::error::SolveError;
use crate::validate::{ArrayValidator, InputValidator};

/// O(n log n) strategy backed by a sorted copy.
#[derive(Debug, Clone, Default)]
pub struct SortAndSearch<V = ArrayValidator> {
    validator: V,
}

impl<V: InputValidator> SortAndSearch<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V: InputValidator> MissingNumberFinder for SortAndSearch<V> {
    fn find_missing_number(&self, array: Option<&[i64]>) -> Result<i64, SolveError> {
        self.validator.check(array)?;
        let array = array.unwrap_or_default();

        let mut sorted = array.to_vec();
        sorted.sort_unstable();
        check_sorted_ascending(&sorted);

        let answer = first_gap_in_sorted(&sorted);
        check_answer(array, answer);
        Ok(answer)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::SortAndSearch
    }
}

/// First index whose value disagrees with it, or the sentinel.
fn first_gap_in_sorted(sorted: &[i64]) -> i64 {
    let mut index: i64 = 0;
    for &value in sorted {
        if value != index {
            return index;
        }
        index += 1;
    }
    MISSING_NUMBER_INDICATOR
}
