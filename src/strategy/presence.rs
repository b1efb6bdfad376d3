// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presence-Table: mark every value in a boolean table, return the first hole.
//!
//! If `len == max + 1` the distinct values fill `[0, max]` exactly and nothing
//! is missing. Otherwise the table is scanned over `[0, len)` and the first
//! unmarked slot is the answer.
//!
//! The scan never looks past index `len - 1`, so slots above `len` can never
//! change the answer. The table is therefore capped at `min(max, len) + 1`
//! slots, which keeps inputs like `[i64::MAX]` from allocating a table the
//! size of the value.

use super::{MissingNumberFinder, StrategyKind, MISSING_NUMBER_INDICATOR};
use crate::contracts::check_answer;
use crate::error::SolveError;
use crate::validate::{ArrayValidator, InputValidator};

/// O(n) strategy backed by a boolean presence table.
#[derive(Debug, Clone, Default)]
pub struct PresenceTable<V = ArrayValidator> {
    validator: V,
}

impl<V: InputValidator> PresenceTable<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V: InputValidator> MissingNumberFinder for PresenceTable<V> {
    fn find_missing_number(&self, array: Option<&[i64]>) -> Result<i64, SolveError> {
        self.validator.check(array)?;
        let array = array.unwrap_or_default();

        let answer = first_absent(array);
        check_answer(array, answer);
        Ok(answer)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::PresenceTable
    }
}

/// Table lookup. Total on any input a validator lets through; the answer is
/// only meaningful for non-empty, distinct, non-negative input.
fn first_absent(array: &[i64]) -> i64 {
    let len = array.len();
    let Some(max) = array.iter().copied().max() else {
        return MISSING_NUMBER_INDICATOR;
    };
    // All values negative: 0 is absent and 0 < len
    let Ok(max) = u64::try_from(max) else {
        return 0;
    };

    if len as u64 == max + 1 {
        return MISSING_NUMBER_INDICATOR;
    }

    let table_len = max.min(len as u64) as usize + 1;
    let mut present = vec![false; table_len];
    for &value in array {
        if let Some(slot) = usize::try_from(value).ok().and_then(|i| present.get_mut(i)) {
            *slot = true;
        }
    }

    let scanned = len.min(table_len);
    if let Some(hole) = present[..scanned].iter().position(|&seen| !seen) {
        return hole as i64;
    }
    // Only repeated values can leave the table shorter than the array;
    // everything at or above its end is absent.
    if scanned < len {
        return scanned as i64;
    }

    // Unreachable: [0, len) all present in a len-element array means the
    // array is exactly {0..len-1}, which the early return already handled.
    debug_assert_eq!(
        len as u64,
        max + 1,
        "Contract violation: presence scan found no hole"
    );
    MISSING_NUMBER_INDICATOR
}
