// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for strategy answers.
//!
//! Debug-mode assertions that check every answer a strategy produces against
//! the definition of "missing number". These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Hold the answer to the definition only on well-formed input
//!    (non-empty, distinct, non-negative). A custom validator may admit
//!    anything else; then only the range contract applies.
//!
//! # Contract table
//!
//! | Contract Function           | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_answer_in_range`     | answer is `-1` or lies in `[0, len)`            |
//! | `check_answer_absent`       | a non-sentinel answer does not occur in input   |
//! | `check_answer_minimal`      | every value below the answer occurs in input    |
//! | `check_sorted_ascending`    | the sort-and-search copy is non-decreasing      |
//!
//! # Usage
//!
//! ```ignore
//! use gapfinder::contracts::*;
//!
//! // In debug builds, this panics if the answer is wrong
//! check_answer(array, answer);
//!
//! // In release builds, this is a no-op
//! ```

use crate::strategy::MISSING_NUMBER_INDICATOR;
use std::collections::HashSet;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The sentinel must never collide with a real answer.
const _: () = assert!(MISSING_NUMBER_INDICATOR < 0);

// ============================================================================
// ANSWER CONTRACTS
// ============================================================================

/// Check that an answer is the sentinel or an index into the array range.
///
/// # Panics (debug builds only)
/// Panics if `answer` is neither `-1` nor in `[0, len)`.
#[inline]
pub fn check_answer_in_range(answer: i64, len: usize) {
    debug_assert!(
        answer == MISSING_NUMBER_INDICATOR || (answer >= 0 && (answer as usize) < len),
        "Contract violation: answer {} outside [0, {}) and not the sentinel",
        answer,
        len
    );
}

/// Check that a non-sentinel answer really is absent from the input.
#[inline]
pub fn check_answer_absent(array: &[i64], answer: i64) {
    if answer == MISSING_NUMBER_INDICATOR {
        return;
    }
    debug_assert!(
        !array.contains(&answer),
        "Contract violation: answer {} occurs in the input",
        answer
    );
}

/// Check that every value below the answer occurs in the input.
///
/// For the sentinel this means the input is exactly `{0, ..., len - 1}`.
///
/// # Panics (debug builds only)
/// Panics if a smaller absent value exists.
#[inline]
pub fn check_answer_minimal(array: &[i64], answer: i64) {
    if !cfg!(debug_assertions) {
        return;
    }

    let present: HashSet<i64> = array.iter().copied().collect();
    let upper = if answer == MISSING_NUMBER_INDICATOR {
        array.len() as i64
    } else {
        answer
    };

    for value in 0..upper {
        debug_assert!(
            present.contains(&value),
            "Contract violation: {} is absent but the answer was {}",
            value,
            answer
        );
    }
}

/// Whether `array` is input the answer is defined for: non-empty, every value
/// non-negative and distinct.
pub fn is_well_formed(array: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(array.len());
    !array.is_empty() && array.iter().all(|&value| value >= 0 && seen.insert(value))
}

/// All answer contracts at once.
#[inline]
pub fn check_answer(array: &[i64], answer: i64) {
    check_answer_in_range(answer, array.len());
    if !cfg!(debug_assertions) || !is_well_formed(array) {
        return;
    }
    check_answer_absent(array, answer);
    check_answer_minimal(array, answer);
}

// ============================================================================
// SORT-AND-SEARCH CONTRACTS
// ============================================================================

/// Check that a sorted copy is in ascending order.
#[inline]
pub fn check_sorted_ascending(sorted: &[i64]) {
    for i in 1..sorted.len() {
        debug_assert!(
            sorted[i - 1] <= sorted[i],
            "Contract violation: sorted[{}] = {} is above sorted[{}] = {}",
            i - 1,
            sorted[i - 1],
            i,
            sorted[i]
        );
    }
}
