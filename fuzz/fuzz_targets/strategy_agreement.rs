// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the two missing-number strategies.
//!
//! Arbitrary arrays, valid or not, go through both strategies. Neither may
//! panic, both must agree, and every answer must really be missing.

#![no_main]

use arbitrary::Arbitrary;
use gapfinder::{StrategyKind, MISSING_NUMBER_INDICATOR};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    /// `None` exercises the absent-array path
    array: Option<Vec<i64>>,
    /// Fold values into a small range so valid inputs with gaps are common
    fold: bool,
}

fuzz_target!(|input: Input| {
    let array = input.array.map(|values| {
        if input.fold {
            values.into_iter().map(|v| v % 64).collect()
        } else {
            values
        }
    });
    let array = array.as_deref();

    let [sort, table] = StrategyKind::ALL.map(|kind| kind.build_default());
    let a = sort.find_missing_number(array);
    let b = table.find_missing_number(array);

    // Property 1: same verdict, same answer, same rejection reason
    assert_eq!(a, b, "strategies disagree on {:?}", array);

    // Property 2: an answer is either the sentinel or absent from the input
    if let (Ok(answer), Some(values)) = (a, array) {
        if answer != MISSING_NUMBER_INDICATOR {
            assert!(answer >= 0 && (answer as usize) < values.len());
            assert!(!values.contains(&answer), "answer {} is present", answer);
        }
    }
});
