// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON report for `gapfinder solve --json`.

use gapfinder::{Rejection, SolveError, StrategyKind, MISSING_NUMBER_INDICATOR};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

/// One solve, as printed.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub strategy: StrategyKind,
    pub input: &'a [i64],
    /// Raw answer, `-1` when nothing is missing
    pub answer: Option<i64>,
    /// The missing number, `null` when nothing is missing
    pub missing: Option<i64>,
    pub error: Option<ErrorReport>,
}

impl<'a> SolveReport<'a> {
    pub fn new(strategy: StrategyKind, input: &'a [i64], outcome: Result<i64, SolveError>) -> Self {
        Self {
            strategy,
            input,
            answer: outcome.ok(),
            missing: outcome
                .ok()
                .filter(|&answer| answer != MISSING_NUMBER_INDICATOR),
            error: outcome.err().map(|err| ErrorReport {
                kind: err.kind(),
                message: err.to_string(),
                rejection: err.rejection(),
            }),
        }
    }
}
