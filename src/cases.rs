// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed demonstration tables.
//!
//! The same five answer cases and four rejection cases run against every
//! strategy in `gapfinder demo`, and the integration tests replay them.

use crate::strategy::MISSING_NUMBER_INDICATOR;
use serde::Serialize;

/// An input with a known answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoCase {
    pub description: &'static str,
    pub input: &'static [i64],
    pub expected: i64,
}

/// An input that must be rejected with an error of `expected_kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCase {
    pub description: &'static str,
    /// `None` stands for an absent array.
    pub input: Option<&'static [i64]>,
    pub expected_kind: &'static str,
}

/// Answer cases, in demo order.
pub const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        description: "Missing Number",
        input: &[3, 0, 1],
        expected: 2,
    },
    DemoCase {
        description: "Complete Array",
        input: &[9, 6, 4, 2, 3, 5, 7, 0, 1, 8],
        expected: MISSING_NUMBER_INDICATOR,
    },
    DemoCase {
        description: "Missing Zero",
        input: &[1, 2, 3],
        expected: 0,
    },
    DemoCase {
        description: "Single Element",
        input: &[1],
        expected: 0,
    },
    DemoCase {
        description: "Missing Number Long Array",
        input: &[9, 6, 4, 2, 3, 5, 7, 0, 1],
        expected: 8,
    },
];

/// Rejection cases, in demo order.
pub const ERROR_CASES: &[ErrorCase] = &[
    ErrorCase {
        description: "Null Array",
        input: None,
        expected_kind: "InvalidInput",
    },
    ErrorCase {
        description: "Empty Array",
        input: Some(&[]),
        expected_kind: "InvalidInput",
    },
    ErrorCase {
        description: "Negative Numbers",
        input: Some(&[-1, 0, 1]),
        expected_kind: "InvalidInput",
    },
    ErrorCase {
        description: "Duplicate Numbers",
        input: Some(&[0, 1, 1]),
        expected_kind: "InvalidInput",
    },
];
