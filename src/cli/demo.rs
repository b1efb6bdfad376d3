// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Demonstration tables for `gapfinder demo`.
//!
//! Every case runs, whatever happened to the ones before it; a table only
//! tallies. Outcomes reach the terminal through the solver's reporter.

use gapfinder::cases::{DemoCase, ErrorCase};
use gapfinder::Solver;

use super::display;

/// Pass count for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub total: usize,
}

impl Tally {
    pub fn all_passed(self) -> bool {
        self.passed == self.total
    }
}

/// Run answer cases; a case passes when the solver returns its expected value.
pub fn run_strategy_table(solver: &Solver, cases: &[DemoCase]) -> Tally {
    display::section("Strategy Tests");

    let mut passed = 0;
    for case in cases {
        println!("{}:", case.description);
        if solver.run(Some(case.input)) == Ok(case.expected) {
            passed += 1;
        }
    }

    println!("{}", display::results_line(passed, cases.len()));
    Tally {
        passed,
        total: cases.len(),
    }
}

/// Run rejection cases; a case passes when the error has the expected kind.
pub fn run_error_table(solver: &Solver, cases: &[ErrorCase]) -> Tally {
    display::section("Error Handling Demo");

    let mut passed = 0;
    for case in cases {
        println!("{}:", case.description);
        match solver.run(case.input) {
            Ok(answer) => {
                println!("Unexpected success: {} {}", answer, display::mark(false));
            }
            Err(err) if err.kind() == case.expected_kind => {
                println!("{} {}", err.kind(), display::mark(true));
                passed += 1;
            }
            Err(err) => {
                println!(
                    "{} {} (expected {})",
                    err.kind(),
                    display::mark(false),
                    case.expected_kind
                );
            }
        }
    }

    Tally {
        passed,
        total: cases.len(),
    }
}
