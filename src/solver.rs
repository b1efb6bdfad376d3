// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The solver: one active strategy, swappable between runs.
//!
//! `run` delegates to the installed strategy and hands the outcome to a
//! [`Reporter`] before returning it. Failures are reported and then returned
//! unchanged, never swallowed. The library never prints; a reporter decides
//! what "reporting" means (the CLI draws to the terminal, tests record calls).
//!
//! Swapping requires `&mut self` while `run` takes `&self`, so a swap can never
//! overlap a run on the same solver. For shared use across threads see
//! `SharedSolver` behind the `sync` feature.

use crate::error::SolveError;
use crate::strategy::{MissingNumberFinder, StrategyKind};

/// Observer for solver outcomes.
pub trait Reporter: Send + Sync {
    /// Called after a successful run.
    fn on_result(&self, strategy: StrategyKind, array: Option<&[i64]>, answer: i64);

    /// Called after a failed run, before the error is returned.
    fn on_error(&self, strategy: StrategyKind, array: Option<&[i64]>, error: &SolveError);
}

/// Reporter that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn on_result(&self, _: StrategyKind, _: Option<&[i64]>, _: i64) {}
    fn on_error(&self, _: StrategyKind, _: Option<&[i64]>, _: &SolveError) {}
}

/// Runs the active strategy and reports each outcome.
pub struct Solver {
    strategy: Box<dyn MissingNumberFinder>,
    reporter: Box<dyn Reporter>,
}

impl Solver {
    /// Create a solver with `strategy` installed and a silent reporter.
    pub fn new(strategy: Box<dyn MissingNumberFinder>) -> Self {
        Self {
            strategy,
            reporter: Box::new(SilentReporter),
        }
    }

    /// Create a solver from an optional strategy.
    ///
    /// Returns [`SolveError::MissingStrategy`] when `strategy` is `None`.
    pub fn try_new(strategy: Option<Box<dyn MissingNumberFinder>>) -> Result<Self, SolveError> {
        strategy.map(Self::new).ok_or(SolveError::MissingStrategy)
    }

    /// Replace the reporter.
    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Install a new strategy.
    ///
    /// On `None` the current strategy stays installed and
    /// [`SolveError::MissingStrategy`] is returned.
    pub fn set_strategy(
        &mut self,
        strategy: Option<Box<dyn MissingNumberFinder>>,
    ) -> Result<(), SolveError> {
        self.strategy = strategy.ok_or(SolveError::MissingStrategy)?;
        Ok(())
    }

    /// The variant currently installed.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Find the missing number in `array` with the active strategy.
    ///
    /// `None` stands for an absent array and is rejected like an empty one.
    pub fn run(&self, array: Option<&[i64]>) -> Result<i64, SolveError> {
        let kind = self.strategy.kind();

        match self.strategy.find_missing_number(array) {
            Ok(answer) => {
                self.reporter.on_result(kind, array, answer);
                Ok(answer)
            }
            Err(error) => {
                self.reporter.on_error(kind, array, &error);
                Err(error)
            }
        }
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("strategy", &self.strategy.name())
            .finish_non_exhaustive()
    }
}
