// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A solver that many threads can hold at once.
//!
//! The active strategy is shared mutable state, so every `run` and every swap
//! goes through one lock. A swap waits for in-flight runs to finish and a run
//! never observes a half-installed strategy.

use crate::error::SolveError;
use crate::solver::Solver;
use crate::strategy::{MissingNumberFinder, StrategyKind};
use parking_lot::Mutex;

/// Mutex-serialized [`Solver`].
#[derive(Debug)]
pub struct SharedSolver {
    inner: Mutex<Solver>,
}

impl SharedSolver {
    pub fn new(solver: Solver) -> Self {
        Self {
            inner: Mutex::new(solver),
        }
    }

    /// Run the active strategy under the lock.
    pub fn run(&self, array: Option<&[i64]>) -> Result<i64, SolveError> {
        self.inner.lock().run(array)
    }

    /// Swap strategies under the lock.
    pub fn set_strategy(
        &self,
        strategy: Option<Box<dyn MissingNumberFinder>>,
    ) -> Result<(), SolveError> {
        self.inner.lock().set_strategy(strategy)
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.inner.lock().strategy_kind()
    }

    /// Take the solver back out.
    pub fn into_inner(self) -> Solver {
        self.inner.into_inner()
    }
}

impl From<Solver> for SharedSolver {
    fn from(solver: Solver) -> Self {
        Self::new(solver)
    }
}
