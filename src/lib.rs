// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Find the missing number in an array of distinct naturals.
//!
//! Given distinct non-negative integers drawn from `[0, n]`, return the
//! smallest value in `[0, n)` that is absent, or [`MISSING_NUMBER_INDICATOR`]
//! (`-1`) when the array is exactly `{0, ..., n - 1}`. Two interchangeable
//! strategies compute the answer, and a [`Solver`] switches between them at
//! runtime.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │ validate.rs  │────▶│   strategy/      │────▶│  solver.rs  │
//! │ (ArrayVal-   │     │ (SortAndSearch,  │     │  (Solver,   │
//! │  idator)     │     │  PresenceTable)  │     │  Reporter)  │
//! └──────────────┘     └──────────────────┘     └─────────────┘
//!        │                      │                      │
//!        ▼                      ▼                      ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │       error.rs (SolveError) · contracts.rs (debug)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use gapfinder::{ArrayValidator, PresenceTable, SortAndSearch, Solver};
//!
//! let mut solver = Solver::new(Box::new(SortAndSearch::new(ArrayValidator::new())));
//! assert_eq!(solver.run(Some(&[3, 0, 1])), Ok(2));
//!
//! solver
//!     .set_strategy(Some(Box::new(PresenceTable::new(ArrayValidator::new()))))
//!     .unwrap();
//! assert_eq!(solver.run(Some(&[1, 2, 3])), Ok(0));
//! assert!(solver.run(Some(&[-1, 0, 1])).is_err());
//! ```

// Module declarations
pub mod cases;
pub mod contracts;
mod error;
#[cfg(feature = "sync")]
mod shared;
mod solver;
pub mod strategy;
mod validate;

// Re-exports for public API
pub use error::SolveError;
#[cfg(feature = "sync")]
pub use shared::SharedSolver;
pub use solver::{Reporter, SilentReporter, Solver};
pub use strategy::{
    MissingNumberFinder, PresenceTable, SortAndSearch, StrategyKind, UnknownStrategy,
    MISSING_NUMBER_INDICATOR,
};
pub use validate::{ArrayValidator, InputValidator, Rejection};
