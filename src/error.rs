// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by strategies and the solver.

use crate::validate::Rejection;
use std::fmt;

/// Error type for a failed solve or a misconfigured solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The validator rejected the input array.
    InvalidInput { reason: Rejection },
    /// The solver was given no strategy to install.
    MissingStrategy,
}

impl SolveError {
    /// Stable label for the error kind, independent of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            SolveError::InvalidInput { .. } => "InvalidInput",
            SolveError::MissingStrategy => "ConfigurationError",
        }
    }

    /// The validation failure behind an `InvalidInput`, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            SolveError::InvalidInput { reason } => Some(*reason),
            SolveError::MissingStrategy => None,
        }
    }
}

impl From<Rejection> for SolveError {
    fn from(reason: Rejection) -> Self {
        SolveError::InvalidInput { reason }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidInput { reason } => write!(f, "Invalid input: {}", reason),
            SolveError::MissingStrategy => write!(f, "no strategy supplied to the solver"),
        }
    }
}

impl std::error::Error for SolveError {}
