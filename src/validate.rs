// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input validation for the missing-number strategies.
//!
//! Every strategy runs the same precondition check before touching the data:
//! the array must be present, non-empty, free of negative values, and free of
//! duplicates. Anything that fails here never reaches an algorithm. A custom
//! [`InputValidator`] may admit more; the algorithms still answer such input
//! without panicking, but the answer is only defined for distinct naturals.
//!
//! The check is split in two: [`InputValidator::check`] reports *why* an
//! array was rejected, and [`InputValidator::validate`] collapses that to the
//! plain pass/fail predicate.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Why an input array was rejected.
///
/// Indices are zero-based positions in the caller's array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Rejection {
    /// No array was supplied at all.
    Missing,
    /// The array has no elements.
    Empty,
    /// A negative value at `index`.
    Negative { index: usize, value: i64 },
    /// `value` at `index` already appeared earlier in the array.
    Duplicate { index: usize, value: i64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Missing => write!(f, "array is missing"),
            Rejection::Empty => write!(f, "array is empty"),
            Rejection::Negative { index, value } => {
                write!(f, "negative value {} at index {}", value, index)
            }
            Rejection::Duplicate { index, value } => {
                write!(f, "duplicate value {} at index {}", value, index)
            }
        }
    }
}

/// The precondition check injected into every strategy.
pub trait InputValidator: Send + Sync {
    /// Check the array, reporting the first violated condition.
    fn check(&self, array: Option<&[i64]>) -> Result<(), Rejection>;

    /// Pass/fail form of [`check`](Self::check).
    fn validate(&self, array: Option<&[i64]>) -> bool {
        self.check(array).is_ok()
    }
}

/// Default validator: present, non-empty, non-negative, unique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayValidator;

impl ArrayValidator {
    pub fn new() -> Self {
        Self
    }
}

impl InputValidator for ArrayValidator {
    fn check(&self, array: Option<&[i64]>) -> Result<(), Rejection> {
        // Presence and emptiness first, before any scan
        let array = array.ok_or(Rejection::Missing)?;
        if array.is_empty() {
            return Err(Rejection::Empty);
        }

        if let Some((index, &value)) = array.iter().enumerate().find(|&(_, &v)| v < 0) {
            return Err(Rejection::Negative { index, value });
        }

        let mut seen = HashSet::with_capacity(array.len());
        for (index, &value) in array.iter().enumerate() {
            if !seen.insert(value) {
                return Err(Rejection::Duplicate { index, value });
            }
        }

        Ok(())
    }
}
