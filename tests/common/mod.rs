//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gapfinder::{
    InputValidator, MissingNumberFinder, Rejection, SolveError, Solver, StrategyKind,
    MISSING_NUMBER_INDICATOR,
};

/// One freshly built instance of every strategy.
pub fn all_strategies() -> Vec<Box<dyn MissingNumberFinder>> {
    StrategyKind::ALL
        .iter()
        .map(|kind| kind.build_default())
        .collect()
}

/// Validator that lets everything through, so strategies see raw input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmitAll;

impl InputValidator for AdmitAll {
    fn check(&self, _: Option<&[i64]>) -> Result<(), Rejection> {
        Ok(())
    }
}

/// Every strategy behind [`AdmitAll`].
pub fn unguarded_strategies() -> Vec<Box<dyn MissingNumberFinder>> {
    StrategyKind::ALL
        .iter()
        .map(|kind| kind.build(AdmitAll))
        .collect()
}

/// Answer is the sentinel or an index into `[0, len)`.
pub fn in_answer_range(answer: i64, len: usize) -> bool {
    answer == MISSING_NUMBER_INDICATOR || (0..len as i64).contains(&answer)
}

/// Run `array` through every strategy, behind a solver, and return the
/// per-strategy results in `StrategyKind::ALL` order.
pub fn solve_with_each(array: Option<&[i64]>) -> Vec<(StrategyKind, Result<i64, SolveError>)> {
    StrategyKind::ALL
        .iter()
        .map(|&kind| {
            let solver = Solver::new(kind.build_default());
            (kind, solver.run(array))
        })
        .collect()
}

/// Assert every strategy returns `expected` for `array`.
pub fn assert_all_return(array: &[i64], expected: i64) {
    for (kind, result) in solve_with_each(Some(array)) {
        assert_eq!(result, Ok(expected), "{} on {:?}", kind, array);
    }
}

/// Assert every strategy rejects `array` as invalid input.
pub fn assert_all_reject(array: Option<&[i64]>) {
    for (kind, result) in solve_with_each(array) {
        match result {
            Err(SolveError::InvalidInput { .. }) => {}
            other => panic!("{} on {:?}: expected InvalidInput, got {:?}", kind, array, other),
        }
    }
}

/// `[0, n]` without `missing`, in a fixed scrambled order.
pub fn gapped(n: i64, missing: i64) -> Vec<i64> {
    let mut values: Vec<i64> = (0..=n).filter(|&v| v != missing).collect();
    // Deterministic scramble: reverse, then rotate by a third
    values.reverse();
    let len = values.len();
    values.rotate_left(len / 3);
    values
}
