//! Differential testing: strategies against the oracle and against each other.

use super::common::all_strategies;
use super::oracles::{distinct_naturals, oracle_missing_number};
use gapfinder::{Solver, StrategyKind, MISSING_NUMBER_INDICATOR};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Each strategy matches the oracle on valid input.
    #[test]
    fn diff_strategy_vs_oracle(values in distinct_naturals()) {
        let expected = oracle_missing_number(&values);
        for strategy in all_strategies() {
            prop_assert_eq!(
                strategy.find_missing_number(Some(values.as_slice())),
                Ok(expected),
                "{} disagrees with oracle on {:?}",
                strategy.name(),
                values
            );
        }
    }

    /// Sort-and-Search and Presence-Table always agree, errors included.
    #[test]
    fn strategies_agree(values in prop::collection::vec(-4i64..64, 0..32)) {
        let [a, b] = StrategyKind::ALL.map(|kind| kind.build_default());
        prop_assert_eq!(
            a.find_missing_number(Some(values.as_slice())),
            b.find_missing_number(Some(values.as_slice()))
        );
    }

    /// A shuffled [0, n) with one value knocked out yields that value.
    #[test]
    fn removed_value_is_found(
        (values, missing) in (2i64..300)
            .prop_flat_map(|n| (Just(n), 0..n - 1))
            .prop_flat_map(|(n, missing)| {
                let values: Vec<i64> = (0..n).filter(|&v| v != missing).collect();
                (Just(values).prop_shuffle(), Just(missing))
            })
    ) {
        for strategy in all_strategies() {
            prop_assert_eq!(strategy.find_missing_number(Some(values.as_slice())), Ok(missing));
        }
    }

    /// A shuffled [0, n) is complete.
    #[test]
    fn permutation_is_complete(
        values in (1i64..300).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
    ) {
        for strategy in all_strategies() {
            prop_assert_eq!(
                strategy.find_missing_number(Some(values.as_slice())),
                Ok(MISSING_NUMBER_INDICATOR)
            );
        }
    }

    /// Running twice through the same solver gives the same answer and
    /// leaves the caller's order alone.
    #[test]
    fn runs_are_idempotent(values in distinct_naturals()) {
        for kind in StrategyKind::ALL {
            let solver = Solver::new(kind.build_default());
            let before = values.clone();
            let first = solver.run(Some(values.as_slice()));
            let second = solver.run(Some(values.as_slice()));
            prop_assert_eq!(first, second);
            prop_assert_eq!(&values, &before);
        }
    }
}
