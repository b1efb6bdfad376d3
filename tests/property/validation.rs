//! Validation contract on arbitrary input.

use super::common::{in_answer_range, solve_with_each, unguarded_strategies};
use super::oracles::{any_array, oracle_is_valid};
use gapfinder::{ArrayValidator, InputValidator, Rejection, SolveError};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// The validator accepts exactly what the oracle accepts.
    #[test]
    fn validator_matches_oracle(array in any_array()) {
        let array = array.as_deref();
        prop_assert_eq!(ArrayValidator::new().validate(array), oracle_is_valid(array));
    }

    /// Strategies reject exactly the arrays the validator rejects, with the
    /// validator's reason.
    #[test]
    fn strategies_fail_iff_validation_fails(array in any_array()) {
        let array = array.as_deref();
        let verdict = ArrayValidator::new().check(array);
        for (kind, result) in solve_with_each(array) {
            match verdict {
                Ok(()) => {
                    prop_assert!(result.is_ok(), "{} failed on valid {:?}", kind, array);
                }
                Err(reason) => {
                    prop_assert_eq!(result, Err(SolveError::InvalidInput { reason }));
                }
            }
        }
    }

    /// Behind a validator that admits everything, strategies still answer,
    /// with the sentinel or an index into the array.
    #[test]
    fn unguarded_strategies_stay_in_range(
        array in prop_oneof![
            any_array(),
            prop::option::of(prop::collection::vec(any::<i64>(), 0..8)),
        ]
    ) {
        let len = array.as_ref().map_or(0, Vec::len);
        for strategy in unguarded_strategies() {
            let result = strategy.find_missing_number(array.as_deref());
            prop_assert!(
                matches!(result, Ok(answer) if in_answer_range(answer, len)),
                "{} on {:?} gave {:?}",
                strategy.name(),
                array,
                result
            );
        }
    }

    /// Any negative value is reported, pointing at a negative element.
    #[test]
    fn negatives_point_at_negatives(
        mut values in prop::collection::vec(0i64..50, 0..20),
        neg in i64::MIN..0,
        at in any::<prop::sample::Index>(),
    ) {
        let position = at.index(values.len() + 1);
        values.insert(position, neg);
        match ArrayValidator::new().check(Some(values.as_slice())) {
            Err(Rejection::Negative { index, value }) => {
                prop_assert!(value < 0);
                prop_assert_eq!(values[index], value);
            }
            other => {
                prop_assert!(false, "expected Negative, got {:?}", other);
            }
        }
    }
}
