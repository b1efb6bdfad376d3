//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the strategies. If a strategy and an oracle disagree, the oracle is right.

use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Linear scan for the smallest absent value below `len`.
///
/// O(n²) but trivially correct.
pub fn oracle_missing_number(array: &[i64]) -> i64 {
    (0..array.len() as i64)
        .find(|candidate| !array.contains(candidate))
        .unwrap_or(-1)
}

/// Whether the validator should accept `array`.
pub fn oracle_is_valid(array: Option<&[i64]>) -> bool {
    match array {
        None => false,
        Some(values) => {
            let unique: HashSet<&i64> = values.iter().collect();
            !values.is_empty() && values.iter().all(|&v| v >= 0) && unique.len() == values.len()
        }
    }
}

// =============================================================================
// INPUT STRATEGIES
// =============================================================================

/// Distinct non-negative values, mostly small so gaps are common.
pub fn distinct_naturals() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::hash_set(
        prop_oneof![
            8 => 0i64..64,
            1 => 0i64..i64::MAX,
        ],
        1..48,
    )
    .prop_map(|set| set.into_iter().collect::<Vec<_>>())
    .prop_shuffle()
}

/// Arbitrary small arrays, valid or not.
pub fn any_array() -> impl Strategy<Value = Option<Vec<i64>>> {
    prop::option::weighted(0.95, prop::collection::vec(-8i64..40, 0..24))
}

// =============================================================================
// ORACLE SANITY
// =============================================================================

#[test]
fn oracle_agrees_with_known_answers() {
    assert_eq!(oracle_missing_number(&[3, 0, 1]), 2);
    assert_eq!(oracle_missing_number(&[9, 6, 4, 2, 3, 5, 7, 0, 1, 8]), -1);
    assert_eq!(oracle_missing_number(&[1, 2, 3]), 0);
    assert!(!oracle_is_valid(Some(&[0, 0])));
    assert!(!oracle_is_valid(None));
}
