#![cfg(feature = "shuffle")]
//! Unit and property tests for shuffled copies.

use lowbar::structural::shuffle;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn shuffle_does_not_mutate_the_input() {
    let values = vec![1, 2, 3, 4, 5];
    let _ = shuffle(values.clone());
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn shuffle_of_empty_input_is_empty() {
    assert_eq!(shuffle(Vec::<i32>::new()), Vec::<i32>::new());
}

proptest! {
    /// The result is a permutation: same elements, same multiplicities
    #[test]
    fn prop_shuffle_is_a_permutation(values in prop::collection::vec(0i32..100, 0..64)) {
        let mut shuffled = shuffle(values.clone());
        shuffled.sort_unstable();

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }
}
