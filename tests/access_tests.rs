#![cfg(feature = "collection")]
//! Unit tests for the positional accessors.

use lowbar::collection::{first, first_n, index_of, last, last_n};
use rstest::rstest;

#[rstest]
fn first_returns_the_head() {
    assert_eq!(first(&[1, 2, 3]), Some(&1));
    assert_eq!(first(&[] as &[i32]), None);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![1, 2])]
#[case(9, vec![1, 2, 3])]
fn first_n_clamps_to_the_sequence(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(first_n(&[1, 2, 3], count), expected);
}

#[rstest]
fn last_returns_the_tail_element() {
    assert_eq!(last(&[1, 2, 3]), Some(&3));
    assert_eq!(last(&[] as &[i32]), None);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![2, 3])]
#[case(9, vec![1, 2, 3])]
fn last_n_clamps_to_the_sequence(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(last_n(&[1, 2, 3], count), expected);
}

#[rstest]
fn index_of_finds_the_first_occurrence() {
    assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
}

#[rstest]
fn index_of_is_none_for_an_absent_value() {
    assert_eq!(index_of(&[10, 20, 30], &40), None);
}
