#![cfg(feature = "structural")]
//! Unit tests for zip and its missing-value sentinel.

use lowbar::structural::zip;
use rstest::rstest;

#[rstest]
fn zip_pads_shorter_sequences_with_the_sentinel() {
    let rows = zip(vec![
        vec!["a", "b", "c", "d"],
        vec!["1", "2", "3"],
    ]);
    assert_eq!(rows, vec![
        vec![Some("a"), Some("1")],
        vec![Some("b"), Some("2")],
        vec![Some("c"), Some("3")],
        vec![Some("d"), None],
    ]);
}

#[rstest]
fn zip_row_count_matches_the_longest_input() {
    let rows = zip(vec![vec![1], vec![1, 2, 3, 4, 5], vec![1, 2]]);
    assert_eq!(rows.len(), 5);
}

#[rstest]
fn zip_row_width_matches_the_input_count() {
    let rows = zip(vec![vec![1, 2], vec![3], vec![4, 5]]);
    assert!(rows.iter().all(|row| row.len() == 3));
}

#[rstest]
fn zip_of_nothing_is_empty() {
    assert_eq!(zip(Vec::<Vec<i32>>::new()), Vec::<Vec<Option<i32>>>::new());
}

#[rstest]
fn zip_sentinel_is_distinguishable_from_real_values() {
    // A legitimate zero is Some(0), never confused with the padding
    let rows = zip(vec![vec![0], vec![0, 0]]);
    assert_eq!(rows, vec![vec![Some(0), Some(0)], vec![None, Some(0)]]);
}
