//! Transposing sequences with padding.

/// Zips a sequence of sequences into rows of positionally matched
/// values.
///
/// The result has one row per index up to the *longest* input's length,
/// and each row has one slot per input sequence. A sequence exhausted
/// before the end contributes `None` — the missing-value sentinel,
/// distinguishable from any legitimate element.
///
/// # Examples
///
/// ```rust
/// use lowbar::structural::zip;
///
/// let rows = zip(vec![vec!["a", "b", "c"], vec!["1", "2"]]);
/// assert_eq!(rows, vec![
///     vec![Some("a"), Some("1")],
///     vec![Some("b"), Some("2")],
///     vec![Some("c"), None],
/// ]);
/// ```
pub fn zip<T>(sequences: Vec<Vec<T>>) -> Vec<Vec<Option<T>>> {
    let width = sequences.len();
    let length = sequences.iter().map(Vec::len).max().unwrap_or(0);

    let mut columns: Vec<_> = sequences.into_iter().map(Vec::into_iter).collect();
    let mut rows = Vec::with_capacity(length);
    for _ in 0..length {
        let mut row = Vec::with_capacity(width);
        for column in &mut columns {
            row.push(column.next());
        }
        rows.push(row);
    }
    rows
}
