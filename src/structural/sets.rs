//! Set-like operations that keep first-appearance order.

/// Returns the values present in *every* input sequence.
///
/// Each value appears once, ordered by its first appearance in the
/// first sequence (any value shared by all inputs necessarily appears
/// there). An empty input list yields an empty result.
///
/// # Examples
///
/// ```rust
/// use lowbar::structural::intersection;
///
/// let shared = intersection(vec![
///     vec!["moe", "curly", "larry"],
///     vec!["moe", "groucho"],
/// ]);
/// assert_eq!(shared, vec!["moe"]);
/// ```
pub fn intersection<T: PartialEq>(sequences: Vec<Vec<T>>) -> Vec<T> {
    let mut sequences = sequences;
    if sequences.is_empty() {
        return Vec::new();
    }
    let first = sequences.remove(0);

    let mut shared = Vec::new();
    for candidate in first {
        if shared.contains(&candidate) {
            continue;
        }
        if sequences.iter().all(|other| other.contains(&candidate)) {
            shared.push(candidate);
        }
    }
    shared
}

/// Returns the values of `first` that appear in none of `others`.
///
/// Each value appears once, in its `first`-appearance order. With no
/// `others`, this is [`uniq`](crate::structural::uniq) of `first`.
///
/// # Examples
///
/// ```rust
/// use lowbar::structural::difference;
///
/// let remaining = difference(vec![1, 2, 3, 4], vec![vec![2, 30], vec![4]]);
/// assert_eq!(remaining, vec![1, 3]);
/// ```
pub fn difference<T: PartialEq>(first: Vec<T>, others: Vec<Vec<T>>) -> Vec<T> {
    let mut remaining = Vec::new();
    for candidate in first {
        if remaining.contains(&candidate) {
            continue;
        }
        if others.iter().any(|other| other.contains(&candidate)) {
            continue;
        }
        remaining.push(candidate);
    }
    remaining
}
