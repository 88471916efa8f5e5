//! Positional accessors: `first`, `last`, and friends.

/// Returns the first element, if any.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns a copy of the first `count` elements.
///
/// A `count` past the end yields the whole sequence; zero yields an
/// empty vector.
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element, if any.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns a copy of the last `count` elements, oldest first.
///
/// A `count` past the start yields the whole sequence.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3, 4], 2), vec![3, 4]);
/// assert_eq!(last_n(&[1, 2], 5), vec![1, 2]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    let start = sequence.len().saturating_sub(count);
    sequence[start..].to_vec()
}

/// Returns the position of the first element equal to `target`.
///
/// `None` when the value is absent.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|element| element == target)
}
