//! Uniformly shuffled copies of a sequence.

use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of the sequence.
///
/// The input is collected into a fresh vector and shuffled there; the
/// caller's sequence is untouched. The result is always a permutation
/// of the input.
///
/// # Examples
///
/// ```rust
/// use lowbar::structural::shuffle;
///
/// let mut shuffled = shuffle(vec![1, 2, 3, 4, 5]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<C>(sequence: C) -> Vec<C::Item>
where
    C: IntoIterator,
{
    let mut elements: Vec<_> = sequence.into_iter().collect();
    elements.shuffle(&mut rand::thread_rng());
    elements
}
