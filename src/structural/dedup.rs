//! Order-preserving de-duplication.

/// Returns the first occurrence of each distinct value, in first-seen
/// order.
///
/// Equality is plain [`PartialEq`]; no `Hash` or `Ord` bound is
/// required, at the cost of a linear scan over the accumulated result
/// per element.
///
/// # Examples
///
/// ```rust
/// use lowbar::structural::uniq;
///
/// assert_eq!(uniq(vec![1, 2, 1, 3, 1, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(uniq(Vec::<i32>::new()), Vec::<i32>::new());
/// ```
pub fn uniq<C>(sequence: C) -> Vec<C::Item>
where
    C: IntoIterator,
    C::Item: PartialEq,
{
    let mut distinct = Vec::new();
    for element in sequence {
        if !distinct.contains(&element) {
            distinct.push(element);
        }
    }
    distinct
}
