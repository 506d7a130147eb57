//! Partitioning and run-boundary scans.

/// Splits an iterable into `(passed, failed)` in one pass.
///
/// The predicate receives each element and its index. Both outputs keep the
/// input's relative order.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::partition;
///
/// let (head, tail) = partition(["a", "b", "c", "d"], |_, index| index < 1);
/// assert_eq!(head, vec!["a"]);
/// assert_eq!(tail, vec!["b", "c", "d"]);
/// ```
pub fn partition<I, P>(iterable: I, mut predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for (index, element) in iterable.into_iter().enumerate() {
        if predicate(&element, index) {
            passed.push(element);
        } else {
            failed.push(element);
        }
    }
    (passed, failed)
}

/// Returns the index where the trailing run of `value` begins.
///
/// `None` if the slice does not end with `value`.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::first_index_of_last_group;
///
/// assert_eq!(first_index_of_last_group(&[1, 0, 2, 2, 2], &2), Some(2));
/// assert_eq!(first_index_of_last_group(&[2, 2, 1], &2), None);
/// ```
pub fn first_index_of_last_group<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
    if slice.last() != Some(value) {
        return None;
    }
    Some(
        slice
            .iter()
            .rposition(|element| element != value)
            .map_or(0, |index| index + 1),
    )
}

/// Returns the index where the leading run of `value` ends.
///
/// `None` if the slice does not start with `value`.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::last_index_of_first_group;
///
/// assert_eq!(last_index_of_first_group(&[' ', ' ', 'x', ' '], &' '), Some(1));
/// assert_eq!(last_index_of_first_group(&['x', ' '], &' '), None);
/// ```
pub fn last_index_of_first_group<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
    if slice.first() != Some(value) {
        return None;
    }
    Some(
        slice
            .iter()
            .position(|element| element != value)
            .map_or(slice.len() - 1, |index| index - 1),
    )
}
