//! Binary search over sorted slices.
//!
//! The `_by` variants take a function comparing an element against the
//! target, like [`slice::binary_search_by`]. The slice must be sorted
//! consistently with that function; otherwise the returned index is
//! unspecified but in bounds.

use std::cmp::Ordering;

use super::Range;

/// Returns the first index whose element is not less than the target.
///
/// # Examples
///
/// ```rust
/// use utilkit::range::lower_bound_by;
///
/// let sorted = [1, 2, 2, 2, 5];
/// assert_eq!(lower_bound_by(&sorted, |element| element.cmp(&2)), 1);
/// ```
pub fn lower_bound_by<T, F>(slice: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = slice.len();
    while low < high {
        let middle = low + (high - low) / 2;
        if compare(&slice[middle]) == Ordering::Less {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

/// Returns the first index whose element is greater than the target.
pub fn upper_bound_by<T, F>(slice: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = slice.len();
    while low < high {
        let middle = low + (high - low) / 2;
        if compare(&slice[middle]) == Ordering::Greater {
            high = middle;
        } else {
            low = middle + 1;
        }
    }
    low
}

/// [`lower_bound_by`] using the element's natural order.
pub fn lower_bound<T: Ord>(slice: &[T], value: &T) -> usize {
    lower_bound_by(slice, |element| element.cmp(value))
}

/// [`upper_bound_by`] using the element's natural order.
pub fn upper_bound<T: Ord>(slice: &[T], value: &T) -> usize {
    upper_bound_by(slice, |element| element.cmp(value))
}

/// Returns the half-open index range of elements equal to `value`.
///
/// The range is empty (and positioned at the insertion point) when the value
/// is absent.
///
/// # Examples
///
/// ```rust
/// use utilkit::range::equal_range;
///
/// let sorted = [1, 3, 3, 3, 8];
/// assert_eq!(equal_range(&sorted, &3), 1..4);
/// assert_eq!(equal_range(&sorted, &5), 4..4);
/// ```
pub fn equal_range<T: Ord>(slice: &[T], value: &T) -> std::ops::Range<usize> {
    lower_bound(slice, value)..upper_bound(slice, value)
}

/// Returns the index of some element for which `compare` yields `Equal`.
///
/// If several elements match, any one of them may be returned.
pub fn binary_search_by<T, F>(slice: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let index = lower_bound_by(slice, &mut compare);
    slice
        .get(index)
        .filter(|element| compare(element) == Ordering::Equal)
        .map(|_| index)
}

/// Returns the half-open index range of elements lying inside `range`.
///
/// # Examples
///
/// ```rust
/// use utilkit::range::{Range, indices_within};
///
/// let sorted = [0, 2, 4, 6, 8];
/// let range = Range::new(3, 6).unwrap();
/// assert_eq!(indices_within(&sorted, &range), 2..4);
/// ```
pub fn indices_within<T: PartialOrd>(slice: &[T], range: &Range<T>) -> std::ops::Range<usize> {
    let start = lower_bound_by(slice, |element| {
        if element < range.lower() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });
    let end = upper_bound_by(slice, |element| {
        if element > range.upper() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    });
    start..end.max(start)
}
