//! Finite generators and positioning helpers.

use std::iter::{FusedIterator, RepeatN};

/// Returns the iterator positioned after the first `count` elements.
///
/// Stops early if the iterable runs out first; `count == 0` leaves it as is.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::skip;
///
/// let rest: Vec<i32> = skip(vec![1, 2, 3, 4], 2).collect();
/// assert_eq!(rest, vec![3, 4]);
/// assert_eq!(skip(vec![1], 5).next(), None);
/// ```
pub fn skip<I: IntoIterator>(iterable: I, count: usize) -> I::IntoIter {
    let mut iterator = iterable.into_iter();
    if count > 0 {
        iterator.nth(count - 1);
    }
    iterator
}

/// Collects the first `count` elements.
pub fn first<I: IntoIterator>(iterable: I, count: usize) -> Vec<I::Item> {
    iterable.into_iter().take(count).collect()
}

/// Yields clones of `value`, `times` times.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::repeat;
///
/// assert_eq!(repeat("ab", 3).collect::<String>(), "ababab");
/// ```
pub fn repeat<T: Clone>(value: T, times: usize) -> RepeatN<T> {
    std::iter::repeat_n(value, times)
}

/// Yields `function(0)`, `function(1)`, ..., `function(times - 1)`.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::map_repeat;
///
/// let squares: Vec<usize> = map_repeat(|index| index * index, 4).collect();
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn map_repeat<T, F>(function: F, times: usize) -> std::iter::Map<std::ops::Range<usize>, F>
where
    F: FnMut(usize) -> T,
{
    (0..times).map(function)
}

/// Yields the elements of `items` in order, `times` times over.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::cycle;
///
/// let values: Vec<&i32> = cycle(&[1, 2], 3).collect();
/// assert_eq!(values, vec![&1, &2, &1, &2, &1, &2]);
/// ```
pub const fn cycle<T>(items: &[T], times: usize) -> Cycle<'_, T> {
    Cycle {
        items,
        rounds_left: times,
        position: 0,
    }
}

/// Iterator returned by [`cycle`].
///
/// `size_hint` is exact unless the total length exceeds `usize::MAX`, in
/// which case the upper bound is `None`.
#[derive(Debug, Clone)]
pub struct Cycle<'a, T> {
    items: &'a [T],
    rounds_left: usize,
    position: usize,
}

impl<'a, T> Iterator for Cycle<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rounds_left == 0 || self.items.is_empty() {
            return None;
        }
        let item = &self.items[self.position];
        self.position += 1;
        if self.position == self.items.len() {
            self.position = 0;
            self.rounds_left -= 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rounds_left == 0 {
            return (0, Some(0));
        }
        let remaining = self
            .items
            .len()
            .checked_mul(self.rounds_left)
            .map(|total| total - self.position);
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl<T> FusedIterator for Cycle<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(1, vec![2, 3])]
    #[case(3, vec![])]
    #[case(10, vec![])]
    fn test_skip(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(skip(vec![1, 2, 3], count).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_first_takes_at_most_count() {
        assert_eq!(first(1..=10, 3), vec![1, 2, 3]);
        assert_eq!(first(1..=2, 3), vec![1, 2]);
        assert!(first(1..=2, 0).is_empty());
    }

    #[rstest]
    fn test_repeat_zero_times_is_empty() {
        assert_eq!(repeat(1, 0).count(), 0);
    }

    #[rstest]
    fn test_map_repeat_recreated_restarts() {
        let first_pass: Vec<usize> = map_repeat(|index| index + 10, 3).collect();
        let second_pass: Vec<usize> = map_repeat(|index| index + 10, 3).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[rstest]
    fn test_cycle_size_hint_counts_down() {
        let mut values = cycle(&['a', 'b', 'c'], 2);
        assert_eq!(values.size_hint(), (6, Some(6)));
        values.next();
        values.next();
        assert_eq!(values.size_hint(), (4, Some(4)));
        assert_eq!(values.by_ref().count(), 4);
        assert_eq!(values.next(), None);
    }

    #[rstest]
    fn test_cycle_of_empty_or_zero_rounds() {
        assert_eq!(cycle::<i32>(&[], 5).count(), 0);
        assert_eq!(cycle(&[1], 0).size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn test_cycle_size_hint_when_total_overflows() {
        let mut values = cycle(&[1, 2], usize::MAX);
        assert_eq!(values.size_hint(), (usize::MAX, None));
        assert_eq!(values.next(), Some(&1));
        assert_eq!(values.size_hint(), (usize::MAX, None));
    }
}
