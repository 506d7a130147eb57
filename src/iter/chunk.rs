//! Fixed-size grouping.

use std::iter::FusedIterator;

use crate::error::ValidationError;

/// Splits a slice into groups of `size` elements.
///
/// The last group holds the remainder and may be shorter.
///
/// # Errors
///
/// Returns [`ValidationError::ZeroChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1], 0).is_err());
/// ```
pub fn chunk<T: Clone>(slice: &[T], size: usize) -> Result<Vec<Vec<T>>, ValidationError> {
    if size == 0 {
        return Err(ValidationError::ZeroChunkSize);
    }
    Ok(slice.chunks(size).map(<[T]>::to_vec).collect())
}

/// Lazily groups any iterable into vectors of `size` elements.
///
/// # Errors
///
/// Returns [`ValidationError::ZeroChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::chunk_iter;
///
/// let groups: Vec<Vec<char>> = chunk_iter("abcde".chars(), 2).unwrap().collect();
/// assert_eq!(groups, vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e']]);
/// ```
pub fn chunk_iter<I: IntoIterator>(
    iterable: I,
    size: usize,
) -> Result<Chunks<I::IntoIter>, ValidationError> {
    if size == 0 {
        return Err(ValidationError::ZeroChunkSize);
    }
    Ok(Chunks {
        inner: iterable.into_iter(),
        size,
    })
}

/// Iterator returned by [`chunk_iter`].
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let group: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if group.is_empty() { None } else { Some(group) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], 3, vec![])]
    #[case(&[1, 2, 3], 3, vec![vec![1, 2, 3]])]
    #[case(&[1, 2, 3], 5, vec![vec![1, 2, 3]])]
    #[case(&[1, 2, 3, 4], 1, vec![vec![1], vec![2], vec![3], vec![4]])]
    fn test_chunk(#[case] slice: &[i32], #[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
        assert_eq!(chunk(slice, size).unwrap(), expected);
    }

    #[rstest]
    fn test_chunk_rejects_zero() {
        assert_eq!(chunk(&[1, 2], 0), Err(ValidationError::ZeroChunkSize));
        assert!(chunk_iter(0..3, 0).is_err());
    }

    #[rstest]
    fn test_chunk_iter_is_lazy() {
        let mut groups = chunk_iter(1.., 3).unwrap();
        assert_eq!(groups.next(), Some(vec![1, 2, 3]));
        assert_eq!(groups.next(), Some(vec![4, 5, 6]));
    }

    #[rstest]
    fn test_chunk_iter_size_hint() {
        let groups = chunk_iter(0..10, 4).unwrap();
        assert_eq!(groups.size_hint(), (3, Some(3)));
        assert_eq!(groups.count(), 3);
    }
}
