//! Helpers shared by the container-oriented modules.
//!
//! - [`Length`]: a uniform element count over the standard containers
//! - [`large_to_small`]: orders two containers by size for iteration
//! - [`combine_iterables`] / [`concat_iterables`]: flatten iterables in order
//! - [`Identical`]: content comparison for sequences, sets and maps
//! - [`DefaultHashBuilder`]: the hasher used when a helper builds a new map or set
//!
//! # Examples
//!
//! ```rust
//! use utilkit::collection::{large_to_small, Length};
//!
//! let small = vec![1, 2];
//! let large = vec![1, 2, 3, 4];
//!
//! let (larger, smaller) = large_to_small(&small, &large);
//! assert_eq!(larger.length(), 4);
//! assert_eq!(smaller.length(), 2);
//! ```

mod identical;
mod length;

pub use identical::{Identical, identical};
pub use length::{Length, large_to_small};

use std::collections::{HashMap, HashSet};
use std::iter::{Chain, Flatten};

/// Hash builder used by helpers that create new maps and sets.
///
/// `std::hash::RandomState` unless the `fxhash` or `ahash` feature selects a
/// faster, non-DoS-resistant hasher. `fxhash` takes precedence.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by helpers that create new maps and sets.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by helpers that create new maps and sets.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// A `HashSet` using [`DefaultHashBuilder`].
pub type DefaultHashSet<T> = HashSet<T, DefaultHashBuilder>;

/// A `HashMap` using [`DefaultHashBuilder`].
pub type DefaultHashMap<K, V> = HashMap<K, V, DefaultHashBuilder>;

/// Flattens any number of iterables into one sequence, in order.
///
/// # Examples
///
/// ```rust
/// use utilkit::collection::combine_iterables;
///
/// let combined: Vec<i32> = combine_iterables([vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(combined, vec![1, 2, 3]);
/// ```
pub fn combine_iterables<I>(iterables: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterables.into_iter().flatten()
}

/// Chains two iterables with the same item type.
///
/// # Examples
///
/// ```rust
/// use utilkit::collection::concat_iterables;
///
/// let joined: Vec<char> = concat_iterables("ab".chars(), ['c']).collect();
/// assert_eq!(joined, vec!['a', 'b', 'c']);
/// ```
pub fn concat_iterables<A, B>(first: A, second: B) -> Chain<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    first.into_iter().chain(second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_combine_iterables_preserves_order() {
        let combined: Vec<i32> =
            combine_iterables(vec![vec![3, 2], vec![1], vec![], vec![0]]).collect();
        assert_eq!(combined, vec![3, 2, 1, 0]);
    }

    #[rstest]
    fn test_combine_iterables_of_nothing_is_empty() {
        let combined: Vec<i32> = combine_iterables(Vec::<Vec<i32>>::new()).collect();
        assert!(combined.is_empty());
    }

    #[rstest]
    fn test_concat_iterables_mixes_iterator_kinds() {
        let joined: Vec<i32> = concat_iterables(1..3, vec![7, 8]).collect();
        assert_eq!(joined, vec![1, 2, 7, 8]);
    }

    #[rstest]
    fn test_default_hash_set_behaves_like_a_set() {
        let mut set = DefaultHashSet::default();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }
}
