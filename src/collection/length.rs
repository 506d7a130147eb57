//! Uniform element counts.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A container that knows how many elements it holds.
///
/// Strings report their length in bytes, matching [`str::len`].
pub trait Length {
    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty_container(&self) -> bool {
        self.length() == 0
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<C: Length + ?Sized> Length for &C {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Returns `(larger, smaller)`.
///
/// When both have the same length, `first` is treated as the larger one, so
/// the order of the arguments is kept.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use utilkit::collection::large_to_small;
///
/// let a: HashSet<i32> = [1, 2].into_iter().collect();
/// let b: HashSet<i32> = [3, 4].into_iter().collect();
///
/// let (larger, smaller) = large_to_small(&a, &b);
/// assert!(std::ptr::eq(larger, &a));
/// assert!(std::ptr::eq(smaller, &b));
/// ```
#[inline]
pub fn large_to_small<'a, C: Length + ?Sized>(first: &'a C, second: &'a C) -> (&'a C, &'a C) {
    if first.length() >= second.length() {
        (first, second)
    } else {
        (second, first)
    }
}
