//! Content comparison across containers of the same kind.
//!
//! Sequences are compared as multisets: same elements, same multiplicities,
//! any order. Sets and maps compare membership, independent of hasher.
//! Comparing different container kinds (a slice against a set, say) does not
//! compile.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::DefaultHashMap;

/// Containers whose contents can be compared with one another.
pub trait Identical<Rhs: ?Sized = Self> {
    /// Returns `true` if both containers hold exactly the same contents.
    fn identical(&self, other: &Rhs) -> bool;
}

impl<T: Eq + Hash> Identical for [T] {
    fn identical(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }

        let mut counts: DefaultHashMap<&T, isize> = DefaultHashMap::default();
        for element in self {
            *counts.entry(element).or_insert(0) += 1;
        }
        for element in other {
            match counts.get_mut(element) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq + Hash> Identical for Vec<T> {
    fn identical(&self, other: &Self) -> bool {
        self.as_slice().identical(other.as_slice())
    }
}

impl<T, S1, S2> Identical<HashSet<T, S2>> for HashSet<T, S1>
where
    T: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn identical(&self, other: &HashSet<T, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<K, V, S1, S2> Identical<HashMap<K, V, S2>> for HashMap<K, V, S1>
where
    K: Eq + Hash,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn identical(&self, other: &HashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|found| found == value))
    }
}

impl<T: Ord> Identical for BTreeSet<T> {
    fn identical(&self, other: &Self) -> bool {
        self == other
    }
}

impl<K: Ord, V: PartialEq> Identical for BTreeMap<K, V> {
    fn identical(&self, other: &Self) -> bool {
        self == other
    }
}

/// Returns `true` if `first` and `second` hold the same contents.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::collection::identical;
///
/// assert!(identical(&vec![1, 2, 2, 3], &vec![2, 3, 1, 2]));
/// assert!(!identical(&vec![1, 1, 2], &vec![1, 2, 2]));
///
/// let a = HashMap::from([("x", 1), ("y", 2)]);
/// let b = HashMap::from([("y", 2), ("x", 1)]);
/// assert!(identical(&a, &b));
/// ```
pub fn identical<A, B>(first: &A, second: &B) -> bool
where
    A: Identical<B> + ?Sized,
    B: ?Sized,
{
    first.identical(second)
}
