use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::collection::large_to_small;

/// Returns `a ∪ b`.
///
/// When both arguments are the same set, a copy of it is returned directly.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use utilkit::set::union;
///
/// let a = HashSet::from([1, 2]);
/// let b = HashSet::from([2, 3]);
/// assert_eq!(union(&a, &b), HashSet::from([1, 2, 3]));
/// ```
#[must_use]
pub fn union<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    if std::ptr::eq(a, b) {
        return a.clone();
    }
    let (larger, smaller) = large_to_small(a, b);
    let mut result = larger.clone();
    result.extend(smaller.iter().cloned());
    result
}

/// Returns `a ∩ b`.
///
/// The smaller operand is scanned against the larger one; on equal sizes `b`
/// is scanned.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use utilkit::set::intersection;
///
/// let a = HashSet::from([1, 2, 3]);
/// let b = HashSet::from([2, 3, 4]);
/// assert_eq!(intersection(&a, &b), HashSet::from([2, 3]));
/// ```
#[must_use]
pub fn intersection<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    let (larger, smaller) = large_to_small(a, b);
    let mut result = HashSet::with_capacity_and_hasher(smaller.len(), a.hasher().clone());
    result.extend(
        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned(),
    );
    result
}

/// Returns `a \ b`: the elements of `a` that are not in `b`.
///
/// Not commutative.
#[must_use]
pub fn difference<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    if std::ptr::eq(a, b) {
        return HashSet::with_hasher(a.hasher().clone());
    }
    let mut result = a.clone();
    for element in b {
        result.remove(element);
    }
    result
}

/// Returns `a △ b`: the elements in exactly one of the two sets.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use utilkit::set::symmetric_difference;
///
/// let a = HashSet::from([1, 2, 3]);
/// let b = HashSet::from([3, 4]);
/// assert_eq!(symmetric_difference(&a, &b), HashSet::from([1, 2, 4]));
/// ```
#[must_use]
pub fn symmetric_difference<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    if std::ptr::eq(a, b) {
        return HashSet::with_hasher(a.hasher().clone());
    }
    let mut result = a.clone();
    for element in b {
        if !result.remove(element) {
            result.insert(element.clone());
        }
    }
    result
}

/// Returns `true` if every element of `a` is in `b`.
pub fn is_subset<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if a.len() > b.len() {
        return false;
    }
    a.iter().all(|element| b.contains(element))
}

/// Returns `true` if every element of `b` is in `a`.
pub fn is_superset<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    is_subset(b, a)
}

/// Returns `true` if `a` and `b` share no element.
///
/// A non-empty set is never disjoint from itself.
pub fn is_disjoint<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if std::ptr::eq(a, b) {
        return a.is_empty();
    }
    let (larger, smaller) = large_to_small(a, b);
    !smaller.iter().any(|element| larger.contains(element))
}

/// Returns the Jaccard similarity `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets are fully similar (`1.0`). The result is clamped to
/// `[0.0, 1.0]`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use utilkit::set::jaccard_index;
///
/// let a = HashSet::from([0, 1, 2, 5, 6]);
/// let b = HashSet::from([0, 2, 3, 4, 5, 7, 9]);
/// assert!((jaccard_index(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
///
/// let empty: HashSet<i32> = HashSet::new();
/// assert_eq!(jaccard_index(&empty, &empty), 1.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn jaccard_index<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let (larger, smaller) = large_to_small(a, b);
    let shared = smaller
        .iter()
        .filter(|element| larger.contains(*element))
        .count();
    let combined = a.len() + b.len() - shared;
    (shared as f64 / combined as f64).clamp(0.0, 1.0)
}
