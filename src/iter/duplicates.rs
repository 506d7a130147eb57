//! Duplicate detection and counting.

use std::hash::Hash;

use crate::collection::{DefaultHashMap, DefaultHashSet};

/// Returns every repeated occurrence after the first sighting, in encounter
/// order.
///
/// An element seen `n` times appears `n - 1` times in the result.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::all_duplicates;
///
/// assert_eq!(all_duplicates([1, 2, 1, 3, 1, 2]), vec![1, 1, 2]);
/// ```
pub fn all_duplicates<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut seen = DefaultHashSet::default();
    let mut repeats = Vec::new();
    for element in iterable {
        if seen.contains(&element) {
            repeats.push(element);
        } else {
            seen.insert(element);
        }
    }
    repeats
}

/// Returns each element that occurs more than once, once.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::duplicates;
///
/// let repeated = duplicates(["a", "b", "a", "a"]);
/// assert_eq!(repeated.len(), 1);
/// assert!(repeated.contains("a"));
/// ```
pub fn duplicates<I>(iterable: I) -> DefaultHashSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut seen = DefaultHashSet::default();
    let mut repeated = DefaultHashSet::default();
    for element in iterable {
        if seen.contains(&element) {
            repeated.insert(element);
        } else {
            seen.insert(element);
        }
    }
    repeated
}

/// Returns the first occurrence of each element, in encounter order.
pub fn unique<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = DefaultHashSet::default();
    iterable
        .into_iter()
        .filter(|element| seen.insert(element.clone()))
        .collect()
}

/// Counts the occurrences of each element in one pass.
///
/// # Examples
///
/// ```rust
/// use utilkit::iter::frequency_table;
///
/// let table = frequency_table([3, 1, 3, 3]);
/// assert_eq!(table[&3], 3);
/// assert_eq!(table[&1], 1);
/// assert_eq!(table.get(&2), None);
/// ```
pub fn frequency_table<I>(iterable: I) -> DefaultHashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut table = DefaultHashMap::default();
    for element in iterable {
        *table.entry(element).or_insert(0) += 1;
    }
    table
}
