use std::cmp::Ordering;

/// A boxed three-way comparator, as accepted by [`combine`].
pub type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// Orders `a` before `b` when `a < b`.
#[inline]
pub fn ascending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Orders `a` before `b` when `a > b`.
#[inline]
pub fn descending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    ascending(b, a)
}

/// Returns a comparator ordering elements by ascending `projection`.
///
/// # Examples
///
/// ```rust
/// use utilkit::sort::ascending_by;
///
/// let mut words = vec![String::from("ccc"), String::from("a"), String::from("bb")];
/// words.sort_by(ascending_by(|word: &String| word.len()));
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn ascending_by<T, K, F>(projection: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| ascending(&projection(a), &projection(b))
}

/// Returns a comparator ordering elements by descending `projection`.
pub fn descending_by<T, K, F>(projection: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| descending(&projection(a), &projection(b))
}

/// Chains comparators lexicographically.
///
/// The first comparator that does not return `Equal` decides; if all of them
/// return `Equal` (or there are none), so does the combination.
pub fn combine<'a, T: ?Sized + 'a>(
    comparators: Vec<Comparator<'a, T>>,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    move |a: &T, b: &T| {
        comparators
            .iter()
            .map(|comparator| comparator(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Returns `true` if no adjacent pair of `slice` compares `Greater`.
///
/// # Examples
///
/// ```rust
/// use utilkit::sort::{ascending, is_sorted};
///
/// assert!(is_sorted(&[1, 1, 2, 3, 3], ascending));
/// assert!(!is_sorted(&[3, 3, 2, 1, 1], ascending));
/// ```
pub fn is_sorted<T, F>(slice: &[T], mut comparator: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    slice
        .windows(2)
        .all(|pair| comparator(&pair[0], &pair[1]) != Ordering::Greater)
}
