use std::hash::Hash;
use std::iter::Sum;

use crate::iter::{frequency_table, unique};

/// Sums an iterable.
pub fn sum<I>(iterable: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Sum,
{
    iterable.into_iter().sum()
}

/// Returns the arithmetic mean, or `None` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Returns the integer mean truncated toward zero, or `None` for an empty
/// slice.
///
/// The sum is accumulated in `i128`, so it cannot overflow.
///
/// # Examples
///
/// ```rust
/// use utilkit::math::mean_integer;
///
/// assert_eq!(mean_integer(&[i64::MAX, i64::MAX]), Some(i64::MAX));
/// assert_eq!(mean_integer(&[1, 2]), Some(1));
/// assert_eq!(mean_integer(&[-1, -2]), Some(-1));
/// ```
pub fn mean_integer(values: &[i64]) -> Option<i64> {
    let count = i128::try_from(values.len()).ok().filter(|count| *count > 0)?;
    let total: i128 = values.iter().map(|value| i128::from(*value)).sum();
    i64::try_from(total / count).ok()
}

/// Returns the median, averaging the middle pair for even lengths.
///
/// `NaN` values sort after every other value.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(f64::midpoint(sorted[middle - 1], sorted[middle]))
    } else {
        Some(sorted[middle])
    }
}

/// Returns the integer median; for even lengths the middle pair's mean,
/// truncated toward zero.
pub fn median_integer(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let total = i128::from(sorted[middle - 1]) + i128::from(sorted[middle]);
        i64::try_from(total / 2).ok()
    } else {
        Some(sorted[middle])
    }
}

/// Returns every most frequent value, in first-seen order.
///
/// An empty input yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use utilkit::math::mode;
///
/// assert_eq!(mode([1, 1, 2, 4, 4]), vec![1, 4]);
/// assert_eq!(mode(["b", "a"]), vec!["b", "a"]);
/// ```
pub fn mode<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let values: Vec<I::Item> = iterable.into_iter().collect();
    let table = frequency_table(values.iter());
    let Some(highest) = table.values().copied().max() else {
        return Vec::new();
    };
    unique(values.iter())
        .into_iter()
        .filter(|value| table.get(value) == Some(&highest))
        .cloned()
        .collect()
}
