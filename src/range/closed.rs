//! Inclusive interval value type.

use std::cmp::Ordering;
use std::fmt;

use crate::error::ValidationError;

/// An inclusive interval `[lower, upper]` with `lower <= upper`.
///
/// The invariant is checked by every constructor; bounds that cannot be
/// ordered against each other (such as `f64::NAN`) are rejected too.
///
/// # Examples
///
/// ```rust
/// use utilkit::range::Range;
///
/// let outer = Range::new(0, 10).unwrap();
/// let inner = Range::new(2, 5).unwrap();
///
/// assert!(inner.is_subrange(&outer));
/// assert!(outer.is_superrange(&inner));
/// assert!(outer.intersects(&inner));
///
/// assert!(Range::new(5, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + fmt::Debug> Range<T> {
    /// Creates a range from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedRange`] if `lower > upper` or the
    /// bounds are incomparable.
    pub fn new(lower: T, upper: T) -> Result<Self, ValidationError> {
        match lower.partial_cmp(&upper) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { lower, upper }),
            Some(Ordering::Greater) | None => {
                Err(ValidationError::inverted_range(&lower, &upper))
            }
        }
    }

    /// Creates a range from the first two values of an iterable.
    ///
    /// Any further values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBound`] if the iterable yields fewer
    /// than two values, or [`ValidationError::InvertedRange`] if they are out
    /// of order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::range::Range;
    ///
    /// let range = Range::from_pair(vec![1, 4]).unwrap();
    /// assert_eq!(range, Range::new(1, 4).unwrap());
    /// ```
    pub fn from_pair<I: IntoIterator<Item = T>>(pair: I) -> Result<Self, ValidationError> {
        let mut values = pair.into_iter();
        let lower = values
            .next()
            .ok_or(ValidationError::MissingBound { found: 0 })?;
        let upper = values
            .next()
            .ok_or(ValidationError::MissingBound { found: 1 })?;
        Self::new(lower, upper)
    }
}

impl<T> Range<T> {
    /// Returns the lower bound.
    #[inline]
    pub const fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper(&self) -> &T {
        &self.upper
    }

    /// Consumes the range, returning `(lower, upper)`.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T: PartialOrd> Range<T> {
    /// Returns `true` if `lower <= value <= upper`.
    #[inline]
    pub fn has(&self, value: &T) -> bool {
        self.lower <= *value && *value <= self.upper
    }

    /// Returns `true` if every value of `self` lies within `other`.
    pub fn is_subrange(&self, other: &Self) -> bool {
        self.lower >= other.lower && self.upper <= other.upper
    }

    /// Returns `true` if every value of `other` lies within `self`.
    pub fn is_superrange(&self, other: &Self) -> bool {
        other.is_subrange(self)
    }

    /// Returns `true` if the two closed intervals share at least one value.
    ///
    /// Ranges that only touch at an endpoint intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::range::Range;
    ///
    /// let left = Range::new(1, 3).unwrap();
    /// let right = Range::new(3, 5).unwrap();
    /// let far = Range::new(6, 9).unwrap();
    ///
    /// assert!(left.intersects(&right));
    /// assert!(!left.intersects(&far));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl<T: PartialEq> Range<T> {
    /// Returns `true` if both bounds are equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.lower, self.upper].into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Range<T> {
    type Item = &'a T;
    type IntoIter = std::array::IntoIter<&'a T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [&self.lower, &self.upper].into_iter()
    }
}

impl<T: PartialOrd + fmt::Debug> TryFrom<(T, T)> for Range<T> {
    type Error = ValidationError;

    fn try_from((lower, upper): (T, T)) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Range<T>
where
    T: serde::Deserialize<'de> + PartialOrd + fmt::Debug,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Bounds<T> {
            lower: T,
            upper: T,
        }

        let Bounds { lower, upper } = Bounds::deserialize(deserializer)?;
        Self::new(lower, upper).map_err(serde::de::Error::custom)
    }
}
