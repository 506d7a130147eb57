//! Validation errors shared by the library.
//!
//! Every function that checks a precondition reports the violation through
//! [`ValidationError`] instead of panicking. Validation always runs; there is
//! no release-mode shortcut.

use std::fmt;

/// A violated precondition.
///
/// Bounds are carried as their `Debug` rendering so the error stays
/// independent of the element type that produced it.
///
/// # Examples
///
/// ```rust
/// use utilkit::error::ValidationError;
///
/// let error = ValidationError::InvertedRange {
///     lower: "5".to_string(),
///     upper: "1".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invalid range: lower bound 5 is greater than upper bound 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A range was built with `lower > upper`.
    InvertedRange {
        /// The offending lower bound.
        lower: String,
        /// The offending upper bound.
        upper: String,
    },
    /// A range was built from an iterable with fewer than two values.
    MissingBound {
        /// How many values the iterable produced.
        found: usize,
    },
    /// A `min`/`max` pair was given with `min > max`.
    MinGreaterThanMax {
        /// The offending minimum.
        min: String,
        /// The offending maximum.
        max: String,
    },
    /// A floating-point `min`/`max` pair included an infinity.
    NonFiniteBounds {
        /// The given minimum.
        min: String,
        /// The given maximum.
        max: String,
    },
    /// A chunk size of zero was requested.
    ZeroChunkSize,
    /// A backoff configuration could never produce a valid schedule.
    InvalidBackoff {
        /// Which setting is wrong.
        reason: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn inverted_range<T: fmt::Debug>(lower: &T, upper: &T) -> Self {
        Self::InvertedRange {
            lower: format!("{lower:?}"),
            upper: format!("{upper:?}"),
        }
    }

    pub(crate) fn min_greater_than_max<T: fmt::Debug>(min: &T, max: &T) -> Self {
        Self::MinGreaterThanMax {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { lower, upper } => write!(
                formatter,
                "invalid range: lower bound {lower} is greater than upper bound {upper}"
            ),
            Self::MissingBound { found } => write!(
                formatter,
                "invalid range: expected two bounds, found {found}"
            ),
            Self::MinGreaterThanMax { min, max } => {
                write!(formatter, "minimum {min} is greater than maximum {max}")
            }
            Self::NonFiniteBounds { min, max } => {
                write!(formatter, "bounds {min} and {max} must be finite")
            }
            Self::ZeroChunkSize => write!(formatter, "chunk size must be greater than zero"),
            Self::InvalidBackoff { reason } => {
                write!(formatter, "invalid backoff configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
