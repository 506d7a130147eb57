//! Numeric helpers: bounding, random numbers and summary statistics.
//!
//! Statistics come in named variants per number kind: `mean` and `median`
//! work on `f64`, while `mean_integer` and `median_integer` work on `i64` with
//! exact `i128` intermediates and truncating division.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::math::{clamp, median, mode};
//!
//! assert_eq!(clamp(15, 0, 10), Ok(10));
//! assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
//! assert_eq!(mode([1, 1, 2, 4, 4]), vec![1, 4]);
//! ```

mod bounds;
mod stats;

pub use bounds::{clamp, random, random_int, random_int_with, random_with};
pub use stats::{mean, mean_integer, median, median_integer, mode, sum};
