//! # utilkit
//!
//! General-purpose building blocks for containers, ranges, iteration and
//! small async chores.
//!
//! ## Overview
//!
//! - **Ranges**: validated closed intervals and binary search over sorted slices
//! - **Maps**: `DefaultMap` with a fallback policy, `WeakRefMap` holding weak values
//! - **Set Algebra**: union, intersection, differences, relations, Jaccard index
//! - **Iteration**: chunking, partitioning, duplicates, run boundaries, generators
//! - **Sorting**: composable comparators and sortedness checks
//! - **Numbers**: clamping, random numbers, mean, median and mode
//! - **Text**: table layout, capitalization, truncation
//! - **Async**: panic-capturing `settle`, `timeout` races and a `Backoff` controller
//!
//! Precondition failures are reported as [`error::ValidationError`] values.
//!
//! ## Feature Flags
//!
//! - `collection`: `Length`, `Identical` and iterable helpers
//! - `range`: `Range` and sorted-slice searches
//! - `map`: `DefaultMap` and `WeakRefMap`
//! - `set`: set algebra over `HashSet`
//! - `iter`: iterator combinators
//! - `sort`: comparators
//! - `math`: numeric helpers
//! - `random`: sampling and shuffling
//! - `text`: string and table helpers
//! - `async`: `future` and `backoff` modules (tokio)
//! - `arc`: `WeakRefMap` over `Arc` instead of `Rc`
//! - `serde`: `Serialize`/`Deserialize` for `Range` and `BackoffConfig`
//! - `fxhash` / `ahash`: faster hashers for maps and sets built by the library
//! - `full`: every feature except the hasher and `arc` switches
//!
//! ## Example
//!
//! With the `range` and `iter` features enabled:
//!
//! ```rust
//! # #[cfg(all(feature = "range", feature = "iter"))]
//! # {
//! use utilkit::prelude::*;
//!
//! let range = Range::new(1, 10).unwrap();
//! assert!(range.has(&5));
//!
//! let (even, odd) = partition([1, 2, 3, 4], |value, _| value % 2 == 0);
//! assert_eq!((even, odd), (vec![2, 4], vec![1, 3]));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module's public items.
///
/// # Usage
///
/// ```rust
/// use utilkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ValidationError;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "range")]
    pub use crate::range::*;

    #[cfg(feature = "map")]
    pub use crate::map::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "iter")]
    pub use crate::iter::*;

    #[cfg(feature = "sort")]
    pub use crate::sort::*;

    #[cfg(feature = "math")]
    pub use crate::math::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;

    #[cfg(feature = "async")]
    pub use crate::backoff::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "range")]
pub mod range;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "iter")]
pub mod iter;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "math")]
pub mod math;

#[cfg(feature = "random")]
pub mod random;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "async")]
pub mod backoff;
