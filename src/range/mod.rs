//! Closed ranges and binary search over sorted slices.
//!
//! - [`Range`]: an inclusive `[lower, upper]` interval with containment and
//!   intersection tests
//! - [`lower_bound`], [`upper_bound`], [`equal_range`], [`binary_search_by`]:
//!   index lookups in sorted slices
//! - [`indices_within`]: the slice indices covered by a [`Range`]
//!
//! # Examples
//!
//! ```rust
//! use utilkit::range::{Range, indices_within};
//!
//! let range = Range::new(3, 7).unwrap();
//! assert!(range.has(&3));
//! assert!(range.has(&7));
//! assert!(!range.has(&8));
//!
//! let sorted = [1, 3, 4, 7, 9];
//! assert_eq!(indices_within(&sorted, &range), 1..4);
//! ```

mod closed;
mod search;

pub use closed::Range;
pub use search::{
    binary_search_by, equal_range, indices_within, lower_bound, lower_bound_by, upper_bound,
    upper_bound_by,
};
