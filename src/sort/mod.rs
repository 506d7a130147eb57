//! Comparators and sortedness checks.
//!
//! Comparators here work on any `PartialOrd` type. Pairs that cannot be
//! ordered (a `NaN` against anything) compare as `Equal`, so they never break
//! a sort.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::sort::{ascending, ascending_by, combine, descending_by, is_sorted, Comparator};
//!
//! let mut numbers = vec![3, 1, 2];
//! numbers.sort_by(ascending);
//! assert_eq!(numbers, vec![1, 2, 3]);
//! assert!(is_sorted(&numbers, ascending));
//!
//! // (id, age): oldest first, then by id
//! let mut people = vec![(2_u32, 30_u32), (1, 25), (3, 30)];
//! let by_age_then_id = combine(vec![
//!     Box::new(descending_by(|person: &(u32, u32)| person.1)) as Comparator<'_, _>,
//!     Box::new(ascending_by(|person: &(u32, u32)| person.0)),
//! ]);
//! people.sort_by(|a, b| by_age_then_id(a, b));
//! assert_eq!(people, vec![(2, 30), (3, 30), (1, 25)]);
//! ```

mod comparator;

pub use comparator::{
    Comparator, ascending, ascending_by, combine, descending, descending_by, is_sorted,
};
