//! Set algebra over [`HashSet`](std::collections::HashSet).
//!
//! Every operation treats its operands as plain mathematical sets and returns
//! a new set, leaving both operands untouched. Element equality is `Eq` +
//! `Hash`.
//!
//! | Operation                | Result                         | Complexity       |
//! |--------------------------|--------------------------------|------------------|
//! | [`union`]                | `a ∪ b`                        | O(n + m)         |
//! | [`intersection`]         | `a ∩ b`                        | O(min(n, m))     |
//! | [`difference`]           | `a \ b`                        | O(n + m)         |
//! | [`symmetric_difference`] | `a △ b`                        | O(n + m)         |
//! | [`is_subset`]            | `a ⊆ b`                        | O(n)             |
//! | [`is_superset`]          | `a ⊇ b`                        | O(m)             |
//! | [`is_disjoint`]          | `a ∩ b = ∅`                    | O(min(n, m))     |
//! | [`jaccard_index`]        | `\|a ∩ b\| / \|a ∪ b\|`        | O(min(n, m))     |
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use utilkit::set::{difference, jaccard_index, union};
//!
//! let a = HashSet::from([1, 2, 3]);
//! let b = HashSet::from([2, 4]);
//!
//! assert_eq!(difference(&a, &b), HashSet::from([1, 3]));
//! assert_eq!(difference(&b, &a), HashSet::from([4]));
//! assert_eq!(union(&a, &b).len(), 4);
//! assert!((jaccard_index(&a, &b) - 0.25).abs() < f64::EPSILON);
//! ```

mod algebra;

pub use algebra::{
    difference, intersection, is_disjoint, is_subset, is_superset, jaccard_index,
    symmetric_difference, union,
};
