//! Iterator combinators and single-pass scans.
//!
//! - Grouping: [`chunk`], [`chunk_iter`], [`partition`]
//! - Duplicates: [`all_duplicates`], [`duplicates`], [`unique`], [`frequency_table`]
//! - Run boundaries: [`first_index_of_last_group`], [`last_index_of_first_group`]
//! - Positioning: [`skip`], [`first`]
//! - Generators: [`cycle`], [`repeat`], [`map_repeat`]
//!
//! Functions that build a map or set use
//! [`DefaultHashBuilder`](crate::collection::DefaultHashBuilder).
//!
//! # Examples
//!
//! ```rust
//! use utilkit::iter::{chunk, frequency_table, partition};
//!
//! assert_eq!(
//!     chunk(&[1, 2, 3, 4, 5, 6], 2).unwrap(),
//!     vec![vec![1, 2], vec![3, 4], vec![5, 6]]
//! );
//!
//! let (even, odd) = partition(1..=6, |value, _| value % 2 == 0);
//! assert_eq!(even, vec![2, 4, 6]);
//! assert_eq!(odd, vec![1, 3, 5]);
//!
//! let counts = frequency_table("hello".chars());
//! assert_eq!(counts[&'l'], 2);
//! ```

mod chunk;
mod duplicates;
mod generate;
mod group;

pub use chunk::{Chunks, chunk, chunk_iter};
pub use duplicates::{all_duplicates, duplicates, frequency_table, unique};
pub use generate::{Cycle, cycle, first, map_repeat, repeat, skip};
pub use group::{first_index_of_last_group, last_index_of_first_group, partition};
