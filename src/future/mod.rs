//! Future helpers: outcome capture and deadline races.
//!
//! - [`settle`] / [`settle_all`]: await a future and capture a panic as a value
//! - [`timeout`]: race a future against a delay
//!
//! Both are plain futures; neither spawns a task, so they run on whatever
//! executor polls them. [`timeout`] needs a tokio runtime with the time driver
//! enabled.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use utilkit::future::{settle, timeout, Settled};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = settle(async { 21 * 2 }).await;
//! assert_eq!(outcome, Settled::Fulfilled(42));
//!
//! let raced = timeout(async { "fast" }, Duration::from_secs(1)).await;
//! assert_eq!(raced, Ok("fast"));
//! # }
//! ```

mod settle;
mod timeout;

pub use settle::{Settled, settle, settle_all};
pub use timeout::{Timeout, TimeoutError, timeout};
