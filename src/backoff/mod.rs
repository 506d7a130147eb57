//! A retry controller with exponential backoff.
//!
//! [`Backoff`] is an explicit state machine:
//!
//! ```text
//! Idle ──run──▶ Attempting { 1 } ──err──▶ (sleep) ──▶ Attempting { 2 } ── …
//!                     │                                      │
//!                     └──────────ok / exhausted──────────────┴──▶ Finished
//! ```
//!
//! Observers register callbacks instead of subscribing to named events:
//! [`Backoff::on_attempt`], [`Backoff::on_retry`] and [`Backoff::on_finish`].
//! Transitions are logged at `debug` level and exhaustion at `warn` level
//! through `tracing`.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use utilkit::backoff::{Backoff, BackoffConfig, BackoffState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let config = BackoffConfig::default()
//!     .with_initial_delay(Duration::from_millis(1))
//!     .with_max_attempts(4);
//! let mut backoff = Backoff::new(config).unwrap();
//!
//! let mut calls = 0;
//! let result: Result<u32, &str> = backoff
//!     .run(|| {
//!         calls += 1;
//!         let attempt = calls;
//!         async move { if attempt < 3 { Err("not yet") } else { Ok(attempt) } }
//!     })
//!     .await;
//!
//! assert_eq!(result, Ok(3));
//! assert_eq!(
//!     backoff.state(),
//!     &BackoffState::Finished { attempts: 3, succeeded: true }
//! );
//! # }
//! ```

mod config;
mod controller;

pub use config::BackoffConfig;
pub use controller::{Backoff, BackoffState};
