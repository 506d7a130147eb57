use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::join_all;

/// The outcome of a settled future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    /// The future completed with a value.
    Fulfilled(T),
    /// The future panicked; carries the panic message.
    Rejected(String),
}

impl<T> Settled<T> {
    /// Returns `true` for [`Settled::Fulfilled`].
    #[inline]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    /// Returns `true` for [`Settled::Rejected`].
    #[inline]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Converts into a `Result`, with the panic message as the error.
    ///
    /// # Errors
    ///
    /// Returns the panic message if the future was rejected.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Fulfilled(value) => Ok(value),
            Self::Rejected(message) => Err(message),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "future panicked with a non-string payload".to_string())
}

/// Awaits `future`, turning a panic into [`Settled::Rejected`].
///
/// The panic hook still runs, so the default hook prints the panic as usual.
///
/// # Examples
///
/// ```rust
/// use utilkit::future::{settle, Settled};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let failed = settle(async {
///     if true {
///         panic!("boom");
///     }
///     1
/// })
/// .await;
/// assert_eq!(failed, Settled::Rejected("boom".to_string()));
/// # }
/// ```
pub async fn settle<F: Future>(future: F) -> Settled<F::Output> {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Settled::Fulfilled(value),
        Err(payload) => Settled::Rejected(panic_message(payload.as_ref())),
    }
}

/// Settles every future concurrently, keeping input order.
pub async fn settle_all<I>(futures: I) -> Vec<Settled<<I::Item as Future>::Output>>
where
    I: IntoIterator,
    I::Item: Future,
{
    join_all(futures.into_iter().map(settle)).await
}
