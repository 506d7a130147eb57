use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use pin_project_lite::pin_project;
use tokio::time::{Sleep, sleep};

// =============================================================================
// Timeout Error Type
// =============================================================================

/// The delay elapsed before the wrapped future completed.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use utilkit::future::TimeoutError;
///
/// let error = TimeoutError { duration: Duration::from_millis(250) };
/// assert_eq!(error.to_string(), "operation timed out after 250ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError {
    /// The delay that was exceeded.
    pub duration: Duration,
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "operation timed out after {:?}", self.duration)
    }
}

impl std::error::Error for TimeoutError {}

// =============================================================================
// Timeout Future
// =============================================================================

pin_project! {
    /// Future returned by [`timeout`].
    ///
    /// The wrapped future is polled first on every wake-up, so a future that
    /// becomes ready in the same poll as the delay still wins.
    #[must_use = "futures do nothing unless polled"]
    pub struct Timeout<F> {
        #[pin]
        future: F,
        #[pin]
        delay: Sleep,
        duration: Duration,
    }
}

impl<F> Timeout<F> {
    /// The delay this future races against.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the wrapped future, discarding the delay.
    pub fn into_inner(self) -> F {
        self.future
    }
}

impl<F: Future> Future for Timeout<F> {
    type Output = Result<F::Output, TimeoutError>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if let Poll::Ready(value) = this.future.poll(context) {
            return Poll::Ready(Ok(value));
        }
        match this.delay.poll(context) {
            Poll::Ready(()) => {
                tracing::debug!(duration = ?this.duration, "future timed out");
                Poll::Ready(Err(TimeoutError {
                    duration: *this.duration,
                }))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Races `future` against a delay of `duration`.
///
/// If the delay wins, the result is a [`TimeoutError`]. The wrapped future is
/// not cancelled actively; it is dropped along with the `Timeout` and its
/// result is never observed.
///
/// The delay starts when `timeout` is called, not on first poll. Call it
/// inside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use utilkit::future::{timeout, TimeoutError};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let slow = tokio::time::sleep(Duration::from_secs(60));
/// let result = timeout(slow, Duration::from_millis(10)).await;
/// assert_eq!(result, Err(TimeoutError { duration: Duration::from_millis(10) }));
/// # }
/// ```
pub fn timeout<F: Future>(future: F, duration: Duration) -> Timeout<F> {
    Timeout {
        future,
        delay: sleep(duration),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_fast_future_wins() {
        let work = async {
            sleep(Duration::from_millis(10)).await;
            "done"
        };
        assert_eq!(timeout(work, Duration::from_millis(50)).await, Ok("done"));
    }

    #[rstest]
    #[case(Duration::from_millis(1))]
    #[case(Duration::from_secs(30))]
    #[tokio::test(start_paused = true)]
    async fn test_delay_wins(#[case] duration: Duration) {
        let work = sleep(duration * 2);
        let result = timeout(work, duration).await;
        assert_eq!(result, Err(TimeoutError { duration }));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_ready_future_beats_zero_delay() {
        assert_eq!(timeout(async { 1 }, Duration::ZERO).await, Ok(1));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_loser_result_is_never_observed() {
        let finished = Rc::new(Cell::new(false));
        let flag = Rc::clone(&finished);
        let work = async move {
            sleep(Duration::from_secs(5)).await;
            flag.set(true);
        };
        assert!(timeout(work, Duration::from_secs(1)).await.is_err());
        sleep(Duration::from_secs(10)).await;
        assert!(!finished.get());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_accessors() {
        let pending = timeout(async { 5 }, Duration::from_secs(2));
        assert_eq!(pending.duration(), Duration::from_secs(2));
        assert_eq!(pending.into_inner().await, 5);
    }

    #[rstest]
    fn test_error_display() {
        let error = TimeoutError {
            duration: Duration::from_secs(5),
        };
        assert_eq!(format!("{error}"), "operation timed out after 5s");
    }
}
