use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::error::ValidationError;

use super::BackoffConfig;

/// Where a [`Backoff`] is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffState {
    /// Not started, or reset.
    Idle,
    /// Running the given attempt (1-based).
    Attempting {
        /// The current attempt number.
        attempt: usize,
    },
    /// The cycle ended.
    Finished {
        /// How many attempts were made.
        attempts: usize,
        /// Whether the last attempt succeeded.
        succeeded: bool,
    },
}

type AttemptCallback = Box<dyn FnMut(usize) + Send>;
type RetryCallback = Box<dyn FnMut(usize, Duration) + Send>;
type FinishCallback = Box<dyn FnMut(&BackoffState) + Send>;

/// Retries an operation on a [`BackoffConfig`] schedule.
pub struct Backoff {
    config: BackoffConfig,
    state: BackoffState,
    attempt_callbacks: Vec<AttemptCallback>,
    retry_callbacks: Vec<RetryCallback>,
    finish_callbacks: Vec<FinishCallback>,
}

static_assertions::assert_impl_all!(Backoff: Send);

impl Backoff {
    /// Creates an idle controller.
    ///
    /// # Errors
    ///
    /// Returns the error from [`BackoffConfig::validate`].
    pub fn new(config: BackoffConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            state: BackoffState::Idle,
            attempt_callbacks: Vec::new(),
            retry_callbacks: Vec::new(),
            finish_callbacks: Vec::new(),
        })
    }

    /// The schedule in use.
    pub const fn config(&self) -> &BackoffConfig {
        &self.config
    }

    /// The current state.
    pub const fn state(&self) -> &BackoffState {
        &self.state
    }

    /// Registers a callback run at the start of every attempt, with the
    /// attempt number.
    pub fn on_attempt<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.attempt_callbacks.push(Box::new(callback));
        self
    }

    /// Registers a callback run after a failed attempt that will be retried,
    /// with the failed attempt number and the delay before the next one.
    pub fn on_retry<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(usize, Duration) + Send + 'static,
    {
        self.retry_callbacks.push(Box::new(callback));
        self
    }

    /// Registers a callback run once with the [`BackoffState::Finished`] state.
    pub fn on_finish<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&BackoffState) + Send + 'static,
    {
        self.finish_callbacks.push(Box::new(callback));
        self
    }

    /// The delay after failed attempt `attempt`.
    ///
    /// `initial_delay * factor^(attempt - 1)`, never above `max_delay`.
    /// Attempt `0` is treated as attempt `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use utilkit::backoff::{Backoff, BackoffConfig};
    ///
    /// let config = BackoffConfig::default()
    ///     .with_initial_delay(Duration::from_millis(100))
    ///     .with_max_delay(Duration::from_millis(500))
    ///     .with_factor(2.0);
    /// let backoff = Backoff::new(config).unwrap();
    ///
    /// assert_eq!(backoff.delay_for(1), Duration::from_millis(100));
    /// assert_eq!(backoff.delay_for(3), Duration::from_millis(400));
    /// assert_eq!(backoff.delay_for(4), Duration::from_millis(500));
    /// ```
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let BackoffConfig {
            initial_delay,
            max_delay,
            factor,
            ..
        } = self.config;
        if attempt <= 1 {
            return initial_delay;
        }
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let scaled = initial_delay.as_secs_f64() * factor.powi(exponent);
        if !scaled.is_finite() || scaled >= max_delay.as_secs_f64() {
            max_delay
        } else {
            Duration::from_secs_f64(scaled)
        }
    }

    /// Returns to [`BackoffState::Idle`]. Callbacks stay registered.
    pub fn reset(&mut self) {
        self.transition(BackoffState::Idle);
    }

    /// Runs `operation` until it succeeds or the attempts run out.
    ///
    /// `operation` is called once per attempt to build a fresh future. Failed
    /// attempts are followed by a [`delay_for`](Self::delay_for) sleep, except
    /// the last one. A new cycle always starts from attempt `1`, whatever the
    /// previous state.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's error once `max_attempts` attempts failed.
    pub async fn run<T, E, F, Fut>(&mut self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Debug,
    {
        let max_attempts = self.config.max_attempts;
        let mut attempt = 1;
        loop {
            self.transition(BackoffState::Attempting { attempt });
            for callback in &mut self.attempt_callbacks {
                callback(attempt);
            }

            match operation().await {
                Ok(value) => {
                    self.finish(attempt, true);
                    return Ok(value);
                }
                Err(error) if attempt >= max_attempts => {
                    tracing::warn!(attempts = attempt, ?error, "backoff exhausted");
                    self.finish(attempt, false);
                    return Err(error);
                }
                Err(error) => {
                    let delay = self.delay_for(attempt);
                    tracing::debug!(attempt, ?delay, ?error, "attempt failed, retrying");
                    for callback in &mut self.retry_callbacks {
                        callback(attempt, delay);
                    }
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    fn finish(&mut self, attempts: usize, succeeded: bool) {
        let finished = BackoffState::Finished {
            attempts,
            succeeded,
        };
        self.transition(finished);
        for callback in &mut self.finish_callbacks {
            callback(&finished);
        }
    }

    fn transition(&mut self, next: BackoffState) {
        tracing::debug!(from = ?self.state, to = ?next, "backoff transition");
        self.state = next;
    }
}

impl fmt::Debug for Backoff {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Backoff")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("attempt_callbacks", &self.attempt_callbacks.len())
            .field("retry_callbacks", &self.retry_callbacks.len())
            .field("finish_callbacks", &self.finish_callbacks.len())
            .finish()
    }
}
