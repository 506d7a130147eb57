use std::time::Duration;

use crate::error::ValidationError;

/// Schedule settings for a [`Backoff`](super::Backoff).
///
/// With the `serde` feature the struct (de)serializes, and missing fields
/// take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackoffConfig {
    /// Delay after the first failed attempt.
    pub initial_delay: Duration,
    /// Upper limit for any single delay.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each further failure.
    pub factor: f64,
    /// Total attempts, the first one included.
    pub max_attempts: usize,
}

impl Default for BackoffConfig {
    /// 100ms doubling up to 10s, five attempts.
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            factor: 2.0,
            max_attempts: 5,
        }
    }
}

impl BackoffConfig {
    /// Sets [`initial_delay`](Self::initial_delay).
    #[must_use]
    pub const fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// Sets [`max_delay`](Self::max_delay).
    #[must_use]
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Sets [`factor`](Self::factor).
    #[must_use]
    pub const fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Sets [`max_attempts`](Self::max_attempts).
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Checks that the settings describe a usable schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBackoff`] if `factor` is below `1.0`
    /// (or `NaN`), if `initial_delay` exceeds `max_delay`, or if
    /// `max_attempts` is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.factor.is_nan() || self.factor < 1.0 {
            return Err(ValidationError::InvalidBackoff {
                reason: "factor must be at least 1.0",
            });
        }
        if self.initial_delay > self.max_delay {
            return Err(ValidationError::InvalidBackoff {
                reason: "initial delay exceeds max delay",
            });
        }
        if self.max_attempts == 0 {
            return Err(ValidationError::InvalidBackoff {
                reason: "max attempts must be greater than zero",
            });
        }
        Ok(())
    }
}
