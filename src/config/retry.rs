//! Retry policy with exponential backoff.

use rand::Rng;
use std::time::Duration;

use crate::error::ServiceError;

/// Configuration for retry behavior.
///
/// `max_retries` counts retries, so a request is sent at most
/// `max_retries + 1` times.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,

    /// Backoff before the first retry.
    pub initial_backoff: Duration,

    /// Upper bound on any single backoff.
    pub max_backoff: Duration,

    /// Multiplier applied per attempt.
    pub backoff_multiplier: f64,

    /// Whether to apply full jitter to backoff delays.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(20),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Set the number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial backoff.
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Enable or disable jitter.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Delay before retry number `attempt` (0-indexed).
    ///
    /// ```
    /// use std::time::Duration;
    /// use aws_services::config::RetryConfig;
    ///
    /// let config = RetryConfig::default().with_jitter(false);
    /// assert_eq!(config.calculate_delay(0), Duration::from_millis(100));
    /// assert_eq!(config.calculate_delay(2), Duration::from_millis(400));
    /// ```
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let backoff_millis =
            self.initial_backoff.as_millis() as f64 * self.backoff_multiplier.powi(exponent);

        let capped = if !backoff_millis.is_finite()
            || backoff_millis >= self.max_backoff.as_millis() as f64
        {
            self.max_backoff
        } else {
            Duration::from_millis(backoff_millis as u64)
        };

        // Nanosecond resolution keeps sub-millisecond caps non-empty.
        let upper = u64::try_from(capped.as_nanos()).unwrap_or(u64::MAX);
        if self.jitter && upper > 0 {
            Duration::from_nanos(rand::thread_rng().gen_range(0..upper))
        } else {
            capped
        }
    }

    /// Whether retry number `attempt` (0-indexed) should happen for `error`.
    pub fn should_retry(&self, attempt: u32, error: &ServiceError) -> bool {
        attempt < self.max_retries && error.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retryable() -> ServiceError {
        ServiceError::Service {
            code: "InternalServerException".into(),
            message: "boom".into(),
            status: 500,
            request_id: None,
            retryable: true,
        }
    }

    #[test]
    fn test_default_values() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.initial_backoff, Duration::from_millis(100));
        assert_eq!(config.max_backoff, Duration::from_secs(20));
        assert!(config.jitter);
    }

    #[test]
    fn test_exponential_backoff_is_capped() {
        let config = RetryConfig {
            max_backoff: Duration::from_millis(500),
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(config.calculate_delay(1), Duration::from_millis(200));
        assert_eq!(config.calculate_delay(3), Duration::from_millis(500));
        assert_eq!(config.calculate_delay(40), Duration::from_millis(500));
    }

    #[test]
    fn test_jitter_stays_below_cap() {
        let config = RetryConfig::default();
        for attempt in 0..6 {
            let cap = RetryConfig {
                jitter: false,
                ..config.clone()
            }
            .calculate_delay(attempt);
            assert!(config.calculate_delay(attempt) < cap);
        }
    }

    #[test]
    fn test_jitter_below_one_millisecond() {
        let config = RetryConfig {
            max_backoff: Duration::from_micros(500),
            ..RetryConfig::default()
        }
        .with_jitter(true);
        for attempt in 0..4 {
            assert!(config.calculate_delay(attempt) < Duration::from_micros(500));
        }

        let tiny = RetryConfig {
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::from_nanos(1),
            ..RetryConfig::default()
        };
        assert_eq!(tiny.calculate_delay(0), Duration::ZERO);
    }

    #[test]
    fn test_should_retry() {
        let config = RetryConfig::default();
        assert!(config.should_retry(0, &retryable()));
        assert!(config.should_retry(2, &retryable()));
        assert!(!config.should_retry(3, &retryable()));

        let missing = ServiceError::MissingParameter {
            operation: "GetDomain",
            field: "DomainId",
        };
        assert!(!config.should_retry(0, &missing));
    }

    #[test]
    fn test_disabled_never_retries() {
        assert!(!RetryConfig::disabled().should_retry(0, &retryable()));
    }
}
