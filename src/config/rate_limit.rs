//! Client-side token bucket rate limiting.

use parking_lot::Mutex;

use super::ConfigError;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Configuration for rate limiting.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// Sustained requests per second.
    pub requests_per_second: f64,

    /// Bucket capacity.
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 20.0,
            burst_size: 40,
        }
    }
}

impl RateLimitConfig {
    /// Check that the bucket can refill and hold at least one token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.burst_size == 0 {
            return Err(ConfigError::InvalidRateLimit {
                reason: "burst_size must be at least 1",
            });
        }
        if !self.requests_per_second.is_finite() || self.requests_per_second <= 0.0 {
            return Err(ConfigError::InvalidRateLimit {
                reason: "requests_per_second must be finite and greater than zero",
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Token bucket rate limiter shared by every clone of a client.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    bucket: Mutex<Bucket>,
}

impl RateLimiter {
    /// Create a limiter that starts with a full bucket.
    ///
    /// Values [`RateLimitConfig::validate`] would reject are clamped: a zero
    /// burst becomes 1 and an unusable rate falls back to the default.
    pub fn new(mut config: RateLimitConfig) -> Self {
        config.burst_size = config.burst_size.max(1);
        if !config.requests_per_second.is_finite() || config.requests_per_second <= 0.0 {
            config.requests_per_second = RateLimitConfig::default().requests_per_second;
        }
        Self {
            bucket: Mutex::new(Bucket {
                tokens: f64::from(config.burst_size),
                last_refill: Instant::now(),
            }),
            config,
        }
    }

    /// Wait until a token is available and take it.
    pub async fn acquire(&self) {
        loop {
            match self.try_acquire_or_wait() {
                None => return,
                Some(wait) => sleep(wait).await,
            }
        }
    }

    /// Take a token if one is available.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_or_wait().is_none()
    }

    /// Number of whole tokens currently available.
    pub fn available(&self) -> u32 {
        let mut bucket = self.bucket.lock();
        self.refill(&mut bucket);
        bucket.tokens.floor() as u32
    }

    fn try_acquire_or_wait(&self) -> Option<Duration> {
        let mut bucket = self.bucket.lock();
        self.refill(&mut bucket);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return None;
        }

        let missing = 1.0 - bucket.tokens;
        Some(Duration::from_secs_f64(
            missing / self.config.requests_per_second.max(f64::EPSILON),
        ))
    }

    fn refill(&self, bucket: &mut Bucket) {
        let now = Instant::now();
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + elapsed * self.config.requests_per_second)
            .min(f64::from(self.config.burst_size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: 1.0,
            burst_size: 3,
        });
        assert_eq!(limiter.available(), 3);
    }

    #[test]
    fn test_burst_is_exhausted() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: 0.001,
            burst_size: 2,
        });
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn test_validate() {
        assert!(RateLimitConfig::default().validate().is_ok());

        let zero_burst = RateLimitConfig {
            requests_per_second: 10.0,
            burst_size: 0,
        };
        assert!(matches!(
            zero_burst.validate(),
            Err(ConfigError::InvalidRateLimit { .. })
        ));

        for rps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RateLimitConfig {
                requests_per_second: rps,
                burst_size: 5,
            };
            assert!(config.validate().is_err(), "accepted {rps}");
        }
    }

    #[tokio::test]
    async fn test_zero_burst_is_clamped() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: 10.0,
            burst_size: 0,
        });
        assert_eq!(limiter.available(), 1);
        tokio::time::timeout(Duration::from_secs(2), limiter.acquire())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_negative_rate_is_clamped() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: -1.0,
            burst_size: 2,
        });
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        // Refills at the default rate instead of draining or panicking.
        tokio::time::timeout(Duration::from_secs(2), limiter.acquire())
            .await
            .unwrap();
    }

    #[test]
    fn test_nan_rate_is_clamped() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: f64::NAN,
            burst_size: 1,
        });
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_acquire_waits_for_refill() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: 200.0,
            burst_size: 1,
        });
        limiter.acquire().await;
        let started = Instant::now();
        limiter.acquire().await;
        assert!(started.elapsed() >= Duration::from_millis(1));
    }
}
