//! Configuration errors.

use thiserror::Error;

/// Why a [`ClientConfig`](super::ClientConfig) could not be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No region on the builder, or neither `AWS_REGION` nor
    /// `AWS_DEFAULT_REGION` in the environment.
    #[error("No region configured")]
    MissingRegion,

    /// No credential provider on the builder.
    #[error("No credential provider configured")]
    MissingCredentials,

    /// A timeout was set to zero.
    #[error("{name} must be greater than zero")]
    ZeroTimeout {
        /// `timeout` or `connect_timeout`.
        name: &'static str,
    },

    /// A rate limit the token bucket cannot honour.
    #[error("Invalid rate limit: {reason}")]
    InvalidRateLimit {
        /// Which value is out of range.
        reason: &'static str,
    },

    /// A boolean environment variable holds something other than
    /// `true` or `false`.
    #[error("{variable} must be 'true' or 'false', got '{value}'")]
    InvalidFlag {
        /// Variable name.
        variable: &'static str,
        /// Value found.
        value: String,
    },
}
