//! Signing error types.

use thiserror::Error;

/// Errors that can occur during SigV4 signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// A required header was missing from the request.
    #[error("Missing required header: {header}")]
    MissingHeader {
        /// The name of the missing header.
        header: String,
    },

    /// A header value could not be represented.
    #[error("Invalid header value for {header}")]
    InvalidHeaderValue {
        /// The header being written.
        header: &'static str,
    },

    /// The signing operation failed.
    #[error("Signing failed: {message}")]
    SigningFailed {
        /// Details about the signing failure.
        message: String,
    },
}
