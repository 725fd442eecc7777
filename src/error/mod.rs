//! Error types shared by every service client.
//!
//! All operations return [`ServiceResult<T>`]. The error enum separates
//! failures detected locally (missing required fields, configuration,
//! credentials, signing) from failures reported by the remote service,
//! so callers can decide whether a retry makes sense.
//!
//! # Examples
//!
//! ```rust
//! use aws_services::error::ServiceError;
//!
//! fn report(error: &ServiceError) {
//!     if let Some(field) = error.missing_field() {
//!         eprintln!("request is incomplete, set {field}");
//!     } else if error.is_retryable() {
//!         eprintln!("transient failure: {error}");
//!     }
//! }
//! ```

mod mapping;

pub use mapping::{map_error_response, sanitize_error_code, ErrorBody};

use std::time::Duration;
use thiserror::Error;

/// Error code reported for a request that is missing a required field.
pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";

/// Top-level error type for all service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The client is misconfigured.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Credentials could not be resolved.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// SigV4 signing failed.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// A required request field was not set.
    ///
    /// Raised before any endpoint resolution or network activity.
    #[error("Missing required field [{field}]")]
    MissingParameter {
        /// Operation that rejected the request.
        operation: &'static str,
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// The endpoint provider could not produce an endpoint.
    #[error("Endpoint resolution failed: {message}")]
    EndpointResolution {
        /// Description of the resolution failure.
        message: String,
    },

    /// A request value was present but unusable.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation error.
        message: String,
        /// The field that failed validation, if known.
        field: Option<String>,
    },

    /// Transport and network errors.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Whether this error is retryable.
        retryable: bool,
    },

    /// The request timed out.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The service throttled the request.
    #[error("Throttled ({code}): {message}")]
    Throttling {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
        /// Server-provided delay before retrying.
        retry_after: Option<Duration>,
        /// AWS request ID.
        request_id: Option<String>,
    },

    /// The service rejected the caller's identity or signature.
    #[error("Authentication failed ({code}): {message}")]
    Authentication {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
        /// AWS request ID.
        request_id: Option<String>,
    },

    /// The addressed resource does not exist.
    #[error("Resource not found ({code}): {message}")]
    ResourceNotFound {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
        /// AWS request ID.
        request_id: Option<String>,
    },

    /// Any other error returned by the service.
    #[error("{code}: {message}")]
    Service {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// AWS request ID.
        request_id: Option<String>,
        /// Whether this error is retryable.
        retryable: bool,
    },

    /// A request or response body could not be (de)serialized.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },

    /// The executor could not run or complete a submitted call.
    #[error("Executor error: {message}")]
    Executor {
        /// Description of the executor error.
        message: String,
    },
}

impl ServiceError {
    /// Create a configuration error without a source.
    pub fn configuration(message: impl Into<String>) -> Self {
        ServiceError::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        ServiceError::Serialization {
            message: message.into(),
        }
    }

    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Transport { retryable, .. } => *retryable,
            ServiceError::Service { retryable, .. } => *retryable,
            ServiceError::Timeout { .. } | ServiceError::Throttling { .. } => true,
            _ => false,
        }
    }

    /// Returns the error code, either the local `MISSING_PARAMETER` code or
    /// the code reported by the service.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ServiceError::MissingParameter { .. } => Some(MISSING_PARAMETER),
            ServiceError::Throttling { code, .. }
            | ServiceError::Authentication { code, .. }
            | ServiceError::ResourceNotFound { code, .. }
            | ServiceError::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns the AWS request ID if the service reported one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ServiceError::Throttling { request_id, .. }
            | ServiceError::Authentication { request_id, .. }
            | ServiceError::ResourceNotFound { request_id, .. }
            | ServiceError::Service { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the server-provided retry delay, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ServiceError::Throttling { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Returns the name of the missing field for a pre-flight failure.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            ServiceError::MissingParameter { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Returns `true` if the error came back from the service rather than
    /// being raised locally.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Throttling { .. }
                | ServiceError::Authentication { .. }
                | ServiceError::ResourceNotFound { .. }
                | ServiceError::Service { .. }
        )
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<crate::config::ConfigError> for ServiceError {
    fn from(err: crate::config::ConfigError) -> Self {
        ServiceError::Configuration {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<crate::credentials::CredentialError> for ServiceError {
    fn from(err: crate::credentials::CredentialError) -> Self {
        ServiceError::Credential {
            message: err.to_string(),
        }
    }
}

impl From<crate::signing::SigningError> for ServiceError {
    fn from(err: crate::signing::SigningError) -> Self {
        ServiceError::Signing {
            message: err.to_string(),
        }
    }
}

/// Result alias used by every operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message_and_code() {
        let err = ServiceError::MissingParameter {
            operation: "DescribeVault",
            field: "VaultName",
        };
        assert_eq!(err.to_string(), "Missing required field [VaultName]");
        assert_eq!(err.error_code(), Some("MISSING_PARAMETER"));
        assert_eq!(err.missing_field(), Some("VaultName"));
        assert!(!err.is_retryable());
        assert!(!err.is_service_error());
    }

    #[test]
    fn test_retryable_classification() {
        let throttled = ServiceError::Throttling {
            code: "ThrottlingException".into(),
            message: "Rate exceeded".into(),
            retry_after: Some(Duration::from_secs(2)),
            request_id: None,
        };
        assert!(throttled.is_retryable());
        assert_eq!(throttled.retry_after(), Some(Duration::from_secs(2)));

        let server = ServiceError::Service {
            code: "InternalServerException".into(),
            message: "oops".into(),
            status: 500,
            request_id: Some("req-1".into()),
            retryable: true,
        };
        assert!(server.is_retryable());
        assert_eq!(server.request_id(), Some("req-1"));

        let denied = ServiceError::Authentication {
            code: "AccessDeniedException".into(),
            message: "no".into(),
            request_id: None,
        };
        assert!(!denied.is_retryable());
        assert_eq!(denied.error_code(), Some("AccessDeniedException"));
    }

    #[test]
    fn test_transport_retryable_flag() {
        let err = ServiceError::Transport {
            message: "connection reset".into(),
            source: None,
            retryable: true,
        };
        assert!(err.is_retryable());
        assert!(err.error_code().is_none());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ServiceError = json_err.into();
        assert!(matches!(err, ServiceError::Serialization { .. }));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceError>();
    }
}
