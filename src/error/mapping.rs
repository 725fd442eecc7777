//! Mapping of JSON error responses onto [`ServiceError`].
//!
//! Both the `restJson1` and `awsJson` protocols report errors the same way:
//! the error code arrives either in the `x-amzn-errortype` header or in the
//! body under `__type`, `code` or `Code`. Codes may carry a namespace prefix
//! (`com.amazonaws.glacier#ResourceNotFoundException`) or a trailing URI
//! (`ValidationException:http://internal.amazon.com/...`), both of which are
//! stripped.
//!
//! ```json
//! { "__type": "ResourceNotFoundException", "message": "Domain not found" }
//! ```

use super::ServiceError;
use std::collections::HashMap;
use std::time::Duration;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
];

const TRANSIENT_CODES: &[&str] = &[
    "RequestTimeout",
    "RequestTimeoutException",
    "InternalServerException",
    "InternalFailure",
    "ServiceUnavailable",
    "ServiceUnavailableException",
];

const AUTHENTICATION_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "SignatureDoesNotMatch",
    "IncompleteSignature",
    "MissingAuthenticationToken",
    "InvalidClientTokenId",
    "ExpiredToken",
    "ExpiredTokenException",
];

const NOT_FOUND_CODES: &[&str] = &[
    "ResourceNotFoundException",
    "NotFoundException",
    "WAFNonexistentItemException",
];

/// Error code and message extracted from an error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    /// Sanitized error code, if the body carried one.
    pub code: Option<String>,
    /// Human-readable message, if the body carried one.
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body.
    ///
    /// Bodies that are empty or not JSON objects yield an empty `ErrorBody`.
    pub fn from_slice(body: &[u8]) -> Self {
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };

        let field = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| value.get(*name).and_then(|v| v.as_str()))
                .map(str::to_string)
        };

        Self {
            code: field(&["__type", "code", "Code"]).map(|c| sanitize_error_code(&c)),
            message: field(&["message", "Message", "errorMessage"]),
        }
    }
}

/// Strip the namespace prefix and the trailing URI from an error code.
///
/// ```rust
/// use aws_services::error::sanitize_error_code;
///
/// assert_eq!(
///     sanitize_error_code("com.amazonaws.glacier#ResourceNotFoundException"),
///     "ResourceNotFoundException"
/// );
/// assert_eq!(
///     sanitize_error_code("ValidationException:http://internal.amazon.com/coral/"),
///     "ValidationException"
/// );
/// ```
pub fn sanitize_error_code(raw: &str) -> String {
    let without_uri = raw.split(':').next().unwrap_or(raw);
    let code = match without_uri.rfind('#') {
        Some(pos) => &without_uri[pos + 1..],
        None => without_uri,
    };
    code.trim().to_string()
}

/// Build a [`ServiceError`] from an unsuccessful HTTP response.
///
/// `headers` must use lower-case keys.
pub fn map_error_response(
    status: u16,
    headers: &HashMap<String, String>,
    body: &[u8],
    request_id: Option<String>,
) -> ServiceError {
    let parsed = ErrorBody::from_slice(body);

    let code = headers
        .get(ERROR_TYPE_HEADER)
        .map(|raw| sanitize_error_code(raw))
        .filter(|c| !c.is_empty())
        .or(parsed.code)
        .unwrap_or_else(|| default_code_for_status(status).to_string());

    let message = parsed.message.unwrap_or_else(|| {
        String::from_utf8_lossy(body)
            .trim()
            .chars()
            .take(256)
            .collect::<String>()
    });

    let retry_after = headers
        .get("retry-after")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs);

    let code_str = code.as_str();

    if status == 429 || THROTTLING_CODES.contains(&code_str) {
        return ServiceError::Throttling {
            code,
            message,
            retry_after,
            request_id,
        };
    }

    if AUTHENTICATION_CODES.contains(&code_str) || status == 401 {
        return ServiceError::Authentication {
            code,
            message,
            request_id,
        };
    }

    if NOT_FOUND_CODES.contains(&code_str) || status == 404 {
        return ServiceError::ResourceNotFound {
            code,
            message,
            request_id,
        };
    }

    let retryable = status >= 500 || TRANSIENT_CODES.contains(&code_str);

    ServiceError::Service {
        code,
        message,
        status,
        request_id,
        retryable,
    }
}

fn default_code_for_status(status: u16) -> &'static str {
    match status {
        400 => "BadRequest",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "NotFound",
        409 => "Conflict",
        429 => "TooManyRequests",
        500 => "InternalServerError",
        502 => "BadGateway",
        503 => "ServiceUnavailable",
        504 => "GatewayTimeout",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_error_body_type_field() {
        let body = ErrorBody::from_slice(
            br#"{"__type":"com.amazonaws.cases#ValidationException","message":"bad"}"#,
        );
        assert_eq!(body.code.as_deref(), Some("ValidationException"));
        assert_eq!(body.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_error_body_glacier_shape() {
        let body = ErrorBody::from_slice(
            br#"{"code":"ResourceNotFoundException","message":"Vault not found","type":"Client"}"#,
        );
        assert_eq!(body.code.as_deref(), Some("ResourceNotFoundException"));
        assert_eq!(body.message.as_deref(), Some("Vault not found"));
    }

    #[test]
    fn test_error_body_not_json() {
        assert_eq!(ErrorBody::from_slice(b"<html>"), ErrorBody::default());
        assert_eq!(ErrorBody::from_slice(b""), ErrorBody::default());
    }

    #[test]
    fn test_header_code_takes_precedence() {
        let err = map_error_response(
            400,
            &headers(&[(
                "x-amzn-errortype",
                "ConflictException:http://internal.amazon.com/coral/com.amazonaws.cases/",
            )]),
            br#"{"__type":"ValidationException","message":"conflict"}"#,
            None,
        );
        assert_eq!(err.error_code(), Some("ConflictException"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_throttling_with_retry_after() {
        let err = map_error_response(
            400,
            &headers(&[("retry-after", "3")]),
            br#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#,
            Some("req-9".into()),
        );
        match err {
            ServiceError::Throttling {
                retry_after,
                request_id,
                ..
            } => {
                assert_eq!(retry_after, Some(Duration::from_secs(3)));
                assert_eq!(request_id.as_deref(), Some("req-9"));
            }
            other => panic!("expected throttling, got {other:?}"),
        }
    }

    #[test]
    fn test_status_429_is_throttling() {
        let err = map_error_response(429, &HashMap::new(), b"", None);
        assert!(matches!(err, ServiceError::Throttling { .. }));
        assert_eq!(err.error_code(), Some("TooManyRequests"));
    }

    #[test]
    fn test_authentication_codes() {
        let err = map_error_response(
            403,
            &HashMap::new(),
            br#"{"__type":"InvalidSignatureException","message":"sig"}"#,
            None,
        );
        assert!(matches!(err, ServiceError::Authentication { .. }));
    }

    #[test]
    fn test_not_found() {
        let err = map_error_response(
            400,
            &HashMap::new(),
            br#"{"__type":"WAFNonexistentItemException","Message":"gone"}"#,
            None,
        );
        assert!(matches!(err, ServiceError::ResourceNotFound { .. }));
        assert_eq!(err.to_string(), "Resource not found (WAFNonexistentItemException): gone");
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = map_error_response(503, &HashMap::new(), b"", None);
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), Some("ServiceUnavailable"));
    }
}
