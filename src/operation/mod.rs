//! The operation model every request type implements.
//!
//! A request type describes its own wire binding: which fields are
//! required, how the path and query are built, which members travel in
//! headers, and how the response is read. The shared client turns that
//! description into a signed call.

mod macros;
mod uri;

pub use uri::RequestUri;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::error;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::http::AwsResponse;
use crate::transport::HttpMethod;

/// Wire protocol of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// REST with JSON bodies: method and path come from the operation.
    RestJson1,
    /// RPC style: every call is `POST /` with an `X-Amz-Target` header.
    AwsJson {
        /// `1.0` or `1.1`.
        version: &'static str,
        /// Target prefix, e.g. `AWSWAF_20190729`.
        target_prefix: &'static str,
    },
}

impl Protocol {
    /// Content type of request bodies.
    pub fn content_type(&self) -> String {
        match self {
            Protocol::RestJson1 => "application/json".to_string(),
            Protocol::AwsJson { version, .. } => format!("application/x-amz-json-{}", version),
        }
    }

    /// `X-Amz-Target` value for an operation, if the protocol uses one.
    pub fn target(&self, operation: &str) -> Option<String> {
        match self {
            Protocol::RestJson1 => None,
            Protocol::AwsJson { target_prefix, .. } => {
                Some(format!("{}.{}", target_prefix, operation))
            }
        }
    }
}

/// A request that can be sent as one service call.
pub trait Operation: Serialize + Clone + fmt::Debug + Send + Sync + 'static {
    /// Parsed response type.
    type Output: DeserializeOwned + Send + 'static;

    /// Operation name as it appears in the service model.
    const NAME: &'static str;

    /// HTTP method for REST protocols.
    const METHOD: HttpMethod = HttpMethod::POST;

    /// Body content type when it is not the protocol's JSON type.
    const CONTENT_TYPE: Option<&'static str> = None;

    /// Check required fields. Runs before anything touches the network.
    fn validate(&self) -> ServiceResult<()> {
        Ok(())
    }

    /// Path and query, for REST protocols.
    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::new())
    }

    /// Members bound to request headers.
    fn headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Host label prepended to the endpoint, e.g. `data.`.
    fn host_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Request body. Defaults to the JSON of the serialized members, and
    /// nothing for bodyless methods.
    fn body(&self) -> ServiceResult<Option<Bytes>> {
        if Self::METHOD.is_bodyless() {
            return Ok(None);
        }
        Ok(Some(Bytes::from(serde_json::to_vec(self)?)))
    }

    /// Read the response.
    fn parse(response: &AwsResponse) -> ServiceResult<Self::Output> {
        response.json_or_default().map_err(|e| {
            ServiceError::serialization(format!(
                "Failed to deserialize {} response: {}",
                Self::NAME,
                e
            ))
        })
    }
}

/// Requests whose output carries a continuation token.
pub trait Paginated: Operation {
    /// Token for the page after `output`, if any.
    fn next_token(output: &Self::Output) -> Option<String>;

    /// Set the token on the next request.
    fn set_next_token(&mut self, token: Option<String>);
}

/// The value of a required field, or the `MISSING_PARAMETER` error.
///
/// ```
/// use aws_services::operation::require;
///
/// let id: Option<String> = None;
/// let err = require("GetDomain", "DomainId", &id).unwrap_err();
/// assert_eq!(err.to_string(), "Missing required field [DomainId]");
/// ```
pub fn require<'a, T>(
    operation: &'static str,
    field: &'static str,
    value: &'a Option<T>,
) -> ServiceResult<&'a T> {
    value.as_ref().ok_or_else(|| {
        error!(operation, field, "Missing required field [{}]", field);
        ServiceError::MissingParameter { operation, field }
    })
}

/// A fresh idempotency token.
pub fn idempotency_token() -> String {
    Uuid::new_v4().to_string()
}

/// The caller's token, or a fresh one.
pub fn token_or_new(token: &Option<String>) -> String {
    token.clone().unwrap_or_else(idempotency_token)
}

/// `serialize_with` helper that fills an unset idempotency token.
pub fn serialize_token<S: Serializer>(
    token: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&token_or_new(token))
}
