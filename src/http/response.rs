//! Protocol-level response wrapper.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::{map_error_response, ServiceError, ServiceResult};
use crate::transport::HttpResponse;

const REQUEST_ID_HEADERS: &[&str] = &["x-amzn-requestid", "x-amz-request-id", "x-amz-request-id-2"];

/// A response received from a service.
#[derive(Debug, Clone)]
pub struct AwsResponse {
    inner: HttpResponse,
}

impl AwsResponse {
    /// Wrap a transport response.
    pub fn new(inner: HttpResponse) -> Self {
        Self { inner }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.inner.is_success()
    }

    /// All headers, lower-case keys.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.inner.headers
    }

    /// Header lookup, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.get_header(name)
    }

    /// Header lookup returning an owned value.
    pub fn header_string(&self, name: &str) -> Option<String> {
        self.header(name).map(str::to_string)
    }

    /// Raw body.
    pub fn body(&self) -> &Bytes {
        &self.inner.body
    }

    /// AWS request id from whichever header the service used.
    pub fn request_id(&self) -> Option<&str> {
        REQUEST_ID_HEADERS.iter().find_map(|h| self.header(h))
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ServiceResult<T> {
        serde_json::from_slice(&self.inner.body).map_err(|e| {
            ServiceError::serialization(format!("Failed to parse response body: {}", e))
        })
    }

    /// Deserialize the body as JSON, treating an empty body as `{}`.
    pub fn json_or_default<T: DeserializeOwned>(&self) -> ServiceResult<T> {
        if self.inner.body.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_slice(b"{}").map_err(|e| {
                ServiceError::serialization(format!("Failed to parse empty response: {}", e))
            });
        }
        self.json()
    }

    /// Convert an unsuccessful response into an error.
    pub fn into_error(self) -> ServiceError {
        let request_id = self.request_id().map(str::to_string);
        map_error_response(
            self.inner.status,
            &self.inner.headers,
            &self.inner.body,
            request_id,
        )
    }
}

impl From<HttpResponse> for AwsResponse {
    fn from(inner: HttpResponse) -> Self {
        Self::new(inner)
    }
}
