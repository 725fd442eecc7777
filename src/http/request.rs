//! Protocol-level request representation.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::{ServiceError, ServiceResult};
use crate::signing::uri_encode;
use crate::transport::HttpMethod;

/// An unsigned request: method, encoded path, raw query pairs, headers and body.
#[derive(Debug, Clone)]
pub struct AwsRequest {
    method: HttpMethod,
    path: String,
    query_params: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Bytes>,
    content_type: Option<String>,
}

impl AwsRequest {
    /// Create a request for an already percent-encoded path.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            content_type: None,
        }
    }

    /// Append a query parameter. The value is encoded when the URL is built.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters.
    pub fn query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> ServiceResult<Self> {
        let header_name = HeaderName::from_bytes(name.as_ref().as_bytes()).map_err(|e| {
            ServiceError::Validation {
                message: format!("Invalid header name: {}", e),
                field: Some(name.as_ref().to_string()),
            }
        })?;
        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
            ServiceError::Validation {
                message: format!("Invalid header value: {}", e),
                field: Some(name.as_ref().to_string()),
            }
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set a raw body.
    pub fn body(mut self, body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.content_type = Some(content_type.into());
        self
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize>(self, value: &T, content_type: impl Into<String>) -> ServiceResult<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self.body(body, content_type))
    }

    /// HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Encoded path, relative to the endpoint.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// Headers set so far.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body bytes.
    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Content type of the body.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Path including the endpoint's base path, as signed and sent.
    pub fn full_path(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", endpoint.base_path(), self.path)
    }

    /// Absolute URL against `endpoint`, query encoded with the signer's rules.
    pub fn build_url(&self, endpoint: &Endpoint) -> String {
        let mut url = endpoint.join(&self.path);
        if !self.query_params.is_empty() {
            let query = self
                .query_params
                .iter()
                .map(|(k, v)| format!("{}={}", uri_encode(k, true), uri_encode(v, true)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}
