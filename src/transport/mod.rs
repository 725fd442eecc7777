//! HTTP transport abstraction.
//!
//! The signed request leaves the crate through [`HttpTransport`]. The
//! production implementation is [`ReqwestTransport`]; tests plug in
//! [`MockTransport`](crate::mocks::MockTransport).

use crate::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// HTTP methods used by the service APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    /// GET request
    GET,
    /// POST request
    POST,
    /// PUT request
    PUT,
    /// DELETE request
    DELETE,
    /// HEAD request
    HEAD,
    /// PATCH request
    PATCH,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::PATCH => "PATCH",
        }
    }

    /// Whether requests with this method normally carry no body.
    pub fn is_bodyless(&self) -> bool {
        matches!(self, HttpMethod::GET | HttpMethod::DELETE | HttpMethod::HEAD)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
            HttpMethod::HEAD => reqwest::Method::HEAD,
            HttpMethod::PATCH => reqwest::Method::PATCH,
        }
    }
}

/// A fully signed request ready to send.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: String,
    /// Request headers, including the signature.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Value of a header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The URL path, without query.
    pub fn path(&self) -> &str {
        let after_scheme = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        let path_and_query = after_scheme
            .find('/')
            .map(|i| &after_scheme[i..])
            .unwrap_or("/");
        path_and_query.split('?').next().unwrap_or("/")
    }

    /// The raw query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, q)| q)
    }

    /// The host part of the URL.
    pub fn host(&self) -> Option<&str> {
        let after_scheme = self.url.split_once("://")?.1;
        after_scheme.split(['/', '?']).next()
    }

    /// The body parsed as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_ref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

/// A response as received from the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, keys lower-cased.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header lookup, case-insensitive.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Sends signed requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and read the whole response.
    async fn send(&self, request: HttpRequest) -> ServiceResult<HttpResponse>;
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeouts.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ServiceError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

fn classify(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Timeout {
            message: e.to_string(),
        }
    } else {
        let retryable = e.is_connect() || e.is_request();
        ServiceError::Transport {
            message: e.to_string(),
            source: Some(Box::new(e)),
            retryable,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> ServiceResult<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.as_str())
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_ascii_lowercase(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.bytes().await.map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
