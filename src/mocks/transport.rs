//! Mock HTTP transport.

use crate::error::{ServiceError, ServiceResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Canned response returned by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl MockResponse {
    /// 200 with an empty body.
    pub fn ok() -> Self {
        Self::error(200, Bytes::new())
    }

    /// 200 with a body.
    pub fn ok_with_body(body: impl Into<Bytes>) -> Self {
        Self::error(200, body)
    }

    /// 200 with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        Self::ok_with_body(value.to_string())
    }

    /// Any status with a body.
    pub fn error(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header; the name is stored lower-cased like real responses.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }
}

/// Transport that records requests and replays queued responses in order.
///
/// When the queue is empty the default response is used; without one the
/// send fails with a non-retryable transport error.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    default_response: Option<MockResponse>,
}

impl MockTransport {
    /// No queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `responses` in order.
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Answer every request with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        Self {
            default_response: Some(response),
            ..Self::default()
        }
    }

    /// Queue another response.
    pub fn queue_response(&self, response: MockResponse) {
        self.responses.lock().push_back(response);
    }

    /// All recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ServiceResult<HttpResponse> {
        self.requests.lock().push(request);

        let next = self
            .responses
            .lock()
            .pop_front()
            .or_else(|| self.default_response.clone());

        match next {
            Some(mock) => Ok(HttpResponse {
                status: mock.status,
                headers: mock.headers,
                body: mock.body,
            }),
            None => Err(ServiceError::Transport {
                message: "No mock response available".to_string(),
                source: None,
                retryable: false,
            }),
        }
    }
}
