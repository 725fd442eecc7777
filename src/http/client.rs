//! Signing, retrying HTTP client shared by every service.

use chrono::Utc;
use http::{HeaderMap, HeaderValue};
use std::fmt;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::{ClientConfig, RateLimiter, RetryConfig};
use crate::credentials::CredentialProvider;
use crate::endpoint::Endpoint;
use crate::error::{ServiceError, ServiceResult};
use crate::signing::{sign_request, SignableRequest, SigningKeyCache, SigningParams};
use crate::transport::{HttpRequest, HttpTransport};

use super::request::AwsRequest;
use super::response::AwsResponse;

/// Default `user-agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("aws-services-rust/", env!("CARGO_PKG_VERSION"));

/// Region and signing name a request is signed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScope {
    /// Signing region.
    pub region: String,
    /// Service signing name.
    pub signing_name: String,
}

impl SigningScope {
    /// Create a scope.
    pub fn new(region: impl Into<String>, signing_name: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            signing_name: signing_name.into(),
        }
    }
}

/// HTTP client for AWS JSON APIs.
///
/// Each attempt waits on the rate limiter, resolves credentials, signs
/// with a fresh timestamp and sends through the transport. Retryable
/// failures back off per [`RetryConfig`], preferring a server-supplied
/// `Retry-After`.
#[derive(Clone)]
pub struct AwsHttpClient {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialProvider>,
    retry_config: RetryConfig,
    rate_limiter: Option<Arc<RateLimiter>>,
    signing_cache: Arc<SigningKeyCache>,
    user_agent: String,
}

impl AwsHttpClient {
    /// Build a client from the shared configuration and a transport.
    pub fn new(config: &ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            credentials: config.credentials_provider.clone(),
            retry_config: config.retry_config.clone(),
            rate_limiter: config
                .rate_limit
                .as_ref()
                .map(|cfg| Arc::new(RateLimiter::new(cfg.clone()))),
            signing_cache: Arc::new(SigningKeyCache::new()),
            user_agent: config
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// The retry policy in force.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    /// Sign and send `request` against `endpoint`, retrying when allowed.
    pub async fn send(
        &self,
        request: &AwsRequest,
        endpoint: &Endpoint,
        scope: &SigningScope,
    ) -> ServiceResult<AwsResponse> {
        let mut attempt = 0u32;

        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.acquire().await;
            }

            let signed = self.sign(request, endpoint, scope).await?;
            debug!(
                method = %signed.method,
                url = %signed.url,
                attempt = attempt + 1,
                service = %scope.signing_name,
                "Sending request"
            );

            let error = match self.transport.send(signed).await {
                Ok(response) => {
                    let response = AwsResponse::new(response);
                    if response.is_success() {
                        debug!(
                            status = response.status(),
                            request_id = response.request_id().unwrap_or_default(),
                            "Request succeeded"
                        );
                        return Ok(response);
                    }
                    response.into_error()
                }
                Err(e) => e,
            };

            if !self.retry_config.should_retry(attempt, &error) {
                return Err(error);
            }

            let delay = match error.retry_after() {
                Some(retry_after) => retry_after.min(self.retry_config.max_backoff),
                None => self.retry_config.calculate_delay(attempt),
            };
            warn!(
                error = %error,
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                "Request failed, retrying"
            );
            sleep(delay).await;
            attempt += 1;
        }
    }

    async fn sign(
        &self,
        request: &AwsRequest,
        endpoint: &Endpoint,
        scope: &SigningScope,
    ) -> ServiceResult<HttpRequest> {
        let credentials = self.credentials.credentials().await?;

        let mut headers = HeaderMap::new();
        headers.insert(http::header::HOST, header(&endpoint.host_header(), "host")?);
        headers.insert(
            http::header::USER_AGENT,
            header(&self.user_agent, "user-agent")?,
        );
        if let Some(content_type) = request.content_type() {
            headers.insert(http::header::CONTENT_TYPE, header(content_type, "content-type")?);
        }
        for (name, value) in request.headers() {
            headers.insert(name.clone(), value.clone());
        }

        let path = request.full_path(endpoint);
        let signable = SignableRequest {
            method: request.method().as_str(),
            path: &path,
            query: request.query_pairs(),
            payload: request.body_bytes().map(|b| b.as_ref()),
        };
        let params = SigningParams::from_credentials(
            scope.region.as_str(),
            scope.signing_name.as_str(),
            &credentials,
        );
        sign_request(
            &signable,
            &mut headers,
            &params,
            &Utc::now(),
            Some(&self.signing_cache),
        )?;

        Ok(HttpRequest {
            method: request.method(),
            url: request.build_url(endpoint),
            headers,
            body: request.body_bytes().cloned(),
        })
    }
}

fn header(value: &str, name: &str) -> ServiceResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| ServiceError::Validation {
        message: format!("Invalid {} header: {}", name, e),
        field: Some(name.to_string()),
    })
}

impl fmt::Debug for AwsHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsHttpClient")
            .field("retry_config", &self.retry_config)
            .field("rate_limited", &self.rate_limiter.is_some())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
