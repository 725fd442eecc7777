//! Client configuration.
//!
//! A [`ClientConfig`] carries everything a service client needs besides the
//! per-service metadata:
//!
//! - Region, endpoint override and the FIPS / dual-stack switches
//! - Credential provider
//! - Timeout, retry and rate limiting settings
//! - User agent and the executor used by the callable and async variants
//!
//! The same configuration can be shared by clients of different services.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub mod error;
pub mod rate_limit;
pub mod retry;

pub use error::ConfigError;
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use retry::RetryConfig;

use crate::credentials::{
    AwsCredentials, CredentialProvider, DefaultCredentialProvider, StaticCredentialProvider,
};
use crate::executor::Executor;

/// Default timeout for a whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration shared by all service clients.
#[derive(Clone)]
pub struct ClientConfig {
    /// AWS region (e.g. "us-east-1").
    pub region: String,

    /// Endpoint override. Takes precedence over partition-based resolution.
    pub endpoint: Option<String>,

    /// Resolve FIPS endpoints.
    pub use_fips: bool,

    /// Resolve dual-stack (IPv4 + IPv6) endpoints.
    pub use_dual_stack: bool,

    /// Credential provider for AWS authentication.
    pub credentials_provider: Arc<dyn CredentialProvider>,

    /// Timeout for the entire request.
    pub timeout: Duration,

    /// Timeout for establishing connections.
    pub connect_timeout: Duration,

    /// Retry configuration.
    pub retry_config: RetryConfig,

    /// Rate limiting configuration.
    pub rate_limit: Option<RateLimitConfig>,

    /// Custom user agent string.
    pub user_agent: Option<String>,

    /// Skip host prefixes such as `data.` in front of resolved endpoints.
    pub disable_host_prefix_injection: bool,

    /// Executor for the callable and async operation variants.
    pub executor: Option<Arc<dyn Executor>>,
}

impl ClientConfig {
    /// Create a new configuration builder.
    ///
    /// ```
    /// use aws_services::config::ClientConfig;
    ///
    /// let config = ClientConfig::builder()
    ///     .region("eu-west-1")
    ///     .credentials("AKIDEXAMPLE", "secret")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.region, "eu-west-1");
    /// ```
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// - `AWS_REGION` or `AWS_DEFAULT_REGION` for the region
    /// - `AWS_ENDPOINT_URL` for an endpoint override
    /// - `AWS_USE_FIPS_ENDPOINT` and `AWS_USE_DUALSTACK_ENDPOINT`, `true` or `false`
    /// - the default credential chain for authentication
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = std::env::var("AWS_REGION")
            .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
            .map_err(|_| ConfigError::MissingRegion)?;

        let mut builder = Self::builder()
            .region(region)
            .credentials_provider(DefaultCredentialProvider::new())
            .use_fips(env_flag("AWS_USE_FIPS_ENDPOINT")?)
            .use_dual_stack(env_flag("AWS_USE_DUALSTACK_ENDPOINT")?);

        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            if !endpoint.trim().is_empty() {
                builder = builder.endpoint(endpoint);
            }
        }

        builder.build()
    }
}

fn env_flag(variable: &'static str) -> Result<bool, ConfigError> {
    match std::env::var(variable) {
        Ok(value) => parse_flag(variable, &value),
        Err(_) => Ok(false),
    }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") || v.is_empty() => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            variable,
            value: value.to_string(),
        }),
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("use_fips", &self.use_fips)
            .field("use_dual_stack", &self.use_dual_stack)
            .field("credentials_provider", &"<provider>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry_config", &self.retry_config)
            .field("rate_limit", &self.rate_limit)
            .field("user_agent", &self.user_agent)
            .field(
                "disable_host_prefix_injection",
                &self.disable_host_prefix_injection,
            )
            .field("executor", &self.executor.as_ref().map(|_| "<executor>"))
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Default)]
pub struct ClientConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    use_fips: bool,
    use_dual_stack: bool,
    credentials_provider: Option<Arc<dyn CredentialProvider>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry_config: Option<RetryConfig>,
    rate_limit: Option<RateLimitConfig>,
    user_agent: Option<String>,
    disable_host_prefix_injection: bool,
    executor: Option<Arc<dyn Executor>>,
}

impl ClientConfigBuilder {
    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set an endpoint override such as `http://localhost:4566`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Resolve FIPS endpoints.
    pub fn use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = use_fips;
        self
    }

    /// Resolve dual-stack endpoints.
    pub fn use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = use_dual_stack;
        self
    }

    /// Set a custom credential provider.
    pub fn credentials_provider<P>(mut self, provider: P) -> Self
    where
        P: CredentialProvider + 'static,
    {
        self.credentials_provider = Some(Arc::new(provider));
        self
    }

    /// Set a shared credential provider.
    pub fn shared_credentials_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credentials_provider = Some(provider);
        self
    }

    /// Use static credentials.
    pub fn credentials(
        self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.credentials_provider(StaticCredentialProvider::new(AwsCredentials::new(
            access_key_id,
            secret_access_key,
        )))
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the number of retries, keeping the rest of the retry policy.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        let retry = self.retry_config.take().unwrap_or_default();
        self.retry_config = Some(retry.with_max_retries(max_retries));
        self
    }

    /// Set the retry policy.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = Some(config);
        self
    }

    /// Enable client-side rate limiting.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Disable host prefix injection.
    pub fn disable_host_prefix_injection(mut self, disable: bool) -> Self {
        self.disable_host_prefix_injection = disable;
        self
    }

    /// Set the executor used by callable and async operation variants.
    pub fn executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Build the configuration.
    ///
    /// Fails if the region or the credential provider is missing, if a
    /// timeout is zero, or if the rate limit cannot be honoured.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let region = self
            .region
            .filter(|r| !r.trim().is_empty())
            .ok_or(ConfigError::MissingRegion)?;

        let credentials_provider = self
            .credentials_provider
            .ok_or(ConfigError::MissingCredentials)?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout { name: "timeout" });
        }
        if connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout {
                name: "connect_timeout",
            });
        }
        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }

        Ok(ClientConfig {
            region,
            endpoint: self.endpoint,
            use_fips: self.use_fips,
            use_dual_stack: self.use_dual_stack,
            credentials_provider,
            timeout,
            connect_timeout,
            retry_config: self.retry_config.unwrap_or_default(),
            rate_limit: self.rate_limit,
            user_agent: self.user_agent,
            disable_host_prefix_injection: self.disable_host_prefix_injection,
            executor: self.executor,
        })
    }
}
