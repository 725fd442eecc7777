//! Endpoint resolution.
//!
//! Clients ask an [`EndpointProvider`] for the base URL of every call. The
//! [`DefaultEndpointProvider`] applies the standard partition table with
//! FIPS and dual-stack variants; tests and private deployments can inject
//! their own.

mod partition;

pub use partition::{is_valid_host_label, partition_for_region, Partition};

use std::fmt;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ServiceError, ServiceResult};

/// Inputs to endpoint resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointParams {
    /// Region to resolve for.
    pub region: Option<String>,
    /// Use the FIPS variant.
    pub use_fips: bool,
    /// Use the dual-stack variant.
    pub use_dual_stack: bool,
    /// Endpoint override.
    pub endpoint: Option<String>,
}

impl EndpointParams {
    /// Parameters taken from a client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            region: Some(config.region.clone()).filter(|r| !r.is_empty()),
            use_fips: config.use_fips,
            use_dual_stack: config.use_dual_stack,
            endpoint: config.endpoint.clone(),
        }
    }

    /// Parameters for a region.
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    /// Set the FIPS flag.
    pub fn with_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = use_fips;
        self
    }

    /// Set the dual-stack flag.
    pub fn with_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = use_dual_stack;
        self
    }

    /// Set the override.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// A resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Parse an absolute `http` or `https` URL.
    pub fn new(url: &str) -> ServiceResult<Self> {
        let url = Url::parse(url).map_err(|e| ServiceError::EndpointResolution {
            message: format!("Invalid endpoint URL '{}': {}", url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ServiceError::EndpointResolution {
                message: format!("Endpoint must be an http(s) URL with a host: {}", url),
            });
        }
        Ok(Self { url })
    }

    /// The endpoint as a string.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// URL scheme.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// `host[:port]`, as sent in the `host` header.
    pub fn host_header(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }

    /// Path component of the endpoint without a trailing slash.
    pub fn base_path(&self) -> &str {
        self.url.path().trim_end_matches('/')
    }

    /// `scheme://host[:port]{base_path}{path}`.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}://{}{}{}",
            self.scheme(),
            self.host_header(),
            self.base_path(),
            path
        )
    }

    /// Prepend `prefix` to the host, e.g. `data.` for data-plane calls.
    ///
    /// ```
    /// use aws_services::endpoint::Endpoint;
    ///
    /// let ep = Endpoint::new("https://iotsitewise.us-east-1.amazonaws.com").unwrap();
    /// let data = ep.with_host_prefix("data.").unwrap();
    /// assert_eq!(data.host_header(), "data.iotsitewise.us-east-1.amazonaws.com");
    /// ```
    pub fn with_host_prefix(&self, prefix: &str) -> ServiceResult<Self> {
        let host = self.url.host_str().unwrap_or_default();
        let prefixed = format!("{}{}", prefix, host);
        let mut url = self.url.clone();
        url.set_host(Some(&prefixed))
            .map_err(|e| ServiceError::EndpointResolution {
                message: format!("Invalid host prefix '{}': {}", prefix, e),
            })?;
        Ok(Self { url })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Resolves the base endpoint of a service.
pub trait EndpointProvider: Send + Sync + fmt::Debug {
    /// Resolve the endpoint for the service whose endpoint prefix is
    /// `endpoint_prefix`.
    fn resolve(&self, endpoint_prefix: &str, params: &EndpointParams) -> ServiceResult<Endpoint>;
}

/// Partition-table resolver used unless a client is given another provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEndpointProvider;

impl DefaultEndpointProvider {
    /// Create the provider.
    pub fn new() -> Self {
        Self
    }
}

fn invalid(message: impl Into<String>) -> ServiceError {
    ServiceError::EndpointResolution {
        message: message.into(),
    }
}

impl EndpointProvider for DefaultEndpointProvider {
    fn resolve(&self, endpoint_prefix: &str, params: &EndpointParams) -> ServiceResult<Endpoint> {
        if let Some(endpoint) = &params.endpoint {
            if params.use_fips {
                return Err(invalid(
                    "Invalid Configuration: FIPS and custom endpoint are not supported",
                ));
            }
            if params.use_dual_stack {
                return Err(invalid(
                    "Invalid Configuration: Dualstack and custom endpoint are not supported",
                ));
            }
            return Endpoint::new(endpoint);
        }

        let region = params
            .region
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| invalid("Invalid Configuration: Missing Region"))?;
        if !is_valid_host_label(region) {
            return Err(invalid(format!(
                "Invalid Configuration: region '{}' is not a valid host label",
                region
            )));
        }

        let partition = partition_for_region(region);
        if params.use_fips && !partition.supports_fips {
            return Err(invalid(format!(
                "FIPS is enabled but partition {} does not support FIPS",
                partition.name
            )));
        }
        let suffix = if params.use_dual_stack {
            partition.dual_stack_dns_suffix.ok_or_else(|| {
                invalid(format!(
                    "DualStack is enabled but partition {} does not support DualStack",
                    partition.name
                ))
            })?
        } else {
            partition.dns_suffix
        };
        let fips = if params.use_fips { "-fips" } else { "" };

        Endpoint::new(&format!(
            "https://{}{}.{}.{}",
            endpoint_prefix, fips, region, suffix
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(prefix: &str, params: EndpointParams) -> ServiceResult<Endpoint> {
        DefaultEndpointProvider::new().resolve(prefix, &params)
    }

    #[test]
    fn test_standard_endpoints() {
        let ep = resolve("cases", EndpointParams::for_region("us-west-2")).unwrap();
        assert_eq!(ep.url(), "https://cases.us-west-2.amazonaws.com/");

        let ep = resolve("glacier", EndpointParams::for_region("cn-north-1")).unwrap();
        assert_eq!(ep.host_header(), "glacier.cn-north-1.amazonaws.com.cn");

        let ep = resolve("schemas", EndpointParams::for_region("us-iso-east-1")).unwrap();
        assert_eq!(ep.host_header(), "schemas.us-iso-east-1.c2s.ic.gov");
    }

    #[test]
    fn test_fips_and_dual_stack() {
        let ep = resolve(
            "wafv2",
            EndpointParams::for_region("us-east-1").with_fips(true),
        )
        .unwrap();
        assert_eq!(ep.host_header(), "wafv2-fips.us-east-1.amazonaws.com");

        let ep = resolve(
            "wafv2",
            EndpointParams::for_region("us-east-1")
                .with_fips(true)
                .with_dual_stack(true),
        )
        .unwrap();
        assert_eq!(ep.host_header(), "wafv2-fips.us-east-1.api.aws");

        let ep = resolve(
            "glacier",
            EndpointParams::for_region("cn-north-1").with_dual_stack(true),
        )
        .unwrap();
        assert_eq!(ep.host_header(), "glacier.cn-north-1.api.amazonwebservices.com.cn");
    }

    #[test]
    fn test_dual_stack_unsupported_partition() {
        let err = resolve(
            "glacier",
            EndpointParams::for_region("us-isob-east-1").with_dual_stack(true),
        )
        .unwrap_err();
        assert!(err.to_string().contains("aws-iso-b"));
    }

    #[test]
    fn test_override() {
        let ep = resolve(
            "cases",
            EndpointParams::for_region("us-east-1").with_endpoint("http://localhost:4566"),
        )
        .unwrap();
        assert_eq!(ep.host_header(), "localhost:4566");
        assert_eq!(ep.join("/domains"), "http://localhost:4566/domains");

        let err = resolve(
            "cases",
            EndpointParams::for_region("us-east-1")
                .with_endpoint("http://localhost:4566")
                .with_fips(true),
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::EndpointResolution { .. }));

        assert!(resolve(
            "cases",
            EndpointParams::default()
                .with_endpoint("https://example.com")
                .with_dual_stack(true),
        )
        .is_err());
    }

    #[test]
    fn test_missing_and_invalid_region() {
        let err = resolve("cases", EndpointParams::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Endpoint resolution failed: Invalid Configuration: Missing Region"
        );
        assert!(resolve("cases", EndpointParams::for_region("us east 1")).is_err());
    }

    #[test]
    fn test_host_prefix_keeps_port_and_path() {
        let ep = Endpoint::new("http://localhost:4566/base/").unwrap();
        let prefixed = ep.with_host_prefix("data.").unwrap();
        assert_eq!(prefixed.host_header(), "data.localhost:4566");
        assert_eq!(prefixed.base_path(), "/base");
    }

    #[test]
    fn test_rejects_non_http_override() {
        assert!(Endpoint::new("ftp://example.com").is_err());
        assert!(Endpoint::new("not a url").is_err());
    }
}
