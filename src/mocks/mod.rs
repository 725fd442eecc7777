//! Test doubles for exercising clients without a network.
//!
//! ```
//! use aws_services::mocks::{MockResponse, MockTransport};
//! use std::sync::Arc;
//!
//! let transport = Arc::new(MockTransport::with_responses(vec![
//!     MockResponse::ok_with_body(r#"{"domainId":"d-1"}"#),
//! ]));
//! assert_eq!(transport.request_count(), 0);
//! ```

mod transport;

pub use transport::{MockResponse, MockTransport};

use crate::config::ClientConfig;
use crate::credentials::{AwsCredentials, StaticCredentialProvider};

/// A configuration with static test credentials, a fixed region and an
/// endpoint override, suitable for [`MockTransport`]-backed clients.
pub fn test_config() -> ClientConfig {
    test_config_builder()
        .endpoint("https://service.test")
        .build()
        .unwrap_or_else(|e| panic!("test configuration is valid: {e}"))
}

/// Builder pre-populated with test credentials and `us-east-1`.
pub fn test_config_builder() -> crate::config::ClientConfigBuilder {
    ClientConfig::builder()
        .region("us-east-1")
        .credentials_provider(StaticCredentialProvider::new(AwsCredentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
        )))
        .retry_config(crate::config::RetryConfig::disabled())
}
