//! AWS REST service clients.
//!
//! Typed clients for ConnectCases, FinSpaceData, Glacier, IoTSiteWise,
//! LookoutEquipment, LookoutMetrics, ResilienceHub, Schemas, SSMIncidents
//! and WAFV2 on top of one shared runtime.
//!
//! # Features
//!
//! - **Typed requests**: every member is optional; required members are
//!   checked before any network call
//! - **AWS Signature V4**: per-service signing names, cached signing keys
//! - **Endpoint resolution**: partition table with FIPS and dual-stack
//!   variants, overrides and host prefixes
//! - **Resilience**: retry with exponential backoff, client-side rate limiting
//! - **Three call styles**: awaited, callable (a future from an executor)
//!   and async (a completion callback)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_services::services::glacier::{DescribeVaultRequest, GlacierClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_services::ServiceError> {
//!     let client = GlacierClient::from_env()?;
//!
//!     let vault = client
//!         .describe_vault(
//!             DescribeVaultRequest::default()
//!                 .account_id("-")
//!                 .vault_name("examplevault"),
//!         )
//!         .await?;
//!     println!("{:?}", vault.number_of_archives);
//!     Ok(())
//! }
//! ```
//!
//! # Call styles
//!
//! ```rust,no_run
//! use aws_services::executor::AsyncCallerContext;
//! use aws_services::services::schemas::{DescribeRegistryRequest, SchemasClient};
//!
//! # async fn example(client: SchemasClient) -> Result<(), aws_services::ServiceError> {
//! let request = DescribeRegistryRequest::default().registry_name("discovered-schemas");
//!
//! // Awaited
//! let _ = client.describe_registry(request.clone()).await?;
//!
//! // Callable
//! let _ = client.describe_registry_callable(request.clone()).await?;
//!
//! // Async with a handler
//! client.describe_registry_async(
//!     request,
//!     |_client, _request, outcome, context| {
//!         println!("{}: {}", context.uuid(), outcome.is_ok());
//!     },
//!     Some(AsyncCallerContext::new()),
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod http;
pub mod mocks;
pub mod operation;
pub mod services;
pub mod signing;
pub mod transport;
pub mod types;

pub use client::{ClientBuilder, FromServiceClient, ServiceClient, ServiceMetadata};
pub use config::{ClientConfig, ClientConfigBuilder, RateLimitConfig, RetryConfig};
pub use credentials::{
    AwsCredentials, ChainCredentialProvider, CredentialProvider, DefaultCredentialProvider,
    EnvironmentCredentialProvider, ProfileCredentialProvider, StaticCredentialProvider,
};
pub use endpoint::{DefaultEndpointProvider, Endpoint, EndpointParams, EndpointProvider};
pub use error::{ServiceError, ServiceResult, MISSING_PARAMETER};
pub use executor::{AsyncCallerContext, Executor, OperationFuture, TokioExecutor};
pub use operation::{Operation, Paginated, Protocol, RequestUri};
pub use services::{
    connect_cases::ConnectCasesClient, finspace_data::FinSpaceDataClient, glacier::GlacierClient,
    iot_sitewise::IoTSiteWiseClient, lookout_equipment::LookoutEquipmentClient,
    lookout_metrics::LookoutMetricsClient, resilience_hub::ResilienceHubClient,
    schemas::SchemasClient, ssm_incidents::SsmIncidentsClient, wafv2::Wafv2Client,
};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
