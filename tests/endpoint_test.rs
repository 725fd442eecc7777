//! Endpoint resolution as seen through the clients.

use aws_services::endpoint::{Endpoint, EndpointParams, EndpointProvider};
use aws_services::mocks::{test_config_builder, MockResponse, MockTransport};
use aws_services::services::connect_cases::{ConnectCasesClient, ListDomainsRequest};
use aws_services::services::iot_sitewise::{DescribeAssetRequest, IoTSiteWiseClient};
use aws_services::services::wafv2::{ListIpSetsRequest, Wafv2Client};
use aws_services::{ClientBuilder, ClientConfig, FromServiceClient, ServiceError, ServiceResult};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

fn build<C: FromServiceClient>(config: ClientConfig, transport: &Arc<MockTransport>) -> C {
    ClientBuilder::<C>::new(config)
        .shared_transport(transport.clone())
        .build()
        .unwrap()
}

fn transport() -> Arc<MockTransport> {
    Arc::new(MockTransport::with_default(MockResponse::json(json!({}))))
}

#[tokio::test]
async fn test_regional_endpoint() {
    let transport = transport();
    let config = test_config_builder().region("us-west-2").build().unwrap();
    let client: ConnectCasesClient = build(config, &transport);

    client.list_domains(ListDomainsRequest::default()).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.host(), Some("cases.us-west-2.amazonaws.com"));
    assert!(sent.url.starts_with("https://"));
    let auth = sent.header("authorization").unwrap();
    assert!(auth.contains("/us-west-2/cases/aws4_request"));
}

#[tokio::test]
async fn test_china_partition() {
    let transport = transport();
    let config = test_config_builder().region("cn-north-1").build().unwrap();
    let client: Wafv2Client = build(config, &transport);

    client
        .list_ip_sets(ListIpSetsRequest::default().scope("REGIONAL"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().host(),
        Some("wafv2.cn-north-1.amazonaws.com.cn")
    );
}

#[tokio::test]
async fn test_fips_and_dual_stack_variants() {
    let transport = transport();
    let config = test_config_builder().use_fips(true).build().unwrap();
    let client: Wafv2Client = build(config, &transport);
    client
        .list_ip_sets(ListIpSetsRequest::default().scope("REGIONAL"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().host(),
        Some("wafv2-fips.us-east-1.amazonaws.com")
    );

    let config = test_config_builder()
        .use_fips(true)
        .use_dual_stack(true)
        .build()
        .unwrap();
    let client: Wafv2Client = build(config, &transport);
    client
        .list_ip_sets(ListIpSetsRequest::default().scope("REGIONAL"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().host(),
        Some("wafv2-fips.us-east-1.api.aws")
    );
}

#[tokio::test]
async fn test_host_prefix_on_resolved_endpoint() {
    let transport = transport();
    let config = test_config_builder().region("eu-west-1").build().unwrap();
    let client: IoTSiteWiseClient = build(config, &transport);

    client
        .describe_asset(DescribeAssetRequest::default().asset_id("a-1"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().host(),
        Some("api.iotsitewise.eu-west-1.amazonaws.com")
    );

    let endpoint = client.service_client().resolve_endpoint(Some("data.")).unwrap();
    assert_eq!(
        endpoint.host_header(),
        "data.iotsitewise.eu-west-1.amazonaws.com"
    );
    assert_eq!(
        client.service_client().resolve_endpoint(None).unwrap().host_header(),
        "iotsitewise.eu-west-1.amazonaws.com"
    );
}

#[tokio::test]
async fn test_custom_endpoint_with_fips_fails_before_sending() {
    let transport = transport();
    let config = test_config_builder()
        .endpoint("https://private.example.com")
        .use_fips(true)
        .build()
        .unwrap();
    let client: ConnectCasesClient = build(config, &transport);

    let err = client
        .list_domains(ListDomainsRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::EndpointResolution { .. }));
    assert!(err.to_string().contains("FIPS"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_endpoint_override_keeps_base_path() {
    let transport = transport();
    let config = test_config_builder()
        .endpoint("http://localhost:4566/proxy")
        .build()
        .unwrap();
    let client: ConnectCasesClient = build(config, &transport);

    client.list_domains(ListDomainsRequest::default()).await.unwrap();
    let sent = transport.last_request().unwrap();
    assert_eq!(sent.host(), Some("localhost:4566"));
    assert!(sent.path().starts_with("/proxy/"));
}

/// Records what it was asked for and answers with a fixed host.
#[derive(Debug, Clone, Default)]
struct RecordingProvider {
    calls: Arc<Mutex<Vec<(String, EndpointParams)>>>,
}

impl EndpointProvider for RecordingProvider {
    fn resolve(&self, endpoint_prefix: &str, params: &EndpointParams) -> ServiceResult<Endpoint> {
        self.calls
            .lock()
            .push((endpoint_prefix.to_string(), params.clone()));
        Endpoint::new("https://vpce-0123.example.internal")
    }
}

#[tokio::test]
async fn test_injected_provider() {
    let transport = transport();
    let provider = RecordingProvider::default();
    let config = test_config_builder()
        .region("ap-southeast-2")
        .use_dual_stack(true)
        .build()
        .unwrap();
    let client = IoTSiteWiseClient::builder(config)
        .shared_transport(transport.clone())
        .endpoint_provider(provider.clone())
        .build()
        .unwrap();

    client
        .describe_asset(DescribeAssetRequest::default().asset_id("a-1"))
        .await
        .unwrap();

    // The host prefix still applies on top of the provider's answer.
    assert_eq!(
        transport.last_request().unwrap().host(),
        Some("api.vpce-0123.example.internal")
    );
    let calls = provider.calls.lock();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "iotsitewise");
    assert_eq!(calls[0].1.region.as_deref(), Some("ap-southeast-2"));
    assert!(calls[0].1.use_dual_stack);
}

#[tokio::test]
async fn test_provider_not_consulted_for_invalid_request() {
    let transport = transport();
    let provider = RecordingProvider::default();
    let client = IoTSiteWiseClient::builder(test_config_builder().build().unwrap())
        .shared_transport(transport.clone())
        .endpoint_provider(provider.clone())
        .build()
        .unwrap();

    let err = client
        .describe_asset(DescribeAssetRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.missing_field(), Some("AssetId"));
    assert!(provider.calls.lock().is_empty());
    assert_eq!(transport.request_count(), 0);
}
