//! Shared base client.
//!
//! Every service client is a thin wrapper over [`ServiceClient`], which
//! runs the common pipeline: validate the request, resolve the endpoint,
//! build the path, sign, dispatch and parse.

use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use futures::FutureExt;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoint::{DefaultEndpointProvider, Endpoint, EndpointParams, EndpointProvider};
use crate::error::ServiceResult;
use crate::executor::{AsyncCallerContext, Executor, OperationFuture, TokioExecutor};
use crate::http::{AwsHttpClient, AwsRequest, SigningScope};
use crate::operation::{Operation, Paginated, Protocol};
use crate::transport::{HttpMethod, HttpTransport, ReqwestTransport};

/// Static description of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Service id, e.g. `ConnectCases`.
    pub service_id: &'static str,
    /// First host label of standard endpoints.
    pub endpoint_prefix: &'static str,
    /// SigV4 signing name.
    pub signing_name: &'static str,
    /// API version.
    pub api_version: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// Headers sent with every request.
    pub default_headers: &'static [(&'static str, &'static str)],
}

/// Implemented by generated clients so [`ClientBuilder`] can construct them.
pub trait FromServiceClient: Sized {
    /// Metadata of the service.
    fn metadata() -> &'static ServiceMetadata;

    /// Wrap a configured base client.
    fn from_service_client(client: ServiceClient) -> Self;
}

/// The base client shared by every service.
///
/// Cloning is cheap; clones share the transport, signing key cache and
/// rate limiter.
#[derive(Clone)]
pub struct ServiceClient {
    metadata: &'static ServiceMetadata,
    http: AwsHttpClient,
    endpoint_provider: Arc<dyn EndpointProvider>,
    endpoint_params: EndpointParams,
    executor: Arc<dyn Executor>,
    scope: SigningScope,
    disable_host_prefix: bool,
}

impl ServiceClient {
    /// Service metadata.
    pub fn metadata(&self) -> &'static ServiceMetadata {
        self.metadata
    }

    /// Endpoint parameters taken from the configuration.
    pub fn endpoint_params(&self) -> &EndpointParams {
        &self.endpoint_params
    }

    /// Resolve the endpoint, applying `host_prefix` unless host prefix
    /// injection is disabled.
    pub fn resolve_endpoint(&self, host_prefix: Option<&str>) -> ServiceResult<Endpoint> {
        let endpoint = self
            .endpoint_provider
            .resolve(self.metadata.endpoint_prefix, &self.endpoint_params)?;
        match host_prefix {
            Some(prefix) if !self.disable_host_prefix => endpoint.with_host_prefix(prefix),
            _ => Ok(endpoint),
        }
    }

    /// Run `request` and return its outcome.
    pub async fn execute<O: Operation>(&self, request: &O) -> ServiceResult<O::Output> {
        request.validate()?;
        let endpoint = self.resolve_endpoint(request.host_prefix())?;
        let aws_request = self.build_request(request)?;

        debug!(
            service = self.metadata.service_id,
            operation = O::NAME,
            path = aws_request.path(),
            "Dispatching operation"
        );
        let response = self.http.send(&aws_request, &endpoint, &self.scope).await?;
        debug!(
            service = self.metadata.service_id,
            operation = O::NAME,
            status = response.status(),
            "Received response"
        );

        O::parse(&response)
    }

    /// Run `request` on the executor and return a future of the outcome.
    pub fn execute_callable<O: Operation>(&self, request: O) -> OperationFuture<O::Output> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let task = async move {
            let outcome = client.execute(&request).await;
            let _ = tx.send(outcome);
        }
        .boxed();

        match self.executor.submit(task) {
            Ok(()) => OperationFuture::pending(rx),
            Err(e) => OperationFuture::failed(e),
        }
    }

    /// Run `request` on the executor and pass the outcome to `handler`.
    ///
    /// The handler also receives the request and the caller context, which
    /// gets a fresh id when none is given.
    pub fn execute_with_handler<O, H>(
        &self,
        request: O,
        handler: H,
        context: Option<AsyncCallerContext>,
    ) -> ServiceResult<()>
    where
        O: Operation,
        H: FnOnce(&O, ServiceResult<O::Output>, AsyncCallerContext) + Send + 'static,
    {
        let context = context.unwrap_or_default();
        let client = self.clone();
        let task = async move {
            let outcome = client.execute(&request).await;
            handler(&request, outcome, context);
        }
        .boxed();
        self.executor.submit(task)
    }

    /// Stream every page of a paginated operation.
    ///
    /// Stops after the first error or when the continuation token is
    /// absent or empty.
    pub fn paginate<O: Paginated>(&self, request: O) -> BoxStream<'static, ServiceResult<O::Output>> {
        let client = self.clone();
        stream::try_unfold(Some(request), move |state| {
            let client = client.clone();
            async move {
                let Some(mut request) = state else {
                    return Ok(None);
                };
                let output = client.execute(&request).await?;
                let next = O::next_token(&output)
                    .filter(|token| !token.is_empty())
                    .map(|token| {
                        request.set_next_token(Some(token));
                        request
                    });
                Ok(Some((output, next)))
            }
        })
        .boxed()
    }

    fn build_request<O: Operation>(&self, request: &O) -> ServiceResult<AwsRequest> {
        let protocol = self.metadata.protocol;

        let mut aws_request = match protocol {
            Protocol::RestJson1 => {
                let (path, query) = request.uri()?.into_parts();
                AwsRequest::new(O::METHOD, path).query_params(query)
            }
            Protocol::AwsJson { .. } => AwsRequest::new(HttpMethod::POST, "/"),
        };

        for (name, value) in self.metadata.default_headers {
            aws_request = aws_request.header(name, value)?;
        }
        if let Some(target) = protocol.target(O::NAME) {
            aws_request = aws_request.header("x-amz-target", target)?;
        }
        for (name, value) in request.headers() {
            aws_request = aws_request.header(name, value)?;
        }

        let body = match protocol {
            Protocol::AwsJson { .. } => {
                Some(request.body()?.unwrap_or_else(|| Bytes::from_static(b"{}")))
            }
            Protocol::RestJson1 => request.body()?,
        };
        if let Some(body) = body {
            let content_type = O::CONTENT_TYPE
                .map(str::to_string)
                .unwrap_or_else(|| protocol.content_type());
            aws_request = aws_request.body(body, content_type);
        }

        Ok(aws_request)
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service_id", &self.metadata.service_id)
            .field("endpoint_params", &self.endpoint_params)
            .field("http", &self.http)
            .field("endpoint_provider", &self.endpoint_provider)
            .field("executor", &self.executor)
            .finish()
    }
}

/// Builds a service client of type `C`.
///
/// ```
/// use aws_services::mocks::{test_config, MockTransport};
/// use aws_services::services::glacier::GlacierClient;
///
/// let client = GlacierClient::builder(test_config())
///     .transport(MockTransport::new())
///     .build()
///     .unwrap();
/// assert_eq!(client.service_client().metadata().signing_name, "glacier");
/// ```
pub struct ClientBuilder<C> {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    endpoint_provider: Option<Arc<dyn EndpointProvider>>,
    executor: Option<Arc<dyn Executor>>,
    _client: PhantomData<fn() -> C>,
}

impl<C: FromServiceClient> ClientBuilder<C> {
    /// Start from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            endpoint_provider: None,
            executor: None,
            _client: PhantomData,
        }
    }

    /// Send requests through `transport` instead of reqwest.
    pub fn transport<T: HttpTransport + 'static>(self, transport: T) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    /// Send requests through a shared transport.
    pub fn shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve endpoints with `provider`.
    pub fn endpoint_provider<P: EndpointProvider + 'static>(mut self, provider: P) -> Self {
        self.endpoint_provider = Some(Arc::new(provider));
        self
    }

    /// Run callable and async variants on `executor`. Overrides the
    /// executor in the configuration.
    pub fn executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Build the client.
    pub fn build(self) -> ServiceResult<C> {
        let metadata = C::metadata();
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                self.config.timeout,
                self.config.connect_timeout,
            )?),
        };
        let executor = self
            .executor
            .or_else(|| self.config.executor.clone())
            .unwrap_or_else(|| Arc::new(TokioExecutor::new()));
        let endpoint_provider = self
            .endpoint_provider
            .unwrap_or_else(|| Arc::new(DefaultEndpointProvider::new()));

        let inner = ServiceClient {
            metadata,
            http: AwsHttpClient::new(&self.config, transport),
            endpoint_provider,
            endpoint_params: EndpointParams::from_config(&self.config),
            executor,
            scope: SigningScope::new(self.config.region.as_str(), metadata.signing_name),
            disable_host_prefix: self.config.disable_host_prefix_injection,
        };
        Ok(C::from_service_client(inner))
    }
}

impl<C> fmt::Debug for ClientBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .field("endpoint_provider", &self.endpoint_provider)
            .field("executor", &self.executor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::mocks::{test_config, test_config_builder, MockResponse, MockTransport};
    use crate::operation::{require, RequestUri};
    use futures::TryStreamExt;
    use serde::{Deserialize, Serialize};

    static REST: ServiceMetadata = ServiceMetadata {
        service_id: "Widget",
        endpoint_prefix: "widgets",
        signing_name: "widgets",
        api_version: "2024-01-01",
        protocol: Protocol::RestJson1,
        default_headers: &[("x-amz-widget-version", "2024-01-01")],
    };

    static RPC: ServiceMetadata = ServiceMetadata {
        service_id: "Widget",
        endpoint_prefix: "widgets",
        signing_name: "widgets",
        api_version: "2024-01-01",
        protocol: Protocol::AwsJson {
            version: "1.0",
            target_prefix: "WidgetService",
        },
        default_headers: &[],
    };

    #[derive(Debug)]
    struct Rest(ServiceClient);
    #[derive(Debug)]
    struct Rpc(ServiceClient);

    impl FromServiceClient for Rest {
        fn metadata() -> &'static ServiceMetadata {
            &REST
        }
        fn from_service_client(client: ServiceClient) -> Self {
            Rest(client)
        }
    }

    impl FromServiceClient for Rpc {
        fn metadata() -> &'static ServiceMetadata {
            &RPC
        }
        fn from_service_client(client: ServiceClient) -> Self {
            Rpc(client)
        }
    }

    #[derive(Debug, Clone, Default, Serialize)]
    struct GetThing {
        #[serde(skip)]
        id: Option<String>,
        #[serde(skip)]
        next_token: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    struct Thing {
        #[serde(rename = "nextToken")]
        next_token: Option<String>,
    }

    impl Operation for GetThing {
        type Output = Thing;
        const NAME: &'static str = "GetThing";
        const METHOD: HttpMethod = HttpMethod::GET;

        fn validate(&self) -> ServiceResult<()> {
            require(Self::NAME, "Id", &self.id)?;
            Ok(())
        }

        fn uri(&self) -> ServiceResult<RequestUri> {
            Ok(RequestUri::from_literal("/things/")
                .param(&self.id)
                .query_opt("nextToken", &self.next_token))
        }

        fn host_prefix(&self) -> Option<&'static str> {
            Some("data.")
        }
    }

    impl Paginated for GetThing {
        fn next_token(output: &Thing) -> Option<String> {
            output.next_token.clone()
        }

        fn set_next_token(&mut self, token: Option<String>) {
            self.next_token = token;
        }
    }

    fn rest(transport: Arc<MockTransport>) -> ServiceClient {
        ClientBuilder::<Rest>::new(test_config())
            .shared_transport(transport)
            .build()
            .unwrap()
            .0
    }

    fn thing(id: &str) -> GetThing {
        GetThing {
            id: Some(id.to_string()),
            next_token: None,
        }
    }

    #[tokio::test]
    async fn test_rest_pipeline() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
        rest(transport.clone()).execute(&thing("a b")).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::GET);
        assert_eq!(sent.url, "https://data.service.test/things/a%20b");
        assert_eq!(sent.header("x-amz-widget-version"), Some("2024-01-01"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
        let err = rest(transport.clone())
            .execute(&GetThing::default())
            .await
            .unwrap_err();
        assert_eq!(err.missing_field(), Some("Id"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_host_prefix_can_be_disabled() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
        let config = test_config_builder()
            .endpoint("https://service.test")
            .disable_host_prefix_injection(true)
            .build()
            .unwrap();
        let client = ClientBuilder::<Rest>::new(config)
            .shared_transport(transport.clone())
            .build()
            .unwrap()
            .0;
        client.execute(&thing("x")).await.unwrap();
        assert_eq!(transport.last_request().unwrap().host(), Some("service.test"));
    }

    #[tokio::test]
    async fn test_aws_json_pipeline() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
        let client = ClientBuilder::<Rpc>::new(test_config())
            .shared_transport(transport.clone())
            .build()
            .unwrap()
            .0;
        client.execute(&thing("x")).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::POST);
        assert_eq!(sent.path(), "/");
        assert_eq!(sent.header("x-amz-target"), Some("WidgetService.GetThing"));
        assert_eq!(sent.header("content-type"), Some("application/x-amz-json-1.0"));
        assert_eq!(sent.body.as_deref(), Some(&b"{}"[..]));
    }

    #[tokio::test]
    async fn test_callable_and_handler() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(
            serde_json::json!({"nextToken": "t"}),
        )));
        let client = rest(transport.clone());

        let out = client.execute_callable(thing("x")).await.unwrap();
        assert_eq!(out.next_token.as_deref(), Some("t"));

        let (tx, rx) = oneshot::channel();
        client
            .execute_with_handler(
                thing("y"),
                move |request, outcome, context| {
                    let _ = tx.send((request.id.clone(), outcome.is_ok(), context));
                },
                Some(AsyncCallerContext::with_uuid("ctx-1")),
            )
            .unwrap();
        let (id, ok, context) = rx.await.unwrap();
        assert_eq!(id.as_deref(), Some("y"));
        assert!(ok);
        assert_eq!(context.uuid(), "ctx-1");
    }

    #[tokio::test]
    async fn test_callable_reports_missing_field() {
        let transport = Arc::new(MockTransport::new());
        let err = rest(transport.clone())
            .execute_callable(GetThing::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingParameter { .. }));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_paginate_follows_tokens() {
        let transport = Arc::new(MockTransport::with_responses(vec![
            MockResponse::json(serde_json::json!({"nextToken": "p2"})),
            MockResponse::json(serde_json::json!({"nextToken": ""})),
        ]));
        let pages: Vec<Thing> = rest(transport.clone())
            .paginate(thing("x"))
            .try_collect()
            .await
            .unwrap();
        assert_eq!(pages.len(), 2);
        let second = &transport.requests()[1];
        assert_eq!(second.query(), Some("nextToken=p2"));
    }
}
