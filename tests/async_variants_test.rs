//! Callable and async operation variants.

use aws_services::executor::{AsyncCallerContext, Executor, TokioExecutor};
use aws_services::mocks::{test_config, MockResponse, MockTransport};
use aws_services::services::schemas::{DescribeRegistryRequest, SchemasClient};
use aws_services::{ServiceError, ServiceResult, MISSING_PARAMETER};
use futures::future::BoxFuture;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

fn registry_response() -> MockResponse {
    MockResponse::json(json!({
        "RegistryName": "discovered-schemas",
        "RegistryArn": "arn:aws:schemas:us-east-1:111122223333:registry/discovered-schemas"
    }))
}

fn create_test_client(transport: Arc<MockTransport>) -> SchemasClient {
    SchemasClient::builder(test_config())
        .shared_transport(transport)
        .build()
        .unwrap()
}

fn request() -> DescribeRegistryRequest {
    DescribeRegistryRequest::default().registry_name("discovered-schemas")
}

#[tokio::test]
async fn test_callable_matches_awaited_call() {
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let client = create_test_client(transport.clone());

    let awaited = client.describe_registry(request()).await.unwrap();
    let callable = client.describe_registry_callable(request()).await.unwrap();

    assert_eq!(awaited.registry_name, callable.registry_name);
    assert_eq!(awaited.registry_arn, callable.registry_arn);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, requests[1].method);
    assert_eq!(requests[0].url, requests[1].url);
}

#[tokio::test]
async fn test_async_handler_receives_request_outcome_and_context() {
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let client = create_test_client(transport.clone());
    let (tx, rx) = oneshot::channel();

    client
        .describe_registry_async(
            request(),
            move |client, request, outcome, context| {
                let _ = tx.send((
                    client.service_client().metadata().service_id,
                    request.registry_name.clone(),
                    outcome.map(|o| o.registry_arn),
                    context,
                ));
            },
            Some(AsyncCallerContext::with_uuid("ctx-1")),
        )
        .unwrap();

    let (service_id, registry_name, outcome, context) = rx.await.unwrap();
    assert_eq!(service_id, "schemas");
    assert_eq!(registry_name.as_deref(), Some("discovered-schemas"));
    assert_eq!(
        outcome.unwrap().as_deref(),
        Some("arn:aws:schemas:us-east-1:111122223333:registry/discovered-schemas")
    );
    assert_eq!(context.uuid(), "ctx-1");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_async_without_context_gets_fresh_one() {
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let client = create_test_client(transport);
    let (tx, rx) = oneshot::channel();

    client
        .describe_registry_async(
            request(),
            move |_, _, _, context| {
                let _ = tx.send(context);
            },
            None,
        )
        .unwrap();

    let context = rx.await.unwrap();
    assert!(!context.uuid().is_empty());
}

#[tokio::test]
async fn test_missing_field_through_every_variant() {
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let client = create_test_client(transport.clone());

    let awaited = client
        .describe_registry(DescribeRegistryRequest::default())
        .await
        .unwrap_err();
    let callable = client
        .describe_registry_callable(DescribeRegistryRequest::default())
        .await
        .unwrap_err();

    let (tx, rx) = oneshot::channel();
    client
        .describe_registry_async(
            DescribeRegistryRequest::default(),
            move |_, _, outcome, _| {
                let _ = tx.send(outcome.map(|_| ()));
            },
            None,
        )
        .unwrap();
    let handled = rx.await.unwrap().unwrap_err();

    for err in [awaited, callable, handled] {
        assert_eq!(err.error_code(), Some(MISSING_PARAMETER));
        assert_eq!(err.missing_field(), Some("RegistryName"));
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_service_errors_reach_handler() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
        404,
        r#"{"Code":"NotFoundException","Message":"registry missing"}"#,
    )]));
    let client = create_test_client(transport);
    let (tx, rx) = oneshot::channel();

    client
        .describe_registry_async(
            request(),
            move |_, _, outcome, _| {
                let _ = tx.send(outcome.map(|_| ()));
            },
            None,
        )
        .unwrap();

    let err = rx.await.unwrap().unwrap_err();
    assert_eq!(err.error_code(), Some("NotFoundException"));
}

/// Counts submissions before handing them to tokio.
#[derive(Debug, Default)]
struct CountingExecutor {
    submitted: AtomicUsize,
    inner: TokioExecutor,
}

impl Executor for CountingExecutor {
    fn submit(&self, task: BoxFuture<'static, ()>) -> ServiceResult<()> {
        self.submitted.fetch_add(1, Ordering::SeqCst);
        self.inner.submit(task)
    }
}

/// Refuses all work.
#[derive(Debug)]
struct RejectingExecutor;

impl Executor for RejectingExecutor {
    fn submit(&self, _task: BoxFuture<'static, ()>) -> ServiceResult<()> {
        Err(ServiceError::Executor {
            message: "shut down".to_string(),
        })
    }
}

#[tokio::test]
async fn test_custom_executor_runs_variants() {
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let executor = Arc::new(CountingExecutor::default());
    let client = SchemasClient::builder(test_config())
        .shared_transport(transport.clone())
        .executor(executor.clone())
        .build()
        .unwrap();

    client.describe_registry_callable(request()).await.unwrap();
    let (tx, rx) = oneshot::channel();
    client
        .describe_registry_async(
            request(),
            move |_, _, outcome, _| {
                let _ = tx.send(outcome.is_ok());
            },
            None,
        )
        .unwrap();
    assert!(rx.await.unwrap());

    // The awaited variant runs inline.
    client.describe_registry(request()).await.unwrap();

    assert_eq!(executor.submitted.load(Ordering::SeqCst), 2);
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test]
async fn test_rejected_submission() {
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let client = SchemasClient::builder(test_config())
        .shared_transport(transport.clone())
        .executor(Arc::new(RejectingExecutor))
        .build()
        .unwrap();

    let err = client.describe_registry_callable(request()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Executor { .. }));

    let err = client
        .describe_registry_async(request(), |_, _, _, _| {}, None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Executor { .. }));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_executor_from_config_outside_runtime() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let transport = Arc::new(MockTransport::with_default(registry_response()));
    let config = aws_services::mocks::test_config_builder()
        .endpoint("https://service.test")
        .executor(Arc::new(TokioExecutor::with_handle(runtime.handle().clone())))
        .build()
        .unwrap();
    let client = SchemasClient::builder(config)
        .shared_transport(transport.clone())
        .build()
        .unwrap();

    let output = runtime
        .block_on(client.describe_registry_callable(request()))
        .unwrap();
    assert_eq!(output.registry_name.as_deref(), Some("discovered-schemas"));
    assert_eq!(transport.request_count(), 1);
}
