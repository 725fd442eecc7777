//! Executors for the callable and async operation variants.

use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Runs submitted work in the background.
pub trait Executor: Send + Sync + fmt::Debug {
    /// Schedule `task`. Fails if the executor cannot accept work.
    fn submit(&self, task: BoxFuture<'static, ()>) -> ServiceResult<()>;
}

/// Executor backed by a tokio runtime.
///
/// Without a captured handle it spawns onto the runtime current at the
/// time of submission.
#[derive(Debug, Clone, Default)]
pub struct TokioExecutor {
    handle: Option<Handle>,
}

impl TokioExecutor {
    /// Spawn onto the ambient runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn onto a specific runtime.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl Executor for TokioExecutor {
    fn submit(&self, task: BoxFuture<'static, ()>) -> ServiceResult<()> {
        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current().map_err(|e| ServiceError::Executor {
                message: format!("No tokio runtime available: {}", e),
            })?,
        };
        handle.spawn(task);
        Ok(())
    }
}

/// Outcome of a call submitted through an executor.
///
/// Resolves to the operation result, or to [`ServiceError::Executor`] if
/// the task never completes.
pub struct OperationFuture<T> {
    state: FutureState<T>,
}

enum FutureState<T> {
    Pending(oneshot::Receiver<ServiceResult<T>>),
    Failed(Option<ServiceError>),
}

impl<T> OperationFuture<T> {
    pub(crate) fn pending(receiver: oneshot::Receiver<ServiceResult<T>>) -> Self {
        Self {
            state: FutureState::Pending(receiver),
        }
    }

    pub(crate) fn failed(error: ServiceError) -> Self {
        Self {
            state: FutureState::Failed(Some(error)),
        }
    }
}

impl<T> Future for OperationFuture<T> {
    type Output = ServiceResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // Both variants are Unpin.
        let this = self.get_mut();
        match &mut this.state {
            FutureState::Pending(receiver) => match Pin::new(receiver).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                Poll::Ready(Err(_)) => Poll::Ready(Err(ServiceError::Executor {
                    message: "Operation task was dropped before completing".to_string(),
                })),
                Poll::Pending => Poll::Pending,
            },
            FutureState::Failed(error) => Poll::Ready(Err(error.take().unwrap_or_else(|| {
                ServiceError::Executor {
                    message: "OperationFuture polled after completion".to_string(),
                }
            }))),
        }
    }
}

impl<T> fmt::Debug for OperationFuture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            FutureState::Pending(_) => "pending",
            FutureState::Failed(_) => "failed",
        };
        f.debug_struct("OperationFuture").field("state", &state).finish()
    }
}

/// Caller-supplied context handed back to async handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AsyncCallerContext {
    uuid: String,
}

impl AsyncCallerContext {
    /// Context with a random UUID.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
        }
    }

    /// Context with a caller-chosen id.
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }

    /// The context id.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl Default for AsyncCallerContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[tokio::test]
    async fn test_tokio_executor_runs_task() {
        let (tx, rx) = oneshot::channel();
        TokioExecutor::new()
            .submit(
                async move {
                    let _ = tx.send(Ok::<_, ServiceError>(7));
                }
                .boxed(),
            )
            .unwrap();
        assert_eq!(OperationFuture::pending(rx).await.unwrap(), 7);
    }

    #[test]
    fn test_submit_without_runtime_fails() {
        let err = TokioExecutor::new().submit(async {}.boxed()).unwrap_err();
        assert!(matches!(err, ServiceError::Executor { .. }));
    }

    #[test]
    fn test_captured_handle_outside_runtime() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let executor = TokioExecutor::with_handle(runtime.handle().clone());
        let (tx, rx) = oneshot::channel();
        executor
            .submit(
                async move {
                    let _ = tx.send(Ok::<_, ServiceError>("done"));
                }
                .boxed(),
            )
            .unwrap();
        assert_eq!(runtime.block_on(OperationFuture::pending(rx)).unwrap(), "done");
    }

    #[tokio::test]
    async fn test_dropped_task_resolves_to_executor_error() {
        let (tx, rx) = oneshot::channel::<ServiceResult<()>>();
        drop(tx);
        let err = OperationFuture::pending(rx).await.unwrap_err();
        assert!(matches!(err, ServiceError::Executor { .. }));
    }

    #[tokio::test]
    async fn test_failed_future() {
        let fut: OperationFuture<()> = OperationFuture::failed(ServiceError::Executor {
            message: "rejected".into(),
        });
        assert!(fut.await.is_err());
    }

    #[test]
    fn test_context_ids() {
        assert_ne!(AsyncCallerContext::new(), AsyncCallerContext::new());
        assert_eq!(AsyncCallerContext::with_uuid("abc").uuid(), "abc");
    }
}
