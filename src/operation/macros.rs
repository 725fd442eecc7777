//! Declarative generators for service clients and request setters.

/// Fluent setters for optional request members.
///
/// Each listed field gets a method of the same name that wraps the value
/// in `Some`.
#[macro_export]
macro_rules! request_setters {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Set `", stringify!($field), "`.")]
                pub fn $field(mut self, value: impl Into<$fty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// Generate a service client over [`ServiceClient`](crate::client::ServiceClient).
///
/// Every operation yields three methods: the awaited call, a `_callable`
/// variant returning an [`OperationFuture`](crate::executor::OperationFuture),
/// and an `_async` variant that hands the outcome to a callback.
#[macro_export]
macro_rules! define_client {
    (
        $(#[$client_meta:meta])*
        pub struct $client:ident;
        metadata = $metadata:path;
        operations {
            $(
                $(#[$op_meta:meta])*
                $op:ident, $callable:ident, $async_fn:ident => $req:ty;
            )*
        }
    ) => {
        $(#[$client_meta])*
        #[derive(Clone, Debug)]
        pub struct $client {
            inner: $crate::client::ServiceClient,
        }

        impl $crate::client::FromServiceClient for $client {
            fn metadata() -> &'static $crate::client::ServiceMetadata {
                &$metadata
            }

            fn from_service_client(inner: $crate::client::ServiceClient) -> Self {
                Self { inner }
            }
        }

        impl $client {
            /// Create a client with the default transport, endpoint provider
            /// and executor.
            pub fn new(config: $crate::config::ClientConfig) -> $crate::error::ServiceResult<Self> {
                Self::builder(config).build()
            }

            /// Create a client configured from the environment.
            pub fn from_env() -> $crate::error::ServiceResult<Self> {
                Self::new($crate::config::ClientConfig::from_env()?)
            }

            /// Builder for injecting a transport, endpoint provider or executor.
            pub fn builder(
                config: $crate::config::ClientConfig,
            ) -> $crate::client::ClientBuilder<Self> {
                $crate::client::ClientBuilder::new(config)
            }

            /// The shared client this service client wraps.
            pub fn service_client(&self) -> &$crate::client::ServiceClient {
                &self.inner
            }

            $(
                $(#[$op_meta])*
                pub async fn $op(
                    &self,
                    request: $req,
                ) -> $crate::error::ServiceResult<<$req as $crate::operation::Operation>::Output> {
                    self.inner.execute(&request).await
                }

                #[doc = concat!(
                    "Submit `", stringify!($op), "` to the executor and return a future of the outcome."
                )]
                pub fn $callable(
                    &self,
                    request: $req,
                ) -> $crate::executor::OperationFuture<<$req as $crate::operation::Operation>::Output> {
                    self.inner.execute_callable(request)
                }

                #[doc = concat!(
                    "Submit `", stringify!($op), "` to the executor and pass the outcome to `handler`."
                )]
                pub fn $async_fn<H>(
                    &self,
                    request: $req,
                    handler: H,
                    context: Option<$crate::executor::AsyncCallerContext>,
                ) -> $crate::error::ServiceResult<()>
                where
                    H: FnOnce(
                            &Self,
                            &$req,
                            $crate::error::ServiceResult<<$req as $crate::operation::Operation>::Output>,
                            $crate::executor::AsyncCallerContext,
                        ) + Send
                        + 'static,
                {
                    let client = self.clone();
                    self.inner.execute_with_handler(
                        request,
                        move |request, outcome, context| handler(&client, request, outcome, context),
                        context,
                    )
                }
            )*
        }
    };
}
