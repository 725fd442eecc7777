//! Credential provider chain.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Tries each provider in order and returns the first success.
///
/// If every provider fails, the last error is returned.
#[derive(Clone, Default)]
pub struct ChainCredentialProvider {
    providers: Vec<Arc<dyn CredentialProvider>>,
}

impl ChainCredentialProvider {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider.
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: CredentialProvider + 'static,
    {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Append a shared provider.
    pub fn with_arc_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for ChainCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        let mut last_error = CredentialError::NoProviders;

        for provider in &self.providers {
            match provider.credentials().await {
                Ok(credentials) => return Ok(credentials),
                Err(e) => {
                    tracing::debug!(error = %e, "credential provider failed, trying next");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

impl fmt::Debug for ChainCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCredentialProvider")
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentialProvider;

    struct Failing;

    #[async_trait]
    impl CredentialProvider for Failing {
        async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
            Err(CredentialError::EnvVarNotSet {
                name: "AWS_ACCESS_KEY_ID",
            })
        }
    }

    #[tokio::test]
    async fn test_empty_chain_fails() {
        let chain = ChainCredentialProvider::new();
        assert!(chain.is_empty());
        assert!(matches!(
            chain.credentials().await,
            Err(CredentialError::NoProviders)
        ));
    }

    #[tokio::test]
    async fn test_falls_through_to_next_provider() {
        let chain = ChainCredentialProvider::new()
            .with_provider(Failing)
            .with_provider(StaticCredentialProvider::new(AwsCredentials::new(
                "AKID", "SECRET",
            )));
        assert_eq!(chain.len(), 2);
        let creds = chain.credentials().await.unwrap();
        assert_eq!(creds.access_key_id(), "AKID");
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let chain = ChainCredentialProvider::new()
            .with_provider(StaticCredentialProvider::new(AwsCredentials::new("FIRST", "S")))
            .with_provider(StaticCredentialProvider::new(AwsCredentials::new("SECOND", "S")));
        assert_eq!(chain.credentials().await.unwrap().access_key_id(), "FIRST");
    }

    #[tokio::test]
    async fn test_last_error_returned() {
        let chain = ChainCredentialProvider::new().with_provider(Failing);
        let err = chain.credentials().await.unwrap_err();
        assert_eq!(err.to_string(), "AWS_ACCESS_KEY_ID is not set");
    }
}
