//! Fixed credentials.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;

/// Provider that always returns the same credentials.
#[derive(Clone, Debug)]
pub struct StaticCredentialProvider {
    credentials: AwsCredentials,
}

impl StaticCredentialProvider {
    /// Wrap `credentials` in a provider.
    pub fn new(credentials: AwsCredentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        if self.credentials.is_expired() {
            return Err(CredentialError::Expired {
                access_key_id: self.credentials.access_key_id().to_string(),
            });
        }
        Ok(self.credentials.clone())
    }
}
