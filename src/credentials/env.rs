//! Credentials from environment variables.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::env;

/// Access key id variable.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Secret access key variable.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Session token variable.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional
/// `AWS_SESSION_TOKEN`.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialProvider;

impl EnvironmentCredentialProvider {
    /// Create the provider.
    pub fn new() -> Self {
        Self
    }

    fn read(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<AwsCredentials, CredentialError> {
        let required = |name: &'static str| match lookup(name) {
            None => Err(CredentialError::EnvVarNotSet { name }),
            Some(value) if value.is_empty() => Err(CredentialError::EnvVarEmpty { name }),
            Some(value) => Ok(value),
        };

        let access_key_id = required(AWS_ACCESS_KEY_ID)?;
        let secret_access_key = required(AWS_SECRET_ACCESS_KEY)?;
        let credentials = AwsCredentials::new(access_key_id, secret_access_key);

        Ok(match lookup(AWS_SESSION_TOKEN).filter(|t| !t.is_empty()) {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }
}

#[async_trait]
impl CredentialProvider for EnvironmentCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        self.read(|name| env::var(name).ok())
    }
}
