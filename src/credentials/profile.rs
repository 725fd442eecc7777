//! Credentials from the AWS shared credentials file.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::{env, fs};

/// Profile used when neither the constructor nor `AWS_PROFILE` names one.
pub const DEFAULT_PROFILE: &str = "default";

/// Profile name environment variable.
pub const AWS_PROFILE: &str = "AWS_PROFILE";

/// Credentials file location override.
pub const AWS_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Reads `aws_access_key_id`, `aws_secret_access_key` and
/// `aws_session_token` from an INI-style credentials file.
///
/// The file is `~/.aws/credentials` unless `AWS_SHARED_CREDENTIALS_FILE` or
/// [`with_credentials_path`](Self::with_credentials_path) says otherwise.
#[derive(Debug, Clone)]
pub struct ProfileCredentialProvider {
    profile_name: String,
    credentials_path: Option<PathBuf>,
}

impl ProfileCredentialProvider {
    /// Use `AWS_PROFILE`, or the `default` profile.
    pub fn new() -> Self {
        Self::with_profile(env::var(AWS_PROFILE).unwrap_or_else(|_| DEFAULT_PROFILE.to_string()))
    }

    /// Use a specific profile.
    pub fn with_profile(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            credentials_path: None,
        }
    }

    /// Read from a specific file.
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// The profile this provider reads.
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    fn credentials_file_path(&self) -> Result<PathBuf, CredentialError> {
        if let Some(path) = &self.credentials_path {
            return Ok(path.clone());
        }
        if let Ok(path) = env::var(AWS_SHARED_CREDENTIALS_FILE) {
            return Ok(PathBuf::from(path));
        }
        dirs::home_dir()
            .map(|home| home.join(".aws").join("credentials"))
            .ok_or(CredentialError::NoHomeDirectory)
    }
}

impl Default for ProfileCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse INI content into `profile -> key -> value`.
///
/// `[profile name]` headers (config-file style) are accepted as well.
pub(crate) fn parse_profile_file(content: &str) -> HashMap<String, HashMap<String, String>> {
    let mut profiles: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = header.trim();
            let name = name.strip_prefix("profile ").unwrap_or(name).trim();
            profiles.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        if let (Some(profile), Some((key, value))) = (&current, line.split_once('=')) {
            profiles
                .entry(profile.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    profiles
}

#[async_trait]
impl CredentialProvider for ProfileCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        let path = self.credentials_file_path()?;
        let content = fs::read_to_string(&path).map_err(|e| CredentialError::CredentialsFile {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let profiles = parse_profile_file(&content);
        let profile = profiles
            .get(&self.profile_name)
            .ok_or_else(|| CredentialError::ProfileNotFound {
                profile: self.profile_name.clone(),
                path: path.clone(),
            })?;

        let field = |key: &'static str| {
            profile
                .get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .ok_or_else(|| CredentialError::ProfileKeyMissing {
                    profile: self.profile_name.clone(),
                    key,
                })
        };

        let credentials =
            AwsCredentials::new(field("aws_access_key_id")?, field("aws_secret_access_key")?);

        Ok(match profile.get("aws_session_token").filter(|t| !t.is_empty()) {
            Some(token) => credentials.with_session_token(token.clone()),
            None => credentials,
        })
    }
}
