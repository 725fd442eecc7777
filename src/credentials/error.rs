//! Credential resolution failures.

use std::path::PathBuf;
use thiserror::Error;

/// Why a provider could not produce credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// An environment variable the provider reads is unset.
    #[error("{name} is not set")]
    EnvVarNotSet {
        /// Variable name.
        name: &'static str,
    },

    /// An environment variable the provider reads is set but empty.
    #[error("{name} is set but empty")]
    EnvVarEmpty {
        /// Variable name.
        name: &'static str,
    },

    /// Static credentials past their expiration.
    #[error("Credentials for access key {access_key_id} have expired")]
    Expired {
        /// Access key of the expired credentials.
        access_key_id: String,
    },

    /// No home directory to locate `~/.aws/credentials` in.
    #[error("Home directory could not be determined")]
    NoHomeDirectory,

    /// The shared credentials file could not be read.
    #[error("Could not read {}: {message}", .path.display())]
    CredentialsFile {
        /// File that was read.
        path: PathBuf,
        /// I/O failure.
        message: String,
    },

    /// The requested profile is not in the credentials file.
    #[error("Profile '{profile}' not found in {}", .path.display())]
    ProfileNotFound {
        /// Profile name.
        profile: String,
        /// File that was searched.
        path: PathBuf,
    },

    /// The profile lacks a key, or has it empty.
    #[error("Profile '{profile}' has no {key}")]
    ProfileKeyMissing {
        /// Profile name.
        profile: String,
        /// Missing key, e.g. `aws_secret_access_key`.
        key: &'static str,
    },

    /// A chain was asked for credentials with no providers in it.
    #[error("No credential providers configured")]
    NoProviders,
}
