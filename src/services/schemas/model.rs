//! Shapes shared by EventBridge Schemas operations.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::Tags;

/// Summary entry of `ListRegistries`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrySummary {
    /// Registry ARN.
    pub registry_arn: Option<String>,
    /// Registry name.
    pub registry_name: Option<String>,
    /// Tags.
    pub tags: Option<Tags>,
}

/// Summary entry of `ListSchemas`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaSummary {
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
    /// Schema ARN.
    pub schema_arn: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Tags.
    pub tags: Option<Tags>,
    /// Number of versions.
    pub version_count: Option<i64>,
}

/// A version listed by `SearchSchemas`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchSchemaVersionSummary {
    /// Creation time of the version.
    pub created_date: Option<DateTime<Utc>>,
    /// Version.
    pub schema_version: Option<String>,
    /// `OpenApi3` or `JSONSchemaDraft4`.
    #[serde(rename = "Type")]
    pub schema_type: Option<String>,
}

/// Summary entry of `SearchSchemas`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchSchemaSummary {
    /// Registry name.
    pub registry_name: Option<String>,
    /// Schema ARN.
    pub schema_arn: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Matching versions.
    #[serde(default)]
    pub schema_versions: Vec<SearchSchemaVersionSummary>,
}
