//! Shapes shared by FinSpaceData operations.
//!
//! Timestamps in this API are epoch milliseconds and are kept as `i64`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Contact details of a dataset owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOwnerInfo {
    /// Owner name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Owner email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A dataset permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePermission {
    /// Permission name, e.g. `ViewDatasetDetails`.
    pub permission: String,
}

/// Permission group granted access to a new dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGroupParams {
    /// Permission group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_group_id: Option<String>,
    /// Permissions granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_permissions: Option<Vec<ResourcePermission>>,
}

/// Column of a tabular dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Column type, e.g. `STRING` or `DOUBLE`.
    pub data_type: Option<String>,
    /// Column name.
    pub column_name: Option<String>,
    /// Column description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_description: Option<String>,
}

/// Tabular schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    /// Columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDefinition>>,
    /// Primary key column names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key_columns: Option<Vec<String>>,
}

/// Dataset schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaUnion {
    /// Tabular schema configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabular_schema_config: Option<SchemaDefinition>,
}

/// Dataset description as returned by list calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset id.
    pub dataset_id: Option<String>,
    /// Dataset ARN.
    pub dataset_arn: Option<String>,
    /// Display title.
    pub dataset_title: Option<String>,
    /// `PARTITIONED` or `NON_PARTITIONED`.
    pub kind: Option<String>,
    /// Description.
    pub dataset_description: Option<String>,
    /// Owner contact details.
    pub owner_info: Option<DatasetOwnerInfo>,
    /// Creation time, epoch milliseconds.
    pub create_time: Option<i64>,
    /// Last modification time, epoch milliseconds.
    pub last_modified_time: Option<i64>,
    /// Schema.
    pub schema_definition: Option<SchemaUnion>,
    /// Unique alias.
    pub alias: Option<String>,
}

/// Error details of a failed changeset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesetErrorInfo {
    /// Error message.
    pub error_message: Option<String>,
    /// Error category, e.g. `VALIDATION`.
    pub error_category: Option<String>,
}

/// Changeset description as returned by list calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesetSummary {
    /// Changeset id.
    pub changeset_id: Option<String>,
    /// Changeset ARN.
    pub changeset_arn: Option<String>,
    /// Dataset id.
    pub dataset_id: Option<String>,
    /// `REPLACE`, `APPEND` or `MODIFY`.
    pub change_type: Option<String>,
    /// Source parameters.
    pub source_params: Option<HashMap<String, String>>,
    /// Format parameters.
    pub format_params: Option<HashMap<String, String>>,
    /// Creation time, epoch milliseconds.
    pub create_time: Option<i64>,
    /// Ingestion status.
    pub status: Option<String>,
    /// Failure details.
    pub error_info: Option<ChangesetErrorInfo>,
    /// End of the active window, epoch milliseconds.
    pub active_until_timestamp: Option<i64>,
    /// Start of the active window, epoch milliseconds.
    pub active_from_timestamp: Option<i64>,
    /// Changeset this one replaces.
    pub updates_changeset_id: Option<String>,
    /// Changeset that replaced this one.
    pub updated_by_changeset_id: Option<String>,
}

/// Temporary credentials for programmatic access.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Access key id.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
    /// Session token.
    pub session_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "[REDACTED]"))
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A FinSpace user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User id.
    pub user_id: Option<String>,
    /// `CREATING`, `ENABLED` or `DISABLED`.
    pub status: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email_address: Option<String>,
    /// `SUPER_USER` or `APP_USER`.
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    /// `ENABLED` or `DISABLED`.
    pub api_access: Option<String>,
    /// IAM principal allowed to assume programmatic access.
    pub api_access_principal_arn: Option<String>,
    /// Creation time, epoch milliseconds.
    pub create_time: Option<i64>,
    /// Last enable time, epoch milliseconds.
    pub last_enabled_time: Option<i64>,
    /// Last disable time, epoch milliseconds.
    pub last_disabled_time: Option<i64>,
    /// Last modification time, epoch milliseconds.
    pub last_modified_time: Option<i64>,
    /// Last login time, epoch milliseconds.
    pub last_login_time: Option<i64>,
}
