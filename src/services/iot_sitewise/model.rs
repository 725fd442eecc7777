//! Shapes shared by IoT SiteWise operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Document;

/// Error detail attached to a resource status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// `VALIDATION_ERROR` or `INTERNAL_FAILURE`.
    pub code: Option<String>,
    /// Error message.
    pub message: Option<String>,
}

/// Lifecycle state of an asset or asset model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    /// `CREATING`, `ACTIVE`, `UPDATING`, `DELETING` or `FAILED`.
    pub state: Option<String>,
    /// Failure detail.
    pub error: Option<ErrorDetails>,
}

/// Hierarchy defined on an asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHierarchy {
    /// Hierarchy id.
    pub id: Option<String>,
    /// Hierarchy name.
    pub name: Option<String>,
}

/// Property of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProperty {
    /// Property id.
    pub id: Option<String>,
    /// Property name.
    pub name: Option<String>,
    /// Data stream alias.
    pub alias: Option<String>,
    /// `STRING`, `INTEGER`, `DOUBLE`, `BOOLEAN` or `STRUCT`.
    pub data_type: Option<String>,
    /// Unit of measure.
    pub unit: Option<String>,
}

/// Summary entry of `ListAssets`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    /// Asset id.
    pub id: Option<String>,
    /// Asset ARN.
    pub arn: Option<String>,
    /// Asset name.
    pub name: Option<String>,
    /// Model the asset was created from.
    pub asset_model_id: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_update_date: Option<DateTime<Utc>>,
    /// Current status.
    pub status: Option<ResourceStatus>,
    /// Hierarchies of the asset.
    #[serde(default)]
    pub hierarchies: Vec<AssetHierarchy>,
}

/// Property definition of an asset model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetModelProperty {
    /// Property id, set by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Property name.
    pub name: String,
    /// Data type.
    pub data_type: String,
    /// Unit of measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Attribute, measurement, transform or metric definition.
    #[serde(rename = "type")]
    pub property_type: Document,
}

/// Hierarchy definition of an asset model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetModelHierarchy {
    /// Hierarchy id, set by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Hierarchy name.
    pub name: String,
    /// Model of the child assets.
    pub child_asset_model_id: String,
}

/// Timestamp with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInNanos {
    /// Whole seconds since the epoch.
    pub time_in_seconds: i64,
    /// Nanosecond offset.
    #[serde(default)]
    pub offset_in_nanos: i32,
}

impl TimeInNanos {
    /// Whole-second timestamp.
    pub fn from_seconds(time_in_seconds: i64) -> Self {
        Self {
            time_in_seconds,
            offset_in_nanos: 0,
        }
    }
}

/// Value of a property, exactly one member set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// String value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// Integer value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<i32>,
    /// Double value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    /// Boolean value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
}

impl Variant {
    /// A double value.
    pub fn double(value: f64) -> Self {
        Self {
            double_value: Some(value),
            ..Self::default()
        }
    }

    /// A string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// A timestamped property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPropertyValue {
    /// The value.
    pub value: Variant,
    /// When it was observed.
    pub timestamp: TimeInNanos,
    /// `GOOD`, `BAD` or `UNCERTAIN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// One entry of `BatchPutAssetPropertyValue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAssetPropertyValueEntry {
    /// Caller-chosen id, echoed in errors.
    pub entry_id: String,
    /// Asset id, with `property_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// Property id, with `asset_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    /// Data stream alias, instead of the ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_alias: Option<String>,
    /// Values to ingest.
    pub property_values: Vec<AssetPropertyValue>,
}

/// A rejected value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPutAssetPropertyError {
    /// Error code.
    pub error_code: Option<String>,
    /// Error message.
    pub error_message: Option<String>,
    /// Timestamps of the rejected values.
    #[serde(default)]
    pub timestamps: Vec<TimeInNanos>,
}

/// Errors of one batch entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPutAssetPropertyErrorEntry {
    /// Entry id from the request.
    pub entry_id: Option<String>,
    /// Errors of the entry.
    #[serde(default)]
    pub errors: Vec<BatchPutAssetPropertyError>,
}

/// Status of a portal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalStatus {
    /// `CREATING`, `UPDATING`, `DELETING`, `ACTIVE` or `FAILED`.
    pub state: Option<String>,
    /// Failure detail.
    pub error: Option<ErrorDetails>,
}
