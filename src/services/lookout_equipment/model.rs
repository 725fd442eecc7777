//! Shapes shared by Lookout for Equipment operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A key/value tag. Lookout for Equipment sends tags as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// New tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Dataset schema as an inline JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetSchema {
    /// Schema document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data_schema: Option<String>,
}

/// S3 location of ingestion input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngestionS3InputConfiguration {
    /// Bucket name.
    pub bucket: String,
    /// Key prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Pattern of the object keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pattern: Option<String>,
}

/// Where ingestion reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngestionInputConfiguration {
    /// S3 input.
    pub s3_input_configuration: IngestionS3InputConfiguration,
}

/// Resampling applied before training.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataPreProcessingConfiguration {
    /// e.g. `PT5M`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sampling_rate: Option<String>,
}

/// S3 location of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelsS3InputConfiguration {
    /// Bucket name.
    pub bucket: String,
    /// Key prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Where labels are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelsInputConfiguration {
    /// S3 labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_input_configuration: Option<LabelsS3InputConfiguration>,
    /// Label group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_group_name: Option<String>,
}

/// An S3 bucket and prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Location {
    /// Bucket name.
    pub bucket: String,
    /// Key prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// How inference input files are named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InferenceInputNameConfiguration {
    /// Timestamp format in the file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
    /// Delimiter between component and timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_timestamp_delimiter: Option<String>,
}

/// Where an inference scheduler reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InferenceInputConfiguration {
    /// S3 input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_input_configuration: Option<S3Location>,
    /// Offset of the input time zone, e.g. `+04:00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_time_zone_offset: Option<String>,
    /// File naming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_input_name_configuration: Option<InferenceInputNameConfiguration>,
}

/// Where an inference scheduler writes to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InferenceOutputConfiguration {
    /// S3 output.
    pub s3_output_configuration: S3Location,
    /// KMS key for the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

/// Summary entry of `ListDatasets`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetSummary {
    /// Dataset name.
    pub dataset_name: Option<String>,
    /// Dataset ARN.
    pub dataset_arn: Option<String>,
    /// `CREATED`, `INGESTION_IN_PROGRESS` or `ACTIVE`.
    pub status: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Summary entry of `ListModels`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelSummary {
    /// Model name.
    pub model_name: Option<String>,
    /// Model ARN.
    pub model_arn: Option<String>,
    /// Dataset the model trained on.
    pub dataset_name: Option<String>,
    /// Dataset ARN.
    pub dataset_arn: Option<String>,
    /// `IN_PROGRESS`, `SUCCESS` or `FAILED`.
    pub status: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub created_at: Option<DateTime<Utc>>,
}
