//! Shapes shared by Lookout for Metrics operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Document;

/// Detection interval of a detector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnomalyDetectorConfig {
    /// `P1D`, `PT1H`, `PT10M` or `PT5M`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_frequency: Option<String>,
}

impl AnomalyDetectorConfig {
    /// Detector running at `frequency`.
    pub fn with_frequency(frequency: impl Into<String>) -> Self {
        Self {
            anomaly_detector_frequency: Some(frequency.into()),
        }
    }
}

/// A measure to watch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    /// Column or metric name.
    pub metric_name: String,
    /// `AVG` or `SUM`.
    pub aggregation_function: String,
    /// CloudWatch namespace, for CloudWatch sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Timestamp column of the source data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimestampColumn {
    /// Column name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// Column format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_format: Option<String>,
}

/// S3 source of metric data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3SourceConfig {
    /// Role with read access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Path templates of continuous data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated_path_list: Option<Vec<String>>,
    /// Paths of historical data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_data_path_list: Option<Vec<String>>,
    /// CSV or JSON format descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format_descriptor: Option<Document>,
}

/// CloudWatch source of metric data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudWatchConfig {
    /// Role with read access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

/// Where a metric set reads its data. Set exactly one member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricSource {
    /// S3 source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_source_config: Option<S3SourceConfig>,
    /// CloudWatch source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_config: Option<CloudWatchConfig>,
    /// AppFlow source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_flow_config: Option<Document>,
    /// RDS source.
    #[serde(rename = "RDSSourceConfig", skip_serializing_if = "Option::is_none")]
    pub rds_source_config: Option<Document>,
    /// Redshift source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redshift_source_config: Option<Document>,
    /// Athena source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athena_source_config: Option<Document>,
}

/// SNS target of an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsConfiguration {
    /// Role allowed to publish.
    pub role_arn: String,
    /// Topic ARN.
    pub sns_topic_arn: String,
    /// `LONG_TEXT`, `SHORT_TEXT` or `JSON`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_format: Option<String>,
}

/// Lambda target of an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaConfiguration {
    /// Role allowed to invoke.
    pub role_arn: String,
    /// Function ARN.
    pub lambda_arn: String,
}

/// What an alert does. Set exactly one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Action {
    /// Publish to SNS.
    #[serde(rename = "SNSConfiguration", skip_serializing_if = "Option::is_none")]
    pub sns_configuration: Option<SnsConfiguration>,
    /// Invoke a Lambda function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_configuration: Option<LambdaConfiguration>,
}

/// Summary entry of `ListAnomalyDetectors`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnomalyDetectorSummary {
    /// Detector ARN.
    pub anomaly_detector_arn: Option<String>,
    /// Detector name.
    pub anomaly_detector_name: Option<String>,
    /// Description.
    pub anomaly_detector_description: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_modification_time: Option<DateTime<Utc>>,
    /// Detector status.
    pub status: Option<String>,
}

/// Summary entry of `ListAnomalyGroupSummaries`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnomalyGroupSummary {
    /// Start of the anomaly.
    pub start_time: Option<String>,
    /// End of the anomaly.
    pub end_time: Option<String>,
    /// Group id.
    pub anomaly_group_id: Option<String>,
    /// Severity score.
    pub anomaly_group_score: Option<f64>,
    /// Metric with the highest contribution.
    pub primary_metric_name: Option<String>,
}

/// Anomaly counts per metric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemizedMetricStats {
    /// Metric name.
    pub metric_name: Option<String>,
    /// Number of anomalies.
    pub occurrence_count: Option<i32>,
}

/// Aggregate statistics of the anomaly groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnomalyGroupStatistics {
    /// Start of the evaluation window.
    pub evaluation_start_date: Option<String>,
    /// Number of groups.
    pub total_count: Option<i32>,
    /// Per-metric counts.
    #[serde(default)]
    pub itemized_metric_stats_list: Vec<ItemizedMetricStats>,
}
