//! Lookout for Metrics requests and outputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{
    Action, AnomalyDetectorConfig, AnomalyDetectorSummary, AnomalyGroupStatistics,
    AnomalyGroupSummary, Metric, MetricSource, TimestampColumn,
};
use crate::error::ServiceResult;
use crate::operation::{require, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::Tags;

/// `POST /{OperationName}`, the binding of every non-tag operation.
fn action_uri(name: &str) -> RequestUri {
    RequestUri::from_literal("/").literal(name)
}

/// Output of operations that return no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyOutput {}

/// Input for `CreateAnomalyDetector`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAnomalyDetectorRequest {
    /// Detector name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_description: Option<String>,
    /// Detection interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_config: Option<AnomalyDetectorConfig>,
    /// KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateAnomalyDetectorRequest {
    anomaly_detector_name: String,
    anomaly_detector_description: String,
    anomaly_detector_config: AnomalyDetectorConfig,
    kms_key_arn: String,
    tags: Tags,
});

/// Output of `CreateAnomalyDetector`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAnomalyDetectorOutput {
    /// Detector ARN.
    pub anomaly_detector_arn: Option<String>,
}

impl Operation for CreateAnomalyDetectorRequest {
    type Output = CreateAnomalyDetectorOutput;
    const NAME: &'static str = "CreateAnomalyDetector";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AnomalyDetectorName", &self.anomaly_detector_name)?;
        require(Self::NAME, "AnomalyDetectorConfig", &self.anomaly_detector_config)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

/// Input for `DescribeAnomalyDetector`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnomalyDetectorRequest {
    /// Detector ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_arn: Option<String>,
}

crate::request_setters!(DescribeAnomalyDetectorRequest {
    anomaly_detector_arn: String
});

/// Output of `DescribeAnomalyDetector`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnomalyDetectorOutput {
    /// Detector ARN.
    pub anomaly_detector_arn: Option<String>,
    /// Detector name.
    pub anomaly_detector_name: Option<String>,
    /// Description.
    pub anomaly_detector_description: Option<String>,
    /// Detection interval.
    pub anomaly_detector_config: Option<AnomalyDetectorConfig>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_modification_time: Option<DateTime<Utc>>,
    /// `ACTIVE`, `ACTIVATING`, `INACTIVE`, `FAILED`, and others.
    pub status: Option<String>,
    /// Failure reason.
    pub failure_reason: Option<String>,
    /// KMS key.
    pub kms_key_arn: Option<String>,
    /// Failure category.
    pub failure_type: Option<String>,
}

impl Operation for DescribeAnomalyDetectorRequest {
    type Output = DescribeAnomalyDetectorOutput;
    const NAME: &'static str = "DescribeAnomalyDetector";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AnomalyDetectorArn", &self.anomaly_detector_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

/// Input for `ListAnomalyDetectors`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAnomalyDetectorsRequest {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

crate::request_setters!(ListAnomalyDetectorsRequest {
    max_results: i32,
    next_token: String,
});

/// Output of `ListAnomalyDetectors`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAnomalyDetectorsOutput {
    /// Detectors on this page.
    #[serde(default)]
    pub anomaly_detector_summary_list: Vec<AnomalyDetectorSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListAnomalyDetectorsRequest {
    type Output = ListAnomalyDetectorsOutput;
    const NAME: &'static str = "ListAnomalyDetectors";

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

impl Paginated for ListAnomalyDetectorsRequest {
    fn next_token(output: &ListAnomalyDetectorsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

macro_rules! detector_action {
    ($(#[$meta:meta])* $req:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $req {
            /// Detector ARN.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub anomaly_detector_arn: Option<String>,
        }

        crate::request_setters!($req { anomaly_detector_arn: String });

        impl Operation for $req {
            type Output = EmptyOutput;
            const NAME: &'static str = $name;

            fn validate(&self) -> ServiceResult<()> {
                require(Self::NAME, "AnomalyDetectorArn", &self.anomaly_detector_arn)?;
                Ok(())
            }

            fn uri(&self) -> ServiceResult<RequestUri> {
                Ok(action_uri(Self::NAME))
            }
        }
    };
}

detector_action!(
    /// Input for `DeleteAnomalyDetector`.
    DeleteAnomalyDetectorRequest,
    "DeleteAnomalyDetector"
);
detector_action!(
    /// Input for `ActivateAnomalyDetector`.
    ActivateAnomalyDetectorRequest,
    "ActivateAnomalyDetector"
);
detector_action!(
    /// Input for `DeactivateAnomalyDetector`.
    DeactivateAnomalyDetectorRequest,
    "DeactivateAnomalyDetector"
);
detector_action!(
    /// Input for `BackTestAnomalyDetector`.
    BackTestAnomalyDetectorRequest,
    "BackTestAnomalyDetector"
);

/// Input for `CreateMetricSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMetricSetRequest {
    /// Owning detector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_arn: Option<String>,
    /// Metric set name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_set_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_set_description: Option<String>,
    /// Measures to watch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_list: Option<Vec<Metric>>,
    /// Seconds to wait after each interval before reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    /// Timestamp column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_column: Option<TimestampColumn>,
    /// Dimension columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_list: Option<Vec<String>>,
    /// Data interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_set_frequency: Option<String>,
    /// Data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_source: Option<MetricSource>,
    /// Time zone of the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateMetricSetRequest {
    anomaly_detector_arn: String,
    metric_set_name: String,
    metric_set_description: String,
    metric_list: Vec<Metric>,
    offset: i32,
    timestamp_column: TimestampColumn,
    dimension_list: Vec<String>,
    metric_set_frequency: String,
    metric_source: MetricSource,
    timezone: String,
    tags: Tags,
});

/// Output of `CreateMetricSet`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMetricSetOutput {
    /// Metric set ARN.
    pub metric_set_arn: Option<String>,
}

impl Operation for CreateMetricSetRequest {
    type Output = CreateMetricSetOutput;
    const NAME: &'static str = "CreateMetricSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AnomalyDetectorArn", &self.anomaly_detector_arn)?;
        require(Self::NAME, "MetricSetName", &self.metric_set_name)?;
        require(Self::NAME, "MetricList", &self.metric_list)?;
        require(Self::NAME, "MetricSource", &self.metric_source)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

/// Input for `DescribeMetricSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMetricSetRequest {
    /// Metric set ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_set_arn: Option<String>,
}

crate::request_setters!(DescribeMetricSetRequest { metric_set_arn: String });

/// Output of `DescribeMetricSet`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMetricSetOutput {
    /// Metric set ARN.
    pub metric_set_arn: Option<String>,
    /// Owning detector.
    pub anomaly_detector_arn: Option<String>,
    /// Metric set name.
    pub metric_set_name: Option<String>,
    /// Description.
    pub metric_set_description: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_modification_time: Option<DateTime<Utc>>,
    /// Read offset in seconds.
    pub offset: Option<i32>,
    /// Measures.
    #[serde(default)]
    pub metric_list: Vec<Metric>,
    /// Timestamp column.
    pub timestamp_column: Option<TimestampColumn>,
    /// Dimension columns.
    #[serde(default)]
    pub dimension_list: Vec<String>,
    /// Data interval.
    pub metric_set_frequency: Option<String>,
    /// Time zone.
    pub timezone: Option<String>,
    /// Data source.
    pub metric_source: Option<MetricSource>,
}

impl Operation for DescribeMetricSetRequest {
    type Output = DescribeMetricSetOutput;
    const NAME: &'static str = "DescribeMetricSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "MetricSetArn", &self.metric_set_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

/// Input for `CreateAlert`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAlertRequest {
    /// Alert name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_name: Option<String>,
    /// Minimum severity, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_sensitivity_threshold: Option<i32>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_description: Option<String>,
    /// Detector to alert on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_arn: Option<String>,
    /// What to do.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateAlertRequest {
    alert_name: String,
    alert_sensitivity_threshold: i32,
    alert_description: String,
    anomaly_detector_arn: String,
    action: Action,
    tags: Tags,
});

/// Output of `CreateAlert`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAlertOutput {
    /// Alert ARN.
    pub alert_arn: Option<String>,
}

impl Operation for CreateAlertRequest {
    type Output = CreateAlertOutput;
    const NAME: &'static str = "CreateAlert";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AlertName", &self.alert_name)?;
        require(Self::NAME, "AnomalyDetectorArn", &self.anomaly_detector_arn)?;
        require(Self::NAME, "Action", &self.action)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

/// Input for `ListAnomalyGroupSummaries`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAnomalyGroupSummariesRequest {
    /// Detector ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detector_arn: Option<String>,
    /// Minimum severity, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity_threshold: Option<i32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

crate::request_setters!(ListAnomalyGroupSummariesRequest {
    anomaly_detector_arn: String,
    sensitivity_threshold: i32,
    max_results: i32,
    next_token: String,
});

/// Output of `ListAnomalyGroupSummaries`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAnomalyGroupSummariesOutput {
    /// Groups on this page.
    #[serde(default)]
    pub anomaly_group_summary_list: Vec<AnomalyGroupSummary>,
    /// Aggregate statistics.
    pub anomaly_group_statistics: Option<AnomalyGroupStatistics>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListAnomalyGroupSummariesRequest {
    type Output = ListAnomalyGroupSummariesOutput;
    const NAME: &'static str = "ListAnomalyGroupSummaries";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AnomalyDetectorArn", &self.anomaly_detector_arn)?;
        require(Self::NAME, "SensitivityThreshold", &self.sensitivity_threshold)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(action_uri(Self::NAME))
    }
}

impl Paginated for ListAnomalyGroupSummariesRequest {
    fn next_token(output: &ListAnomalyGroupSummariesOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagResourceRequest {
    /// Resource ARN.
    #[serde(skip)]
    pub resource_arn: Option<String>,
    /// Tags to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(TagResourceRequest {
    resource_arn: String,
    tags: Tags,
});

impl Operation for TagResourceRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "TagResource";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceArn", &self.resource_arn)?;
        require(Self::NAME, "Tags", &self.tags)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/tags/").param(&self.resource_arn))
    }
}

/// Input for `UntagResource`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UntagResourceRequest {
    /// Resource ARN.
    #[serde(skip)]
    pub resource_arn: Option<String>,
    /// Keys to remove.
    #[serde(skip)]
    pub tag_keys: Option<Vec<String>>,
}

crate::request_setters!(UntagResourceRequest {
    resource_arn: String,
    tag_keys: Vec<String>,
});

impl Operation for UntagResourceRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "UntagResource";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceArn", &self.resource_arn)?;
        require(Self::NAME, "TagKeys", &self.tag_keys)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/tags/")
            .param(&self.resource_arn)
            .query_list("tagKeys", &self.tag_keys))
    }
}

/// Input for `ListTagsForResource`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTagsForResourceRequest {
    /// Resource ARN.
    #[serde(skip)]
    pub resource_arn: Option<String>,
}

crate::request_setters!(ListTagsForResourceRequest { resource_arn: String });

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    /// Resource tags.
    pub tags: Option<Tags>,
}

impl Operation for ListTagsForResourceRequest {
    type Output = ListTagsForResourceOutput;
    const NAME: &'static str = "ListTagsForResource";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceArn", &self.resource_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/tags/").param(&self.resource_arn))
    }
}
