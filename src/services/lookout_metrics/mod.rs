//! Amazon Lookout for Metrics.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for Lookout for Metrics.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "LookoutMetrics",
    endpoint_prefix: "lookoutmetrics",
    signing_name: "lookoutmetrics",
    api_version: "2017-07-25",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for Amazon Lookout for Metrics.
    pub struct LookoutMetricsClient;
    metadata = METADATA;
    operations {
        /// Create an anomaly detector.
        create_anomaly_detector, create_anomaly_detector_callable, create_anomaly_detector_async => CreateAnomalyDetectorRequest;
        /// Describe an anomaly detector.
        describe_anomaly_detector, describe_anomaly_detector_callable, describe_anomaly_detector_async => DescribeAnomalyDetectorRequest;
        /// List anomaly detectors.
        list_anomaly_detectors, list_anomaly_detectors_callable, list_anomaly_detectors_async => ListAnomalyDetectorsRequest;
        /// Delete an anomaly detector.
        delete_anomaly_detector, delete_anomaly_detector_callable, delete_anomaly_detector_async => DeleteAnomalyDetectorRequest;
        /// Activate a detector.
        activate_anomaly_detector, activate_anomaly_detector_callable, activate_anomaly_detector_async => ActivateAnomalyDetectorRequest;
        /// Deactivate a detector.
        deactivate_anomaly_detector, deactivate_anomaly_detector_callable, deactivate_anomaly_detector_async => DeactivateAnomalyDetectorRequest;
        /// Run a detector against historical data.
        back_test_anomaly_detector, back_test_anomaly_detector_callable, back_test_anomaly_detector_async => BackTestAnomalyDetectorRequest;
        /// Create a metric set.
        create_metric_set, create_metric_set_callable, create_metric_set_async => CreateMetricSetRequest;
        /// Describe a metric set.
        describe_metric_set, describe_metric_set_callable, describe_metric_set_async => DescribeMetricSetRequest;
        /// Create an alert.
        create_alert, create_alert_callable, create_alert_async => CreateAlertRequest;
        /// List anomaly groups.
        list_anomaly_group_summaries, list_anomaly_group_summaries_callable, list_anomaly_group_summaries_async => ListAnomalyGroupSummariesRequest;
        /// Tag a resource.
        tag_resource, tag_resource_callable, tag_resource_async => TagResourceRequest;
        /// Untag a resource.
        untag_resource, untag_resource_callable, untag_resource_async => UntagResourceRequest;
        /// List the tags of a resource.
        list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async => ListTagsForResourceRequest;
    }
}
