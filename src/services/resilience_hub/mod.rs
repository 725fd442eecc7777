//! AWS Resilience Hub.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for Resilience Hub.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "resiliencehub",
    endpoint_prefix: "resiliencehub",
    signing_name: "resiliencehub",
    api_version: "2020-04-30",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for AWS Resilience Hub.
    pub struct ResilienceHubClient;
    metadata = METADATA;
    operations {
        /// Register an application.
        create_app, create_app_callable, create_app_async => CreateAppRequest;
        /// Describe an application.
        describe_app, describe_app_callable, describe_app_async => DescribeAppRequest;
        /// List applications.
        list_apps, list_apps_callable, list_apps_async => ListAppsRequest;
        /// Delete an application.
        delete_app, delete_app_callable, delete_app_async => DeleteAppRequest;
        /// Create a resiliency policy.
        create_resiliency_policy, create_resiliency_policy_callable, create_resiliency_policy_async => CreateResiliencyPolicyRequest;
        /// Describe a resiliency policy.
        describe_resiliency_policy, describe_resiliency_policy_callable, describe_resiliency_policy_async => DescribeResiliencyPolicyRequest;
        /// Start assessing an application version.
        start_app_assessment, start_app_assessment_callable, start_app_assessment_async => StartAppAssessmentRequest;
        /// Describe an assessment.
        describe_app_assessment, describe_app_assessment_callable, describe_app_assessment_async => DescribeAppAssessmentRequest;
        /// List assessments.
        list_app_assessments, list_app_assessments_callable, list_app_assessments_async => ListAppAssessmentsRequest;
        /// Publish the draft version of an application.
        publish_app_version, publish_app_version_callable, publish_app_version_async => PublishAppVersionRequest;
        /// Import resources into the draft version.
        import_resources_to_draft_app_version, import_resources_to_draft_app_version_callable, import_resources_to_draft_app_version_async => ImportResourcesToDraftAppVersionRequest;
        /// Tag a resource.
        tag_resource, tag_resource_callable, tag_resource_async => TagResourceRequest;
        /// List the tags of a resource.
        list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async => ListTagsForResourceRequest;
    }
}
