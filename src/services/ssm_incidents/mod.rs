//! AWS Systems Manager Incident Manager.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for Incident Manager.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "SSM Incidents",
    endpoint_prefix: "ssm-incidents",
    signing_name: "ssm-incidents",
    api_version: "2018-05-10",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for Incident Manager.
    pub struct SsmIncidentsClient;
    metadata = METADATA;
    operations {
        /// Create the replication set.
        create_replication_set, create_replication_set_callable, create_replication_set_async => CreateReplicationSetRequest;
        /// Describe the replication set.
        get_replication_set, get_replication_set_callable, get_replication_set_async => GetReplicationSetRequest;
        /// Create a response plan.
        create_response_plan, create_response_plan_callable, create_response_plan_async => CreateResponsePlanRequest;
        /// Describe a response plan.
        get_response_plan, get_response_plan_callable, get_response_plan_async => GetResponsePlanRequest;
        /// List response plans.
        list_response_plans, list_response_plans_callable, list_response_plans_async => ListResponsePlansRequest;
        /// Delete a response plan.
        delete_response_plan, delete_response_plan_callable, delete_response_plan_async => DeleteResponsePlanRequest;
        /// Start an incident from a response plan.
        start_incident, start_incident_callable, start_incident_async => StartIncidentRequest;
        /// Describe an incident record.
        get_incident_record, get_incident_record_callable, get_incident_record_async => GetIncidentRecordRequest;
        /// Update an incident record.
        update_incident_record, update_incident_record_callable, update_incident_record_async => UpdateIncidentRecordRequest;
        /// List incident records.
        list_incident_records, list_incident_records_callable, list_incident_records_async => ListIncidentRecordsRequest;
        /// Add a custom timeline event.
        create_timeline_event, create_timeline_event_callable, create_timeline_event_async => CreateTimelineEventRequest;
        /// List the timeline of an incident.
        list_timeline_events, list_timeline_events_callable, list_timeline_events_async => ListTimelineEventsRequest;
        /// Tag a resource.
        tag_resource, tag_resource_callable, tag_resource_async => TagResourceRequest;
        /// Untag a resource.
        untag_resource, untag_resource_callable, untag_resource_async => UntagResourceRequest;
        /// List the tags of a resource.
        list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async => ListTagsForResourceRequest;
    }
}
