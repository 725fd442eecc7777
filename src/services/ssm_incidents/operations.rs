//! Incident Manager requests and outputs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{
    EventSummary, Filter, IncidentRecord, IncidentRecordSummary, IncidentTemplate,
    NotificationTargetItem, RegionMapInputValue, ReplicationSet, ResponsePlanSummary,
    TriggerDetails,
};
use crate::error::ServiceResult;
use crate::operation::{require, serialize_token, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::{Document, Tags};

/// Output of operations that return no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyOutput {}

/// Output carrying the ARN of a created resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArnOutput {
    /// Resource ARN.
    pub arn: Option<String>,
}

/// Input for `CreateReplicationSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplicationSetRequest {
    /// Regions to replicate to, by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<HashMap<String, RegionMapInputValue>>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateReplicationSetRequest {
    regions: HashMap<String, RegionMapInputValue>,
    client_token: String,
    tags: Tags,
});

impl Operation for CreateReplicationSetRequest {
    type Output = ArnOutput;
    const NAME: &'static str = "CreateReplicationSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Regions", &self.regions)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/createReplicationSet"))
    }
}

/// Input for `GetReplicationSet`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetReplicationSetRequest {
    /// Replication set ARN.
    #[serde(skip)]
    pub arn: Option<String>,
}

crate::request_setters!(GetReplicationSetRequest { arn: String });

/// Output of `GetReplicationSet`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetReplicationSetOutput {
    /// The replication set.
    pub replication_set: Option<ReplicationSet>,
}

impl Operation for GetReplicationSetRequest {
    type Output = GetReplicationSetOutput;
    const NAME: &'static str = "GetReplicationSet";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/getReplicationSet").query_opt("arn", &self.arn))
    }
}

/// Input for `CreateResponsePlan`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponsePlanRequest {
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Plan name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Incident defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_template: Option<IncidentTemplate>,
    /// Chat channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_channel: Option<Document>,
    /// Contacts to engage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagements: Option<Vec<String>>,
    /// Runbooks to start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Document>>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Third-party integrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Vec<Document>>,
}

crate::request_setters!(CreateResponsePlanRequest {
    client_token: String,
    name: String,
    display_name: String,
    incident_template: IncidentTemplate,
    chat_channel: Document,
    engagements: Vec<String>,
    actions: Vec<Document>,
    tags: Tags,
    integrations: Vec<Document>,
});

impl Operation for CreateResponsePlanRequest {
    type Output = ArnOutput;
    const NAME: &'static str = "CreateResponsePlan";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "IncidentTemplate", &self.incident_template)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/createResponsePlan"))
    }
}

/// Input for `GetResponsePlan`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponsePlanRequest {
    /// Plan ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

crate::request_setters!(GetResponsePlanRequest { arn: String });

/// Output of `GetResponsePlan`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponsePlanOutput {
    /// Plan ARN.
    pub arn: Option<String>,
    /// Plan name.
    pub name: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Incident defaults.
    pub incident_template: Option<IncidentTemplate>,
    /// Chat channel.
    pub chat_channel: Option<Document>,
    /// Contacts.
    #[serde(default)]
    pub engagements: Vec<String>,
    /// Runbooks.
    #[serde(default)]
    pub actions: Vec<Document>,
    /// Integrations.
    #[serde(default)]
    pub integrations: Vec<Document>,
}

impl Operation for GetResponsePlanRequest {
    type Output = GetResponsePlanOutput;
    const NAME: &'static str = "GetResponsePlan";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/getResponsePlan"))
    }
}

/// Input for `ListResponsePlans`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponsePlansRequest {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

crate::request_setters!(ListResponsePlansRequest {
    max_results: i32,
    next_token: String,
});

/// Output of `ListResponsePlans`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponsePlansOutput {
    /// Plans on this page.
    #[serde(default)]
    pub response_plan_summaries: Vec<ResponsePlanSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListResponsePlansRequest {
    type Output = ListResponsePlansOutput;
    const NAME: &'static str = "ListResponsePlans";

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/listResponsePlans"))
    }
}

impl Paginated for ListResponsePlansRequest {
    fn next_token(output: &ListResponsePlansOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `DeleteResponsePlan`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponsePlanRequest {
    /// Plan ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

crate::request_setters!(DeleteResponsePlanRequest { arn: String });

impl Operation for DeleteResponsePlanRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteResponsePlan";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/deleteResponsePlan"))
    }
}

/// Input for `StartIncident`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartIncidentRequest {
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Plan to start the incident from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_plan_arn: Option<String>,
    /// Overrides the template title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Overrides the template impact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<i32>,
    /// What started the incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_details: Option<TriggerDetails>,
    /// Related resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_items: Option<Vec<Document>>,
}

crate::request_setters!(StartIncidentRequest {
    client_token: String,
    response_plan_arn: String,
    title: String,
    impact: i32,
    trigger_details: TriggerDetails,
    related_items: Vec<Document>,
});

/// Output of `StartIncident`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartIncidentOutput {
    /// New incident record.
    pub incident_record_arn: Option<String>,
}

impl Operation for StartIncidentRequest {
    type Output = StartIncidentOutput;
    const NAME: &'static str = "StartIncident";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResponsePlanArn", &self.response_plan_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/startIncident"))
    }
}

/// Input for `GetIncidentRecord`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetIncidentRecordRequest {
    /// Record ARN.
    #[serde(skip)]
    pub arn: Option<String>,
}

crate::request_setters!(GetIncidentRecordRequest { arn: String });

/// Output of `GetIncidentRecord`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIncidentRecordOutput {
    /// The record.
    pub incident_record: Option<IncidentRecord>,
}

impl Operation for GetIncidentRecordRequest {
    type Output = GetIncidentRecordOutput;
    const NAME: &'static str = "GetIncidentRecord";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/getIncidentRecord").query_opt("arn", &self.arn))
    }
}

/// Input for `UpdateIncidentRecord`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncidentRecordRequest {
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Record ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// New impact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<i32>,
    /// `OPEN` or `RESOLVED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New chat channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_channel: Option<Document>,
    /// New notification targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_targets: Option<Vec<NotificationTargetItem>>,
}

crate::request_setters!(UpdateIncidentRecordRequest {
    client_token: String,
    arn: String,
    title: String,
    summary: String,
    impact: i32,
    status: String,
    chat_channel: Document,
    notification_targets: Vec<NotificationTargetItem>,
});

impl Operation for UpdateIncidentRecordRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "UpdateIncidentRecord";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/updateIncidentRecord"))
    }
}

/// Input for `ListIncidentRecords`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIncidentRecordsRequest {
    /// Filters, all of which must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

crate::request_setters!(ListIncidentRecordsRequest {
    filters: Vec<Filter>,
    max_results: i32,
    next_token: String,
});

/// Output of `ListIncidentRecords`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIncidentRecordsOutput {
    /// Records on this page.
    #[serde(default)]
    pub incident_record_summaries: Vec<IncidentRecordSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListIncidentRecordsRequest {
    type Output = ListIncidentRecordsOutput;
    const NAME: &'static str = "ListIncidentRecords";

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/listIncidentRecords"))
    }
}

impl Paginated for ListIncidentRecordsRequest {
    fn next_token(output: &ListIncidentRecordsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `CreateTimelineEvent`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEventRequest {
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Owning incident record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_record_arn: Option<String>,
    /// When the event happened, sent as epoch seconds.
    #[serde(
        serialize_with = "crate::types::epoch_seconds::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_time: Option<DateTime<Utc>>,
    /// Event type, e.g. `Custom Event`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Event payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data: Option<String>,
    /// Linked resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_references: Option<Vec<Document>>,
}

crate::request_setters!(CreateTimelineEventRequest {
    client_token: String,
    incident_record_arn: String,
    event_time: DateTime<Utc>,
    event_type: String,
    event_data: String,
    event_references: Vec<Document>,
});

/// Output of `CreateTimelineEvent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEventOutput {
    /// Owning incident record.
    pub incident_record_arn: Option<String>,
    /// New event id.
    pub event_id: Option<String>,
}

impl Operation for CreateTimelineEventRequest {
    type Output = CreateTimelineEventOutput;
    const NAME: &'static str = "CreateTimelineEvent";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "IncidentRecordArn", &self.incident_record_arn)?;
        require(Self::NAME, "EventTime", &self.event_time)?;
        require(Self::NAME, "EventType", &self.event_type)?;
        require(Self::NAME, "EventData", &self.event_data)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/createTimelineEvent"))
    }
}

/// Input for `ListTimelineEvents`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimelineEventsRequest {
    /// Incident record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_record_arn: Option<String>,
    /// Filters, all of which must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// `EVENT_TIME`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// `ASCENDING` or `DESCENDING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

crate::request_setters!(ListTimelineEventsRequest {
    incident_record_arn: String,
    filters: Vec<Filter>,
    sort_by: String,
    sort_order: String,
    next_token: String,
    max_results: i32,
});

/// Output of `ListTimelineEvents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimelineEventsOutput {
    /// Events on this page.
    #[serde(default)]
    pub event_summaries: Vec<EventSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListTimelineEventsRequest {
    type Output = ListTimelineEventsOutput;
    const NAME: &'static str = "ListTimelineEvents";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "IncidentRecordArn", &self.incident_record_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/listTimelineEvents"))
    }
}

impl Paginated for ListTimelineEventsRequest {
    fn next_token(output: &ListTimelineEventsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
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
#[serde(rename_all = "camelCase")]
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
