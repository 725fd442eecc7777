//! Shapes shared by Incident Manager operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Document, Tags};

/// Per-region settings when creating a replication set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMapInputValue {
    /// KMS key for the region; AWS-owned when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sse_kms_key_id: Option<String>,
}

/// Replication state of one region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    /// KMS key.
    pub sse_kms_key_id: Option<String>,
    /// `ACTIVE`, `CREATING`, `DELETING` or `FAILED`.
    pub status: Option<String>,
    /// Status detail.
    pub status_message: Option<String>,
    /// Last status change.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub status_update_date_time: Option<DateTime<Utc>>,
}

/// The replication set of the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSet {
    /// Replication set ARN.
    pub arn: Option<String>,
    /// Regions by name.
    #[serde(default)]
    pub region_map: HashMap<String, RegionInfo>,
    /// Overall status.
    pub status: Option<String>,
    /// Whether the last region is protected from deletion.
    pub deletion_protected: Option<bool>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub created_time: Option<DateTime<Utc>>,
    /// Creator.
    pub created_by: Option<String>,
    /// Last modification time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_modified_time: Option<DateTime<Utc>>,
    /// Last modifier.
    pub last_modified_by: Option<String>,
}

/// An SNS topic to notify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTargetItem {
    /// Topic ARN.
    pub sns_topic_arn: String,
}

/// Defaults of incidents started from a response plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentTemplate {
    /// Incident title.
    pub title: String,
    /// Impact, 1 (critical) to 5 (no impact).
    pub impact: i32,
    /// Summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Incidents with the same string are deduplicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedupe_string: Option<String>,
    /// Topics to notify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_targets: Option<Vec<NotificationTargetItem>>,
    /// Tags applied to new incident records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_tags: Option<Tags>,
}

/// Summary entry of `ListResponsePlans`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePlanSummary {
    /// Plan ARN.
    pub arn: Option<String>,
    /// Plan name.
    pub name: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
}

/// What started an incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDetails {
    /// Source service, e.g. `aws.cloudwatch`.
    pub source: String,
    /// ARN of the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_arn: Option<String>,
    /// When the trigger fired.
    #[serde(with = "trigger_time")]
    pub timestamp: DateTime<Utc>,
    /// Raw trigger payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<String>,
}

mod trigger_time {
    use chrono::{DateTime, Utc};
    use serde::de::{self, Deserializer};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        crate::types::epoch_seconds::serialize(&Some(*value), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let value: Option<DateTime<Utc>> = crate::types::epoch_seconds::deserialize(deserializer)?;
        value.ok_or_else(|| de::Error::custom("missing trigger timestamp"))
    }
}

/// Where an incident record came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecordSource {
    /// Principal that created the record.
    pub created_by: Option<String>,
    /// Service principal that invoked the plan.
    pub invoked_by: Option<String>,
    /// Triggering resource.
    pub resource_arn: Option<String>,
    /// Source service.
    pub source: Option<String>,
}

/// An incident record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Record ARN.
    pub arn: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Summary.
    pub summary: Option<String>,
    /// `OPEN` or `RESOLVED`.
    pub status: Option<String>,
    /// Impact, 1 to 5.
    pub impact: Option<i32>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Resolution time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub resolved_time: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_modified_time: Option<DateTime<Utc>>,
    /// Last modifier.
    pub last_modified_by: Option<String>,
    /// Runbook executions.
    pub automation_executions: Option<Document>,
    /// Origin of the record.
    pub incident_record_source: Option<IncidentRecordSource>,
    /// Deduplication string.
    pub dedupe_string: Option<String>,
    /// Chat channel.
    pub chat_channel: Option<Document>,
    /// Topics notified.
    #[serde(default)]
    pub notification_targets: Vec<NotificationTargetItem>,
}

/// Summary entry of `ListIncidentRecords`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecordSummary {
    /// Record ARN.
    pub arn: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Status.
    pub status: Option<String>,
    /// Impact.
    pub impact: Option<i32>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Resolution time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub resolved_time: Option<DateTime<Utc>>,
    /// Origin.
    pub incident_record_source: Option<IncidentRecordSource>,
}

/// A list filter: `key` plus a `before`, `after` or `equals` condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Attribute to filter on.
    pub key: String,
    /// Condition document.
    pub condition: Document,
}

/// Summary entry of `ListTimelineEvents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Owning incident record.
    pub incident_record_arn: Option<String>,
    /// Event id.
    pub event_id: Option<String>,
    /// When the event happened.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub event_time: Option<DateTime<Utc>>,
    /// Last update.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub event_updated_time: Option<DateTime<Utc>>,
    /// Event type, e.g. `Custom Event`.
    pub event_type: Option<String>,
    /// Linked resources.
    #[serde(default)]
    pub event_references: Vec<Document>,
}
