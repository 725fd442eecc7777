//! Shapes shared by Resilience Hub operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Document, Tags};

/// An application registered with Resilience Hub.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Application ARN.
    pub app_arn: Option<String>,
    /// Application name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Attached resiliency policy.
    pub policy_arn: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// `Active` or `Deleting`.
    pub status: Option<String>,
    /// Compliance against the policy.
    pub compliance_status: Option<String>,
    /// Time of the last assessment.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_app_compliance_evaluation_time: Option<DateTime<Utc>>,
    /// Current resiliency score.
    pub resiliency_score: Option<f64>,
    /// `Disabled` or `Daily`.
    pub assessment_schedule: Option<String>,
    /// Tags.
    pub tags: Option<Tags>,
}

/// Summary entry of `ListApps`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    /// Application ARN.
    pub app_arn: Option<String>,
    /// Application name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Compliance status.
    pub compliance_status: Option<String>,
    /// Resiliency score.
    pub resiliency_score: Option<f64>,
    /// Assessment schedule.
    pub assessment_schedule: Option<String>,
    /// Application status.
    pub status: Option<String>,
}

/// Recovery objectives for one disruption type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailurePolicy {
    /// Recovery time objective in seconds.
    pub rto_in_secs: i32,
    /// Recovery point objective in seconds.
    pub rpo_in_secs: i32,
}

/// Objectives keyed by disruption type: `Software`, `Hardware`, `AZ`, `Region`.
pub type PolicyMap = HashMap<String, FailurePolicy>;

/// A resiliency policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResiliencyPolicy {
    /// Policy ARN.
    pub policy_arn: Option<String>,
    /// Policy name.
    pub policy_name: Option<String>,
    /// Description.
    pub policy_description: Option<String>,
    /// `AnyLocation` or `SameContinent`, and others.
    pub data_location_constraint: Option<String>,
    /// `MissionCritical`, `Critical`, `Important`, `CoreServices` or `NonCritical`.
    pub tier: Option<String>,
    /// Estimated monthly cost class.
    pub estimated_cost_tier: Option<String>,
    /// Objectives.
    pub policy: Option<PolicyMap>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Tags.
    pub tags: Option<Tags>,
}

/// An assessment run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAssessment {
    /// Assessment ARN.
    pub assessment_arn: Option<String>,
    /// Assessed application.
    pub app_arn: Option<String>,
    /// Assessed version.
    pub app_version: Option<String>,
    /// Assessment name.
    pub assessment_name: Option<String>,
    /// `Pending`, `InProgress`, `Failed` or `Success`.
    pub assessment_status: Option<String>,
    /// `User` or `System`.
    pub invoker: Option<String>,
    /// Compliance status.
    pub compliance_status: Option<String>,
    /// Per-disruption compliance.
    pub compliance: Option<Document>,
    /// Resiliency score breakdown.
    pub resiliency_score: Option<Document>,
    /// Policy the assessment ran against.
    pub policy: Option<Document>,
    /// Start time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub start_time: Option<DateTime<Utc>>,
    /// End time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub end_time: Option<DateTime<Utc>>,
    /// Status message.
    pub message: Option<String>,
    /// Estimated monthly cost.
    pub cost: Option<Document>,
    /// Tags.
    pub tags: Option<Tags>,
}

/// Summary entry of `ListAppAssessments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAssessmentSummary {
    /// Assessment ARN.
    pub assessment_arn: Option<String>,
    /// Application ARN.
    pub app_arn: Option<String>,
    /// Application version.
    pub app_version: Option<String>,
    /// Assessment name.
    pub assessment_name: Option<String>,
    /// Assessment status.
    pub assessment_status: Option<String>,
    /// Invoker.
    pub invoker: Option<String>,
    /// Compliance status.
    pub compliance_status: Option<String>,
    /// Overall score.
    pub resiliency_score: Option<f64>,
    /// Start time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub start_time: Option<DateTime<Utc>>,
    /// End time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub end_time: Option<DateTime<Utc>>,
    /// Status message.
    pub message: Option<String>,
}

/// A Terraform state file to import resources from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerraformSource {
    /// S3 URL of the state file.
    pub s3_state_file_url: String,
}
