//! Resilience Hub requests and outputs.

use serde::{Deserialize, Serialize};

use super::model::{
    App, AppAssessment, AppAssessmentSummary, AppSummary, PolicyMap, ResiliencyPolicy,
    TerraformSource,
};
use crate::error::ServiceResult;
use crate::operation::{require, serialize_token, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::Tags;

/// Input for `CreateApp`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppRequest {
    /// Application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resiliency policy to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    /// `Disabled` or `Daily`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_schedule: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(CreateAppRequest {
    name: String,
    description: String,
    policy_arn: String,
    assessment_schedule: String,
    tags: Tags,
    client_token: String,
});

/// Output carrying an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOutput {
    /// The application.
    pub app: Option<App>,
}

impl Operation for CreateAppRequest {
    type Output = AppOutput;
    const NAME: &'static str = "CreateApp";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/create-app"))
    }
}

/// Input for `DescribeApp`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAppRequest {
    /// Application ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_arn: Option<String>,
}

crate::request_setters!(DescribeAppRequest { app_arn: String });

impl Operation for DescribeAppRequest {
    type Output = AppOutput;
    const NAME: &'static str = "DescribeApp";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AppArn", &self.app_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/describe-app"))
    }
}

/// Input for `ListApps`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAppsRequest {
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
    /// Filter by name.
    #[serde(skip)]
    pub name: Option<String>,
    /// Filter by ARN.
    #[serde(skip)]
    pub app_arn: Option<String>,
}

crate::request_setters!(ListAppsRequest {
    next_token: String,
    max_results: i32,
    name: String,
    app_arn: String,
});

/// Output of `ListApps`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppsOutput {
    /// Applications on this page.
    #[serde(default)]
    pub app_summaries: Vec<AppSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListAppsRequest {
    type Output = ListAppsOutput;
    const NAME: &'static str = "ListApps";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/list-apps")
            .query_opt("nextToken", &self.next_token)
            .query_opt("maxResults", &self.max_results)
            .query_opt("name", &self.name)
            .query_opt("appArn", &self.app_arn))
    }
}

impl Paginated for ListAppsRequest {
    fn next_token(output: &ListAppsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `DeleteApp`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAppRequest {
    /// Application ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_arn: Option<String>,
    /// Delete even when assessments exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_delete: Option<bool>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(DeleteAppRequest {
    app_arn: String,
    force_delete: bool,
    client_token: String,
});

/// Output of `DeleteApp`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAppOutput {
    /// ARN of the deleted application.
    pub app_arn: Option<String>,
}

impl Operation for DeleteAppRequest {
    type Output = DeleteAppOutput;
    const NAME: &'static str = "DeleteApp";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AppArn", &self.app_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/delete-app"))
    }
}

/// Input for `CreateResiliencyPolicy`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResiliencyPolicyRequest {
    /// Policy name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_description: Option<String>,
    /// Where data may be restored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_location_constraint: Option<String>,
    /// Criticality tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Objectives per disruption type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyMap>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateResiliencyPolicyRequest {
    policy_name: String,
    policy_description: String,
    data_location_constraint: String,
    tier: String,
    policy: PolicyMap,
    client_token: String,
    tags: Tags,
});

/// Output carrying a resiliency policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResiliencyPolicyOutput {
    /// The policy.
    pub policy: Option<ResiliencyPolicy>,
}

impl Operation for CreateResiliencyPolicyRequest {
    type Output = ResiliencyPolicyOutput;
    const NAME: &'static str = "CreateResiliencyPolicy";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "PolicyName", &self.policy_name)?;
        require(Self::NAME, "Tier", &self.tier)?;
        require(Self::NAME, "Policy", &self.policy)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/create-resiliency-policy"))
    }
}

/// Input for `DescribeResiliencyPolicy`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeResiliencyPolicyRequest {
    /// Policy ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

crate::request_setters!(DescribeResiliencyPolicyRequest { policy_arn: String });

impl Operation for DescribeResiliencyPolicyRequest {
    type Output = ResiliencyPolicyOutput;
    const NAME: &'static str = "DescribeResiliencyPolicy";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "PolicyArn", &self.policy_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/describe-resiliency-policy"))
    }
}

/// Input for `StartAppAssessment`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAppAssessmentRequest {
    /// Application ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_arn: Option<String>,
    /// Published version to assess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    /// Assessment name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_name: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(StartAppAssessmentRequest {
    app_arn: String,
    app_version: String,
    assessment_name: String,
    client_token: String,
    tags: Tags,
});

/// Output carrying an assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAssessmentOutput {
    /// The assessment.
    pub assessment: Option<AppAssessment>,
}

impl Operation for StartAppAssessmentRequest {
    type Output = AppAssessmentOutput;
    const NAME: &'static str = "StartAppAssessment";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AppArn", &self.app_arn)?;
        require(Self::NAME, "AppVersion", &self.app_version)?;
        require(Self::NAME, "AssessmentName", &self.assessment_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/start-app-assessment"))
    }
}

/// Input for `DescribeAppAssessment`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAppAssessmentRequest {
    /// Assessment ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_arn: Option<String>,
}

crate::request_setters!(DescribeAppAssessmentRequest { assessment_arn: String });

impl Operation for DescribeAppAssessmentRequest {
    type Output = AppAssessmentOutput;
    const NAME: &'static str = "DescribeAppAssessment";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssessmentArn", &self.assessment_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/describe-app-assessment"))
    }
}

/// Input for `ListAppAssessments`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAppAssessmentsRequest {
    /// Filter by application.
    #[serde(skip)]
    pub app_arn: Option<String>,
    /// Filter by name.
    #[serde(skip)]
    pub assessment_name: Option<String>,
    /// Filter by status, repeated.
    #[serde(skip)]
    pub assessment_status: Option<Vec<String>>,
    /// Filter by compliance.
    #[serde(skip)]
    pub compliance_status: Option<String>,
    /// Filter by invoker.
    #[serde(skip)]
    pub invoker: Option<String>,
    /// Oldest first when true.
    #[serde(skip)]
    pub reverse_order: Option<bool>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
}

crate::request_setters!(ListAppAssessmentsRequest {
    app_arn: String,
    assessment_name: String,
    assessment_status: Vec<String>,
    compliance_status: String,
    invoker: String,
    reverse_order: bool,
    next_token: String,
    max_results: i32,
});

/// Output of `ListAppAssessments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppAssessmentsOutput {
    /// Assessments on this page.
    #[serde(default)]
    pub assessment_summaries: Vec<AppAssessmentSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListAppAssessmentsRequest {
    type Output = ListAppAssessmentsOutput;
    const NAME: &'static str = "ListAppAssessments";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/list-app-assessments")
            .query_opt("appArn", &self.app_arn)
            .query_opt("assessmentName", &self.assessment_name)
            .query_list("assessmentStatus", &self.assessment_status)
            .query_opt("complianceStatus", &self.compliance_status)
            .query_opt("invoker", &self.invoker)
            .query_opt("reverseOrder", &self.reverse_order)
            .query_opt("nextToken", &self.next_token)
            .query_opt("maxResults", &self.max_results))
    }
}

impl Paginated for ListAppAssessmentsRequest {
    fn next_token(output: &ListAppAssessmentsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `PublishAppVersion`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishAppVersionRequest {
    /// Application ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_arn: Option<String>,
}

crate::request_setters!(PublishAppVersionRequest { app_arn: String });

/// Output of `PublishAppVersion`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishAppVersionOutput {
    /// Application ARN.
    pub app_arn: Option<String>,
    /// Published version.
    pub app_version: Option<String>,
}

impl Operation for PublishAppVersionRequest {
    type Output = PublishAppVersionOutput;
    const NAME: &'static str = "PublishAppVersion";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AppArn", &self.app_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/publish-app-version"))
    }
}

/// Input for `ImportResourcesToDraftAppVersion`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResourcesToDraftAppVersionRequest {
    /// Application ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_arn: Option<String>,
    /// CloudFormation stacks or resource groups to import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_arns: Option<Vec<String>>,
    /// Terraform state files to import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_sources: Option<Vec<TerraformSource>>,
}

crate::request_setters!(ImportResourcesToDraftAppVersionRequest {
    app_arn: String,
    source_arns: Vec<String>,
    terraform_sources: Vec<TerraformSource>,
});

/// Output of `ImportResourcesToDraftAppVersion`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResourcesToDraftAppVersionOutput {
    /// Application ARN.
    pub app_arn: Option<String>,
    /// Draft version.
    pub app_version: Option<String>,
    /// Imported sources.
    #[serde(default)]
    pub source_arns: Vec<String>,
    /// `Pending`, `InProgress`, `Failed` or `Success`.
    pub status: Option<String>,
    /// Imported Terraform sources.
    #[serde(default)]
    pub terraform_sources: Vec<TerraformSource>,
}

impl Operation for ImportResourcesToDraftAppVersionRequest {
    type Output = ImportResourcesToDraftAppVersionOutput;
    const NAME: &'static str = "ImportResourcesToDraftAppVersion";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AppArn", &self.app_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/import-resources-to-draft-app-version"))
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

/// Output of `TagResource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagResourceOutput {}

impl Operation for TagResourceRequest {
    type Output = TagResourceOutput;
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
