//! WAFV2 requests and outputs.
//!
//! `Scope` is `REGIONAL` or `CLOUDFRONT`; CloudFront-scoped calls must be
//! sent to `us-east-1`. Updates and deletes carry the lock token from the
//! last read and fail with `WAFOptimisticLockException` when it is stale.

use serde::{Deserialize, Serialize};

use super::model::{DefaultAction, IpSet, Rule, Summary, Tag, TagInfoForResource, VisibilityConfig, WebAcl};
use crate::error::ServiceResult;
use crate::operation::{require, Operation, Paginated};
use crate::types::Document;

/// Output of operations that return no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyOutput {}

/// Output carrying the summary of a created entity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOutput {
    /// Summary of the new entity.
    pub summary: Option<Summary>,
}

/// Output of an update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOutput {
    /// Lock token for the next update or delete.
    pub next_lock_token: Option<String>,
}

/// Input for `CreateIPSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIpSetRequest {
    /// Set name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `REGIONAL` or `CLOUDFRONT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `IPV4` or `IPV6`.
    #[serde(rename = "IPAddressVersion", skip_serializing_if = "Option::is_none")]
    pub ip_address_version: Option<String>,
    /// CIDR ranges; may be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

crate::request_setters!(CreateIpSetRequest {
    name: String,
    scope: String,
    description: String,
    ip_address_version: String,
    addresses: Vec<String>,
    tags: Vec<Tag>,
});

impl Operation for CreateIpSetRequest {
    type Output = CreateOutput;
    const NAME: &'static str = "CreateIPSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "IPAddressVersion", &self.ip_address_version)?;
        require(Self::NAME, "Addresses", &self.addresses)?;
        Ok(())
    }
}

/// Input for `GetIPSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIpSetRequest {
    /// Set name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Set id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

crate::request_setters!(GetIpSetRequest {
    name: String,
    scope: String,
    id: String,
});

/// Output of `GetIPSet`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIpSetOutput {
    /// The set.
    #[serde(rename = "IPSet")]
    pub ip_set: Option<IpSet>,
    /// Lock token for the next update or delete.
    pub lock_token: Option<String>,
}

impl Operation for GetIpSetRequest {
    type Output = GetIpSetOutput;
    const NAME: &'static str = "GetIPSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Id", &self.id)?;
        Ok(())
    }
}

/// Input for `UpdateIPSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIpSetRequest {
    /// Set name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Set id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement address list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    /// Token from the last read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_token: Option<String>,
}

crate::request_setters!(UpdateIpSetRequest {
    name: String,
    scope: String,
    id: String,
    description: String,
    addresses: Vec<String>,
    lock_token: String,
});

impl Operation for UpdateIpSetRequest {
    type Output = UpdateOutput;
    const NAME: &'static str = "UpdateIPSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Id", &self.id)?;
        require(Self::NAME, "Addresses", &self.addresses)?;
        require(Self::NAME, "LockToken", &self.lock_token)?;
        Ok(())
    }
}

/// Input for `DeleteIPSet`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIpSetRequest {
    /// Set name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Set id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Token from the last read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_token: Option<String>,
}

crate::request_setters!(DeleteIpSetRequest {
    name: String,
    scope: String,
    id: String,
    lock_token: String,
});

impl Operation for DeleteIpSetRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteIPSet";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Id", &self.id)?;
        require(Self::NAME, "LockToken", &self.lock_token)?;
        Ok(())
    }
}

/// Input for `ListIPSets`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIpSetsRequest {
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Continuation marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

crate::request_setters!(ListIpSetsRequest {
    scope: String,
    next_marker: String,
    limit: i32,
});

/// Output of `ListIPSets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIpSetsOutput {
    /// Marker for the next page.
    pub next_marker: Option<String>,
    /// Sets on this page.
    #[serde(rename = "IPSets", default)]
    pub ip_sets: Vec<Summary>,
}

impl Operation for ListIpSetsRequest {
    type Output = ListIpSetsOutput;
    const NAME: &'static str = "ListIPSets";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Scope", &self.scope)?;
        Ok(())
    }
}

impl Paginated for ListIpSetsRequest {
    fn next_token(output: &ListIpSetsOutput) -> Option<String> {
        output.next_marker.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_marker = token;
    }
}

/// Input for `CreateWebACL`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateWebAclRequest {
    /// ACL name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Action when no rule matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<DefaultAction>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    /// Metrics and sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_config: Option<VisibilityConfig>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Custom response bodies by key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_response_bodies: Option<Document>,
    /// CAPTCHA settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_config: Option<Document>,
    /// Challenge settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_config: Option<Document>,
    /// Domains accepted in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_domains: Option<Vec<String>>,
}

crate::request_setters!(CreateWebAclRequest {
    name: String,
    scope: String,
    default_action: DefaultAction,
    description: String,
    rules: Vec<Rule>,
    visibility_config: VisibilityConfig,
    tags: Vec<Tag>,
    custom_response_bodies: Document,
    captcha_config: Document,
    challenge_config: Document,
    token_domains: Vec<String>,
});

impl Operation for CreateWebAclRequest {
    type Output = CreateOutput;
    const NAME: &'static str = "CreateWebACL";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "DefaultAction", &self.default_action)?;
        require(Self::NAME, "VisibilityConfig", &self.visibility_config)?;
        Ok(())
    }
}

/// Input for `GetWebACL`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWebAclRequest {
    /// ACL name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// ACL id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

crate::request_setters!(GetWebAclRequest {
    name: String,
    scope: String,
    id: String,
});

/// Output of `GetWebACL`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWebAclOutput {
    /// The ACL.
    #[serde(rename = "WebACL")]
    pub web_acl: Option<WebAcl>,
    /// Lock token for the next update or delete.
    pub lock_token: Option<String>,
    /// URL of the integration SDKs.
    #[serde(rename = "ApplicationIntegrationURL")]
    pub application_integration_url: Option<String>,
}

impl Operation for GetWebAclRequest {
    type Output = GetWebAclOutput;
    const NAME: &'static str = "GetWebACL";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Id", &self.id)?;
        Ok(())
    }
}

/// Input for `UpdateWebACL`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateWebAclRequest {
    /// ACL name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// ACL id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Action when no rule matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<DefaultAction>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    /// Metrics and sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_config: Option<VisibilityConfig>,
    /// Token from the last read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_token: Option<String>,
    /// Custom response bodies by key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_response_bodies: Option<Document>,
    /// CAPTCHA settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_config: Option<Document>,
    /// Challenge settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_config: Option<Document>,
    /// Domains accepted in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_domains: Option<Vec<String>>,
}

crate::request_setters!(UpdateWebAclRequest {
    name: String,
    scope: String,
    id: String,
    default_action: DefaultAction,
    description: String,
    rules: Vec<Rule>,
    visibility_config: VisibilityConfig,
    lock_token: String,
    custom_response_bodies: Document,
    captcha_config: Document,
    challenge_config: Document,
    token_domains: Vec<String>,
});

impl Operation for UpdateWebAclRequest {
    type Output = UpdateOutput;
    const NAME: &'static str = "UpdateWebACL";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Id", &self.id)?;
        require(Self::NAME, "DefaultAction", &self.default_action)?;
        require(Self::NAME, "VisibilityConfig", &self.visibility_config)?;
        require(Self::NAME, "LockToken", &self.lock_token)?;
        Ok(())
    }
}

/// Input for `DeleteWebACL`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteWebAclRequest {
    /// ACL name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// ACL id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Token from the last read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_token: Option<String>,
}

crate::request_setters!(DeleteWebAclRequest {
    name: String,
    scope: String,
    id: String,
    lock_token: String,
});

impl Operation for DeleteWebAclRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteWebACL";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Id", &self.id)?;
        require(Self::NAME, "LockToken", &self.lock_token)?;
        Ok(())
    }
}

/// Input for `ListWebACLs`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListWebAclsRequest {
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Continuation marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

crate::request_setters!(ListWebAclsRequest {
    scope: String,
    next_marker: String,
    limit: i32,
});

/// Output of `ListWebACLs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListWebAclsOutput {
    /// Marker for the next page.
    pub next_marker: Option<String>,
    /// ACLs on this page.
    #[serde(rename = "WebACLs", default)]
    pub web_acls: Vec<Summary>,
}

impl Operation for ListWebAclsRequest {
    type Output = ListWebAclsOutput;
    const NAME: &'static str = "ListWebACLs";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Scope", &self.scope)?;
        Ok(())
    }
}

impl Paginated for ListWebAclsRequest {
    fn next_token(output: &ListWebAclsOutput) -> Option<String> {
        output.next_marker.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_marker = token;
    }
}

/// Input for `AssociateWebACL`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssociateWebAclRequest {
    /// ACL to associate.
    #[serde(rename = "WebACLArn", skip_serializing_if = "Option::is_none")]
    pub web_acl_arn: Option<String>,
    /// Load balancer, API stage, or other protected resource.
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

crate::request_setters!(AssociateWebAclRequest {
    web_acl_arn: String,
    resource_arn: String,
});

impl Operation for AssociateWebAclRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "AssociateWebACL";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "WebACLArn", &self.web_acl_arn)?;
        require(Self::NAME, "ResourceArn", &self.resource_arn)?;
        Ok(())
    }
}

/// Input for `DisassociateWebACL`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateWebAclRequest {
    /// Protected resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

crate::request_setters!(DisassociateWebAclRequest { resource_arn: String });

impl Operation for DisassociateWebAclRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DisassociateWebACL";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceArn", &self.resource_arn)?;
        Ok(())
    }
}

/// Input for `GetWebACLForResource`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWebAclForResourceRequest {
    /// Protected resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

crate::request_setters!(GetWebAclForResourceRequest { resource_arn: String });

/// Output of `GetWebACLForResource`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetWebAclForResourceOutput {
    /// The associated ACL, if any.
    #[serde(rename = "WebACL")]
    pub web_acl: Option<WebAcl>,
}

impl Operation for GetWebAclForResourceRequest {
    type Output = GetWebAclForResourceOutput;
    const NAME: &'static str = "GetWebACLForResource";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceArn", &self.resource_arn)?;
        Ok(())
    }
}

/// Input for `CheckCapacity`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckCapacityRequest {
    /// Scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Rules to price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
}

crate::request_setters!(CheckCapacityRequest {
    scope: String,
    rules: Vec<Rule>,
});

/// Output of `CheckCapacity`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckCapacityOutput {
    /// Capacity units the rules need.
    pub capacity: Option<i64>,
}

impl Operation for CheckCapacityRequest {
    type Output = CheckCapacityOutput;
    const NAME: &'static str = "CheckCapacity";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Scope", &self.scope)?;
        require(Self::NAME, "Rules", &self.rules)?;
        Ok(())
    }
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    /// Resource ARN.
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Tags to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

crate::request_setters!(TagResourceRequest {
    resource_arn: String,
    tags: Vec<Tag>,
});

impl Operation for TagResourceRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "TagResource";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceARN", &self.resource_arn)?;
        require(Self::NAME, "Tags", &self.tags)?;
        Ok(())
    }
}

/// Input for `ListTagsForResource`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    /// Continuation marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Resource ARN.
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

crate::request_setters!(ListTagsForResourceRequest {
    next_marker: String,
    limit: i32,
    resource_arn: String,
});

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    /// Marker for the next page.
    pub next_marker: Option<String>,
    /// Tags of the resource.
    pub tag_info_for_resource: Option<TagInfoForResource>,
}

impl Operation for ListTagsForResourceRequest {
    type Output = ListTagsForResourceOutput;
    const NAME: &'static str = "ListTagsForResource";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ResourceARN", &self.resource_arn)?;
        Ok(())
    }
}

impl Paginated for ListTagsForResourceRequest {
    fn next_token(output: &ListTagsForResourceOutput) -> Option<String> {
        output.next_marker.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_marker = token;
    }
}
