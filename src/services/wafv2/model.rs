//! Shapes shared by WAFV2 operations.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::types::Document;

/// A key/value tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// New tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Metrics and sampling settings of a web ACL or rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisibilityConfig {
    /// Keep a sample of matching requests.
    pub sampled_requests_enabled: bool,
    /// Publish CloudWatch metrics.
    pub cloud_watch_metrics_enabled: bool,
    /// Metric name.
    pub metric_name: String,
}

impl VisibilityConfig {
    /// Sampling and metrics on, under `metric_name`.
    pub fn enabled(metric_name: impl Into<String>) -> Self {
        Self {
            sampled_requests_enabled: true,
            cloud_watch_metrics_enabled: true,
            metric_name: metric_name.into(),
        }
    }
}

/// Action taken when no rule matches. Set exactly one member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultAction {
    /// Allow, with optional custom request handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<Document>,
    /// Block, with optional custom response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Document>,
}

impl DefaultAction {
    /// Allow by default.
    pub fn allow() -> Self {
        Self {
            allow: Some(json!({})),
            block: None,
        }
    }

    /// Block by default.
    pub fn block() -> Self {
        Self {
            allow: None,
            block: Some(json!({})),
        }
    }
}

/// A rule of a web ACL or rule group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    /// Rule name.
    pub name: String,
    /// Evaluation order, lowest first.
    pub priority: i32,
    /// Match statement.
    pub statement: Document,
    /// Action for matches; for plain rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Document>,
    /// Override for rule group references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_action: Option<Document>,
    /// Metrics and sampling.
    pub visibility_config: VisibilityConfig,
}

/// An IP set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSet {
    /// Set name.
    pub name: Option<String>,
    /// Set id.
    pub id: Option<String>,
    /// Set ARN.
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// `IPV4` or `IPV6`.
    #[serde(rename = "IPAddressVersion")]
    pub ip_address_version: Option<String>,
    /// CIDR ranges.
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// Summary of a web ACL, IP set or other WAF entity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    /// Entity name.
    pub name: Option<String>,
    /// Entity id.
    pub id: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Token for the next update or delete.
    pub lock_token: Option<String>,
    /// Entity ARN.
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
}

/// A web ACL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAcl {
    /// ACL name.
    pub name: Option<String>,
    /// ACL id.
    pub id: Option<String>,
    /// ACL ARN.
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    /// Default action.
    pub default_action: Option<DefaultAction>,
    /// Description.
    pub description: Option<String>,
    /// Rules.
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Metrics and sampling.
    pub visibility_config: Option<VisibilityConfig>,
    /// Capacity units used.
    pub capacity: Option<i64>,
    /// Whether a Firewall Manager policy manages the ACL.
    pub managed_by_firewall_manager: Option<bool>,
    /// Prefix of the labels the rules add.
    pub label_namespace: Option<String>,
}

/// Tags of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagInfoForResource {
    /// Resource ARN.
    #[serde(rename = "ResourceARN")]
    pub resource_arn: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tag_list: Vec<Tag>,
}
