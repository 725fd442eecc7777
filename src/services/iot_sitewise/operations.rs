//! IoT SiteWise requests and outputs.
//!
//! Calls go to one of three host prefixes: `api.` for the asset catalog,
//! `data.` for property values and `monitor.` for portals.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::model::{
    AssetHierarchy, AssetModelHierarchy, AssetModelProperty, AssetProperty, AssetPropertyValue,
    AssetSummary, BatchPutAssetPropertyErrorEntry, PortalStatus, PutAssetPropertyValueEntry,
    ResourceStatus,
};
use crate::error::ServiceResult;
use crate::operation::{require, serialize_token, token_or_new, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::Tags;

const API: &str = "api.";
const DATA: &str = "data.";
const MONITOR: &str = "monitor.";

fn iso8601(value: &Option<DateTime<Utc>>) -> Option<String> {
    value.as_ref().map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Input for `CreateAsset`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    /// Asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    /// Model to create the asset from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_model_id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_description: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateAssetRequest {
    asset_name: String,
    asset_model_id: String,
    asset_description: String,
    client_token: String,
    tags: Tags,
});

/// Output of `CreateAsset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetOutput {
    /// Asset id.
    pub asset_id: Option<String>,
    /// Asset ARN.
    pub asset_arn: Option<String>,
    /// Asset status.
    pub asset_status: Option<ResourceStatus>,
}

impl Operation for CreateAssetRequest {
    type Output = CreateAssetOutput;
    const NAME: &'static str = "CreateAsset";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetName", &self.asset_name)?;
        require(Self::NAME, "AssetModelId", &self.asset_model_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/assets"))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `DescribeAsset`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeAssetRequest {
    /// Asset id.
    #[serde(skip)]
    pub asset_id: Option<String>,
    /// Leave out the asset properties.
    #[serde(skip)]
    pub exclude_properties: Option<bool>,
}

crate::request_setters!(DescribeAssetRequest {
    asset_id: String,
    exclude_properties: bool,
});

/// Output of `DescribeAsset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAssetOutput {
    /// Asset id.
    pub asset_id: Option<String>,
    /// Asset ARN.
    pub asset_arn: Option<String>,
    /// Asset name.
    pub asset_name: Option<String>,
    /// Model id.
    pub asset_model_id: Option<String>,
    /// Properties.
    #[serde(default)]
    pub asset_properties: Vec<AssetProperty>,
    /// Hierarchies.
    #[serde(default)]
    pub asset_hierarchies: Vec<AssetHierarchy>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub asset_creation_date: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub asset_last_update_date: Option<DateTime<Utc>>,
    /// Status.
    pub asset_status: Option<ResourceStatus>,
    /// Description.
    pub asset_description: Option<String>,
}

impl Operation for DescribeAssetRequest {
    type Output = DescribeAssetOutput;
    const NAME: &'static str = "DescribeAsset";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetId", &self.asset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/assets/")
            .param(&self.asset_id)
            .query_opt("excludeProperties", &self.exclude_properties))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `UpdateAsset`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    /// Asset id.
    #[serde(skip)]
    pub asset_id: Option<String>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_description: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(UpdateAssetRequest {
    asset_id: String,
    asset_name: String,
    asset_description: String,
    client_token: String,
});

/// Output of asset updates and deletes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatusOutput {
    /// Asset status after the call.
    pub asset_status: Option<ResourceStatus>,
}

impl Operation for UpdateAssetRequest {
    type Output = AssetStatusOutput;
    const NAME: &'static str = "UpdateAsset";
    const METHOD: HttpMethod = HttpMethod::PUT;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetId", &self.asset_id)?;
        require(Self::NAME, "AssetName", &self.asset_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/assets/").param(&self.asset_id))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `DeleteAsset`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteAssetRequest {
    /// Asset id.
    #[serde(skip)]
    pub asset_id: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(skip)]
    pub client_token: Option<String>,
}

crate::request_setters!(DeleteAssetRequest {
    asset_id: String,
    client_token: String,
});

impl Operation for DeleteAssetRequest {
    type Output = AssetStatusOutput;
    const NAME: &'static str = "DeleteAsset";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetId", &self.asset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/assets/")
            .param(&self.asset_id)
            .query("clientToken", token_or_new(&self.client_token)))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `ListAssets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAssetsRequest {
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
    /// Only assets of this model.
    #[serde(skip)]
    pub asset_model_id: Option<String>,
    /// `ALL` or `TOP_LEVEL`.
    #[serde(skip)]
    pub filter: Option<String>,
}

crate::request_setters!(ListAssetsRequest {
    next_token: String,
    max_results: i32,
    asset_model_id: String,
    filter: String,
});

/// Output of `ListAssets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssetsOutput {
    /// Assets on this page.
    #[serde(default)]
    pub asset_summaries: Vec<AssetSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListAssetsRequest {
    type Output = ListAssetsOutput;
    const NAME: &'static str = "ListAssets";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/assets")
            .query_opt("nextToken", &self.next_token)
            .query_opt("maxResults", &self.max_results)
            .query_opt("assetModelId", &self.asset_model_id)
            .query_opt("filter", &self.filter))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

impl Paginated for ListAssetsRequest {
    fn next_token(output: &ListAssetsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `AssociateAssets`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateAssetsRequest {
    /// Parent asset id.
    #[serde(skip)]
    pub asset_id: Option<String>,
    /// Hierarchy of the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_id: Option<String>,
    /// Child asset id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_asset_id: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(AssociateAssetsRequest {
    asset_id: String,
    hierarchy_id: String,
    child_asset_id: String,
    client_token: String,
});

/// Output of `AssociateAssets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociateAssetsOutput {}

impl Operation for AssociateAssetsRequest {
    type Output = AssociateAssetsOutput;
    const NAME: &'static str = "AssociateAssets";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetId", &self.asset_id)?;
        require(Self::NAME, "HierarchyId", &self.hierarchy_id)?;
        require(Self::NAME, "ChildAssetId", &self.child_asset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/assets/")
            .param(&self.asset_id)
            .literal("/associate"))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `CreateAssetModel`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetModelRequest {
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_model_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_model_description: Option<String>,
    /// Property definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_model_properties: Option<Vec<AssetModelProperty>>,
    /// Hierarchy definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_model_hierarchies: Option<Vec<AssetModelHierarchy>>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateAssetModelRequest {
    asset_model_name: String,
    asset_model_description: String,
    asset_model_properties: Vec<AssetModelProperty>,
    asset_model_hierarchies: Vec<AssetModelHierarchy>,
    client_token: String,
    tags: Tags,
});

/// Output of `CreateAssetModel`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetModelOutput {
    /// Model id.
    pub asset_model_id: Option<String>,
    /// Model ARN.
    pub asset_model_arn: Option<String>,
    /// Model status.
    pub asset_model_status: Option<ResourceStatus>,
}

impl Operation for CreateAssetModelRequest {
    type Output = CreateAssetModelOutput;
    const NAME: &'static str = "CreateAssetModel";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetModelName", &self.asset_model_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/asset-models"))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `DescribeAssetModel`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeAssetModelRequest {
    /// Model id.
    #[serde(skip)]
    pub asset_model_id: Option<String>,
}

crate::request_setters!(DescribeAssetModelRequest {
    asset_model_id: String
});

/// Output of `DescribeAssetModel`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAssetModelOutput {
    /// Model id.
    pub asset_model_id: Option<String>,
    /// Model ARN.
    pub asset_model_arn: Option<String>,
    /// Model name.
    pub asset_model_name: Option<String>,
    /// Description.
    pub asset_model_description: Option<String>,
    /// Property definitions.
    #[serde(default)]
    pub asset_model_properties: Vec<AssetModelProperty>,
    /// Hierarchy definitions.
    #[serde(default)]
    pub asset_model_hierarchies: Vec<AssetModelHierarchy>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub asset_model_creation_date: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub asset_model_last_update_date: Option<DateTime<Utc>>,
    /// Status.
    pub asset_model_status: Option<ResourceStatus>,
}

impl Operation for DescribeAssetModelRequest {
    type Output = DescribeAssetModelOutput;
    const NAME: &'static str = "DescribeAssetModel";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AssetModelId", &self.asset_model_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/asset-models/").param(&self.asset_model_id))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(API)
    }
}

/// Input for `BatchPutAssetPropertyValue`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPutAssetPropertyValueRequest {
    /// Values to ingest, grouped by property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<PutAssetPropertyValueEntry>>,
}

crate::request_setters!(BatchPutAssetPropertyValueRequest {
    entries: Vec<PutAssetPropertyValueEntry>
});

/// Output of `BatchPutAssetPropertyValue`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPutAssetPropertyValueOutput {
    /// Entries with rejected values.
    #[serde(default)]
    pub error_entries: Vec<BatchPutAssetPropertyErrorEntry>,
}

impl Operation for BatchPutAssetPropertyValueRequest {
    type Output = BatchPutAssetPropertyValueOutput;
    const NAME: &'static str = "BatchPutAssetPropertyValue";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Entries", &self.entries)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/properties"))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(DATA)
    }
}

/// Input for `GetAssetPropertyValue`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetAssetPropertyValueRequest {
    /// Asset id.
    #[serde(skip)]
    pub asset_id: Option<String>,
    /// Property id.
    #[serde(skip)]
    pub property_id: Option<String>,
    /// Data stream alias.
    #[serde(skip)]
    pub property_alias: Option<String>,
}

crate::request_setters!(GetAssetPropertyValueRequest {
    asset_id: String,
    property_id: String,
    property_alias: String,
});

/// Output of `GetAssetPropertyValue`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetPropertyValueOutput {
    /// Latest value.
    pub property_value: Option<AssetPropertyValue>,
}

impl Operation for GetAssetPropertyValueRequest {
    type Output = GetAssetPropertyValueOutput;
    const NAME: &'static str = "GetAssetPropertyValue";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/properties/latest")
            .query_opt("assetId", &self.asset_id)
            .query_opt("propertyId", &self.property_id)
            .query_opt("propertyAlias", &self.property_alias))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(DATA)
    }
}

/// Input for `GetAssetPropertyValueHistory`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetAssetPropertyValueHistoryRequest {
    /// Asset id.
    #[serde(skip)]
    pub asset_id: Option<String>,
    /// Property id.
    #[serde(skip)]
    pub property_id: Option<String>,
    /// Data stream alias.
    #[serde(skip)]
    pub property_alias: Option<String>,
    /// Start of the window.
    #[serde(skip)]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the window.
    #[serde(skip)]
    pub end_date: Option<DateTime<Utc>>,
    /// Only values of these qualities.
    #[serde(skip)]
    pub qualities: Option<Vec<String>>,
    /// `ASCENDING` or `DESCENDING`.
    #[serde(skip)]
    pub time_ordering: Option<String>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
}

crate::request_setters!(GetAssetPropertyValueHistoryRequest {
    asset_id: String,
    property_id: String,
    property_alias: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    qualities: Vec<String>,
    time_ordering: String,
    next_token: String,
    max_results: i32,
});

/// Output of `GetAssetPropertyValueHistory`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetPropertyValueHistoryOutput {
    /// Values on this page.
    #[serde(default)]
    pub asset_property_value_history: Vec<AssetPropertyValue>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for GetAssetPropertyValueHistoryRequest {
    type Output = GetAssetPropertyValueHistoryOutput;
    const NAME: &'static str = "GetAssetPropertyValueHistory";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/properties/history")
            .query_opt("assetId", &self.asset_id)
            .query_opt("propertyId", &self.property_id)
            .query_opt("propertyAlias", &self.property_alias)
            .query_opt("startDate", &iso8601(&self.start_date))
            .query_opt("endDate", &iso8601(&self.end_date))
            .query_list("qualities", &self.qualities)
            .query_opt("timeOrdering", &self.time_ordering)
            .query_opt("nextToken", &self.next_token)
            .query_opt("maxResults", &self.max_results))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(DATA)
    }
}

impl Paginated for GetAssetPropertyValueHistoryRequest {
    fn next_token(output: &GetAssetPropertyValueHistoryOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `CreatePortal`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortalRequest {
    /// Portal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_description: Option<String>,
    /// Administrator contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_contact_email: Option<String>,
    /// Service role of the portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// `SSO` or `IAM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_auth_mode: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreatePortalRequest {
    portal_name: String,
    portal_description: String,
    portal_contact_email: String,
    role_arn: String,
    portal_auth_mode: String,
    client_token: String,
    tags: Tags,
});

/// Output of `CreatePortal`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortalOutput {
    /// Portal id.
    pub portal_id: Option<String>,
    /// Portal ARN.
    pub portal_arn: Option<String>,
    /// Sign-in URL.
    pub portal_start_url: Option<String>,
    /// Status.
    pub portal_status: Option<PortalStatus>,
    /// SSO application id.
    pub sso_application_id: Option<String>,
}

impl Operation for CreatePortalRequest {
    type Output = CreatePortalOutput;
    const NAME: &'static str = "CreatePortal";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "PortalName", &self.portal_name)?;
        require(Self::NAME, "PortalContactEmail", &self.portal_contact_email)?;
        require(Self::NAME, "RoleArn", &self.role_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/portals"))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(MONITOR)
    }
}

/// Input for `DescribePortal`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribePortalRequest {
    /// Portal id.
    #[serde(skip)]
    pub portal_id: Option<String>,
}

crate::request_setters!(DescribePortalRequest { portal_id: String });

/// Output of `DescribePortal`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePortalOutput {
    /// Portal id.
    pub portal_id: Option<String>,
    /// Portal ARN.
    pub portal_arn: Option<String>,
    /// Portal name.
    pub portal_name: Option<String>,
    /// Description.
    pub portal_description: Option<String>,
    /// Client id for the portal application.
    pub portal_client_id: Option<String>,
    /// Sign-in URL.
    pub portal_start_url: Option<String>,
    /// Administrator contact email.
    pub portal_contact_email: Option<String>,
    /// Status.
    pub portal_status: Option<PortalStatus>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub portal_creation_date: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub portal_last_update_date: Option<DateTime<Utc>>,
    /// Service role.
    pub role_arn: Option<String>,
    /// Authentication mode.
    pub portal_auth_mode: Option<String>,
}

impl Operation for DescribePortalRequest {
    type Output = DescribePortalOutput;
    const NAME: &'static str = "DescribePortal";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "PortalId", &self.portal_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/portals/").param(&self.portal_id))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        Some(MONITOR)
    }
}
