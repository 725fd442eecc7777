//! EventBridge Schemas requests and outputs.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{RegistrySummary, SchemaSummary, SearchSchemaSummary};
use crate::error::ServiceResult;
use crate::http::AwsResponse;
use crate::operation::{require, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::Tags;

fn registry_uri(registry_name: &Option<String>) -> RequestUri {
    RequestUri::from_literal("/v1/registries/name/").param(registry_name)
}

fn schema_uri(registry_name: &Option<String>, schema_name: &Option<String>) -> RequestUri {
    registry_uri(registry_name)
        .literal("/schemas/name/")
        .param(schema_name)
}

fn discoverer_uri(discoverer_id: &Option<String>) -> RequestUri {
    RequestUri::from_literal("/v1/discoverers/id/").param(discoverer_id)
}

/// Output of operations that return no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyOutput {}

/// Input for `CreateRegistry`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRegistryRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateRegistryRequest {
    registry_name: String,
    description: String,
    tags: Tags,
});

/// A registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistryOutput {
    /// Description.
    pub description: Option<String>,
    /// Registry ARN.
    pub registry_arn: Option<String>,
    /// Registry name.
    pub registry_name: Option<String>,
    /// Tags.
    pub tags: Option<Tags>,
}

impl Operation for CreateRegistryRequest {
    type Output = RegistryOutput;
    const NAME: &'static str = "CreateRegistry";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(registry_uri(&self.registry_name))
    }
}

/// Input for `DescribeRegistry`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeRegistryRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
}

crate::request_setters!(DescribeRegistryRequest { registry_name: String });

impl Operation for DescribeRegistryRequest {
    type Output = RegistryOutput;
    const NAME: &'static str = "DescribeRegistry";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(registry_uri(&self.registry_name))
    }
}

/// Input for `DeleteRegistry`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteRegistryRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
}

crate::request_setters!(DeleteRegistryRequest { registry_name: String });

impl Operation for DeleteRegistryRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteRegistry";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(registry_uri(&self.registry_name))
    }
}

/// Input for `ListRegistries`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRegistriesRequest {
    /// Page size.
    #[serde(skip)]
    pub limit: Option<i32>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Filter by name prefix.
    #[serde(skip)]
    pub registry_name_prefix: Option<String>,
    /// `Local` or `AWS`.
    #[serde(skip)]
    pub scope: Option<String>,
}

crate::request_setters!(ListRegistriesRequest {
    limit: i32,
    next_token: String,
    registry_name_prefix: String,
    scope: String,
});

/// Output of `ListRegistries`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRegistriesOutput {
    /// Token for the next page.
    pub next_token: Option<String>,
    /// Registries on this page.
    #[serde(default)]
    pub registries: Vec<RegistrySummary>,
}

impl Operation for ListRegistriesRequest {
    type Output = ListRegistriesOutput;
    const NAME: &'static str = "ListRegistries";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/v1/registries")
            .query_opt("limit", &self.limit)
            .query_opt("nextToken", &self.next_token)
            .query_opt("registryNamePrefix", &self.registry_name_prefix)
            .query_opt("scope", &self.scope))
    }
}

impl Paginated for ListRegistriesRequest {
    fn next_token(output: &ListRegistriesOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `CreateSchema`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSchemaRequest {
    /// Schema document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Schema name.
    #[serde(skip)]
    pub schema_name: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// `OpenApi3` or `JSONSchemaDraft4`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
}

crate::request_setters!(CreateSchemaRequest {
    content: String,
    description: String,
    registry_name: String,
    schema_name: String,
    tags: Tags,
    schema_type: String,
});

/// A schema version.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaOutput {
    /// Schema document, present on describe.
    pub content: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
    /// Schema ARN.
    pub schema_arn: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Version.
    pub schema_version: Option<String>,
    /// Tags.
    pub tags: Option<Tags>,
    /// Schema type.
    #[serde(rename = "Type")]
    pub schema_type: Option<String>,
    /// Creation time of the version.
    pub version_created_date: Option<DateTime<Utc>>,
}

impl Operation for CreateSchemaRequest {
    type Output = SchemaOutput;
    const NAME: &'static str = "CreateSchema";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Content", &self.content)?;
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        require(Self::NAME, "SchemaName", &self.schema_name)?;
        require(Self::NAME, "Type", &self.schema_type)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(schema_uri(&self.registry_name, &self.schema_name))
    }
}

/// Input for `DescribeSchema`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeSchemaRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Schema name.
    #[serde(skip)]
    pub schema_name: Option<String>,
    /// Version; latest when unset.
    #[serde(skip)]
    pub schema_version: Option<String>,
}

crate::request_setters!(DescribeSchemaRequest {
    registry_name: String,
    schema_name: String,
    schema_version: String,
});

impl Operation for DescribeSchemaRequest {
    type Output = SchemaOutput;
    const NAME: &'static str = "DescribeSchema";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        require(Self::NAME, "SchemaName", &self.schema_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(schema_uri(&self.registry_name, &self.schema_name)
            .query_opt("schemaVersion", &self.schema_version))
    }
}

/// Input for `DeleteSchema`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteSchemaRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Schema name.
    #[serde(skip)]
    pub schema_name: Option<String>,
}

crate::request_setters!(DeleteSchemaRequest {
    registry_name: String,
    schema_name: String,
});

impl Operation for DeleteSchemaRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteSchema";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        require(Self::NAME, "SchemaName", &self.schema_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(schema_uri(&self.registry_name, &self.schema_name))
    }
}

/// Input for `ListSchemas`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListSchemasRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub limit: Option<i32>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Filter by name prefix.
    #[serde(skip)]
    pub schema_name_prefix: Option<String>,
}

crate::request_setters!(ListSchemasRequest {
    registry_name: String,
    limit: i32,
    next_token: String,
    schema_name_prefix: String,
});

/// Output of `ListSchemas`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSchemasOutput {
    /// Token for the next page.
    pub next_token: Option<String>,
    /// Schemas on this page.
    #[serde(default)]
    pub schemas: Vec<SchemaSummary>,
}

impl Operation for ListSchemasRequest {
    type Output = ListSchemasOutput;
    const NAME: &'static str = "ListSchemas";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(registry_uri(&self.registry_name)
            .literal("/schemas")
            .query_opt("limit", &self.limit)
            .query_opt("nextToken", &self.next_token)
            .query_opt("schemaNamePrefix", &self.schema_name_prefix))
    }
}

impl Paginated for ListSchemasRequest {
    fn next_token(output: &ListSchemasOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `SearchSchemas`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchSchemasRequest {
    /// Search terms.
    #[serde(skip)]
    pub keywords: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub limit: Option<i32>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
}

crate::request_setters!(SearchSchemasRequest {
    keywords: String,
    limit: i32,
    next_token: String,
    registry_name: String,
});

/// Output of `SearchSchemas`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchSchemasOutput {
    /// Token for the next page.
    pub next_token: Option<String>,
    /// Matches on this page.
    #[serde(default)]
    pub schemas: Vec<SearchSchemaSummary>,
}

impl Operation for SearchSchemasRequest {
    type Output = SearchSchemasOutput;
    const NAME: &'static str = "SearchSchemas";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Keywords", &self.keywords)?;
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(registry_uri(&self.registry_name)
            .literal("/schemas/search")
            .query_opt("keywords", &self.keywords)
            .query_opt("limit", &self.limit)
            .query_opt("nextToken", &self.next_token))
    }
}

impl Paginated for SearchSchemasRequest {
    fn next_token(output: &SearchSchemasOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `CreateDiscoverer`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDiscovererRequest {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event bus ARN to discover from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    /// Also discover events from other accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_account: Option<bool>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(CreateDiscovererRequest {
    description: String,
    source_arn: String,
    cross_account: bool,
    tags: Tags,
});

/// A discoverer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiscovererOutput {
    /// Description.
    pub description: Option<String>,
    /// Discoverer ARN.
    pub discoverer_arn: Option<String>,
    /// Discoverer id.
    pub discoverer_id: Option<String>,
    /// Event bus ARN.
    pub source_arn: Option<String>,
    /// `STARTED` or `STOPPED`.
    pub state: Option<String>,
    /// Cross-account discovery.
    pub cross_account: Option<bool>,
    /// Tags.
    pub tags: Option<Tags>,
}

impl Operation for CreateDiscovererRequest {
    type Output = DiscovererOutput;
    const NAME: &'static str = "CreateDiscoverer";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "SourceArn", &self.source_arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/v1/discoverers"))
    }
}

/// Input for `DescribeDiscoverer`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeDiscovererRequest {
    /// Discoverer id.
    #[serde(skip)]
    pub discoverer_id: Option<String>,
}

crate::request_setters!(DescribeDiscovererRequest { discoverer_id: String });

impl Operation for DescribeDiscovererRequest {
    type Output = DiscovererOutput;
    const NAME: &'static str = "DescribeDiscoverer";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DiscovererId", &self.discoverer_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(discoverer_uri(&self.discoverer_id))
    }
}

/// State of a discoverer after a start or stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiscovererStateOutput {
    /// Discoverer id.
    pub discoverer_id: Option<String>,
    /// `STARTED` or `STOPPED`.
    pub state: Option<String>,
}

/// Input for `StartDiscoverer`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StartDiscovererRequest {
    /// Discoverer id.
    #[serde(skip)]
    pub discoverer_id: Option<String>,
}

crate::request_setters!(StartDiscovererRequest { discoverer_id: String });

impl Operation for StartDiscovererRequest {
    type Output = DiscovererStateOutput;
    const NAME: &'static str = "StartDiscoverer";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DiscovererId", &self.discoverer_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(discoverer_uri(&self.discoverer_id).literal("/start"))
    }
}

/// Input for `StopDiscoverer`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StopDiscovererRequest {
    /// Discoverer id.
    #[serde(skip)]
    pub discoverer_id: Option<String>,
}

crate::request_setters!(StopDiscovererRequest { discoverer_id: String });

impl Operation for StopDiscovererRequest {
    type Output = DiscovererStateOutput;
    const NAME: &'static str = "StopDiscoverer";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DiscovererId", &self.discoverer_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(discoverer_uri(&self.discoverer_id).literal("/stop"))
    }
}

/// Input for `PutCodeBinding`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PutCodeBindingRequest {
    /// `Java8`, `Python36`, `TypeScript3` or `Go1`.
    #[serde(skip)]
    pub language: Option<String>,
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Schema name.
    #[serde(skip)]
    pub schema_name: Option<String>,
    /// Version; latest when unset.
    #[serde(skip)]
    pub schema_version: Option<String>,
}

crate::request_setters!(PutCodeBindingRequest {
    language: String,
    registry_name: String,
    schema_name: String,
    schema_version: String,
});

/// Output of `PutCodeBinding`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutCodeBindingOutput {
    /// Creation time.
    pub creation_date: Option<DateTime<Utc>>,
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
    /// Version the binding was generated for.
    pub schema_version: Option<String>,
    /// `CREATE_IN_PROGRESS`, `CREATE_COMPLETE` or `CREATE_FAILED`.
    pub status: Option<String>,
}

impl Operation for PutCodeBindingRequest {
    type Output = PutCodeBindingOutput;
    const NAME: &'static str = "PutCodeBinding";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Language", &self.language)?;
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        require(Self::NAME, "SchemaName", &self.schema_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(schema_uri(&self.registry_name, &self.schema_name)
            .literal("/language/")
            .param(&self.language)
            .query_opt("schemaVersion", &self.schema_version))
    }
}

/// Input for `GetCodeBindingSource`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCodeBindingSourceRequest {
    /// Binding language.
    #[serde(skip)]
    pub language: Option<String>,
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Schema name.
    #[serde(skip)]
    pub schema_name: Option<String>,
    /// Version; latest when unset.
    #[serde(skip)]
    pub schema_version: Option<String>,
}

crate::request_setters!(GetCodeBindingSourceRequest {
    language: String,
    registry_name: String,
    schema_name: String,
    schema_version: String,
});

/// Output of `GetCodeBindingSource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetCodeBindingSourceOutput {
    /// Zipped source of the binding.
    #[serde(skip)]
    pub body: Bytes,
}

impl Operation for GetCodeBindingSourceRequest {
    type Output = GetCodeBindingSourceOutput;
    const NAME: &'static str = "GetCodeBindingSource";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Language", &self.language)?;
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        require(Self::NAME, "SchemaName", &self.schema_name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(schema_uri(&self.registry_name, &self.schema_name)
            .literal("/language/")
            .param(&self.language)
            .literal("/source")
            .query_opt("schemaVersion", &self.schema_version))
    }

    fn parse(response: &AwsResponse) -> ServiceResult<GetCodeBindingSourceOutput> {
        Ok(GetCodeBindingSourceOutput {
            body: response.body().clone(),
        })
    }
}

/// Input for `ExportSchema`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportSchemaRequest {
    /// Registry name.
    #[serde(skip)]
    pub registry_name: Option<String>,
    /// Schema name.
    #[serde(skip)]
    pub schema_name: Option<String>,
    /// Version; latest when unset.
    #[serde(skip)]
    pub schema_version: Option<String>,
    /// Export format, `OpenApi3` or `JSONSchemaDraft4`.
    #[serde(skip)]
    pub schema_type: Option<String>,
}

crate::request_setters!(ExportSchemaRequest {
    registry_name: String,
    schema_name: String,
    schema_version: String,
    schema_type: String,
});

/// Output of `ExportSchema`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportSchemaOutput {
    /// Exported document.
    pub content: Option<String>,
    /// Schema ARN.
    pub schema_arn: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Version.
    pub schema_version: Option<String>,
    /// Export format.
    #[serde(rename = "Type")]
    pub schema_type: Option<String>,
}

impl Operation for ExportSchemaRequest {
    type Output = ExportSchemaOutput;
    const NAME: &'static str = "ExportSchema";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "RegistryName", &self.registry_name)?;
        require(Self::NAME, "SchemaName", &self.schema_name)?;
        require(Self::NAME, "Type", &self.schema_type)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(schema_uri(&self.registry_name, &self.schema_name)
            .literal("/export")
            .query_opt("schemaVersion", &self.schema_version)
            .query_opt("type", &self.schema_type))
    }
}
