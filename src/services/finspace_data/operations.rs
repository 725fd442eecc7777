//! FinSpaceData requests and outputs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::model::{
    ChangesetSummary, Credentials, Dataset, DatasetOwnerInfo, PermissionGroupParams, SchemaUnion,
    User,
};
use crate::error::ServiceResult;
use crate::operation::{require, serialize_token, token_or_new, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;

/// Input for `CreateDataset`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetRequest {
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_title: Option<String>,
    /// `PARTITIONED` or `NON_PARTITIONED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_description: Option<String>,
    /// Owner contact details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_info: Option<DatasetOwnerInfo>,
    /// Permission group granted access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_group_params: Option<PermissionGroupParams>,
    /// Unique alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_definition: Option<SchemaUnion>,
}

crate::request_setters!(CreateDatasetRequest {
    client_token: String,
    dataset_title: String,
    kind: String,
    dataset_description: String,
    owner_info: DatasetOwnerInfo,
    permission_group_params: PermissionGroupParams,
    alias: String,
    schema_definition: SchemaUnion,
});

/// Output of `CreateDataset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetOutput {
    /// Id of the new dataset.
    pub dataset_id: Option<String>,
}

impl Operation for CreateDatasetRequest {
    type Output = CreateDatasetOutput;
    const NAME: &'static str = "CreateDataset";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetTitle", &self.dataset_title)?;
        require(Self::NAME, "Kind", &self.kind)?;
        require(Self::NAME, "PermissionGroupParams", &self.permission_group_params)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasetsv2"))
    }
}

/// Input for `GetDataset`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetDatasetRequest {
    /// Dataset id.
    #[serde(skip)]
    pub dataset_id: Option<String>,
}

crate::request_setters!(GetDatasetRequest { dataset_id: String });

/// Output of `GetDataset`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetDatasetOutput {
    /// Dataset description.
    #[serde(flatten)]
    pub dataset: Dataset,
    /// `PENDING`, `FAILED`, `SUCCESS` or `RUNNING`.
    pub status: Option<String>,
}

impl Operation for GetDatasetRequest {
    type Output = GetDatasetOutput;
    const NAME: &'static str = "GetDataset";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetId", &self.dataset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasetsv2/").param(&self.dataset_id))
    }
}

/// Input for `ListDatasets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDatasetsRequest {
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
}

crate::request_setters!(ListDatasetsRequest {
    next_token: String,
    max_results: i32,
});

/// Output of `ListDatasets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDatasetsOutput {
    /// Datasets on this page.
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListDatasetsRequest {
    type Output = ListDatasetsOutput;
    const NAME: &'static str = "ListDatasets";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasetsv2")
            .query_opt("nextToken", &self.next_token)
            .query_opt("maxResults", &self.max_results))
    }
}

impl Paginated for ListDatasetsRequest {
    fn next_token(output: &ListDatasetsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `DeleteDataset`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteDatasetRequest {
    /// Idempotency token, generated when unset.
    #[serde(skip)]
    pub client_token: Option<String>,
    /// Dataset id.
    #[serde(skip)]
    pub dataset_id: Option<String>,
}

crate::request_setters!(DeleteDatasetRequest {
    client_token: String,
    dataset_id: String,
});

/// Output of `DeleteDataset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDatasetOutput {
    /// Id of the deleted dataset.
    pub dataset_id: Option<String>,
}

impl Operation for DeleteDatasetRequest {
    type Output = DeleteDatasetOutput;
    const NAME: &'static str = "DeleteDataset";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetId", &self.dataset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasetsv2/")
            .param(&self.dataset_id)
            .query("clientToken", token_or_new(&self.client_token)))
    }
}

/// Input for `CreateChangeset`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChangesetRequest {
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Dataset id.
    #[serde(skip)]
    pub dataset_id: Option<String>,
    /// `REPLACE`, `APPEND` or `MODIFY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    /// Where the data comes from, e.g. `s3SourcePath`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_params: Option<HashMap<String, String>>,
    /// How the data is formatted, e.g. `formatType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_params: Option<HashMap<String, String>>,
}

crate::request_setters!(CreateChangesetRequest {
    client_token: String,
    dataset_id: String,
    change_type: String,
    source_params: HashMap<String, String>,
    format_params: HashMap<String, String>,
});

/// Output of `CreateChangeset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChangesetOutput {
    /// Dataset id.
    pub dataset_id: Option<String>,
    /// Id of the new changeset.
    pub changeset_id: Option<String>,
}

impl Operation for CreateChangesetRequest {
    type Output = CreateChangesetOutput;
    const NAME: &'static str = "CreateChangeset";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetId", &self.dataset_id)?;
        require(Self::NAME, "ChangeType", &self.change_type)?;
        require(Self::NAME, "SourceParams", &self.source_params)?;
        require(Self::NAME, "FormatParams", &self.format_params)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasets/")
            .param(&self.dataset_id)
            .literal("/changesetsv2"))
    }
}

/// Input for `GetChangeset`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChangesetRequest {
    /// Dataset id.
    #[serde(skip)]
    pub dataset_id: Option<String>,
    /// Changeset id.
    #[serde(skip)]
    pub changeset_id: Option<String>,
}

crate::request_setters!(GetChangesetRequest {
    dataset_id: String,
    changeset_id: String,
});

/// Output of `GetChangeset`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetChangesetOutput {
    /// Changeset description.
    #[serde(flatten)]
    pub changeset: ChangesetSummary,
}

impl Operation for GetChangesetRequest {
    type Output = GetChangesetOutput;
    const NAME: &'static str = "GetChangeset";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetId", &self.dataset_id)?;
        require(Self::NAME, "ChangesetId", &self.changeset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasets/")
            .param(&self.dataset_id)
            .literal("/changesetsv2/")
            .param(&self.changeset_id))
    }
}

/// Input for `ListChangesets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListChangesetsRequest {
    /// Dataset id.
    #[serde(skip)]
    pub dataset_id: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
}

crate::request_setters!(ListChangesetsRequest {
    dataset_id: String,
    max_results: i32,
    next_token: String,
});

/// Output of `ListChangesets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListChangesetsOutput {
    /// Changesets on this page.
    #[serde(default)]
    pub changesets: Vec<ChangesetSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListChangesetsRequest {
    type Output = ListChangesetsOutput;
    const NAME: &'static str = "ListChangesets";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetId", &self.dataset_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/datasets/")
            .param(&self.dataset_id)
            .literal("/changesetsv2")
            .query_opt("maxResults", &self.max_results)
            .query_opt("nextToken", &self.next_token))
    }
}

impl Paginated for ListChangesetsRequest {
    fn next_token(output: &ListChangesetsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `GetProgrammaticAccessCredentials`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetProgrammaticAccessCredentialsRequest {
    /// Lifetime of the credentials, 60 to 720 minutes.
    #[serde(skip)]
    pub duration_in_minutes: Option<i64>,
    /// FinSpace environment id.
    #[serde(skip)]
    pub environment_id: Option<String>,
}

crate::request_setters!(GetProgrammaticAccessCredentialsRequest {
    duration_in_minutes: i64,
    environment_id: String,
});

/// Output of `GetProgrammaticAccessCredentials`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProgrammaticAccessCredentialsOutput {
    /// Temporary credentials.
    pub credentials: Option<Credentials>,
    /// Lifetime of the credentials.
    pub duration_in_minutes: Option<i64>,
}

impl Operation for GetProgrammaticAccessCredentialsRequest {
    type Output = GetProgrammaticAccessCredentialsOutput;
    const NAME: &'static str = "GetProgrammaticAccessCredentials";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "EnvironmentId", &self.environment_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/credentials/programmatic")
            .query_opt("durationInMinutes", &self.duration_in_minutes)
            .query_opt("environmentId", &self.environment_id))
    }
}

/// Input for `GetWorkingLocation`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkingLocationRequest {
    /// `INGESTION` or `SAGEMAKER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
}

crate::request_setters!(GetWorkingLocationRequest { location_type: String });

/// Output of `GetWorkingLocation`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkingLocationOutput {
    /// Full S3 URI.
    pub s3_uri: Option<String>,
    /// Path within the bucket.
    pub s3_path: Option<String>,
    /// Bucket name.
    pub s3_bucket: Option<String>,
}

impl Operation for GetWorkingLocationRequest {
    type Output = GetWorkingLocationOutput;
    const NAME: &'static str = "GetWorkingLocation";

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/workingLocationV1"))
    }
}

/// Input for `CreateUser`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Email address, used as the login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// `SUPER_USER` or `APP_USER`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `ENABLED` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_access: Option<String>,
    /// IAM principal allowed programmatic access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_access_principal_arn: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(CreateUserRequest {
    email_address: String,
    user_type: String,
    first_name: String,
    last_name: String,
    api_access: String,
    api_access_principal_arn: String,
    client_token: String,
});

/// Output of `CreateUser`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserOutput {
    /// Id of the new user.
    pub user_id: Option<String>,
}

impl Operation for CreateUserRequest {
    type Output = CreateUserOutput;
    const NAME: &'static str = "CreateUser";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "EmailAddress", &self.email_address)?;
        require(Self::NAME, "Type", &self.user_type)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/user"))
    }
}

/// Input for `GetUser`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUserRequest {
    /// User id.
    #[serde(skip)]
    pub user_id: Option<String>,
}

crate::request_setters!(GetUserRequest { user_id: String });

/// Output of `GetUser`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserOutput {
    /// User description.
    #[serde(flatten)]
    pub user: User,
}

impl Operation for GetUserRequest {
    type Output = GetUserOutput;
    const NAME: &'static str = "GetUser";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "UserId", &self.user_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/user/").param(&self.user_id))
    }
}

/// Input for `ListUsers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersRequest {
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
}

crate::request_setters!(ListUsersRequest {
    next_token: String,
    max_results: i32,
});

/// Output of `ListUsers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersOutput {
    /// Users on this page.
    #[serde(default)]
    pub users: Vec<User>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListUsersRequest {
    type Output = ListUsersOutput;
    const NAME: &'static str = "ListUsers";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "MaxResults", &self.max_results)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/user")
            .query_opt("nextToken", &self.next_token)
            .query_opt("maxResults", &self.max_results))
    }
}

impl Paginated for ListUsersRequest {
    fn next_token(output: &ListUsersOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `DisableUser`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableUserRequest {
    /// User id.
    #[serde(skip)]
    pub user_id: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(DisableUserRequest {
    user_id: String,
    client_token: String,
});

/// Output of `DisableUser` and `EnableUser`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdOutput {
    /// Id of the affected user.
    pub user_id: Option<String>,
}

impl Operation for DisableUserRequest {
    type Output = UserIdOutput;
    const NAME: &'static str = "DisableUser";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "UserId", &self.user_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/user/")
            .param(&self.user_id)
            .literal("/disable"))
    }
}

/// Input for `EnableUser`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableUserRequest {
    /// User id.
    #[serde(skip)]
    pub user_id: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(EnableUserRequest {
    user_id: String,
    client_token: String,
});

impl Operation for EnableUserRequest {
    type Output = UserIdOutput;
    const NAME: &'static str = "EnableUser";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "UserId", &self.user_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/user/")
            .param(&self.user_id)
            .literal("/enable"))
    }
}
