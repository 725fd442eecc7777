//! Glacier requests and outputs.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::model::{DescribeVaultOutput, GlacierJobDescription, JobParameters, VaultNotificationConfig};
use super::tree_hash::tree_hash;
use crate::error::ServiceResult;
use crate::http::AwsResponse;
use crate::operation::{require, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::Tags;

fn vault_uri(account_id: &Option<String>, vault_name: &Option<String>) -> RequestUri {
    RequestUri::from_literal("/")
        .param(account_id)
        .literal("/vaults/")
        .param(vault_name)
}

fn require_vault(
    operation: &'static str,
    account_id: &Option<String>,
    vault_name: &Option<String>,
) -> ServiceResult<()> {
    require(operation, "AccountId", account_id)?;
    require(operation, "VaultName", vault_name)?;
    Ok(())
}

/// Input for `CreateVault`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVaultRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
}

crate::request_setters!(CreateVaultRequest {
    account_id: String,
    vault_name: String,
});

/// Output of `CreateVault`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVaultOutput {
    /// Relative URI of the vault, from the `Location` header.
    #[serde(skip)]
    pub location: Option<String>,
}

impl Operation for CreateVaultRequest {
    type Output = CreateVaultOutput;
    const NAME: &'static str = "CreateVault";
    const METHOD: HttpMethod = HttpMethod::PUT;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name))
    }

    fn body(&self) -> ServiceResult<Option<Bytes>> {
        Ok(None)
    }

    fn parse(response: &AwsResponse) -> ServiceResult<CreateVaultOutput> {
        Ok(CreateVaultOutput {
            location: response.header_string("location"),
        })
    }
}

/// Input for `DescribeVault`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeVaultRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
}

crate::request_setters!(DescribeVaultRequest {
    account_id: String,
    vault_name: String,
});

impl Operation for DescribeVaultRequest {
    type Output = DescribeVaultOutput;
    const NAME: &'static str = "DescribeVault";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name))
    }
}

/// Input for `DeleteVault`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteVaultRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
}

crate::request_setters!(DeleteVaultRequest {
    account_id: String,
    vault_name: String,
});

/// Output of operations that return no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyOutput {}

impl Operation for DeleteVaultRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteVault";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name))
    }
}

/// Input for `ListVaults`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListVaultsRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Continuation marker.
    #[serde(skip)]
    pub marker: Option<String>,
    /// Page size, up to 1000.
    #[serde(skip)]
    pub limit: Option<i32>,
}

crate::request_setters!(ListVaultsRequest {
    account_id: String,
    marker: String,
    limit: i32,
});

/// Output of `ListVaults`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVaultsOutput {
    /// Vaults on this page.
    #[serde(default)]
    pub vault_list: Vec<DescribeVaultOutput>,
    /// Marker for the next page.
    pub marker: Option<String>,
}

impl Operation for ListVaultsRequest {
    type Output = ListVaultsOutput;
    const NAME: &'static str = "ListVaults";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "AccountId", &self.account_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/")
            .param(&self.account_id)
            .literal("/vaults")
            .query_opt("marker", &self.marker)
            .query_opt("limit", &self.limit))
    }
}

impl Paginated for ListVaultsRequest {
    fn next_token(output: &ListVaultsOutput) -> Option<String> {
        output.marker.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

/// Input for `InitiateJob`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InitiateJobRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Job parameters, sent as the whole body.
    #[serde(skip)]
    pub job_parameters: Option<JobParameters>,
}

crate::request_setters!(InitiateJobRequest {
    account_id: String,
    vault_name: String,
    job_parameters: JobParameters,
});

/// Output of `InitiateJob`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitiateJobOutput {
    /// Relative URI of the job.
    #[serde(skip)]
    pub location: Option<String>,
    /// Job id.
    #[serde(skip)]
    pub job_id: Option<String>,
    /// Output location of a select job.
    #[serde(skip)]
    pub job_output_path: Option<String>,
}

impl Operation for InitiateJobRequest {
    type Output = InitiateJobOutput;
    const NAME: &'static str = "InitiateJob";

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name).literal("/jobs"))
    }

    fn body(&self) -> ServiceResult<Option<Bytes>> {
        let params = self.job_parameters.clone().unwrap_or_default();
        Ok(Some(Bytes::from(serde_json::to_vec(&params)?)))
    }

    fn parse(response: &AwsResponse) -> ServiceResult<InitiateJobOutput> {
        Ok(InitiateJobOutput {
            location: response.header_string("location"),
            job_id: response.header_string("x-amz-job-id"),
            job_output_path: response.header_string("x-amz-job-output-path"),
        })
    }
}

/// Input for `DescribeJob`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeJobRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Job id.
    #[serde(skip)]
    pub job_id: Option<String>,
}

crate::request_setters!(DescribeJobRequest {
    account_id: String,
    vault_name: String,
    job_id: String,
});

impl Operation for DescribeJobRequest {
    type Output = GlacierJobDescription;
    const NAME: &'static str = "DescribeJob";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)?;
        require(Self::NAME, "JobId", &self.job_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name)
            .literal("/jobs/")
            .param(&self.job_id))
    }
}

/// Input for `ListJobs`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListJobsRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub limit: Option<i32>,
    /// Continuation marker.
    #[serde(skip)]
    pub marker: Option<String>,
    /// Filter by status code.
    #[serde(skip)]
    pub statuscode: Option<String>,
    /// Filter by completion.
    #[serde(skip)]
    pub completed: Option<bool>,
}

crate::request_setters!(ListJobsRequest {
    account_id: String,
    vault_name: String,
    limit: i32,
    marker: String,
    statuscode: String,
    completed: bool,
});

/// Output of `ListJobs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListJobsOutput {
    /// Jobs on this page.
    #[serde(default)]
    pub job_list: Vec<GlacierJobDescription>,
    /// Marker for the next page.
    pub marker: Option<String>,
}

impl Operation for ListJobsRequest {
    type Output = ListJobsOutput;
    const NAME: &'static str = "ListJobs";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name)
            .literal("/jobs")
            .query_opt("limit", &self.limit)
            .query_opt("marker", &self.marker)
            .query_opt("statuscode", &self.statuscode)
            .query_opt("completed", &self.completed))
    }
}

impl Paginated for ListJobsRequest {
    fn next_token(output: &ListJobsOutput) -> Option<String> {
        output.marker.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

/// Input for `GetJobOutput`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetJobOutputRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Job id.
    #[serde(skip)]
    pub job_id: Option<String>,
    /// Byte range, e.g. `bytes=0-1048575`.
    #[serde(skip)]
    pub range: Option<String>,
}

crate::request_setters!(GetJobOutputRequest {
    account_id: String,
    vault_name: String,
    job_id: String,
    range: String,
});

/// Output of `GetJobOutput`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetJobOutputOutput {
    /// Job output bytes.
    #[serde(skip)]
    pub body: Bytes,
    /// Tree hash of the returned range, when it is tree-hash aligned.
    #[serde(skip)]
    pub checksum: Option<String>,
    /// HTTP status: 200 for the whole output, 206 for a range.
    #[serde(skip)]
    pub status: u16,
    /// Returned range.
    #[serde(skip)]
    pub content_range: Option<String>,
    /// Range units the service accepts.
    #[serde(skip)]
    pub accept_ranges: Option<String>,
    /// Content type of the output.
    #[serde(skip)]
    pub content_type: Option<String>,
    /// Archive description given at upload.
    #[serde(skip)]
    pub archive_description: Option<String>,
}

impl Operation for GetJobOutputRequest {
    type Output = GetJobOutputOutput;
    const NAME: &'static str = "GetJobOutput";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)?;
        require(Self::NAME, "JobId", &self.job_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name)
            .literal("/jobs/")
            .param(&self.job_id)
            .literal("/output"))
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        self.range
            .iter()
            .map(|range| ("range", range.clone()))
            .collect()
    }

    fn parse(response: &AwsResponse) -> ServiceResult<GetJobOutputOutput> {
        Ok(GetJobOutputOutput {
            body: response.body().clone(),
            checksum: response.header_string("x-amz-sha256-tree-hash"),
            status: response.status(),
            content_range: response.header_string("content-range"),
            accept_ranges: response.header_string("accept-ranges"),
            content_type: response.header_string("content-type"),
            archive_description: response.header_string("x-amz-archive-description"),
        })
    }
}

/// Input for `UploadArchive`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadArchiveRequest {
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Archive description.
    #[serde(skip)]
    pub archive_description: Option<String>,
    /// Tree hash of the body; computed when unset.
    #[serde(skip)]
    pub checksum: Option<String>,
    /// Archive bytes.
    #[serde(skip)]
    pub body: Option<Bytes>,
}

crate::request_setters!(UploadArchiveRequest {
    vault_name: String,
    account_id: String,
    archive_description: String,
    checksum: String,
    body: Bytes,
});

/// Output of `UploadArchive`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchiveCreationOutput {
    /// Relative URI of the archive.
    #[serde(skip)]
    pub location: Option<String>,
    /// Tree hash computed by the service.
    #[serde(skip)]
    pub checksum: Option<String>,
    /// Archive id.
    #[serde(skip)]
    pub archive_id: Option<String>,
}

impl Operation for UploadArchiveRequest {
    type Output = ArchiveCreationOutput;
    const NAME: &'static str = "UploadArchive";
    const CONTENT_TYPE: Option<&'static str> = Some("application/octet-stream");

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "VaultName", &self.vault_name)?;
        require(Self::NAME, "AccountId", &self.account_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name).literal("/archives"))
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(description) = &self.archive_description {
            headers.push(("x-amz-archive-description", description.clone()));
        }
        let checksum = match &self.checksum {
            Some(checksum) => checksum.clone(),
            None => tree_hash(self.body.as_deref().unwrap_or_default()),
        };
        headers.push(("x-amz-sha256-tree-hash", checksum));
        headers
    }

    fn body(&self) -> ServiceResult<Option<Bytes>> {
        Ok(Some(self.body.clone().unwrap_or_default()))
    }

    fn parse(response: &AwsResponse) -> ServiceResult<ArchiveCreationOutput> {
        Ok(ArchiveCreationOutput {
            location: response.header_string("location"),
            checksum: response.header_string("x-amz-sha256-tree-hash"),
            archive_id: response.header_string("x-amz-archive-id"),
        })
    }
}

/// Input for `DeleteArchive`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteArchiveRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Archive id.
    #[serde(skip)]
    pub archive_id: Option<String>,
}

crate::request_setters!(DeleteArchiveRequest {
    account_id: String,
    vault_name: String,
    archive_id: String,
});

impl Operation for DeleteArchiveRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteArchive";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)?;
        require(Self::NAME, "ArchiveId", &self.archive_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name)
            .literal("/archives/")
            .param(&self.archive_id))
    }
}

/// Input for `AddTagsToVault`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToVaultRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Tags to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(AddTagsToVaultRequest {
    account_id: String,
    vault_name: String,
    tags: Tags,
});

impl Operation for AddTagsToVaultRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "AddTagsToVault";

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name)
            .literal("/tags")
            .query("operation", "add"))
    }
}

/// Input for `RemoveTagsFromVault`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsFromVaultRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Keys of the tags to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

crate::request_setters!(RemoveTagsFromVaultRequest {
    account_id: String,
    vault_name: String,
    tag_keys: Vec<String>,
});

impl Operation for RemoveTagsFromVaultRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "RemoveTagsFromVault";

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name)
            .literal("/tags")
            .query("operation", "remove"))
    }
}

/// Input for `ListTagsForVault`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTagsForVaultRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
}

crate::request_setters!(ListTagsForVaultRequest {
    account_id: String,
    vault_name: String,
});

/// Output of `ListTagsForVault`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForVaultOutput {
    /// Vault tags.
    pub tags: Option<Tags>,
}

impl Operation for ListTagsForVaultRequest {
    type Output = ListTagsForVaultOutput;
    const NAME: &'static str = "ListTagsForVault";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name).literal("/tags"))
    }
}

/// Input for `SetVaultNotifications`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetVaultNotificationsRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
    /// Notification settings, sent as the whole body.
    #[serde(skip)]
    pub vault_notification_config: Option<VaultNotificationConfig>,
}

crate::request_setters!(SetVaultNotificationsRequest {
    account_id: String,
    vault_name: String,
    vault_notification_config: VaultNotificationConfig,
});

impl Operation for SetVaultNotificationsRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "SetVaultNotifications";
    const METHOD: HttpMethod = HttpMethod::PUT;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name).literal("/notification-configuration"))
    }

    fn body(&self) -> ServiceResult<Option<Bytes>> {
        let config = self.vault_notification_config.clone().unwrap_or_default();
        Ok(Some(Bytes::from(serde_json::to_vec(&config)?)))
    }
}

/// Input for `GetVaultNotifications`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetVaultNotificationsRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
}

crate::request_setters!(GetVaultNotificationsRequest {
    account_id: String,
    vault_name: String,
});

/// Output of `GetVaultNotifications`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetVaultNotificationsOutput {
    /// Notification settings, read from the whole body.
    #[serde(skip)]
    pub vault_notification_config: Option<VaultNotificationConfig>,
}

impl Operation for GetVaultNotificationsRequest {
    type Output = GetVaultNotificationsOutput;
    const NAME: &'static str = "GetVaultNotifications";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name).literal("/notification-configuration"))
    }

    fn parse(response: &AwsResponse) -> ServiceResult<GetVaultNotificationsOutput> {
        Ok(GetVaultNotificationsOutput {
            vault_notification_config: Some(response.json_or_default()?),
        })
    }
}

/// Input for `DeleteVaultNotifications`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteVaultNotificationsRequest {
    /// Account id, or `-` for the signing account.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Vault name.
    #[serde(skip)]
    pub vault_name: Option<String>,
}

crate::request_setters!(DeleteVaultNotificationsRequest {
    account_id: String,
    vault_name: String,
});

impl Operation for DeleteVaultNotificationsRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteVaultNotifications";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require_vault(Self::NAME, &self.account_id, &self.vault_name)
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(vault_uri(&self.account_id, &self.vault_name).literal("/notification-configuration"))
    }
}
