//! Amazon S3 Glacier.
//!
//! Every call carries the `x-amz-glacier-version` header. Archive uploads
//! need a SHA-256 tree hash of the payload; [`UploadArchiveRequest`]
//! computes it with [`tree_hash`] when the caller does not supply one.

pub mod model;
mod operations;
pub mod tree_hash;

pub use operations::*;
pub use tree_hash::tree_hash;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for Glacier.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "Glacier",
    endpoint_prefix: "glacier",
    signing_name: "glacier",
    api_version: "2012-06-01",
    protocol: Protocol::RestJson1,
    default_headers: &[("x-amz-glacier-version", "2012-06-01")],
};

crate::define_client! {
    /// Client for Amazon S3 Glacier.
    pub struct GlacierClient;
    metadata = METADATA;
    operations {
        /// Create a vault.
        create_vault, create_vault_callable, create_vault_async => CreateVaultRequest;
        /// Describe a vault.
        describe_vault, describe_vault_callable, describe_vault_async => DescribeVaultRequest;
        /// Delete an empty vault.
        delete_vault, delete_vault_callable, delete_vault_async => DeleteVaultRequest;
        /// List vaults.
        list_vaults, list_vaults_callable, list_vaults_async => ListVaultsRequest;
        /// Start a retrieval or inventory job.
        initiate_job, initiate_job_callable, initiate_job_async => InitiateJobRequest;
        /// Describe a job.
        describe_job, describe_job_callable, describe_job_async => DescribeJobRequest;
        /// List the jobs of a vault.
        list_jobs, list_jobs_callable, list_jobs_async => ListJobsRequest;
        /// Download the output of a finished job.
        get_job_output, get_job_output_callable, get_job_output_async => GetJobOutputRequest;
        /// Upload an archive in one request.
        upload_archive, upload_archive_callable, upload_archive_async => UploadArchiveRequest;
        /// Delete an archive.
        delete_archive, delete_archive_callable, delete_archive_async => DeleteArchiveRequest;
        /// Add tags to a vault.
        add_tags_to_vault, add_tags_to_vault_callable, add_tags_to_vault_async => AddTagsToVaultRequest;
        /// Remove tags from a vault.
        remove_tags_from_vault, remove_tags_from_vault_callable, remove_tags_from_vault_async => RemoveTagsFromVaultRequest;
        /// List the tags of a vault.
        list_tags_for_vault, list_tags_for_vault_callable, list_tags_for_vault_async => ListTagsForVaultRequest;
        /// Configure vault notifications.
        set_vault_notifications, set_vault_notifications_callable, set_vault_notifications_async => SetVaultNotificationsRequest;
        /// Read vault notification settings.
        get_vault_notifications, get_vault_notifications_callable, get_vault_notifications_async => GetVaultNotificationsRequest;
        /// Remove vault notification settings.
        delete_vault_notifications, delete_vault_notifications_callable, delete_vault_notifications_async => DeleteVaultNotificationsRequest;
    }
}
