//! Shapes shared by Glacier operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vault description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVaultOutput {
    /// Vault ARN.
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    /// Vault name.
    pub vault_name: Option<String>,
    /// Creation time.
    pub creation_date: Option<DateTime<Utc>>,
    /// Time of the last inventory.
    pub last_inventory_date: Option<DateTime<Utc>>,
    /// Archives as of the last inventory.
    pub number_of_archives: Option<i64>,
    /// Size as of the last inventory.
    pub size_in_bytes: Option<i64>,
}

/// Inventory retrieval window and paging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryRetrievalJobInput {
    /// Start of the window, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of the window, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Maximum inventory items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    /// Continuation marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Parameters of a retrieval job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobParameters {
    /// `CSV` or `JSON` for inventory jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// `archive-retrieval`, `inventory-retrieval` or `select`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Archive to retrieve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<String>,
    /// Job description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Topic notified on completion.
    #[serde(rename = "SNSTopic", skip_serializing_if = "Option::is_none")]
    pub sns_topic: Option<String>,
    /// Byte range to retrieve, `start-end`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_byte_range: Option<String>,
    /// `Expedited`, `Standard` or `Bulk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Inventory options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_retrieval_parameters: Option<InventoryRetrievalJobInput>,
}

/// Job description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlacierJobDescription {
    /// Job id.
    pub job_id: Option<String>,
    /// Description given at initiation.
    pub job_description: Option<String>,
    /// `ArchiveRetrieval`, `InventoryRetrieval` or `Select`.
    pub action: Option<String>,
    /// Archive being retrieved.
    pub archive_id: Option<String>,
    /// Vault ARN.
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    /// Creation time.
    pub creation_date: Option<DateTime<Utc>>,
    /// Whether the job finished.
    pub completed: Option<bool>,
    /// `InProgress`, `Succeeded` or `Failed`.
    pub status_code: Option<String>,
    /// Status detail.
    pub status_message: Option<String>,
    /// Archive size.
    pub archive_size_in_bytes: Option<i64>,
    /// Inventory size.
    pub inventory_size_in_bytes: Option<i64>,
    /// Notification topic.
    #[serde(rename = "SNSTopic")]
    pub sns_topic: Option<String>,
    /// Completion time.
    pub completion_date: Option<DateTime<Utc>>,
    /// Tree hash of the retrieved range.
    #[serde(rename = "SHA256TreeHash")]
    pub sha256_tree_hash: Option<String>,
    /// Tree hash of the whole archive.
    #[serde(rename = "ArchiveSHA256TreeHash")]
    pub archive_sha256_tree_hash: Option<String>,
    /// Retrieved byte range.
    pub retrieval_byte_range: Option<String>,
    /// Retrieval tier.
    pub tier: Option<String>,
}

/// Notification settings of a vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultNotificationConfig {
    /// Topic ARN.
    #[serde(rename = "SNSTopic", skip_serializing_if = "Option::is_none")]
    pub sns_topic: Option<String>,
    /// `ArchiveRetrievalCompleted` and/or `InventoryRetrievalCompleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}
