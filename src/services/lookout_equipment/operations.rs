//! Lookout for Equipment requests and outputs.
//!
//! Every member travels in the JSON body; requests go to `POST /` with the
//! operation in `X-Amz-Target`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{
    DataPreProcessingConfiguration, DatasetSchema, DatasetSummary, InferenceInputConfiguration,
    InferenceOutputConfiguration, IngestionInputConfiguration, LabelsInputConfiguration,
    ModelSummary, Tag,
};
use crate::error::ServiceResult;
use crate::operation::{require, serialize_token, Operation, Paginated};

/// Input for `CreateDataset`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatasetRequest {
    /// Dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    /// Schema of the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_schema: Option<DatasetSchema>,
    /// KMS key for data at rest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_kms_key_id: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

crate::request_setters!(CreateDatasetRequest {
    dataset_name: String,
    dataset_schema: DatasetSchema,
    server_side_kms_key_id: String,
    client_token: String,
    tags: Vec<Tag>,
});

/// Output of `CreateDataset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatasetOutput {
    /// Dataset name.
    pub dataset_name: Option<String>,
    /// Dataset ARN.
    pub dataset_arn: Option<String>,
    /// Dataset status.
    pub status: Option<String>,
}

impl Operation for CreateDatasetRequest {
    type Output = CreateDatasetOutput;
    const NAME: &'static str = "CreateDataset";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetName", &self.dataset_name)?;
        Ok(())
    }
}

/// Input for `DescribeDataset`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDatasetRequest {
    /// Dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
}

crate::request_setters!(DescribeDatasetRequest { dataset_name: String });

/// Output of `DescribeDataset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDatasetOutput {
    /// Dataset name.
    pub dataset_name: Option<String>,
    /// Dataset ARN.
    pub dataset_arn: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Dataset status.
    pub status: Option<String>,
    /// Schema document.
    pub schema: Option<String>,
    /// KMS key.
    pub server_side_kms_key_id: Option<String>,
    /// Configuration of the last ingestion.
    pub ingestion_input_configuration: Option<IngestionInputConfiguration>,
    /// Start of the ingested data.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub data_start_time: Option<DateTime<Utc>>,
    /// End of the ingested data.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub data_end_time: Option<DateTime<Utc>>,
    /// Role used for ingestion.
    pub role_arn: Option<String>,
}

impl Operation for DescribeDatasetRequest {
    type Output = DescribeDatasetOutput;
    const NAME: &'static str = "DescribeDataset";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetName", &self.dataset_name)?;
        Ok(())
    }
}

/// Input for `ListDatasets`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDatasetsRequest {
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Only datasets whose name starts with this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name_begins_with: Option<String>,
}

crate::request_setters!(ListDatasetsRequest {
    next_token: String,
    max_results: i32,
    dataset_name_begins_with: String,
});

/// Output of `ListDatasets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDatasetsOutput {
    /// Token for the next page.
    pub next_token: Option<String>,
    /// Datasets on this page.
    #[serde(default)]
    pub dataset_summaries: Vec<DatasetSummary>,
}

impl Operation for ListDatasetsRequest {
    type Output = ListDatasetsOutput;
    const NAME: &'static str = "ListDatasets";
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
#[serde(rename_all = "PascalCase")]
pub struct DeleteDatasetRequest {
    /// Dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
}

crate::request_setters!(DeleteDatasetRequest { dataset_name: String });

/// Output of operations that return no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyOutput {}

impl Operation for DeleteDatasetRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteDataset";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetName", &self.dataset_name)?;
        Ok(())
    }
}

/// Input for `StartDataIngestionJob`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDataIngestionJobRequest {
    /// Dataset to ingest into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    /// Input location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_input_configuration: Option<IngestionInputConfiguration>,
    /// Role with read access to the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
}

crate::request_setters!(StartDataIngestionJobRequest {
    dataset_name: String,
    ingestion_input_configuration: IngestionInputConfiguration,
    role_arn: String,
    client_token: String,
});

/// Output of `StartDataIngestionJob`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDataIngestionJobOutput {
    /// Job id.
    pub job_id: Option<String>,
    /// Job status.
    pub status: Option<String>,
}

impl Operation for StartDataIngestionJobRequest {
    type Output = StartDataIngestionJobOutput;
    const NAME: &'static str = "StartDataIngestionJob";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DatasetName", &self.dataset_name)?;
        require(
            Self::NAME,
            "IngestionInputConfiguration",
            &self.ingestion_input_configuration,
        )?;
        require(Self::NAME, "RoleArn", &self.role_arn)?;
        Ok(())
    }
}

/// Input for `DescribeDataIngestionJob`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataIngestionJobRequest {
    /// Job id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

crate::request_setters!(DescribeDataIngestionJobRequest { job_id: String });

/// Output of `DescribeDataIngestionJob`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataIngestionJobOutput {
    /// Job id.
    pub job_id: Option<String>,
    /// Target dataset ARN.
    pub dataset_arn: Option<String>,
    /// Input location.
    pub ingestion_input_configuration: Option<IngestionInputConfiguration>,
    /// Role used.
    pub role_arn: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub created_at: Option<DateTime<Utc>>,
    /// `IN_PROGRESS`, `SUCCESS` or `FAILED`.
    pub status: Option<String>,
    /// Failure reason.
    pub failed_reason: Option<String>,
}

impl Operation for DescribeDataIngestionJobRequest {
    type Output = DescribeDataIngestionJobOutput;
    const NAME: &'static str = "DescribeDataIngestionJob";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "JobId", &self.job_id)?;
        Ok(())
    }
}

/// Input for `CreateModel`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelRequest {
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Training dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    /// Subset of the dataset schema to train on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_schema: Option<DatasetSchema>,
    /// Label source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_input_configuration: Option<LabelsInputConfiguration>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Start of the training window.
    #[serde(
        serialize_with = "crate::types::epoch_seconds::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_data_start_time: Option<DateTime<Utc>>,
    /// End of the training window.
    #[serde(
        serialize_with = "crate::types::epoch_seconds::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_data_end_time: Option<DateTime<Utc>>,
    /// Start of the evaluation window.
    #[serde(
        serialize_with = "crate::types::epoch_seconds::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub evaluation_data_start_time: Option<DateTime<Utc>>,
    /// End of the evaluation window.
    #[serde(
        serialize_with = "crate::types::epoch_seconds::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub evaluation_data_end_time: Option<DateTime<Utc>>,
    /// Role with access to the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Resampling before training.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pre_processing_configuration: Option<DataPreProcessingConfiguration>,
    /// KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_kms_key_id: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Condition marking the asset as off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_condition: Option<String>,
}

crate::request_setters!(CreateModelRequest {
    model_name: String,
    dataset_name: String,
    dataset_schema: DatasetSchema,
    labels_input_configuration: LabelsInputConfiguration,
    client_token: String,
    training_data_start_time: DateTime<Utc>,
    training_data_end_time: DateTime<Utc>,
    evaluation_data_start_time: DateTime<Utc>,
    evaluation_data_end_time: DateTime<Utc>,
    role_arn: String,
    data_pre_processing_configuration: DataPreProcessingConfiguration,
    server_side_kms_key_id: String,
    tags: Vec<Tag>,
    off_condition: String,
});

/// Output of `CreateModel`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelOutput {
    /// Model ARN.
    pub model_arn: Option<String>,
    /// Training status.
    pub status: Option<String>,
}

impl Operation for CreateModelRequest {
    type Output = CreateModelOutput;
    const NAME: &'static str = "CreateModel";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ModelName", &self.model_name)?;
        require(Self::NAME, "DatasetName", &self.dataset_name)?;
        Ok(())
    }
}

/// Input for `DescribeModel`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelRequest {
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

crate::request_setters!(DescribeModelRequest { model_name: String });

/// Output of `DescribeModel`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelOutput {
    /// Model name.
    pub model_name: Option<String>,
    /// Model ARN.
    pub model_arn: Option<String>,
    /// Training dataset name.
    pub dataset_name: Option<String>,
    /// Training dataset ARN.
    pub dataset_arn: Option<String>,
    /// Schema used.
    pub schema: Option<String>,
    /// Label source.
    pub labels_input_configuration: Option<LabelsInputConfiguration>,
    /// Start of the training window.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub training_data_start_time: Option<DateTime<Utc>>,
    /// End of the training window.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub training_data_end_time: Option<DateTime<Utc>>,
    /// `IN_PROGRESS`, `SUCCESS` or `FAILED`.
    pub status: Option<String>,
    /// Failure reason.
    pub failed_reason: Option<String>,
    /// Evaluation metrics as a JSON string.
    pub model_metrics: Option<String>,
    /// Creation time.
    #[serde(default, with = "crate::types::epoch_seconds")]
    pub created_at: Option<DateTime<Utc>>,
    /// Role used.
    pub role_arn: Option<String>,
    /// Off condition.
    pub off_condition: Option<String>,
}

impl Operation for DescribeModelRequest {
    type Output = DescribeModelOutput;
    const NAME: &'static str = "DescribeModel";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ModelName", &self.model_name)?;
        Ok(())
    }
}

/// Input for `ListModels`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListModelsRequest {
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Filter by status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by model name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name_begins_with: Option<String>,
    /// Filter by dataset name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name_begins_with: Option<String>,
}

crate::request_setters!(ListModelsRequest {
    next_token: String,
    max_results: i32,
    status: String,
    model_name_begins_with: String,
    dataset_name_begins_with: String,
});

/// Output of `ListModels`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListModelsOutput {
    /// Token for the next page.
    pub next_token: Option<String>,
    /// Models on this page.
    #[serde(default)]
    pub model_summaries: Vec<ModelSummary>,
}

impl Operation for ListModelsRequest {
    type Output = ListModelsOutput;
    const NAME: &'static str = "ListModels";
}

impl Paginated for ListModelsRequest {
    fn next_token(output: &ListModelsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `DeleteModel`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteModelRequest {
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

crate::request_setters!(DeleteModelRequest { model_name: String });

impl Operation for DeleteModelRequest {
    type Output = EmptyOutput;
    const NAME: &'static str = "DeleteModel";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ModelName", &self.model_name)?;
        Ok(())
    }
}

/// Input for `CreateInferenceScheduler`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInferenceSchedulerRequest {
    /// Model to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Scheduler name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_scheduler_name: Option<String>,
    /// Minutes to wait for late data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_delay_offset_in_minutes: Option<i64>,
    /// `PT5M`, `PT10M`, `PT15M`, `PT30M` or `PT1H`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_upload_frequency: Option<String>,
    /// Input location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_input_configuration: Option<InferenceInputConfiguration>,
    /// Output location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_output_configuration: Option<InferenceOutputConfiguration>,
    /// Role with access to both locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_kms_key_id: Option<String>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

crate::request_setters!(CreateInferenceSchedulerRequest {
    model_name: String,
    inference_scheduler_name: String,
    data_delay_offset_in_minutes: i64,
    data_upload_frequency: String,
    data_input_configuration: InferenceInputConfiguration,
    data_output_configuration: InferenceOutputConfiguration,
    role_arn: String,
    server_side_kms_key_id: String,
    client_token: String,
    tags: Vec<Tag>,
});

/// Output of `CreateInferenceScheduler`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInferenceSchedulerOutput {
    /// Scheduler ARN.
    pub inference_scheduler_arn: Option<String>,
    /// Scheduler name.
    pub inference_scheduler_name: Option<String>,
    /// Scheduler status.
    pub status: Option<String>,
}

impl Operation for CreateInferenceSchedulerRequest {
    type Output = CreateInferenceSchedulerOutput;
    const NAME: &'static str = "CreateInferenceScheduler";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "ModelName", &self.model_name)?;
        require(Self::NAME, "InferenceSchedulerName", &self.inference_scheduler_name)?;
        require(Self::NAME, "DataUploadFrequency", &self.data_upload_frequency)?;
        require(Self::NAME, "DataInputConfiguration", &self.data_input_configuration)?;
        require(Self::NAME, "DataOutputConfiguration", &self.data_output_configuration)?;
        require(Self::NAME, "RoleArn", &self.role_arn)?;
        Ok(())
    }
}

/// Output of starting or stopping an inference scheduler.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InferenceSchedulerStateOutput {
    /// Model ARN.
    pub model_arn: Option<String>,
    /// Model name.
    pub model_name: Option<String>,
    /// Scheduler name.
    pub inference_scheduler_name: Option<String>,
    /// Scheduler ARN.
    pub inference_scheduler_arn: Option<String>,
    /// `PENDING`, `RUNNING`, `STOPPING` or `STOPPED`.
    pub status: Option<String>,
}

/// Input for `StartInferenceScheduler`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartInferenceSchedulerRequest {
    /// Scheduler name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_scheduler_name: Option<String>,
}

crate::request_setters!(StartInferenceSchedulerRequest {
    inference_scheduler_name: String
});

impl Operation for StartInferenceSchedulerRequest {
    type Output = InferenceSchedulerStateOutput;
    const NAME: &'static str = "StartInferenceScheduler";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "InferenceSchedulerName", &self.inference_scheduler_name)?;
        Ok(())
    }
}

/// Input for `StopInferenceScheduler`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopInferenceSchedulerRequest {
    /// Scheduler name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_scheduler_name: Option<String>,
}

crate::request_setters!(StopInferenceSchedulerRequest {
    inference_scheduler_name: String
});

impl Operation for StopInferenceSchedulerRequest {
    type Output = InferenceSchedulerStateOutput;
    const NAME: &'static str = "StopInferenceScheduler";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "InferenceSchedulerName", &self.inference_scheduler_name)?;
        Ok(())
    }
}
