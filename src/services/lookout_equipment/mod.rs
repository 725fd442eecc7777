//! Amazon Lookout for Equipment.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for Lookout for Equipment.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "LookoutEquipment",
    endpoint_prefix: "lookoutequipment",
    signing_name: "lookoutequipment",
    api_version: "2020-12-15",
    protocol: Protocol::AwsJson {
        version: "1.0",
        target_prefix: "AWSLookoutEquipmentFrontendService",
    },
    default_headers: &[],
};

crate::define_client! {
    /// Client for Amazon Lookout for Equipment.
    pub struct LookoutEquipmentClient;
    metadata = METADATA;
    operations {
        /// Create a dataset.
        create_dataset, create_dataset_callable, create_dataset_async => CreateDatasetRequest;
        /// Describe a dataset.
        describe_dataset, describe_dataset_callable, describe_dataset_async => DescribeDatasetRequest;
        /// List datasets.
        list_datasets, list_datasets_callable, list_datasets_async => ListDatasetsRequest;
        /// Delete a dataset.
        delete_dataset, delete_dataset_callable, delete_dataset_async => DeleteDatasetRequest;
        /// Start ingesting data into a dataset.
        start_data_ingestion_job, start_data_ingestion_job_callable, start_data_ingestion_job_async => StartDataIngestionJobRequest;
        /// Describe an ingestion job.
        describe_data_ingestion_job, describe_data_ingestion_job_callable, describe_data_ingestion_job_async => DescribeDataIngestionJobRequest;
        /// Train a model.
        create_model, create_model_callable, create_model_async => CreateModelRequest;
        /// Describe a model.
        describe_model, describe_model_callable, describe_model_async => DescribeModelRequest;
        /// List models.
        list_models, list_models_callable, list_models_async => ListModelsRequest;
        /// Delete a model.
        delete_model, delete_model_callable, delete_model_async => DeleteModelRequest;
        /// Schedule inference for a model.
        create_inference_scheduler, create_inference_scheduler_callable, create_inference_scheduler_async => CreateInferenceSchedulerRequest;
        /// Start an inference scheduler.
        start_inference_scheduler, start_inference_scheduler_callable, start_inference_scheduler_async => StartInferenceSchedulerRequest;
        /// Stop an inference scheduler.
        stop_inference_scheduler, stop_inference_scheduler_callable, stop_inference_scheduler_async => StopInferenceSchedulerRequest;
    }
}
