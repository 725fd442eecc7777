//! Every required field is checked before anything is sent.

use aws_services::mocks::{test_config, MockResponse, MockTransport};
use aws_services::{ClientBuilder, FromServiceClient, ServiceError, ServiceResult, MISSING_PARAMETER};
use std::collections::HashMap;
use std::sync::Arc;

fn client<C: FromServiceClient>(transport: &Arc<MockTransport>) -> C {
    ClientBuilder::<C>::new(test_config())
        .shared_transport(transport.clone())
        .build()
        .unwrap()
}

fn transport() -> Arc<MockTransport> {
    Arc::new(MockTransport::with_default(MockResponse::json(serde_json::json!({}))))
}

#[track_caller]
fn assert_missing<T>(outcome: ServiceResult<T>, field: &str) {
    let err = match outcome {
        Ok(_) => panic!("expected [{}] to be reported missing", field),
        Err(err) => err,
    };
    assert!(matches!(err, ServiceError::MissingParameter { .. }), "{:?}", err);
    assert_eq!(err.error_code(), Some(MISSING_PARAMETER));
    assert_eq!(err.missing_field(), Some(field));
    assert_eq!(err.to_string(), format!("Missing required field [{}]", field));
    assert!(!err.is_retryable());
}

fn tags() -> HashMap<String, String> {
    HashMap::from([("team".to_string(), "ops".to_string())])
}

mod connect_cases {
    use super::*;
    use aws_services::services::connect_cases::model::{
        FieldIdentifier, FieldValue, FieldValueUnion, RelatedItemInputContent,
    };
    use aws_services::services::connect_cases::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: ConnectCasesClient = client(&transport);

        assert_missing(c.create_domain(CreateDomainRequest::default()).await, "Name");
        assert_missing(c.get_domain(GetDomainRequest::default()).await, "DomainId");
        assert_missing(c.delete_domain(DeleteDomainRequest::default()).await, "DomainId");

        assert_missing(c.create_case(CreateCaseRequest::default()).await, "DomainId");
        assert_missing(
            c.create_case(CreateCaseRequest::default().domain_id("d")).await,
            "TemplateId",
        );
        assert_missing(
            c.create_case(CreateCaseRequest::default().domain_id("d").template_id("t"))
                .await,
            "Fields",
        );

        assert_missing(c.get_case(GetCaseRequest::default()).await, "CaseId");
        assert_missing(c.get_case(GetCaseRequest::default().case_id("c")).await, "DomainId");
        assert_missing(
            c.get_case(GetCaseRequest::default().case_id("c").domain_id("d")).await,
            "Fields",
        );

        assert_missing(c.update_case(UpdateCaseRequest::default()).await, "CaseId");
        assert_missing(
            c.update_case(UpdateCaseRequest::default().case_id("c")).await,
            "DomainId",
        );
        assert_missing(
            c.update_case(UpdateCaseRequest::default().case_id("c").domain_id("d"))
                .await,
            "Fields",
        );

        assert_missing(c.search_cases(SearchCasesRequest::default()).await, "DomainId");

        assert_missing(c.create_field(CreateFieldRequest::default()).await, "DomainId");
        assert_missing(
            c.create_field(CreateFieldRequest::default().domain_id("d")).await,
            "Name",
        );
        assert_missing(
            c.create_field(CreateFieldRequest::default().domain_id("d").name("n"))
                .await,
            "Type",
        );

        assert_missing(c.list_fields(ListFieldsRequest::default()).await, "DomainId");

        assert_missing(c.create_template(CreateTemplateRequest::default()).await, "DomainId");
        assert_missing(
            c.create_template(CreateTemplateRequest::default().domain_id("d")).await,
            "Name",
        );

        let item = CreateRelatedItemRequest::default();
        assert_missing(c.create_related_item(item.clone()).await, "CaseId");
        let item = item.case_id("c");
        assert_missing(c.create_related_item(item.clone()).await, "DomainId");
        let item = item.domain_id("d");
        assert_missing(c.create_related_item(item.clone()).await, "Type");
        let item = item.item_type("Comment");
        assert_missing(c.create_related_item(item).await, "Content");

        assert_missing(c.tag_resource(TagResourceRequest::default()).await, "Arn");
        assert_missing(
            c.tag_resource(TagResourceRequest::default().arn("arn:aws:cases:::domain/d"))
                .await,
            "Tags",
        );
        assert_missing(c.untag_resource(UntagResourceRequest::default()).await, "Arn");
        assert_missing(
            c.untag_resource(UntagResourceRequest::default().arn("a")).await,
            "TagKeys",
        );
        assert_missing(
            c.list_tags_for_resource(ListTagsForResourceRequest::default()).await,
            "Arn",
        );

        assert_eq!(transport.request_count(), 0);

        // Fully populated requests do reach the transport.
        c.create_case(
            CreateCaseRequest::default()
                .domain_id("d")
                .template_id("t")
                .fields(vec![FieldValue::new("title", FieldValueUnion::string("x"))]),
        )
        .await
        .unwrap();
        c.get_case(
            GetCaseRequest::default()
                .case_id("c")
                .domain_id("d")
                .fields(vec![FieldIdentifier::new("title")]),
        )
        .await
        .unwrap();
        c.create_related_item(
            CreateRelatedItemRequest::default()
                .case_id("c")
                .domain_id("d")
                .item_type("Comment")
                .content(RelatedItemInputContent::default()),
        )
        .await
        .unwrap();
        assert_eq!(transport.request_count(), 3);
    }
}

mod finspace_data {
    use super::*;
    use aws_services::services::finspace_data::model::PermissionGroupParams;
    use aws_services::services::finspace_data::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: FinSpaceDataClient = client(&transport);

        let dataset = CreateDatasetRequest::default();
        assert_missing(c.create_dataset(dataset.clone()).await, "DatasetTitle");
        let dataset = dataset.dataset_title("Prices");
        assert_missing(c.create_dataset(dataset.clone()).await, "Kind");
        let dataset = dataset.kind("TABULAR");
        assert_missing(c.create_dataset(dataset).await, "PermissionGroupParams");

        assert_missing(c.get_dataset(GetDatasetRequest::default()).await, "DatasetId");
        assert_missing(c.delete_dataset(DeleteDatasetRequest::default()).await, "DatasetId");

        let changeset = CreateChangesetRequest::default();
        assert_missing(c.create_changeset(changeset.clone()).await, "DatasetId");
        let changeset = changeset.dataset_id("ds");
        assert_missing(c.create_changeset(changeset.clone()).await, "ChangeType");
        let changeset = changeset.change_type("REPLACE");
        assert_missing(c.create_changeset(changeset.clone()).await, "SourceParams");
        let changeset = changeset.source_params(HashMap::from([(
            "s3SourcePath".to_string(),
            "s3://bucket/prefix".to_string(),
        )]));
        assert_missing(c.create_changeset(changeset).await, "FormatParams");

        assert_missing(c.get_changeset(GetChangesetRequest::default()).await, "DatasetId");
        assert_missing(
            c.get_changeset(GetChangesetRequest::default().dataset_id("ds")).await,
            "ChangesetId",
        );
        assert_missing(
            c.list_changesets(ListChangesetsRequest::default()).await,
            "DatasetId",
        );
        assert_missing(
            c.get_programmatic_access_credentials(
                GetProgrammaticAccessCredentialsRequest::default(),
            )
            .await,
            "EnvironmentId",
        );

        assert_missing(c.create_user(CreateUserRequest::default()).await, "EmailAddress");
        assert_missing(
            c.create_user(CreateUserRequest::default().email_address("a@example.com"))
                .await,
            "Type",
        );
        assert_missing(c.get_user(GetUserRequest::default()).await, "UserId");
        assert_missing(c.list_users(ListUsersRequest::default()).await, "MaxResults");
        assert_missing(c.disable_user(DisableUserRequest::default()).await, "UserId");
        assert_missing(c.enable_user(EnableUserRequest::default()).await, "UserId");

        assert_eq!(transport.request_count(), 0);

        c.create_dataset(
            CreateDatasetRequest::default()
                .dataset_title("Prices")
                .kind("TABULAR")
                .permission_group_params(PermissionGroupParams::default()),
        )
        .await
        .unwrap();
        assert_eq!(transport.request_count(), 1);
    }
}

mod glacier {
    use super::*;
    use aws_services::services::glacier::*;

    #[tokio::test]
    async fn test_vault_operations_require_account_then_vault() {
        let transport = transport();
        let c: GlacierClient = client(&transport);

        assert_missing(c.create_vault(CreateVaultRequest::default()).await, "AccountId");
        assert_missing(
            c.create_vault(CreateVaultRequest::default().account_id("-")).await,
            "VaultName",
        );
        assert_missing(c.describe_vault(DescribeVaultRequest::default()).await, "AccountId");
        assert_missing(
            c.delete_vault(DeleteVaultRequest::default().account_id("-")).await,
            "VaultName",
        );
        assert_missing(c.list_vaults(ListVaultsRequest::default()).await, "AccountId");
        assert_missing(
            c.initiate_job(InitiateJobRequest::default().account_id("-")).await,
            "VaultName",
        );
        assert_missing(
            c.list_jobs(ListJobsRequest::default().account_id("-")).await,
            "VaultName",
        );
        assert_missing(
            c.add_tags_to_vault(AddTagsToVaultRequest::default()).await,
            "AccountId",
        );
        assert_missing(
            c.remove_tags_from_vault(RemoveTagsFromVaultRequest::default().account_id("-"))
                .await,
            "VaultName",
        );
        assert_missing(
            c.list_tags_for_vault(ListTagsForVaultRequest::default()).await,
            "AccountId",
        );
        assert_missing(
            c.set_vault_notifications(SetVaultNotificationsRequest::default()).await,
            "AccountId",
        );
        assert_missing(
            c.get_vault_notifications(GetVaultNotificationsRequest::default().account_id("-"))
                .await,
            "VaultName",
        );
        assert_missing(
            c.delete_vault_notifications(DeleteVaultNotificationsRequest::default())
                .await,
            "AccountId",
        );

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_job_and_archive_operations() {
        let transport = transport();
        let c: GlacierClient = client(&transport);

        assert_missing(
            c.describe_job(DescribeJobRequest::default().account_id("-").vault_name("v"))
                .await,
            "JobId",
        );
        assert_missing(c.get_job_output(GetJobOutputRequest::default()).await, "AccountId");
        assert_missing(
            c.get_job_output(GetJobOutputRequest::default().account_id("-").vault_name("v"))
                .await,
            "JobId",
        );
        assert_missing(
            c.delete_archive(DeleteArchiveRequest::default().account_id("-").vault_name("v"))
                .await,
            "ArchiveId",
        );

        // Upload checks the vault name first.
        assert_missing(c.upload_archive(UploadArchiveRequest::default()).await, "VaultName");
        assert_missing(
            c.upload_archive(UploadArchiveRequest::default().vault_name("v")).await,
            "AccountId",
        );

        assert_eq!(transport.request_count(), 0);
    }
}

mod iot_sitewise {
    use super::*;
    use aws_services::services::iot_sitewise::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: IoTSiteWiseClient = client(&transport);

        assert_missing(c.create_asset(CreateAssetRequest::default()).await, "AssetName");
        assert_missing(
            c.create_asset(CreateAssetRequest::default().asset_name("pump")).await,
            "AssetModelId",
        );
        assert_missing(c.describe_asset(DescribeAssetRequest::default()).await, "AssetId");
        assert_missing(c.update_asset(UpdateAssetRequest::default()).await, "AssetId");
        assert_missing(
            c.update_asset(UpdateAssetRequest::default().asset_id("a")).await,
            "AssetName",
        );
        assert_missing(c.delete_asset(DeleteAssetRequest::default()).await, "AssetId");

        let associate = AssociateAssetsRequest::default();
        assert_missing(c.associate_assets(associate.clone()).await, "AssetId");
        let associate = associate.asset_id("parent");
        assert_missing(c.associate_assets(associate.clone()).await, "HierarchyId");
        let associate = associate.hierarchy_id("h");
        assert_missing(c.associate_assets(associate).await, "ChildAssetId");

        assert_missing(
            c.create_asset_model(CreateAssetModelRequest::default()).await,
            "AssetModelName",
        );
        assert_missing(
            c.describe_asset_model(DescribeAssetModelRequest::default()).await,
            "AssetModelId",
        );
        assert_missing(
            c.batch_put_asset_property_value(BatchPutAssetPropertyValueRequest::default())
                .await,
            "Entries",
        );

        let portal = CreatePortalRequest::default();
        assert_missing(c.create_portal(portal.clone()).await, "PortalName");
        let portal = portal.portal_name("plant");
        assert_missing(c.create_portal(portal.clone()).await, "PortalContactEmail");
        let portal = portal.portal_contact_email("ops@example.com");
        assert_missing(c.create_portal(portal).await, "RoleArn");
        assert_missing(c.describe_portal(DescribePortalRequest::default()).await, "PortalId");

        assert_eq!(transport.request_count(), 0);
    }
}

mod lookout_equipment {
    use super::*;
    use aws_services::services::lookout_equipment::model::{
        InferenceInputConfiguration, InferenceOutputConfiguration,
    };
    use aws_services::services::lookout_equipment::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: LookoutEquipmentClient = client(&transport);

        assert_missing(c.create_dataset(CreateDatasetRequest::default()).await, "DatasetName");
        assert_missing(
            c.describe_dataset(DescribeDatasetRequest::default()).await,
            "DatasetName",
        );
        assert_missing(c.delete_dataset(DeleteDatasetRequest::default()).await, "DatasetName");
        assert_missing(
            c.start_data_ingestion_job(StartDataIngestionJobRequest::default()).await,
            "DatasetName",
        );
        assert_missing(
            c.start_data_ingestion_job(StartDataIngestionJobRequest::default().dataset_name("d"))
                .await,
            "RoleArn",
        );
        assert_missing(
            c.describe_data_ingestion_job(DescribeDataIngestionJobRequest::default())
                .await,
            "JobId",
        );
        assert_missing(c.create_model(CreateModelRequest::default()).await, "ModelName");
        assert_missing(
            c.create_model(CreateModelRequest::default().model_name("m")).await,
            "DatasetName",
        );
        assert_missing(c.describe_model(DescribeModelRequest::default()).await, "ModelName");
        assert_missing(c.delete_model(DeleteModelRequest::default()).await, "ModelName");

        let scheduler = CreateInferenceSchedulerRequest::default();
        assert_missing(c.create_inference_scheduler(scheduler.clone()).await, "ModelName");
        let scheduler = scheduler.model_name("m");
        assert_missing(
            c.create_inference_scheduler(scheduler.clone()).await,
            "InferenceSchedulerName",
        );
        let scheduler = scheduler.inference_scheduler_name("s");
        assert_missing(
            c.create_inference_scheduler(scheduler.clone()).await,
            "DataUploadFrequency",
        );
        let scheduler = scheduler.data_upload_frequency("PT5M");
        assert_missing(
            c.create_inference_scheduler(scheduler.clone()).await,
            "DataInputConfiguration",
        );
        let scheduler = scheduler.data_input_configuration(InferenceInputConfiguration::default());
        assert_missing(
            c.create_inference_scheduler(scheduler.clone()).await,
            "DataOutputConfiguration",
        );
        let scheduler =
            scheduler.data_output_configuration(InferenceOutputConfiguration::default());
        assert_missing(c.create_inference_scheduler(scheduler).await, "RoleArn");

        assert_missing(
            c.start_inference_scheduler(StartInferenceSchedulerRequest::default())
                .await,
            "InferenceSchedulerName",
        );
        assert_missing(
            c.stop_inference_scheduler(StopInferenceSchedulerRequest::default())
                .await,
            "InferenceSchedulerName",
        );

        assert_eq!(transport.request_count(), 0);
    }
}

mod lookout_metrics {
    use super::*;
    use aws_services::services::lookout_metrics::model::{AnomalyDetectorConfig, Metric};
    use aws_services::services::lookout_metrics::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: LookoutMetricsClient = client(&transport);

        assert_missing(
            c.create_anomaly_detector(CreateAnomalyDetectorRequest::default()).await,
            "AnomalyDetectorName",
        );
        assert_missing(
            c.create_anomaly_detector(
                CreateAnomalyDetectorRequest::default().anomaly_detector_name("d"),
            )
            .await,
            "AnomalyDetectorConfig",
        );
        assert_missing(
            c.describe_anomaly_detector(DescribeAnomalyDetectorRequest::default())
                .await,
            "AnomalyDetectorArn",
        );
        assert_missing(
            c.delete_anomaly_detector(DeleteAnomalyDetectorRequest::default()).await,
            "AnomalyDetectorArn",
        );
        assert_missing(
            c.activate_anomaly_detector(ActivateAnomalyDetectorRequest::default())
                .await,
            "AnomalyDetectorArn",
        );
        assert_missing(
            c.deactivate_anomaly_detector(DeactivateAnomalyDetectorRequest::default())
                .await,
            "AnomalyDetectorArn",
        );
        assert_missing(
            c.back_test_anomaly_detector(BackTestAnomalyDetectorRequest::default())
                .await,
            "AnomalyDetectorArn",
        );

        let metric_set = CreateMetricSetRequest::default();
        assert_missing(c.create_metric_set(metric_set.clone()).await, "AnomalyDetectorArn");
        let metric_set = metric_set.anomaly_detector_arn("arn:d");
        assert_missing(c.create_metric_set(metric_set.clone()).await, "MetricSetName");
        let metric_set = metric_set.metric_set_name("revenue");
        assert_missing(c.create_metric_set(metric_set.clone()).await, "MetricList");
        let metric_set = metric_set.metric_list(vec![Metric {
            metric_name: "revenue".into(),
            aggregation_function: "SUM".into(),
            namespace: None,
        }]);
        assert_missing(c.create_metric_set(metric_set).await, "MetricSource");

        assert_missing(
            c.describe_metric_set(DescribeMetricSetRequest::default()).await,
            "MetricSetArn",
        );

        let alert = CreateAlertRequest::default();
        assert_missing(c.create_alert(alert.clone()).await, "AlertName");
        let alert = alert.alert_name("a");
        assert_missing(c.create_alert(alert.clone()).await, "AnomalyDetectorArn");
        let alert = alert.anomaly_detector_arn("arn:d");
        assert_missing(c.create_alert(alert).await, "Action");

        assert_missing(
            c.list_anomaly_group_summaries(ListAnomalyGroupSummariesRequest::default())
                .await,
            "AnomalyDetectorArn",
        );
        assert_missing(
            c.list_anomaly_group_summaries(
                ListAnomalyGroupSummariesRequest::default().anomaly_detector_arn("arn:d"),
            )
            .await,
            "SensitivityThreshold",
        );

        assert_missing(c.tag_resource(TagResourceRequest::default()).await, "ResourceArn");
        assert_missing(
            c.tag_resource(TagResourceRequest::default().resource_arn("arn:d")).await,
            "Tags",
        );
        assert_missing(
            c.untag_resource(UntagResourceRequest::default().resource_arn("arn:d"))
                .await,
            "TagKeys",
        );
        assert_missing(
            c.list_tags_for_resource(ListTagsForResourceRequest::default()).await,
            "ResourceArn",
        );

        assert_eq!(transport.request_count(), 0);

        c.create_anomaly_detector(
            CreateAnomalyDetectorRequest::default()
                .anomaly_detector_name("d")
                .anomaly_detector_config(AnomalyDetectorConfig::with_frequency("PT1H")),
        )
        .await
        .unwrap();
        assert_eq!(transport.request_count(), 1);
    }
}

mod resilience_hub {
    use super::*;
    use aws_services::services::resilience_hub::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: ResilienceHubClient = client(&transport);

        assert_missing(c.create_app(CreateAppRequest::default()).await, "Name");
        assert_missing(c.describe_app(DescribeAppRequest::default()).await, "AppArn");
        assert_missing(c.delete_app(DeleteAppRequest::default()).await, "AppArn");

        let policy = CreateResiliencyPolicyRequest::default();
        assert_missing(c.create_resiliency_policy(policy.clone()).await, "PolicyName");
        let policy = policy.policy_name("p");
        assert_missing(c.create_resiliency_policy(policy.clone()).await, "Tier");
        let policy = policy.tier("MissionCritical");
        assert_missing(c.create_resiliency_policy(policy).await, "Policy");

        assert_missing(
            c.describe_resiliency_policy(DescribeResiliencyPolicyRequest::default())
                .await,
            "PolicyArn",
        );

        let assessment = StartAppAssessmentRequest::default();
        assert_missing(c.start_app_assessment(assessment.clone()).await, "AppArn");
        let assessment = assessment.app_arn("arn:app");
        assert_missing(c.start_app_assessment(assessment.clone()).await, "AppVersion");
        let assessment = assessment.app_version("release");
        assert_missing(c.start_app_assessment(assessment).await, "AssessmentName");

        assert_missing(
            c.describe_app_assessment(DescribeAppAssessmentRequest::default()).await,
            "AssessmentArn",
        );
        assert_missing(
            c.publish_app_version(PublishAppVersionRequest::default()).await,
            "AppArn",
        );
        assert_missing(
            c.import_resources_to_draft_app_version(
                ImportResourcesToDraftAppVersionRequest::default(),
            )
            .await,
            "AppArn",
        );
        assert_missing(c.tag_resource(TagResourceRequest::default()).await, "ResourceArn");
        assert_missing(
            c.tag_resource(TagResourceRequest::default().resource_arn("arn:app")).await,
            "Tags",
        );
        assert_missing(
            c.list_tags_for_resource(ListTagsForResourceRequest::default()).await,
            "ResourceArn",
        );

        assert_eq!(transport.request_count(), 0);
    }
}

mod schemas {
    use super::*;
    use aws_services::services::schemas::*;

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: SchemasClient = client(&transport);

        assert_missing(c.create_registry(CreateRegistryRequest::default()).await, "RegistryName");
        assert_missing(
            c.describe_registry(DescribeRegistryRequest::default()).await,
            "RegistryName",
        );
        assert_missing(c.delete_registry(DeleteRegistryRequest::default()).await, "RegistryName");

        let schema = CreateSchemaRequest::default();
        assert_missing(c.create_schema(schema.clone()).await, "Content");
        let schema = schema.content("{}");
        assert_missing(c.create_schema(schema.clone()).await, "RegistryName");
        let schema = schema.registry_name("r");
        assert_missing(c.create_schema(schema.clone()).await, "SchemaName");
        let schema = schema.schema_name("s");
        assert_missing(c.create_schema(schema).await, "Type");

        assert_missing(c.describe_schema(DescribeSchemaRequest::default()).await, "RegistryName");
        assert_missing(
            c.describe_schema(DescribeSchemaRequest::default().registry_name("r")).await,
            "SchemaName",
        );
        assert_missing(
            c.delete_schema(DeleteSchemaRequest::default().registry_name("r")).await,
            "SchemaName",
        );
        assert_missing(c.list_schemas(ListSchemasRequest::default()).await, "RegistryName");
        assert_missing(c.search_schemas(SearchSchemasRequest::default()).await, "Keywords");
        assert_missing(
            c.search_schemas(SearchSchemasRequest::default().keywords("order")).await,
            "RegistryName",
        );

        assert_missing(c.create_discoverer(CreateDiscovererRequest::default()).await, "SourceArn");
        assert_missing(
            c.describe_discoverer(DescribeDiscovererRequest::default()).await,
            "DiscovererId",
        );
        assert_missing(c.start_discoverer(StartDiscovererRequest::default()).await, "DiscovererId");
        assert_missing(c.stop_discoverer(StopDiscovererRequest::default()).await, "DiscovererId");

        let binding = PutCodeBindingRequest::default();
        assert_missing(c.put_code_binding(binding.clone()).await, "Language");
        let binding = binding.language("Java8");
        assert_missing(c.put_code_binding(binding.clone()).await, "RegistryName");
        let binding = binding.registry_name("r");
        assert_missing(c.put_code_binding(binding).await, "SchemaName");

        let source = GetCodeBindingSourceRequest::default();
        assert_missing(c.get_code_binding_source(source.clone()).await, "Language");
        let source = source.language("Python36").registry_name("r");
        assert_missing(c.get_code_binding_source(source).await, "SchemaName");

        let export = ExportSchemaRequest::default();
        assert_missing(c.export_schema(export.clone()).await, "RegistryName");
        let export = export.registry_name("r");
        assert_missing(c.export_schema(export.clone()).await, "SchemaName");
        let export = export.schema_name("s");
        assert_missing(c.export_schema(export).await, "Type");

        assert_eq!(transport.request_count(), 0);
    }
}

mod ssm_incidents {
    use super::*;
    use aws_services::services::ssm_incidents::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_every_required_field() {
        let transport = transport();
        let c: SsmIncidentsClient = client(&transport);

        assert_missing(
            c.create_replication_set(CreateReplicationSetRequest::default()).await,
            "Regions",
        );
        assert_missing(
            c.get_replication_set(GetReplicationSetRequest::default()).await,
            "Arn",
        );
        assert_missing(
            c.create_response_plan(CreateResponsePlanRequest::default()).await,
            "Name",
        );
        assert_missing(
            c.create_response_plan(CreateResponsePlanRequest::default().name("plan"))
                .await,
            "IncidentTemplate",
        );
        assert_missing(c.get_response_plan(GetResponsePlanRequest::default()).await, "Arn");
        assert_missing(
            c.delete_response_plan(DeleteResponsePlanRequest::default()).await,
            "Arn",
        );
        assert_missing(
            c.start_incident(StartIncidentRequest::default()).await,
            "ResponsePlanArn",
        );
        assert_missing(
            c.get_incident_record(GetIncidentRecordRequest::default()).await,
            "Arn",
        );
        assert_missing(
            c.update_incident_record(UpdateIncidentRecordRequest::default()).await,
            "Arn",
        );

        let event = CreateTimelineEventRequest::default();
        assert_missing(c.create_timeline_event(event.clone()).await, "IncidentRecordArn");
        let event = event.incident_record_arn("arn:incident");
        assert_missing(c.create_timeline_event(event.clone()).await, "EventTime");
        let event = event.event_time(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        assert_missing(c.create_timeline_event(event.clone()).await, "EventType");
        let event = event.event_type("Custom Event");
        assert_missing(c.create_timeline_event(event).await, "EventData");

        assert_missing(
            c.list_timeline_events(ListTimelineEventsRequest::default()).await,
            "IncidentRecordArn",
        );
        assert_missing(c.tag_resource(TagResourceRequest::default()).await, "ResourceArn");
        assert_missing(
            c.tag_resource(TagResourceRequest::default().resource_arn("arn:plan")).await,
            "Tags",
        );
        assert_missing(
            c.untag_resource(UntagResourceRequest::default()).await,
            "ResourceArn",
        );
        assert_missing(
            c.untag_resource(UntagResourceRequest::default().resource_arn("arn:plan"))
                .await,
            "TagKeys",
        );
        assert_missing(
            c.list_tags_for_resource(ListTagsForResourceRequest::default()).await,
            "ResourceArn",
        );

        assert_eq!(transport.request_count(), 0);

        c.tag_resource(
            TagResourceRequest::default()
                .resource_arn("arn:plan")
                .tags(tags()),
        )
        .await
        .unwrap();
        assert_eq!(transport.request_count(), 1);
    }
}

mod wafv2 {
    use super::*;
    use aws_services::services::wafv2::model::{DefaultAction, VisibilityConfig};
    use aws_services::services::wafv2::*;

    #[tokio::test]
    async fn test_ip_set_operations() {
        let transport = transport();
        let c: Wafv2Client = client(&transport);

        let create = CreateIpSetRequest::default();
        assert_missing(c.create_ip_set(create.clone()).await, "Name");
        let create = create.name("blocked");
        assert_missing(c.create_ip_set(create.clone()).await, "Scope");
        let create = create.scope("REGIONAL");
        assert_missing(c.create_ip_set(create.clone()).await, "IPAddressVersion");
        let create = create.ip_address_version("IPV4");
        assert_missing(c.create_ip_set(create).await, "Addresses");

        assert_missing(
            c.get_ip_set(GetIpSetRequest::default().name("blocked").scope("REGIONAL"))
                .await,
            "Id",
        );

        let update = UpdateIpSetRequest::default()
            .name("blocked")
            .scope("REGIONAL")
            .id("id-1");
        assert_missing(c.update_ip_set(update.clone()).await, "Addresses");
        let update = update.addresses(vec!["10.0.0.0/8".to_string()]);
        assert_missing(c.update_ip_set(update).await, "LockToken");

        let delete = DeleteIpSetRequest::default()
            .name("blocked")
            .scope("REGIONAL")
            .id("id-1");
        assert_missing(c.delete_ip_set(delete).await, "LockToken");
        assert_missing(c.list_ip_sets(ListIpSetsRequest::default()).await, "Scope");

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_web_acl_operations() {
        let transport = transport();
        let c: Wafv2Client = client(&transport);

        let create = CreateWebAclRequest::default().name("acl").scope("REGIONAL");
        assert_missing(c.create_web_acl(create.clone()).await, "DefaultAction");
        let create = create.default_action(DefaultAction::allow());
        assert_missing(c.create_web_acl(create).await, "VisibilityConfig");

        assert_missing(c.get_web_acl(GetWebAclRequest::default()).await, "Name");

        let update = UpdateWebAclRequest::default()
            .name("acl")
            .scope("REGIONAL")
            .id("id-1");
        assert_missing(c.update_web_acl(update.clone()).await, "DefaultAction");
        let update = update.default_action(DefaultAction::block());
        assert_missing(c.update_web_acl(update.clone()).await, "VisibilityConfig");
        let update = update.visibility_config(VisibilityConfig::enabled("acl"));
        assert_missing(c.update_web_acl(update).await, "LockToken");

        assert_missing(
            c.delete_web_acl(DeleteWebAclRequest::default().name("acl").scope("REGIONAL"))
                .await,
            "Id",
        );
        assert_missing(c.list_web_acls(ListWebAclsRequest::default()).await, "Scope");

        assert_missing(
            c.associate_web_acl(AssociateWebAclRequest::default()).await,
            "WebACLArn",
        );
        assert_missing(
            c.associate_web_acl(AssociateWebAclRequest::default().web_acl_arn("arn:acl"))
                .await,
            "ResourceArn",
        );
        assert_missing(
            c.disassociate_web_acl(DisassociateWebAclRequest::default()).await,
            "ResourceArn",
        );
        assert_missing(
            c.get_web_acl_for_resource(GetWebAclForResourceRequest::default()).await,
            "ResourceArn",
        );
        assert_missing(c.check_capacity(CheckCapacityRequest::default()).await, "Scope");
        assert_missing(
            c.check_capacity(CheckCapacityRequest::default().scope("REGIONAL")).await,
            "Rules",
        );
        assert_missing(c.tag_resource(TagResourceRequest::default()).await, "ResourceARN");
        assert_missing(
            c.tag_resource(TagResourceRequest::default().resource_arn("arn:acl")).await,
            "Tags",
        );
        assert_missing(
            c.list_tags_for_resource(ListTagsForResourceRequest::default()).await,
            "ResourceARN",
        );

        assert_eq!(transport.request_count(), 0);
    }
}
