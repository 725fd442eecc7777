//! Request construction for the REST-JSON services.

use aws_services::mocks::{test_config, test_config_builder, MockResponse, MockTransport};
use aws_services::{ClientBuilder, FromServiceClient, HttpMethod};
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

fn client<C: FromServiceClient>(transport: &Arc<MockTransport>) -> C {
    ClientBuilder::<C>::new(test_config())
        .shared_transport(transport.clone())
        .build()
        .unwrap()
}

fn ok_transport() -> Arc<MockTransport> {
    Arc::new(MockTransport::with_default(MockResponse::json(json!({}))))
}

mod connect_cases {
    use super::*;
    use aws_services::services::connect_cases::model::{FieldValue, FieldValueUnion};
    use aws_services::services::connect_cases::*;

    #[tokio::test]
    async fn test_create_case_path_and_body() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({
            "caseId": "case-1",
            "caseArn": "arn:aws:cases:us-east-1:111122223333:domain/d-1/case/case-1"
        }))));
        let c: ConnectCasesClient = client(&transport);

        let output = c
            .create_case(
                CreateCaseRequest::default()
                    .domain_id("d-1")
                    .template_id("tpl")
                    .fields(vec![FieldValue::new("title", FieldValueUnion::string("Broken"))]),
            )
            .await
            .unwrap();
        assert_eq!(output.case_id.as_deref(), Some("case-1"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::POST);
        assert_eq!(sent.path(), "/domains/d-1/cases");
        assert_eq!(sent.header("content-type"), Some("application/json"));

        let body = sent.json_body().unwrap();
        assert_eq!(body["templateId"], "tpl");
        assert_eq!(body["fields"][0]["id"], "title");
        assert_eq!(body["fields"][0]["value"]["stringValue"], "Broken");
        assert!(body.get("domainId").is_none());
        assert!(!body["clientToken"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_caller_token_is_kept() {
        let transport = ok_transport();
        let c: ConnectCasesClient = client(&transport);

        c.create_case(
            CreateCaseRequest::default()
                .domain_id("d-1")
                .template_id("tpl")
                .fields(Vec::<FieldValue>::new())
                .client_token("token-1"),
        )
        .await
        .unwrap();
        assert_eq!(
            transport.last_request().unwrap().json_body().unwrap()["clientToken"],
            "token-1"
        );
    }

    #[tokio::test]
    async fn test_arn_segments_are_encoded() {
        let transport = ok_transport();
        let c: ConnectCasesClient = client(&transport);
        let arn = "arn:aws:cases:us-east-1:111122223333:domain/d-1";

        c.untag_resource(
            UntagResourceRequest::default()
                .arn(arn)
                .tag_keys(vec!["team".to_string(), "env".to_string()]),
        )
        .await
        .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::DELETE);
        assert_eq!(
            sent.path(),
            "/tags/arn%3Aaws%3Acases%3Aus-east-1%3A111122223333%3Adomain%2Fd-1"
        );
        assert_eq!(sent.query(), Some("tagKeys=team&tagKeys=env"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_list_domains_query() {
        let transport = ok_transport();
        let c: ConnectCasesClient = client(&transport);

        c.list_domains(ListDomainsRequest::default().max_results(5).next_token("n 1"))
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/domains-list");
        assert_eq!(sent.query(), Some("maxResults=5&nextToken=n%201"));
    }
}

mod finspace_data {
    use super::*;
    use aws_services::services::finspace_data::*;

    #[tokio::test]
    async fn test_delete_dataset_sends_token_in_query() {
        let transport = ok_transport();
        let c: FinSpaceDataClient = client(&transport);

        c.delete_dataset(DeleteDatasetRequest::default().dataset_id("ds-1"))
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::DELETE);
        assert_eq!(sent.path(), "/datasetsv2/ds-1");
        let query = sent.query().unwrap();
        assert!(query.starts_with("clientToken="));
        assert!(query.len() > "clientToken=".len());
    }

    #[tokio::test]
    async fn test_changeset_paths() {
        let transport = ok_transport();
        let c: FinSpaceDataClient = client(&transport);

        c.get_changeset(GetChangesetRequest::default().dataset_id("ds-1").changeset_id("cs-2"))
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::GET);
        assert_eq!(sent.path(), "/datasets/ds-1/changesetsv2/cs-2");

        c.disable_user(DisableUserRequest::default().user_id("u-1"))
            .await
            .unwrap();
        assert_eq!(transport.last_request().unwrap().path(), "/user/u-1/disable");
    }
}

mod iot_sitewise {
    use super::*;
    use aws_services::services::iot_sitewise::*;

    #[tokio::test]
    async fn test_host_prefixes_per_plane() {
        let transport = ok_transport();
        let c: IoTSiteWiseClient = client(&transport);

        c.describe_asset(DescribeAssetRequest::default().asset_id("a-1"))
            .await
            .unwrap();
        assert_eq!(transport.last_request().unwrap().host(), Some("api.service.test"));

        c.get_asset_property_value(GetAssetPropertyValueRequest::default().property_alias("/p/1"))
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.host(), Some("data.service.test"));
        assert_eq!(sent.path(), "/properties/latest");
        assert_eq!(sent.query(), Some("propertyAlias=%2Fp%2F1"));

        c.describe_portal(DescribePortalRequest::default().portal_id("p-1"))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().host(),
            Some("monitor.service.test")
        );
    }

    #[tokio::test]
    async fn test_host_prefix_can_be_disabled() {
        let transport = ok_transport();
        let config = test_config_builder()
            .endpoint("https://service.test")
            .disable_host_prefix_injection(true)
            .build()
            .unwrap();
        let c = IoTSiteWiseClient::builder(config)
            .shared_transport(transport.clone())
            .build()
            .unwrap();

        c.describe_asset(DescribeAssetRequest::default().asset_id("a-1"))
            .await
            .unwrap();
        assert_eq!(transport.last_request().unwrap().host(), Some("service.test"));
    }

    #[tokio::test]
    async fn test_history_query_uses_iso_dates() {
        let transport = ok_transport();
        let c: IoTSiteWiseClient = client(&transport);

        c.get_asset_property_value_history(
            GetAssetPropertyValueHistoryRequest::default()
                .asset_id("a-1")
                .property_id("p-1")
                .start_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
                .qualities(vec!["GOOD".to_string()]),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/properties/history");
        assert_eq!(
            sent.query(),
            Some("assetId=a-1&propertyId=p-1&startDate=2024-01-01T00%3A00%3A00Z&qualities=GOOD")
        );
    }

    #[tokio::test]
    async fn test_create_asset_body() {
        let transport = ok_transport();
        let c: IoTSiteWiseClient = client(&transport);

        c.create_asset(CreateAssetRequest::default().asset_name("pump").asset_model_id("m-1"))
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/assets");
        let body = sent.json_body().unwrap();
        assert_eq!(body["assetName"], "pump");
        assert_eq!(body["assetModelId"], "m-1");
        assert!(body["clientToken"].is_string());
    }
}

mod lookout_metrics {
    use super::*;
    use aws_services::services::lookout_metrics::*;

    #[tokio::test]
    async fn test_action_paths_carry_operation_name() {
        let transport = ok_transport();
        let c: LookoutMetricsClient = client(&transport);

        c.activate_anomaly_detector(
            ActivateAnomalyDetectorRequest::default().anomaly_detector_arn("arn:d"),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::POST);
        assert_eq!(sent.path(), "/ActivateAnomalyDetector");
        assert_eq!(sent.json_body().unwrap(), json!({"AnomalyDetectorArn": "arn:d"}));
        assert!(sent.header("x-amz-target").is_none());
    }
}

mod resilience_hub {
    use super::*;
    use aws_services::services::resilience_hub::*;

    #[tokio::test]
    async fn test_list_app_assessments_query() {
        let transport = ok_transport();
        let c: ResilienceHubClient = client(&transport);

        c.list_app_assessments(
            ListAppAssessmentsRequest::default()
                .app_arn("arn:app")
                .assessment_status(vec!["Success".to_string(), "Failed".to_string()])
                .reverse_order(true),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::GET);
        assert_eq!(sent.path(), "/list-app-assessments");
        assert_eq!(
            sent.query(),
            Some("appArn=arn%3Aapp&assessmentStatus=Success&assessmentStatus=Failed&reverseOrder=true")
        );
    }

    #[tokio::test]
    async fn test_describe_app_posts_arn() {
        let transport = ok_transport();
        let c: ResilienceHubClient = client(&transport);

        c.describe_app(DescribeAppRequest::default().app_arn("arn:app"))
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::POST);
        assert_eq!(sent.path(), "/describe-app");
        assert_eq!(sent.json_body().unwrap()["appArn"], "arn:app");
    }
}

mod schemas {
    use super::*;
    use aws_services::services::schemas::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_schema_paths_nest_registry() {
        let transport = ok_transport();
        let c: SchemasClient = client(&transport);

        c.create_schema(
            CreateSchemaRequest::default()
                .registry_name("aws.events")
                .schema_name("Order Created")
                .content("{}")
                .schema_type("OpenApi3"),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(
            sent.path(),
            "/v1/registries/name/aws.events/schemas/name/Order%20Created"
        );
        let body = sent.json_body().unwrap();
        assert_eq!(body["Type"], "OpenApi3");
        assert_eq!(body["Content"], "{}");
        assert!(body.get("RegistryName").is_none());
    }

    #[tokio::test]
    async fn test_export_schema_type_in_query() {
        let transport = ok_transport();
        let c: SchemasClient = client(&transport);

        c.export_schema(
            ExportSchemaRequest::default()
                .registry_name("r")
                .schema_name("s")
                .schema_version("2")
                .schema_type("JSONSchemaDraft4"),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/v1/registries/name/r/schemas/name/s/export");
        assert_eq!(sent.query(), Some("schemaVersion=2&type=JSONSchemaDraft4"));
    }

    #[tokio::test]
    async fn test_code_binding_source_is_raw_bytes() {
        let archive = Bytes::from_static(b"PK\x03\x04binary");
        let transport = Arc::new(MockTransport::with_responses(vec![
            MockResponse::ok_with_body(archive.clone()),
        ]));
        let c: SchemasClient = client(&transport);

        let output = c
            .get_code_binding_source(
                GetCodeBindingSourceRequest::default()
                    .language("Java8")
                    .registry_name("r")
                    .schema_name("s"),
            )
            .await
            .unwrap();
        assert_eq!(output.body, archive);
        assert_eq!(
            transport.last_request().unwrap().path(),
            "/v1/registries/name/r/schemas/name/s/language/Java8/source"
        );
    }
}

mod ssm_incidents {
    use super::*;
    use aws_services::services::ssm_incidents::*;

    #[tokio::test]
    async fn test_get_replication_set_query() {
        let transport = ok_transport();
        let c: SsmIncidentsClient = client(&transport);

        c.get_replication_set(
            GetReplicationSetRequest::default().arn("arn:aws:ssm-incidents::1:replication-set/x"),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::GET);
        assert_eq!(sent.path(), "/getReplicationSet");
        assert_eq!(
            sent.query(),
            Some("arn=arn%3Aaws%3Assm-incidents%3A%3A1%3Areplication-set%2Fx")
        );
    }

    #[tokio::test]
    async fn test_timeline_event_time_as_epoch_seconds() {
        let transport = ok_transport();
        let c: SsmIncidentsClient = client(&transport);

        c.create_timeline_event(
            CreateTimelineEventRequest::default()
                .incident_record_arn("arn:incident")
                .event_time(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
                .event_type("Custom Event")
                .event_data("\"paged on-call\""),
        )
        .await
        .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/createTimelineEvent");
        let body = sent.json_body().unwrap();
        assert_eq!(body["eventTime"].as_f64(), Some(1_700_000_000.0));
        assert_eq!(body["eventType"], "Custom Event");
        assert!(body["clientToken"].is_string());
    }
}
