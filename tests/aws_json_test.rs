//! Request construction for the awsJson services: Lookout for Equipment and WAFV2.

use aws_services::mocks::{test_config, MockResponse, MockTransport};
use aws_services::HttpMethod;
use serde_json::json;
use std::sync::Arc;

mod lookout_equipment {
    use super::*;
    use aws_services::services::lookout_equipment::model::Tag;
    use aws_services::services::lookout_equipment::*;
    use futures::TryStreamExt;

    fn create_test_client(transport: Arc<MockTransport>) -> LookoutEquipmentClient {
        LookoutEquipmentClient::builder(test_config())
            .shared_transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_dataset_target_and_body() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({
            "DatasetName": "turbines",
            "DatasetArn": "arn:aws:lookoutequipment:us-east-1:111122223333:dataset/turbines",
            "Status": "CREATED"
        }))));
        let client = create_test_client(transport.clone());

        let output = client
            .create_dataset(
                CreateDatasetRequest::default()
                    .dataset_name("turbines")
                    .tags(vec![Tag::new("site", "north")]),
            )
            .await
            .unwrap();
        assert_eq!(output.status.as_deref(), Some("CREATED"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::POST);
        assert_eq!(sent.path(), "/");
        assert_eq!(
            sent.header("x-amz-target"),
            Some("AWSLookoutEquipmentFrontendService.CreateDataset")
        );
        assert_eq!(sent.header("content-type"), Some("application/x-amz-json-1.0"));

        let body = sent.json_body().unwrap();
        assert_eq!(body["DatasetName"], "turbines");
        assert_eq!(body["Tags"][0]["Key"], "site");
        assert!(body["ClientToken"].is_string());
    }

    #[tokio::test]
    async fn test_every_operation_targets_its_name() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({}))));
        let client = create_test_client(transport.clone());

        client
            .describe_dataset(DescribeDatasetRequest::default().dataset_name("d"))
            .await
            .unwrap();
        client
            .start_inference_scheduler(
                StartInferenceSchedulerRequest::default().inference_scheduler_name("s"),
            )
            .await
            .unwrap();
        client
            .list_models(ListModelsRequest::default())
            .await
            .unwrap();

        let targets: Vec<String> = transport
            .requests()
            .iter()
            .map(|r| r.header("x-amz-target").unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            targets,
            vec![
                "AWSLookoutEquipmentFrontendService.DescribeDataset",
                "AWSLookoutEquipmentFrontendService.StartInferenceScheduler",
                "AWSLookoutEquipmentFrontendService.ListModels",
            ]
        );
        // An operation with no members still sends a JSON object.
        assert_eq!(transport.requests()[2].body.as_deref(), Some(&b"{}"[..]));
    }

    #[tokio::test]
    async fn test_list_datasets_paginates() {
        let transport = Arc::new(MockTransport::with_responses(vec![
            MockResponse::json(json!({
                "DatasetSummaries": [{"DatasetName": "a"}],
                "NextToken": "page-2"
            })),
            MockResponse::json(json!({"DatasetSummaries": [{"DatasetName": "b"}]})),
        ]));
        let client = create_test_client(transport.clone());

        let pages: Vec<ListDatasetsOutput> = client
            .service_client()
            .paginate(ListDatasetsRequest::default().max_results(1))
            .try_collect()
            .await
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(
            transport.requests()[1].json_body().unwrap()["NextToken"],
            "page-2"
        );
    }

    #[tokio::test]
    async fn test_error_type_from_body() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
            400,
            r#"{"__type":"com.amazonaws.lookoutequipment#ValidationException","Message":"bad name"}"#,
        )]));
        let client = create_test_client(transport);

        let err = client
            .describe_model(DescribeModelRequest::default().model_name("m"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), Some("ValidationException"));
        assert!(err.is_service_error());
    }
}

mod wafv2 {
    use super::*;
    use aws_services::services::wafv2::model::{DefaultAction, Rule, Tag, VisibilityConfig};
    use aws_services::services::wafv2::*;

    fn create_test_client(transport: Arc<MockTransport>) -> Wafv2Client {
        Wafv2Client::builder(test_config())
            .shared_transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_ip_set() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({
            "Summary": {
                "Name": "blocked",
                "Id": "id-1",
                "LockToken": "lock-1",
                "ARN": "arn:aws:wafv2:us-east-1:111122223333:regional/ipset/blocked/id-1"
            }
        }))));
        let client = create_test_client(transport.clone());

        let output = client
            .create_ip_set(
                CreateIpSetRequest::default()
                    .name("blocked")
                    .scope("REGIONAL")
                    .ip_address_version("IPV4")
                    .addresses(vec!["192.0.2.0/24".to_string()])
                    .tags(vec![Tag::new("team", "edge")]),
            )
            .await
            .unwrap();
        let summary = output.summary.unwrap();
        assert_eq!(summary.lock_token.as_deref(), Some("lock-1"));
        assert!(summary.arn.unwrap().ends_with("/id-1"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("x-amz-target"), Some("AWSWAF_20190729.CreateIPSet"));
        assert_eq!(sent.header("content-type"), Some("application/x-amz-json-1.1"));
        let body = sent.json_body().unwrap();
        assert_eq!(body["IPAddressVersion"], "IPV4");
        assert_eq!(body["Addresses"][0], "192.0.2.0/24");
        assert_eq!(body["Tags"][0]["Value"], "edge");
    }

    #[tokio::test]
    async fn test_empty_address_list_is_sent() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({}))));
        let client = create_test_client(transport.clone());

        client
            .update_ip_set(
                UpdateIpSetRequest::default()
                    .name("blocked")
                    .scope("REGIONAL")
                    .id("id-1")
                    .addresses(Vec::<String>::new())
                    .lock_token("lock-1"),
            )
            .await
            .unwrap();
        let body = transport.last_request().unwrap().json_body().unwrap();
        assert_eq!(body["Addresses"], json!([]));
        assert_eq!(body["LockToken"], "lock-1");
    }

    #[tokio::test]
    async fn test_create_web_acl_body() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({}))));
        let client = create_test_client(transport.clone());

        let rule = Rule {
            name: "rate".into(),
            priority: 0,
            statement: json!({"RateBasedStatement": {"Limit": 1000, "AggregateKeyType": "IP"}}),
            action: Some(json!({"Block": {}})),
            override_action: None,
            visibility_config: VisibilityConfig::enabled("rate"),
        };
        client
            .create_web_acl(
                CreateWebAclRequest::default()
                    .name("edge")
                    .scope("CLOUDFRONT")
                    .default_action(DefaultAction::allow())
                    .rules(vec![rule])
                    .visibility_config(VisibilityConfig::enabled("edge")),
            )
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("x-amz-target"), Some("AWSWAF_20190729.CreateWebACL"));
        let body = sent.json_body().unwrap();
        assert_eq!(body["DefaultAction"], json!({"Allow": {}}));
        assert_eq!(body["Rules"][0]["Action"], json!({"Block": {}}));
        assert!(body["Rules"][0].get("OverrideAction").is_none());
        assert_eq!(body["VisibilityConfig"]["MetricName"], "edge");
        assert_eq!(body["VisibilityConfig"]["CloudWatchMetricsEnabled"], true);
    }

    #[tokio::test]
    async fn test_associate_uses_service_member_names() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({}))));
        let client = create_test_client(transport.clone());

        client
            .associate_web_acl(
                AssociateWebAclRequest::default()
                    .web_acl_arn("arn:acl")
                    .resource_arn("arn:alb"),
            )
            .await
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("x-amz-target"), Some("AWSWAF_20190729.AssociateWebACL"));
        assert_eq!(
            sent.json_body().unwrap(),
            json!({"WebACLArn": "arn:acl", "ResourceArn": "arn:alb"})
        );

        client
            .list_tags_for_resource(ListTagsForResourceRequest::default().resource_arn("arn:acl"))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().json_body().unwrap(),
            json!({"ResourceARN": "arn:acl"})
        );
    }

    #[tokio::test]
    async fn test_get_web_acl_output() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::json(json!({
            "WebACL": {
                "Name": "edge",
                "Id": "id-1",
                "ARN": "arn:acl",
                "DefaultAction": {"Block": {}},
                "Rules": [],
                "Capacity": 50
            },
            "LockToken": "lock-2"
        }))));
        let client = create_test_client(transport);

        let output = client
            .get_web_acl(GetWebAclRequest::default().name("edge").scope("REGIONAL").id("id-1"))
            .await
            .unwrap();
        let acl = output.web_acl.unwrap();
        assert_eq!(acl.capacity, Some(50));
        assert_eq!(acl.default_action, Some(DefaultAction::block()));
        assert_eq!(output.lock_token.as_deref(), Some("lock-2"));
    }

    #[tokio::test]
    async fn test_stale_lock_token_error() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
            400,
            r#"{"__type":"WAFOptimisticLockException","Message":"stale"}"#,
        )]));
        let client = create_test_client(transport);

        let err = client
            .delete_web_acl(
                DeleteWebAclRequest::default()
                    .name("edge")
                    .scope("REGIONAL")
                    .id("id-1")
                    .lock_token("old"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), Some("WAFOptimisticLockException"));
        assert!(!err.is_retryable());
    }
}
