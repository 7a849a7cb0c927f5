//! End-to-end scenarios mirroring the demo programs, run against wiremock.

use atlassian_api::{
    Auth, ClientConfig, ConfluenceClient, Error, JiraClient, TransitionUpdateDtoScheme,
    ValidationOptionsForCreateScheme, WorkflowCreateScheme, WorkflowCreatesPayload, WorkflowLayoutScheme,
    WorkflowScopeScheme, WorkflowStatusUpdateScheme,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn env_config(server: &MockServer) -> ClientConfig {
    let host = server.uri();
    ClientConfig::from_lookup(move |key| match key {
        "HOST" => Some(host.clone()),
        "MAIL" => Some("test@example.com".to_string()),
        "TOKEN" => Some("test_token".to_string()),
        _ => None,
    })
    .unwrap()
    .with_user_agent("curl/7.54.0")
}

/// Content with no labels yields an empty page, not an error.
#[tokio::test]
async fn test_scenario_label_listing_on_unlabelled_content() {
    // Given: content 80412692 with no labels
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/rest/api/content/80412692/label"))
        .and(query_param("start", "0"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "start": 0,
            "limit": 50,
            "size": 0,
            "_links": {"self": "https://example.atlassian.net/wiki/rest/api/content/80412692/label"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ConfluenceClient::new(env_config(&mock_server)).unwrap();

    // When: listing its labels with no prefix filter
    let (page, response) = client
        .content()
        .label()
        .gets("80412692", "", 0, 50)
        .await
        .unwrap();

    // Then: zero labels, successful metadata
    assert_eq!(page.results.len(), 0);
    assert_eq!(page.size, Some(0));
    assert_eq!(response.code, 200);
    assert!(response.api.is_none());
}

/// A 400 on a space read surfaces the parsed error body through the metadata.
#[tokio::test]
async fn test_scenario_space_read_rejected() {
    // Given: the server rejects the expand value for space DUMMY
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/rest/api/space/DUMMY"))
        .and(query_param("expand", "operations"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "data": {
                "authorized": true,
                "valid": false,
                "errors": [{"message": {"key": "expand.invalid", "args": [], "translation": "Invalid expand"}}],
                "successful": false
            },
            "message": "com.atlassian.confluence.api.service.exceptions.BadRequestException: Invalid expand",
            "reason": "Bad Request"
        })))
        .mount(&mock_server)
        .await;

    let client = ConfluenceClient::new(env_config(&mock_server)).unwrap();

    // When: reading the space
    let err = client.space().get("DUMMY", &["operations"]).await.unwrap_err();

    // Then: the error carries status, endpoint and the structured body
    assert_eq!(err.status(), Some(400));
    let response = err.response().unwrap();
    assert_eq!(response.code, 400);
    assert!(response.endpoint.ends_with("/wiki/rest/api/space/DUMMY?expand=operations"));
    assert!(response.text().contains("Bad Request"));

    let api = response.api.as_ref().unwrap();
    assert_eq!(api.status_code, Some(400));
    let data = api.data.as_ref().unwrap();
    assert_eq!(data.valid, Some(false));
    assert_eq!(
        data.errors[0].message.as_ref().unwrap().translation.as_deref(),
        Some("Invalid expand")
    );
}

/// Builds a workflow the way the creation demo does, validates it and submits it.
#[tokio::test]
async fn test_scenario_workflow_validate_then_create() {
    // Given: a server that accepts both validation and creation
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/workflows/create/validation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errors": []})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/workflows/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statuses": [{"id": "1", "statusReference": "f0b24de5"}],
            "workflows": [{"id": "c5e5a3c6", "name": "Workflow Sample"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(env_config(&mock_server)).unwrap();

    let mut payload = WorkflowCreatesPayload {
        scope: Some(WorkflowScopeScheme {
            scope_type: Some("GLOBAL".to_string()),
            ..Default::default()
        }),
        workflows: vec![WorkflowCreateScheme {
            name: Some("Workflow Sample".to_string()),
            start_point_layout: Some(WorkflowLayoutScheme::at(-100.0, -153.0)),
            ..Default::default()
        }],
        ..Default::default()
    };

    for (reference, name, category) in [
        ("f0b24de5", "To Do", "TODO"),
        ("c7a35bf0", "In Progress", "IN_PROGRESS"),
        ("6b3fc04d", "Done", "DONE"),
    ] {
        payload.add_status(
            WorkflowStatusUpdateScheme {
                name: Some(name.to_string()),
                status_category: Some(category.to_string()),
                status_reference: Some(reference.to_string()),
                ..Default::default()
            },
            None,
            TransitionUpdateDtoScheme {
                name: Some(name.to_string()),
                to_status_reference: Some(reference.to_string()),
                transition_type: Some("GLOBAL".to_string()),
                ..Default::default()
            },
        );
    }

    // When: validating, then creating
    let validation_request = ValidationOptionsForCreateScheme {
        payload: Some(payload.clone()),
        options: None,
    };
    let (validation, _) = client
        .workflow()
        .validate_create_workflows(&validation_request)
        .await
        .unwrap();
    assert!(validation.errors.is_empty());

    let (created, _) = client.workflow().creates(&payload).await.unwrap();

    // Then: the submitted body lists every status once per view
    assert_eq!(created.workflows[0].id.as_deref(), Some("c5e5a3c6"));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let validation_body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(validation_body["validationOptions"], serde_json::Value::Null);

    let create_body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(create_body["statuses"].as_array().unwrap().len(), 3);
    assert_eq!(create_body["workflows"][0]["statuses"].as_array().unwrap().len(), 3);
    assert_eq!(create_body["workflows"][0]["transitions"].as_array().unwrap().len(), 3);
    assert_eq!(
        create_body["workflows"][0]["statuses"][1]["statusReference"],
        json!("c7a35bf0")
    );
}

/// Credentials and user agent changed after construction apply to later calls.
#[tokio::test]
async fn test_scenario_switch_to_bearer_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/3/workflow/search"))
        .and(wiremock::matchers::header("Authorization", "Bearer pat-123"))
        .and(wiremock::matchers::header("User-Agent", "atlassian-api-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = JiraClient::new(env_config(&mock_server)).unwrap();
    client.set_bearer_token("pat-123");
    client.set_user_agent("atlassian-api-tests");

    let (page, _) = client.workflow().gets(None, 0, 50).await.unwrap();

    assert!(page.values.is_empty());
}

/// A slow server trips the per-request timeout as a transport error.
#[tokio::test]
async fn test_scenario_timeout_surfaces_as_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/rest/api/space/DUMMY"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"key": "DUMMY"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = env_config(&mock_server).with_timeout(Duration::from_millis(50));
    let client = ConfluenceClient::new(config).unwrap();

    let err = client.space().get("DUMMY", &[]).await.unwrap_err();

    match err {
        Error::RequestFailed(e) => assert!(e.is_timeout()),
        other => panic!("Expected RequestFailed, got {:?}", other),
    }
}
