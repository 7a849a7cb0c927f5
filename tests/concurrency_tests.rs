//! A single client shared across tasks, and cancellation by dropping futures.

use atlassian_api::{Auth, ClientConfig, ConfluenceClient, JiraClient};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(
        server.uri(),
        Auth::Basic {
            username: "test@example.com".to_string(),
            api_token: "test_token".to_string(),
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_shared_client_across_tasks() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/wiki/rest/api/content/\d+/label$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"prefix": "global", "name": "release", "id": "1", "label": "release"}],
            "size": 1
        })))
        .expect(16)
        .mount(&mock_server)
        .await;

    let client = Arc::new(ConfluenceClient::new(config_for(&mock_server)).unwrap());
    let success_count = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for task_id in 0..16u32 {
        let client = Arc::clone(&client);
        let success_count = Arc::clone(&success_count);

        handles.push(tokio::spawn(async move {
            let content_id = (80412692 + task_id).to_string();
            let (page, response) = client
                .content()
                .label()
                .gets(&content_id, "", 0, 50)
                .await
                .unwrap();

            // Each task sees its own metadata.
            assert!(response.endpoint.contains(&content_id));
            assert_eq!(page.results.len(), 1);
            success_count.fetch_add(1, Ordering::SeqCst);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(success_count.load(Ordering::SeqCst), 16);
}

#[tokio::test]
async fn test_dropped_call_is_cancelled() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/3/workflow/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"values": []}))
                .set_delay(Duration::from_secs(1)),
        )
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(config_for(&mock_server)).unwrap();

    let outcome = tokio::time::timeout(Duration::from_millis(100), client.workflow().gets(None, 0, 50)).await;

    assert!(outcome.is_err(), "the call should still be pending when abandoned");

    // The client remains usable after an abandoned call.
    Mock::given(method("GET"))
        .and(path("/rest/api/3/workflows/capabilities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"editorScope": "GLOBAL"})))
        .mount(&mock_server)
        .await;

    let (capabilities, _) = client.workflow().capabilities("", "10000", "10001").await.unwrap();
    assert_eq!(capabilities.editor_scope.as_deref(), Some("GLOBAL"));
}
