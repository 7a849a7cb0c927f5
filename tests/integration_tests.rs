//! Tests against a live Atlassian Cloud site.
//!
//! They are ignored by default. To run them, provide credentials through the
//! environment or a `.env` file:
//!
//! ```text
//! export HOST=your-site.atlassian.net
//! export MAIL=you@example.com
//! export TOKEN=your-api-token
//! export CONFLUENCE_CONTENT_ID=80412692   # optional
//! export CONFLUENCE_SPACE_KEY=DUMMY       # optional
//! cargo test --test integration_tests -- --ignored
//! ```

use atlassian_api::{Auth, ClientConfig, ConfluenceClient, Error, GetSpacesOptionScheme, JiraClient};
use dotenv::dotenv;

fn config_from_env() -> ClientConfig {
    dotenv().ok();
    ClientConfig::from_env()
        .expect("HOST, MAIL and TOKEN must be set to run live tests")
        .with_user_agent("curl/7.54.0")
}

#[tokio::test]
#[ignore] // Requires a live Confluence site
async fn test_real_confluence_spaces() {
    // Given: a client built from the environment
    let client = ConfluenceClient::new(config_from_env()).unwrap();

    // When: listing the first page of spaces
    let (page, response) = client
        .space()
        .gets(&GetSpacesOptionScheme::new(), 0, 10)
        .await
        .expect("Failed to list spaces");

    // Then: the call succeeds and the page respects the limit
    assert!(response.is_success());
    assert!(page.results.len() <= 10);
    for space in &page.results {
        println!("{:?} - {:?}", space.key, space.name);
    }
}

#[tokio::test]
#[ignore] // Requires a live Confluence site
async fn test_real_confluence_space_and_labels() {
    let client = ConfluenceClient::new(config_from_env()).unwrap();

    let space_key = std::env::var("CONFLUENCE_SPACE_KEY").unwrap_or_else(|_| "DUMMY".to_string());
    match client.space().get(&space_key, &["operations"]).await {
        Ok((space, _)) => assert_eq!(space.key.as_deref(), Some(space_key.as_str())),
        Err(Error::ApiError { status, response, .. }) => {
            // A missing sample space is acceptable on an arbitrary site.
            assert!(status == 400 || status == 404, "unexpected status {}", status);
            println!("Space {} not readable: {:?}", space_key, response.api);
        }
        Err(other) => panic!("Unexpected error: {:?}", other),
    }

    if let Ok(content_id) = std::env::var("CONFLUENCE_CONTENT_ID") {
        let (page, _) = client
            .content()
            .label()
            .gets(&content_id, "", 0, 50)
            .await
            .expect("Failed to list labels");
        println!("Content {} has {} labels", content_id, page.results.len());
    }
}

#[tokio::test]
#[ignore] // Requires a live Jira site
async fn test_real_jira_workflow_search() {
    let client = JiraClient::new(config_from_env()).unwrap();

    let (page, response) = client
        .workflow()
        .gets(None, 0, 10)
        .await
        .expect("Failed to search workflows");

    assert_eq!(response.code, 200);
    assert!(page.values.len() <= 10);
    for workflow in &page.values {
        if let Some(id) = &workflow.id {
            println!("{:?} ({:?})", id.name, id.entity_id);
        }
    }
}

#[tokio::test]
#[ignore] // Requires a live Jira site
async fn test_real_api_auth_error() {
    // Given: the real host with invalid credentials
    let mut config = config_from_env();
    config.auth = Auth::Basic {
        username: "invalid@example.com".to_string(),
        api_token: "invalid_token".to_string(),
    };
    let client = JiraClient::new(config).unwrap();

    // When: calling an authenticated endpoint
    let result = client.workflow().gets(None, 0, 1).await;

    // Then: the site answers 401 and the metadata is attached
    match result {
        Err(Error::ApiError { status, response, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(response.code, 401);
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}
