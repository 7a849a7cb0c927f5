use reqwest::Method;
use tracing::instrument;
use urlencoding::encode;

use crate::client::RestClient;
use crate::error::{Result, ensure_path_segment};
use crate::models::{ContentLabelPageScheme, ContentLabelPayloadScheme, ResponseScheme};

#[derive(Debug, Clone, Copy)]
pub struct ContentLabelService<'a> {
    client: &'a RestClient,
}

impl<'a> ContentLabelService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Labels on a piece of content. An empty `prefix` returns every prefix.
    #[instrument(skip(self), level = "debug")]
    pub async fn gets(
        &self,
        content_id: &str,
        prefix: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<(ContentLabelPageScheme, ResponseScheme)> {
        ensure_path_segment(content_id, "content id")?;

        let mut query = vec![
            ("start", start_at.to_string()),
            ("limit", max_results.to_string()),
        ];
        if !prefix.is_empty() {
            query.push(("prefix", prefix.to_string()));
        }

        let url = self
            .client
            .endpoint(&format!("wiki/rest/api/content/{}/label", encode(content_id)), &query)?;

        self.client.call(Method::GET, url, None).await
    }

    /// Adds labels to a piece of content. With `want_400_response` Confluence
    /// answers invalid labels with 400 instead of 200.
    #[instrument(skip(self, payload), level = "debug")]
    pub async fn add(
        &self,
        content_id: &str,
        payload: &[ContentLabelPayloadScheme],
        want_400_response: bool,
    ) -> Result<(ContentLabelPageScheme, ResponseScheme)> {
        ensure_path_segment(content_id, "content id")?;

        let query = if want_400_response {
            vec![("use-400-error-response", "true".to_string())]
        } else {
            vec![]
        };

        let url = self
            .client
            .endpoint(&format!("wiki/rest/api/content/{}/label", encode(content_id)), &query)?;
        let body = serde_json::to_value(payload)?;

        self.client.call(Method::POST, url, Some(body)).await
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn remove(&self, content_id: &str, label_name: &str) -> Result<ResponseScheme> {
        ensure_path_segment(content_id, "content id")?;
        ensure_path_segment(label_name, "label name")?;

        let url = self.client.endpoint(
            &format!(
                "wiki/rest/api/content/{}/label/{}",
                encode(content_id),
                encode(label_name)
            ),
            &[],
        )?;

        self.client.execute(Method::DELETE, url, None).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::{Auth, ClientConfig};
    use crate::confluence::ConfluenceClient;
    use crate::error::Error;
    use crate::models::ContentLabelPayloadScheme;

    fn client_for(server: &MockServer) -> ConfluenceClient {
        let config = ClientConfig::new(
            server.uri(),
            Auth::Basic {
                username: "test@example.com".to_string(),
                api_token: "test_token".to_string(),
            },
        )
        .unwrap();
        ConfluenceClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_gets_with_prefix() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/wiki/rest/api/content/80412692/label"))
            .and(query_param("start", "10"))
            .and(query_param("limit", "25"))
            .and(query_param("prefix", "global"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"prefix": "global", "name": "release", "id": "1", "label": "release"}],
                "start": 10,
                "limit": 25,
                "size": 1
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (page, response) = client
            .content()
            .label()
            .gets("80412692", "global", 10, 25)
            .await
            .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].label.as_deref(), Some("release"));
        assert_eq!(response.code, 200);
    }

    #[tokio::test]
    async fn test_gets_without_prefix_omits_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/wiki/rest/api/content/80412692/label"))
            .and(query_param_is_missing("prefix"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [], "size": 0})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (page, _) = client.content().label().gets("80412692", "", 0, 50).await.unwrap();

        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_add_sends_labels() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/wiki/rest/api/content/80412692/label"))
            .and(query_param("use-400-error-response", "true"))
            .and(body_json(json!([{"prefix": "global", "name": "release"}])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"prefix": "global", "name": "release", "id": "1933322", "label": "release"}],
                "size": 1
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (page, _) = client
            .content()
            .label()
            .add("80412692", &[ContentLabelPayloadScheme::new("global", "release")], true)
            .await
            .unwrap();

        assert_eq!(page.results[0].id.as_deref(), Some("1933322"));
    }

    #[tokio::test]
    async fn test_remove_encodes_label_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/wiki/rest/api/content/80412692/label/my%20label"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client.content().label().remove("80412692", "my label").await.unwrap();

        assert_eq!(response.code, 204);
        assert!(response.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_blank_identifiers_fail_before_request() {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);
        let labels = client.content().label();

        let err = labels.gets("", "", 0, 50).await.unwrap_err();
        assert!(matches!(err, Error::MissingParameter { name: "content id" }));

        let err = labels.add(" ", &[], false).await.unwrap_err();
        assert!(matches!(err, Error::MissingParameter { name: "content id" }));

        let err = labels.remove("80412692", "").await.unwrap_err();
        assert!(matches!(err, Error::MissingParameter { name: "label name" }));

        let received = mock_server.received_requests().await.unwrap();
        assert!(received.is_empty());
    }
}
