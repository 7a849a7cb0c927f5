use reqwest::Method;
use tracing::instrument;
use urlencoding::encode;

use crate::client::RestClient;
use crate::error::{Result, ensure_path_segment, ensure_present};
use crate::models::{
    ContentTaskScheme, CreateSpaceScheme, GetSpacesOptionScheme, ResponseScheme, SpacePageScheme, SpaceScheme,
    UpdateSpaceScheme,
};

#[derive(Debug, Clone, Copy)]
pub struct SpaceService<'a> {
    client: &'a RestClient,
}

impl<'a> SpaceService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn gets(
        &self,
        options: &GetSpacesOptionScheme,
        start_at: u32,
        max_results: u32,
    ) -> Result<(SpacePageScheme, ResponseScheme)> {
        let mut query = vec![
            ("start", start_at.to_string()),
            ("limit", max_results.to_string()),
        ];

        for key in &options.space_keys {
            query.push(("spaceKey", key.clone()));
        }
        for id in &options.space_ids {
            query.push(("spaceId", id.to_string()));
        }
        if let Some(space_type) = &options.space_type {
            query.push(("type", space_type.clone()));
        }
        if let Some(status) = &options.status {
            query.push(("status", status.clone()));
        }
        for label in &options.labels {
            query.push(("label", label.clone()));
        }
        if let Some(favourite) = options.favourite {
            query.push(("favourite", favourite.to_string()));
        }
        if let Some(user_key) = &options.favourite_user_key {
            query.push(("favouriteUserKey", user_key.clone()));
        }
        if !options.expand.is_empty() {
            query.push(("expand", options.expand.join(",")));
        }

        let url = self.client.endpoint("wiki/rest/api/space", &query)?;
        self.client.call(Method::GET, url, None).await
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn get(&self, space_key: &str, expand: &[&str]) -> Result<(SpaceScheme, ResponseScheme)> {
        ensure_path_segment(space_key, "space key")?;

        let query = if expand.is_empty() {
            vec![]
        } else {
            vec![("expand", expand.join(","))]
        };

        let url = self
            .client
            .endpoint(&format!("wiki/rest/api/space/{}", encode(space_key)), &query)?;
        self.client.call(Method::GET, url, None).await
    }

    /// Creates a space; `private` creates it visible to the creator only.
    #[instrument(skip(self, payload), fields(key = %payload.key), level = "debug")]
    pub async fn create(&self, payload: &CreateSpaceScheme, private: bool) -> Result<(SpaceScheme, ResponseScheme)> {
        ensure_present(&payload.key, "space key")?;
        ensure_present(&payload.name, "space name")?;

        let path = if private {
            "wiki/rest/api/space/_private"
        } else {
            "wiki/rest/api/space"
        };

        let url = self.client.endpoint(path, &[])?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::POST, url, Some(body)).await
    }

    #[instrument(skip(self, payload), level = "debug")]
    pub async fn update(&self, space_key: &str, payload: &UpdateSpaceScheme) -> Result<(SpaceScheme, ResponseScheme)> {
        ensure_path_segment(space_key, "space key")?;

        let url = self
            .client
            .endpoint(&format!("wiki/rest/api/space/{}", encode(space_key)), &[])?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::PUT, url, Some(body)).await
    }

    /// Deletion runs as a long task; the returned handle points at its status.
    #[instrument(skip(self), level = "debug")]
    pub async fn delete(&self, space_key: &str) -> Result<(ContentTaskScheme, ResponseScheme)> {
        ensure_path_segment(space_key, "space key")?;

        let url = self
            .client
            .endpoint(&format!("wiki/rest/api/space/{}", encode(space_key)), &[])?;
        self.client.call(Method::DELETE, url, None).await
    }
}
