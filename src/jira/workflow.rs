use reqwest::Method;
use tracing::instrument;
use urlencoding::encode;

use crate::client::RestClient;
use crate::error::{Result, ensure_path_segment};
use crate::models::{
    ResponseScheme, ValidationOptionsForCreateScheme, ValidationOptionsForUpdateScheme, WorkflowCapabilitiesScheme,
    WorkflowCreateResponseScheme, WorkflowCreatedResponseScheme, WorkflowCreatesPayload, WorkflowPageScheme,
    WorkflowPayloadScheme, WorkflowReadResponseScheme, WorkflowSearchCriteria, WorkflowSearchOptions,
    WorkflowUpdateResponseScheme, WorkflowUpdatesPayloadScheme, WorkflowValidationErrorListScheme,
};

use super::ApiVersion;

#[derive(Debug, Clone, Copy)]
pub struct WorkflowService<'a> {
    client: &'a RestClient,
    version: ApiVersion,
}

impl<'a> WorkflowService<'a> {
    pub(crate) fn new(client: &'a RestClient, version: ApiVersion) -> Self {
        Self { client, version }
    }

    fn path(&self, suffix: &str) -> String {
        format!("rest/api/{}/{}", self.version.as_str(), suffix)
    }

    /// Creates a workflow through the classic endpoint.
    #[instrument(skip(self, payload), level = "debug")]
    pub async fn create(&self, payload: &WorkflowPayloadScheme) -> Result<(WorkflowCreatedResponseScheme, ResponseScheme)> {
        let url = self.client.endpoint(&self.path("workflow"), &[])?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::POST, url, Some(body)).await
    }

    /// Paginated workflow search. Filters left unset on `options` are not sent.
    #[instrument(skip(self), level = "debug")]
    pub async fn gets(
        &self,
        options: Option<&WorkflowSearchOptions>,
        start_at: u32,
        max_results: u32,
    ) -> Result<(WorkflowPageScheme, ResponseScheme)> {
        let mut query = vec![
            ("startAt", start_at.to_string()),
            ("maxResults", max_results.to_string()),
        ];

        if let Some(options) = options {
            for name in &options.workflow_name {
                query.push(("workflowName", name.clone()));
            }
            if !options.expand.is_empty() {
                query.push(("expand", options.expand.join(",")));
            }
            if let Some(query_string) = options.query_string.as_deref().filter(|q| !q.is_empty()) {
                query.push(("queryString", query_string.to_string()));
            }
            if let Some(order_by) = options.order_by.as_deref().filter(|o| !o.is_empty()) {
                query.push(("orderBy", order_by.to_string()));
            }
            if let Some(is_active) = options.is_active {
                query.push(("isActive", is_active.to_string()));
            }
        }

        let url = self.client.endpoint(&self.path("workflow/search"), &query)?;
        self.client.call(Method::GET, url, None).await
    }

    /// Deletes an inactive workflow by its entity id.
    #[instrument(skip(self), level = "debug")]
    pub async fn delete(&self, workflow_id: &str) -> Result<ResponseScheme> {
        ensure_path_segment(workflow_id, "workflow id")?;

        let url = self
            .client
            .endpoint(&self.path(&format!("workflow/{}", encode(workflow_id))), &[])?;
        self.client.execute(Method::DELETE, url, None).await
    }

    /// Bulk read of workflows and their statuses.
    #[instrument(skip(self, options), level = "debug")]
    pub async fn search(
        &self,
        options: &WorkflowSearchCriteria,
        expand: &[&str],
        transition_links: bool,
    ) -> Result<(WorkflowReadResponseScheme, ResponseScheme)> {
        let mut query = Vec::new();
        if !expand.is_empty() {
            query.push(("expand", expand.join(",")));
        }
        if transition_links {
            query.push(("useTransitionLinksFormat", "true".to_string()));
        }

        let url = self.client.endpoint(&self.path("workflows"), &query)?;
        let body = serde_json::to_value(options)?;
        self.client.call(Method::POST, url, Some(body)).await
    }

    /// Rules and editor scope available for a workflow or a project/issue type
    /// pair. Empty arguments are not sent.
    #[instrument(skip(self), level = "debug")]
    pub async fn capabilities(
        &self,
        workflow_id: &str,
        project_id: &str,
        issue_type_id: &str,
    ) -> Result<(WorkflowCapabilitiesScheme, ResponseScheme)> {
        let query: Vec<(&str, String)> = [
            ("workflowId", workflow_id),
            ("projectId", project_id),
            ("issueTypeId", issue_type_id),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect();

        let url = self.client.endpoint(&self.path("workflows/capabilities"), &query)?;
        self.client.call(Method::GET, url, None).await
    }

    #[instrument(skip(self, payload), level = "debug")]
    pub async fn creates(&self, payload: &WorkflowCreatesPayload) -> Result<(WorkflowCreateResponseScheme, ResponseScheme)> {
        let url = self.client.endpoint(&self.path("workflows/create"), &[])?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::POST, url, Some(body)).await
    }

    #[instrument(skip(self, payload), level = "debug")]
    pub async fn validate_create_workflows(
        &self,
        payload: &ValidationOptionsForCreateScheme,
    ) -> Result<(WorkflowValidationErrorListScheme, ResponseScheme)> {
        let url = self.client.endpoint(&self.path("workflows/create/validation"), &[])?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::POST, url, Some(body)).await
    }

    #[instrument(skip(self, payload), level = "debug")]
    pub async fn updates(
        &self,
        payload: &WorkflowUpdatesPayloadScheme,
        expand: &[&str],
    ) -> Result<(WorkflowUpdateResponseScheme, ResponseScheme)> {
        let query = if expand.is_empty() {
            vec![]
        } else {
            vec![("expand", expand.join(","))]
        };

        let url = self.client.endpoint(&self.path("workflows/update"), &query)?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::POST, url, Some(body)).await
    }

    #[instrument(skip(self, payload), level = "debug")]
    pub async fn validate_update_workflows(
        &self,
        payload: &ValidationOptionsForUpdateScheme,
    ) -> Result<(WorkflowValidationErrorListScheme, ResponseScheme)> {
        let url = self.client.endpoint(&self.path("workflows/update/validation"), &[])?;
        let body = serde_json::to_value(payload)?;
        self.client.call(Method::POST, url, Some(body)).await
    }
}
