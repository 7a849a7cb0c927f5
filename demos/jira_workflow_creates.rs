//! Builds a global workflow with three statuses, validates it and creates it.
//!
//! ```text
//! HOST=your-site.atlassian.net MAIL=you@example.com TOKEN=api-token \
//!     cargo run --example jira_workflow_creates
//! ```

use atlassian_api::{
    ClientConfig, JiraClient, TransitionUpdateDtoScheme, ValidationOptionsForCreateScheme,
    ValidationOptionsLevelScheme, WorkflowCreateScheme, WorkflowCreatesPayload, WorkflowLayoutScheme,
    WorkflowScopeScheme, WorkflowStatusUpdateScheme,
};
use dotenv::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn global_transition(name: &str, status_reference: &str) -> TransitionUpdateDtoScheme {
    TransitionUpdateDtoScheme {
        name: Some(name.to_string()),
        description: Some(format!("Move any issue to {}", name)),
        to_status_reference: Some(status_reference.to_string()),
        transition_type: Some("GLOBAL".to_string()),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env()?.with_user_agent("curl/7.54.0");
    let client = JiraClient::new(config)?;

    let mut payload = WorkflowCreatesPayload {
        scope: Some(WorkflowScopeScheme {
            scope_type: Some("GLOBAL".to_string()),
            ..Default::default()
        }),
        workflows: vec![WorkflowCreateScheme {
            name: Some("Workflow Sample".to_string()),
            description: Some("This workflow represents the process of software development".to_string()),
            start_point_layout: Some(WorkflowLayoutScheme::at(-100.0, -153.0)),
            ..Default::default()
        }],
        ..Default::default()
    };

    let statuses = [
        ("f0b24de5-25e7-4fab-ab94-63d81db6c0c0", "To Do", "TODO", 114.0),
        ("c7a35bf0-c127-4aa6-869f-4033730c61d8", "In Progress", "IN_PROGRESS", 317.0),
        ("6b3fc04d-3316-46c5-a257-65751aeb8849", "Done", "DONE", 520.0),
    ];
    for (reference, name, category, x) in statuses {
        payload.add_status(
            WorkflowStatusUpdateScheme {
                description: Some(format!("{} status", name)),
                name: Some(name.to_string()),
                status_category: Some(category.to_string()),
                status_reference: Some(reference.to_string()),
                ..Default::default()
            },
            Some(WorkflowLayoutScheme::at(x, -16.0)),
            global_transition(name, reference),
        );
    }

    let validation = ValidationOptionsForCreateScheme {
        payload: Some(payload.clone()),
        options: Some(ValidationOptionsLevelScheme {
            levels: vec!["ERROR".to_string(), "WARNING".to_string()],
        }),
    };

    let (report, _) = match client.workflow().validate_create_workflows(&validation).await {
        Ok(result) => result,
        Err(err) => {
            if let Some(response) = err.response() {
                error!("Request to {} failed: {}", response.endpoint, response.text());
            }
            return Err(err.into());
        }
    };

    for issue in &report.errors {
        warn!(
            "{}: {} ({})",
            issue.level.as_deref().unwrap_or_default(),
            issue.message.as_deref().unwrap_or_default(),
            issue.code.as_deref().unwrap_or_default()
        );
    }
    if report.errors.iter().any(|e| e.level.as_deref() == Some("ERROR")) {
        return Err("workflow payload failed validation".into());
    }

    let (created, response) = match client.workflow().creates(&payload).await {
        Ok(result) => result,
        Err(err) => {
            if let Some(response) = err.response() {
                error!("Request to {} failed: {}", response.endpoint, response.text());
            }
            return Err(err.into());
        }
    };

    info!("Endpoint: {}", response.endpoint);
    for workflow in &created.workflows {
        info!(
            "created workflow {} ({})",
            workflow.name.as_deref().unwrap_or_default(),
            workflow.id.as_deref().unwrap_or_default()
        );
    }
    for status in &created.statuses {
        info!(
            "status {} -> {}",
            status.status_reference.as_deref().unwrap_or_default(),
            status.id.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}
