//! Searches the Jira workflow catalogue.
//!
//! ```text
//! HOST=your-site.atlassian.net MAIL=you@example.com TOKEN=api-token \
//!     cargo run --example jira_workflow_gets
//! ```

use atlassian_api::{ClientConfig, JiraClient, WorkflowSearchOptions};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env()?.with_user_agent("curl/7.54.0");
    let client = JiraClient::new(config)?;

    let options = WorkflowSearchOptions::new()
        .expand(vec!["transitions".to_string(), "statuses".to_string()])
        .order_by("name");

    let (page, response) = match client.workflow().gets(Some(&options), 0, 50).await {
        Ok(result) => result,
        Err(err) => {
            if let Some(response) = err.response() {
                error!("Request to {} failed: {}", response.endpoint, response.text());
            }
            return Err(err.into());
        }
    };

    info!("Endpoint: {}", response.endpoint);
    for workflow in &page.values {
        let Some(id) = &workflow.id else { continue };
        info!(
            "{} ({}): {} statuses, {} transitions",
            id.name.as_deref().unwrap_or_default(),
            id.entity_id.as_deref().unwrap_or_default(),
            workflow.statuses.len(),
            workflow.transitions.len()
        );
    }
    info!("total: {:?}, last page: {:?}", page.total, page.is_last);

    Ok(())
}
