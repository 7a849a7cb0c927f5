//! Reads a Confluence space together with its operations.
//!
//! ```text
//! HOST=your-site.atlassian.net MAIL=you@example.com TOKEN=api-token \
//!     cargo run --example confluence_space_get
//! ```

use atlassian_api::{ClientConfig, ConfluenceClient};
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
    let client = ConfluenceClient::new(config)?;

    let (space, response) = match client.space().get("DUMMY", &["operations"]).await {
        Ok(result) => result,
        Err(err) => {
            if let Some(response) = err.response() {
                if response.code == 400 {
                    error!("Bad request: {:?}", response.api);
                }
                error!("Request to {} failed: {}", response.endpoint, response.text());
            }
            return Err(err.into());
        }
    };

    info!("Endpoint: {}", response.endpoint);
    info!(
        "{} - {} ({})",
        space.key.as_deref().unwrap_or_default(),
        space.name.as_deref().unwrap_or_default(),
        space.space_type.as_deref().unwrap_or_default()
    );
    for operation in &space.operations {
        info!(
            "operation: {} on {}",
            operation.operation.as_deref().unwrap_or_default(),
            operation.target_type.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}
