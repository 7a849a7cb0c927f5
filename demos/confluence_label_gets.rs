//! Lists the labels attached to a Confluence page.
//!
//! ```text
//! HOST=your-site.atlassian.net MAIL=you@example.com TOKEN=api-token \
//!     cargo run --example confluence_label_gets
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

    let (page, response) = match client.content().label().gets("80412692", "", 0, 50).await {
        Ok(result) => result,
        Err(err) => {
            if let Some(response) = err.response() {
                error!("Request to {} failed: {}", response.endpoint, response.text());
            }
            return Err(err.into());
        }
    };

    info!("Endpoint: {}", response.endpoint);
    for label in &page.results {
        info!(
            "label: {} (prefix {}, id {})",
            label.name.as_deref().unwrap_or_default(),
            label.prefix.as_deref().unwrap_or_default(),
            label.id.as_deref().unwrap_or_default()
        );
    }
    info!("{} labels", page.results.len());

    Ok(())
}
