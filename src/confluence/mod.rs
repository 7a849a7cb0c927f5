//! # Confluence REST API
//!
//! [`ConfluenceClient`] owns the connection settings and hands out service
//! groups that borrow it: `client.content().label()` and `client.space()`.

pub mod content;
pub mod label;
pub mod space;

pub use content::ContentService;
pub use label::ContentLabelService;
pub use space::SpaceService;

use reqwest::Client;

use crate::client::{ClientConfig, RestClient};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ConfluenceClient {
    pub(crate) rest: RestClient,
}

impl ConfluenceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    pub fn with_http_client(client: Client, config: ClientConfig) -> Self {
        Self {
            rest: RestClient::with_http_client(client, config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.rest.config()
    }

    /// Auth and user agent are set before the client is shared; `&mut self`
    /// rules out changes while requests are in flight.
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        self.rest.config_mut()
    }

    pub fn set_basic_auth(&mut self, mail: impl Into<String>, token: impl Into<String>) {
        self.rest.config_mut().set_basic_auth(mail, token);
    }

    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.rest.config_mut().set_bearer_token(token);
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.rest.config_mut().set_user_agent(user_agent);
    }

    pub fn content(&self) -> ContentService<'_> {
        ContentService::new(&self.rest)
    }

    pub fn space(&self) -> SpaceService<'_> {
        SpaceService::new(&self.rest)
    }
}
