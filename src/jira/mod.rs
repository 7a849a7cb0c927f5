//! # Jira REST API
//!
//! [`JiraClient`] targets either the v2 or v3 REST surface and exposes the
//! workflow service group through [`JiraClient::workflow`].

pub mod workflow;

pub use workflow::WorkflowService;

use reqwest::Client;

use crate::client::{ClientConfig, RestClient};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    V2,
    #[default]
    V3,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V2 => "2",
            ApiVersion::V3 => "3",
        }
    }
}

#[derive(Debug, Clone)]
pub struct JiraClient {
    pub(crate) rest: RestClient,
    pub(crate) version: ApiVersion,
}

impl JiraClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
            version: ApiVersion::default(),
        })
    }

    pub fn with_http_client(client: Client, config: ClientConfig) -> Self {
        Self {
            rest: RestClient::with_http_client(client, config),
            version: ApiVersion::default(),
        }
    }

    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn api_version(&self) -> ApiVersion {
        self.version
    }

    pub fn config(&self) -> &ClientConfig {
        self.rest.config()
    }

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

    pub fn workflow(&self) -> WorkflowService<'_> {
        WorkflowService::new(&self.rest, self.version)
    }
}
