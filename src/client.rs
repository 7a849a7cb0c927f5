use crate::error::{Error, Result};
use crate::models::{ApiErrorScheme, ResponseScheme};
use base64::Engine;
use reqwest::{Client, Method, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Auth {
    #[default]
    Anonymous,
    Basic { username: String, api_token: String },
    Bearer { token: String },
}

impl Auth {
    /// Value for the `Authorization` header, `None` for anonymous access.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Auth::Anonymous => None,
            Auth::Basic { username, api_token } => {
                let auth_value = format!("{}:{}", username, api_token);
                let encoded = base64::engine::general_purpose::STANDARD.encode(auth_value.as_bytes());
                Some(format!("Basic {}", encoded))
            }
            Auth::Bearer { token } => Some(format!("Bearer {}", token)),
        }
    }
}

/// Connection settings shared by the Confluence and Jira clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub auth: Auth,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>, auth: Auth) -> Result<Self> {
        let base_url = parse_base_url(base_url.as_ref())?;

        Ok(Self {
            base_url,
            auth,
            user_agent: None,
            timeout: None,
        })
    }

    /// Reads `HOST`, `MAIL` and `TOKEN` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::ConfigurationMissing(format!("{} not found in environment", key)))
        };

        let host = read("HOST")?;
        let username = read("MAIL")?;
        let api_token = read("TOKEN")?;

        let base_url = if host.contains("://") {
            host
        } else {
            format!("https://{}", host)
        };

        Self::new(base_url, Auth::Basic { username, api_token })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn set_basic_auth(&mut self, username: impl Into<String>, api_token: impl Into<String>) {
        self.auth = Auth::Basic {
            username: username.into(),
            api_token: api_token.into(),
        };
    }

    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.auth = Auth::Bearer { token: token.into() };
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = Some(user_agent.into());
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = || Error::InvalidConfiguration("Invalid base URL".to_string());

    let mut url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    // Endpoints are joined as relative paths, so the base must end in '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Request builder and response decoder behind every service method.
#[derive(Debug, Clone)]
pub struct RestClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::InvalidConfiguration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_http_client(client, config))
    }

    /// Uses a caller-provided `reqwest::Client` (proxies, TLS settings, pools).
    pub fn with_http_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// Resolves `path` against the base URL and appends `query` in order.
    pub(crate) fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .config
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidInput(format!("Invalid endpoint '{}': {}", path, e)))?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }

        Ok(url)
    }

    /// Sends one request. Non-2xx responses become `Error::ApiError` with the
    /// metadata attached.
    #[instrument(skip_all, fields(method = %method, url = %url), level = "debug")]
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<ResponseScheme> {
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(header::ACCEPT, "application/json");

        if let Some(value) = self.config.auth.header_value() {
            request = request.header(header::AUTHORIZATION, value);
        }
        if let Some(user_agent) = &self.config.user_agent {
            request = request.header(header::USER_AGENT, user_agent.as_str());
        }
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = &body {
            trace!("Request body: {}", body);
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let bytes = response.bytes().await?;
        let mut metadata = ResponseScheme {
            endpoint: url.to_string(),
            method: method.to_string(),
            code: status.as_u16(),
            bytes: bytes.to_vec(),
            api: None,
        };

        if !status.is_success() {
            metadata.api = serde_json::from_slice::<ApiErrorScheme>(&metadata.bytes).ok();

            let message = metadata
                .api
                .as_ref()
                .and_then(ApiErrorScheme::summary)
                .or_else(|| {
                    let text = metadata.text();
                    (!text.trim().is_empty()).then(|| text.into_owned())
                })
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

            warn!("API error: HTTP {} - {}", status, message);
            return Err(Error::ApiError {
                status: status.as_u16(),
                message,
                response: Box::new(metadata),
            });
        }

        trace!("Response body: {}", metadata.text());
        Ok(metadata)
    }

    /// `execute` followed by decoding the body into `T`.
    pub(crate) async fn call<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<(T, ResponseScheme)>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(method, url, body).await?;

        match serde_json::from_slice::<T>(&response.bytes) {
            Ok(value) => Ok((value, response)),
            Err(source) => {
                warn!("Failed to decode response from {}: {}", response.endpoint, source);
                Err(Error::Decode {
                    source,
                    response: Box::new(response),
                })
            }
        }
    }
}
