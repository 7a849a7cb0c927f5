use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Out-of-band metadata returned with every decoded response or error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseScheme {
    /// Fully resolved request URL, query string included.
    pub endpoint: String,
    pub method: String,
    pub code: u16,
    pub bytes: Vec<u8>,
    /// Structured error body, populated for non-2xx responses that parse.
    pub api: Option<ApiErrorScheme>,
}

impl ResponseScheme {
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Error body returned by Confluence (`statusCode`/`message`/`data`) or
/// Jira (`errorMessages`/`errors`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorScheme {
    #[serde(rename = "statusCode")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ApiErrorDataScheme>,

    #[serde(rename = "errorMessages")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_messages: Vec<String>,

    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub errors: serde_json::Map<String, serde_json::Value>,

    #[serde(rename = "warningMessages")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warning_messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDataScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_in_read_only_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorEntryScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorEntryScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ApiErrorMessageScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorMessageScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl ApiErrorScheme {
    /// Best human-readable message across both error shapes.
    pub fn summary(&self) -> Option<String> {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return Some(message.to_string());
        }

        if !self.error_messages.is_empty() {
            return Some(self.error_messages.join("; "));
        }

        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|(field, value)| match value.as_str() {
                    Some(text) => format!("{}: {}", field, text),
                    None => format!("{}: {}", field, value),
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Some(joined);
        }

        self.data
            .as_ref()
            .and_then(|data| data.errors.first())
            .and_then(|entry| entry.message.as_ref())
            .and_then(|m| m.translation.clone().or_else(|| m.key.clone()))
            .or_else(|| self.reason.clone())
    }
}
