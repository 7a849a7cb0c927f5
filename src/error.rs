use thiserror::Error;

use crate::models::ResponseScheme;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
        response: Box<ResponseScheme>,
    },

    #[error("JSON parsing failed: {source}")]
    Decode {
        source: serde_json::Error,
        response: Box<ResponseScheme>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),
}

impl Error {
    /// Response metadata for errors raised after the HTTP round trip completed.
    pub fn response(&self) -> Option<&ResponseScheme> {
        match self {
            Error::ApiError { response, .. } | Error::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiError { status, .. } => Some(*status),
            Error::Decode { response, .. } => Some(response.code),
            Error::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Rejects empty or whitespace-only identifiers before any request is built.
pub(crate) fn ensure_present(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingParameter { name });
    }
    Ok(())
}

/// Like [`ensure_present`], and also rejects `.` and `..`, which URL joining
/// would resolve as dot segments instead of sending as identifiers.
pub(crate) fn ensure_path_segment(value: &str, name: &'static str) -> Result<()> {
    ensure_present(value, name)?;
    if matches!(value, "." | "..") {
        return Err(Error::InvalidInput(format!("{} cannot be '{}'", name, value)));
    }
    Ok(())
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_present_rejects_blank() {
        assert!(ensure_present("80412692", "content id").is_ok());

        for blank in ["", "   ", "\t\n"] {
            match ensure_present(blank, "content id") {
                Err(Error::MissingParameter { name }) => assert_eq!(name, "content id"),
                other => panic!("Expected MissingParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_ensure_path_segment_rejects_dot_segments() {
        assert!(ensure_path_segment("DUMMY", "space key").is_ok());
        assert!(ensure_path_segment("v1.2", "label name").is_ok());
        assert!(ensure_path_segment("...", "label name").is_ok());

        for dots in [".", ".."] {
            match ensure_path_segment(dots, "label name") {
                Err(Error::InvalidInput(message)) => assert!(message.contains("label name")),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }

        assert!(matches!(
            ensure_path_segment(" ", "space key"),
            Err(Error::MissingParameter { name: "space key" })
        ));
    }

    #[test]
    fn test_response_is_attached_to_api_errors() {
        let response = ResponseScheme {
            endpoint: "https://example.atlassian.net/wiki/rest/api/space/DUMMY".to_string(),
            method: "GET".to_string(),
            code: 400,
            bytes: br#"{"message":"bad"}"#.to_vec(),
            api: None,
        };
        let err = Error::ApiError {
            status: 400,
            message: "bad".to_string(),
            response: Box::new(response),
        };

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.response().map(|r| r.code), Some(400));
        assert_eq!(err.to_string(), "API error: 400 - bad");
    }

    #[test]
    fn test_validation_errors_carry_no_response() {
        let err = Error::MissingParameter { name: "space key" };
        assert!(err.response().is_none());
        assert!(err.status().is_none());
        assert_eq!(err.to_string(), "Missing required parameter: space key");
    }
}
