use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for Jotform API operations
#[derive(Debug, Error)]
pub enum JotFormError {
    /// Non-2xx response carrying a JSON error body
    #[error("Jotform API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Value,
    },

    /// Non-2xx response whose body is not JSON
    #[error("HTTP error {status}: {body}")]
    Http {
        status: u16,
        body: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Endpoint exposed by the client but not backed by a request
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// No API key found in the environment
    #[error("JOTFORM_API_KEY is not set")]
    MissingApiKey,

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl JotFormError {
    /// Create an API error from a status code and the parsed error body.
    ///
    /// The message is taken from the body's `message` field, falling back to
    /// the status reason phrase.
    pub fn from_body(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| m.to_string())
            .unwrap_or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(|reason| reason.to_string())
                    .unwrap_or_else(|| format!("HTTP {}", status))
            });

        JotFormError::Api {
            status,
            message,
            body,
        }
    }

    /// Create a new HTTP error
    pub fn http(status: u16, body: String, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        JotFormError::Http { status, body, source }
    }

    /// Check if this error is an authentication failure (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Get the HTTP status code if the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            JotFormError::Api { status, .. } | JotFormError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The parsed error body returned by the API, if any
    pub fn diagnostic(&self) -> Option<&Value> {
        match self {
            JotFormError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for Jotform operations
pub type Result<T> = std::result::Result<T, JotFormError>;
