//! Client error types

use checkform_core::SourceError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint could not be used as a base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Non-success response
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unsupported checks file
    #[error("Unsupported checks file: {0}")]
    UnsupportedFile(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_decode() => SourceError::Decode(e.to_string()),
            ClientError::Http(e) => SourceError::Transport(e.to_string()),
            ClientError::Api { status, message } => SourceError::Status { status, message },
            ClientError::Io(e) => SourceError::Io(e.to_string()),
            ClientError::Json(e) => SourceError::Decode(e.to_string()),
            ClientError::Yaml(e) => SourceError::Decode(e.to_string()),
            ClientError::InvalidEndpoint(msg) | ClientError::UnsupportedFile(msg) => {
                SourceError::Unavailable(msg)
            }
        }
    }
}
