//! CLI error types

use checkform_client::ClientError;
use checkform_core::FormError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Form session error
    #[error(transparent)]
    Form(#[from] FormError),

    /// Source construction error
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Prompt was closed or failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Message shown to the user; fetch and submit failures use their
    /// fixed wording.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Form(err) => err
                .user_message()
                .map(String::from)
                .unwrap_or_else(|| err.to_string()),
            other => other.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
