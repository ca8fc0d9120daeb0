use thiserror::Error;

/// Errors reported by a Check Item Source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("source returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Rejected selections.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatingError {
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item {index} is disabled")]
    ItemDisabled { index: usize },
}

/// Errors from the form session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("failed to fetch check items: {0}")]
    FetchFailed(#[source] SourceError),

    #[error("failed to submit check results: {0}")]
    SubmitFailed(#[source] SourceError),

    #[error(transparent)]
    Gating(#[from] GatingError),

    #[error("form is not ready to submit")]
    SubmitNotReady,

    #[error("a submission is already in flight")]
    SubmitInFlight,

    #[error("form has no check items loaded")]
    NotLoaded,
}

impl FormError {
    /// Fixed message shown to the user for operation failures.
    ///
    /// Source details never reach the user; they are logged instead.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            FormError::FetchFailed(_) => Some(crate::form::FETCH_FAILED_MESSAGE),
            FormError::SubmitFailed(_) => Some(crate::form::SUBMIT_FAILURE_MESSAGE),
            _ => None,
        }
    }
}

pub type FormResult<T> = Result<T, FormError>;
