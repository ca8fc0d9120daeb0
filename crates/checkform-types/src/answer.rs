//! Yes/no answers

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Response to a single check item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Options in the order they are offered to the user.
    ///
    /// Numeric key `n` selects `OPTIONS[n - 1]`.
    pub const OPTIONS: [Answer; 2] = [Answer::Yes, Answer::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }

    /// Display label for the option
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }

    /// Option for a 1-based position, as typed on a number key
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::OPTIONS.get(idx))
            .copied()
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is neither a yes nor a no
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid answer '{0}', expected yes or no")]
pub struct ParseAnswerError(pub String);

impl FromStr for Answer {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            _ => Err(ParseAnswerError(s.to_string())),
        }
    }
}
