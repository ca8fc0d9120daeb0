//! Check item types
//!
//! A CheckItem is one yes/no verification question. The remote source only
//! provides `id`, `priority` and `description`; `result` and `disabled` are
//! owned by the gating state machine.

use crate::{Answer, CheckId};
use serde::{Deserialize, Serialize};

/// A single verification question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    /// Unique check identifier
    pub id: CheckId,

    /// Display priority; lower values are shown first
    pub priority: i64,

    /// Human-readable prompt text
    pub description: String,

    /// Recorded answer, unset until the user selects an option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Answer>,

    /// Whether the item currently refuses selections
    #[serde(default)]
    pub disabled: bool,
}

impl CheckItem {
    /// Create an unanswered, enabled item
    pub fn new(id: impl Into<CheckId>, priority: i64, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority,
            description: description.into(),
            result: None,
            disabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn answered(&self, answer: Answer) -> bool {
        self.result == Some(answer)
    }
}
