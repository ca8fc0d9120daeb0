//! Submission records

use crate::{Answer, CheckId, CheckItem};
use serde::{Deserialize, Serialize};

/// Result of one check, as sent to the Check Item Source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub check_id: CheckId,
    pub result: Answer,
}

impl CheckResult {
    pub fn new(check_id: impl Into<CheckId>, result: Answer) -> Self {
        Self {
            check_id: check_id.into(),
            result,
        }
    }

    /// Build a record from an item, if it is enabled and answered
    pub fn from_item(item: &CheckItem) -> Option<Self> {
        match item.result {
            Some(result) if item.is_enabled() => Some(Self {
                check_id: item.id.clone(),
                result,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_uses_camel_case() {
        let json = serde_json::to_value(CheckResult::new("aaa", Answer::Yes)).unwrap();
        assert_eq!(json, serde_json::json!({ "checkId": "aaa", "result": "yes" }));
    }

    #[test]
    fn test_from_item_skips_disabled_and_unanswered() {
        let mut item = CheckItem::new("bbb", 2, "Document supported");
        assert!(CheckResult::from_item(&item).is_none());

        item.result = Some(Answer::No);
        item.disabled = true;
        assert!(CheckResult::from_item(&item).is_none());

        item.disabled = false;
        assert_eq!(
            CheckResult::from_item(&item),
            Some(CheckResult::new("bbb", Answer::No))
        );
    }
}
