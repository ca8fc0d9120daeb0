//! Submission step

use checkform_types::{CheckItem, CheckResult};

/// Results for every enabled, answered item, in display order.
pub fn collect_results(items: &[CheckItem]) -> Vec<CheckResult> {
    items.iter().filter_map(CheckResult::from_item).collect()
}
