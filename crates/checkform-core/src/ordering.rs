//! Item ordering step

use checkform_types::CheckItem;

/// Sort items by ascending priority.
///
/// The sort is stable, so equal priorities keep their fetch order. The
/// input slice is left untouched.
pub fn order_by_priority(items: &[CheckItem]) -> Vec<CheckItem> {
    let mut ordered = items.to_vec();
    ordered.sort_by_key(|item| item.priority);
    ordered
}
