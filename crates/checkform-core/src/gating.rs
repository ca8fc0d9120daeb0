//! Gating state machine
//!
//! Only the first item is answerable after a load. Each selection rebuilds
//! the enabled/disabled chain for every item after the selected one:
//!
//! - **no** closes the whole suffix
//! - **yes** opens the next item, and keeps opening items for as long as the
//!   answers that follow are "yes" themselves
//!
//! Items at or before the selected index are never touched, so revising an
//! earlier answer tightens or loosens the gate from that point forward.

use checkform_types::{Answer, CheckItem};
use tracing::debug;

use crate::error::GatingError;

/// Reset every answer and open only the first item.
pub fn initialize(items: Vec<CheckItem>) -> Vec<CheckItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| CheckItem {
            result: None,
            disabled: index != 0,
            ..item
        })
        .collect()
}

/// Record `answer` for the item at `index` and recompute the suffix.
///
/// Returns the new item list; `items` is not modified. Selecting a disabled
/// or missing item is rejected.
pub fn select(
    items: &[CheckItem],
    index: usize,
    answer: Answer,
) -> Result<Vec<CheckItem>, GatingError> {
    let target = items.get(index).ok_or(GatingError::IndexOutOfRange {
        index,
        len: items.len(),
    })?;
    if target.disabled {
        return Err(GatingError::ItemDisabled { index });
    }

    let mut next = items.to_vec();
    next[index].result = Some(answer);

    let mut chain_open = answer == Answer::Yes;
    for item in next.iter_mut().skip(index + 1) {
        item.disabled = !chain_open;
        chain_open = chain_open && item.answered(Answer::Yes);
    }

    debug!(
        index,
        %answer,
        enabled = next.iter().filter(|item| item.is_enabled()).count(),
        "Applied selection"
    );

    Ok(next)
}

/// Whether the form may be submitted.
///
/// True once every item is "yes", or as soon as any item is "no".
pub fn is_submit_ready(items: &[CheckItem]) -> bool {
    items.iter().all(|item| item.answered(Answer::Yes))
        || items.iter().any(|item| item.answered(Answer::No))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(count: usize) -> Vec<CheckItem> {
        initialize(
            (0..count)
                .map(|idx| CheckItem::new(format!("c{}", idx), idx as i64, "check"))
                .collect(),
        )
    }

    fn disabled_flags(items: &[CheckItem]) -> Vec<bool> {
        items.iter().map(|item| item.disabled).collect()
    }

    #[test]
    fn test_initial_state() {
        let items = items(3);
        assert_eq!(disabled_flags(&items), vec![false, true, true]);
        assert!(items.iter().all(|item| item.result.is_none()));
    }

    #[test]
    fn test_initialize_clears_previous_answers() {
        let mut answered = items(2);
        answered[0].result = Some(Answer::Yes);
        answered[1].disabled = false;

        let reset = initialize(answered);
        assert_eq!(disabled_flags(&reset), vec![false, true]);
        assert!(reset.iter().all(|item| item.result.is_none()));
    }

    #[test]
    fn test_yes_opens_next_item() {
        let items = select(&items(3), 0, Answer::Yes).unwrap();
        assert_eq!(disabled_flags(&items), vec![false, false, true]);
        assert_eq!(items[0].result, Some(Answer::Yes));
    }

    #[test]
    fn test_no_closes_suffix() {
        let mut state = items(3);
        for idx in 0..3 {
            state = select(&state, idx, Answer::Yes).unwrap();
        }
        assert_eq!(disabled_flags(&state), vec![false, false, false]);

        let state = select(&state, 0, Answer::No).unwrap();
        assert_eq!(disabled_flags(&state), vec![false, true, true]);
        // answers on closed items are kept but no longer count
        assert_eq!(state[1].result, Some(Answer::Yes));
    }

    #[test]
    fn test_revising_to_yes_reopens_chain() {
        let mut state = items(4);
        for idx in 0..3 {
            state = select(&state, idx, Answer::Yes).unwrap();
        }
        state = select(&state, 0, Answer::No).unwrap();
        assert_eq!(disabled_flags(&state), vec![false, true, true, true]);

        state = select(&state, 0, Answer::Yes).unwrap();
        assert_eq!(disabled_flags(&state), vec![false, false, false, false]);
    }

    #[test]
    fn test_chain_stops_at_first_non_yes() {
        let mut state = items(4);
        state = select(&state, 0, Answer::Yes).unwrap();
        state = select(&state, 1, Answer::Yes).unwrap();
        state = select(&state, 2, Answer::Yes).unwrap();
        state = select(&state, 1, Answer::No).unwrap();
        assert_eq!(disabled_flags(&state), vec![false, false, true, true]);

        // item 1 is "no", so item 2 and everything after it stay closed,
        // even though item 2 still carries a stale "yes"
        state = select(&state, 0, Answer::Yes).unwrap();
        assert_eq!(disabled_flags(&state), vec![false, false, true, true]);
    }

    #[test]
    fn test_earlier_items_untouched() {
        let mut state = items(3);
        state = select(&state, 0, Answer::Yes).unwrap();
        state = select(&state, 1, Answer::No).unwrap();
        assert_eq!(state[0].result, Some(Answer::Yes));
        assert!(!state[0].disabled);
        assert!(!state[1].disabled);
    }

    #[test]
    fn test_select_disabled_rejected() {
        let state = items(3);
        assert_eq!(
            select(&state, 2, Answer::Yes),
            Err(GatingError::ItemDisabled { index: 2 })
        );
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        assert_eq!(
            select(&items(2), 5, Answer::No),
            Err(GatingError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_submit_ready() {
        let state = items(3);
        assert!(!is_submit_ready(&state));

        let state = select(&state, 0, Answer::No).unwrap();
        assert!(is_submit_ready(&state));
    }

    #[test]
    fn test_submit_ready_only_after_last_yes() {
        let mut state = items(3);
        for idx in 0..3 {
            assert!(!is_submit_ready(&state));
            state = select(&state, idx, Answer::Yes).unwrap();
        }
        assert!(is_submit_ready(&state));
    }

    fn answered_items() -> impl Strategy<Value = Vec<CheckItem>> {
        prop::collection::vec(
            (any::<bool>(), prop::option::of(any::<bool>())),
            1..12,
        )
        .prop_map(|flags| {
            flags
                .into_iter()
                .enumerate()
                .map(|(idx, (disabled, answer))| CheckItem {
                    disabled,
                    result: answer.map(|yes| if yes { Answer::Yes } else { Answer::No }),
                    ..CheckItem::new(format!("c{}", idx), idx as i64, "check")
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn no_disables_every_later_item(mut items in answered_items(), pick in any::<prop::sample::Index>()) {
            let index = pick.index(items.len());
            items[index].disabled = false;

            let next = select(&items, index, Answer::No).unwrap();
            prop_assert!(next[index + 1..].iter().all(|item| item.disabled));
            prop_assert_eq!(&next[..index], &items[..index]);
        }

        #[test]
        fn yes_enables_unbroken_chain(mut items in answered_items(), pick in any::<prop::sample::Index>()) {
            let index = pick.index(items.len());
            items[index].disabled = false;

            let next = select(&items, index, Answer::Yes).unwrap();
            prop_assert_eq!(&next[..index], &items[..index]);
            for j in index + 1..next.len() {
                let chain = next[index + 1..j].iter().all(|item| item.answered(Answer::Yes));
                prop_assert_eq!(next[j].disabled, !chain);
            }
        }

        #[test]
        fn submit_ready_matches_definition(items in answered_items()) {
            let all_yes = items.iter().all(|item| item.result == Some(Answer::Yes));
            let any_no = items.iter().any(|item| item.result == Some(Answer::No));
            prop_assert_eq!(is_submit_ready(&items), all_yes || any_no);
        }
    }
}
