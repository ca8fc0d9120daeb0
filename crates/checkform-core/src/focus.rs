//! Keyboard focus router
//!
//! Focus is an explicit index held by the form. Key presses are routed
//! against the current items and focus, and never against whatever the
//! rendering surface believes is focused.

use checkform_types::{Answer, CheckItem};
use std::str::FromStr;

/// A key press relayed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Number key, `1` selects the first option
    Digit(u8),
    ArrowUp,
    ArrowDown,
    Other,
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Parse a key name as reported by keyboard events (`"ArrowUp"`, `"2"`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            _ => name.parse::<u8>().map(Key::Digit).unwrap_or(Key::Other),
        })
    }
}

/// What a key press resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Select an option in the focused group, same as a click on it
    Select { index: usize, answer: Answer },
    /// Move focus to another enabled item
    MoveFocus { to: usize },
    /// The key has no effect in the current state
    Ignored,
}

/// Instruction for the rendering surface, emitted when focus changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirective {
    Blur(usize),
    Focus(usize),
}

/// Resolve a key press against the current items and focus.
///
/// Arrow movement starts from index 0 when nothing is focused and only
/// lands on enabled items.
pub fn route_key(items: &[CheckItem], focused: Option<usize>, key: Key) -> KeyAction {
    match key {
        Key::Digit(digit) => match (focused, Answer::from_position(digit as usize)) {
            (Some(index), Some(answer)) if index < items.len() => {
                KeyAction::Select { index, answer }
            }
            _ => KeyAction::Ignored,
        },
        Key::ArrowUp => {
            let from = focused.unwrap_or(0);
            match from.checked_sub(1) {
                Some(to) if is_enabled(items, to) => KeyAction::MoveFocus { to },
                _ => KeyAction::Ignored,
            }
        }
        Key::ArrowDown => {
            let to = focused.unwrap_or(0) + 1;
            if is_enabled(items, to) {
                KeyAction::MoveFocus { to }
            } else {
                KeyAction::Ignored
            }
        }
        Key::Other => KeyAction::Ignored,
    }
}

/// Directives needed to move focus from `from` to `to`.
pub fn focus_directives(from: Option<usize>, to: Option<usize>) -> Vec<FocusDirective> {
    if from == to {
        return Vec::new();
    }

    from.map(FocusDirective::Blur)
        .into_iter()
        .chain(to.map(FocusDirective::Focus))
        .collect()
}

fn is_enabled(items: &[CheckItem], index: usize) -> bool {
    items.get(index).is_some_and(CheckItem::is_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gating;

    fn items(count: usize) -> Vec<CheckItem> {
        gating::initialize(
            (0..count)
                .map(|idx| CheckItem::new(format!("c{}", idx), idx as i64, "check"))
                .collect(),
        )
    }

    #[test]
    fn test_key_names() {
        assert_eq!("ArrowUp".parse::<Key>().unwrap(), Key::ArrowUp);
        assert_eq!("ArrowDown".parse::<Key>().unwrap(), Key::ArrowDown);
        assert_eq!("2".parse::<Key>().unwrap(), Key::Digit(2));
        assert_eq!("Enter".parse::<Key>().unwrap(), Key::Other);
    }

    #[test]
    fn test_digit_selects_in_focused_group() {
        let items = items(3);
        assert_eq!(
            route_key(&items, Some(0), Key::Digit(1)),
            KeyAction::Select {
                index: 0,
                answer: Answer::Yes
            }
        );
        assert_eq!(
            route_key(&items, Some(0), Key::Digit(2)),
            KeyAction::Select {
                index: 0,
                answer: Answer::No
            }
        );
    }

    #[test]
    fn test_digit_without_focus_or_out_of_range() {
        let items = items(3);
        assert_eq!(route_key(&items, None, Key::Digit(1)), KeyAction::Ignored);
        assert_eq!(route_key(&items, Some(0), Key::Digit(0)), KeyAction::Ignored);
        assert_eq!(route_key(&items, Some(0), Key::Digit(3)), KeyAction::Ignored);
    }

    #[test]
    fn test_arrow_down_onto_disabled_is_noop() {
        let items = items(3);
        assert_eq!(route_key(&items, Some(0), Key::ArrowDown), KeyAction::Ignored);
    }

    #[test]
    fn test_arrows_move_between_enabled_items() {
        let items = gating::select(&items(3), 0, Answer::Yes).unwrap();
        assert_eq!(
            route_key(&items, Some(0), Key::ArrowDown),
            KeyAction::MoveFocus { to: 1 }
        );
        assert_eq!(
            route_key(&items, Some(1), Key::ArrowUp),
            KeyAction::MoveFocus { to: 0 }
        );
        assert_eq!(route_key(&items, Some(0), Key::ArrowUp), KeyAction::Ignored);
        assert_eq!(route_key(&items, Some(1), Key::ArrowDown), KeyAction::Ignored);
    }

    #[test]
    fn test_arrows_without_focus_start_at_first_item() {
        let items = gating::select(&items(2), 0, Answer::Yes).unwrap();
        assert_eq!(
            route_key(&items, None, Key::ArrowDown),
            KeyAction::MoveFocus { to: 1 }
        );
        assert_eq!(route_key(&items, None, Key::ArrowUp), KeyAction::Ignored);
    }

    #[test]
    fn test_focus_directives() {
        assert_eq!(
            focus_directives(Some(0), Some(1)),
            vec![FocusDirective::Blur(0), FocusDirective::Focus(1)]
        );
        assert_eq!(focus_directives(None, Some(2)), vec![FocusDirective::Focus(2)]);
        assert_eq!(focus_directives(Some(2), None), vec![FocusDirective::Blur(2)]);
        assert!(focus_directives(Some(1), Some(1)).is_empty());
    }
}
