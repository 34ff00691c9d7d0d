//! Keyboard mapping for the ticket browser
//!
//! Maps terminal key events to abstract browser actions as a pure function,
//! so the bindings can be unit tested without the iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::tui::state::Pane;

/// All possible actions on the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    // Navigation
    MoveDown,
    MoveUp,
    GoToTop,
    GoToBottom,
    PageDown,
    PageUp,

    // Pane cycling
    CyclePaneForward,
    CyclePaneBackward,

    // Search
    FocusSearch,
    ExitSearch,
    ClearSearchAndExit,

    // Store operations
    OpenForm,
    ToggleSelected,

    // App
    Quit,
}

/// Convert a key event to a BrowserAction.
///
/// Returns `None` if the key doesn't map to any action (in search mode this
/// lets the search box consume it as text).
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    active_pane: Pane,
) -> Option<BrowserAction> {
    if active_pane == Pane::Search {
        return search_key_to_action(code, modifiers);
    }

    match code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(BrowserAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowserAction::MoveUp),
        KeyCode::Char('g') => Some(BrowserAction::GoToTop),
        KeyCode::Char('G') => Some(BrowserAction::GoToBottom),
        KeyCode::PageDown => Some(BrowserAction::PageDown),
        KeyCode::PageUp => Some(BrowserAction::PageUp),

        // Pane navigation
        KeyCode::Tab => Some(BrowserAction::CyclePaneForward),
        KeyCode::BackTab => Some(BrowserAction::CyclePaneBackward),

        // Actions
        KeyCode::Char('/') => Some(BrowserAction::FocusSearch),
        KeyCode::Char('n') => Some(BrowserAction::OpenForm),
        KeyCode::Char('t') | KeyCode::Enter => Some(BrowserAction::ToggleSelected),
        KeyCode::Char('q') => Some(BrowserAction::Quit),

        // Escape goes back to list from detail, otherwise quits
        KeyCode::Esc if active_pane == Pane::Detail => Some(BrowserAction::CyclePaneBackward),
        KeyCode::Esc => Some(BrowserAction::Quit),

        _ => None,
    }
}

/// Convert a key event in search mode to a BrowserAction
fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BrowserAction> {
    match code {
        // Escape clears and exits
        KeyCode::Esc => Some(BrowserAction::ClearSearchAndExit),
        // Enter/Tab exits keeping query
        KeyCode::Enter | KeyCode::Tab => Some(BrowserAction::ExitSearch),
        // Ctrl+Q quits
        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(BrowserAction::Quit)
        }
        // Other characters are handled by the search box component
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Down, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('k'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Up, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('g'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::GoToTop)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('G'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::GoToBottom)
        );
        assert_eq!(
            key_to_action(KeyCode::PageDown, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::PageDown)
        );
        assert_eq!(
            key_to_action(KeyCode::PageUp, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::PageUp)
        );
    }

    #[test]
    fn test_pane_keys() {
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::CyclePaneForward)
        );
        assert_eq!(
            key_to_action(KeyCode::BackTab, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::CyclePaneBackward)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_to_action(KeyCode::Char('/'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::FocusSearch)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('n'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::OpenForm)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('t'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::ToggleSelected)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::ToggleSelected)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::Quit)
        );
    }

    #[test]
    fn test_escape_in_detail_goes_back() {
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Pane::Detail),
            Some(BrowserAction::CyclePaneBackward)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Pane::List),
            Some(BrowserAction::Quit)
        );
    }

    #[test]
    fn test_search_mode_keys() {
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, Pane::Search),
            Some(BrowserAction::ClearSearchAndExit)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, Pane::Search),
            Some(BrowserAction::ExitSearch)
        );
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::NONE, Pane::Search),
            Some(BrowserAction::ExitSearch)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, Pane::Search),
            Some(BrowserAction::Quit)
        );
    }

    #[test]
    fn test_search_mode_text_keys_fall_through() {
        // Regular keys in search mode are handled by the search box
        assert_eq!(
            key_to_action(KeyCode::Char('a'), KeyModifiers::NONE, Pane::Search),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, Pane::Search),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, Pane::Search),
            None
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(
            key_to_action(KeyCode::Char('x'), KeyModifiers::NONE, Pane::List),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::F(1), KeyModifiers::NONE, Pane::List),
            None
        );
    }
}
