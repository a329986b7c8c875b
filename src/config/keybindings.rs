//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Keys bound to `action`, for the help overlay.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Cursor
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::SelectNext);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::SelectFirst);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::SelectFirst);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::SelectLast);

        // Editing
        keys.bind(KeyCode::Char('K'), KeyModifiers::SHIFT, KeyAction::MoveUp);
        keys.bind(KeyCode::Up, KeyModifiers::SHIFT, KeyAction::MoveUp);
        keys.bind(KeyCode::Char('J'), KeyModifiers::SHIFT, KeyAction::MoveDown);
        keys.bind(KeyCode::Down, KeyModifiers::SHIFT, KeyAction::MoveDown);
        keys.bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::Remove);
        keys.bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::Remove);
        keys.bind(KeyCode::Char('o'), KeyModifiers::NONE, KeyAction::InsertAfter);
        keys.bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::InsertAfter);

        // Context menu
        keys.bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::OpenMenu);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::MenuConfirm);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Dismiss);

        // Application controls
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_vim_navigation() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::SelectNext)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(KeyAction::SelectPrev)
        );
    }

    #[test]
    fn shifted_letters_move_instead_of_select() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)),
            Some(KeyAction::MoveDown),
            "Uppercase 'J' (shift+j) should move the selected row down"
        );
    }

    #[test]
    fn enter_confirms_and_escape_dismisses() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(KeyAction::MenuConfirm)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyAction::Dismiss)
        );
    }

    #[test]
    fn unbound_key_yields_none() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn keys_for_lists_every_binding() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.keys_for(KeyAction::Quit).len(), 2);
        assert_eq!(bindings.keys_for(KeyAction::Remove).len(), 2);
    }
}
