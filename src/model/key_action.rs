//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor
    /// Select the previous row (entry or sub-entry). Default: k/↑
    SelectPrev,
    /// Select the next row. Default: j/↓
    SelectNext,
    /// Select the Start sentinel. Default: g/Home
    SelectFirst,
    /// Select the End sentinel. Default: G/End
    SelectLast,

    // Editing (suppressed when read-only)
    /// Move the selected segment or sub-entry one slot up. Default: K/Shift+↑
    MoveUp,
    /// Move the selected segment or sub-entry one slot down. Default: J/Shift+↓
    MoveDown,
    /// Remove the selected segment or sub-entry. Default: d/Delete
    Remove,
    /// Insert a new segment after the selected entry. Default: o/a
    InsertAfter,

    // Context menu
    /// Open (or close) the context menu on the selected entry. Default: m
    OpenMenu,
    /// Activate the highlighted menu item; opens the menu when closed. Default: Enter
    MenuConfirm,
    /// Dismiss the open menu. Default: Esc
    Dismiss,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action mutates the itinerary (or opens the menu that does).
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            KeyAction::MoveUp
                | KeyAction::MoveDown
                | KeyAction::Remove
                | KeyAction::InsertAfter
                | KeyAction::OpenMenu
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_actions_are_edits() {
        assert!(KeyAction::MoveUp.is_edit());
        assert!(KeyAction::MoveDown.is_edit());
        assert!(KeyAction::Remove.is_edit());
        assert!(KeyAction::InsertAfter.is_edit());
        assert!(KeyAction::OpenMenu.is_edit());
    }

    #[test]
    fn navigation_actions_are_not_edits() {
        assert!(!KeyAction::SelectPrev.is_edit());
        assert!(!KeyAction::SelectNext.is_edit());
        assert!(!KeyAction::Dismiss.is_edit());
        assert!(!KeyAction::Help.is_edit());
        assert!(!KeyAction::Quit.is_edit());
    }
}
