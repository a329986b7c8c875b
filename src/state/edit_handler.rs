//! Keyboard action handler.
//!
//! Functions that update AppState in place in response to key actions.
//! Navigation moves the row cursor (or the menu highlight while a menu is
//! open); edit actions target the selected row through the editor.

use crate::model::KeyAction;
use crate::state::app_state::{AppState, Selection};
use crate::state::menu::{Anchor, MenuItem};
use crate::state::segment_store::{EditOutcome, NoOpReason};

/// Column (timeline-relative) a keyboard-opened menu is anchored to.
pub const KEYBOARD_MENU_COLUMN: u16 = 4;

/// Apply a key action to the state.
///
/// `Quit` is not handled here; the event loop owns termination.
pub fn handle_key_action(state: &mut AppState, action: KeyAction) {
    if state.help_visible {
        if matches!(action, KeyAction::Help | KeyAction::Dismiss) {
            state.help_visible = false;
        }
        return;
    }

    if state.editor.menu().is_open() {
        handle_menu_action(state, action);
        return;
    }

    match action {
        KeyAction::SelectNext => state.select_next(),
        KeyAction::SelectPrev => state.select_prev(),
        KeyAction::SelectFirst => state.select_first(),
        KeyAction::SelectLast => state.select_last(),
        KeyAction::MoveUp => {
            move_selected(state, true);
        }
        KeyAction::MoveDown => {
            move_selected(state, false);
        }
        KeyAction::Remove => {
            remove_selected(state);
        }
        KeyAction::InsertAfter => {
            insert_after_selected(state);
        }
        KeyAction::OpenMenu | KeyAction::MenuConfirm => {
            open_menu_on_selection(state);
        }
        KeyAction::Help => state.help_visible = true,
        KeyAction::Dismiss | KeyAction::Quit => {}
    }
}

fn handle_menu_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::SelectNext => state.menu_highlight_next(),
        KeyAction::SelectPrev => state.menu_highlight_prev(),
        KeyAction::MenuConfirm => {
            confirm_menu_item(state);
        }
        KeyAction::Dismiss | KeyAction::OpenMenu => state.editor.dismiss_menu(),
        _ => {}
    }
}

/// Run the highlighted menu item and follow the selection to its result.
pub fn confirm_menu_item(state: &mut AppState) -> EditOutcome {
    let Some(item) = state.highlighted_menu_item() else {
        state.editor.dismiss_menu();
        return EditOutcome::Ignored(NoOpReason::UnknownId);
    };
    activate_item(state, item)
}

/// Run `item` against the menu target, keeping the cursor sensible.
pub fn activate_item(state: &mut AppState, item: MenuItem) -> EditOutcome {
    let target = state.editor.menu().target().cloned();
    let previous = state.selected_index().unwrap_or(0);
    let outcome = state.editor.activate_menu_item(item);
    state.menu_highlight = 0;
    if outcome == EditOutcome::Applied {
        match (item, target) {
            (MenuItem::AddSegment, Some(anchor)) => state.select_after(&anchor),
            _ => state.reconcile_selection(previous),
        }
    }
    outcome
}

/// Open the context menu on the selected row's entry.
///
/// Sub-entry rows have no menu of their own.
pub fn open_menu_on_selection(state: &mut AppState) -> bool {
    let Selection::Entry(id) = state.selection.clone() else {
        return false;
    };
    let Some(row) = state.selection_marker_row() else {
        return false;
    };
    let local_row = u16::try_from(row.saturating_sub(state.scroll_offset)).unwrap_or(u16::MAX);
    let anchor = Anchor::new(KEYBOARD_MENU_COLUMN, local_row);
    state.menu_highlight = 0;
    state.editor.open_menu(&id, anchor)
}

fn move_selected(state: &mut AppState, up: bool) -> EditOutcome {
    match state.selection.clone() {
        Selection::Entry(id) if up => state.editor.move_segment_up(&id),
        Selection::Entry(id) => state.editor.move_segment_down(&id),
        Selection::SubEntry { segment_id, sub_id } if up => {
            state.editor.move_sub_entry_up(&segment_id, &sub_id)
        }
        Selection::SubEntry { segment_id, sub_id } => {
            state.editor.move_sub_entry_down(&segment_id, &sub_id)
        }
    }
}

fn remove_selected(state: &mut AppState) -> EditOutcome {
    let previous = state.selected_index().unwrap_or(0);
    let outcome = match state.selection.clone() {
        Selection::Entry(id) => state.editor.remove_segment(&id),
        Selection::SubEntry { segment_id, sub_id } => {
            state.editor.remove_sub_entry(&segment_id, &sub_id)
        }
    };
    if outcome == EditOutcome::Applied {
        state.reconcile_selection(previous);
    }
    outcome
}

fn insert_after_selected(state: &mut AppState) -> EditOutcome {
    // inserting from a sub-entry row places the new segment after its parent
    let anchor = state.selection.owner().clone();
    let outcome = state.editor.insert_segment_after(&anchor);
    if outcome == EditOutcome::Applied {
        state.select_after(&anchor);
    }
    outcome
}
