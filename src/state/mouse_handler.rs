//! Mouse event handler.
//!
//! Functions that update AppState in place in response to mouse events.
//! Screen rows are mapped to layout units through `units_per_row` and the
//! scroll offset, then resolved with the layout's hit test.

use crate::state::app_state::{AppState, Selection};
use crate::state::edit_handler::activate_item;
use crate::state::menu::{Anchor, MenuItem};
use crate::view_state::HitTestResult;
use crossterm::event::MouseButton;
use ratatui::layout::Rect;

/// Rows scrolled per wheel notch.
pub const WHEEL_STEP: i32 = 3;

/// Screen rectangle of an open menu anchored at `anchor` inside `area`.
///
/// The popup hangs below-right of the anchor and is shifted back inside
/// `area` when it would overflow.
pub fn menu_popup_rect(anchor: Anchor, items: &[MenuItem], area: Rect) -> Rect {
    let label_width = items
        .iter()
        .map(|i| i.label().len() as u16)
        .max()
        .unwrap_or(0);
    let width = (label_width + 4).min(area.width);
    let height = (items.len() as u16 + 2).min(area.height);

    let mut x = area.x + anchor.x;
    if x + width > area.x + area.width {
        x = (area.x + area.width).saturating_sub(width);
    }
    let mut y = area.y + anchor.y + 1;
    if y + height > area.y + area.height {
        // flip above the anchor row
        y = (area.y + anchor.y).saturating_sub(height).max(area.y);
    }
    Rect::new(x, y, width, height)
}

/// Which item of a popup at `popup` (if any) is under the click.
pub fn detect_menu_item_click(
    click_x: u16,
    click_y: u16,
    popup: Rect,
    item_count: usize,
) -> Option<usize> {
    // items sit inside the border
    if click_x <= popup.x
        || click_x + 1 >= popup.x + popup.width
        || click_y <= popup.y
        || click_y + 1 >= popup.y + popup.height
    {
        return None;
    }
    let index = (click_y - popup.y - 1) as usize;
    (index < item_count).then_some(index)
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Resolve a screen position inside `timeline_area` to a timeline row.
pub fn hit_test_screen(state: &AppState, click_y: u16, timeline_area: Rect) -> HitTestResult {
    let local_row = u32::from(click_y.saturating_sub(timeline_area.y));
    let row = local_row.saturating_add(state.scroll_offset);
    // sample the middle of the terminal row
    let units = state.units_at_row(row) + u32::from(state.units_per_row.max(1)) / 2;
    state.layout().hit_test(units)
}

/// Handle a mouse button press.
///
/// * Right click on an entry opens its menu at the click position.
/// * Left click on a menu item runs it; a click outside the menu closes it.
/// * Left click on a row selects it.
pub fn handle_mouse_click(
    state: &mut AppState,
    button: MouseButton,
    click_x: u16,
    click_y: u16,
    timeline_area: Rect,
) {
    if state.help_visible {
        state.help_visible = false;
        return;
    }

    if let Some(anchor) = state.editor.menu().anchor() {
        let items = state.menu_items();
        let popup = menu_popup_rect(anchor, &items, timeline_area);
        if button == MouseButton::Left && contains(popup, click_x, click_y) {
            if let Some(index) = detect_menu_item_click(click_x, click_y, popup, items.len()) {
                activate_item(state, items[index]);
            }
            return;
        }
        // outside click
        state.editor.dismiss_menu();
        if button == MouseButton::Left {
            return;
        }
    }

    if !contains(timeline_area, click_x, click_y) {
        return;
    }

    match hit_test_screen(state, click_y, timeline_area) {
        HitTestResult::Entry { id } => {
            state.selection = Selection::Entry(id.clone());
            if button == MouseButton::Right {
                let anchor = Anchor::new(click_x - timeline_area.x, click_y - timeline_area.y);
                state.menu_highlight = 0;
                state.editor.open_menu(&id, anchor);
            }
        }
        HitTestResult::SubEntry { segment_id, sub_id } => {
            state.selection = Selection::SubEntry { segment_id, sub_id };
        }
        HitTestResult::Miss => {}
    }
}

/// Handle a wheel notch. Positive `notches` scroll down.
pub fn handle_mouse_scroll(state: &mut AppState, notches: i32, viewport_height: u16) {
    state.scroll_by(notches * WHEEL_STEP, viewport_height);
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
