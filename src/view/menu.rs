//! Context menu popup.
//!
//! Geometry is shared with mouse hit testing through
//! [`menu_popup_rect`], so what is drawn is what is clickable.

use crate::state::mouse_handler::menu_popup_rect;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::styles::SELECTED;

/// Draw the open menu (if any) over `timeline_area`.
pub fn render_menu(frame: &mut Frame, timeline_area: Rect, state: &AppState) {
    let Some(anchor) = state.editor.menu().anchor() else {
        return;
    };
    let items = state.menu_items();
    if items.is_empty() {
        return;
    }
    let popup = menu_popup_rect(anchor, &items, timeline_area);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.menu_highlight {
                SELECTED
            } else {
                Style::default()
            };
            Line::styled(format!(" {} ", item.label()), style)
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        popup,
    );
}
