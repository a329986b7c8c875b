//! Screen layout rendering.
//!
//! Header bar, timeline area and status bar, with the menu and help
//! overlay drawn on top.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::{TimelineStyles, MUTED_TEXT};
use super::{help, menu, timeline};
use crate::state::{AppState, Selection};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the full screen: header, timeline, status bar and overlays.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &TimelineStyles) {
    let [header_area, timeline_area, status_area] = split(frame.area());

    render_header(frame, header_area, state);
    timeline::render_timeline(frame, timeline_area, state, styles);
    render_status_bar(frame, status_area, state);

    menu::render_menu(frame, timeline_area, state);
    if state.help_visible {
        help::render_help_overlay(frame);
    }
}

/// Area the timeline occupies inside a frame of `frame_area`.
///
/// Used by the event loop to map mouse positions before the next draw.
pub fn calculate_timeline_area(frame_area: Rect) -> Rect {
    split(frame_area)[1]
}

fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Header: itinerary title, edit mode and segment count.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let itinerary = state.editor.itinerary();
    let (mode, mode_style) = if state.editor.is_editable() {
        ("EDIT", Style::default().fg(Color::Green))
    } else {
        ("READ-ONLY", Style::default().fg(Color::Yellow))
    };
    let count = itinerary.segments.len();
    let noun = if count == 1 { "segment" } else { "segments" };

    let line = Line::from(vec![
        Span::styled(itinerary.title.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(mode, mode_style),
        Span::raw(format!(" | {count} {noun}")),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Status bar: the selected row's title and, optionally, a key hint.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::raw(selection_label(state))];
    if state.show_help_hint {
        spans.push(Span::styled("  ?: help | q: quit", MUTED_TEXT));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn selection_label(state: &AppState) -> String {
    let itinerary = state.editor.itinerary();
    match &state.selection {
        Selection::Entry(id) => itinerary
            .entries()
            .find(|e| &e.id == id)
            .map(|e| e.content.title.clone())
            .unwrap_or_default(),
        Selection::SubEntry { segment_id, sub_id } => itinerary
            .segment(segment_id)
            .and_then(|s| s.child(sub_id).map(|c| (s, c)))
            .map(|(s, c)| format!("{} › {}", s.content.title, c.content.title))
            .unwrap_or_default(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
