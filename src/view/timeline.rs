//! Timeline renderer.
//!
//! Draws the computed layout into a terminal buffer. Layout units are
//! scaled to rows by `AppState::units_per_row`; the geometry itself never
//! sees terminal types.

use super::constants::{MARKER_COLUMN, SUB_MARKER_COLUMN, SUB_TEXT_COLUMN, TEXT_COLUMN};
use super::styles::{
    icon_glyph, TimelineStyles, CONNECTOR_GLYPH, DEFAULT_MARKER, DEFAULT_SUB_MARKER,
    SUB_CONNECTOR_GLYPH,
};
use crate::model::{Entry, EntryContent};
use crate::state::{AppState, Selection};
use crate::view_state::connector::{MARKER_CENTER_OFFSET, SUB_MARKER_CENTER_OFFSET};
use crate::view_state::{Connector, PlacedEntry};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal cells, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Absolute rows a connector occupies, excluding both marker rows.
pub fn connector_rows(
    state: &AppState,
    entry_top: u32,
    connector: Connector,
    marker_row: u32,
) -> Range<u32> {
    let start = state
        .row_of(entry_top + connector.start_offset)
        .max(marker_row + 1);
    let end = state.row_of(entry_top + connector.end_offset());
    start..end.max(start)
}

/// Viewport onto the absolute row space.
struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    scroll: u32,
}

impl Canvas<'_> {
    /// Write `text` at (`col`, absolute `row`); returns the cells used.
    fn put(&mut self, col: u16, row: u32, text: &str, style: Style) -> u16 {
        if row < self.scroll || col >= self.area.width {
            return 0;
        }
        let Some(local) = u16::try_from(row - self.scroll)
            .ok()
            .filter(|local| *local < self.area.height)
        else {
            return 0;
        };
        let max_width = usize::from(self.area.width - col);
        let clipped = truncate_to_width(text, max_width);
        let (x, _) = self.buf.set_stringn(
            self.area.x + col,
            self.area.y + local,
            &clipped,
            max_width,
            style,
        );
        x.saturating_sub(self.area.x + col)
    }
}

/// Render the timeline of `state` into `area` of the frame.
pub fn render_timeline(frame: &mut Frame, area: Rect, state: &AppState, styles: &TimelineStyles) {
    render_timeline_to_buffer(frame.buffer_mut(), area, state, styles);
}

/// Render into a raw buffer (used by tests and the frame wrapper).
pub fn render_timeline_to_buffer(
    buf: &mut Buffer,
    area: Rect,
    state: &AppState,
    styles: &TimelineStyles,
) {
    let layout = state.layout();
    let mut canvas = Canvas {
        buf,
        area,
        scroll: state.scroll_offset,
    };

    for (placed, entry) in layout.entries().iter().zip(state.editor.itinerary().entries()) {
        draw_entry(&mut canvas, state, styles, placed, entry);
    }
}

fn draw_entry(
    canvas: &mut Canvas<'_>,
    state: &AppState,
    styles: &TimelineStyles,
    placed: &PlacedEntry,
    entry: &Entry,
) {
    let marker_row = state.row_of(placed.top + MARKER_CENTER_OFFSET);
    let marker_style = styles.marker(entry.color());

    if let Some(connector) = placed.connector {
        for row in connector_rows(state, placed.top, connector, marker_row) {
            canvas.put(MARKER_COLUMN, row, CONNECTOR_GLYPH, styles.connector());
        }
    }

    let glyph = icon_glyph(entry.icon()).unwrap_or(DEFAULT_MARKER);
    canvas.put(MARKER_COLUMN, marker_row, glyph, marker_style);

    let selected = state.selection == Selection::Entry(entry.id.clone());
    let limit = state
        .row_of(placed.top + placed.metrics.content_height)
        .max(marker_row + 1);
    draw_text(
        canvas,
        styles,
        &entry.content,
        TEXT_COLUMN,
        marker_row..limit,
        selected,
    );

    for child_placed in &placed.children {
        let Some(child) = entry.child(&child_placed.id) else {
            continue;
        };
        let child_marker_row = state.row_of(child_placed.top + SUB_MARKER_CENTER_OFFSET);

        if let Some(connector) = child_placed.connector {
            for row in connector_rows(state, child_placed.top, connector, child_marker_row) {
                canvas.put(SUB_MARKER_COLUMN, row, SUB_CONNECTOR_GLYPH, styles.connector());
            }
        }

        let glyph = icon_glyph(child.icon()).unwrap_or(DEFAULT_SUB_MARKER);
        canvas.put(SUB_MARKER_COLUMN, child_marker_row, glyph, styles.marker(child.color()));

        let selected = state.selection
            == Selection::SubEntry {
                segment_id: entry.id.clone(),
                sub_id: child.id.clone(),
            };
        let limit = state
            .row_of(child_placed.top + child_placed.height)
            .max(child_marker_row + 1);
        draw_text(
            canvas,
            styles,
            &child.content,
            SUB_TEXT_COLUMN,
            child_marker_row..limit,
            selected,
        );
    }
}

/// Title (with duration) on the first row, then subtitle and description
/// lines, clipped to `rows`.
fn draw_text(
    canvas: &mut Canvas<'_>,
    styles: &TimelineStyles,
    content: &EntryContent,
    col: u16,
    rows: Range<u32>,
    selected: bool,
) {
    let mut row = rows.start;
    let used = canvas.put(col, row, &content.title, styles.title(selected));
    if let Some(duration) = &content.duration {
        canvas.put(col + used + 2, row, duration, styles.muted());
    }
    row += 1;

    let subtitle = content.subtitle.iter().flat_map(|s| s.split('\n'));
    let description = content.description.iter().flat_map(|d| d.split('\n'));
    let lines = subtitle
        .map(|l| (l, Style::new()))
        .chain(description.map(|l| (l, styles.muted())));

    for (line, style) in lines {
        if row >= rows.end {
            break;
        }
        canvas.put(col, row, line, style);
        row += 1;
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
