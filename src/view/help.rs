//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: category header, then (keys, description) rows.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Cursor",
        &[
            ("j/↓", "Select next row"),
            ("k/↑", "Select previous row"),
            ("g/Home", "Select Start"),
            ("G/End", "Select End"),
        ],
    ),
    (
        "Editing",
        &[
            ("K/Shift+↑", "Move segment or sub-entry up"),
            ("J/Shift+↓", "Move segment or sub-entry down"),
            ("d/Delete", "Remove selection"),
            ("o/a", "Insert segment after selection"),
        ],
    ),
    (
        "Menu",
        &[
            ("m", "Toggle menu on selected entry"),
            ("Enter", "Open menu / run highlighted item"),
            ("Esc", "Close menu"),
            ("Right click", "Open menu at pointer"),
        ],
    ),
    (
        "Application",
        &[("?", "Show help overlay"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
///
/// Categories: Cursor, Editing, Menu, Application. Editing keys are listed
/// even in read-only mode, where they do nothing.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        super::styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let category_style = super::styles::SECTION_HEADER;
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (i, (category, rows)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
