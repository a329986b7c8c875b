//! Height estimation for timeline entries.

use crate::model::EntryContent;

/// Height of the title row.
pub const TITLE_HEIGHT: u32 = 24;
/// Fixed cost of an optional text block (subtitle or description).
pub const TEXT_BLOCK_HEIGHT: u32 = 16;
/// Cost of each embedded line break inside a text block.
pub const LINE_BREAK_HEIGHT: u32 = 16;
/// Flat addition when a duration is shown.
pub const DURATION_HEIGHT: u32 = 4;
/// No entry is ever shorter than this.
pub const MIN_ENTRY_HEIGHT: u32 = 32;

/// Estimate the vertical extent of an entry in layout units.
///
/// This is THE canonical height source for timeline layout. The renderer
/// never measures text; it scales these units onto terminal rows.
///
/// - base 24 for the title row
/// - `16 + 16 * line_breaks` for the subtitle, if present
/// - `16 + 16 * line_breaks` for the description, if present
/// - 4 if a duration is present
/// - clamped to at least 32
///
/// Line breaks in the title do not add height. The function is total and
/// deterministic (same text in, same height out).
///
/// # Examples
///
/// ```
/// use tripline::model::EntryContent;
/// use tripline::view_state::height::estimate_height;
///
/// let mut content = EntryContent::titled("T");
/// assert_eq!(estimate_height(&content), 32);
///
/// content.subtitle = Some("a\nb\nc".to_string());
/// assert_eq!(estimate_height(&content), 72);
/// ```
pub fn estimate_height(content: &EntryContent) -> u32 {
    let mut height = TITLE_HEIGHT;

    if let Some(subtitle) = &content.subtitle {
        height += text_block_height(subtitle);
    }
    if let Some(description) = &content.description {
        height += text_block_height(description);
    }
    if content.duration.is_some() {
        height += DURATION_HEIGHT;
    }

    height.max(MIN_ENTRY_HEIGHT)
}

fn text_block_height(text: &str) -> u32 {
    let breaks = text.matches('\n').count() as u32;
    TEXT_BLOCK_HEIGHT + LINE_BREAK_HEIGHT * breaks
}
