//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for the column and row values the timeline
//! renderer uses, so drawing and mouse mapping agree.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Column (timeline-relative) of top-level markers and their connectors.
pub const MARKER_COLUMN: u16 = 2;

/// Column where top-level entry text begins.
pub const TEXT_COLUMN: u16 = 5;

/// Column of sub-entry markers and their connectors.
pub const SUB_MARKER_COLUMN: u16 = 6;

/// Column where sub-entry text begins.
pub const SUB_TEXT_COLUMN: u16 = 9;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
