//! Edit model and UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod app_state;
pub mod edit_handler;
pub mod editor;
pub mod handlers;
pub mod menu;
pub mod mouse_handler;
pub mod segment_store;

// Re-export for convenience
pub use app_state::{AppState, Selection};
pub use edit_handler::handle_key_action;
pub use editor::TimelineEditor;
pub use handlers::{EditHandlers, SegmentHandler, SubEntryHandler};
pub use menu::{Anchor, MenuItem, MenuState};
pub use mouse_handler::{handle_mouse_click, handle_mouse_scroll};
pub use segment_store::{Direction, EditOutcome, NoOpReason, SegmentStore};
