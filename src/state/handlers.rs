//! Caller-supplied edit handlers (controlled mode).
//!
//! Each operation family is delegated independently: supplying
//! `remove_segment` makes removals go to the caller while moves may still
//! apply to the editor's own snapshot.

use crate::model::EntryId;
use std::fmt;

/// Handler for operations addressed by a single top-level id.
pub type SegmentHandler = Box<dyn FnMut(&EntryId)>;

/// Handler for operations addressed by `(segment id, sub-entry id)`.
pub type SubEntryHandler = Box<dyn FnMut(&EntryId, &EntryId)>;

/// Optional delegation targets, one per operation.
///
/// An absent handler means the editor applies that operation to its own
/// snapshot instead.
#[derive(Default)]
pub struct EditHandlers {
    /// Receives segment removals.
    pub remove_segment: Option<SegmentHandler>,
    /// Receives sub-entry removals.
    pub remove_sub_entry: Option<SubEntryHandler>,
    /// Receives upward segment moves.
    pub move_segment_up: Option<SegmentHandler>,
    /// Receives downward segment moves.
    pub move_segment_down: Option<SegmentHandler>,
    /// Receives upward sub-entry moves.
    pub move_sub_entry_up: Option<SubEntryHandler>,
    /// Receives downward sub-entry moves.
    pub move_sub_entry_down: Option<SubEntryHandler>,
    /// Receives inserts, called with the anchor id.
    pub insert_segment_after: Option<SegmentHandler>,
}

impl EditHandlers {
    /// No handlers: every operation applies to the private snapshot.
    pub fn none() -> Self {
        Self::default()
    }

    /// Delegate segment removal to `f`.
    pub fn on_remove_segment(mut self, f: impl FnMut(&EntryId) + 'static) -> Self {
        self.remove_segment = Some(Box::new(f));
        self
    }

    /// Delegate sub-entry removal to `f`.
    pub fn on_remove_sub_entry(mut self, f: impl FnMut(&EntryId, &EntryId) + 'static) -> Self {
        self.remove_sub_entry = Some(Box::new(f));
        self
    }

    /// Delegate upward segment moves to `f`.
    pub fn on_move_segment_up(mut self, f: impl FnMut(&EntryId) + 'static) -> Self {
        self.move_segment_up = Some(Box::new(f));
        self
    }

    /// Delegate downward segment moves to `f`.
    pub fn on_move_segment_down(mut self, f: impl FnMut(&EntryId) + 'static) -> Self {
        self.move_segment_down = Some(Box::new(f));
        self
    }

    /// Delegate upward sub-entry moves to `f`.
    pub fn on_move_sub_entry_up(mut self, f: impl FnMut(&EntryId, &EntryId) + 'static) -> Self {
        self.move_sub_entry_up = Some(Box::new(f));
        self
    }

    /// Delegate downward sub-entry moves to `f`.
    pub fn on_move_sub_entry_down(
        mut self,
        f: impl FnMut(&EntryId, &EntryId) + 'static,
    ) -> Self {
        self.move_sub_entry_down = Some(Box::new(f));
        self
    }

    /// Delegate inserts to `f`.
    pub fn on_insert_segment_after(mut self, f: impl FnMut(&EntryId) + 'static) -> Self {
        self.insert_segment_after = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for EditHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditHandlers")
            .field("remove_segment", &self.remove_segment.is_some())
            .field("remove_sub_entry", &self.remove_sub_entry.is_some())
            .field("move_segment_up", &self.move_segment_up.is_some())
            .field("move_segment_down", &self.move_segment_down.is_some())
            .field("move_sub_entry_up", &self.move_sub_entry_up.is_some())
            .field("move_sub_entry_down", &self.move_sub_entry_down.is_some())
            .field("insert_segment_after", &self.insert_segment_after.is_some())
            .finish()
    }
}
