//! Timeline editor: the edit entry point for the rendering layer.
//!
//! Combines the segment store, optional caller handlers and the context
//! menu. For every operation the editor:
//!
//! 1. refuses it when the timeline is read-only,
//! 2. validates it against the current snapshot (no-op if invalid),
//! 3. forwards it to the caller's handler when one is supplied for that
//!    operation, otherwise applies it to its own snapshot,
//! 4. closes the menu when the segment it is anchored to was removed.
//!
//! In controlled mode the caller pushes each fresh snapshot through
//! [`TimelineEditor::sync`]; delegated operations never touch the snapshot.

use super::handlers::{EditHandlers, SegmentHandler, SubEntryHandler};
use super::menu::{Anchor, MenuItem, MenuState};
use super::segment_store::{
    plan_insert_after, plan_move, plan_move_sub, plan_remove, plan_remove_sub, Direction,
    EditOutcome, NoOpReason, SegmentStore,
};
use crate::model::{Entry, EntryId, EntryLocation, IdGenerator, Itinerary};
use crate::view_state::TimelineLayout;
use tracing::debug;

/// Edits an itinerary, either directly or by delegating to the caller.
///
/// Each operation is validated against the current snapshot first; only
/// effective requests are applied or forwarded. A handler present in
/// [`EditHandlers`] makes that operation delegated, otherwise the private
/// snapshot is mutated.
#[derive(Debug)]
pub struct TimelineEditor {
    store: SegmentStore,
    handlers: EditHandlers,
    menu: MenuState,
    editable: bool,
    ids: IdGenerator,
}

impl TimelineEditor {
    /// Uncontrolled editor owning `itinerary`.
    pub fn new(itinerary: Itinerary) -> Self {
        Self::with_handlers(itinerary, EditHandlers::none())
    }

    /// Editor that forwards the operations `handlers` covers.
    pub fn with_handlers(itinerary: Itinerary, handlers: EditHandlers) -> Self {
        Self {
            store: SegmentStore::new(itinerary),
            handlers,
            menu: MenuState::Closed,
            editable: true,
            ids: IdGenerator::from_clock(),
        }
    }

    /// Editor over the built-in sample itinerary.
    pub fn sample() -> Self {
        Self::new(Itinerary::sample())
    }

    /// Use `ids` for segments created by `insert_segment_after`.
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Toggle editing. Going read-only closes any open menu.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        if !editable {
            self.menu.close();
        }
    }

    /// Whether edits and the menu are enabled.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Current snapshot.
    pub fn itinerary(&self) -> &Itinerary {
        self.store.itinerary()
    }

    /// Context menu state.
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Fresh layout of the current snapshot.
    pub fn layout(&self) -> TimelineLayout {
        TimelineLayout::compute(self.itinerary())
    }

    /// Accept the caller's latest snapshot (controlled mode).
    ///
    /// A menu anchored to an entry the new snapshot no longer has is closed.
    pub fn sync(&mut self, itinerary: Itinerary) {
        self.store.replace(itinerary);
        if let Some(target) = self.menu.target() {
            if self.itinerary().locate(target).is_none() {
                debug!(entry = %target, "Menu target vanished from snapshot, closing menu");
                self.menu.close();
            }
        }
    }

    // ===== Segment operations =====

    /// Remove segment `id`. Sentinels and unknown ids are ignored.
    ///
    /// Closes the menu when it is anchored on `id`.
    pub fn remove_segment(&mut self, id: &EntryId) -> EditOutcome {
        let outcome = match self.check(plan_remove(self.itinerary(), id)) {
            Err(reason) => EditOutcome::Ignored(reason),
            Ok(_) => match self.handlers.remove_segment.as_mut() {
                Some(handler) => delegate(handler, id),
                None => self.store.remove(id),
            },
        };
        if !outcome.is_noop() && self.menu.is_on(id) {
            self.menu.close();
        }
        log_outcome("remove_segment", id, outcome);
        outcome
    }

    /// Swap segment `id` with its predecessor.
    pub fn move_segment_up(&mut self, id: &EntryId) -> EditOutcome {
        self.move_segment(id, Direction::Up)
    }

    /// Swap segment `id` with its successor.
    pub fn move_segment_down(&mut self, id: &EntryId) -> EditOutcome {
        self.move_segment(id, Direction::Down)
    }

    fn move_segment(&mut self, id: &EntryId, direction: Direction) -> EditOutcome {
        let outcome = match self.check(plan_move(self.itinerary(), id, direction)) {
            Err(reason) => EditOutcome::Ignored(reason),
            Ok(_) => {
                let handler = match direction {
                    Direction::Up => self.handlers.move_segment_up.as_mut(),
                    Direction::Down => self.handlers.move_segment_down.as_mut(),
                };
                match handler {
                    Some(handler) => delegate(handler, id),
                    None => self.store.move_segment(id, direction),
                }
            }
        };
        let operation = match direction {
            Direction::Up => "move_segment_up",
            Direction::Down => "move_segment_down",
        };
        log_outcome(operation, id, outcome);
        outcome
    }

    /// Insert a default Activity after `anchor` (Start means "first").
    pub fn insert_segment_after(&mut self, anchor: &EntryId) -> EditOutcome {
        let outcome = match self.check(plan_insert_after(self.itinerary(), anchor)) {
            Err(reason) => EditOutcome::Ignored(reason),
            Ok(_) => match self.handlers.insert_segment_after.as_mut() {
                Some(handler) => delegate(handler, anchor),
                None => {
                    let entry = Entry::placeholder(self.ids.next_id());
                    debug!(new_id = %entry.id, "Created placeholder segment");
                    self.store.insert_after(anchor, entry)
                }
            },
        };
        log_outcome("insert_segment_after", anchor, outcome);
        outcome
    }

    // ===== Sub-entry operations =====

    /// Remove child `sub_id` of `segment_id`.
    pub fn remove_sub_entry(&mut self, segment_id: &EntryId, sub_id: &EntryId) -> EditOutcome {
        let outcome = match self.check(plan_remove_sub(self.itinerary(), segment_id, sub_id)) {
            Err(reason) => EditOutcome::Ignored(reason),
            Ok(_) => match self.handlers.remove_sub_entry.as_mut() {
                Some(handler) => delegate_sub(handler, segment_id, sub_id),
                None => self.store.remove_sub(segment_id, sub_id),
            },
        };
        log_outcome("remove_sub_entry", sub_id, outcome);
        outcome
    }

    /// Swap child `sub_id` with its previous sibling.
    pub fn move_sub_entry_up(&mut self, segment_id: &EntryId, sub_id: &EntryId) -> EditOutcome {
        self.move_sub_entry(segment_id, sub_id, Direction::Up)
    }

    /// Swap child `sub_id` with its next sibling.
    pub fn move_sub_entry_down(&mut self, segment_id: &EntryId, sub_id: &EntryId) -> EditOutcome {
        self.move_sub_entry(segment_id, sub_id, Direction::Down)
    }

    fn move_sub_entry(
        &mut self,
        segment_id: &EntryId,
        sub_id: &EntryId,
        direction: Direction,
    ) -> EditOutcome {
        let plan = plan_move_sub(self.itinerary(), segment_id, sub_id, direction);
        let outcome = match self.check(plan) {
            Err(reason) => EditOutcome::Ignored(reason),
            Ok(_) => {
                let handler = match direction {
                    Direction::Up => self.handlers.move_sub_entry_up.as_mut(),
                    Direction::Down => self.handlers.move_sub_entry_down.as_mut(),
                };
                match handler {
                    Some(handler) => delegate_sub(handler, segment_id, sub_id),
                    None => self.store.move_sub(segment_id, sub_id, direction),
                }
            }
        };
        let operation = match direction {
            Direction::Up => "move_sub_entry_up",
            Direction::Down => "move_sub_entry_down",
        };
        log_outcome(operation, sub_id, outcome);
        outcome
    }

    // ===== Context menu =====

    /// Open the menu on `target` at `anchor`.
    ///
    /// Suppressed when read-only. Only Start and segments accept a menu;
    /// End and unknown ids leave the state unchanged. Returns whether the
    /// menu is now open on `target`.
    pub fn open_menu(&mut self, target: &EntryId, anchor: Anchor) -> bool {
        if !self.editable {
            debug!(entry = %target, "Menu activation suppressed (read-only)");
            return false;
        }
        match self.itinerary().locate(target) {
            Some(EntryLocation::Start | EntryLocation::Segment(_)) => {
                self.menu = MenuState::open(target.clone(), anchor);
                debug!(entry = %target, x = anchor.x, y = anchor.y, "Menu opened");
                true
            }
            Some(EntryLocation::End) | None => false,
        }
    }

    /// Close the menu (dismiss or outside click).
    pub fn dismiss_menu(&mut self) {
        if self.menu.is_open() {
            debug!("Menu dismissed");
        }
        self.menu.close();
    }

    /// Items the open menu offers. Empty when closed.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        match self.menu.target().and_then(|t| self.itinerary().locate(t)) {
            Some(EntryLocation::Segment(_)) => vec![MenuItem::AddSegment, MenuItem::RemoveSegment],
            Some(EntryLocation::Start) => vec![MenuItem::AddSegment],
            Some(EntryLocation::End) | None => Vec::new(),
        }
    }

    /// Run a menu item against the menu's target, then close the menu.
    pub fn activate_menu_item(&mut self, item: MenuItem) -> EditOutcome {
        let Some(target) = self.menu.target().cloned() else {
            return EditOutcome::Ignored(NoOpReason::UnknownId);
        };
        let outcome = match item {
            MenuItem::AddSegment => self.insert_segment_after(&target),
            MenuItem::RemoveSegment => self.remove_segment(&target),
        };
        self.menu.close();
        outcome
    }

    fn check<T>(&self, plan: Result<T, NoOpReason>) -> Result<T, NoOpReason> {
        if !self.editable {
            return Err(NoOpReason::ReadOnly);
        }
        plan
    }
}

impl Default for TimelineEditor {
    fn default() -> Self {
        Self::sample()
    }
}

fn delegate(handler: &mut SegmentHandler, id: &EntryId) -> EditOutcome {
    handler(id);
    EditOutcome::Delegated
}

fn delegate_sub(
    handler: &mut SubEntryHandler,
    segment_id: &EntryId,
    sub_id: &EntryId,
) -> EditOutcome {
    handler(segment_id, sub_id);
    EditOutcome::Delegated
}

fn log_outcome(operation: &'static str, id: &EntryId, outcome: EditOutcome) {
    match outcome {
        EditOutcome::Ignored(reason) => {
            debug!(operation, id = %id, ?reason, "Edit ignored")
        }
        EditOutcome::Applied | EditOutcome::Delegated => {
            debug!(operation, id = %id, ?outcome, "Edit accepted")
        }
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
