//! Context menu state.
//!
//! `Closed` → (activate on S at P) → `OpenOn(S, P)` → (dismiss, add, remove,
//! outside click) → `Closed`. Pure state; the editor decides when to
//! transition.

use crate::model::EntryId;

/// Screen point the menu is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Anchor {
    /// Anchor at (`x`, `y`).
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Which entry, if any, has its context menu open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    /// No menu shown.
    #[default]
    Closed,
    /// Menu open on an entry.
    OpenOn {
        /// Start or segment the menu acts on.
        target: EntryId,
        /// Where the popup hangs, timeline-relative.
        anchor: Anchor,
    },
}

/// Actions offered by an open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Insert a new segment after the target.
    AddSegment,
    /// Remove the target segment.
    RemoveSegment,
}

impl MenuItem {
    /// Text shown in the popup.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::AddSegment => "Add segment after",
            MenuItem::RemoveSegment => "Remove segment",
        }
    }
}

impl MenuState {
    /// Open on `target` at `anchor`.
    pub fn open(target: EntryId, anchor: Anchor) -> Self {
        MenuState::OpenOn { target, anchor }
    }

    /// Whether a menu is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::OpenOn { .. })
    }

    /// Entry the menu acts on.
    pub fn target(&self) -> Option<&EntryId> {
        match self {
            MenuState::Closed => None,
            MenuState::OpenOn { target, .. } => Some(target),
        }
    }

    /// Where the open menu is anchored.
    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            MenuState::Closed => None,
            MenuState::OpenOn { anchor, .. } => Some(*anchor),
        }
    }

    /// Whether the menu is open on `id`.
    pub fn is_on(&self, id: &EntryId) -> bool {
        self.target() == Some(id)
    }

    /// Transition to `Closed`.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }
}
