//! Application state for the terminal front end.
//!
//! Wraps the timeline editor with UI-only concerns: which row is selected,
//! vertical scroll, the help overlay and menu item highlight. All state
//! transitions are plain methods, testable without a terminal.

use super::editor::TimelineEditor;
use super::menu::MenuItem;
use crate::model::{EntryId, EntryLocation};
use crate::view_state::TimelineLayout;

/// A selectable row of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Start, End or a segment.
    Entry(EntryId),
    /// A sub-entry of a segment.
    SubEntry {
        /// Owning segment.
        segment_id: EntryId,
        /// Selected child.
        sub_id: EntryId,
    },
}

impl Selection {
    /// The top-level entry this row belongs to.
    pub fn owner(&self) -> &EntryId {
        match self {
            Selection::Entry(id) => id,
            Selection::SubEntry { segment_id, .. } => segment_id,
        }
    }
}

/// Application state. Pure data, no terminal types.
#[derive(Debug)]
pub struct AppState {
    /// The editor owns the itinerary snapshot and the context menu.
    pub editor: TimelineEditor,

    /// Currently highlighted row. Always resolves to a row of the snapshot
    /// after `reconcile_selection`.
    pub selection: Selection,

    /// First visible row of the timeline, in absolute rows.
    pub scroll_offset: u32,

    /// Layout units mapped onto one terminal row.
    pub units_per_row: u16,

    /// Whether the help overlay is shown.
    pub help_visible: bool,

    /// Highlighted item of the open menu.
    pub menu_highlight: usize,

    /// Whether to show the key hint footer.
    pub show_help_hint: bool,
}

impl AppState {
    /// State over `editor`, Start selected, unscrolled.
    pub fn new(editor: TimelineEditor) -> Self {
        let selection = Selection::Entry(editor.itinerary().start.id.clone());
        Self {
            editor,
            selection,
            scroll_offset: 0,
            units_per_row: 8,
            help_visible: false,
            menu_highlight: 0,
            show_help_hint: true,
        }
    }

    /// Fresh layout of the editor's snapshot.
    pub fn layout(&self) -> TimelineLayout {
        self.editor.layout()
    }

    /// All selectable rows in display order.
    pub fn rows(&self) -> Vec<Selection> {
        let itinerary = self.editor.itinerary();
        let mut rows = Vec::new();
        for entry in itinerary.entries() {
            rows.push(Selection::Entry(entry.id.clone()));
            if !entry.is_sentinel() {
                for child in &entry.children {
                    rows.push(Selection::SubEntry {
                        segment_id: entry.id.clone(),
                        sub_id: child.id.clone(),
                    });
                }
            }
        }
        rows
    }

    /// Position of the selection within [`Self::rows`].
    pub fn selected_index(&self) -> Option<usize> {
        self.rows().iter().position(|r| r == &self.selection)
    }

    /// Move the cursor one row down, stopping at End.
    pub fn select_next(&mut self) {
        let rows = self.rows();
        if let Some(i) = rows.iter().position(|r| r == &self.selection) {
            if let Some(next) = rows.get(i + 1) {
                self.selection = next.clone();
            }
        }
    }

    /// Move the cursor one row up, stopping at Start.
    pub fn select_prev(&mut self) {
        let rows = self.rows();
        if let Some(i) = rows.iter().position(|r| r == &self.selection) {
            if i > 0 {
                self.selection = rows[i - 1].clone();
            }
        }
    }

    /// Select Start.
    pub fn select_first(&mut self) {
        self.selection = Selection::Entry(self.editor.itinerary().start.id.clone());
    }

    /// Select End.
    pub fn select_last(&mut self) {
        self.selection = Selection::Entry(self.editor.itinerary().end.id.clone());
    }

    /// Select the row at `index`, clamped to the last row.
    pub fn select_index(&mut self, index: usize) {
        let rows = self.rows();
        // rows always holds at least Start and End
        let clamped = index.min(rows.len().saturating_sub(1));
        if let Some(row) = rows.get(clamped) {
            self.selection = row.clone();
        }
    }

    /// Re-point the selection after the snapshot changed underneath it.
    ///
    /// `previous_index` is where the selection sat before the change.
    pub fn reconcile_selection(&mut self, previous_index: usize) {
        if self.selected_index().is_none() {
            self.select_index(previous_index);
        }
    }

    /// Select the segment directly after `anchor` (where an insert lands).
    pub fn select_after(&mut self, anchor: &EntryId) {
        let itinerary = self.editor.itinerary();
        let index = match itinerary.locate(anchor) {
            Some(EntryLocation::Start) => Some(0),
            Some(EntryLocation::Segment(i)) => Some(i + 1),
            Some(EntryLocation::End) | None => None,
        };
        if let Some(segment) = index.and_then(|i| itinerary.segments.get(i)) {
            self.selection = Selection::Entry(segment.id.clone());
        }
    }

    // ===== Menu highlight =====

    /// Items of the open menu.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.editor.menu_items()
    }

    /// Highlight the next item, wrapping.
    pub fn menu_highlight_next(&mut self) {
        let len = self.menu_items().len();
        if len > 0 {
            self.menu_highlight = (self.menu_highlight + 1) % len;
        }
    }

    /// Highlight the previous item, wrapping.
    pub fn menu_highlight_prev(&mut self) {
        let len = self.menu_items().len();
        if len > 0 {
            self.menu_highlight = (self.menu_highlight + len - 1) % len;
        }
    }

    /// Item `Enter` would run.
    pub fn highlighted_menu_item(&self) -> Option<MenuItem> {
        self.menu_items().get(self.menu_highlight).copied()
    }

    // ===== Scrolling =====

    /// Absolute row of a layout offset, before scrolling.
    ///
    /// Rows are `u32` like layout units, so tall itineraries never clamp;
    /// only the viewport-relative row is narrowed to `u16`.
    pub fn row_of(&self, units: u32) -> u32 {
        units / u32::from(self.units_per_row.max(1))
    }

    /// Layout offset at the top of an absolute row.
    pub fn units_at_row(&self, row: u32) -> u32 {
        row.saturating_mul(u32::from(self.units_per_row.max(1)))
    }

    /// Scroll so the selected row's marker is inside a viewport of `height` rows.
    pub fn ensure_selection_visible(&mut self, height: u16) {
        if height == 0 {
            return;
        }
        let Some(row) = self.selection_marker_row() else {
            return;
        };
        let height = u32::from(height);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row - self.scroll_offset >= height {
            self.scroll_offset = row + 1 - height;
        }
    }

    /// Absolute row of the selected row's marker.
    pub fn selection_marker_row(&self) -> Option<u32> {
        use crate::view_state::connector::{MARKER_CENTER_OFFSET, SUB_MARKER_CENTER_OFFSET};

        let layout = self.layout();
        match &self.selection {
            Selection::Entry(id) => layout
                .entry(id)
                .map(|e| self.row_of(e.top + MARKER_CENTER_OFFSET)),
            Selection::SubEntry { segment_id, sub_id } => layout
                .entry(segment_id)
                .and_then(|e| e.children.iter().find(|c| &c.id == sub_id))
                .map(|c| self.row_of(c.top + SUB_MARKER_CENTER_OFFSET)),
        }
    }

    /// Scroll by `delta` rows, clamped so the last row stays at the bottom.
    pub fn scroll_by(&mut self, delta: i32, viewport_height: u16) {
        let total_rows = self.row_of(self.layout().total_height()).saturating_add(1);
        let max = total_rows.saturating_sub(u32::from(viewport_height));
        self.scroll_offset = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta.unsigned_abs())
        }
        .min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Itinerary, SubEntry};

    fn id(raw: &str) -> EntryId {
        EntryId::new(raw).unwrap()
    }

    fn state() -> AppState {
        let b = Entry::route(id("b"), "B").with_children(vec![SubEntry::new(id("x"), "X")]);
        let itinerary = Itinerary::new(
            "Test",
            Entry::start(id("start"), "Start"),
            Entry::end(id("end"), "End"),
            vec![Entry::activity(id("a"), "A"), b],
        );
        AppState::new(TimelineEditor::new(itinerary))
    }

    #[test]
    fn starts_on_start_sentinel() {
        assert_eq!(state().selection, Selection::Entry(id("start")));
    }

    #[test]
    fn rows_include_sub_entries_in_order() {
        let rows = state().rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[3],
            Selection::SubEntry {
                segment_id: id("b"),
                sub_id: id("x"),
            }
        );
        assert_eq!(rows[4], Selection::Entry(id("end")));
    }

    #[test]
    fn select_next_and_prev_stop_at_ends() {
        let mut s = state();
        s.select_prev();
        assert_eq!(s.selection, Selection::Entry(id("start")));
        for _ in 0..10 {
            s.select_next();
        }
        assert_eq!(s.selection, Selection::Entry(id("end")));
    }

    #[test]
    fn reconcile_after_removal_keeps_position() {
        let mut s = state();
        s.selection = Selection::Entry(id("a"));
        let index = s.selected_index().unwrap();
        s.editor.remove_segment(&id("a"));
        s.reconcile_selection(index);
        assert_eq!(s.selection, Selection::Entry(id("b")));
    }

    #[test]
    fn select_after_start_picks_first_segment() {
        let mut s = state();
        s.select_after(&id("start"));
        assert_eq!(s.selection, Selection::Entry(id("a")));
    }

    #[test]
    fn menu_highlight_wraps() {
        let mut s = state();
        s.editor
            .open_menu(&id("a"), crate::state::menu::Anchor::default());
        s.menu_highlight_prev();
        assert_eq!(s.highlighted_menu_item(), Some(MenuItem::RemoveSegment));
        s.menu_highlight_next();
        assert_eq!(s.highlighted_menu_item(), Some(MenuItem::AddSegment));
    }

    #[test]
    fn row_mapping_uses_units_per_row() {
        let s = state();
        assert_eq!(s.row_of(52), 6);
        assert_eq!(s.units_at_row(6), 48);
    }

    #[test]
    fn ensure_visible_scrolls_down_to_selection() {
        let mut s = state();
        s.select_last();
        s.ensure_selection_visible(5);
        let row = s.selection_marker_row().unwrap();
        assert!(row >= s.scroll_offset && row < s.scroll_offset + 5);
    }

    #[test]
    fn scroll_by_clamps_to_content() {
        let mut s = state();
        s.scroll_by(-3, 10);
        assert_eq!(s.scroll_offset, 0);
        s.scroll_by(1000, 10);
        let total_rows = s.row_of(s.layout().total_height()) + 1;
        assert_eq!(s.scroll_offset, total_rows - 10);
    }

    fn long_state(segments: usize) -> AppState {
        let segments = (0..segments)
            .map(|i| Entry::activity(id(&format!("s{i}")), "Stop"))
            .collect();
        let itinerary = Itinerary::new(
            "Long",
            Entry::start(id("start"), "Start"),
            Entry::end(id("end"), "End"),
            segments,
        );
        AppState::new(TimelineEditor::new(itinerary))
    }

    #[test]
    fn ensure_visible_reaches_end_of_very_tall_itinerary() {
        // 12k segments at 8 units per row lay out well past 65535 rows
        let mut s = long_state(12_000);
        s.select_last();
        s.ensure_selection_visible(10);

        let row = s.selection_marker_row().unwrap();
        assert!(row > u32::from(u16::MAX));
        assert!(row >= s.scroll_offset && row < s.scroll_offset + 10);
    }

    #[test]
    fn scroll_by_reaches_bottom_of_very_tall_itinerary() {
        let mut s = long_state(12_000);
        s.scroll_by(i32::MAX, 10);
        let total_rows = s.row_of(s.layout().total_height()) + 1;
        assert_eq!(s.scroll_offset, total_rows - 10);
        s.scroll_by(i32::MIN, 10);
        assert_eq!(s.scroll_offset, 0);
    }
}
