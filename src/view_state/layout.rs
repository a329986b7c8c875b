//! Stacked placement of a whole itinerary.
//!
//! Recomputed from the snapshot on every query; the estimator and
//! connector functions are pure, so a fresh layout is always correct.

use super::connector::{
    connector_between, sub_connector_between, Connector, EntryMetrics, CHILD_BLOCK_MARGIN,
    ENTRY_MARGIN,
};
use super::height::estimate_height;
use super::height_index::HeightIndex;
use super::hit_test::HitTestResult;
use crate::model::{EntryId, EntryKind, Itinerary};

/// A sub-entry positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedSubEntry {
    /// Id of the placed sub-entry.
    pub id: EntryId,
    /// Absolute top in layout units.
    pub top: u32,
    /// Estimated height.
    pub height: u32,
    /// Line to the next sibling; `None` for the last child.
    pub connector: Option<Connector>,
}

/// A top-level entry positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedEntry {
    /// Id of the placed entry.
    pub id: EntryId,
    /// Entry kind.
    pub kind: EntryKind,
    /// Absolute top in layout units. Start is at 0.
    pub top: u32,
    /// Content and sub-entry block heights.
    pub metrics: EntryMetrics,
    /// Line to the next entry; `None` for End.
    pub connector: Option<Connector>,
    /// Placed sub-entries in order.
    pub children: Vec<PlacedSubEntry>,
}

impl PlacedEntry {
    /// Own content plus the sub-entry block.
    pub fn total_height(&self) -> u32 {
        self.metrics.total_height()
    }

    /// Absolute offset just below the entry, children included.
    pub fn bottom(&self) -> u32 {
        self.top + self.total_height()
    }
}

#[derive(Debug, Clone)]
enum SpanTarget {
    Gap,
    Entry(EntryId),
    SubEntry { segment_id: EntryId, sub_id: EntryId },
}

/// Layout of Start, every segment (with sub-entries) and End.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    entries: Vec<PlacedEntry>,
    spans: HeightIndex,
    targets: Vec<SpanTarget>,
}

impl TimelineLayout {
    /// Place every entry of `itinerary`, Start at offset 0.
    ///
    /// Pure and cheap enough to rerun on every query.
    pub fn compute(itinerary: &Itinerary) -> Self {
        let ordered: Vec<_> = itinerary.entries().collect();
        let mut entries = Vec::with_capacity(ordered.len());
        let mut span_heights = Vec::new();
        let mut targets = Vec::new();
        let mut top = 0u32;

        for (i, entry) in ordered.iter().enumerate() {
            let metrics = EntryMetrics::of(entry);
            let has_next = i + 1 < ordered.len();
            let connector = has_next.then(|| connector_between(metrics));

            span_heights.push(metrics.content_height);
            targets.push(SpanTarget::Entry(entry.id.clone()));

            let mut children = Vec::new();
            if metrics.has_children() {
                let half_margin = CHILD_BLOCK_MARGIN / 2;
                let mut child_top = top + metrics.content_height + half_margin;
                span_heights.push(half_margin);
                targets.push(SpanTarget::Gap);

                for (j, child) in entry.children.iter().enumerate() {
                    let height = estimate_height(&child.content);
                    let connector = (j + 1 < entry.children.len())
                        .then(|| sub_connector_between(height));
                    children.push(PlacedSubEntry {
                        id: child.id.clone(),
                        top: child_top,
                        height,
                        connector,
                    });
                    span_heights.push(height);
                    targets.push(SpanTarget::SubEntry {
                        segment_id: entry.id.clone(),
                        sub_id: child.id.clone(),
                    });
                    child_top += height;
                }

                span_heights.push(CHILD_BLOCK_MARGIN - half_margin);
                targets.push(SpanTarget::Gap);
            }

            if has_next {
                span_heights.push(ENTRY_MARGIN);
                targets.push(SpanTarget::Gap);
            }

            entries.push(PlacedEntry {
                id: entry.id.clone(),
                kind: entry.kind,
                top,
                metrics,
                connector,
                children,
            });
            top += metrics.total_height() + ENTRY_MARGIN;
        }

        Self {
            entries,
            spans: HeightIndex::from_heights(&span_heights),
            targets,
        }
    }

    /// Entries in display order: Start, segments, End.
    pub fn entries(&self) -> &[PlacedEntry] {
        &self.entries
    }

    /// Placement of the entry `id`.
    pub fn entry(&self, id: &EntryId) -> Option<&PlacedEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Connector leaving the entry `id` towards its successor.
    pub fn connector_after(&self, id: &EntryId) -> Option<Connector> {
        self.entry(id).and_then(|e| e.connector)
    }

    /// Distance from the top of Start to the bottom of End.
    pub fn total_height(&self) -> u32 {
        self.spans.total() as u32
    }

    /// Resolve the entry or sub-entry under vertical offset `y`.
    pub fn hit_test(&self, y: u32) -> HitTestResult {
        match self.spans.lower_bound(y as usize).map(|i| &self.targets[i]) {
            Some(SpanTarget::Entry(id)) => HitTestResult::Entry { id: id.clone() },
            Some(SpanTarget::SubEntry { segment_id, sub_id }) => HitTestResult::SubEntry {
                segment_id: segment_id.clone(),
                sub_id: sub_id.clone(),
            },
            Some(SpanTarget::Gap) | None => HitTestResult::Miss,
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
