//! Connector geometry between consecutive timeline markers.
//!
//! All values are layout units, derived from [`estimate_height`] only.
//! Nothing here is cached: the functions are cheap enough to recompute on
//! every query, so there is no invalidation to get wrong.

use super::height::estimate_height;
use crate::model::{Entry, SubEntry};

/// Marker center, measured from the top of an entry. Independent of content.
pub const MARKER_CENTER_OFFSET: u32 = 20;
/// Gap between the bottom of one entry (children included) and the next top.
pub const ENTRY_MARGIN: u32 = 20;
/// Margin around a sub-entry block, split evenly above and below it.
pub const CHILD_BLOCK_MARGIN: u32 = 16;
/// Sub-entry marker center, measured from the top of the sub-entry.
pub const SUB_MARKER_CENTER_OFFSET: u32 = 10;
/// Extra clearance below a sub-entry marker before its connector begins.
pub const SUB_CONNECTOR_CLEARANCE: u32 = 8;

/// A vertical line segment, relative to the top of the entry it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Connector {
    /// Distance from the upstream entry's top to where the line starts.
    pub start_offset: u32,
    /// Length of the line.
    pub length: u32,
}

impl Connector {
    /// Offset (from the upstream top) where the line ends.
    pub fn end_offset(&self) -> u32 {
        self.start_offset + self.length
    }
}

/// Measured extents of one top-level entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetrics {
    /// Own content height from the height estimator.
    pub content_height: u32,
    /// Sub-entry block height (0 when there are no children).
    pub children_height: u32,
}

impl EntryMetrics {
    /// Measure `entry` with the height estimator.
    pub fn of(entry: &Entry) -> Self {
        // Sentinels never render children, even if a snapshot smuggles some in.
        let children_height = if entry.is_sentinel() {
            0
        } else {
            children_block_height(&entry.children)
        };
        Self {
            content_height: estimate_height(&entry.content),
            children_height,
        }
    }

    /// Whether a sub-entry block is rendered.
    pub fn has_children(&self) -> bool {
        self.children_height > 0
    }

    /// Own content plus the sub-entry block.
    pub fn total_height(&self) -> u32 {
        self.content_height + self.children_height
    }
}

/// Height of a rendered sub-entry block.
///
/// Sum of each child's estimated height plus the fixed block margin;
/// an empty list contributes nothing.
pub fn children_block_height(children: &[SubEntry]) -> u32 {
    if children.is_empty() {
        return 0;
    }
    let sum: u32 = children.iter().map(|c| estimate_height(&c.content)).sum();
    sum + CHILD_BLOCK_MARGIN
}

/// Total vertical extent of an entry including its sub-entry block.
pub fn total_entry_height(entry: &Entry) -> u32 {
    EntryMetrics::of(entry).total_height()
}

/// Connector from `current`'s marker center to the next entry's marker center.
///
/// The next entry is placed [`ENTRY_MARGIN`] below the bottom of `current`
/// (children included), and every marker center, End's included, sits a fixed
/// [`MARKER_CENTER_OFFSET`] below its entry's top. The line therefore depends
/// only on `current`: the next entry's text, however long, never moves where
/// it lands.
pub fn connector_between(current: EntryMetrics) -> Connector {
    Connector {
        start_offset: MARKER_CENTER_OFFSET,
        length: current.total_height() + ENTRY_MARGIN,
    }
}

/// Connector between two adjacent sub-entries of one segment.
///
/// Children are stacked without gaps, so the next sub-entry's marker
/// center sits `current_height` below the current one. The line begins
/// [`SUB_CONNECTOR_CLEARANCE`] below the current marker center.
pub fn sub_connector_between(current_height: u32) -> Connector {
    Connector {
        start_offset: SUB_MARKER_CENTER_OFFSET + SUB_CONNECTOR_CLEARANCE,
        length: current_height.saturating_sub(SUB_CONNECTOR_CLEARANCE),
    }
}
