//! Timeline entry types.
//!
//! An [`Entry`] is a sentinel (Start/End) or a segment (Activity/Route).
//! Segments may carry an ordered list of [`SubEntry`] children; sub-entries
//! never carry children of their own, which the types enforce.

use super::identifiers::EntryId;
use serde::{Deserialize, Serialize};

/// Kind of a top-level timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Fixed first entry of every itinerary.
    Start,
    /// Fixed last entry of every itinerary.
    End,
    /// A stop: something done in one place.
    Activity,
    /// Travel between stops.
    Route,
}

impl EntryKind {
    /// Whether this kind is a fixed Start/End sentinel.
    pub fn is_sentinel(self) -> bool {
        matches!(self, EntryKind::Start | EntryKind::End)
    }

    /// Icon token used when an entry does not name one.
    pub fn default_icon(self) -> &'static str {
        match self {
            EntryKind::Start => "flag",
            EntryKind::End => "finish",
            EntryKind::Activity => "pin",
            EntryKind::Route => "route",
        }
    }

    /// Color token used when an entry does not name one.
    pub fn default_color(self) -> &'static str {
        match self {
            EntryKind::Start => "green",
            EntryKind::End => "red",
            EntryKind::Activity => "blue",
            EntryKind::Route => "gray",
        }
    }
}

/// Display text shared by entries and sub-entries.
///
/// These are the only fields the height estimator reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryContent {
    /// Required title; may embed line breaks.
    pub title: String,
    /// Optional subtitle; each line break adds a row of height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Optional longer description, sized like the subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display-only duration text, never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Icon token; the kind default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Color token; the kind default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EntryContent {
    /// Content with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A top-level node of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identity, unchanged by reordering.
    pub id: EntryId,
    /// Sentinel or segment kind.
    pub kind: EntryKind,
    /// Display text.
    #[serde(flatten)]
    pub content: EntryContent,
    /// Ordered sub-entries. Always empty for sentinels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SubEntry>,
}

impl Entry {
    /// Entry of `kind` with only a title.
    pub fn new(id: EntryId, kind: EntryKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            content: EntryContent::titled(title),
            children: Vec::new(),
        }
    }

    /// Start sentinel.
    pub fn start(id: EntryId, title: impl Into<String>) -> Self {
        Self::new(id, EntryKind::Start, title)
    }

    /// End sentinel.
    pub fn end(id: EntryId, title: impl Into<String>) -> Self {
        Self::new(id, EntryKind::End, title)
    }

    /// Activity segment.
    pub fn activity(id: EntryId, title: impl Into<String>) -> Self {
        Self::new(id, EntryKind::Activity, title)
    }

    /// Route segment.
    pub fn route(id: EntryId, title: impl Into<String>) -> Self {
        Self::new(id, EntryKind::Route, title)
    }

    /// The default-valued segment created by `insert_after`.
    pub fn placeholder(id: EntryId) -> Self {
        Self::activity(id, "New activity")
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.content.subtitle = Some(subtitle.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.content.description = Some(description.into());
        self
    }

    /// Set the duration text.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.content.duration = Some(duration.into());
        self
    }

    /// Set the icon token.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.content.icon = Some(icon.into());
        self
    }

    /// Set the color token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.content.color = Some(color.into());
        self
    }

    /// Attach children. Ignored for sentinels, which never carry any.
    pub fn with_children(mut self, children: Vec<SubEntry>) -> Self {
        if !self.kind.is_sentinel() {
            self.children = children;
        }
        self
    }

    /// Whether this is the Start or End sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.kind.is_sentinel()
    }

    /// Icon token, falling back to the kind default.
    pub fn icon(&self) -> &str {
        self.content
            .icon
            .as_deref()
            .unwrap_or_else(|| self.kind.default_icon())
    }

    /// Color token, falling back to the kind default.
    pub fn color(&self) -> &str {
        self.content
            .color
            .as_deref()
            .unwrap_or_else(|| self.kind.default_color())
    }

    /// Child with id `sub_id`, if any.
    pub fn child(&self, sub_id: &EntryId) -> Option<&SubEntry> {
        self.children.iter().find(|c| &c.id == sub_id)
    }

    /// Position of child `sub_id` within `children`.
    pub fn child_index(&self, sub_id: &EntryId) -> Option<usize> {
        self.children.iter().position(|c| &c.id == sub_id)
    }
}

/// A nested child of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntry {
    /// Unique within the whole itinerary.
    pub id: EntryId,
    /// Display text.
    #[serde(flatten)]
    pub content: EntryContent,
}

impl SubEntry {
    /// Icon token used when none is named.
    pub const DEFAULT_ICON: &'static str = "dot";
    /// Color token used when none is named.
    pub const DEFAULT_COLOR: &'static str = "gray";

    /// Sub-entry with only a title.
    pub fn new(id: EntryId, title: impl Into<String>) -> Self {
        Self {
            id,
            content: EntryContent::titled(title),
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.content.subtitle = Some(subtitle.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.content.description = Some(description.into());
        self
    }

    /// Set the duration text.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.content.duration = Some(duration.into());
        self
    }

    /// Icon token, falling back to [`Self::DEFAULT_ICON`].
    pub fn icon(&self) -> &str {
        self.content.icon.as_deref().unwrap_or(Self::DEFAULT_ICON)
    }

    /// Color token, falling back to [`Self::DEFAULT_COLOR`].
    pub fn color(&self) -> &str {
        self.content.color.as_deref().unwrap_or(Self::DEFAULT_COLOR)
    }
}
