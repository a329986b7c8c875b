//! Itinerary aggregate: fixed sentinels around an ordered segment list.

use super::entry::{Entry, SubEntry};
use super::identifiers::EntryId;
use serde::{Deserialize, Serialize};

/// A full timeline snapshot.
///
/// Start and End live in dedicated slots and are never members of
/// `segments`, so no list operation can reorder or delete them.
///
/// The snapshot is assumed structurally valid (unique ids, sentinels of
/// the right kinds); it is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Shown in the header bar.
    pub title: String,
    /// Start sentinel.
    pub start: Entry,
    /// End sentinel.
    pub end: Entry,
    /// Reorderable segments between the sentinels.
    #[serde(default)]
    pub segments: Vec<Entry>,
}

/// Where an id resolves within an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLocation {
    /// The Start sentinel.
    Start,
    /// The End sentinel.
    End,
    /// A segment at this index of `segments`.
    Segment(usize),
}

impl Itinerary {
    /// Assemble an itinerary from its parts.
    pub fn new(title: impl Into<String>, start: Entry, end: Entry, segments: Vec<Entry>) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            segments,
        }
    }

    /// Resolve a top-level id. Sentinels take precedence.
    pub fn locate(&self, id: &EntryId) -> Option<EntryLocation> {
        if &self.start.id == id {
            return Some(EntryLocation::Start);
        }
        if &self.end.id == id {
            return Some(EntryLocation::End);
        }
        self.segment_index(id).map(EntryLocation::Segment)
    }

    /// Index of segment `id` in `segments`.
    pub fn segment_index(&self, id: &EntryId) -> Option<usize> {
        self.segments.iter().position(|s| &s.id == id)
    }

    /// Segment with id `id`; sentinels are not segments.
    pub fn segment(&self, id: &EntryId) -> Option<&Entry> {
        self.segments.iter().find(|s| &s.id == id)
    }

    /// Segment ids in order.
    pub fn segment_ids(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.id.as_str()).collect()
    }

    /// Start, segments, End in display order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        std::iter::once(&self.start)
            .chain(self.segments.iter())
            .chain(std::iter::once(&self.end))
    }

    /// An itinerary with no segments between the sentinels.
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(
            title,
            Entry::start(fixed_id("start"), "Start"),
            Entry::end(fixed_id("end"), "End"),
            Vec::new(),
        )
    }

    /// Built-in sample used when the caller supplies no snapshot.
    pub fn sample() -> Self {
        let start = Entry::start(fixed_id("start"), "Hotel Lisboa")
            .with_subtitle("Check out by 09:00");
        let end = Entry::end(fixed_id("end"), "Hotel Lisboa")
            .with_subtitle("Back for dinner");

        let segments = vec![
            Entry::route(fixed_id("tram-28"), "Tram 28 to Alfama").with_duration("25 min"),
            Entry::activity(fixed_id("castle"), "Castelo de S. Jorge")
                .with_subtitle("Guided tour\nMeet at the main gate")
                .with_duration("2 h")
                .with_children(vec![
                    SubEntry::new(fixed_id("castle-walls"), "Walk the walls"),
                    SubEntry::new(fixed_id("castle-museum"), "Archaeological site")
                        .with_description("Moorish quarter ruins"),
                ]),
            Entry::route(fixed_id("walk-baixa"), "Walk down to Baixa")
                .with_description("Steep streets,\ncomfortable shoes")
                .with_duration("30 min"),
            Entry::activity(fixed_id("lunch"), "Lunch at Time Out Market").with_duration("1 h"),
        ];

        Self::new("Lisbon day trip", start, end, segments)
    }
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::sample()
    }
}

fn fixed_id(raw: &'static str) -> EntryId {
    EntryId::fixture(raw)
}
