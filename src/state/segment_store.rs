//! Ordered segment store.
//!
//! Pure list operations over an itinerary's segment sequence and each
//! segment's children. Every operation is a no-op on invalid input (unknown
//! id, protected sentinel, boundary move); none can fail part-way.
//!
//! Validation ("planning") is split from application so a caller that
//! delegates an operation elsewhere can run the same checks first.

use crate::model::{Entry, EntryId, EntryLocation, Itinerary};

/// Direction of a single adjacent swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards Start.
    Up,
    /// Towards End.
    Down,
}

/// Why an operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Id not present (possibly stale after an earlier edit).
    UnknownId,
    /// Start/End cannot be removed or moved.
    Sentinel,
    /// Already first (for Up) or last (for Down).
    AtBoundary,
    /// Editing is disabled for this timeline.
    ReadOnly,
}

/// Observable result of an edit request. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Mutated the owned snapshot.
    Applied,
    /// Forwarded to the caller-supplied handler; snapshot untouched.
    Delegated,
    /// Nothing happened.
    Ignored(NoOpReason),
}

impl EditOutcome {
    /// True for [`EditOutcome::Ignored`].
    pub fn is_noop(&self) -> bool {
        matches!(self, EditOutcome::Ignored(_))
    }
}

// ===== Planning (validation only) =====

/// Index of the segment `id` would remove.
pub fn plan_remove(itinerary: &Itinerary, id: &EntryId) -> Result<usize, NoOpReason> {
    match itinerary.locate(id) {
        Some(EntryLocation::Segment(index)) => Ok(index),
        Some(EntryLocation::Start | EntryLocation::End) => Err(NoOpReason::Sentinel),
        None => Err(NoOpReason::UnknownId),
    }
}

/// The two segment indices a move would swap.
///
/// Index 0 cannot move up (the slot before it is Start) and the last index
/// cannot move down (the slot after it is End).
pub fn plan_move(
    itinerary: &Itinerary,
    id: &EntryId,
    direction: Direction,
) -> Result<(usize, usize), NoOpReason> {
    let index = plan_remove(itinerary, id)?;
    adjacent(index, itinerary.segments.len(), direction).map(|other| (index, other))
}

/// Segment index a new entry would be inserted at.
///
/// Anchoring on Start inserts at 0; anchoring on End is refused because
/// nothing may follow End.
pub fn plan_insert_after(itinerary: &Itinerary, anchor: &EntryId) -> Result<usize, NoOpReason> {
    match itinerary.locate(anchor) {
        Some(EntryLocation::Start) => Ok(0),
        Some(EntryLocation::Segment(index)) => Ok(index + 1),
        Some(EntryLocation::End) => Err(NoOpReason::Sentinel),
        None => Err(NoOpReason::UnknownId),
    }
}

/// (segment index, child index) a sub-entry removal would touch.
pub fn plan_remove_sub(
    itinerary: &Itinerary,
    segment_id: &EntryId,
    sub_id: &EntryId,
) -> Result<(usize, usize), NoOpReason> {
    let segment_index = plan_remove(itinerary, segment_id)?;
    let child_index = itinerary.segments[segment_index]
        .child_index(sub_id)
        .ok_or(NoOpReason::UnknownId)?;
    Ok((segment_index, child_index))
}

/// (segment index, child index, other child index) for a sub-entry swap.
///
/// Children have no sentinels: the first child simply cannot move up and
/// the last cannot move down.
pub fn plan_move_sub(
    itinerary: &Itinerary,
    segment_id: &EntryId,
    sub_id: &EntryId,
    direction: Direction,
) -> Result<(usize, usize, usize), NoOpReason> {
    let (segment_index, child_index) = plan_remove_sub(itinerary, segment_id, sub_id)?;
    let len = itinerary.segments[segment_index].children.len();
    adjacent(child_index, len, direction).map(|other| (segment_index, child_index, other))
}

fn adjacent(index: usize, len: usize, direction: Direction) -> Result<usize, NoOpReason> {
    match direction {
        Direction::Up if index == 0 => Err(NoOpReason::AtBoundary),
        Direction::Up => Ok(index - 1),
        Direction::Down if index + 1 >= len => Err(NoOpReason::AtBoundary),
        Direction::Down => Ok(index + 1),
    }
}

// ===== Store =====

/// Owns an itinerary snapshot and applies edits to it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentStore {
    itinerary: Itinerary,
}

impl SegmentStore {
    /// Store owning `itinerary`.
    pub fn new(itinerary: Itinerary) -> Self {
        Self { itinerary }
    }

    /// Current snapshot.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Replace the whole snapshot (a caller-supplied render input).
    pub fn replace(&mut self, itinerary: Itinerary) {
        self.itinerary = itinerary;
    }

    /// Remove segment `id`.
    pub fn remove(&mut self, id: &EntryId) -> EditOutcome {
        apply(plan_remove(&self.itinerary, id), |index| {
            self.itinerary.segments.remove(index);
        })
    }

    /// Swap segment `id` with its neighbour in `direction`.
    pub fn move_segment(&mut self, id: &EntryId, direction: Direction) -> EditOutcome {
        apply(plan_move(&self.itinerary, id, direction), |(a, b)| {
            self.itinerary.segments.swap(a, b);
        })
    }

    /// Insert `entry` right after `anchor`.
    ///
    /// The entry must carry an id not already used by another segment.
    pub fn insert_after(&mut self, anchor: &EntryId, entry: Entry) -> EditOutcome {
        apply(plan_insert_after(&self.itinerary, anchor), |index| {
            self.itinerary.segments.insert(index, entry);
        })
    }

    /// Remove child `sub_id` of `segment_id`.
    pub fn remove_sub(&mut self, segment_id: &EntryId, sub_id: &EntryId) -> EditOutcome {
        apply(
            plan_remove_sub(&self.itinerary, segment_id, sub_id),
            |(segment, child)| {
                self.itinerary.segments[segment].children.remove(child);
            },
        )
    }

    /// Swap child `sub_id` with its sibling in `direction`.
    pub fn move_sub(
        &mut self,
        segment_id: &EntryId,
        sub_id: &EntryId,
        direction: Direction,
    ) -> EditOutcome {
        apply(
            plan_move_sub(&self.itinerary, segment_id, sub_id, direction),
            |(segment, a, b)| {
                self.itinerary.segments[segment].children.swap(a, b);
            },
        )
    }
}

fn apply<T>(plan: Result<T, NoOpReason>, mutate: impl FnOnce(T)) -> EditOutcome {
    match plan {
        Ok(target) => {
            mutate(target);
            EditOutcome::Applied
        }
        Err(reason) => EditOutcome::Ignored(reason),
    }
}

#[cfg(test)]
#[path = "segment_store_tests.rs"]
mod tests;
