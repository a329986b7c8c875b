//! Tests for segment and sub-entry list operations.

use super::*;
use crate::model::SubEntry;

// ===== Test Helpers =====

fn id(raw: &str) -> EntryId {
    EntryId::new(raw).unwrap()
}

/// Start, a, b (children x, y, z), c, End.
fn store() -> SegmentStore {
    let b = Entry::route(id("b"), "B").with_children(vec![
        SubEntry::new(id("x"), "X"),
        SubEntry::new(id("y"), "Y"),
        SubEntry::new(id("z"), "Z"),
    ]);
    SegmentStore::new(Itinerary::new(
        "Test",
        Entry::start(id("start"), "Start"),
        Entry::end(id("end"), "End"),
        vec![Entry::activity(id("a"), "A"), b, Entry::activity(id("c"), "C")],
    ))
}

fn order(store: &SegmentStore) -> Vec<&str> {
    store.itinerary().segment_ids()
}

fn child_order<'a>(store: &'a SegmentStore, segment: &str) -> Vec<&'a str> {
    store
        .itinerary()
        .segment(&id(segment))
        .unwrap()
        .children
        .iter()
        .map(|c| c.id.as_str())
        .collect()
}

// ===== remove =====

#[test]
fn remove_deletes_exactly_one_and_keeps_order() {
    let mut s = store();
    assert_eq!(s.remove(&id("b")), EditOutcome::Applied);
    assert_eq!(order(&s), vec!["a", "c"]);
}

#[test]
fn remove_sentinels_is_noop() {
    let mut s = store();
    let before = s.clone();
    assert_eq!(
        s.remove(&id("start")),
        EditOutcome::Ignored(NoOpReason::Sentinel)
    );
    assert_eq!(s.remove(&id("end")), EditOutcome::Ignored(NoOpReason::Sentinel));
    assert_eq!(s, before);
}

#[test]
fn remove_stale_id_is_noop() {
    let mut s = store();
    s.remove(&id("a"));
    assert_eq!(s.remove(&id("a")), EditOutcome::Ignored(NoOpReason::UnknownId));
    assert_eq!(order(&s), vec!["b", "c"]);
}

// ===== move =====

#[test]
fn move_up_swaps_with_previous() {
    let mut s = store();
    assert_eq!(s.move_segment(&id("c"), Direction::Up), EditOutcome::Applied);
    assert_eq!(order(&s), vec!["a", "c", "b"]);
}

#[test]
fn move_down_swaps_with_next() {
    let mut s = store();
    assert_eq!(s.move_segment(&id("a"), Direction::Down), EditOutcome::Applied);
    assert_eq!(order(&s), vec!["b", "a", "c"]);
}

#[test]
fn first_segment_cannot_move_up() {
    let mut s = store();
    assert_eq!(
        s.move_segment(&id("a"), Direction::Up),
        EditOutcome::Ignored(NoOpReason::AtBoundary)
    );
    assert_eq!(order(&s), vec!["a", "b", "c"]);
}

#[test]
fn last_segment_cannot_move_down() {
    let mut s = store();
    assert_eq!(
        s.move_segment(&id("c"), Direction::Down),
        EditOutcome::Ignored(NoOpReason::AtBoundary)
    );
    assert_eq!(order(&s), vec!["a", "b", "c"]);
}

#[test]
fn sentinels_cannot_move() {
    let mut s = store();
    assert_eq!(
        s.move_segment(&id("start"), Direction::Down),
        EditOutcome::Ignored(NoOpReason::Sentinel)
    );
    assert_eq!(
        s.move_segment(&id("end"), Direction::Up),
        EditOutcome::Ignored(NoOpReason::Sentinel)
    );
}

#[test]
fn move_up_then_down_restores_order() {
    let mut s = store();
    s.move_segment(&id("b"), Direction::Up);
    s.move_segment(&id("b"), Direction::Down);
    assert_eq!(order(&s), vec!["a", "b", "c"]);
}

#[test]
fn move_keeps_children_with_their_segment() {
    let mut s = store();
    s.move_segment(&id("b"), Direction::Up);
    assert_eq!(child_order(&s, "b"), vec!["x", "y", "z"]);
}

// ===== insert_after =====

#[test]
fn insert_after_start_goes_first() {
    let mut s = store();
    let outcome = s.insert_after(&id("start"), Entry::placeholder(id("new")));
    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(order(&s), vec!["new", "a", "b", "c"]);
}

#[test]
fn insert_after_segment_goes_right_after_it() {
    let mut s = store();
    s.insert_after(&id("b"), Entry::placeholder(id("new")));
    assert_eq!(order(&s), vec!["a", "b", "new", "c"]);
}

#[test]
fn insert_after_last_segment_goes_last() {
    let mut s = store();
    s.insert_after(&id("c"), Entry::placeholder(id("new")));
    assert_eq!(order(&s), vec!["a", "b", "c", "new"]);
}

#[test]
fn insert_after_end_is_noop() {
    let mut s = store();
    assert_eq!(
        s.insert_after(&id("end"), Entry::placeholder(id("new"))),
        EditOutcome::Ignored(NoOpReason::Sentinel)
    );
    assert_eq!(order(&s).len(), 3);
}

#[test]
fn insert_after_unknown_is_noop() {
    let mut s = store();
    assert_eq!(
        s.insert_after(&id("ghost"), Entry::placeholder(id("new"))),
        EditOutcome::Ignored(NoOpReason::UnknownId)
    );
}

#[test]
fn insert_after_start_on_empty_itinerary() {
    let mut s = SegmentStore::new(Itinerary::empty("Empty"));
    s.insert_after(&id("start"), Entry::placeholder(id("first")));
    assert_eq!(order(&s), vec!["first"]);
}

// ===== sub-entries =====

#[test]
fn remove_sub_only_touches_parent_children() {
    let mut s = store();
    assert_eq!(s.remove_sub(&id("b"), &id("y")), EditOutcome::Applied);
    assert_eq!(child_order(&s, "b"), vec!["x", "z"]);
    assert_eq!(order(&s), vec!["a", "b", "c"]);
}

#[test]
fn remove_sub_with_wrong_parent_is_noop() {
    let mut s = store();
    assert_eq!(
        s.remove_sub(&id("a"), &id("y")),
        EditOutcome::Ignored(NoOpReason::UnknownId)
    );
    assert_eq!(child_order(&s, "b"), vec!["x", "y", "z"]);
}

#[test]
fn move_sub_swaps_adjacent_children() {
    let mut s = store();
    assert_eq!(
        s.move_sub(&id("b"), &id("z"), Direction::Up),
        EditOutcome::Applied
    );
    assert_eq!(child_order(&s, "b"), vec!["x", "z", "y"]);
}

#[test]
fn first_child_cannot_move_up_last_cannot_move_down() {
    let mut s = store();
    assert_eq!(
        s.move_sub(&id("b"), &id("x"), Direction::Up),
        EditOutcome::Ignored(NoOpReason::AtBoundary)
    );
    assert_eq!(
        s.move_sub(&id("b"), &id("z"), Direction::Down),
        EditOutcome::Ignored(NoOpReason::AtBoundary)
    );
    assert_eq!(child_order(&s, "b"), vec!["x", "y", "z"]);
}

#[test]
fn sub_operations_on_sentinel_parent_are_noops() {
    let mut s = store();
    assert_eq!(
        s.remove_sub(&id("start"), &id("x")),
        EditOutcome::Ignored(NoOpReason::Sentinel)
    );
}

// ===== planning =====

#[test]
fn plan_move_reports_swap_indices() {
    let s = store();
    assert_eq!(
        plan_move(s.itinerary(), &id("b"), Direction::Down),
        Ok((1, 2))
    );
}

#[test]
fn planning_never_mutates() {
    let s = store();
    let before = s.clone();
    let _ = plan_remove(s.itinerary(), &id("a"));
    let _ = plan_insert_after(s.itinerary(), &id("start"));
    let _ = plan_move_sub(s.itinerary(), &id("b"), &id("x"), Direction::Down);
    assert_eq!(s, before);
}
