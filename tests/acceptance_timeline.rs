//! Acceptance tests for the timeline editor.
//!
//! Each test drives the public library API the way the terminal front end
//! does and checks observable results: segment order, outcomes, menu state
//! and layout geometry.

use std::cell::RefCell;
use std::rc::Rc;
use tripline::model::{Entry, EntryId, IdGenerator, Itinerary, SubEntry};
use tripline::state::{Anchor, EditHandlers, EditOutcome, MenuItem, NoOpReason, TimelineEditor};
use tripline::view_state::connector::MARKER_CENTER_OFFSET;
use tripline::view_state::{estimate_height, total_entry_height, TimelineLayout};

// ===== Test Fixtures =====

fn id(raw: &str) -> EntryId {
    EntryId::new(raw).unwrap()
}

fn itinerary(segments: Vec<Entry>) -> Itinerary {
    Itinerary::new(
        "Acceptance",
        Entry::start(id("start"), "Start"),
        Entry::end(id("end"), "End"),
        segments,
    )
}

fn three_segments() -> Itinerary {
    itinerary(vec![
        Entry::activity(id("a"), "A"),
        Entry::route(id("b"), "B"),
        Entry::activity(id("c"), "C"),
    ])
}

fn editor(itinerary: Itinerary) -> TimelineEditor {
    TimelineEditor::new(itinerary).with_id_generator(IdGenerator::with_prefix("new"))
}

fn order(editor: &TimelineEditor) -> Vec<&str> {
    editor.itinerary().segment_ids()
}

// ===== Height estimation =====

#[test]
fn title_only_entry_is_clamped_to_minimum() {
    let entry = Entry::activity(id("t"), "T");
    assert_eq!(estimate_height(&entry.content), 32);
}

#[test]
fn subtitle_with_two_line_breaks_is_72() {
    let entry = Entry::activity(id("t"), "T").with_subtitle("one\ntwo\nthree");
    assert_eq!(estimate_height(&entry.content), 72);
}

#[test]
fn subtitle_description_and_duration_is_60() {
    let entry = Entry::activity(id("t"), "T")
        .with_subtitle("sub")
        .with_description("desc")
        .with_duration("1 h");
    assert_eq!(estimate_height(&entry.content), 60);
}

// ===== Reordering =====

#[test]
fn boundary_moves_leave_order_unchanged() {
    let mut editor = editor(three_segments());

    assert_eq!(
        editor.move_segment_up(&id("a")),
        EditOutcome::Ignored(NoOpReason::AtBoundary)
    );
    assert_eq!(
        editor.move_segment_down(&id("c")),
        EditOutcome::Ignored(NoOpReason::AtBoundary)
    );
    assert_eq!(order(&editor), vec!["a", "b", "c"]);
}

#[test]
fn move_up_then_down_restores_order() {
    let mut editor = editor(three_segments());

    editor.move_segment_up(&id("b"));
    assert_eq!(order(&editor), vec!["b", "a", "c"]);
    editor.move_segment_down(&id("b"));
    assert_eq!(order(&editor), vec!["a", "b", "c"]);
}

#[test]
fn sentinels_cannot_be_removed_or_moved() {
    let mut editor = editor(three_segments());

    for sentinel in ["start", "end"] {
        assert_eq!(
            editor.remove_segment(&id(sentinel)),
            EditOutcome::Ignored(NoOpReason::Sentinel)
        );
        assert!(editor.move_segment_up(&id(sentinel)).is_noop());
        assert!(editor.move_segment_down(&id(sentinel)).is_noop());
    }
    assert_eq!(order(&editor).len(), 3);
    assert_eq!(editor.itinerary().start.id, id("start"));
    assert_eq!(editor.itinerary().end.id, id("end"));
}

#[test]
fn sub_entries_reorder_within_their_segment() {
    let parent = Entry::route(id("p"), "P").with_children(vec![
        SubEntry::new(id("x"), "X"),
        SubEntry::new(id("y"), "Y"),
    ]);
    let mut editor = editor(itinerary(vec![parent]));

    assert!(editor.move_sub_entry_up(&id("p"), &id("x")).is_noop());
    assert_eq!(
        editor.move_sub_entry_down(&id("p"), &id("x")),
        EditOutcome::Applied
    );
    let children: Vec<&str> = editor.itinerary().segments[0]
        .children
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(children, vec!["y", "x"]);

    assert_eq!(editor.remove_sub_entry(&id("p"), &id("x")), EditOutcome::Applied);
    assert_eq!(editor.itinerary().segments[0].children.len(), 1);
}

// ===== Insertion =====

#[test]
fn insert_after_start_becomes_first_segment() {
    let mut editor = editor(three_segments());

    assert_eq!(editor.insert_segment_after(&id("start")), EditOutcome::Applied);
    assert_eq!(order(&editor), vec!["new-1", "a", "b", "c"]);
}

#[test]
fn insert_into_empty_itinerary_yields_valid_connectors() {
    // GIVEN: no segments
    let mut editor = editor(itinerary(Vec::new()));

    // WHEN: a segment is inserted after Start
    editor.insert_segment_after(&id("start"));

    // THEN: exactly one segment, connected on both sides
    assert_eq!(order(&editor), vec!["new-1"]);
    let layout = editor.layout();
    let start = layout.entry(&id("start")).unwrap();
    let segment = layout.entry(&id("new-1")).unwrap();
    let end = layout.entry(&id("end")).unwrap();

    let into_segment = layout.connector_after(&id("start")).unwrap();
    let into_end = layout.connector_after(&id("new-1")).unwrap();
    assert!(into_segment.length > 0);
    assert!(into_end.length > 0);
    assert_eq!(
        start.top + into_segment.end_offset(),
        segment.top + MARKER_CENTER_OFFSET
    );
    assert_eq!(
        segment.top + into_end.end_offset(),
        end.top + MARKER_CENTER_OFFSET
    );
}

// ===== Connector geometry =====

#[test]
fn b_total_of_120_sets_b_to_end_connector_and_end_placement() {
    // GIVEN: A (32, no children) then B (own 32, children 32 and 40)
    let forty = SubEntry::new(id("y"), "Y").with_subtitle("s");
    assert_eq!(estimate_height(&forty.content), 40);
    let b = Entry::route(id("b"), "B").with_children(vec![SubEntry::new(id("x"), "X"), forty]);

    // THEN: B's total height is 32 + (32 + 40 + 16) = 120
    assert_eq!(total_entry_height(&b), 120);

    let layout = TimelineLayout::compute(&itinerary(vec![Entry::activity(id("a"), "A"), b]));
    let placed_a = layout.entry(&id("a")).unwrap();
    let placed_b = layout.entry(&id("b")).unwrap();
    let placed_end = layout.entry(&id("end")).unwrap();

    // A -> B spans A's 32 plus the margin; B -> End clears B's whole 120
    assert_eq!(layout.connector_after(&id("a")).unwrap().length, 32 + 20);
    assert_eq!(placed_b.top, placed_a.top + 32 + 20);
    assert_eq!(layout.connector_after(&id("b")).unwrap().length, 120 + 20);
    assert_eq!(placed_end.top, placed_b.top + 120 + 20);
}

#[test]
fn long_end_text_never_moves_incoming_connector() {
    let short = itinerary(vec![Entry::activity(id("a"), "A")]);
    let mut long = short.clone();
    long.end = Entry::end(id("end"), "End").with_description("a\nb\nc\nd\ne\nf");

    let short_connector = TimelineLayout::compute(&short).connector_after(&id("a"));
    let long_connector = TimelineLayout::compute(&long).connector_after(&id("a"));
    assert_eq!(short_connector, long_connector);
}

// ===== Menu =====

#[test]
fn removing_menu_segment_closes_menu() {
    let mut editor = editor(three_segments());
    assert!(editor.open_menu(&id("b"), Anchor::new(10, 4)));

    editor.remove_segment(&id("b"));
    assert!(!editor.menu().is_open());
}

#[test]
fn moving_another_segment_keeps_menu_open() {
    let mut editor = editor(three_segments());
    editor.open_menu(&id("b"), Anchor::new(10, 4));

    editor.move_segment_down(&id("a"));
    assert!(editor.menu().is_on(&id("b")));
}

#[test]
fn menu_items_run_against_their_target_and_close() {
    let mut editor = editor(three_segments());

    editor.open_menu(&id("a"), Anchor::new(0, 0));
    assert_eq!(
        editor.activate_menu_item(MenuItem::AddSegment),
        EditOutcome::Applied
    );
    assert_eq!(order(&editor), vec!["a", "new-1", "b", "c"]);
    assert!(!editor.menu().is_open());

    editor.open_menu(&id("c"), Anchor::new(0, 0));
    editor.activate_menu_item(MenuItem::RemoveSegment);
    assert_eq!(order(&editor), vec!["a", "new-1", "b"]);
    assert!(!editor.menu().is_open());
}

#[test]
fn read_only_editor_rejects_edits_and_menu() {
    let mut editor = editor(three_segments());
    editor.set_editable(false);

    assert!(!editor.open_menu(&id("a"), Anchor::new(0, 0)));
    assert_eq!(
        editor.remove_segment(&id("a")),
        EditOutcome::Ignored(NoOpReason::ReadOnly)
    );
    assert_eq!(order(&editor), vec!["a", "b", "c"]);
    // geometry identical to the editable case
    let editable = TimelineLayout::compute(&three_segments());
    assert_eq!(editor.layout().entries(), editable.entries());
}

// ===== Controlled mode =====

#[test]
fn delegated_remove_reaches_caller_and_leaves_snapshot() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let handlers = EditHandlers::none()
        .on_remove_segment(move |id: &EntryId| sink.borrow_mut().push(id.to_string()));
    let mut editor = TimelineEditor::with_handlers(three_segments(), handlers);

    assert_eq!(editor.remove_segment(&id("b")), EditOutcome::Delegated);
    assert_eq!(*calls.borrow(), vec!["b".to_string()]);
    assert_eq!(order(&editor), vec!["a", "b", "c"]);

    // the caller answers with its next snapshot
    let mut next = three_segments();
    next.segments.remove(1);
    editor.sync(next);
    assert_eq!(order(&editor), vec!["a", "c"]);
}

#[test]
fn delegation_is_chosen_per_operation() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let handlers = EditHandlers::none().on_move_segment_up(move |_: &EntryId| {
        *sink.borrow_mut() += 1;
    });
    let mut editor = TimelineEditor::with_handlers(three_segments(), handlers);

    assert_eq!(editor.move_segment_up(&id("b")), EditOutcome::Delegated);
    assert_eq!(editor.move_segment_down(&id("a")), EditOutcome::Applied);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(order(&editor), vec!["b", "a", "c"]);
}

#[test]
fn invalid_requests_are_not_delegated() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let handlers = EditHandlers::none().on_remove_segment(move |_: &EntryId| {
        *sink.borrow_mut() += 1;
    });
    let mut editor = TimelineEditor::with_handlers(three_segments(), handlers);

    assert!(editor.remove_segment(&id("start")).is_noop());
    assert!(editor.remove_segment(&id("ghost")).is_noop());
    assert_eq!(*calls.borrow(), 0);
}
