//! Drawing, editing, hover, and viewport workflows through the facade.
//!
//! Built boards use a zero calibration offset, so with the viewport at its
//! initial position screen and world coordinates coincide.

use crate::helpers::{click, line_between, move_to, wheel, BoardBuilder};
use gridboard::input::events::{Key, PointerEvent};
use gridboard::types::{LineColor, Mode, Point, Size};

#[test]
fn test_click_click_commits_a_line() {
    let (mut board, commits) = BoardBuilder::new().build();

    click(&mut board, 10.0, 10.0);
    assert!(board.editor().is_drawing());
    assert!(board.annotations().is_empty());
    assert!(commits.borrow().is_empty());

    move_to(&mut board, 50.0, 10.0);
    click(&mut board, 50.0, 10.0);

    assert!(!board.editor().is_drawing());
    let lines = board.annotations().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].start(), Point::new(10.0, 10.0));
    assert_eq!(lines[0].end(), Point::new(50.0, 10.0));
    assert_eq!(lines[0].color, LineColor::Normal);

    let commits = commits.borrow();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].len(), 1);
}

#[test]
fn test_axis_aligned_provisional_line_is_flagged() {
    let (mut board, _) = BoardBuilder::new().build();

    click(&mut board, 10.0, 10.0);
    move_to(&mut board, 80.0, 10.0);
    assert_eq!(
        board.editor().current_line().unwrap().color,
        LineColor::Aligned
    );

    move_to(&mut board, 80.0, 15.0);
    assert_eq!(
        board.editor().current_line().unwrap().color,
        LineColor::Normal
    );
}

#[test]
fn test_escape_discards_a_new_line() {
    let (mut board, commits) = BoardBuilder::new().build();

    click(&mut board, 10.0, 10.0);
    move_to(&mut board, 90.0, 40.0);
    board.on_key_down(Key::Escape);

    assert!(!board.editor().is_drawing());
    assert!(board.annotations().is_empty());
    assert!(commits.borrow().is_empty());
}

#[test]
fn test_escape_during_edit_restores_the_original() {
    let line = line_between((100.0, 100.0), (200.0, 100.0));
    let id = line.id;
    let (mut board, commits) = BoardBuilder::new().with_line(line).build();

    // Hover the start handle, then grab it
    move_to(&mut board, 100.0, 100.0);
    assert_eq!(board.editor().hovered_line(), Some(id));
    click(&mut board, 100.0, 100.0);
    assert!(board.editor().is_drawing());
    assert!(board.annotations().is_empty());

    move_to(&mut board, 150.0, 150.0);
    board.on_key_down(Key::Escape);

    let restored = board.annotations().get(id).unwrap();
    assert_eq!(restored.start(), Point::new(100.0, 100.0));
    assert_eq!(restored.end(), Point::new(200.0, 100.0));
    assert_eq!(restored.color, LineColor::Normal);
    assert!(commits.borrow().is_empty());
}

#[test]
fn test_edit_commit_moves_the_grabbed_endpoint() {
    let line = line_between((100.0, 100.0), (200.0, 100.0));
    let id = line.id;
    let (mut board, commits) = BoardBuilder::new().with_line(line).build();

    move_to(&mut board, 100.0, 100.0);
    click(&mut board, 100.0, 100.0);
    move_to(&mut board, 120.0, 140.0);
    click(&mut board, 120.0, 140.0);

    let edited = board.annotations().get(id).unwrap();
    assert_eq!(edited.start(), Point::new(120.0, 140.0));
    assert_eq!(edited.end(), Point::new(200.0, 100.0));
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn test_hover_highlights_only_the_nearest_line() {
    let a = line_between((0.0, 50.0), (100.0, 50.0));
    let b = line_between((0.0, 200.0), (100.0, 200.0));
    let (a_id, b_id) = (a.id, b.id);
    let (mut board, _) = BoardBuilder::new().with_line(a).with_line(b).build();

    move_to(&mut board, 50.0, 52.0);
    assert_eq!(
        board.annotations().get(a_id).unwrap().color,
        LineColor::Highlighted
    );
    assert_eq!(board.annotations().get(b_id).unwrap().color, LineColor::Normal);

    // Move away from both
    move_to(&mut board, 50.0, 120.0);
    assert_eq!(board.editor().hovered_line(), None);
    assert_eq!(board.annotations().get(a_id).unwrap().color, LineColor::Normal);
}

#[test]
fn test_shift_suppresses_hover_and_handle_grabs() {
    let line = line_between((0.0, 50.0), (100.0, 50.0));
    let id = line.id;
    let (mut board, _) = BoardBuilder::new().with_line(line).build();

    move_to(&mut board, 0.0, 50.0);
    assert_eq!(
        board.annotations().get(id).unwrap().color,
        LineColor::Highlighted
    );

    board.on_key_down(Key::Shift);
    assert_eq!(board.annotations().get(id).unwrap().color, LineColor::Normal);

    // With hover suppressed a click on the handle starts a new line instead
    // of grabbing it
    click(&mut board, 0.0, 50.0);
    assert!(board.editor().is_drawing());
    assert_eq!(board.annotations().len(), 1);
    board.on_key_down(Key::Escape);

    board.on_key_up(Key::Shift);
    assert_eq!(
        board.annotations().get(id).unwrap().color,
        LineColor::Highlighted
    );
}

#[test]
fn test_wheel_zoom_chord_updates_the_store() {
    let (mut board, _) = BoardBuilder::new().build();

    wheel(&mut board, 0.0, -100.0, true);
    assert_eq!(board.state().zoom_level, 2.0);

    wheel(&mut board, 0.0, -100_000.0, true);
    assert_eq!(board.state().zoom_level, 5.0);

    wheel(&mut board, 0.0, 100_000.0, true);
    assert_eq!(board.state().zoom_level, 0.1);
}

#[test]
fn test_plain_wheel_pans_the_viewport() {
    let (mut board, _) = BoardBuilder::new().build();

    wheel(&mut board, 30.0, 40.0, false);
    assert_eq!(board.viewport().position(), Point::new(-30.0, -40.0));
    assert_eq!(board.state().zoom_level, 1.0);
}

#[test]
fn test_pan_mode_drag_moves_the_viewport() {
    let (mut board, _) = BoardBuilder::new().with_mode(Mode::Pan).build();

    board.on_pointer_down(PointerEvent::left_at(Point::new(400.0, 300.0)));
    move_to(&mut board, 350.0, 260.0);
    assert_eq!(board.viewport().position(), Point::new(-50.0, -40.0));

    board.on_pointer_up(PointerEvent::left_at(Point::new(350.0, 260.0)));
    move_to(&mut board, 200.0, 200.0);
    assert_eq!(board.viewport().position(), Point::new(-50.0, -40.0));
}

#[test]
fn test_clicks_draw_nothing_in_pan_mode() {
    let (mut board, commits) = BoardBuilder::new().with_mode(Mode::Pan).build();

    click(&mut board, 10.0, 10.0);
    assert!(!board.editor().is_drawing());
    assert!(board.annotations().is_empty());
    assert!(commits.borrow().is_empty());
}

#[test]
fn test_viewport_resize_reclamps_the_position() {
    let (mut board, _) = BoardBuilder::new().with_viewport(400.0, 300.0).build();

    wheel(&mut board, 2000.0, 2000.0, false);
    assert_eq!(board.viewport().position(), Point::new(-1600.0, -1700.0));

    board.set_viewport_size(Size::new(800.0, 600.0));
    assert_eq!(board.viewport().position(), Point::new(-1200.0, -1400.0));
}

#[test]
fn test_default_calibration_offsets_world_points() {
    let (mut board, _) = BoardBuilder::new().with_default_calibration().build();

    click(&mut board, 10.0, 10.0);
    let anchor = board.editor().current_line().unwrap().start();
    assert_eq!(anchor, Point::new(9.5, 11.0));
}
