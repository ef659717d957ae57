//! Edge auto-pan while drawing, driven through the facade.
//!
//! The pointer sits 790 px into an 800 px viewport, 40 px past the 50 px
//! edge threshold, which arms auto-pan at 8 px per tick.

use crate::helpers::{click, move_to, BoardBuilder};
use gridboard::input::events::Key;
use gridboard::types::Point;

fn assert_near(actual: Point, x: f32, y: f32) {
    assert!(
        (actual.x - x).abs() < 1e-3 && (actual.y - y).abs() < 1e-3,
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

#[test]
fn test_drawing_near_the_edge_arms_auto_pan() {
    let (mut board, _) = BoardBuilder::new().build();

    click(&mut board, 400.0, 300.0);
    move_to(&mut board, 790.0, 300.0);
    assert!(board.viewport().is_auto_panning());

    // Pointer retreats toward the center
    move_to(&mut board, 400.0, 300.0);
    assert!(!board.viewport().is_auto_panning());

    let position = board.viewport().position();
    board.tick_auto_pan();
    assert_eq!(board.viewport().position(), position);
}

#[test]
fn test_ticks_pan_and_keep_the_endpoint_pinned() {
    let (mut board, _) = BoardBuilder::new().build();
    click(&mut board, 400.0, 300.0);
    move_to(&mut board, 790.0, 300.0);

    board.tick_auto_pan();
    assert_near(board.viewport().position(), -8.0, 0.0);
    assert_near(board.editor().current_line().unwrap().end(), 798.0, 300.0);

    // Each tick accelerates by the base rate
    board.tick_auto_pan();
    assert_near(board.viewport().position(), -24.0, 0.0);
    assert_near(board.editor().current_line().unwrap().end(), 814.0, 300.0);
}

#[test]
fn test_commit_stops_auto_pan() {
    let (mut board, commits) = BoardBuilder::new().build();
    click(&mut board, 400.0, 300.0);
    move_to(&mut board, 790.0, 300.0);
    assert!(board.viewport().is_auto_panning());

    click(&mut board, 790.0, 300.0);
    assert!(!board.viewport().is_auto_panning());
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn test_escape_stops_auto_pan() {
    let (mut board, _) = BoardBuilder::new().build();
    click(&mut board, 400.0, 300.0);
    move_to(&mut board, 790.0, 300.0);

    board.on_key_down(Key::Escape);
    assert!(!board.viewport().is_auto_panning());
    assert!(!board.editor().is_drawing());
}

#[test]
fn test_no_auto_pan_when_every_edge_is_flush() {
    // Content exactly fills the viewport, so there is nowhere to pan
    let (mut board, _) = BoardBuilder::new().with_content(800.0, 600.0).build();

    click(&mut board, 400.0, 300.0);
    move_to(&mut board, 790.0, 300.0);
    assert!(!board.viewport().is_auto_panning());
}

#[test]
fn test_no_auto_pan_without_an_active_draw() {
    let (mut board, _) = BoardBuilder::new().build();

    move_to(&mut board, 790.0, 300.0);
    assert!(!board.viewport().is_auto_panning());
}
