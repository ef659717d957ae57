//! Token drag-and-drop through the facade.

use crate::helpers::BoardBuilder;
use gridboard::tokens::TokenKind;
use gridboard::types::Point;

const NEW_PLAYER: &str =
    r#"{"newToken": true, "token": {"id": "t1", "type": "player"}, "row": 0, "col": 0}"#;

#[test]
fn test_new_token_lands_in_the_drop_cell() {
    let (mut board, _) = BoardBuilder::new().build();

    board.on_token_drop(NEW_PLAYER, Point::new(125.0, 75.0));

    let token = board.state().grid.get(1, 2).unwrap();
    assert_eq!(token.id, "t1");
    assert_eq!(token.kind, TokenKind::Player);
}

#[test]
fn test_moving_a_token_clears_its_source_cell() {
    let (mut board, _) = BoardBuilder::new().build();
    board.on_token_drop(NEW_PLAYER, Point::new(125.0, 75.0));

    let moved = r#"{"newToken": false, "token": {"id": "t1", "type": "player"}, "row": 1, "col": 2}"#;
    board.on_token_drop(moved, Point::new(225.0, 125.0));

    assert!(board.state().grid.get(1, 2).is_none());
    assert_eq!(board.state().grid.get(2, 4).unwrap().id, "t1");
}

#[test]
fn test_drop_cell_accounts_for_zoom() {
    let (mut board, _) = BoardBuilder::new().with_zoom(2.0).build();

    board.on_token_drop(NEW_PLAYER, Point::new(200.0, 100.0));

    assert!(board.state().grid.get(1, 2).is_some());
    assert!(board.state().grid.get(2, 4).is_none());
}

#[test]
fn test_malformed_payloads_are_ignored() {
    let (mut board, _) = BoardBuilder::new().build();
    let before = board.state().clone();

    board.on_token_drop("not json", Point::new(125.0, 75.0));
    board.on_token_drop(r#"{"newToken": true}"#, Point::new(125.0, 75.0));

    assert_eq!(board.state(), &before);
}
