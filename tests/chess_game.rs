mod common;

use std::cell::RefCell;
use std::rc::Rc;

use indoc::indoc;
use pretty_assertions::assert_eq;
use sc_chess::{ChessGame, Force, GameEvent, MoveError};

use common::{PieceIs, cell, game_from_diagram, replay};


#[test]
fn pawn_single_step() {
    let mut game = ChessGame::new();
    assert_eq!(game.active_force(), Force::White);
    assert!(game.try_move(52, 44));
    assert!(game.board().at(44).is(piece!(White Pawn)));
    assert_eq!(game.board().at(52), None);
    assert_eq!(game.active_force(), Force::Black);
}

#[test]
fn pawn_double_step_from_starting_row() {
    let mut game = ChessGame::new();
    assert!(game.try_move(52, 36));
    assert!(game.board().at(36).is(piece!(White Pawn)));
    assert_eq!(game.active_force(), Force::Black);
}

#[test]
fn pawn_cannot_advance_three_rows() {
    let mut game = ChessGame::new();
    let before = game.pieces();
    assert_eq!(game.try_move_detailed(52, 28), Err(MoveError::Unreachable));
    assert_eq!(game.pieces(), before);
    assert_eq!(game.active_force(), Force::White);
}

#[test]
fn double_step_onto_occupied_cell() {
    let mut game = ChessGame::new();
    replay(&mut game, "e2e4 a7a6 e4e5");
    let before = game.pieces();
    // Intermediate cell is free, destination is not.
    assert!(!game.try_move(cell("e7"), cell("e5")));
    assert_eq!(game.pieces(), before);
    assert_eq!(game.active_force(), Force::Black);
}

#[test]
fn wrong_side() {
    let mut game = ChessGame::new();
    let before = game.pieces();
    assert_eq!(game.try_move_detailed(8, 16), Err(MoveError::WrongTurnOrder));
    assert_eq!(game.pieces(), before);
}

#[test]
fn rook_cannot_slide_through_own_pawn() {
    let mut game = ChessGame::new();
    let before = game.pieces();
    assert!(!game.try_move(56, 0));
    assert!(!game.try_move(56, 40));
    assert_eq!(game.pieces(), before);
}

#[test]
fn out_of_range() {
    let mut game = ChessGame::new();
    assert_eq!(game.try_move_detailed(52, -8), Err(MoveError::OutOfRange));
    assert_eq!(game.try_move_detailed(64, 56), Err(MoveError::OutOfRange));
    assert_eq!(game.try_move_detailed(i32::MIN, i32::MAX), Err(MoveError::OutOfRange));
}

#[test]
fn short_game_with_captures() {
    let mut game = ChessGame::new();
    replay(&mut game, "e2e4 d7d5 e4d5 d8d5 b1c3 d5a5 g1f3 c8g4 f1e2 b8c6");
    assert!(game.board().at(cell("a5")).is(piece!(Black Queen)));
    assert!(game.board().at(cell("g4")).is(piece!(Black Bishop)));
    assert_eq!(game.pieces().len(), 30);
    assert_eq!(game.active_force(), Force::White);
    // Queen takes the pawn on a2.
    assert!(game.try_move(cell("c3"), cell("b5")));
    assert!(game.try_move(cell("a5"), cell("a2")));
    assert!(game.board().at(cell("a2")).is(piece!(Black Queen)));
    assert_eq!(game.pieces().len(), 29);
}

#[test]
fn king_captured() {
    let mut game = game_from_diagram(
        indoc! {"
            . . . . k . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . R . . .
            . . . . . . . .
            . . . . . . . .
            . . . . K . . .
        "},
        Force::White,
    );
    let events = record_events(&mut game);

    // No check detection: the rook simply takes the king.
    assert!(game.try_move(cell("e4"), cell("e8")));
    assert!(game.board().at(cell("e8")).is(piece!(White Rook)));
    assert!(game.is_king_immobile(Force::Black));
    assert_eq!(*events.borrow(), vec![
        GameEvent::SideChanged,
        GameEvent::GameOver { message: "Black king has no moves left. White wins!".to_owned() },
    ]);
}

#[test]
fn king_may_step_into_attack() {
    let mut game = game_from_diagram(
        indoc! {"
            . . . . k . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            r . . . K . . .
        "},
        Force::White,
    );
    assert_eq!(game.reachable_from(cell("e1")), vec![51, 52, 53, 59, 61]);
    assert!(game.try_move(cell("e1"), cell("d1")));
}

fn record_events(game: &mut ChessGame) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn game_over_when_king_is_walled_in() {
    let mut game = game_from_diagram(
        indoc! {"
            . . . . . . r k
            . . . . . . p p
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            K . . . . . . .
        "},
        Force::White,
    );
    let events = record_events(&mut game);
    assert!(game.is_king_immobile(Force::Black));
    assert!(game.try_move(cell("a1"), cell("b1")));
    assert_eq!(*events.borrow(), vec![
        GameEvent::SideChanged,
        GameEvent::GameOver { message: "Black king has no moves left. White wins!".to_owned() },
    ]);
    // Notification only: play goes on.
    assert!(game.try_move(cell("g8"), cell("f8")));
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn free_king_does_not_end_game() {
    let mut game = game_from_diagram(
        indoc! {"
            . . . . . . . k
            . . . . . . p p
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            K . . . . . . .
        "},
        Force::White,
    );
    let events = record_events(&mut game);
    assert!(game.try_move(cell("a1"), cell("b1")));
    assert!(game.try_move(cell("h8"), cell("g8")));
    assert_eq!(*events.borrow(), vec![GameEvent::SideChanged, GameEvent::SideChanged]);
}

#[test]
fn only_side_to_move_is_tested() {
    let mut game = game_from_diagram(
        indoc! {"
            . . . . . . . k
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            P P . . . . . .
            K . R . . . . .
        "},
        Force::White,
    );
    let events = record_events(&mut game);
    // White walls in its own king, but it is Black's turn now.
    assert!(game.try_move(cell("c1"), cell("b1")));
    assert!(game.is_king_immobile(Force::White));
    assert_eq!(*events.borrow(), vec![GameEvent::SideChanged]);

    assert!(game.try_move(cell("h8"), cell("g8")));
    assert_eq!(*events.borrow(), vec![
        GameEvent::SideChanged,
        GameEvent::SideChanged,
        GameEvent::GameOver { message: "White king has no moves left. Black wins!".to_owned() },
    ]);
}
