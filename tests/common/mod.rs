// Improvement potential. Combine integration tests together:
//   https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use sc_chess::starter::layout_from_diagram;
use sc_chess::{ChessGame, Coord, Force, PieceKind, PlacedPiece};


#[derive(Clone, Copy, Debug)]
pub struct PieceMatcher {
    pub kind: PieceKind,
    pub force: Force,
}

pub trait PieceIs {
    fn is(self, matcher: PieceMatcher) -> bool;
}

impl PieceIs for Option<PlacedPiece> {
    fn is(self, matcher: PieceMatcher) -> bool {
        if let Some(piece) = self {
            piece.kind == matcher.kind && piece.force == matcher.force
        } else {
            false
        }
    }
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        common::PieceMatcher {
            force: sc_chess::Force::$force,
            kind: sc_chess::PieceKind::$kind,
        }
    };
}

// Algebraic cell name to position.
pub fn cell(algebraic: &str) -> i32 {
    Coord::from_algebraic(algebraic)
        .unwrap_or_else(|| panic!("Invalid cell: {}", algebraic))
        .to_index()
        .into()
}

pub fn game_from_diagram(diagram: &str, first_to_move: Force) -> ChessGame {
    let layout = layout_from_diagram(diagram).unwrap();
    ChessGame::from_layout(&layout, first_to_move).unwrap()
}

// Plays moves given as "e2e4" words. Panics on the first rejected move.
pub fn replay(game: &mut ChessGame, log: &str) {
    for mv in log.split_whitespace() {
        let (from, to) = mv.split_at(2);
        assert!(game.try_move(cell(from), cell(to)), "Move {} rejected", mv);
    }
}

// Random tests verify properties that should always hold, but let's fix the seed
// to avoid sporadic failures.
pub fn deterministic_rng() -> StdRng { StdRng::from_seed([0; 32]) }
