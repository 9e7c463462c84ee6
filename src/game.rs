use enum_map::{EnumMap, enum_map};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::error::{MoveError, SetupError};
use crate::event::{EventDispatcher, GameEvent, GameView};
use crate::force::Force;
use crate::game_end::{check_game_end, is_king_immobile};
use crate::piece::{Piece, PieceKind, PlacedPiece};
use crate::reachability::{is_reachable, reachable_cells};
use crate::starter::starting_layout;
use crate::turn::TurnController;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: u8,
    pub to: u8,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

#[derive(Debug)]
pub struct ChessGame {
    board: Board,
    turn: TurnController,
    history: Vec<MoveRecord>,
    captured: EnumMap<Force, Vec<PieceKind>>,
    dispatcher: EventDispatcher,
}

impl ChessGame {
    // Standard layout, White to move.
    pub fn new() -> Self {
        let board = Board::from_layout(&starting_layout())
            .unwrap_or_else(|err| panic!("Invalid starting layout: {:?}", err));
        Self::with_board(board, Force::White)
    }

    pub fn from_layout(layout: &[PlacedPiece], first_to_move: Force) -> Result<Self, SetupError> {
        Ok(Self::with_board(Board::from_layout(layout)?, first_to_move))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, SetupError> {
        Self::from_layout(&config.layout()?, config.first_to_move)
    }

    fn with_board(board: Board, first_to_move: Force) -> Self {
        ChessGame {
            board,
            turn: TurnController::new(first_to_move),
            history: Vec::new(),
            captured: enum_map! { _ => Vec::new() },
            dispatcher: EventDispatcher::default(),
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn active_force(&self) -> Force { self.turn.active_force() }
    pub fn history(&self) -> &[MoveRecord] { &self.history }
    // Pieces of `force` that were captured, in capture order.
    pub fn captured(&self, force: Force) -> &[PieceKind] { &self.captured[force] }

    pub fn pieces(&self) -> Vec<PlacedPiece> { self.board.pieces_snapshot() }

    // Observers run while the move is being applied, so they get a view of the game
    // instead of calling back into it.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent, &GameView) + 'static) {
        self.dispatcher.subscribe(observer);
    }

    pub fn is_king_immobile(&self, force: Force) -> bool { is_king_immobile(&self.board, force) }

    // Destinations of the piece at `position`, regardless of whose turn it is.
    pub fn reachable_from(&self, position: i32) -> Vec<u8> {
        match Coord::from_index(position) {
            Some(from) => reachable_cells(self.board.grid(), from)
                .into_iter()
                .map(Coord::to_index)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn try_move(&mut self, from: i32, to: i32) -> bool {
        self.try_move_detailed(from, to).is_ok()
    }

    // Either applies the move completely or returns an error without touching game state.
    pub fn try_move_detailed(&mut self, from: i32, to: i32) -> Result<MoveRecord, MoveError> {
        let result = self.validate_move(from, to);
        debug!("Move {} -> {} by {:?}: {:?}", from, to, self.active_force(), result.map(|_| ()));
        let (from, to, piece) = result?;
        Ok(self.apply_move(from, to, piece))
    }

    fn validate_move(&self, from: i32, to: i32) -> Result<(Coord, Coord, Piece), MoveError> {
        let from = Coord::from_index(from).ok_or(MoveError::OutOfRange)?;
        let to = Coord::from_index(to).ok_or(MoveError::OutOfRange)?;
        let piece = self.board.grid()[from].ok_or(MoveError::PieceMissing)?;
        if piece.force != self.active_force() {
            return Err(MoveError::WrongTurnOrder);
        }
        if !is_reachable(self.board.grid(), from, to) {
            return Err(MoveError::Unreachable);
        }
        Ok((from, to, piece))
    }

    fn apply_move(&mut self, from: Coord, to: Coord, piece: Piece) -> MoveRecord {
        let captured = self.board.move_piece(from, to);
        if let Some(captured) = captured {
            self.captured[captured.force].push(captured.kind);
        }
        let record = MoveRecord {
            from: from.to_index(),
            to: to.to_index(),
            piece,
            captured,
        };
        self.history.push(record);
        info!(
            "{:?} {:?} {} -> {}{}",
            piece.force,
            piece.kind,
            from.to_algebraic(),
            to.to_algebraic(),
            captured.map_or(String::new(), |c| format!(" capturing {:?}", c.kind))
        );

        let side_changed = self.turn.change_side();
        let game_over = check_game_end(&self.board, self.turn.active_force());
        let view = GameView {
            board: &self.board,
            active_force: self.turn.active_force(),
        };
        self.dispatcher.emit(&side_changed, &view);
        if let Some(game_over) = game_over {
            self.dispatcher.emit(&game_over, &view);
        }
        record
    }
}
