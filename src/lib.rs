#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod config;
pub mod coord;
pub mod display;
pub mod error;
pub mod event;
pub mod force;
pub mod game;
pub mod game_end;
pub mod grid;
pub mod piece;
pub mod reachability;
pub mod starter;
pub mod turn;
pub mod util;

pub use board::Board;
pub use config::GameConfig;
pub use coord::Coord;
pub use error::{MoveError, SetupError};
pub use event::{GameEvent, GameView};
pub use force::Force;
pub use game::{ChessGame, MoveRecord};
pub use piece::{Piece, PieceKind, PlacedPiece};
