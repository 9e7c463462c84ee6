use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
}

// A piece together with its cell: the unit of board snapshots and layouts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub position: u8,
    pub force: Force,
    pub kind: PieceKind,
}

impl PieceKind {
    pub fn is_sliding(self) -> bool {
        use PieceKind::*;
        match self {
            Bishop | Rook | Queen => true,
            Pawn | Knight | King => false,
        }
    }

    pub fn to_full_algebraic(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_algebraic_char(notation: char) -> Option<Self> {
        match notation {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl Piece {
    pub fn placed_at(self, position: u8) -> PlacedPiece {
        PlacedPiece { position, force: self.force, kind: self.kind }
    }
}

impl PlacedPiece {
    pub fn piece(self) -> Piece { Piece::new(self.kind, self.force) }
}

// Uppercase for White, lowercase for Black.
pub fn piece_to_ascii(piece: Piece) -> char {
    let ch = piece.kind.to_full_algebraic();
    match piece.force {
        Force::White => ch,
        Force::Black => ch.to_ascii_lowercase(),
    }
}

pub fn piece_from_ascii(ch: char) -> Option<Piece> {
    let kind = PieceKind::from_algebraic_char(ch.to_ascii_uppercase())?;
    let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
    Some(Piece::new(kind, force))
}

pub fn piece_to_pictogram(piece: Piece) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (piece.force, piece.kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}
