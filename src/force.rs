use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::Row;


// `White` is side A: moves first and starts at the high positions (48..=63).
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Enum, EnumIter, Serialize,
    Deserialize,
)]
pub enum Force {
    #[default]
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    // Row delta of a pawn step.
    pub fn direction_forward(self) -> i8 {
        match self {
            Force::White => 1,
            Force::Black => -1,
        }
    }

    pub fn pawn_starting_row(self) -> Row {
        match self {
            Force::White => Row::_2,
            Force::Black => Row::_7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Force::White => "White",
            Force::Black => "Black",
        }
    }
}
