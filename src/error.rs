use serde::{Deserialize, Serialize};


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// Reasons for rejecting a move. A rejected move never changes game state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MoveError {
    OutOfRange,
    PieceMissing,
    WrongTurnOrder,
    Unreachable,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SetupError {
    OutOfRange { position: i32 },
    DuplicatePosition { position: u8 },
    InvalidDiagram,
    ConflictingLayout,
    KingCount,
}

impl MoveError {
    pub fn description(self) -> &'static str {
        match self {
            MoveError::OutOfRange => "cell is outside of the board",
            MoveError::PieceMissing => "no piece to move",
            MoveError::WrongTurnOrder => "it is the other side's turn",
            MoveError::Unreachable => "the piece cannot move there",
        }
    }
}
