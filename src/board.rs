use crate::coord::Coord;
use crate::error::SetupError;
use crate::force::Force;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::piece::{Piece, PieceKind, PlacedPiece};


// Owns the pieces. Mutated only through `move_piece`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
}

impl Board {
    // Requires each side to have exactly one king: the end-of-game test looks for it.
    pub fn from_layout(layout: &[PlacedPiece]) -> Result<Self, SetupError> {
        let mut grid = Grid::new();
        for placed in layout {
            let pos = Coord::from_index(placed.position.into())
                .ok_or(SetupError::OutOfRange { position: placed.position.into() })?;
            if grid[pos].is_some() {
                return Err(SetupError::DuplicatePosition { position: placed.position });
            }
            grid[pos] = Some(placed.piece());
        }
        let board = Board { grid };
        for force in [Force::White, Force::Black] {
            if board.count_kings(force) != 1 {
                return Err(SetupError::KingCount);
            }
        }
        Ok(board)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    // Ordered by position.
    pub fn pieces_snapshot(&self) -> Vec<PlacedPiece> {
        self.grid.pieces().map(|(pos, piece)| piece.placed_at(pos.to_index())).collect()
    }

    pub fn at(&self, position: i32) -> Option<PlacedPiece> {
        let pos = Coord::from_index(position)?;
        self.grid[pos].map(|piece| piece.placed_at(pos.to_index()))
    }

    // Removes whatever stands on `to`, then relocates the piece from `from`.
    // Returns the captured piece, if any.
    //
    // Panics if `from` is empty: callers validate the move first.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        assert_ne!(from, to, "{}", internal_error_message!("null move {:?}", from));
        let piece = self.grid[from]
            .take()
            .unwrap_or_else(|| panic!("{}", internal_error_message!("no piece at {:?}", from)));
        self.grid[to].replace(piece)
    }

    fn count_kings(&self, force: Force) -> usize {
        self.grid
            .pieces()
            .filter(|(_, piece)| piece.force == force && piece.kind == PieceKind::King)
            .count()
    }
}
