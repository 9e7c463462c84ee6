use itertools::Itertools;

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::error::SetupError;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind, PlacedPiece, piece_from_ascii};
use crate::util::as_single_char;


const STARTING_PIECE_ROW: [PieceKind; NUM_COLS as usize] = {
    use PieceKind::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};

fn setup_white_pieces(grid: &mut Grid) {
    for (col, kind) in Col::all().zip(STARTING_PIECE_ROW) {
        grid[Coord::new(Row::_1, col)] = Some(Piece::new(kind, Force::White));
        grid[Coord::new(Row::_2, col)] = Some(Piece::new(PieceKind::Pawn, Force::White));
    }
}

fn setup_black_pieces_mirrorlike(grid: &mut Grid) {
    let white_pieces = grid.pieces().collect_vec();
    for (coord, piece) in white_pieces {
        let mirror_row = Row::from_zero_based(NUM_ROWS - coord.row.to_zero_based() - 1);
        let mirror_coord = Coord::new(mirror_row, coord.col);
        assert!(grid[mirror_coord].is_none(), "{:?}", grid);
        grid[mirror_coord] = Some(Piece { force: Force::Black, ..piece });
    }
}

pub fn starting_grid() -> Grid {
    let mut grid = Grid::new();
    setup_white_pieces(&mut grid);
    setup_black_pieces_mirrorlike(&mut grid);
    grid
}

// The standard 32-piece arrangement. White occupies positions 48..=63, Black 0..=15.
pub fn starting_layout() -> Vec<PlacedPiece> {
    starting_grid()
        .pieces()
        .map(|(pos, piece)| piece.placed_at(pos.to_index()))
        .collect()
}

// Parses a diagram with one line per row, top line holding positions 0..=7.
// Cells are separated by whitespace: '.' is empty, "PNBRQK" are White, "pnbrqk" are Black.
pub fn layout_from_diagram(diagram: &str) -> Result<Vec<PlacedPiece>, SetupError> {
    let rows = diagram
        .lines()
        .map(|line| line.split_whitespace().collect_vec())
        .filter(|row| !row.is_empty())
        .collect_vec();
    if rows.len() != NUM_ROWS as usize || rows.iter().any(|row| row.len() != NUM_COLS as usize)
    {
        return Err(SetupError::InvalidDiagram);
    }
    let mut layout = Vec::new();
    for (position, cell) in rows.into_iter().flatten().enumerate() {
        if cell == "." {
            continue;
        }
        let piece = as_single_char(cell)
            .and_then(piece_from_ascii)
            .ok_or(SetupError::InvalidDiagram)?;
        layout.push(piece.placed_at(position as u8));
    }
    Ok(layout)
}
