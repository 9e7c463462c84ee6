// Destinations a piece may move to in one ply.
//
// Simplifications:
//   - No check detection: a move may leave or put own king under attack.
//   - No castling, en passant or promotion.

use itertools::Itertools;
use log::debug;

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::PieceKind;


const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
// Leaper offsets are (row, col) steps, so a knight or king never wraps to the opposite file.
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
const KING_OFFSETS: [(i8, i8); 8] =
    [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

// Returns cells sorted by position. Empty if there is no piece at `from`.
pub fn reachable_cells(grid: &Grid, from: Coord) -> Vec<Coord> {
    let Some(piece) = grid[from] else {
        return Vec::new();
    };
    let mut cells = Vec::new();
    {
        use PieceKind::*;
        match piece.kind {
            Pawn => pawn_cells(grid, from, piece.force, &mut cells),
            Knight => leaper_cells(grid, from, piece.force, &KNIGHT_OFFSETS, &mut cells),
            Bishop => slider_cells(grid, from, piece.force, &DIAGONAL_DIRECTIONS, &mut cells),
            Rook => slider_cells(grid, from, piece.force, &ORTHOGONAL_DIRECTIONS, &mut cells),
            Queen => {
                slider_cells(grid, from, piece.force, &ORTHOGONAL_DIRECTIONS, &mut cells);
                slider_cells(grid, from, piece.force, &DIAGONAL_DIRECTIONS, &mut cells);
            }
            King => leaper_cells(grid, from, piece.force, &KING_OFFSETS, &mut cells),
        }
    }
    let cells = cells.into_iter().sorted_by_key(|pos| pos.to_index()).collect_vec();
    debug!(
        "{:?} {:?} at {} reaches [{}]",
        piece.force,
        piece.kind,
        from.to_index(),
        cells.iter().map(|pos| pos.to_index()).join(", ")
    );
    cells
}

pub fn is_reachable(grid: &Grid, from: Coord, to: Coord) -> bool {
    reachable_cells(grid, from).contains(&to)
}

// Walks each ray until the board edge or the first occupied cell. The occupied cell is
// included iff it holds an enemy piece.
fn slider_cells(
    grid: &Grid, from: Coord, force: Force, directions: &[(i8, i8)], out: &mut Vec<Coord>,
) {
    for &(d_row, d_col) in directions {
        let mut pos = from;
        while let Some(next) = pos.offset(d_row, d_col) {
            match grid[next] {
                None => out.push(next),
                Some(other) => {
                    if other.force != force {
                        out.push(next);
                    }
                    break;
                }
            }
            pos = next;
        }
    }
}

fn leaper_cells(
    grid: &Grid, from: Coord, force: Force, offsets: &[(i8, i8)], out: &mut Vec<Coord>,
) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| !grid.is_occupied_by(to, force)),
    );
}

fn pawn_cells(grid: &Grid, from: Coord, force: Force, out: &mut Vec<Coord>) {
    let forward = force.direction_forward();
    if let Some(one_step) = from.offset(forward, 0) {
        if grid.is_free(one_step) {
            out.push(one_step);
            if from.row == force.pawn_starting_row() {
                if let Some(two_steps) = one_step.offset(forward, 0) {
                    if grid.is_free(two_steps) {
                        out.push(two_steps);
                    }
                }
            }
        }
    }
    // Diagonal moves are capture-only.
    for d_col in [-1, 1] {
        if let Some(to) = from.offset(forward, d_col) {
            if grid.is_occupied_by(to, force.opponent()) {
                out.push(to);
            }
        }
    }
}
