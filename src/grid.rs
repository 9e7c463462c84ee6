use std::{fmt, ops};

use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::force::Force;
use crate::piece::{Piece, PieceKind, piece_to_ascii};


// Position-keyed occupancy index. An empty cell is `None`; there are no empty-cell entities.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn is_free(&self, pos: Coord) -> bool { self[pos].is_none() }

    pub fn is_occupied_by(&self, pos: Coord, force: Force) -> bool {
        self[pos].is_some_and(|piece| piece.force == force)
    }

    // Iterates in position order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|pos| self[pos].map(|piece| (pos, piece)))
    }

    pub fn find_king(&self, force: Force) -> Option<Coord> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.force == force)
            .map(|(pos, _)| pos)
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(pos, piece)| (pos.to_index(), piece_to_ascii(piece))))
            .finish()
    }
}
