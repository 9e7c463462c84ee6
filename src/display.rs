use itertools::Itertools;

use crate::coord::{Col, Coord, Row};
use crate::grid::Grid;
use crate::piece::{Piece, piece_to_ascii, piece_to_pictogram};


fn render_rows(grid: &Grid, cell: impl Fn(Option<Piece>) -> char) -> Vec<String> {
    Row::all()
        .rev()
        .map(|row| Col::all().map(|col| cell(grid[Coord::new(row, col)])).join(" "))
        .collect()
}

// Same format as accepted by `starter::layout_from_diagram`.
pub fn render_as_ascii(grid: &Grid) -> String {
    render_rows(grid, |piece| piece.map_or('.', piece_to_ascii)).join("\n")
}

// With algebraic labels, White at the bottom.
pub fn render_as_unicode(grid: &Grid) -> String {
    let rows = render_rows(grid, |piece| piece.map_or('·', piece_to_pictogram));
    let mut lines = Row::all()
        .rev()
        .zip(rows)
        .map(|(row, line)| format!("{} {}", row.to_algebraic(), line))
        .collect_vec();
    lines.push(format!("  {}", Col::all().map(|col| col.to_algebraic()).join(" ")));
    lines.join("\n")
}
