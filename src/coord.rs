use std::fmt;

use itertools::Itertools;
use static_assertions::const_assert_eq;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;
pub const NUM_CELLS: u8 = NUM_ROWS * NUM_COLS;

const_assert_eq!(NUM_CELLS, 64);


// Row 0 is White's back edge (algebraic rank '1').
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn checked_from_zero_based(idx: i8) -> Option<Self> {
        (0..NUM_ROWS as i8).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub fn from_algebraic(idx: char) -> Option<Self> {
        let idx = (idx as i32) - ('1' as i32);
        i8::try_from(idx).ok().and_then(Self::checked_from_zero_based)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn checked_from_zero_based(idx: i8) -> Option<Self> {
        (0..NUM_COLS as i8).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub fn from_algebraic(idx: char) -> Option<Self> {
        let idx = (idx as i32) - ('a' as i32);
        i8::try_from(idx).ok().and_then(Self::checked_from_zero_based)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}

impl Row {
    pub const _1: Row = Row::from_zero_based(0);
    pub const _2: Row = Row::from_zero_based(1);
    pub const _7: Row = Row::from_zero_based(6);
}


// A cell on the board.
//
// Externally cells are addressed by a flat position in 0..64. Position 0 is the
// top-left corner from White's point of view (algebraic "a8"), position 63 is "h1".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_index(position: i32) -> Option<Self> {
        if !(0..NUM_CELLS as i32).contains(&position) {
            return None;
        }
        let position = position as u8;
        Some(Self {
            row: Row::from_zero_based(NUM_ROWS - 1 - position / NUM_COLS),
            col: Col::from_zero_based(position % NUM_COLS),
        })
    }

    pub fn to_index(self) -> u8 {
        (NUM_ROWS - 1 - self.row.to_zero_based()) * NUM_COLS + self.col.to_zero_based()
    }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.chars().collect_tuple()?;
        Some(Self {
            row: Row::from_algebraic(row)?,
            col: Col::from_algebraic(col)?,
        })
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    // Returns `None` if the step leaves the board. Never wraps around to another row.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Some(Self {
            row: Row::checked_from_zero_based(self.row.to_zero_based() as i8 + d_row)?,
            col: Col::checked_from_zero_based(self.col.to_zero_based() as i8 + d_col)?,
        })
    }

    // Iterates in position order: 0, 1, ..., 63.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..NUM_CELLS as i32).filter_map(Self::from_index)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}:{})", self.to_index(), self.to_algebraic())
    }
}
