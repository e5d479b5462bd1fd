use std::fmt;
use std::ops;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::force::Force;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Row form a force's point of view: row 1 is the force's back rank.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SubjectiveRow {
    idx: u8, // 0-based
}

impl SubjectiveRow {
    pub const fn from_one_based(idx: u8) -> Self {
        assert!(idx >= 1 && idx <= NUM_ROWS);
        Self { idx: idx - 1 }
    }
    pub fn to_row(self, force: Force) -> Row {
        match force {
            Force::White => Row::from_zero_based(self.idx),
            Force::Black => Row::from_zero_based(NUM_ROWS - self.idx - 1),
        }
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('1' as u32)?;
        if idx < NUM_ROWS as u32 { Some(Self { idx: idx as u8 }) } else { None }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('a' as u32)?;
        if idx < NUM_COLS as u32 { Some(Self { idx: idx as u8 }) } else { None }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_COLS).map(Self::from_zero_based) }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.chars().collect_tuple()?;
        Some(Coord {
            row: Row::from_algebraic(row)?,
            col: Col::from_algebraic(col)?,
        })
    }
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    // Row-major: a1, b1, ..., h1, a2, ..., h8.
    pub fn all() -> impl Iterator<Item = Coord> + Clone {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    pub fn offset(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        let row = self.row.to_zero_based() as i8 + d_row;
        let col = self.col.to_zero_based() as i8 + d_col;
        if (0..NUM_ROWS as i8).contains(&row) && (0..NUM_COLS as i8).contains(&col) {
            Some(Coord::new(Row::from_zero_based(row as u8), Col::from_zero_based(col as u8)))
        } else {
            None
        }
    }
}

impl ops::Add<(i8, i8)> for Coord {
    type Output = Self;
    #[track_caller]
    fn add(self, other: (i8, i8)) -> Self::Output {
        self.offset(other)
            .unwrap_or_else(|| panic!("{:?} + {:?} is out of the board", self, other))
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}


macro_rules! named_coords {
    (@row $row:literal, $col:expr, $name:ident $(, $rest:ident)*) => {
        pub const $name: Coord = Coord::new(Row::from_zero_based($row), Col::from_zero_based($col));
        named_coords!(@row $row, $col + 1, $($rest),*);
    };
    (@row $row:literal, $col:expr,) => {};
    ($($row:literal => [$($name:ident),*];)*) => {
        #[allow(dead_code)]
        impl Coord {
            $(named_coords!(@row $row, 0u8, $($name),*);)*
        }
    };
}

named_coords! {
    0 => [A1, B1, C1, D1, E1, F1, G1, H1];
    1 => [A2, B2, C2, D2, E2, F2, G2, H2];
    2 => [A3, B3, C3, D3, E3, F3, G3, H3];
    3 => [A4, B4, C4, D4, E4, F4, G4, H4];
    4 => [A5, B5, C5, D5, E5, F5, G5, H5];
    5 => [A6, B6, C6, D6, E6, F6, G6, H6];
    6 => [A7, B7, C7, D7, E7, F7, G7, H7];
    7 => [A8, B8, C8, D8, E8, F8, G8, H8];
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic() {
        assert_eq!(Coord::from_algebraic("a1"), Some(Coord::A1));
        assert_eq!(Coord::from_algebraic("h8"), Some(Coord::H8));
        assert_eq!(Coord::from_algebraic("e4").unwrap().to_algebraic(), "e4");
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("a9"), None);
        assert_eq!(Coord::from_algebraic("a0"), None);
        assert_eq!(Coord::from_algebraic("a"), None);
        assert_eq!(Coord::from_algebraic("a12"), None);
    }

    #[test]
    fn row_major_order() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coord::A1);
        assert_eq!(all[1], Coord::B1);
        assert_eq!(all[8], Coord::A2);
        assert_eq!(all[63], Coord::H8);
    }

    #[test]
    fn offset() {
        assert_eq!(Coord::E2.offset((2, 0)), Some(Coord::E4));
        assert_eq!(Coord::A1.offset((-1, 0)), None);
        assert_eq!(Coord::H8.offset((0, 1)), None);
        assert_eq!(Coord::C3 - Coord::A1, (2, 2));
    }
}
