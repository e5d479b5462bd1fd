use std::{fmt, ops};

use ndarray::{Array, Array2};
use serde::{Deserialize, Serialize};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::piece::PieceOnBoard;


// Contents of a single square.
pub type Square = Option<PieceOnBoard>;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    data: Array2<Square>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn population(&self) -> usize { self.data.iter().filter(|sq| sq.is_some()).count() }

    // Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceOnBoard)> + '_ {
        Coord::all().filter_map(|pos| self[pos].map(|piece| (pos, piece)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Square;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output { &mut self.data[coord_to_index(pos)] }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(pos, piece)| (pos.to_algebraic(), piece.to_notation())))
            .finish()
    }
}

