use serde::{Deserialize, Serialize};

use crate::coord::{Col, Coord, NUM_ROWS, Row};
use crate::force::Force;
use crate::grid::{Grid, Square};
use crate::piece::{PieceKind, PieceOnBoard};


// A structured move request. The board is not consulted when building one: `piece` and
// `capture` are what the mover *claims* stands on `from` and `to`, and the validator checks
// these claims against the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceOnBoard,
    pub capture: Option<PieceOnBoard>,
    pub promote_to: Option<PieceKind>,
}

impl Move {
    pub fn quiet(piece: PieceOnBoard, from: Coord, to: Coord) -> Self {
        Move { from, to, piece, capture: None, promote_to: None }
    }
    pub fn capturing(piece: PieceOnBoard, from: Coord, to: Coord, captured: PieceOnBoard) -> Self {
        Move { from, to, piece, capture: Some(captured), promote_to: None }
    }
    pub fn promoting_to(self, kind: PieceKind) -> Self {
        Move { promote_to: Some(kind), ..self }
    }
    pub fn force(&self) -> Force { self.piece.force }
    pub fn is_capture(&self) -> bool { self.capture.is_some() }
}


#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    pub fn empty() -> Self { Board { grid: Grid::new() } }
    pub fn starting_position() -> Self { Board { grid: starting_grid() } }

    pub fn initialize(&mut self) { self.grid = starting_grid(); }

    pub fn occupant(&self, pos: Coord) -> Square { self.grid[pos] }
    pub fn place(&mut self, pos: Coord, piece: PieceOnBoard) { self.grid[pos] = Some(piece); }
    pub fn clear(&mut self, pos: Coord) { self.grid[pos] = None; }
    pub fn population(&self) -> usize { self.grid.population() }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceOnBoard)> + '_ { self.grid.pieces() }

    pub fn find_king(&self, force: Force) -> Option<Coord> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.force == force)
            .map(|(pos, _)| pos)
    }

    // Moves the occupant of `mv.from` to `mv.to`, replacing whatever was there. Performs the
    // promotion if the move declares one. No legality checks: callers validate first.
    pub fn apply_move(&mut self, mv: &Move) {
        let mut piece = self.grid[mv.from].take();
        if let (Some(piece), Some(promote_to)) = (piece.as_mut(), mv.promote_to) {
            piece.kind = promote_to;
        }
        self.grid[mv.to] = piece;
    }

    // Temporarily relocates whatever stands on `from` to `to` (dropping the occupant of `to`),
    // runs `f` and then puts both squares back. Restoration also happens on unwind.
    pub fn with_relocation<R>(&mut self, from: Coord, to: Coord, f: impl FnOnce(&Board) -> R) -> R {
        let original = (self.grid[from], self.grid[to]);
        let piece = self.grid[from].take();
        self.grid[to] = piece;
        let board = scopeguard::guard(self, move |board| {
            board.grid[from] = original.0;
            board.grid[to] = original.1;
        });
        f(&**board)
    }
}

fn new_white(kind: PieceKind) -> PieceOnBoard { PieceOnBoard::new(Force::White, kind) }

fn setup_black_pieces_mirrorlike(grid: &mut Grid) {
    for (pos, piece) in grid.pieces().collect::<Vec<_>>() {
        if piece.force == Force::White {
            let mirror_row = Row::from_zero_based(NUM_ROWS - pos.row.to_zero_based() - 1);
            let mirror_pos = Coord::new(mirror_row, pos.col);
            assert!(grid[mirror_pos].is_none(), "{:?}", grid);
            grid[mirror_pos] = Some(PieceOnBoard { force: Force::Black, ..piece });
        }
    }
}

fn starting_grid() -> Grid {
    use PieceKind::*;
    let mut grid = Grid::new();
    let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
    for (col, kind) in Col::all().zip(back_rank) {
        grid[Coord::new(Row::from_zero_based(0), col)] = Some(new_white(kind));
        grid[Coord::new(Row::from_zero_based(1), col)] = Some(new_white(Pawn));
    }
    setup_black_pieces_mirrorlike(&mut grid);
    grid
}
