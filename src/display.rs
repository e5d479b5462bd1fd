// Text rendering of the board: rank 1 on top, each row prefixed with its number, two-letter
// occupant codes and a file footer. Colors are up to the caller.

use crate::board::Board;
use crate::coord::{Col, Coord, Row};
use crate::force::Force;


pub const EMPTY_SQUARE: &str = "**";

// `paint` receives the occupant's force (None for an empty square) and its code.
pub fn render_board(board: &Board, paint: impl Fn(Option<Force>, &str) -> String) -> String {
    let mut out = String::new();
    for row in Row::all() {
        out.push_str(&format!("{} ", row.to_algebraic()));
        for col in Col::all() {
            let square = board.occupant(Coord::new(row, col));
            let code = square.map_or_else(|| EMPTY_SQUARE.to_owned(), |piece| piece.to_notation());
            out.push_str(&paint(square.map(|piece| piece.force), &code));
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  ");
    out.push_str(&Col::all().map(|col| col.to_algebraic().to_string()).collect::<Vec<_>>().join("  "));
    out.push('\n');
    out
}
