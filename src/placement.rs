// The piece-placement field of FEN, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".
// Rank 8 comes first. Only the board is described: no side to move, no castling.

use itertools::Itertools;

use crate::board::Board;
use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::piece::{piece_from_ascii, piece_to_ascii};


pub fn board_to_placement(board: &Board) -> String {
    Row::all()
        .rev()
        .map(|row| {
            let mut s = String::new();
            let mut empty_squares = 0;
            for col in Col::all() {
                match board.occupant(Coord::new(row, col)) {
                    Some(piece) => {
                        if empty_squares > 0 {
                            s.push_str(&empty_squares.to_string());
                            empty_squares = 0;
                        }
                        s.push(piece_to_ascii(piece));
                    }
                    None => empty_squares += 1,
                }
            }
            if empty_squares > 0 {
                s.push_str(&empty_squares.to_string());
            }
            s
        })
        .join("/")
}

pub fn placement_to_board(placement: &str) -> Result<Board, String> {
    let rows = placement.split('/').collect_vec();
    if rows.len() != NUM_ROWS as usize {
        return Err(format!("expected {} rows, found {}", NUM_ROWS, rows.len()));
    }
    let mut board = Board::empty();
    for (&row_notation, row) in rows.iter().zip(Row::all().rev()) {
        let mut col_idx: u32 = 0;
        for ch in row_notation.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col_idx += skip;
            } else {
                let piece = piece_from_ascii(ch).ok_or_else(|| format!("invalid piece: {}", ch))?;
                if col_idx >= NUM_COLS as u32 {
                    return Err(format!("row too long: {}", row_notation));
                }
                board.place(Coord::new(row, Col::from_zero_based(col_idx as u8)), piece);
                col_idx += 1;
            }
        }
        if col_idx != NUM_COLS as u32 {
            return Err(format!("row {} has {} squares: {}", row.to_algebraic(), col_idx, row_notation));
        }
    }
    Ok(board)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Force;
    use crate::piece::{PieceKind, PieceOnBoard};
    use pretty_assertions::assert_eq;

    const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn starting_position() {
        assert_eq!(board_to_placement(&Board::starting_position()), STARTING_PLACEMENT);
        assert_eq!(placement_to_board(STARTING_PLACEMENT).unwrap(), Board::starting_position());
    }

    #[test]
    fn sparse_board() {
        let board = placement_to_board("4k3/8/8/8/3Q4/8/8/4K3").unwrap();
        assert_eq!(board.population(), 3);
        assert_eq!(board.occupant(Coord::D4), Some(PieceOnBoard::new(Force::White, PieceKind::Queen)));
        assert_eq!(board.occupant(Coord::E8), Some(PieceOnBoard::new(Force::Black, PieceKind::King)));
        assert_eq!(board_to_placement(&board), "4k3/8/8/8/3Q4/8/8/4K3");
    }

    #[test]
    fn invalid() {
        assert!(placement_to_board("8/8/8/8/8/8/8").is_err());
        assert!(placement_to_board("8/8/8/8/8/8/8/7").is_err());
        assert!(placement_to_board("8/8/8/8/8/8/8/9").is_err());
        assert!(placement_to_board("8/8/8/8/8/8/8/ppppppppp").is_err());
        assert!(placement_to_board("8/8/8/8/8/8/8/7x").is_err());
    }
}
