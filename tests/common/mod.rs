// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use cpu_chess::board::Board;
use cpu_chess::check::keeps_king_safe;
use cpu_chess::coord::{Col, Coord, Row};
use cpu_chess::error::MoveError;
use cpu_chess::force::Force;
use cpu_chess::legality::check_move;
use cpu_chess::notation::parse_move;
use cpu_chess::piece::{PieceKind, PieceOnBoard, piece_from_ascii};
use cpu_chess::util::as_single_char;
use itertools::Itertools;


#[derive(Clone, Copy, Debug)]
pub struct PieceMatcher {
    pub kind: PieceKind,
    pub force: Force,
}

pub trait PieceIs {
    fn is(self, matcher: PieceMatcher) -> bool;
}

impl PieceIs for Option<PieceOnBoard> {
    fn is(self, matcher: PieceMatcher) -> bool {
        if let Some(piece) = self {
            piece.kind == matcher.kind && piece.force == matcher.force
        } else {
            false
        }
    }
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        common::PieceMatcher {
            force: cpu_chess::force::Force::$force,
            kind: cpu_chess::piece::PieceKind::$kind,
        }
    };
}

// Board as a picture: rank 8 on top, one FEN letter or '.' per square, separated by spaces.
#[allow(dead_code)]
pub fn parse_board(board_str: &str) -> Result<Board, String> {
    let rows = board_str
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split_ascii_whitespace().collect_vec())
        .collect_vec();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|row| row.len() == 8));
    let mut board = Board::empty();
    for (row_idx, row) in rows.iter().rev().enumerate() {
        for (col_idx, piece_str) in row.iter().enumerate() {
            let piece_char =
                as_single_char(piece_str).ok_or_else(|| format!("Invalid piece: {}", piece_str))?;
            if piece_char == '.' {
                continue;
            }
            let piece = piece_from_ascii(piece_char)
                .ok_or_else(|| format!("Invalid piece: {}", piece_char))?;
            let coord =
                Coord::new(Row::from_zero_based(row_idx as u8), Col::from_zero_based(col_idx as u8));
            board.place(coord, piece);
        }
    }
    Ok(board)
}

// Plays a whitespace-separated list of moves in wire notation with full legality checks,
// ignoring whose turn it is. Stops at the first rejected move.
#[allow(dead_code)]
pub fn replay(board: &mut Board, moves: &str) -> Result<(), MoveError> {
    for notation in moves.split_whitespace() {
        let mv = parse_move(notation)?;
        check_move(board, &mv)?;
        if !keeps_king_safe(board, &mv) {
            return Err(MoveError::SelfCheckViolation);
        }
        board.apply_move(&mv);
    }
    Ok(())
}
