// The automatic side: a fixed greedy policy with no evaluation and no lookahead.
//
// Priorities:
//   1. If in check, the first move (row-major source, then row-major destination) that
//      gets out of check.
//   2. The first capture found scanning targets in row-major order, then attackers in
//      row-major order. All targets are equal: a pawn is as good as a queen.
//   3. A uniformly random quiet move.
// Moves that would leave the automatic king attacked are never considered.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::board::{Board, Move};
use crate::check::{find_escape, keeps_king_safe};
use crate::coord::Coord;
use crate::force::Force;
use crate::legality::{is_legal, move_from_board};


pub fn choose_move<R: Rng + ?Sized>(
    board: &mut Board, automatic: Force, in_check: bool, rng: &mut R,
) -> Option<Move> {
    if in_check {
        if let Some(mv) = find_escape(board, automatic) {
            debug!("Escaping check with {:?}", mv);
            return Some(mv);
        }
    }
    if let Some(mv) = first_capture(board, automatic) {
        debug!("Taking the first capture: {:?}", mv);
        return Some(mv);
    }
    let candidates = quiet_moves(board, automatic);
    let mv = candidates.choose(rng).copied();
    debug!("Picked {:?} out of {} quiet moves", mv, candidates.len());
    mv
}

fn squares_of(board: &Board, force: Force) -> Vec<Coord> {
    board.pieces().filter(|(_, piece)| piece.force == force).map(|(pos, _)| pos).collect()
}

fn is_playable(board: &mut Board, mv: &Move) -> bool {
    is_legal(board, mv) && keeps_king_safe(board, mv)
}

fn first_capture(board: &mut Board, automatic: Force) -> Option<Move> {
    let sources = squares_of(board, automatic);
    for to in squares_of(board, automatic.opponent()) {
        for &from in &sources {
            if let Some(mv) = move_from_board(board, from, to) {
                if is_playable(board, &mv) {
                    return Some(mv);
                }
            }
        }
    }
    None
}

// Destination-major: empty destinations in row-major order, and for each of them sources in
// row-major order.
pub fn quiet_moves(board: &mut Board, automatic: Force) -> Vec<Move> {
    let sources = squares_of(board, automatic);
    let mut moves = Vec::new();
    for to in Coord::all() {
        if board.occupant(to).is_some() {
            continue;
        }
        for &from in &sources {
            if let Some(mv) = move_from_board(board, from, to) {
                if is_playable(board, &mv) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceKind, PieceOnBoard};
    use crate::test_util::{board_from_placement, deterministic_rng};

    fn white(kind: PieceKind) -> PieceOnBoard { PieceOnBoard::new(Force::White, kind) }
    fn black(kind: PieceKind) -> PieceOnBoard { PieceOnBoard::new(Force::Black, kind) }

    #[test]
    fn first_capture_in_row_major_target_order() {
        let mut board = Board::empty();
        board.place(Coord::A1, white(PieceKind::King));
        board.place(Coord::H8, black(PieceKind::King));
        board.place(Coord::D4, black(PieceKind::Queen));
        // Two targets: a pawn on c3 (scanned first) and a knight on e5.
        board.place(Coord::C3, white(PieceKind::Pawn));
        board.place(Coord::E5, white(PieceKind::Knight));
        let mv = choose_move(&mut board, Force::Black, false, &mut deterministic_rng()).unwrap();
        assert_eq!(mv.from, Coord::D4);
        assert_eq!(mv.to, Coord::C3);
        assert_eq!(mv.capture, Some(white(PieceKind::Pawn)));
    }

    #[test]
    fn quiet_moves_are_destination_major() {
        let mut board = Board::empty();
        board.place(Coord::A1, white(PieceKind::King));
        board.place(Coord::H8, black(PieceKind::King));
        let moves = quiet_moves(&mut board, Force::White);
        let destinations: Vec<_> = moves.iter().map(|mv| mv.to).collect();
        assert_eq!(destinations, vec![Coord::B1, Coord::A2, Coord::B2]);
    }

    #[test]
    fn no_moves_means_none() {
        // Stalemate: the black king has nowhere to go and is not in check.
        let mut board = Board::empty();
        board.place(Coord::A8, black(PieceKind::King));
        board.place(Coord::B6, white(PieceKind::Queen));
        board.place(Coord::H1, white(PieceKind::King));
        assert_eq!(choose_move(&mut board, Force::Black, false, &mut deterministic_rng()), None);
    }

    #[test]
    fn pinned_piece_capture_is_skipped() {
        // The knight on d7 could take b6, but it shields the king from the rook on d1.
        let mut board = board_from_placement("3k4/3n4/1P6/8/8/8/8/3RK3");
        let pinned_capture =
            Move::capturing(black(PieceKind::Knight), Coord::D7, Coord::B6, white(PieceKind::Pawn));
        assert!(is_legal(&board, &pinned_capture));
        let mv = choose_move(&mut board, Force::Black, false, &mut deterministic_rng()).unwrap();
        assert_ne!(mv, pinned_capture);
        assert_eq!(mv.capture, None);
        assert_eq!(mv.piece, black(PieceKind::King));
    }
}
