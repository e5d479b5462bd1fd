// Move legality modulo king safety. Everything here is a pure function of the board: nothing
// is moved or promoted, so it is safe to use from attack probes in the middle of a scan.
// King safety lives in `check.rs`.

use crate::board::{Board, Move};
use crate::coord::{Coord, SubjectiveRow};
use crate::error::MoveError;
use crate::force::Force;
use crate::piece::PieceKind;
use crate::util::sort_two;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ProtoReachability {
    Ok,
    OkIfCapturing,
    OkIfNonCapturing,
    Blocked,
    Impossible,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Reachability {
    Ok,
    Blocked,
    Impossible,
}

pub fn is_legal(board: &Board, mv: &Move) -> bool { check_move(board, mv).is_ok() }

// Checks, in order: destination occupancy, the claimed mover, piece geometry, path, promotion.
pub fn check_move(board: &Board, mv: &Move) -> Result<(), MoveError> {
    if mv.from == mv.to {
        return Err(MoveError::IllegalGeometry);
    }
    match mv.capture {
        None => {
            if board.occupant(mv.to).is_some() {
                return Err(MoveError::IllegalCapture);
            }
        }
        Some(captured) => {
            if captured.force == mv.force() || board.occupant(mv.to) != Some(captured) {
                return Err(MoveError::IllegalCapture);
            }
        }
    }
    if board.occupant(mv.from) != Some(mv.piece) {
        return Err(MoveError::PieceMissing);
    }
    match reachability(board, mv, mv.is_capture()) {
        Reachability::Ok => {}
        Reachability::Blocked => return Err(MoveError::PathBlocked),
        Reachability::Impossible => return Err(MoveError::IllegalGeometry),
    }
    check_promotion(mv)
}

pub fn should_promote(force: Force, piece_kind: PieceKind, to: Coord) -> bool {
    let last_row = SubjectiveRow::from_one_based(8).to_row(force);
    piece_kind == PieceKind::Pawn && to.row == last_row
}

// Builds the move that would take whatever stands on `from` to `to`: a capture if `to` is
// occupied, a quiet move otherwise. Pawns reaching the last row promote to a queen.
// Only the variant matching the destination's occupancy can ever be legal, so this is the
// single candidate worth testing for a (from, to) pair.
pub fn move_from_board(board: &Board, from: Coord, to: Coord) -> Option<Move> {
    let piece = board.occupant(from)?;
    let mv = match board.occupant(to) {
        Some(target) => Move::capturing(piece, from, to, target),
        None => Move::quiet(piece, from, to),
    };
    if should_promote(piece.force, piece.kind, to) {
        Some(mv.promoting_to(PieceKind::Queen))
    } else {
        Some(mv)
    }
}

fn check_promotion(mv: &Move) -> Result<(), MoveError> {
    match (should_promote(mv.force(), mv.piece.kind, mv.to), mv.promote_to) {
        (true, Some(promote_to)) if promote_to.can_promote_to() => Ok(()),
        (false, None) => Ok(()),
        _ => Err(MoveError::InvalidPromotion),
    }
}

fn reachability(board: &Board, mv: &Move, capturing: bool) -> Reachability {
    use ProtoReachability::*;
    match proto_reachability(board, mv) {
        Ok => Reachability::Ok,
        OkIfCapturing => if capturing { Reachability::Ok } else { Reachability::Impossible },
        OkIfNonCapturing => if !capturing { Reachability::Ok } else { Reachability::Impossible },
        Blocked => Reachability::Blocked,
        Impossible => Reachability::Impossible,
    }
}

// Tests that the piece can move in such a way and that the path is free.
// Does not look at the destination square: that's the caller's job.
fn proto_reachability(board: &Board, mv: &Move) -> ProtoReachability {
    use ProtoReachability::*;
    let (from, to) = (mv.from, mv.to);
    let force = mv.force();
    let (d_row, d_col) = to - from;
    let is_straight_move = d_row == 0 || d_col == 0;
    let is_diagonal_move = d_row.abs() == d_col.abs();
    // Tests that squares between `from` (exclusive) and `to` (exclusive) are free.
    let has_linear_passage = || {
        assert!(is_straight_move || is_diagonal_move);
        let direction = (d_row.signum(), d_col.signum());
        let mut pos = from + direction;
        while pos != to {
            if board.occupant(pos).is_some() {
                return false;
            }
            pos = pos + direction;
        }
        true
    };
    let simple_linear_passage = || if has_linear_passage() { Ok } else { Blocked };

    match mv.piece.kind {
        PieceKind::Pawn => {
            let dir_forward = force.forward();
            let second_row = SubjectiveRow::from_one_based(2).to_row(force);
            let valid_capturing_move = d_col.abs() == 1 && d_row == dir_forward;
            let valid_non_capturing_move = d_col == 0
                && (d_row == dir_forward || (from.row == second_row && d_row == dir_forward * 2));
            match (valid_capturing_move, valid_non_capturing_move) {
                (true, true) => unreachable!("a pawn move cannot be both capturing and non-capturing"),
                (true, false) => OkIfCapturing,
                (false, true) => if has_linear_passage() { OkIfNonCapturing } else { Blocked },
                (false, false) => Impossible,
            }
        }
        PieceKind::Knight => {
            if sort_two((d_row.abs(), d_col.abs())) == (1, 2) { Ok } else { Impossible }
        }
        PieceKind::Bishop => {
            if is_diagonal_move { simple_linear_passage() } else { Impossible }
        }
        PieceKind::Rook => {
            if is_straight_move { simple_linear_passage() } else { Impossible }
        }
        PieceKind::Queen => {
            if is_straight_move || is_diagonal_move { simple_linear_passage() } else { Impossible }
        }
        PieceKind::King => {
            if d_row.abs() <= 1 && d_col.abs() <= 1 { Ok } else { Impossible }
        }
    }
}
