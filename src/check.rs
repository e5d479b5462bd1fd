// King safety. Built on top of the validator: a square is attacked iff an enemy piece has a
// legal capturing move onto it.

use crate::board::{Board, Move};
use crate::coord::Coord;
use crate::force::Force;
use crate::legality::{is_legal, move_from_board};


pub fn is_in_check(board: &Board, king_force: Force) -> bool {
    match board.find_king(king_force) {
        Some(king_pos) => is_attacked_by(board, king_pos, king_force.opponent()),
        None => false,
    }
}

pub fn is_attacked_by(board: &Board, pos: Coord, attacker: Force) -> bool {
    board.pieces().any(|(from, piece)| {
        piece.force == attacker
            && move_from_board(board, from, pos).is_some_and(|mv| is_legal(board, &mv))
    })
}

// Plays `mv` on the board without validating it, tests whether the king of the side opposite
// to `attacker` is safe, and reverts. The board is returned intact.
pub fn simulate_and_test(board: &mut Board, mv: &Move, attacker: Force) -> bool {
    board.with_relocation(mv.from, mv.to, |board| !is_in_check(board, attacker.opponent()))
}

pub fn keeps_king_safe(board: &mut Board, mv: &Move) -> bool {
    simulate_and_test(board, mv, mv.force().opponent())
}

// Moves that pass the validator, ignoring king safety. Sources in row-major order, and for
// each source destinations in row-major order.
pub fn pseudo_legal_moves(board: &Board, force: Force) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.force != force {
            continue;
        }
        for to in Coord::all() {
            if let Some(mv) = move_from_board(board, from, to) {
                if is_legal(board, &mv) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}

pub fn legal_moves(board: &mut Board, force: Force) -> Vec<Move> {
    pseudo_legal_moves(board, force)
        .into_iter()
        .filter(|mv| keeps_king_safe(board, mv))
        .collect()
}

// First move (in `pseudo_legal_moves` order) after which `force`'s king is not attacked.
pub fn find_escape(board: &mut Board, force: Force) -> Option<Move> {
    pseudo_legal_moves(board, force).into_iter().find(|mv| keeps_king_safe(board, mv))
}

// Whether `attacker` has mated the opposite side. Board is guaranteed to be returned intact.
pub fn is_in_checkmate(board: &mut Board, attacker: Force) -> bool {
    let defender = attacker.opponent();
    if !is_in_check(board, defender) {
        return false;
    }
    find_escape(board, defender).is_none()
}
