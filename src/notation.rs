// Wire notation for moves:
//
//   <force><piece><from>-<to>[x<force><piece>][y[<force>]<piece>]
//
// e.g. "WPe2-e4", "BNb8-c6xWP", "WPa7-a8yQ", "BPb2-a1xWNyQ". The long promotion form
// ("WPa7-a8yWQ") is accepted as well; its force must match the mover.
//
// Parsing does not look at the board: whether the claims are true is up to the validator.

use lazy_static::lazy_static;
use regex_lite::{Captures, Regex};

use crate::board::Move;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::force::Force;
use crate::piece::{PieceKind, PieceOnBoard};
use crate::util::as_single_char;


const FORCE_RE: &str = "[WB]";
const PIECE_RE: &str = "[PNBRQK]";
const COORD_RE: &str = "[a-h][1-8]";

lazy_static! {
    static ref MOVE_RE: Regex = Regex::new(&format!(
        r"^({force})({piece})({coord})-({coord})(?:x({force})({piece}))?(?:y({force})?({piece}))?$",
        force = FORCE_RE,
        piece = PIECE_RE,
        coord = COORD_RE,
    ))
    .unwrap();
}

pub fn parse_move(notation: &str) -> Result<Move, MoveError> {
    let cap = MOVE_RE.captures(notation).ok_or(MoveError::MalformedMove)?;
    let force = capture_force(&cap, 1).ok_or(MoveError::MalformedMove)?;
    let kind = capture_piece_kind(&cap, 2).ok_or(MoveError::MalformedMove)?;
    let from = capture_coord(&cap, 3).ok_or(MoveError::MalformedMove)?;
    let to = capture_coord(&cap, 4).ok_or(MoveError::MalformedMove)?;
    let piece = PieceOnBoard::new(force, kind);
    let mut mv = Move::quiet(piece, from, to);
    if let (Some(captured_force), Some(captured_kind)) =
        (capture_force(&cap, 5), capture_piece_kind(&cap, 6))
    {
        mv.capture = Some(PieceOnBoard::new(captured_force, captured_kind));
    }
    if let Some(promote_to) = capture_piece_kind(&cap, 8) {
        if capture_force(&cap, 7).is_some_and(|promotion_force| promotion_force != force) {
            return Err(MoveError::InvalidPromotion);
        }
        mv.promote_to = Some(promote_to);
    }
    Ok(mv)
}

pub fn format_move(mv: &Move) -> String {
    let mut s = format!("{}{}-{}", mv.piece.to_notation(), mv.from, mv.to);
    if let Some(captured) = mv.capture {
        s.push('x');
        s.push_str(&captured.to_notation());
    }
    if let Some(promote_to) = mv.promote_to {
        s.push('y');
        s.push(promote_to.to_notation());
    }
    s
}

fn capture_char(cap: &Captures, idx: usize) -> Option<char> {
    cap.get(idx).and_then(|m| as_single_char(m.as_str()))
}

fn capture_force(cap: &Captures, idx: usize) -> Option<Force> {
    capture_char(cap, idx).and_then(Force::from_notation)
}

fn capture_piece_kind(cap: &Captures, idx: usize) -> Option<PieceKind> {
    capture_char(cap, idx).and_then(PieceKind::from_notation)
}

fn capture_coord(cap: &Captures, idx: usize) -> Option<Coord> {
    cap.get(idx).and_then(|m| Coord::from_algebraic(m.as_str()))
}
