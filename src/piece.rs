use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct PieceOnBoard {
    pub force: Force,
    pub kind: PieceKind,
}

impl PieceKind {
    pub fn to_notation(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_notation(ch: char) -> Option<Self> {
        match ch {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn can_promote_to(self) -> bool {
        use PieceKind::*;
        match self {
            Pawn | King => false,
            Knight | Bishop | Rook | Queen => true,
        }
    }
}

impl PieceOnBoard {
    // Two-letter code, e.g. "WP" or "BK".
    pub fn to_notation(self) -> String {
        format!("{}{}", self.force.to_notation(), self.kind.to_notation())
    }
}

// FEN-style letter: uppercase for White, lowercase for Black.
pub fn piece_to_ascii(piece: PieceOnBoard) -> char {
    let ch = piece.kind.to_notation();
    match piece.force {
        Force::White => ch,
        Force::Black => ch.to_ascii_lowercase(),
    }
}

pub fn piece_from_ascii(ch: char) -> Option<PieceOnBoard> {
    let kind = PieceKind::from_notation(ch.to_ascii_uppercase())?;
    let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
    Some(PieceOnBoard::new(force, kind))
}
