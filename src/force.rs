use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    // Direction in which this force's pawns advance, in rows.
    pub fn forward(self) -> i8 {
        match self {
            Force::White => 1,
            Force::Black => -1,
        }
    }

    pub fn to_notation(self) -> char {
        match self {
            Force::White => 'W',
            Force::Black => 'B',
        }
    }

    pub fn from_notation(ch: char) -> Option<Self> {
        match ch {
            'W' => Some(Force::White),
            'B' => Some(Force::Black),
            _ => None,
        }
    }

    pub fn name_upper(self) -> &'static str {
        match self {
            Force::White => "WHITE",
            Force::Black => "BLACK",
        }
    }
}


#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn notation() {
        for force in Force::iter() {
            assert_eq!(Force::from_notation(force.to_notation()), Some(force));
            assert_eq!(force.opponent().opponent(), force);
            assert_eq!(force.forward(), -force.opponent().forward());
        }
        assert_eq!(Force::from_notation('w'), None);
    }
}
