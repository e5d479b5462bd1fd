use std::fmt;


// Reasons a move request can be rejected. None of these are fatal: the session is left
// exactly as it was and the same side remains to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    NoActiveGame,
    OutOfTurn,
    WrongMoverColor,
    MalformedMove,
    PieceMissing,
    IllegalGeometry,
    PathBlocked,
    IllegalCapture,
    InvalidPromotion,
    SelfCheckViolation,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandError {
    UnknownCommand,
    InvalidCommandFormat,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            MoveError::NoActiveGame => "no game is in progress",
            MoveError::OutOfTurn => "it is not your turn",
            MoveError::WrongMoverColor => "you can only move your own pieces",
            MoveError::MalformedMove => "move notation cannot be parsed",
            MoveError::PieceMissing => "the declared piece is not on the source square",
            MoveError::IllegalGeometry => "the piece cannot move like that",
            MoveError::PathBlocked => "the path is blocked",
            MoveError::IllegalCapture => "destination square does not match the capture",
            MoveError::InvalidPromotion => "bad promotion",
            MoveError::SelfCheckViolation => "the move leaves your king in check",
        };
        f.write_str(message)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand => f.write_str("unknown command"),
            CommandError::InvalidCommandFormat => f.write_str("invalid command format"),
        }
    }
}

impl std::error::Error for MoveError {}
impl std::error::Error for CommandError {}
