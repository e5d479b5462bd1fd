// Framing and parsing for the textual request channel, and the replies sent back.
//
// A request is a single write of at most `MAX_COMMAND_LEN` bytes ending with a newline:
//   00 W       start a new game, human plays White
//   00 B       start a new game, human plays Black
//   01         show the board
//   02 <move>  human move, see `notation.rs`
//   03         let the automatic side move
//   04         resign

use std::fmt;

use crate::board::Board;
use crate::display::render_board;
use crate::error::{CommandError, MoveError};
use crate::force::Force;
use crate::game::MoveOutcome;


pub const MAX_COMMAND_LEN: usize = 20;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    StartGame(Force),
    RequestState,
    HumanMove(String),
    AutomaticMove,
    Resign,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Response {
    Ok,
    Check,
    Mate { winner: Force },
    Resigned { winner: Force },
    NoGame,
    OutOfTurn,
    IllegalMove,
    InvalidFormat,
    UnknownCommand,
    Display(Board),
}

pub fn parse_command(raw: &str) -> Result<Command, CommandError> {
    if raw.len() > MAX_COMMAND_LEN {
        return Err(CommandError::UnknownCommand);
    }
    let command = raw.strip_suffix('\n').ok_or(CommandError::UnknownCommand)?;
    let exact = |rest: &str, command: Command| {
        if rest.is_empty() { Ok(command) } else { Err(CommandError::InvalidCommandFormat) }
    };
    if let Some(rest) = command.strip_prefix("00 W") {
        exact(rest, Command::StartGame(Force::White))
    } else if let Some(rest) = command.strip_prefix("00 B") {
        exact(rest, Command::StartGame(Force::Black))
    } else if let Some(rest) = command.strip_prefix("01") {
        exact(rest, Command::RequestState)
    } else if let Some(rest) = command.strip_prefix("02 ") {
        Ok(Command::HumanMove(rest.to_owned()))
    } else if let Some(rest) = command.strip_prefix("03") {
        exact(rest, Command::AutomaticMove)
    } else if let Some(rest) = command.strip_prefix("04") {
        exact(rest, Command::Resign)
    } else {
        Err(CommandError::UnknownCommand)
    }
}

impl Response {
    pub fn token(&self) -> &'static str {
        match self {
            Response::Ok | Response::Resigned { .. } => "OK",
            Response::Check => "CHECK",
            Response::Mate { .. } => "MATE",
            Response::NoGame => "NOGAME",
            Response::OutOfTurn => "OOT",
            Response::IllegalMove => "ILLMOVE",
            Response::InvalidFormat => "INVFMT",
            Response::UnknownCommand => "UNKCMD",
            Response::Display(_) => "DISPLAY",
        }
    }

    pub fn winner(&self) -> Option<Force> {
        match self {
            Response::Mate { winner } | Response::Resigned { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl From<MoveOutcome> for Response {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Ongoing => Response::Ok,
            MoveOutcome::Check => Response::Check,
            MoveOutcome::Checkmate { winner } => Response::Mate { winner },
        }
    }
}

impl From<MoveError> for Response {
    fn from(err: MoveError) -> Self {
        use MoveError::*;
        match err {
            NoActiveGame => Response::NoGame,
            OutOfTurn => Response::OutOfTurn,
            WrongMoverColor | MalformedMove | PieceMissing | IllegalGeometry | PathBlocked
            | IllegalCapture | InvalidPromotion | SelfCheckViolation => Response::IllegalMove,
        }
    }
}

impl From<CommandError> for Response {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::UnknownCommand => Response::UnknownCommand,
            CommandError::InvalidCommandFormat => Response::InvalidFormat,
        }
    }
}

// Wire text. The board is rendered without colors; terminals can use `render_board` directly.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Display(board) => f.write_str(&render_board(board, |_, code| code.to_owned())),
            _ => {
                writeln!(f, "{}", self.token())?;
                if let Some(winner) = self.winner() {
                    writeln!(f, "{} WINS", winner.name_upper())?;
                }
                Ok(())
            }
        }
    }
}
