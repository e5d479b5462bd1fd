#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod check;
pub mod command;
pub mod coord;
pub mod display;
pub mod error;
pub mod force;
pub mod game;
pub mod grid;
pub mod legality;
pub mod notation;
pub mod opponent;
pub mod piece;
pub mod placement;
pub mod service;
pub mod test_util;
pub mod util;

pub use board::{Board, Move};
pub use command::{Command, Response};
pub use coord::Coord;
pub use error::{CommandError, MoveError};
pub use force::Force;
pub use game::{GameSession, MoveOutcome, SessionStatus, Side};
pub use piece::{PieceKind, PieceOnBoard};
pub use service::ChessService;
