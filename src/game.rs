use enum_map::EnumMap;
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::check::{is_in_check, is_in_checkmate, simulate_and_test};
use crate::error::MoveError;
use crate::force::Force;
use crate::legality::check_move;
use crate::notation::{format_move, parse_move};
use crate::opponent::choose_move;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    Human,
    Automatic,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Checkmate { winner: Force },
    Resigned { winner: Force },
}

// How the position looks for the side that did *not* just move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Ongoing,
    Check,
    Checkmate { winner: Force },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AutomaticTurn {
    // None if the automatic side had no move at all. The turn passes anyway.
    pub mv: Option<Move>,
    pub outcome: MoveOutcome,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    sides: EnumMap<Force, Side>,
    status: SessionStatus,
    turn: Side,
    // Set when the human checks the automatic side, consumed by the next automatic move.
    automatic_in_check: bool,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            board: Board::starting_position(),
            sides: sides_for(Force::White),
            status: SessionStatus::NotStarted,
            turn: Side::Human,
            automatic_in_check: false,
        }
    }

    // Discards whatever game was going on and starts a new one from the initial position.
    pub fn start_game(&mut self, human_force: Force) {
        let sides = sides_for(human_force);
        self.start_from_position(human_force, Board::starting_position(), sides[Force::White]);
    }

    pub fn start_from_position(&mut self, human_force: Force, board: Board, to_move: Side) {
        info!("Starting a new game; human plays {:?}", human_force);
        *self = GameSession {
            board,
            sides: sides_for(human_force),
            status: SessionStatus::InProgress,
            turn: to_move,
            automatic_in_check: false,
        };
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn status(&self) -> SessionStatus { self.status }
    pub fn turn(&self) -> Side { self.turn }
    pub fn automatic_in_check(&self) -> bool { self.automatic_in_check }
    pub fn is_active(&self) -> bool { self.status == SessionStatus::InProgress }
    pub fn human_force(&self) -> Force { self.force_of(Side::Human) }
    pub fn automatic_force(&self) -> Force { self.force_of(Side::Automatic) }

    pub fn force_of(&self, side: Side) -> Force {
        if self.sides[Force::White] == side { Force::White } else { Force::Black }
    }

    pub fn state(&self) -> Result<&Board, MoveError> {
        if self.is_active() { Ok(&self.board) } else { Err(MoveError::NoActiveGame) }
    }

    // Turn errors take precedence over notation errors.
    pub fn submit_human_move(&mut self, notation: &str) -> Result<MoveOutcome, MoveError> {
        self.check_turn(Side::Human)?;
        let mv = parse_move(notation)?;
        self.play_human_move(mv)
    }

    pub fn try_human_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.check_turn(Side::Human)?;
        self.play_human_move(mv)
    }

    // Expects the turn to be checked by the caller.
    fn play_human_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let human = self.human_force();
        if mv.force() != human {
            return Err(MoveError::WrongMoverColor);
        }
        check_move(&self.board, &mv)?;
        if !simulate_and_test(&mut self.board, &mv, human.opponent()) {
            return Err(MoveError::SelfCheckViolation);
        }
        debug!("Human plays {}", format_move(&mv));
        self.board.apply_move(&mv);
        let outcome = self.classify(human);
        if outcome == MoveOutcome::Check {
            self.automatic_in_check = true;
        }
        self.turn = Side::Automatic;
        Ok(outcome)
    }

    pub fn automatic_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AutomaticTurn, MoveError> {
        self.check_turn(Side::Automatic)?;
        let automatic = self.automatic_force();
        let in_check = std::mem::take(&mut self.automatic_in_check);
        let mv = choose_move(&mut self.board, automatic, in_check, rng);
        match &mv {
            Some(mv) => {
                debug!("Automatic side plays {}", format_move(mv));
                self.board.apply_move(mv);
            }
            None => warn!("Automatic side ({:?}) has no legal move; passing", automatic),
        }
        let outcome = self.classify(automatic);
        self.turn = Side::Human;
        Ok(AutomaticTurn { mv, outcome })
    }

    // Returns the winner.
    pub fn resign(&mut self) -> Result<Force, MoveError> {
        self.check_turn(Side::Human)?;
        if is_in_check(&self.board, Force::White) || is_in_check(&self.board, Force::Black) {
            info!("Resigning while in a check position");
        }
        let winner = self.automatic_force();
        info!("Human resigned; {:?} wins", winner);
        self.status = SessionStatus::Resigned { winner };
        Ok(winner)
    }

    fn check_turn(&self, side: Side) -> Result<(), MoveError> {
        if !self.is_active() {
            return Err(MoveError::NoActiveGame);
        }
        if self.turn != side {
            return Err(MoveError::OutOfTurn);
        }
        Ok(())
    }

    fn classify(&mut self, mover: Force) -> MoveOutcome {
        if is_in_checkmate(&mut self.board, mover) {
            info!("Checkmate; {:?} wins", mover);
            self.status = SessionStatus::Checkmate { winner: mover };
            MoveOutcome::Checkmate { winner: mover }
        } else if is_in_check(&self.board, mover.opponent()) {
            MoveOutcome::Check
        } else {
            MoveOutcome::Ongoing
        }
    }
}

fn sides_for(human_force: Force) -> EnumMap<Force, Side> {
    EnumMap::from_fn(|force| if force == human_force { Side::Human } else { Side::Automatic })
}
