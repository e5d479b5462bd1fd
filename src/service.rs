// Request/reply front for a single game. A write runs one command and stores its reply, a
// read returns the last stored reply. Both take the same lock, so a reader never sees a
// half-applied move.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::command::{Command, Response, parse_command};
use crate::game::GameSession;


#[derive(Debug)]
pub struct ChessService {
    state: Mutex<ServiceState>,
}

#[derive(Debug)]
struct ServiceState {
    session: GameSession,
    rng: StdRng,
    // Nothing until the first write.
    pending: Option<Response>,
}

impl ChessService {
    // Without a seed the automatic side is seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        ChessService {
            state: Mutex::new(ServiceState {
                session: GameSession::new(),
                rng,
                pending: None,
            }),
        }
    }

    // Raw request, framing included (trailing newline).
    pub fn write(&self, raw: &str) {
        let mut state = self.lock();
        let response = match parse_command(raw) {
            Ok(command) => state.execute(command),
            Err(err) => {
                debug!("Rejected request {:?}: {}", raw, err);
                err.into()
            }
        };
        state.pending = Some(response);
    }

    pub fn read(&self) -> Option<Response> { self.lock().pending.clone() }

    // Runs an already parsed command. The reply is stored for `read` as well.
    pub fn execute(&self, command: Command) -> Response {
        let mut state = self.lock();
        let response = state.execute(command);
        state.pending = Some(response.clone());
        response
    }

    pub fn with_session<R>(&self, f: impl FnOnce(&GameSession) -> R) -> R { f(&self.lock().session) }

    // Every command leaves the session consistent before it can panic, so a poisoned lock
    // is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, ServiceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ServiceState {
    fn execute(&mut self, command: Command) -> Response {
        let response = match &command {
            Command::StartGame(human_force) => {
                self.session.start_game(*human_force);
                Response::Ok
            }
            Command::RequestState => match self.session.state() {
                Ok(board) => Response::Display(board.clone()),
                Err(err) => err.into(),
            },
            Command::HumanMove(notation) => match self.session.submit_human_move(notation) {
                Ok(outcome) => outcome.into(),
                Err(err) => err.into(),
            },
            Command::AutomaticMove => match self.session.automatic_move(&mut self.rng) {
                Ok(turn) => turn.outcome.into(),
                Err(err) => err.into(),
            },
            Command::Resign => match self.session.resign() {
                Ok(winner) => Response::Resigned { winner },
                Err(err) => err.into(),
            },
        };
        debug!("{:?} -> {}", command, response.token());
        response
    }
}
