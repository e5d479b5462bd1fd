// Test utilities shared by unit tests and the integration tests in "tests".

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::force::Force;
use crate::game::{GameSession, Side};
use crate::placement::placement_to_board;


// The automatic side picks quiet moves at random; fix the seed so that tests are reproducible.
pub fn deterministic_rng() -> StdRng { StdRng::from_seed([0; 32]) }

#[track_caller]
pub fn board_from_placement(placement: &str) -> Board {
    placement_to_board(placement).unwrap_or_else(|err| panic!("bad placement {placement:?}: {err}"))
}

// A session in progress from an arbitrary position.
#[track_caller]
pub fn session_from_placement(human_force: Force, placement: &str, to_move: Side) -> GameSession {
    let mut session = GameSession::new();
    session.start_from_position(human_force, board_from_placement(placement), to_move);
    session
}
