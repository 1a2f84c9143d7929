//! Player abstraction shared by the match harness and the text protocol.
//!
//! An engine is only asked for a move when the side to move has at least one
//! legal destination, so implementations return a `Move::Place` from
//! `GameState::legal_moves`.

use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::Move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> OthelloResult<Move>;
}
