//! Uniform random player.
//!
//! Used for diagnostics, match-harness tests and as the built-in reply engine
//! of the text protocol.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::{Move, Square};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine for tests and seeded series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> OthelloResult<Move> {
        if game_state.is_terminal() {
            return Err(OthelloError::GameOver);
        }

        let legal: Vec<Square> = game_state.legal_moves.iter().collect();
        let picked = legal.as_slice().choose(&mut self.rng).ok_or_else(|| {
            OthelloError::EngineProtocol("random engine asked to move without a legal destination".to_owned())
        })?;

        Ok(Move::Place(*picked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_returns_a_legal_destination() {
        let mut engine = RandomEngine::with_seed(5);
        let mut game = GameState::new_game();
        for _ in 0..20 {
            if game.is_terminal() {
                break;
            }
            let mv = engine.choose_move(&game).expect("engine should move");
            let Move::Place(square) = mv else {
                panic!("random engine should never pass");
            };
            assert!(game.legal_moves.contains(square));
            game.play(mv).expect("chosen move should be playable");
        }
    }

    #[test]
    fn same_seed_gives_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::with_seed(99);
        let mut b = RandomEngine::with_seed(99);
        for _ in 0..8 {
            assert_eq!(
                a.choose_move(&game).expect("move"),
                b.choose_move(&game).expect("move")
            );
        }
    }

    #[test]
    fn terminal_game_is_rejected() {
        let game = GameState::from_obf(&format!("{} X;", "X".repeat(64))).expect("full board");
        assert!(game.is_terminal());
        assert_eq!(
            RandomEngine::with_seed(1).choose_move(&game),
            Err(OthelloError::GameOver)
        );
    }
}
