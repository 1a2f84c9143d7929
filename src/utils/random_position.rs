//! Random position sources for tests, benches and offline analysis.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::errors::OthelloResult;
use crate::game_state::board_state::BitBoards;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::{Color, Square};
use crate::utils::obf_generator::generate_obf;

/// Arbitrary disc layout with `empties` empty squares and Black to move.
///
/// The layout is not necessarily reachable in play. `empties` above 64 is
/// treated as 64.
pub fn random_obf<R: Rng + ?Sized>(rng: &mut R, empties: u8) -> String {
    let discs = 64usize.saturating_sub(usize::from(empties));

    let mut squares: Vec<Square> = (0..64).collect();
    squares.shuffle(rng);

    let mut black = 0u64;
    let mut white = 0u64;
    for &square in &squares[..discs] {
        if rng.random_bool(0.5) {
            black |= 1u64 << square;
        } else {
            white |= 1u64 << square;
        }
    }

    generate_obf(BitBoards::new(black, white), Color::Black)
}

/// Reachable position after up to `plies` uniformly random placements from
/// the start. Stops early when the game ends.
pub fn random_playout<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> OthelloResult<GameState> {
    let mut game = GameState::new_game();
    for _ in 0..plies {
        let legal: Vec<Square> = game.legal_moves.iter().collect();
        let Some(&square) = legal.choose(rng) else {
            break;
        };
        game.play_square(square)?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::utils::obf_parser::parse_obf;

    #[test]
    fn random_obf_has_requested_empties() {
        let mut rng = StdRng::seed_from_u64(3);
        for empties in [0u8, 12, 30, 64, 90] {
            let obf = random_obf(&mut rng, empties);
            let parsed = parse_obf(&obf).expect("generated OBF should parse");
            let expected = 64 - u32::from(empties.min(64));
            assert_eq!(parsed.bits.occupied().count_ones(), expected);
            assert!(obf.ends_with(" X;"));
        }
    }

    #[test]
    fn playout_is_reproducible_for_a_seed() {
        let a = random_playout(&mut StdRng::seed_from_u64(17), 30).expect("playout");
        let b = random_playout(&mut StdRng::seed_from_u64(17), 30).expect("playout");
        assert_eq!(a.to_obf(), b.to_obf());
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn full_playout_reaches_a_terminal_state() {
        let mut rng = StdRng::seed_from_u64(8);
        let game = random_playout(&mut rng, 200).expect("playout");
        assert!(game.is_terminal());
        assert!(game.legal_moves.is_empty());
        let (black, white) = game.score();
        assert!(black + white <= 64);
    }
}
