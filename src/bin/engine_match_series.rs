//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use othello_engine::engines::engine_random::RandomEngine;
use othello_engine::engines::engine_trait::Engine;
use othello_engine::errors::OthelloError;
use othello_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), OthelloError> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // Swap in other engines here to compare them.
    let player1 = || Box::new(RandomEngine::with_seed(1)) as Box<dyn Engine>;
    let player2 = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 100,
            base_seed: 1234,
            per_game: MatchConfig { opening_plies: 6 },
            alternate_colors: true,
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
