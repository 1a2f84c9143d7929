//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any text
//! protocol in between. Series games may start from a seeded random opening.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::{debug, info, log, Level};
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_rules::PASS_TOKEN;
use crate::game_state::othello_types::{Color, Winner};
use crate::utils::algebraic::move_to_algebraic;
use crate::utils::random_position::random_playout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Random placements applied from the start before the engines take over.
    /// `EdaxEngine` cannot join such a game; run it with `0`.
    pub opening_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { opening_plies: 4 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub winner: Winner,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Plies played by the engines, forced passes included as `ps`.
    pub moves: Vec<String>,
    pub passes: u32,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub final_state: GameState,
    pub black_move_count: u32,
    pub white_move_count: u32,
    pub black_total_time_ns: u128,
    pub white_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    /// Swap colors every game; otherwise player 1 always plays Black.
    pub alternate_colors: bool,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            alternate_colors: true,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_discs: u32,
    pub player2_discs: u32,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_discs={} p2_discs={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_discs,
            self.player2_discs,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play one game from `start` until neither side can move.
///
/// An engine returning a pass or a square outside the legal set ends the
/// match with `InvalidMove`.
pub fn play_engine_match(
    mut engine_black: Box<dyn Engine>,
    mut engine_white: Box<dyn Engine>,
    start: GameState,
) -> OthelloResult<MatchResult> {
    engine_black.new_game();
    engine_white.new_game();

    let started_at = Utc::now();
    let clock = Instant::now();

    let mut state = start;
    let mut moves = Vec::<String>::new();
    let mut passes = 0u32;
    let mut black_move_count = 0u32;
    let mut white_move_count = 0u32;
    let mut black_total_time_ns = 0u128;
    let mut white_total_time_ns = 0u128;

    while let Some(mover) = state.mover() {
        let started = Instant::now();
        let mv = match mover {
            Color::Black => engine_black.choose_move(&state)?,
            Color::White => engine_white.choose_move(&state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let outcome = state.play(mv)?;
        moves.push(move_to_algebraic(mv)?);
        if outcome.forced_pass.is_some() {
            passes += 1;
            moves.push(PASS_TOKEN.to_owned());
        }
    }

    let (black_discs, white_discs) = state.score();
    let winner = state.winner().unwrap_or(Winner::Tie);
    debug!(
        "{} (Black) vs {} (White): {winner:?} {black_discs}-{white_discs} after {} plies",
        engine_black.name(),
        engine_white.name(),
        moves.len()
    );

    Ok(MatchResult {
        winner,
        black_discs,
        white_discs,
        moves,
        passes,
        started_at,
        elapsed: clock.elapsed(),
        final_state: state,
        black_move_count,
        white_move_count,
        black_total_time_ns,
        white_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Game `i` starts from a random opening seeded with `base_seed + i`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> OthelloResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let level = if config.verbose { Level::Info } else { Level::Debug };

    for i in 0..config.games {
        let player1_is_black = !config.alternate_colors || i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut rng = StdRng::seed_from_u64(seed);
        let start = random_playout(&mut rng, usize::from(config.per_game.opening_plies))?;

        log!(
            level,
            "[series] game {}/{} seed={} black={:?}",
            i + 1,
            config.games,
            seed,
            if player1_is_black { PlayerId::Player1 } else { PlayerId::Player2 }
        );

        let result = if player1_is_black {
            play_engine_match(player1_factory(), player2_factory(), start)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), start)?
        };

        let (p1_color, p1_discs, p2_discs, p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_black {
            (
                Color::Black,
                result.black_discs,
                result.white_discs,
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        } else {
            (
                Color::White,
                result.white_discs,
                result.black_discs,
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        };

        stats.player1_discs = stats.player1_discs.saturating_add(p1_discs);
        stats.player2_discs = stats.player2_discs.saturating_add(p2_discs);
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let outcome = match result.winner {
            Winner::Tie => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
            winner if winner == Winner::from(p1_color) => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player1,
                    color: p1_color,
                }
            }
            _ => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player2,
                    color: p1_color.opposite(),
                }
            }
        };
        stats.outcomes.push(outcome);

        log!(
            level,
            "[series] game {}/{} result={:?} score={}-{} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            outcome,
            result.black_discs,
            result.white_discs,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    info!("[series] {}", stats.report());
    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
