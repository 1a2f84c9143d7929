//! Line-oriented text protocol front-end.
//!
//! Speaks the subset of the Edax console protocol that `EdaxSession` needs:
//! bare coordinate tokens in, `"<label> plays <coord>"` lines out. A few
//! inspection commands (`obf`, `board`, `moves`, `score`) make the loop usable
//! by hand. Errors are reported as `error: <message>` and never end the loop.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::game_state::GameState;
use crate::game_state::othello_rules::{DEFAULT_ENGINE_LABEL, PASS_TOKEN};
use crate::game_state::othello_types::{Color, Move, Winner};
use crate::utils::algebraic::{algebraic_to_move, move_to_algebraic, square_to_algebraic};
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut protocol = ProtocolState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = protocol.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ProtocolState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    label: String,
    autoplay: bool,
    engine_side: Option<Color>,
    /// Forced passes of the client side not yet acknowledged with `ps`.
    unacknowledged_passes: usize,
}

impl Default for ProtocolState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolState {
    pub fn new() -> Self {
        Self::with_engine(Box::new(RandomEngine::new()), DEFAULT_ENGINE_LABEL)
    }

    pub fn with_engine(engine: Box<dyn Engine>, label: &str) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine,
            label: label.to_owned(),
            autoplay: true,
            engine_side: None,
            unacknowledged_passes: 0,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "new" => {
                self.reset(GameState::new_game());
            }
            "setboard" => {
                let obf = trimmed[cmd.len()..].trim();
                match GameState::from_obf(obf) {
                    Ok(game_state) => self.reset(game_state),
                    Err(err) => self.report(out, &err)?,
                }
            }
            "obf" => {
                writeln!(out, "{}", self.game_state.to_obf())?;
            }
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "moves" => {
                let moves: Vec<String> = self
                    .game_state
                    .legal_moves
                    .iter()
                    .filter_map(|square| square_to_algebraic(square).ok())
                    .collect();
                if moves.is_empty() {
                    writeln!(out, "none")?;
                } else {
                    writeln!(out, "{}", moves.join(" "))?;
                }
            }
            "score" => {
                let (black, white) = self.game_state.score();
                match self.game_state.winner() {
                    Some(winner) => {
                        writeln!(out, "black {black} white {white} result {}", winner_label(winner))?
                    }
                    None => writeln!(out, "black {black} white {white}")?,
                }
            }
            "go" => match self.game_state.mover() {
                Some(mover) => {
                    self.engine_side = Some(mover);
                    self.play_engine_turns(out, !self.autoplay)?;
                }
                None => self.report(out, &OthelloError::GameOver)?,
            },
            "autoplay" => match parts.next() {
                Some(mode) if mode.eq_ignore_ascii_case("on") => self.autoplay = true,
                Some(mode) if mode.eq_ignore_ascii_case("off") => self.autoplay = false,
                _ => {
                    warn!("rejected command: {trimmed}");
                    writeln!(out, "error: autoplay expects on or off")?;
                }
            },
            "quit" => {
                return Ok(true);
            }
            token => match algebraic_to_move(token) {
                Ok(mv) => self.handle_client_move(mv, out)?,
                Err(_) => {
                    warn!("rejected command: {trimmed}");
                    writeln!(out, "error: unknown command '{token}'")?;
                }
            },
        }

        Ok(false)
    }

    fn reset(&mut self, game_state: GameState) {
        self.game_state = game_state;
        self.engine.new_game();
        self.engine_side = None;
        self.unacknowledged_passes = 0;
    }

    fn handle_client_move(&mut self, mv: Move, out: &mut impl Write) -> io::Result<()> {
        if mv == Move::Pass {
            if self.unacknowledged_passes > 0 {
                self.unacknowledged_passes -= 1;
            } else {
                let err = OthelloError::EngineProtocol("no forced pass to acknowledge".to_owned());
                self.report(out, &err)?;
            }
            return Ok(());
        }

        let Some(mover) = self.game_state.mover() else {
            return self.report(out, &OthelloError::GameOver);
        };

        let outcome = match self.game_state.play(mv) {
            Ok(outcome) => outcome,
            Err(err) => return self.report(out, &err),
        };
        // A placement supersedes any pass the client left unacknowledged.
        self.unacknowledged_passes = 0;

        if !self.autoplay {
            return Ok(());
        }

        let engine_side = mover.opposite();
        self.engine_side = Some(engine_side);
        if outcome.forced_pass == Some(engine_side) {
            writeln!(out, "{} plays {PASS_TOKEN}", self.label)?;
        }
        self.play_engine_turns(out, false)
    }

    /// Let the built-in engine move while it is due, or once when `single`.
    fn play_engine_turns(&mut self, out: &mut impl Write, single: bool) -> io::Result<()> {
        while let Some(mover) = self.game_state.mover() {
            if Some(mover) != self.engine_side {
                break;
            }

            let coord = match self.engine_move(mover) {
                Ok(coord) => coord,
                Err(err) => return self.report(out, &err),
            };
            writeln!(out, "{} plays {coord}", self.label)?;

            if single {
                break;
            }
        }

        if let Some(winner) = self.game_state.winner() {
            let (black, white) = self.game_state.score();
            info!("game over: {} ({black}-{white})", winner_label(winner));
        }
        Ok(())
    }

    fn engine_move(&mut self, mover: Color) -> OthelloResult<String> {
        let mv = self.engine.choose_move(&self.game_state)?;
        let outcome = self.game_state.play(mv)?;
        if outcome.forced_pass == Some(mover.opposite()) {
            self.unacknowledged_passes += 1;
        }
        move_to_algebraic(mv)
    }

    fn report(&self, out: &mut impl Write, err: &OthelloError) -> io::Result<()> {
        warn!("{err}");
        writeln!(out, "error: {err}")
    }
}

fn winner_label(winner: Winner) -> &'static str {
    match winner {
        Winner::Black => "Black",
        Winner::White => "White",
        Winner::Tie => "Tie",
    }
}
