//! Client side of the Edax text protocol.
//!
//! Moves go out as newline-terminated coordinate tokens (`ps` for a pass).
//! The engine answers with free-form output in which one line reads
//! `"<label> plays <coord>."`; everything else on the stream is skipped.

use std::io::{BufRead, Write};

use log::trace;

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::othello_rules::DEFAULT_ENGINE_LABEL;
use crate::game_state::othello_types::Move;
use crate::utils::algebraic::{algebraic_to_move, move_to_algebraic};

pub struct EdaxSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    marker: String,
}

impl<R: BufRead, W: Write> EdaxSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_label(reader, writer, DEFAULT_ENGINE_LABEL)
    }

    /// Session for an engine announcing itself as `label` instead of `Edax`.
    pub fn with_label(reader: R, writer: W, label: &str) -> Self {
        Self {
            reader,
            writer,
            marker: format!("{label} plays "),
        }
    }

    pub fn send_move(&mut self, mv: Move) -> OthelloResult<()> {
        let token = move_to_algebraic(mv)?;
        trace!("-> {token}");
        writeln!(self.writer, "{token}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Block until the engine announces a move.
    pub fn read_engine_move(&mut self) -> OthelloResult<Move> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(OthelloError::EngineProtocol(
                    "engine output ended before a move was announced".to_owned(),
                ));
            }
            trace!("<- {}", line.trim_end());
            if let Some(mv) = parse_engine_move_line(&line, &self.marker)? {
                return Ok(mv);
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// `Ok(None)` when `line` carries no announcement; an error when it does but
/// the coordinate is unusable.
pub fn parse_engine_move_line(line: &str, marker: &str) -> OthelloResult<Option<Move>> {
    let Some(start) = line.find(marker) else {
        return Ok(None);
    };

    let token = line[start + marker.len()..]
        .split_whitespace()
        .next()
        .map(|tok| tok.trim_end_matches(|c: char| !c.is_ascii_alphanumeric()))
        .unwrap_or_default();

    if token.is_empty() {
        return Err(OthelloError::EngineProtocol(format!(
            "move announcement without a coordinate: {}",
            line.trim_end()
        )));
    }

    algebraic_to_move(token).map(Some)
}
