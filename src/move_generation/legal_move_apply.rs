//! Disc placement and flipping.
//!
//! Works on a copy of the board: an illegal destination is rejected before
//! anything is written, so the caller's board is never partially flipped.

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::othello_types::{Color, Square};
use crate::move_generation::directional_scan::captures;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: BoardState,
    pub flipped: u8,
}

/// Place `mover`'s disc on `square` and flip every captured run.
///
/// Fails with `InvalidMove` when `square` is off the board, occupied, or
/// captures nothing.
pub fn apply_move(board: &BoardState, mover: Color, square: Square) -> OthelloResult<AppliedMove> {
    if square >= 64 || !board.cell(square).is_empty() {
        return Err(invalid_move(square, mover));
    }

    let captured = captures(board, mover, square);
    if captured.is_empty() {
        return Err(invalid_move(square, mover));
    }

    let mut next = *board;
    next.set_cell(square, mover.cell());
    for &sq in &captured {
        next.set_cell(sq, mover.cell());
    }

    Ok(AppliedMove {
        board: next,
        flipped: captured.len() as u8,
    })
}

fn invalid_move(square: Square, color: Color) -> OthelloError {
    let coord = square_to_algebraic(square).unwrap_or_else(|_| format!("#{square}"));
    OthelloError::InvalidMove { coord, color }
}
