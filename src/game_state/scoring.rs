//! Disc counting and winner decision.
//!
//! Used for the terminal verdict and for live display; counting never touches
//! game state.

use crate::game_state::board_state::BoardState;
use crate::game_state::othello_types::{Cell, Winner};

/// `(black, white)` disc counts.
pub fn score(board: &BoardState) -> (u32, u32) {
    board
        .cells()
        .fold((0, 0), |(black, white), (_, cell)| match cell {
            Cell::Black => (black + 1, white),
            Cell::White => (black, white + 1),
            Cell::Empty => (black, white),
        })
}

/// Strict majority wins; equal counts tie.
pub fn decide_winner(black: u32, white: u32) -> Winner {
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::White,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}

pub fn winner_of(board: &BoardState) -> Winner {
    let (black, white) = score(board);
    decide_winner(black, white)
}
