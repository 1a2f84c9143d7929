//! Grid-walking move generation.
//!
//! One parameterized walk handles all eight compass directions with a single
//! bounds check. The walk returns the captured run as a value, so callers
//! compose per-direction results instead of threading mutable state through.

use crate::game_state::board_state::BoardState;
use crate::game_state::othello_types::*;
use crate::move_generation::move_generator::MoveGenerator;

/// Unit step on the grid, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// Next square from `(row, col)`, or `None` past the board edge.
    #[inline]
    fn step(self, row: i8, col: i8) -> Option<(i8, i8)> {
        let next_row = row + self.d_row;
        let next_col = col + self.d_col;
        if (0..8).contains(&next_row) && (0..8).contains(&next_col) {
            Some((next_row, next_col))
        } else {
            None
        }
    }
}

pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

/// Opponent discs captured along `direction` by a mover disc on `square`.
///
/// Non-empty only for a run of one or more opponent discs closed by a mover
/// disc; an empty cell or the board edge before the closing disc yields
/// nothing. The content of `square` itself is not inspected.
pub fn captures_in_direction(
    board: &BoardState,
    mover: Color,
    square: Square,
    direction: Direction,
) -> Vec<Square> {
    let own = mover.cell();
    let other = mover.opposite().cell();

    let mut run = Vec::new();
    let mut pos = (square_row(square) as i8, square_col(square) as i8);

    while let Some((row, col)) = direction.step(pos.0, pos.1) {
        let cell = board.cell_at(row as u8, col as u8);
        if cell == other {
            run.push(square_at(row as u8, col as u8));
            pos = (row, col);
        } else if cell == own {
            return run;
        } else {
            break;
        }
    }

    Vec::new()
}

/// All discs a mover disc on `square` would flip, over every direction.
pub fn captures(board: &BoardState, mover: Color, square: Square) -> Vec<Square> {
    DIRECTIONS
        .iter()
        .flat_map(|&direction| captures_in_direction(board, mover, square, direction))
        .collect()
}

pub fn is_legal_destination(board: &BoardState, mover: Color, square: Square) -> bool {
    square < 64
        && board.cell(square).is_empty()
        && DIRECTIONS
            .iter()
            .any(|&direction| !captures_in_direction(board, mover, square, direction).is_empty())
}

pub struct DirectionalScanGenerator;

impl MoveGenerator for DirectionalScanGenerator {
    fn legal_moves(&self, board: &BoardState, mover: Color) -> SquareSet {
        (0..64u8)
            .filter(|&square| is_legal_destination(board, mover, square))
            .collect()
    }
}
