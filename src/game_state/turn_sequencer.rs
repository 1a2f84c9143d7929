//! Turn sequencing: forced passes and game termination.
//!
//! A pass is never requested from a player. It is derived from an empty legal
//! set whenever the other side still has a destination.

use crate::game_state::board_state::BoardState;
use crate::game_state::othello_types::{Color, SquareSet, Winner};
use crate::game_state::scoring::winner_of;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Color),
    Terminal(Winner),
}

impl TurnState {
    #[inline]
    pub const fn mover(self) -> Option<Color> {
        match self {
            TurnState::AwaitingMove(color) => Some(color),
            TurnState::Terminal(_) => None,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnState::Terminal(_))
    }
}

/// Result of deciding who acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub turn: TurnState,
    /// Legal destinations of the new mover; empty when terminal.
    pub legal_moves: SquareSet,
    /// Color skipped by a forced pass, if any.
    pub forced_pass: Option<Color>,
}

/// Decide the state once `candidate` is due to act on `board`.
///
/// `candidate` keeps the turn if it has a destination; otherwise the other
/// color moves after a forced pass; with no destination on either side the
/// game ends.
pub fn resolve_turn(generator: &dyn MoveGenerator, board: &BoardState, candidate: Color) -> Transition {
    let candidate_moves = generator.legal_moves(board, candidate);
    if !candidate_moves.is_empty() {
        return Transition {
            turn: TurnState::AwaitingMove(candidate),
            legal_moves: candidate_moves,
            forced_pass: None,
        };
    }

    let other = candidate.opposite();
    let other_moves = generator.legal_moves(board, other);
    if !other_moves.is_empty() {
        return Transition {
            turn: TurnState::AwaitingMove(other),
            legal_moves: other_moves,
            forced_pass: Some(candidate),
        };
    }

    Transition {
        turn: TurnState::Terminal(winner_of(board)),
        legal_moves: SquareSet::EMPTY,
        forced_pass: None,
    }
}

/// State after `just_moved` completed a placement.
#[inline]
pub fn next_turn(generator: &dyn MoveGenerator, board: &BoardState, just_moved: Color) -> Transition {
    resolve_turn(generator, board, just_moved.opposite())
}
