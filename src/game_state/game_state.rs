//! Per-game state owned by a single caller.
//!
//! `GameState` couples the board with the turn state machine, caches the
//! legal destinations of the side to move, and records every ply (forced
//! passes included) so external engines can be kept in sync.

use log::debug;

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::othello_types::*;
use crate::game_state::scoring::score;
use crate::game_state::turn_sequencer::{next_turn, resolve_turn, Transition, TurnState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::GeneratorKind;
use crate::utils::algebraic::{move_to_algebraic, square_to_algebraic};
use crate::utils::obf_generator::generate_obf;
use crate::utils::obf_parser::parse_obf;

/// One recorded ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub color: Color,
    pub mv: Move,
}

/// What a successful placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyOutcome {
    pub flipped: u8,
    pub forced_pass: Option<Color>,
    pub turn: TurnState,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: BoardState,
    pub turn: TurnState,
    /// Legal destinations of the side to move; empty once terminal.
    pub legal_moves: SquareSet,
    /// Side named by the position string format. Equals the mover while the
    /// game runs and keeps the last due side once terminal.
    pub side_to_move: Color,
    pub ply: u16,
    pub history: Vec<PlayedMove>,
    generator: GeneratorKind,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.turn == other.turn && self.side_to_move == other.side_to_move
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::new_game_with(GeneratorKind::default())
    }

    pub fn new_game_with(generator: GeneratorKind) -> Self {
        Self::from_board(BoardState::initial(), Color::Black, generator)
    }

    /// Build a state with `to_move` due on `board`, applying the forced-pass
    /// rule if that side has no destination.
    pub fn from_board(board: BoardState, to_move: Color, generator: GeneratorKind) -> Self {
        let mut state = Self {
            board,
            turn: TurnState::AwaitingMove(to_move),
            legal_moves: SquareSet::EMPTY,
            side_to_move: to_move,
            ply: 0,
            history: Vec::new(),
            generator,
        };
        let transition = resolve_turn(generator.generator(), &state.board, to_move);
        state.enter(transition, to_move);
        state
    }

    pub fn from_obf(obf: &str) -> OthelloResult<Self> {
        Self::from_obf_with(obf, GeneratorKind::default())
    }

    pub fn from_obf_with(obf: &str, generator: GeneratorKind) -> OthelloResult<Self> {
        let position = parse_obf(obf)?;
        let board = BoardState::from_bitboards(position.bits, position.side_to_move);
        Ok(Self::from_board(board, position.side_to_move, generator))
    }

    pub fn to_obf(&self) -> String {
        generate_obf(self.board.to_bitboards(self.side_to_move), self.side_to_move)
    }

    #[inline]
    pub fn generator_kind(&self) -> GeneratorKind {
        self.generator
    }

    #[inline]
    pub fn mover(&self) -> Option<Color> {
        self.turn.mover()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.turn.is_terminal()
    }

    pub fn winner(&self) -> Option<Winner> {
        match self.turn {
            TurnState::Terminal(winner) => Some(winner),
            TurnState::AwaitingMove(_) => None,
        }
    }

    /// `(black, white)` disc counts; valid at any point of the game.
    #[inline]
    pub fn score(&self) -> (u32, u32) {
        score(&self.board)
    }

    /// Play one ply for the side to move.
    ///
    /// `Move::Pass` is always rejected: passes are applied by the sequencer.
    pub fn play(&mut self, mv: Move) -> OthelloResult<PlyOutcome> {
        let mover = match self.turn {
            TurnState::Terminal(_) => return Err(OthelloError::GameOver),
            TurnState::AwaitingMove(color) => color,
        };

        let square = match mv {
            Move::Place(square) if self.legal_moves.contains(square) => square,
            _ => {
                return Err(OthelloError::InvalidMove {
                    coord: move_to_algebraic(mv).unwrap_or_else(|_| format!("{mv:?}")),
                    color: mover,
                })
            }
        };

        let applied = apply_move(&self.board, mover, square)?;
        self.board = applied.board;
        self.ply = self.ply.saturating_add(1);
        self.history.push(PlayedMove { color: mover, mv });

        let transition = next_turn(self.generator.generator(), &self.board, mover);
        self.enter(transition, mover.opposite());

        debug!(
            "ply {} {} {} flipped {} -> {:?}",
            self.ply,
            mover,
            square_to_algebraic(square).unwrap_or_default(),
            applied.flipped,
            self.turn
        );

        Ok(PlyOutcome {
            flipped: applied.flipped,
            forced_pass: transition.forced_pass,
            turn: self.turn,
        })
    }

    /// Shorthand for playing a square index.
    #[inline]
    pub fn play_square(&mut self, square: Square) -> OthelloResult<PlyOutcome> {
        self.play(Move::Place(square))
    }

    fn enter(&mut self, transition: Transition, due: Color) {
        if let Some(passed) = transition.forced_pass {
            debug!("{passed} has no legal destination and passes");
            self.history.push(PlayedMove {
                color: passed,
                mv: Move::Pass,
            });
        }
        self.turn = transition.turn;
        self.legal_moves = transition.legal_moves;
        self.side_to_move = transition.turn.mover().unwrap_or(due);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::othello_rules::STARTING_POSITION_OBF;

    #[test]
    fn new_game_awaits_black_with_four_moves() {
        let game = GameState::new_game();
        assert_eq!(game.turn, TurnState::AwaitingMove(Color::Black));
        assert_eq!(game.legal_moves.iter().collect::<Vec<_>>(), vec![19, 26, 37, 44]);
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.to_obf(), STARTING_POSITION_OBF);
    }

    #[test]
    fn starting_obf_decodes_to_initial_board_with_expected_moves() {
        let game = GameState::from_obf(
            "---------------------------OX------XO--------------------------- X;",
        )
        .expect("starting OBF should parse");
        assert_eq!(game.board, BoardState::initial());
        assert_eq!(game.mover(), Some(Color::Black));
        let row_cols: Vec<(u8, u8)> = game
            .legal_moves
            .iter()
            .map(|sq| (square_row(sq), square_col(sq)))
            .collect();
        assert_eq!(row_cols, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn play_alternates_turns_and_records_history() {
        let mut game = GameState::new_game();
        let outcome = game.play_square(19).expect("d3 is legal");
        assert_eq!(outcome.flipped, 1);
        assert_eq!(outcome.turn, TurnState::AwaitingMove(Color::White));
        assert_eq!(game.history, vec![PlayedMove { color: Color::Black, mv: Move::Place(19) }]);
        assert_eq!(game.score(), (4, 1));
        assert_eq!(game.ply, 1);
    }

    #[test]
    fn illegal_and_pass_moves_are_rejected_without_change() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(matches!(game.play_square(0), Err(OthelloError::InvalidMove { .. })));
        assert!(matches!(game.play(Move::Pass), Err(OthelloError::InvalidMove { .. })));
        assert_eq!(game, before);
        assert!(game.history.is_empty());
    }

    #[test]
    fn side_without_moves_is_skipped_on_load() {
        // White to move but only Black can play c1.
        let obf = format!("XO{} O;", "-".repeat(62));
        let game = GameState::from_obf(&obf).expect("valid OBF");
        assert_eq!(game.turn, TurnState::AwaitingMove(Color::Black));
        assert_eq!(game.history, vec![PlayedMove { color: Color::White, mv: Move::Pass }]);
    }

    #[test]
    fn game_ends_when_neither_side_can_move() {
        // Black a1, White b1: after c1 no White disc remains.
        let obf = format!("XO{} X;", "-".repeat(62));
        let mut game = GameState::from_obf(&obf).expect("valid OBF");
        let outcome = game.play_square(2).expect("c1 is legal");
        assert_eq!(outcome.turn, TurnState::Terminal(Winner::Black));
        assert!(game.is_terminal());
        assert_eq!(game.winner(), Some(Winner::Black));
        assert_eq!(game.play_square(3), Err(OthelloError::GameOver));
    }

    #[test]
    fn forced_pass_returns_turn_to_the_same_player() {
        // Row 1 reads X O - O: after c1 White has no capture, Black goes on with e1.
        let obf = format!("XO-O{} X;", "-".repeat(60));
        let mut game = GameState::from_obf(&obf).expect("valid OBF");
        let outcome = game.play_square(2).expect("c1 is legal");
        assert_eq!(outcome.forced_pass, Some(Color::White));
        assert_eq!(outcome.turn, TurnState::AwaitingMove(Color::Black));
        assert!(game.legal_moves.contains(4));
        assert_eq!(game.history.last().map(|p| p.mv), Some(Move::Pass));
    }

    #[test]
    fn directional_scan_state_plays_like_the_default() {
        let mut fast = GameState::new_game();
        let mut slow = GameState::new_game_with(GeneratorKind::DirectionalScan);
        assert_eq!(fast.generator_kind(), GeneratorKind::KoggeStone);
        assert_eq!(slow.generator_kind(), GeneratorKind::DirectionalScan);
        for square in [19u8, 18, 17, 9] {
            let a = fast.play_square(square);
            let b = slow.play_square(square);
            assert_eq!(a, b);
        }
        assert_eq!(fast, slow);
    }
}
