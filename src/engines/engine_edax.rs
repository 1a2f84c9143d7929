//! `Engine` adapter around an external engine speaking the Edax text protocol.
//!
//! The external engine keeps its own copy of the game. Before each request
//! the adapter replays what happened since its last turn: opponent plies and
//! opponent passes are sent as tokens, and passes forced on the external
//! engine are matched against the `ps` announcements it printed. Launching the
//! process is left to the caller, which supplies the stream pair.
//!
//! Coordinate tokens cannot set up a position, so the adapter only joins a
//! game that began at the initial position and in which its color has not
//! placed a disc yet. Callers that prepared the external engine some other way
//! declare it with `joined_at`.

use std::io::{BufRead, Write};

use log::debug;

use crate::engines::engine_trait::Engine;
use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::{Color, Move};
use crate::protocol::edax_session::EdaxSession;

pub struct EdaxEngine<R: BufRead, W: Write> {
    session: EdaxSession<R, W>,
    name: String,
    color: Option<Color>,
    synced: usize,
    started: bool,
}

impl<R: BufRead, W: Write> EdaxEngine<R, W> {
    pub fn new(session: EdaxSession<R, W>) -> Self {
        Self {
            session,
            name: "Edax".to_owned(),
            color: None,
            synced: 0,
            started: false,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    /// Treat the external engine as already holding `game_state`, so only
    /// plies played after it are forwarded.
    pub fn joined_at(mut self, game_state: &GameState) -> Self {
        self.synced = game_state.history.len();
        self.started = true;
        self
    }

    /// Color the external engine plays; known after the first request.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn into_session(self) -> EdaxSession<R, W> {
        self.session
    }

    fn check_joinable(game_state: &GameState, own: Color) -> OthelloResult<()> {
        if let Some(played) = game_state
            .history
            .iter()
            .find(|played| played.color == own && played.mv != Move::Pass)
        {
            return Err(OthelloError::EngineProtocol(format!(
                "{own} already played {:?} before the external engine joined",
                played.mv
            )));
        }

        let mut replay = GameState::new_game();
        for played in &game_state.history {
            if let Move::Place(square) = played.mv {
                if replay.play_square(square).is_err() {
                    break;
                }
            }
        }
        if replay.board != game_state.board {
            return Err(OthelloError::EngineProtocol(
                "game did not start from the initial position".to_owned(),
            ));
        }
        Ok(())
    }

    fn forward_history(&mut self, game_state: &GameState, own: Color) -> OthelloResult<()> {
        let pending = game_state.history.get(self.synced..).unwrap_or_default();
        for played in pending {
            if played.color != own {
                self.session.send_move(played.mv)?;
            } else if played.mv == Move::Pass {
                let announced = self.session.read_engine_move()?;
                if announced != Move::Pass {
                    return Err(OthelloError::EngineProtocol(format!(
                        "engine announced {announced:?} where a forced pass was expected"
                    )));
                }
            }
        }
        self.synced = game_state.history.len();
        Ok(())
    }
}

impl<R, W> Engine for EdaxEngine<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.color = None;
        self.synced = 0;
        self.started = false;
    }

    fn choose_move(&mut self, game_state: &GameState) -> OthelloResult<Move> {
        let mover = game_state.mover().ok_or(OthelloError::GameOver)?;
        let own = *self.color.get_or_insert(mover);
        if own != mover {
            return Err(OthelloError::EngineProtocol(format!(
                "external engine plays {own} but {mover} is to move"
            )));
        }

        let joining = !self.started;
        if joining {
            Self::check_joinable(game_state, own)?;
            self.started = true;
        }

        let opened = joining && game_state.history.is_empty();

        if opened {
            debug!("{} opens as Black", self.name);
        } else {
            self.forward_history(game_state, own)?;
        }

        let reply = self.session.read_engine_move()?;
        debug!("{} replied {reply:?}", self.name);
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::game_state::board_state::BoardState;

    fn scripted(output: &str) -> EdaxEngine<Cursor<String>, Vec<u8>> {
        EdaxEngine::new(EdaxSession::new(Cursor::new(output.to_owned()), Vec::new()))
    }

    fn written(engine: EdaxEngine<Cursor<String>, Vec<u8>>) -> String {
        let (_, out) = engine.into_session().into_inner();
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn opening_as_black_only_reads_then_forwards_replies() {
        let mut engine = scripted("Edax plays d3.\nthinking...\nEdax plays b3.\n");
        let mut game = GameState::new_game();

        let first = engine.choose_move(&game).expect("engine should open");
        assert_eq!(first, Move::Place(19));
        assert_eq!(engine.color(), Some(Color::Black));
        game.play(first).expect("d3 is legal");
        game.play_square(18).expect("c3 is legal for White");

        let second = engine.choose_move(&game).expect("engine should reply");
        assert_eq!(second, Move::Place(17));
        assert!(game.legal_moves.contains(17));
        assert_eq!(written(engine), "c3\n");
    }

    #[test]
    fn playing_white_forwards_the_opening_move() {
        let mut engine = scripted("Edax plays c3.\n");
        let mut game = GameState::new_game();
        game.play_square(19).expect("d3 is legal");

        assert_eq!(engine.choose_move(&game), Ok(Move::Place(18)));
        assert_eq!(engine.color(), Some(Color::White));
        assert_eq!(written(engine), "d3\n");
    }

    #[test]
    fn opponent_forced_pass_is_sent_as_ps() {
        // Row 1 "X O - O" with Black to move: after c1 White has no reply.
        let board = BoardState::from_color_bits(1, (1 << 1) | (1 << 3));
        let mut game = GameState::from_board(board, Color::Black, Default::default());
        let mut engine = scripted("Edax plays c1.\nEdax plays e1.\n").joined_at(&game);

        let first = engine.choose_move(&game).expect("engine should move");
        assert_eq!(first, Move::Place(2));
        let outcome = game.play(first).expect("c1 is legal");
        assert_eq!(outcome.forced_pass, Some(Color::White));

        assert_eq!(engine.choose_move(&game), Ok(Move::Place(4)));
        assert_eq!(written(engine), "ps\n");
    }

    #[test]
    fn own_color_opening_plies_cannot_be_joined() {
        let mut game = GameState::new_game();
        for square in [19u8, 18, 26] {
            game.play_square(square).expect("opening ply is legal");
        }
        let mut engine = scripted("Edax plays e3.\n");

        assert!(matches!(
            engine.choose_move(&game),
            Err(OthelloError::EngineProtocol(_))
        ));
        assert_eq!(written(engine), "");
    }

    #[test]
    fn unseen_setup_position_cannot_be_joined() {
        let board = BoardState::from_color_bits(1, (1 << 1) | (1 << 3));
        let game = GameState::from_board(board, Color::Black, Default::default());
        let mut engine = scripted("Edax plays c1.\n");

        assert!(matches!(
            engine.choose_move(&game),
            Err(OthelloError::EngineProtocol(_))
        ));
        assert_eq!(written(engine), "");
    }

    #[test]
    fn late_join_needs_an_explicit_resume() {
        let mut game = GameState::new_game();
        for square in [19u8, 18, 26] {
            game.play_square(square).expect("opening ply is legal");
        }

        let mut late = scripted("Edax plays e3.\n").with_name("Late");
        assert_eq!(late.name(), "Late");
        assert!(late.choose_move(&game).is_err());

        let mut resumed = scripted("Edax plays e3.\n").joined_at(&game);
        assert_eq!(resumed.choose_move(&game), Ok(Move::Place(20)));
        assert_eq!(written(resumed), "");
    }

    #[test]
    fn wrong_color_request_is_rejected() {
        let mut engine = scripted("Edax plays d3.\n");
        let mut game = GameState::new_game();
        let mv = engine.choose_move(&game).expect("engine should open");
        game.play(mv).expect("d3 is legal");

        assert!(matches!(
            engine.choose_move(&game),
            Err(OthelloError::EngineProtocol(_))
        ));
    }

    #[test]
    fn silent_engine_is_a_protocol_error() {
        let mut engine = scripted("");
        assert!(matches!(
            engine.choose_move(&GameState::new_game()),
            Err(OthelloError::EngineProtocol(_))
        ));
    }
}
