//! Crate root module declarations for the Othello engine project.
//!
//! Exposes the game state and rules, the two legal-move generators, players
//! and the Edax text protocol, plus notation and diagnostics helpers, so
//! binaries, benches and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod game_state;
    pub mod othello_rules;
    pub mod othello_types;
    pub mod scoring;
    pub mod turn_sequencer;
}

pub mod move_generation {
    pub mod directional_scan;
    pub mod kogge_stone;
    pub mod legal_move_apply;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_edax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod edax_session;
    pub mod protocol_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod obf_generator;
    pub mod obf_parser;
    pub mod random_position;
    pub mod render_game_state;
}
