//! Canonical Othello rule constants.
//!
//! Starting layout, edge-exclusion masks used by the bitboard routines, and
//! literals shared by the text protocol.

/// Standard starting position (d4/e5 White, e4/d5 Black) with Black to move.
pub const STARTING_POSITION_OBF: &str =
    "---------------------------OX------XO--------------------------- X;";

/// Black discs of the starting position: e4 and d5.
pub const STARTING_BLACK_BITS: u64 = (1u64 << 28) | (1u64 << 35);

/// White discs of the starting position: d4 and e5.
pub const STARTING_WHITE_BITS: u64 = (1u64 << 27) | (1u64 << 36);

/// Every square except file `a`.
pub const NOT_FILE_A: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// Every square except file `h`.
pub const NOT_FILE_H: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Files `b`..`g`: squares that can sit inside a horizontal or diagonal run.
pub const INNER_FILES: u64 = NOT_FILE_A & NOT_FILE_H;

/// Token that stands for a pass in coordinate notation.
pub const PASS_TOKEN: &str = "ps";

/// Label an engine prefixes to its reply line (`"<label> plays d3"`).
pub const DEFAULT_ENGINE_LABEL: &str = "Edax";
