//! OBF-to-bitboard parser.
//!
//! Accepts exactly 64 characters over `-XO` in row-major order from a1, one
//! space, the side to move (`X` Black, `O` White) and a closing `;`. Discs of
//! the side to move become the mover bits. Nothing is built unless the whole
//! string is valid.

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::board_state::BitBoards;
use crate::game_state::othello_types::Color;

/// Decoded position string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObfPosition {
    pub bits: BitBoards,
    pub side_to_move: Color,
}

pub fn parse_obf(obf: &str) -> OthelloResult<ObfPosition> {
    let bytes = obf.as_bytes();
    if bytes.len() != 67 {
        return Err(malformed(format!("expected 67 bytes, got {}", bytes.len())));
    }

    let side_to_move = match bytes[65] {
        b'X' => Color::Black,
        b'O' => Color::White,
        other => return Err(malformed(format!("invalid side-to-move '{}'", char::from(other)))),
    };
    if bytes[64] != b' ' {
        return Err(malformed("missing space before side-to-move".to_owned()));
    }
    if bytes[66] != b';' {
        return Err(malformed("missing ';' terminator".to_owned()));
    }

    let own = side_to_move.obf_char() as u8;
    let mut mover = 0u64;
    let mut opponent = 0u64;

    for (square, &ch) in bytes[..64].iter().enumerate() {
        match ch {
            b'-' => {}
            b'X' | b'O' if ch == own => mover |= 1u64 << square,
            b'X' | b'O' => opponent |= 1u64 << square,
            _ => {
                return Err(malformed(format!(
                    "invalid board character '{}' at {square}",
                    char::from(ch)
                )))
            }
        }
    }

    Ok(ObfPosition {
        bits: BitBoards::new(mover, opponent),
        side_to_move,
    })
}

fn malformed(reason: String) -> OthelloError {
    OthelloError::MalformedPosition(reason)
}
