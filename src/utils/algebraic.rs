//! Square and move conversions for algebraic coordinates.
//!
//! Columns `a`..`h` are the low three bits of the square index and rows
//! `1`..`8` the high three bits, so `a1 == 0`, `h1 == 7`, `h8 == 63`. The token
//! `ps` stands for a pass. Input is case-insensitive; output is lowercase.

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::othello_rules::PASS_TOKEN;
use crate::game_state::othello_types::{Move, Square};

/// Convert algebraic notation (for example: "d3") to a square index.
#[inline]
pub fn algebraic_to_square(coord: &str) -> OthelloResult<Square> {
    let bytes = coord.as_bytes();
    if bytes.len() != 2 {
        return Err(OthelloError::InvalidCoordinate(coord.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(OthelloError::InvalidCoordinate(coord.to_owned()));
    }

    Ok((file - b'a') + 8 * (rank - b'1'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "d3").
#[inline]
pub fn square_to_algebraic(square: Square) -> OthelloResult<String> {
    if square > 63 {
        return Err(OthelloError::InvalidCoordinate(format!(
            "square index out of bounds: {square}"
        )));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a coordinate token or the pass sentinel.
pub fn algebraic_to_move(token: &str) -> OthelloResult<Move> {
    if token.eq_ignore_ascii_case(PASS_TOKEN) {
        return Ok(Move::Pass);
    }
    algebraic_to_square(token).map(Move::Place)
}

pub fn move_to_algebraic(mv: Move) -> OthelloResult<String> {
    match mv {
        Move::Pass => Ok(PASS_TOKEN.to_owned()),
        Move::Place(square) => square_to_algebraic(square),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 7);
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 56);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(19).expect("19 should convert"), "d3");
    }

    #[test]
    fn every_square_round_trips() {
        for square in 0..64u8 {
            let coord = square_to_algebraic(square).expect("in range");
            assert_eq!(algebraic_to_square(&coord).expect("own output parses"), square);
            assert_eq!(
                algebraic_to_square(&coord.to_ascii_uppercase()).expect("uppercase parses"),
                square
            );
        }
    }

    #[test]
    fn pass_sentinel_is_case_insensitive() {
        assert_eq!(algebraic_to_move("ps").expect("pass parses"), Move::Pass);
        assert_eq!(algebraic_to_move("PS").expect("pass parses"), Move::Pass);
        assert_eq!(move_to_algebraic(Move::Pass).expect("pass converts"), "ps");
        assert_eq!(algebraic_to_move("F5").expect("f5 parses"), Move::Place(37));
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "i1", "a0", "a9", "d", "d33", "3d", "pass"] {
            assert!(
                matches!(algebraic_to_move(bad), Err(OthelloError::InvalidCoordinate(_))),
                "{bad} should be rejected"
            );
        }
        assert!(square_to_algebraic(64).is_err());
    }
}
