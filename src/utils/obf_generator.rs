use crate::game_state::board_state::BitBoards;
use crate::game_state::othello_types::Color;

/// Encode a mover-relative bit-pair as an OBF string with `side_to_move` due.
pub fn generate_obf(bits: BitBoards, side_to_move: Color) -> String {
    debug_assert!(bits.is_disjoint(), "mover and opponent bits must be disjoint");

    let own = side_to_move.obf_char();
    let other = side_to_move.opposite().obf_char();

    let mut out = String::with_capacity(67);
    for square in 0..64 {
        let mask = 1u64 << square;
        if bits.mover & mask != 0 {
            out.push(own);
        } else if bits.opponent & mask != 0 {
            out.push(other);
        } else {
            out.push('-');
        }
    }
    out.push(' ');
    out.push(own);
    out.push(';');
    out
}
