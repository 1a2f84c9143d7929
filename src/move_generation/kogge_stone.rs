//! Bitboard move generation and flipping.
//!
//! Legal destinations come from a parallel-prefix propagation along the four
//! axis pairs (shift 1, 8, 7, 9). Opponent discs on files `a` and `h` can never
//! sit inside a horizontal or diagonal run, so removing them from the
//! propagation mask is what stops a shift from wrapping to the next rank.

use crate::game_state::board_state::{BitBoards, BoardState};
use crate::game_state::othello_rules::{INNER_FILES, NOT_FILE_A, NOT_FILE_H};
use crate::game_state::othello_types::{Color, Square, SquareSet};
use crate::move_generation::move_generator::MoveGenerator;

/// Candidate destinations along one axis pair (both senses of `shift`).
///
/// Runs of up to six opponent discs are covered: two single steps, then two
/// doubling steps on a mask pre-shifted to match.
#[inline]
fn moves_along_axis(mover: u64, mask: u64, shift: u32) -> u64 {
    let double = shift * 2;

    let mut flip_l = mask & (mover << shift);
    let mut flip_r = mask & (mover >> shift);
    flip_l |= mask & (flip_l << shift);
    flip_r |= mask & (flip_r >> shift);

    let mask_l = mask & (mask << shift);
    let mask_r = mask & (mask >> shift);
    flip_l |= mask_l & (flip_l << double);
    flip_r |= mask_r & (flip_r >> double);
    flip_l |= mask_l & (flip_l << double);
    flip_r |= mask_r & (flip_r >> double);

    (flip_l << shift) | (flip_r >> shift)
}

/// Legal destinations for `bits.mover` as a square mask.
pub fn legal_move_bits(bits: BitBoards) -> u64 {
    let inner = bits.opponent & INNER_FILES;

    let horizontal = moves_along_axis(bits.mover, inner, 1);
    let vertical = moves_along_axis(bits.mover, bits.opponent, 8);
    let anti_diagonal = moves_along_axis(bits.mover, inner, 7);
    let diagonal = moves_along_axis(bits.mover, inner, 9);

    (horizontal | vertical | anti_diagonal | diagonal) & bits.empty()
}

/// Single-step shifts with their wrap masks, one per compass direction.
const SHIFTS: [fn(u64) -> u64; 8] = [
    |b| (b << 1) & NOT_FILE_A,
    |b| (b >> 1) & NOT_FILE_H,
    |b| b << 8,
    |b| b >> 8,
    |b| (b << 9) & NOT_FILE_A,
    |b| (b << 7) & NOT_FILE_H,
    |b| (b >> 7) & NOT_FILE_A,
    |b| (b >> 9) & NOT_FILE_H,
];

/// Opponent discs flipped by a mover disc on `square`, as a mask.
///
/// Zero when `square` is not a legal destination.
pub fn flip_mask(bits: BitBoards, square: Square) -> u64 {
    debug_assert!(square < 64);
    let origin = 1u64 << square;
    if bits.occupied() & origin != 0 {
        return 0;
    }

    let mut flips = 0u64;
    for shift in SHIFTS {
        let mut line = 0u64;
        let mut cursor = shift(origin);
        while cursor & bits.opponent != 0 {
            line |= cursor;
            cursor = shift(cursor);
        }
        if cursor & bits.mover != 0 {
            flips |= line;
        }
    }
    flips
}

/// Position after the mover plays `square`, seen from the next mover.
///
/// Caller guarantees `square` is legal.
#[inline]
pub fn play_bits(bits: BitBoards, square: Square) -> BitBoards {
    let flips = flip_mask(bits, square);
    let mover = bits.mover | flips | (1u64 << square);
    let opponent = bits.opponent & !flips;
    BitBoards::new(opponent, mover)
}

pub struct KoggeStoneGenerator;

impl MoveGenerator for KoggeStoneGenerator {
    fn legal_moves(&self, board: &BoardState, mover: Color) -> SquareSet {
        SquareSet::from_bits(legal_move_bits(board.to_bitboards(mover)))
    }
}
