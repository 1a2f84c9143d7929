//! Grid and bit-pair board representations.
//!
//! `BoardState` is the 8x8 grid of `Cell` values consumed by the directional
//! scan and the move applier. `BitBoards` is the mover-relative bit-pair view
//! consumed by the Kogge-Stone generator and perft. Conversion is exact in
//! both directions for every disjoint pair.

use crate::game_state::othello_rules::{STARTING_BLACK_BITS, STARTING_WHITE_BITS};
use crate::game_state::othello_types::*;

/// Mover-relative bit-pair. Invariant: `mover & opponent == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitBoards {
    pub mover: u64,
    pub opponent: u64,
}

impl BitBoards {
    #[inline]
    pub const fn new(mover: u64, opponent: u64) -> Self {
        Self { mover, opponent }
    }

    #[inline]
    pub const fn is_disjoint(self) -> bool {
        self.mover & self.opponent == 0
    }

    #[inline]
    pub const fn occupied(self) -> u64 {
        self.mover | self.opponent
    }

    #[inline]
    pub const fn empty(self) -> u64 {
        !(self.mover | self.opponent)
    }

    /// Same discs seen from the other side.
    #[inline]
    pub const fn swapped(self) -> Self {
        Self {
            mover: self.opponent,
            opponent: self.mover,
        }
    }
}

/// 8x8 grid, `cells[row][col]`, row 0 = rank 1 (top of the rendered board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [[Cell; 8]; 8],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Standard starting layout: a 2x2 block of alternating colors at the center.
    pub fn initial() -> Self {
        Self::from_color_bits(STARTING_BLACK_BITS, STARTING_WHITE_BITS)
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square_row(square) as usize][square_col(square) as usize]
    }

    #[inline]
    pub fn cell_at(&self, row: u8, col: u8) -> Cell {
        self.cells[row as usize][col as usize]
    }

    #[inline]
    pub fn set_cell(&mut self, square: Square, cell: Cell) {
        self.cells[square_row(square) as usize][square_col(square) as usize] = cell;
    }

    /// Cells in square-index order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .map(|(idx, cell)| (idx as Square, *cell))
    }

    pub fn color_bits(&self, color: Color) -> u64 {
        let target = color.cell();
        self.cells()
            .filter(|(_, cell)| *cell == target)
            .fold(0u64, |acc, (sq, _)| acc | (1u64 << sq))
    }

    pub fn from_color_bits(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "color bit sets must be disjoint");
        let mut board = Self::empty();
        for square in 0..64u8 {
            let mask = 1u64 << square;
            if black & mask != 0 {
                board.set_cell(square, Cell::Black);
            } else if white & mask != 0 {
                board.set_cell(square, Cell::White);
            }
        }
        board
    }

    pub fn to_bitboards(&self, mover: Color) -> BitBoards {
        BitBoards::new(self.color_bits(mover), self.color_bits(mover.opposite()))
    }

    /// Inverse of [`BoardState::to_bitboards`]. Overlapping pairs violate the
    /// caller contract.
    pub fn from_bitboards(bits: BitBoards, mover: Color) -> Self {
        match mover {
            Color::Black => Self::from_color_bits(bits.mover, bits.opponent),
            Color::White => Self::from_color_bits(bits.opponent, bits.mover),
        }
    }

    pub fn count(&self, cell: Cell) -> u32 {
        self.cells().filter(|(_, c)| *c == cell).count() as u32
    }
}
