use std::thread;

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::board_state::{BitBoards, BoardState};
use crate::game_state::othello_types::{Color, SquareSet};
use crate::move_generation::kogge_stone::{flip_mask, legal_move_bits, play_bits};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

/// Leaf statistics of a fixed-depth game tree walk.
///
/// A forced pass consumes a ply. A position where neither side can move
/// before the horizon is counted as one leaf node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub passes: u64,
    pub terminals: u64,
    pub flips: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.passes += rhs.passes;
        self.terminals += rhs.terminals;
        self.flips += rhs.flips;
    }
}

/// Perft through a `MoveGenerator` and the grid move applier.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &BoardState,
    mover: Color,
    depth: u8,
) -> OthelloResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    perft_grid_recurse(generator, board, mover, depth, &mut counts)?;
    Ok(counts)
}

fn perft_grid_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &BoardState,
    mover: Color,
    depth: u8,
    counts: &mut PerftCounts,
) -> OthelloResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    let moves = generator.legal_moves(board, mover);
    if moves.is_empty() {
        if generator.legal_moves(board, mover.opposite()).is_empty() {
            counts.nodes += 1;
            counts.terminals += 1;
            return Ok(());
        }
        counts.passes += 1;
        return perft_grid_recurse(generator, board, mover.opposite(), depth - 1, counts);
    }

    for square in moves.iter() {
        let applied = apply_move(board, mover, square)?;
        if depth == 1 {
            counts.flips += u64::from(applied.flipped);
        }
        perft_grid_recurse(generator, &applied.board, mover.opposite(), depth - 1, counts)?;
    }

    Ok(())
}

/// Perft on raw mover-relative bit-pairs.
pub fn perft_bitboards(bits: BitBoards, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    perft_bits_recurse(bits, depth, &mut counts);
    counts
}

fn perft_bits_recurse(bits: BitBoards, depth: u8, counts: &mut PerftCounts) {
    if depth == 0 {
        counts.nodes += 1;
        return;
    }

    let moves = legal_move_bits(bits);
    if moves == 0 {
        if legal_move_bits(bits.swapped()) == 0 {
            counts.nodes += 1;
            counts.terminals += 1;
            return;
        }
        counts.passes += 1;
        perft_bits_recurse(bits.swapped(), depth - 1, counts);
        return;
    }

    for square in SquareSet::from_bits(moves).iter() {
        if depth == 1 {
            counts.flips += u64::from(flip_mask(bits, square).count_ones());
        }
        perft_bits_recurse(play_bits(bits, square), depth - 1, counts);
    }
}

/// Bitboard perft with one OS thread per root move.
///
/// Each worker owns its own copy of the position.
pub fn perft_multi_threaded(bits: BitBoards, depth: u8) -> OthelloResult<PerftCounts> {
    let moves = legal_move_bits(bits);
    if depth <= 1 || moves == 0 {
        return Ok(perft_bitboards(bits, depth));
    }

    let handles: Vec<_> = SquareSet::from_bits(moves)
        .iter()
        .map(|square| {
            let child = play_bits(bits, square);
            thread::spawn(move || perft_bitboards(child, depth - 1))
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| OthelloError::WorkerPanicked("perft".to_owned()))?;
        total.merge(local);
    }

    Ok(total)
}
