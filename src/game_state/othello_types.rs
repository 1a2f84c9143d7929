//! Primitive Othello types shared by every subsystem.
//!
//! Squares are indexed `0..=63`, least-significant-bit first, row-major from
//! the top-left corner: `0 == a1`, `7 == h1`, `56 == a8`, `63 == h8`.

use std::fmt;

use crate::errors::{OthelloError, OthelloResult};

/// Board square index (`0..=63`).
pub type Square = u8;

/// Player identity. Mover/opponent roles are derived from this per ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Disc letter used by the position string format.
    #[inline]
    pub const fn obf_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    pub fn from_obf_char(ch: char) -> OthelloResult<Self> {
        match ch {
            'X' => Ok(Color::Black),
            'O' => Ok(Color::White),
            _ => Err(OthelloError::IllegalPlayerIdentity(format!(
                "'{ch}' is not a side-to-move character"
            ))),
        }
    }

    /// Decode the numeric player id used by board arrays (`-1` Black, `1` White).
    pub fn from_id(id: i8) -> OthelloResult<Self> {
        match id {
            -1 => Ok(Color::Black),
            1 => Ok(Color::White),
            _ => Err(OthelloError::IllegalPlayerIdentity(format!(
                "{id} is not a player id"
            ))),
        }
    }

    #[inline]
    pub const fn id(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Content of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }
}

impl TryFrom<Cell> for Color {
    type Error = OthelloError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        cell.color().ok_or_else(|| {
            OthelloError::IllegalPlayerIdentity("an empty cell has no player".to_owned())
        })
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Winner::Black,
            Color::White => Winner::White,
        }
    }
}

/// A ply as exchanged with players and external engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

/// Build a square index from a zero-based `(row, col)` pair, row 0 = rank 1.
#[inline]
pub const fn square_at(row: u8, col: u8) -> Square {
    row * 8 + col
}

#[inline]
pub const fn square_row(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_col(square: Square) -> u8 {
    square % 8
}

/// Set of squares backed by a 64-bit mask, one bit per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        SquareSet(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        debug_assert!(square < 64);
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        square < 64 && (self.0 >> square) & 1 == 1
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Squares in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut remaining = self.0;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let square = remaining.trailing_zeros() as Square;
            remaining &= remaining - 1;
            Some(square)
        })
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_identity_decoding_rejects_non_colors() {
        assert_eq!(Color::from_id(-1), Ok(Color::Black));
        assert_eq!(Color::from_id(1), Ok(Color::White));
        for color in [Color::Black, Color::White] {
            assert_eq!(Color::from_id(color.id()), Ok(color));
        }
        assert!(matches!(
            Color::from_id(0),
            Err(OthelloError::IllegalPlayerIdentity(_))
        ));
        assert!(matches!(
            Color::try_from(Cell::Empty),
            Err(OthelloError::IllegalPlayerIdentity(_))
        ));
        assert!(matches!(
            Color::from_obf_char('-'),
            Err(OthelloError::IllegalPlayerIdentity(_))
        ));
    }

    #[test]
    fn square_set_iterates_in_ascending_order() {
        let set: SquareSet = [44u8, 19, 37, 26].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![19, 26, 37, 44]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(37));
        assert!(!set.contains(36));
        assert!(!set.contains(64));
    }

    #[test]
    fn row_col_helpers_agree_with_index_layout() {
        assert_eq!(square_at(2, 3), 19);
        assert_eq!(square_row(44), 5);
        assert_eq!(square_col(44), 4);
    }
}
