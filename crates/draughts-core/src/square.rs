//! Board squares addressed by 1-based (row, column) pairs.

use std::fmt;

use crate::error::BoardError;
use crate::square_set::SquareSet;

/// A square on the 8x8 board, encoded as a `u8`.
///
/// Index = (row - 1) * 8 + (column - 1), so a1 = 0, b1 = 1, ..., h8 = 63.
/// Row 1 is Light's back rank, row 8 is Dark's. A `Square` is always valid;
/// raw coordinates go through [`Square::new`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Number of rows (and columns) on the board.
    pub const SIDE: i32 = 8;

    /// Create a square from 1-based coordinates.
    pub fn new(row: i32, column: i32) -> Result<Square, BoardError> {
        if Square::is_valid(row, column) {
            Ok(Square::from_coords_unchecked(row, column))
        } else {
            Err(BoardError::InvalidSquare { row, column })
        }
    }

    /// Return `true` if both coordinates lie in `1..=8`.
    #[inline]
    pub const fn is_valid(row: i32, column: i32) -> bool {
        row >= 1 && row <= Square::SIDE && column >= 1 && column <= Square::SIDE
    }

    #[inline]
    const fn from_coords_unchecked(row: i32, column: i32) -> Square {
        debug_assert!(Square::is_valid(row, column));
        Square(((row - 1) * 8 + (column - 1)) as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse an algebraic string such as `"c3"` (column letter, row digit).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let column_byte = bytes[0].to_ascii_lowercase();
        let row_byte = bytes[1];

        if !(b'a'..=b'h').contains(&column_byte) || !(b'1'..=b'8').contains(&row_byte) {
            return None;
        }

        let column = (column_byte - b'a') as i32 + 1;
        let row = (row_byte - b'1') as i32 + 1;
        Some(Square::from_coords_unchecked(row, column))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the 1-based row.
    #[inline]
    pub const fn row(self) -> i32 {
        (self.0 / 8) as i32 + 1
    }

    /// Return the 1-based column.
    #[inline]
    pub const fn column(self) -> i32 {
        (self.0 % 8) as i32 + 1
    }

    /// Return `true` if pieces may stand on this square (`row + column` odd).
    #[inline]
    pub const fn is_usable(self) -> bool {
        (self.row() + self.column()) % 2 == 1
    }

    /// Return `true` if a piece may be set up here at the start of a match.
    ///
    /// The setup zone is the three outer rows on each side.
    #[inline]
    pub const fn can_spawn(self) -> bool {
        let row = self.row();
        self.is_usable() && (row <= 3 || row >= 6)
    }

    /// Step by the given deltas, returning `None` if the result is off the board.
    #[inline]
    pub const fn offset(self, d_row: i32, d_column: i32) -> Option<Square> {
        let row = self.row() + d_row;
        let column = self.column() + d_column;
        if Square::is_valid(row, column) {
            Some(Square::from_coords_unchecked(row, column))
        } else {
            None
        }
    }

    /// Return a set containing only this square.
    #[inline]
    pub const fn set(self) -> SquareSet {
        SquareSet::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    /// Iterate over the 32 usable squares in index order.
    pub fn usable() -> impl Iterator<Item = Square> {
        Square::all().filter(|sq| sq.is_usable())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (b'a' + (self.0 % 8)) as char;
        write!(f, "{}{}", column, self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
