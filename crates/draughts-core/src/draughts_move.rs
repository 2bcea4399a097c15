//! Record of an executed move.

use std::fmt;

use crate::piece::PieceId;
use crate::square::Square;
use crate::square_set::SquareSet;

/// A move that has been applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The piece that moved.
    pub piece: PieceId,
    /// Square the piece left.
    pub from: Square,
    /// Square the piece landed on.
    pub to: Square,
    /// Squares whose occupants were captured and removed.
    pub captured: SquareSet,
}

impl Move {
    /// Return `true` if the move removed at least one enemy piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_nonempty()
    }
}

/// Standard draughts notation: `c3-d4` for a quiet move, `c3xe5` for a capture.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
