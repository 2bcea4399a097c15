//! Legal quiet-move and capture generation for single pieces.

mod ray;

use crate::board::BoardGrid;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece::{Piece, PieceId};
use crate::square_set::SquareSet;

use self::ray::cast_ray;

/// The squares a piece may reach this turn.
///
/// `moves` and `captures` are always disjoint: a landing square reached by
/// jumping an enemy is only ever a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Destinations {
    /// Quiet moves: relocations that capture nothing.
    pub moves: SquareSet,
    /// Landing squares of captures.
    pub captures: SquareSet,
}

impl Destinations {
    /// Return `true` if the piece can go anywhere at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }

    /// Return `true` if at least one capture is available.
    #[inline]
    pub fn can_capture(&self) -> bool {
        self.captures.is_nonempty()
    }

    /// Return `true` if at least one quiet move is available.
    #[inline]
    pub fn can_move(&self) -> bool {
        self.moves.is_nonempty()
    }
}

/// Generate the quiet moves and captures of `piece` on `board`.
///
/// Men step one square forward and capture one square in any diagonal.
/// Kings slide along clear diagonals and capture by jumping exactly one
/// enemy onto any empty square beyond it. Chained jumps are not followed
/// here; each hop of a chain is a separate call after the previous capture.
pub fn generate(board: &BoardGrid, piece: &Piece) -> Destinations {
    let mut dest = Destinations::default();
    for dir in Direction::ALL {
        cast_ray(board, piece, dir, &mut dest);
    }
    dest
}

/// Generate destinations for every piece of `side`, in square order.
pub fn generate_side(board: &BoardGrid, side: Color) -> Vec<(PieceId, Destinations)> {
    board
        .pieces_of(side)
        .map(|piece| (piece.id(), generate(board, piece)))
        .collect()
}

/// Return `true` if any piece of `side` has a capture available.
pub fn side_can_capture(board: &BoardGrid, side: Color) -> bool {
    board
        .pieces_of(side)
        .any(|piece| generate(board, piece).can_capture())
}
