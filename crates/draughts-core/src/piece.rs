//! Pieces on the board and the handles that refer to them.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Stable handle to a piece stored in a [`BoardGrid`](crate::BoardGrid).
///
/// A handle outlives its piece: once the piece is captured, lookups through
/// the handle return `None` instead of dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

impl PieceId {
    /// Number of distinct handles; a grid never stores more pieces than this.
    pub const LIMIT: usize = u32::MAX as usize;

    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        debug_assert!(index < PieceId::LIMIT);
        PieceId(index as u32)
    }

    /// Return the slot index in the grid's piece storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A checker: identity, owner, rank and current square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    owner: Color,
    kind: PieceKind,
    square: Square,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, owner: Color, kind: PieceKind, square: Square) -> Piece {
        Piece {
            id,
            owner,
            kind,
            square,
        }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn owner(&self) -> Color {
        self.owner
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Square the piece currently stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Promote a man standing on the opponent's back rank to king.
    ///
    /// Returns `true` if the piece was promoted. Calling this on a king, or on
    /// a man anywhere else, does nothing.
    pub fn try_promote(&mut self) -> bool {
        if self.kind == PieceKind::Man && self.square.row() == self.owner.promotion_row() {
            self.kind = PieceKind::King;
            true
        } else {
            false
        }
    }

    /// Return the layout character: uppercase for Light, lowercase for Dark.
    #[inline]
    pub fn layout_char(&self) -> char {
        let base = self.kind.layout_char();
        match self.owner {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.owner, self.kind, self.square)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({} {}@{})", self.id, self.layout_char(), self.square)
    }
}
