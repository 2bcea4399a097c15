//! Piece ranks: men and kings.

use std::fmt;

/// The rank of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// Unpromoted piece: one step forward, captures one step in any diagonal.
    Man = 0,
    /// Promoted piece: slides any distance along a clear diagonal.
    King = 1,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 2;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 2] = [PieceKind::Man, PieceKind::King];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the layout character for this kind (lowercase).
    #[inline]
    pub const fn layout_char(self) -> char {
        match self {
            PieceKind::Man => 'm',
            PieceKind::King => 'k',
        }
    }

    /// Parse a layout character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'm' => Some(PieceKind::Man),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "man"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn layout_char_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_layout_char(kind.layout_char()), Some(kind));
            assert_eq!(
                PieceKind::from_layout_char(kind.layout_char().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_layout_char('q'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Man), "man");
        assert_eq!(format!("{}", PieceKind::King), "king");
    }
}
