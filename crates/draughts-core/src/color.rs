//! The two sides of a match.

use std::fmt;
use std::ops::Not;

/// A side: Light sets up on rows 1-3 and moves first, Dark on rows 6-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    /// Return the index (0 for Light, 1 for Dark).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta pointing from this side's back rank toward the opponent's.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row a man of this color must reach to be promoted.
    #[inline]
    pub const fn promotion_row(self) -> i32 {
        match self {
            Color::Light => 8,
            Color::Dark => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::Light.flip(), Color::Dark);
        assert_eq!(Color::Dark.flip(), Color::Light);
        assert_eq!(!!Color::Light, Color::Light);
    }

    #[test]
    fn forward_points_at_promotion_row() {
        assert_eq!(Color::Light.forward(), 1);
        assert_eq!(Color::Dark.forward(), -1);
        assert_eq!(Color::Light.promotion_row(), 8);
        assert_eq!(Color::Dark.promotion_row(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Light), "light");
        assert_eq!(format!("{}", Color::Dark), "dark");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Color::ALL.len(), Color::COUNT);
        assert_eq!(Color::ALL[Color::Dark.index()], Color::Dark);
    }
}
