//! The four diagonal directions a piece can travel.

/// A diagonal direction. North is toward row 8, east toward column h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Row delta of one step.
    #[inline]
    pub const fn d_row(self) -> i32 {
        match self {
            Direction::NorthEast | Direction::NorthWest => 1,
            Direction::SouthEast | Direction::SouthWest => -1,
        }
    }

    /// Column delta of one step.
    #[inline]
    pub const fn d_column(self) -> i32 {
        match self {
            Direction::NorthEast | Direction::SouthEast => 1,
            Direction::NorthWest | Direction::SouthWest => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn deltas_cover_all_sign_pairs() {
        let mut pairs: Vec<(i32, i32)> = Direction::ALL
            .iter()
            .map(|d| (d.d_row(), d.d_column()))
            .collect();
        pairs.sort();
        assert_eq!(pairs, vec![(-1, -1), (-1, 1), (1, -1), (1, 1)]);
    }
}
