//! Layout strings: a FEN-like text form of the piece placement.
//!
//! Eight `/`-separated rows, row 8 first, columns a to h. Digits are runs of
//! empty squares; `M`/`K` are Light men/kings and `m`/`k` Dark ones.

use std::fmt;
use std::str::FromStr;

use crate::board::BoardGrid;
use crate::color::Color;
use crate::error::LayoutError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The layout string for the standard starting position.
pub const STARTING_LAYOUT: &str = "m1m1m1m1/1m1m1m1m/m1m1m1m1/8/8/1M1M1M1M/M1M1M1M1/1M1M1M1M";

impl FromStr for BoardGrid {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<BoardGrid, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut placement: [Option<(Color, PieceKind)>; Square::COUNT] = [None; Square::COUNT];

        for (row_index, row_str) in rows.iter().enumerate() {
            // Layout rows go from 8 to 1 (top to bottom)
            let row = 8 - row_index as i32;
            let mut column: i32 = 1;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    column += digit as i32;
                } else {
                    let kind = PieceKind::from_layout_char(c)
                        .ok_or(LayoutError::InvalidPieceChar { character: c })?;
                    let owner = if c.is_ascii_uppercase() {
                        Color::Light
                    } else {
                        Color::Dark
                    };

                    if column > 8 {
                        return Err(LayoutError::BadRowLength {
                            row_index,
                            length: column as usize,
                        });
                    }

                    let sq = Square::new(row, column)?;
                    placement[sq.index()] = Some((owner, kind));
                    column += 1;
                }
            }

            if column != 9 {
                return Err(LayoutError::BadRowLength {
                    row_index,
                    length: (column - 1) as usize,
                });
            }
        }

        // Spawn in square order so equal placements produce equal grids.
        let mut board = BoardGrid::empty();
        for sq in Square::all() {
            if let Some((owner, kind)) = placement[sq.index()] {
                board.spawn(owner, kind, sq)?;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for BoardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            let mut empty_count = 0u8;

            for column in 1..=8 {
                let sq = Square::new(row, column).map_err(|_| fmt::Error)?;
                match self.occupant(sq) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.layout_char())?;
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row > 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
