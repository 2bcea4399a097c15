//! Mapping between board squares and pixel positions on a rendered board.
//!
//! The board is drawn as a square of `margin + 8 * tile + margin` pixels.
//! `x` grows with the column and `y` with the row, so a1 sits in the
//! bottom-left corner when `y` points up.

use crate::error::BoardError;
use crate::square::Square;

/// Pixel dimensions of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    tile: u32,
    margin: u32,
}

impl BoardGeometry {
    /// Default tile edge in pixels.
    pub const DEFAULT_TILE: u32 = 64;
    /// Default frame width in pixels.
    pub const DEFAULT_MARGIN: u32 = 16;

    /// Create a geometry.
    ///
    /// Returns `None` for a zero tile size, or if the full board edge
    /// (`margin + 8 * tile + margin`) does not fit in a `u32`.
    pub const fn new(tile: u32, margin: u32) -> Option<BoardGeometry> {
        if tile == 0 {
            return None;
        }
        let Some(tiles) = tile.checked_mul(Square::SIDE as u32) else {
            return None;
        };
        let Some(margins) = margin.checked_mul(2) else {
            return None;
        };
        if tiles.checked_add(margins).is_none() {
            return None;
        }
        Some(BoardGeometry { tile, margin })
    }

    #[inline]
    pub const fn tile(&self) -> u32 {
        self.tile
    }

    #[inline]
    pub const fn margin(&self) -> u32 {
        self.margin
    }

    /// Edge length of the whole board including both margins.
    #[inline]
    pub const fn side_length(&self) -> u32 {
        self.margin * 2 + self.tile * Square::SIDE as u32
    }

    /// Return the pixel at the center of `sq` as `(x, y)`.
    pub const fn to_pixel_center(&self, sq: Square) -> (u32, u32) {
        let first = self.margin + self.tile / 2;
        let x = first + (sq.column() as u32 - 1) * self.tile;
        let y = first + (sq.row() as u32 - 1) * self.tile;
        (x, y)
    }

    /// Return the square containing the pixel `(x, y)`.
    ///
    /// Fails with [`BoardError::InvalidCoordinates`] if either coordinate is
    /// negative, fractional or not finite, and with
    /// [`BoardError::InvalidSquare`] if the pixel lies in the margin or past
    /// the last tile.
    pub fn to_square(&self, x: f64, y: f64) -> Result<Square, BoardError> {
        let (Some(px), Some(py)) = (whole_pixel(x), whole_pixel(y)) else {
            return Err(BoardError::InvalidCoordinates { x, y });
        };

        let column = self.tile_index(px);
        let row = self.tile_index(py);
        Square::new(row, column)
    }

    /// 1-based tile index along one axis; zero or negative inside the leading margin.
    fn tile_index(&self, pixel: i64) -> i32 {
        let index = (pixel - self.margin as i64).div_euclid(self.tile as i64) + 1;
        i32::try_from(index).unwrap_or(i32::MAX)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        BoardGeometry {
            tile: BoardGeometry::DEFAULT_TILE,
            margin: BoardGeometry::DEFAULT_MARGIN,
        }
    }
}

/// Accept only finite, non-negative, integral pixel values.
fn whole_pixel(value: f64) -> Option<i64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
