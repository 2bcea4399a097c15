//! Error types for board addressing, layout parsing, and move execution.

use std::fmt;

use crate::piece::PieceId;
use crate::square::Square;

/// Errors from addressing the board: bad coordinates or unusable squares.
///
/// These are caller bugs (usually an upstream coordinate-mapping error) and
/// are always surfaced, never swallowed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// Row or column outside `1..=8`.
    #[error("invalid square: row {row}, column {column}")]
    InvalidSquare {
        /// The offending row.
        row: i32,
        /// The offending column.
        column: i32,
    },
    /// Pixel coordinates that are negative, fractional, or not finite.
    #[error("invalid pixel coordinates: ({x}, {y})")]
    InvalidCoordinates {
        /// Horizontal pixel coordinate.
        x: f64,
        /// Vertical pixel coordinate.
        y: f64,
    },
    /// A piece was placed on a square where `row + column` is even.
    #[error("square {square} cannot hold a piece")]
    UnusableSquare {
        /// The offending square.
        square: Square,
    },
    /// Every piece handle has been handed out.
    #[error("board cannot hold any more pieces")]
    PieceLimit,
}

/// Errors from executing a move against the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The destination is neither a legal quiet move nor a legal capture.
    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination {
        /// Square of the moving piece.
        from: Square,
        /// Requested destination.
        to: Square,
    },
    /// The handle does not refer to a piece on the board.
    #[error("no piece with id {id} on the board")]
    MissingPiece {
        /// The stale handle.
        id: PieceId,
    },
}

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The placement does not have exactly 8 rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    BadRowLength {
        /// Zero-based row index within the string (0 = row 8).
        row_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// A piece sits on a square that cannot hold one.
    InvalidBoard {
        /// The underlying board error.
        source: BoardError,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "expected 8 rows in layout, found {found}")
            }
            LayoutError::BadRowLength { row_index, length } => {
                write!(f, "row {row_index} describes {length} squares, expected 8")
            }
            LayoutError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            LayoutError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for LayoutError {
    fn from(source: BoardError) -> Self {
        LayoutError::InvalidBoard { source }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardError, LayoutError, RulesError};
    use crate::square::Square;

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidSquare { row: 9, column: 1 };
        assert_eq!(format!("{err}"), "invalid square: row 9, column 1");

        let err = BoardError::InvalidCoordinates { x: -1.0, y: 2.5 };
        assert_eq!(format!("{err}"), "invalid pixel coordinates: (-1, 2.5)");
    }

    #[test]
    fn rules_error_display() {
        let err = RulesError::IllegalDestination {
            from: Square::from_algebraic("b3").unwrap(),
            to: Square::from_algebraic("b5").unwrap(),
        };
        assert_eq!(format!("{err}"), "b5 is not a legal destination from b3");
    }

    #[test]
    fn layout_error_display() {
        let err = LayoutError::WrongRowCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 8 rows in layout, found 4");
    }

    #[test]
    fn layout_error_from_board_error() {
        let square = Square::from_algebraic("a1").unwrap();
        let layout_err: LayoutError = BoardError::UnusableSquare { square }.into();
        assert!(matches!(layout_err, LayoutError::InvalidBoard { .. }));
        assert_eq!(format!("{layout_err}"), "invalid board: square a1 cannot hold a piece");
    }
}
