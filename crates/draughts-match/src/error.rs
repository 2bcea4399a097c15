//! Errors returned by the match controller.

use std::fmt;

use draughts_core::{BoardError, RulesError, Square};

/// Why a destination was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// The selected piece cannot reach the square at all.
    NotReachable,
    /// A capture is available this turn, so quiet moves (and pieces that
    /// cannot capture) are not allowed.
    CaptureRequired,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::NotReachable => write!(f, "square not reachable"),
            IllegalReason::CaptureRequired => write!(f, "a capture is required"),
        }
    }
}

/// Errors from driving a match.
///
/// [`MatchError::IllegalMove`] is an ordinary outcome of user input; the match
/// is left exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// The destination is not legal under the current rules.
    #[error("illegal move {from} to {to}: {reason}")]
    IllegalMove {
        /// Square of the selected piece.
        from: Square,
        /// Requested destination.
        to: Square,
        /// Which rule refused it.
        reason: IllegalReason,
    },

    /// A move was attempted with no piece selected.
    #[error("no piece is selected")]
    NoSelection,

    /// A click did not map onto the board.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The board refused the move after the controller accepted it.
    #[error(transparent)]
    Rules(#[from] RulesError),
}

#[cfg(test)]
mod tests {
    use super::{IllegalReason, MatchError};
    use draughts_core::Square;

    #[test]
    fn illegal_move_display() {
        let err = MatchError::IllegalMove {
            from: Square::from_algebraic("b3").unwrap(),
            to: Square::from_algebraic("a4").unwrap(),
            reason: IllegalReason::CaptureRequired,
        };
        assert_eq!(format!("{err}"), "illegal move b3 to a4: a capture is required");
    }
}
