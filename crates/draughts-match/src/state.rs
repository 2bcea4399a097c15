//! Observable match state: whose turn it is, what is selected, and how it ended.

use std::fmt;

use draughts_core::{Color, PieceId};

/// Where the match is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the side to move to pick a piece.
    AwaitingSelection,
    /// A piece is selected and the next click is a destination.
    PieceSelected,
    /// Terminal: the outcome is decided and no input is accepted.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingSelection => write!(f, "awaiting-selection"),
            Phase::PieceSelected => write!(f, "piece-selected"),
            Phase::GameOver => write!(f, "game-over"),
        }
    }
}

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    LightWins,
    DarkWins,
    Draw,
}

impl Outcome {
    /// Return the outcome in which `color` wins.
    #[inline]
    pub const fn win_for(color: Color) -> Outcome {
        match color {
            Color::Light => Outcome::LightWins,
            Color::Dark => Outcome::DarkWins,
        }
    }

    /// Return the winning side, or `None` for a draw.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::LightWins => Some(Color::Light),
            Outcome::DarkWins => Some(Color::Dark),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::LightWins => write!(f, "light wins"),
            Outcome::DarkWins => write!(f, "dark wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Snapshot of the match returned after every input event.
///
/// `selected` is a handle, not a reference; it never outlives the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    /// Side to move.
    pub active_player: Color,
    /// Currently selected piece, if any.
    pub selected: Option<PieceId>,
    /// Turn-cycle phase.
    pub phase: Phase,
    /// Set once the phase is [`Phase::GameOver`].
    pub outcome: Option<Outcome>,
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {} phase {}", self.active_player, self.phase)?;
        if let Some(id) = self.selected {
            write!(f, " selected {id}")?;
        }
        if let Some(outcome) = self.outcome {
            write!(f, " outcome {outcome}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchState, Outcome, Phase};
    use draughts_core::Color;

    #[test]
    fn win_for_and_winner_agree() {
        for color in Color::ALL {
            assert_eq!(Outcome::win_for(color).winner(), Some(color));
        }
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn display_state() {
        let state = MatchState {
            active_player: Color::Dark,
            selected: None,
            phase: Phase::GameOver,
            outcome: Some(Outcome::Draw),
        };
        assert_eq!(format!("{state}"), "turn dark phase game-over outcome draw");
    }
}
