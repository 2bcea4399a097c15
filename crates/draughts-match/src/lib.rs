//! Turn sequencing and adjudication for a single draughts match.

pub mod controller;
pub mod error;
pub mod state;

pub use controller::Match;
pub use error::{IllegalReason, MatchError};
pub use state::{MatchState, Outcome, Phase};
