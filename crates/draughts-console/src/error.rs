//! Console protocol errors.

use draughts_core::LayoutError;
use draughts_match::MatchError;

/// Errors that can occur while reading and running console commands.
///
/// Everything except [`ConsoleError::Io`] is reported back on the output
/// and the loop keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command was given fewer arguments than it needs.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was short of arguments.
        command: String,
    },

    /// A square argument is not algebraic notation for a board square.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The token that failed to parse.
        value: String,
    },

    /// A numeric or on/off argument could not be parsed or is out of range.
    #[error("invalid value for {param}: {value}")]
    InvalidValue {
        /// Name of the argument.
        param: String,
        /// The token that failed to parse.
        value: String,
    },

    /// The side to move in `position` is neither `light` nor `dark`.
    #[error("invalid side: {value}")]
    InvalidSide {
        /// The token that failed to parse.
        value: String,
    },

    /// `set` named a setting that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The unrecognized setting name.
        name: String,
    },

    /// The layout in `position` could not be parsed.
    #[error("invalid layout: {source}")]
    Layout {
        /// The underlying layout error.
        #[from]
        source: LayoutError,
    },

    /// The match refused the input.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
