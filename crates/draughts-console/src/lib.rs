//! Line-oriented console for playing a draughts match.

pub mod command;
pub mod console;
pub mod error;

pub use command::{Command, ConsoleOption};
pub use console::{Console, ConsoleConfig};
pub use error::ConsoleError;
