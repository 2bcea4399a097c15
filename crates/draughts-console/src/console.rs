//! The console loop: read commands, drive the match, print replies.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use draughts_core::{BoardGeometry, Square, SquareSet};
use draughts_match::{Match, MatchState};

use crate::command::{Command, ConsoleOption, parse_command};
use crate::error::ConsoleError;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Pixel layout used to map `tap` coordinates onto squares.
    pub geometry: BoardGeometry,
    /// Print the board after every click.
    pub autoshow: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::default(),
            autoshow: false,
        }
    }
}

/// A console session holding one match and its settings.
pub struct Console {
    game: Match,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console with a fresh match and default settings.
    pub fn new() -> Self {
        Self {
            game: Match::new(),
            config: ConsoleConfig::default(),
        }
    }

    #[inline]
    pub fn game(&self) -> &Match {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Rejected commands are answered with `error: <message>` and the loop
    /// continues; only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ConsoleError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut output),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {}
                Err(ConsoleError::Io { source }) => return Err(ConsoleError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("console shutting down");
        Ok(())
    }

    /// Apply one parsed command, writing any reply to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ConsoleError> {
        match cmd {
            Command::New => {
                self.game.reset();
                self.print_state(out, self.game.state())?;
            }
            Command::Click(square) => {
                let state = self.game.handle_square_clicked(square)?;
                self.after_click(out, state)?;
            }
            Command::Tap { x, y } => {
                let state = self.game.handle_pixel_clicked(&self.config.geometry, x, y)?;
                self.after_click(out, state)?;
            }
            Command::Moves(square) => self.handle_moves(out, square)?,
            Command::Hint => {
                writeln!(out, "movable {}", list(self.game.movable_pieces()))?;
                writeln!(out, "capturing {}", list(self.game.capturing_pieces()))?;
            }
            Command::Show => writeln!(out, "{}", self.game.board().pretty())?,
            Command::Status => self.print_state(out, self.game.state())?,
            Command::Position { board, active } => {
                self.game = Match::from_board(board, active);
                self.print_state(out, self.game.state())?;
            }
            Command::Abandon => {
                self.game.abandon();
                self.print_state(out, self.game.state())?;
            }
            Command::Set(option) => self.handle_set(option)?,
            Command::Quit => {}
            Command::Unknown(name) => {
                if !name.is_empty() {
                    debug!(cmd = %name, "ignoring unknown command");
                }
            }
        }
        Ok(())
    }

    fn after_click<W: Write>(&self, out: &mut W, state: MatchState) -> Result<(), ConsoleError> {
        self.print_state(out, state)?;
        if self.config.autoshow {
            writeln!(out, "{}", self.game.board().pretty())?;
        }
        Ok(())
    }

    fn print_state<W: Write>(&self, out: &mut W, state: MatchState) -> Result<(), ConsoleError> {
        writeln!(out, "{state}")?;
        Ok(())
    }

    fn handle_moves<W: Write>(&self, out: &mut W, square: Square) -> Result<(), ConsoleError> {
        match self.game.occupant(square) {
            Some(piece) => {
                let dest = self.game.destinations(piece.id());
                writeln!(out, "{piece}")?;
                writeln!(out, "moves {}", list(dest.moves))?;
                writeln!(out, "captures {}", list(dest.captures))?;
            }
            None => writeln!(out, "{square} is empty")?,
        }
        Ok(())
    }

    /// Apply a setting. A tile or margin that would make the board edge
    /// overflow is refused and the previous geometry is kept.
    fn handle_set(&mut self, option: ConsoleOption) -> Result<(), ConsoleError> {
        let geometry = self.config.geometry;
        let (name, value, resized) = match option {
            ConsoleOption::Tile(tile) => ("tile", tile, BoardGeometry::new(tile, geometry.margin())),
            ConsoleOption::Margin(margin) => {
                ("margin", margin, BoardGeometry::new(geometry.tile(), margin))
            }
            ConsoleOption::AutoShow(on) => {
                self.config.autoshow = on;
                debug!(config = ?self.config, "console setting changed");
                return Ok(());
            }
        };

        self.config.geometry = resized.ok_or_else(|| ConsoleError::InvalidValue {
            param: name.to_string(),
            value: value.to_string(),
        })?;
        debug!(config = ?self.config, "console setting changed");
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Space-separated squares, or `-` for none.
fn list(set: SquareSet) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.to_string()
    }
}
