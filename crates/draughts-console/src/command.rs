//! Console command parsing.

use draughts_core::{BoardGrid, Color, Square};

use crate::error::ConsoleError;

/// A setting adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleOption {
    /// Tile edge in pixels, used by `tap`.
    Tile(u32),
    /// Frame width in pixels, used by `tap`.
    Margin(u32),
    /// Print the board after every click.
    AutoShow(bool),
}

/// A parsed console command.
#[derive(Debug)]
pub enum Command {
    /// `new` or `reset` -- start over from the standard setup.
    New,
    /// `click <square>` -- click a square.
    Click(Square),
    /// `tap <x> <y>` -- click a pixel of the rendered board.
    Tap {
        /// Horizontal pixel coordinate.
        x: f64,
        /// Vertical pixel coordinate.
        y: f64,
    },
    /// `moves <square>` -- list destinations of the piece on a square.
    Moves(Square),
    /// `hint` -- list pieces of the side to move that can move or capture.
    Hint,
    /// `show` -- print the board.
    Show,
    /// `status` -- print the match state.
    Status,
    /// `position` -- load a position and side to move.
    Position {
        /// The parsed board.
        board: BoardGrid,
        /// Side to move.
        active: Color,
    },
    /// `abandon` -- end the match as a draw.
    Abandon,
    /// `set` -- change a console setting.
    Set(ConsoleOption),
    /// `quit` -- leave the console.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let name = tokens[0];
    let args = &tokens[1..];
    match name {
        "new" | "reset" => Ok(Command::New),
        "click" => Ok(Command::Click(parse_square(args.first(), name)?)),
        "tap" => Ok(Command::Tap {
            x: parse_value(args.first(), name, "x")?,
            y: parse_value(args.get(1), name, "y")?,
        }),
        "moves" => Ok(Command::Moves(parse_square(args.first(), name)?)),
        "hint" => Ok(Command::Hint),
        "show" => Ok(Command::Show),
        "status" => Ok(Command::Status),
        "position" => parse_position(args),
        "abandon" => Ok(Command::Abandon),
        "set" => parse_set(args),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [light|dark]`
/// - `position <layout> [light|dark]`
///
/// The side to move defaults to Light.
fn parse_position(tokens: &[&str]) -> Result<Command, ConsoleError> {
    let Some(&layout) = tokens.first() else {
        return Err(missing("position"));
    };

    let board = if layout == "startpos" {
        BoardGrid::starting()
    } else {
        layout.parse::<BoardGrid>()?
    };

    let active = match tokens.get(1) {
        None | Some(&"light") => Color::Light,
        Some(&"dark") => Color::Dark,
        Some(other) => {
            return Err(ConsoleError::InvalidSide {
                value: other.to_string(),
            });
        }
    };

    Ok(Command::Position { board, active })
}

/// Parse the `set <name> <value>` command arguments.
fn parse_set(tokens: &[&str]) -> Result<Command, ConsoleError> {
    let Some(&name) = tokens.first() else {
        return Err(missing("set"));
    };

    let option = match name {
        "tile" => {
            let tile: u32 = parse_value(tokens.get(1), "set", name)?;
            if tile == 0 {
                return Err(ConsoleError::InvalidValue {
                    param: name.to_string(),
                    value: "0".to_string(),
                });
            }
            ConsoleOption::Tile(tile)
        }
        "margin" => ConsoleOption::Margin(parse_value(tokens.get(1), "set", name)?),
        "autoshow" => {
            let value = tokens.get(1).ok_or_else(|| missing("set"))?;
            match *value {
                "on" | "true" => ConsoleOption::AutoShow(true),
                "off" | "false" => ConsoleOption::AutoShow(false),
                _ => {
                    return Err(ConsoleError::InvalidValue {
                        param: name.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        _ => {
            return Err(ConsoleError::UnknownOption {
                name: name.to_string(),
            });
        }
    };

    Ok(Command::Set(option))
}

fn missing(command: &str) -> ConsoleError {
    ConsoleError::MissingArgument {
        command: command.to_string(),
    }
}

/// Parse an algebraic square from a token.
fn parse_square(token: Option<&&str>, command: &str) -> Result<Square, ConsoleError> {
    let value = token.ok_or_else(|| missing(command))?;
    Square::from_algebraic(value).ok_or_else(|| ConsoleError::InvalidSquare {
        value: value.to_string(),
    })
}

/// Parse a numeric value from a token.
fn parse_value<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &str,
    param: &str,
) -> Result<T, ConsoleError> {
    let value = token.ok_or_else(|| missing(command))?;
    value.parse().map_err(|_| ConsoleError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
