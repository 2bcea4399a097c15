//! Core draughts types: board representation, move generation, and execution.

mod board;
mod color;
mod direction;
mod draughts_move;
mod error;
mod layout;
mod make_move;
pub mod movegen;
mod piece;
mod piece_kind;
mod pixel;
mod square;
mod square_set;

pub use board::{BoardGrid, PrettyBoard};
pub use color::Color;
pub use direction::Direction;
pub use draughts_move::Move;
pub use error::{BoardError, LayoutError, RulesError};
pub use layout::STARTING_LAYOUT;
pub use movegen::{Destinations, generate, generate_side, side_can_capture};
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use pixel::BoardGeometry;
pub use square::Square;
pub use square_set::SquareSet;
