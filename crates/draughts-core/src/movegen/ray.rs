//! Single-direction ray casting shared by men and kings.

use crate::board::BoardGrid;
use crate::direction::Direction;
use crate::piece::Piece;

use super::Destinations;

/// Walk from `piece` along `dir`, adding quiet moves and capture landings to `dest`.
///
/// The walk stops at the board edge, at a friendly piece, at a second enemy,
/// and for men after the first square that yields a move or a landing.
pub(super) fn cast_ray(board: &BoardGrid, piece: &Piece, dir: Direction, dest: &mut Destinations) {
    let is_king = piece.is_king();
    let forward = dir.d_row() == piece.owner().forward();
    let mut attacking = false;
    let mut current = piece.square();

    while let Some(next) = current.offset(dir.d_row(), dir.d_column()) {
        current = next;
        match board.occupant(next) {
            None if attacking => {
                dest.captures.insert(next);
                dest.moves.remove(next);
                if !is_king {
                    return;
                }
            }
            None => {
                // Men never step backward without a capture.
                if forward || is_king {
                    dest.moves.insert(next);
                }
                if !is_king {
                    return;
                }
            }
            Some(other) if other.owner() == piece.owner() => return,
            // Only one enemy may be jumped per hop.
            Some(_) if attacking => return,
            Some(_) => attacking = true,
        }
    }
}
