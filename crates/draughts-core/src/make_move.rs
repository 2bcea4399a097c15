//! Move execution and promotion against a [`BoardGrid`].

use tracing::debug;

use crate::board::BoardGrid;
use crate::draughts_move::Move;
use crate::error::RulesError;
use crate::movegen::generate;
use crate::piece::PieceId;
use crate::square::Square;
use crate::square_set::SquareSet;

impl BoardGrid {
    /// Move the piece `id` to `to`, capturing if `to` is a capture landing.
    ///
    /// Destinations are regenerated from the current board, so a stale
    /// caller-side view cannot smuggle in an illegal move. On a capture every
    /// enemy piece between the origin and the landing square is removed.
    pub fn execute(&mut self, id: PieceId, to: Square) -> Result<Move, RulesError> {
        let piece = *self.piece(id).ok_or(RulesError::MissingPiece { id })?;
        let from = piece.square();
        let dest = generate(self, &piece);

        let mut captured = SquareSet::EMPTY;
        if dest.captures.contains(to) {
            for sq in BoardGrid::squares_between(from, to) {
                let is_enemy = self
                    .occupant(sq)
                    .is_some_and(|other| other.owner() != piece.owner());
                if is_enemy {
                    self.remove(sq);
                    captured.insert(sq);
                }
            }
        } else if !dest.moves.contains(to) {
            return Err(RulesError::IllegalDestination { from, to });
        }

        self.relocate(id, from, to);
        let mv = Move {
            piece: id,
            from,
            to,
            captured,
        };
        debug!(%mv, "executed move");
        Ok(mv)
    }

    /// Clear `from`, occupy `to`, and keep the piece's own square in step.
    fn relocate(&mut self, id: PieceId, from: Square, to: Square) {
        self.clear(from);
        self.place(id, to);
        if let Some(piece) = self.piece_mut(id) {
            piece.set_square(to);
        }
    }

    /// Promote the piece `id` if it is a man on the opponent's back rank.
    ///
    /// Returns `true` if a promotion happened. Kings, men elsewhere and
    /// captured pieces are left alone.
    pub fn try_promote(&mut self, id: PieceId) -> bool {
        let promoted = self.piece_mut(id).is_some_and(|piece| piece.try_promote());
        if promoted {
            debug!(piece = %id, "promoted to king");
        }
        promoted
    }
}

#[cfg(test)]
mod tests {
    use crate::board::BoardGrid;
    use crate::color::Color;
    use crate::error::RulesError;
    use crate::piece::PieceId;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn id_at(board: &BoardGrid, s: &str) -> PieceId {
        board.occupant(sq(s)).unwrap().id()
    }

    #[test]
    fn quiet_move_relocates() {
        let mut board = BoardGrid::starting();
        let id = id_at(&board, "d3");
        let mv = board.execute(id, sq("e4")).unwrap();

        assert!(!mv.is_capture());
        assert_eq!((mv.from, mv.to), (sq("d3"), sq("e4")));
        assert!(board.is_empty(sq("d3")));
        assert_eq!(board.occupant(sq("e4")).map(|p| p.id()), Some(id));
        assert_eq!(board.piece(id).unwrap().square(), sq("e4"));
        assert_eq!(board.count(Color::Light), 12);
    }

    #[test]
    fn man_capture_removes_jumped_piece() {
        let mut board: BoardGrid = "8/8/8/8/4m3/3M4/8/8".parse().unwrap();
        let id = id_at(&board, "d3");
        let victim = id_at(&board, "e4");
        let mv = board.execute(id, sq("f5")).unwrap();

        assert!(mv.is_capture());
        assert_eq!(mv.captured, sq("e4").set());
        assert!(board.is_empty(sq("e4")));
        assert!(board.piece(victim).is_none());
        assert_eq!(board.count(Color::Dark), 0);
        assert_eq!(board.piece(id).unwrap().square(), sq("f5"));
    }

    #[test]
    fn king_long_capture_scans_empty_squares() {
        let mut board: BoardGrid = "8/8/8/8/8/3m4/8/1K6".parse().unwrap();
        let id = id_at(&board, "b1");
        let mv = board.execute(id, sq("g6")).unwrap();

        assert_eq!(mv.captured, sq("d3").set());
        assert_eq!(format!("{mv}"), "b1xg6");
        assert!(board.is_empty(sq("d3")));
        assert!(board.is_empty(sq("b1")));
        assert_eq!(board.occupant(sq("g6")).map(|p| p.id()), Some(id));
    }

    #[test]
    fn illegal_destination_leaves_board_untouched() {
        let mut board = BoardGrid::starting();
        let before = board.clone();
        let id = id_at(&board, "d3");
        assert_eq!(
            board.execute(id, sq("d5")),
            Err(RulesError::IllegalDestination {
                from: sq("d3"),
                to: sq("d5")
            })
        );
        // Backward step is not a move for a man either.
        assert!(board.execute(id_at(&board, "b3"), sq("a2")).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn missing_piece() {
        let mut board: BoardGrid = "8/8/8/8/4m3/3M4/8/8".parse().unwrap();
        let victim = id_at(&board, "e4");
        board.execute(id_at(&board, "d3"), sq("f5")).unwrap();
        assert_eq!(
            board.execute(victim, sq("d3")),
            Err(RulesError::MissingPiece { id: victim })
        );
    }

    #[test]
    fn try_promote_on_back_rank() {
        let mut board: BoardGrid = "8/1M6/8/8/8/8/8/8".parse().unwrap();
        let id = id_at(&board, "b7");
        board.execute(id, sq("c8")).unwrap();
        assert!(board.try_promote(id));
        assert_eq!(board.piece(id).unwrap().kind(), PieceKind::King);
        assert!(!board.try_promote(id));
    }

    #[test]
    fn try_promote_elsewhere_is_noop() {
        let mut board = BoardGrid::starting();
        let id = id_at(&board, "d3");
        assert!(!board.try_promote(id));
        assert_eq!(board.piece(id).unwrap().kind(), PieceKind::Man);
    }
}
