//! The board grid: which piece, if any, occupies each square.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// An 8x8 surface of optional piece occupants.
///
/// Pieces live in an append-only storage indexed by [`PieceId`]; the slot
/// table maps each square to the handle of its occupant. Captured pieces are
/// dropped from storage so stale handles resolve to `None`.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardGrid {
    /// Occupant handle for each square, indexed by [`Square::index()`].
    slots: [Option<PieceId>; Square::COUNT],
    /// Piece storage, indexed by [`PieceId::index()`].
    pieces: Vec<Option<Piece>>,
}

impl BoardGrid {
    /// Return a board with no pieces.
    pub fn empty() -> BoardGrid {
        BoardGrid {
            slots: [None; Square::COUNT],
            pieces: Vec::new(),
        }
    }

    /// Return the standard setup: 12 men per side on the three outer rows.
    pub fn starting() -> BoardGrid {
        let mut board = BoardGrid::empty();
        for sq in Square::all().filter(|sq| sq.can_spawn()) {
            let owner = if sq.row() <= 3 { Color::Light } else { Color::Dark };
            board.insert_piece(owner, PieceKind::Man, sq);
        }
        board
    }

    /// Create a new piece on `square`, destroying any previous occupant.
    ///
    /// Handles are never reused, so a grid that has already handed out
    /// [`PieceId::LIMIT`] handles refuses further spawns.
    pub fn spawn(&mut self, owner: Color, kind: PieceKind, square: Square) -> Result<PieceId, BoardError> {
        if !square.is_usable() {
            return Err(BoardError::UnusableSquare { square });
        }
        if self.pieces.len() >= PieceId::LIMIT {
            return Err(BoardError::PieceLimit);
        }
        self.remove(square);
        Ok(self.insert_piece(owner, kind, square))
    }

    fn insert_piece(&mut self, owner: Color, kind: PieceKind, square: Square) -> PieceId {
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(Some(Piece::new(id, owner, kind, square)));
        self.slots[square.index()] = Some(id);
        id
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<&Piece> {
        self.slots[sq.index()].and_then(|id| self.piece(id))
    }

    /// Return the piece at raw 1-based coordinates.
    ///
    /// Fails with [`BoardError::InvalidSquare`] if either coordinate is out of range.
    pub fn occupant_at(&self, row: i32, column: i32) -> Result<Option<&Piece>, BoardError> {
        let sq = Square::new(row, column)?;
        Ok(self.occupant(sq))
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.occupant(sq).is_none()
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.is_empty(sq)
    }

    /// Look up a piece by handle. Returns `None` once the piece is captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Point `square` at the piece `id`.
    ///
    /// Only the slot is written; keeping the piece's own square in step is the
    /// caller's job.
    #[inline]
    pub fn place(&mut self, id: PieceId, square: Square) {
        self.slots[square.index()] = Some(id);
    }

    /// Empty the slot at `square`, returning the handle that was there.
    ///
    /// The piece itself stays in storage.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<PieceId> {
        self.slots[square.index()].take()
    }

    /// Empty the slot at `square` and destroy its occupant.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let id = self.clear(square)?;
        self.pieces.get_mut(id.index()).and_then(Option::take)
    }

    /// Iterate over all pieces on the board in square order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().filter_map(|slot| slot.and_then(|id| self.piece(id)))
    }

    /// Iterate over the pieces of one side in square order.
    pub fn pieces_of(&self, owner: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.owner() == owner)
    }

    /// Number of pieces `owner` has on the board.
    pub fn count(&self, owner: Color) -> usize {
        self.pieces_of(owner).count()
    }

    /// Return the squares strictly between `start` and `end` along a diagonal.
    ///
    /// Squares are ordered from `start` toward `end`. Empty when the two are at
    /// most one row apart. If `end` is not on a diagonal through `start`, the
    /// walk stops at the board edge and the partial list is returned.
    pub fn squares_between(start: Square, end: Square) -> Vec<Square> {
        let mut between = Vec::new();
        if (start.row() - end.row()).abs() <= 1 {
            return between;
        }

        let d_row = if end.row() > start.row() { 1 } else { -1 };
        let d_column = if end.column() > start.column() { 1 } else { -1 };

        let mut current = start;
        while let Some(next) = current.offset(d_row, d_column) {
            if next == end {
                break;
            }
            between.push(next);
            current = next;
        }
        between
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for BoardGrid {
    fn default() -> Self {
        BoardGrid::starting()
    }
}

impl fmt::Debug for BoardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardGrid(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 8 on top.
pub struct PrettyBoard<'a>(&'a BoardGrid);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (1..=8).rev() {
            write!(f, "{row}  ")?;
            for column in 1..=8 {
                let sq = Square::new(row, column).map_err(|_| fmt::Error)?;
                let c = match board.occupant(sq) {
                    Some(piece) => piece.layout_char(),
                    None if sq.is_usable() => '.',
                    None => ' ',
                };
                if column < 8 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::BoardGrid;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_counts() {
        let board = BoardGrid::starting();
        assert_eq!(board.count(Color::Light), 12);
        assert_eq!(board.count(Color::Dark), 12);
        assert!(board.pieces().all(|p| p.kind() == PieceKind::Man));
    }

    #[test]
    fn starting_pieces_sit_in_their_zone() {
        let board = BoardGrid::starting();
        for piece in board.pieces() {
            assert!(piece.square().can_spawn());
            assert_eq!(board.occupant(piece.square()).map(|p| p.id()), Some(piece.id()));
            match piece.owner() {
                Color::Light => assert!(piece.square().row() <= 3),
                Color::Dark => assert!(piece.square().row() >= 6),
            }
        }
        assert!(board.is_empty(sq("a5")));
        assert!(board.is_empty(sq("b4")));
    }

    #[test]
    fn occupant_at_validates_coordinates() {
        let board = BoardGrid::starting();
        assert_eq!(
            board.occupant_at(0, 3),
            Err(BoardError::InvalidSquare { row: 0, column: 3 })
        );
        assert!(board.occupant_at(9, 9).is_err());
        let piece = board.occupant_at(1, 2).unwrap().unwrap();
        assert_eq!(piece.owner(), Color::Light);
        assert_eq!(board.occupant_at(4, 1).unwrap(), None);
    }

    #[test]
    fn spawn_rejects_unusable_square() {
        let mut board = BoardGrid::empty();
        assert_eq!(
            board.spawn(Color::Light, PieceKind::Man, sq("a1")),
            Err(BoardError::UnusableSquare { square: sq("a1") })
        );
        assert!(board.spawn(Color::Light, PieceKind::Man, sq("b1")).is_ok());
    }

    #[test]
    fn spawn_replaces_previous_occupant() {
        let mut board = BoardGrid::empty();
        let first = board.spawn(Color::Light, PieceKind::Man, sq("d4")).unwrap();
        let second = board.spawn(Color::Dark, PieceKind::King, sq("d4")).unwrap();
        assert!(board.piece(first).is_none());
        assert_eq!(board.occupant(sq("d4")).map(|p| p.id()), Some(second));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn handles_stay_distinct_past_u16_range() {
        let mut board = BoardGrid::empty();
        for _ in 0..70_000 {
            board.spawn(Color::Light, PieceKind::Man, sq("b1")).unwrap();
        }
        let id = board.spawn(Color::Dark, PieceKind::Man, sq("d1")).unwrap();
        assert_eq!(id.index(), 70_000);
        assert_eq!(board.occupant(sq("d1")).map(|p| p.id()), Some(id));
        assert_eq!(board.count(Color::Dark), 1);
        assert_eq!(board.count(Color::Light), 1);
    }

    #[test]
    fn place_and_clear_touch_only_slots() {
        let mut board = BoardGrid::empty();
        let id = board.spawn(Color::Light, PieceKind::Man, sq("c3")).unwrap();

        assert_eq!(board.clear(sq("c3")), Some(id));
        assert!(board.is_empty(sq("c3")));
        assert!(board.piece(id).is_some());

        board.place(id, sq("d4"));
        assert!(board.is_occupied(sq("d4")));
        // The piece still believes it is on c3 until the caller updates it.
        assert_eq!(board.piece(id).unwrap().square(), sq("c3"));
    }

    #[test]
    fn remove_destroys_piece() {
        let mut board = BoardGrid::starting();
        let id = board.occupant(sq("b3")).unwrap().id();
        let removed = board.remove(sq("b3")).unwrap();
        assert_eq!(removed.id(), id);
        assert!(board.piece(id).is_none());
        assert!(board.is_empty(sq("b3")));
        assert_eq!(board.count(Color::Light), 11);
        assert_eq!(board.remove(sq("b3")), None);
    }

    #[test]
    fn squares_between_long_diagonal() {
        let between = BoardGrid::squares_between(sq("a1"), sq("e5"));
        assert_eq!(between, vec![sq("b2"), sq("c3"), sq("d4")]);

        let back = BoardGrid::squares_between(sq("e5"), sq("a1"));
        assert_eq!(back, vec![sq("d4"), sq("c3"), sq("b2")]);
    }

    #[test]
    fn squares_between_all_directions() {
        assert_eq!(BoardGrid::squares_between(sq("c3"), sq("a5")), vec![sq("b4")]);
        assert_eq!(BoardGrid::squares_between(sq("c3"), sq("e1")), vec![sq("d2")]);
        assert_eq!(BoardGrid::squares_between(sq("f6"), sq("h8")), vec![sq("g7")]);
    }

    #[test]
    fn squares_between_adjacent_is_empty() {
        assert!(BoardGrid::squares_between(sq("c3"), sq("d4")).is_empty());
        assert!(BoardGrid::squares_between(sq("c3"), sq("c3")).is_empty());
    }

    #[test]
    fn squares_between_off_diagonal_stops_at_edge() {
        // c1 -> d8 is not a diagonal; the walk runs d2, e3, ..., h6 then falls off.
        let between = BoardGrid::squares_between(sq("c1"), sq("d8"));
        assert_eq!(between.first(), Some(&sq("d2")));
        assert_eq!(between.last(), Some(&sq("h6")));
        assert_eq!(between.len(), 5);
    }

    #[test]
    fn pretty_print() {
        let board = BoardGrid::starting();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8  m   m   m   m"));
        assert!(output.contains("1    M   M   M   M"));
        assert!(output.contains("4  . "));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
