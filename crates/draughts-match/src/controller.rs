//! The match controller: selection, move validation, turn switching and
//! game-over detection.

use tracing::{debug, info, warn};

use draughts_core::movegen::{Destinations, generate, side_can_capture};
use draughts_core::{
    BoardGeometry, BoardGrid, Color, Move, Piece, PieceId, RulesError, Square, SquareSet,
};

use crate::error::{IllegalReason, MatchError};
use crate::state::{MatchState, Outcome, Phase};

/// The currently selected piece and what it may do.
#[derive(Debug, Clone, Copy)]
struct Selection {
    piece: PieceId,
    destinations: Destinations,
    /// The piece has just captured and must keep capturing.
    chaining: bool,
}

/// A single match between Light and Dark.
///
/// Owns the board and is the only code that mutates it. Every input event is
/// handled to completion, including game-over detection, before returning.
#[derive(Debug, Clone)]
pub struct Match {
    board: BoardGrid,
    active: Color,
    phase: Phase,
    outcome: Option<Outcome>,
    selection: Option<Selection>,
}

impl Match {
    /// Start a match from the standard setup with Light to move.
    pub fn new() -> Match {
        info!("new match");
        Match::fresh(BoardGrid::starting(), Color::Light)
    }

    /// Start a match from an arbitrary position.
    ///
    /// The position is adjudicated immediately, so a side to move without
    /// pieces or without moves puts the match straight into
    /// [`Phase::GameOver`].
    pub fn from_board(board: BoardGrid, active: Color) -> Match {
        info!(%active, "match from position");
        let mut game = Match::fresh(board, active);
        game.adjudicate();
        game
    }

    fn fresh(board: BoardGrid, active: Color) -> Match {
        Match {
            board,
            active,
            phase: Phase::AwaitingSelection,
            outcome: None,
            selection: None,
        }
    }

    /// Throw the current match away and return to the standard setup.
    pub fn reset(&mut self) {
        info!("match reset");
        *self = Match::fresh(BoardGrid::starting(), Color::Light);
    }

    // ── Input ──────────────────────────────────────────────────────────

    /// Route a click on `square` to select, deselect or move.
    ///
    /// With nothing selected the click selects. Clicking the selected piece
    /// deselects it; clicking another own piece switches the selection. Any
    /// other square is a move attempt. Clicks after the game is over are
    /// ignored.
    pub fn handle_square_clicked(&mut self, square: Square) -> Result<MatchState, MatchError> {
        if self.phase == Phase::GameOver {
            debug!(%square, "click ignored, match is over");
            return Ok(self.state());
        }

        match self.selection {
            None => {
                self.select(square);
            }
            Some(selection) => {
                let clicked = self.board.occupant(square).map(|p| (p.id(), p.owner()));
                match clicked {
                    Some((id, _)) if id == selection.piece => {
                        self.deselect();
                    }
                    Some((_, owner)) if owner == self.active => {
                        if self.deselect() {
                            self.select(square);
                        }
                    }
                    _ => {
                        self.attempt_move(square)?;
                    }
                }
            }
        }
        Ok(self.state())
    }

    /// Map a pixel through `geometry` and handle it as a square click.
    pub fn handle_pixel_clicked(
        &mut self,
        geometry: &BoardGeometry,
        x: f64,
        y: f64,
    ) -> Result<MatchState, MatchError> {
        let square = geometry.to_square(x, y)?;
        self.handle_square_clicked(square)
    }

    /// Select the active player's piece on `square`.
    ///
    /// Returns `false` and changes nothing unless the match is awaiting a
    /// selection and the square holds one of the active player's pieces.
    pub fn select(&mut self, square: Square) -> bool {
        if self.phase != Phase::AwaitingSelection {
            return false;
        }
        let Some(piece) = self.board.occupant(square) else {
            return false;
        };
        if piece.owner() != self.active {
            return false;
        }

        let destinations = generate(&self.board, piece);
        debug!(%piece, moves = %destinations.moves, captures = %destinations.captures, "selected");
        self.selection = Some(Selection {
            piece: piece.id(),
            destinations,
            chaining: false,
        });
        self.phase = Phase::PieceSelected;
        true
    }

    /// Drop the current selection.
    ///
    /// Returns `false` if nothing is selected or the selected piece is in the
    /// middle of a capture chain, which locks it in place.
    pub fn deselect(&mut self) -> bool {
        match self.selection {
            Some(selection) if selection.chaining => {
                debug!(piece = %selection.piece, "deselect ignored during capture chain");
                false
            }
            Some(selection) => {
                debug!(piece = %selection.piece, "deselected");
                self.selection = None;
                self.phase = Phase::AwaitingSelection;
                true
            }
            None => false,
        }
    }

    /// Move the selected piece to `to`.
    ///
    /// While any piece of the active player can capture, only captures are
    /// accepted. After a capture the piece keeps the turn as long as it can
    /// capture again; otherwise the turn passes. A refused move leaves the
    /// match untouched.
    pub fn attempt_move(&mut self, to: Square) -> Result<Move, MatchError> {
        let selection = self.selection.ok_or(MatchError::NoSelection)?;
        let piece = *self
            .board
            .piece(selection.piece)
            .ok_or(RulesError::MissingPiece { id: selection.piece })?;
        let from = piece.square();
        let destinations = generate(&self.board, &piece);

        if let Some(reason) = self.refusal(&destinations, to) {
            warn!(%from, %to, %reason, "illegal move");
            return Err(MatchError::IllegalMove { from, to, reason });
        }

        let mv = self.board.execute(piece.id(), to)?;
        self.board.try_promote(piece.id());

        if mv.is_capture() {
            let next = self.board.piece(piece.id()).map(|moved| generate(&self.board, moved));
            if let Some(next) = next.filter(Destinations::can_capture) {
                debug!(%mv, captures = %next.captures, "capture chain continues");
                self.selection = Some(Selection {
                    piece: piece.id(),
                    destinations: next,
                    chaining: true,
                });
                return Ok(mv);
            }
        }

        self.selection = None;
        self.switch_turn();
        Ok(mv)
    }

    /// Decide whether `to` is refused for a piece with `destinations`.
    fn refusal(&self, destinations: &Destinations, to: Square) -> Option<IllegalReason> {
        if side_can_capture(&self.board, self.active) {
            if destinations.captures.contains(to) {
                None
            } else if destinations.can_capture() && !destinations.moves.contains(to) {
                Some(IllegalReason::NotReachable)
            } else {
                Some(IllegalReason::CaptureRequired)
            }
        } else if destinations.moves.contains(to) {
            None
        } else {
            Some(IllegalReason::NotReachable)
        }
    }

    /// End a running match as a draw.
    pub fn abandon(&mut self) {
        if self.phase != Phase::GameOver {
            self.finish(Outcome::Draw);
        }
    }

    // ── Turn handling ─────────────────────────────────────────────────

    fn switch_turn(&mut self) {
        self.active = self.active.flip();
        self.phase = Phase::AwaitingSelection;
        debug!(active = %self.active, "turn switched");
        self.adjudicate();
    }

    /// End the match if the side to move has no pieces or nowhere to go.
    fn adjudicate(&mut self) {
        if self.board.count(self.active) == 0 {
            self.finish(Outcome::win_for(self.active.flip()));
        } else if self.board.pieces_of(self.active).all(|p| generate(&self.board, p).is_empty()) {
            self.finish(Outcome::Draw);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "game over");
        self.selection = None;
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
    }

    // ── Queries ───────────────────────────────────────────────────────

    #[inline]
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    /// Return the piece on `square`, if any.
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.board.occupant(square)
    }

    /// Quiet moves of the piece `id`; empty once it is captured.
    pub fn legal_moves(&self, id: PieceId) -> SquareSet {
        self.destinations(id).moves
    }

    /// Capture landings of the piece `id`; empty once it is captured.
    pub fn legal_captures(&self, id: PieceId) -> SquareSet {
        self.destinations(id).captures
    }

    /// Both destination sets of the piece `id`, freshly generated.
    pub fn destinations(&self, id: PieceId) -> Destinations {
        self.board
            .piece(id)
            .map(|piece| generate(&self.board, piece))
            .unwrap_or_default()
    }

    #[inline]
    pub fn active_player(&self) -> Color {
        self.active
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Handle of the selected piece.
    #[inline]
    pub fn selected(&self) -> Option<PieceId> {
        self.selection.map(|s| s.piece)
    }

    /// Destinations of the selected piece as of the last selection or hop.
    pub fn selected_destinations(&self) -> Option<Destinations> {
        self.selection.map(|s| s.destinations)
    }

    /// Return `true` while the selected piece is locked in a capture chain.
    pub fn is_chaining(&self) -> bool {
        self.selection.is_some_and(|s| s.chaining)
    }

    pub fn state(&self) -> MatchState {
        MatchState {
            active_player: self.active,
            selected: self.selected(),
            phase: self.phase,
            outcome: self.outcome,
        }
    }

    /// Return `true` if the side to move has a capture available.
    pub fn must_capture(&self) -> bool {
        side_can_capture(&self.board, self.active)
    }

    /// Squares of the active player's pieces with at least one quiet move.
    pub fn movable_pieces(&self) -> SquareSet {
        self.pieces_where(Destinations::can_move)
    }

    /// Squares of the active player's pieces with at least one capture.
    pub fn capturing_pieces(&self) -> SquareSet {
        self.pieces_where(Destinations::can_capture)
    }

    fn pieces_where(&self, keep: impl Fn(&Destinations) -> bool) -> SquareSet {
        self.board
            .pieces_of(self.active)
            .filter(|piece| keep(&generate(&self.board, piece)))
            .map(Piece::square)
            .collect()
    }
}

impl Default for Match {
    fn default() -> Self {
        Match::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Match;
    use crate::error::{IllegalReason, MatchError};
    use crate::state::{Outcome, Phase};
    use draughts_core::{BoardGrid, Color, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn from_layout(layout: &str, active: Color) -> Match {
        Match::from_board(layout.parse::<BoardGrid>().unwrap(), active)
    }

    #[test]
    fn select_requires_own_piece() {
        let mut game = Match::new();
        assert!(!game.select(sq("a6")));
        assert!(!game.select(sq("d4")));
        assert_eq!(game.phase(), Phase::AwaitingSelection);

        assert!(game.select(sq("b3")));
        assert_eq!(game.phase(), Phase::PieceSelected);
        // Already selected: a second select is a no-op.
        assert!(!game.select(sq("d3")));
        assert_eq!(game.selected(), game.occupant(sq("b3")).map(|p| p.id()));
    }

    #[test]
    fn deselect_returns_to_awaiting() {
        let mut game = Match::new();
        assert!(!game.deselect());
        game.select(sq("d3"));
        assert!(game.deselect());
        assert_eq!(game.phase(), Phase::AwaitingSelection);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn attempt_move_without_selection() {
        let mut game = Match::new();
        assert_eq!(game.attempt_move(sq("c4")), Err(MatchError::NoSelection));
    }

    #[test]
    fn quiet_move_switches_turn() {
        let mut game = Match::new();
        game.select(sq("d3"));
        let mv = game.attempt_move(sq("e4")).unwrap();
        assert!(!mv.is_capture());
        assert_eq!(game.active_player(), Color::Dark);
        assert_eq!(game.phase(), Phase::AwaitingSelection);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn unreachable_square_is_refused() {
        let mut game = Match::new();
        game.select(sq("d3"));
        let before = game.state();
        assert_eq!(
            game.attempt_move(sq("d5")),
            Err(MatchError::IllegalMove {
                from: sq("d3"),
                to: sq("d5"),
                reason: IllegalReason::NotReachable,
            })
        );
        assert_eq!(game.state(), before);
    }

    #[test]
    fn abandon_is_a_draw() {
        let mut game = Match::new();
        game.abandon();
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn abandon_after_game_over_keeps_outcome() {
        let mut game = from_layout("8/8/8/8/4m3/3M4/8/8", Color::Light);
        game.select(sq("d3"));
        game.attempt_move(sq("f5")).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::LightWins));
        game.abandon();
        assert_eq!(game.outcome(), Some(Outcome::LightWins));
    }

    #[test]
    fn position_without_pieces_is_adjudicated() {
        let game = from_layout("8/8/8/8/8/3M4/8/8", Color::Dark);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.outcome(), Some(Outcome::LightWins));
    }

    #[test]
    fn hints_on_capture_position() {
        let game = from_layout("8/8/8/8/4m3/1M1M4/8/8", Color::Light);
        assert!(game.must_capture());
        assert_eq!(game.capturing_pieces(), sq("d3").set());
        assert_eq!(game.movable_pieces(), sq("b3").set().with(sq("d3")));
    }

    #[test]
    fn stale_handle_has_no_destinations() {
        let mut game = from_layout("8/8/8/8/4m3/3M4/8/8", Color::Light);
        let victim = game.occupant(sq("e4")).unwrap().id();
        game.select(sq("d3"));
        game.attempt_move(sq("f5")).unwrap();
        assert!(game.legal_moves(victim).is_empty());
        assert!(game.legal_captures(victim).is_empty());
    }
}
