//! Capability interface the search orchestration consumes from an engine core.

use crate::board::{Board, Color, FenError, Move, Piece, Square, UnmakeInfo};

/// Narrow view of a chess engine: position setup, legal moves, exact
/// apply/revert, and a depth-limited evaluation.
///
/// Apply and revert must be strict inverses: after `revert(mv, apply(mv))` the
/// position, legal moves and evaluation are exactly what they were before.
pub trait EngineCore {
    /// Token returned by [`EngineCore::apply`] and consumed by [`EngineCore::revert`].
    type Undo;

    /// Reset to the standard starting position.
    fn reset(&mut self);

    /// Replace the position with a FEN. On error the current position is kept.
    fn set_fen(&mut self, fen: &str) -> Result<(), FenError>;

    fn side_to_move(&self) -> Color;

    /// Legal moves in the current position, at most [`crate::board::MAX_MOVES`].
    fn legal_moves(&mut self) -> Vec<Move>;

    fn apply(&mut self, mv: Move) -> Self::Undo;

    fn revert(&mut self, mv: Move, undo: Self::Undo);

    /// Score of the current position searched `depth` plies deep, from the side
    /// to move's point of view, bounded by [`crate::board::SCORE_MAX`].
    fn evaluate(&mut self, depth: u32) -> i32;

    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)>;
}

impl EngineCore for Board {
    type Undo = UnmakeInfo;

    fn reset(&mut self) {
        *self = Board::new();
    }

    fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::try_from_fen(fen)?;
        Ok(())
    }

    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    fn legal_moves(&mut self) -> Vec<Move> {
        self.generate_moves()
    }

    fn apply(&mut self, mv: Move) -> UnmakeInfo {
        self.make_move(mv)
    }

    fn revert(&mut self, mv: Move, undo: UnmakeInfo) {
        self.unmake_move(mv, undo);
    }

    fn evaluate(&mut self, depth: u32) -> i32 {
        self.search(depth)
    }

    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Board::piece_at(self, sq)
    }
}
