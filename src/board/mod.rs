//! Chess board representation and game logic.
//!
//! A mailbox board (one slot per square) with full rules: castling, en passant,
//! promotions, fifty-move and repetition draws. It is the engine core driven by
//! the search orchestration in [`crate::engine`].
//!
//! # Example
//! ```
//! use chess_frontend::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::{MAX_FEN_COUNTER, START_FEN};
pub use search::{MATE_SCORE, MATE_THRESHOLD, MAX_PLY, SCORE_MAX};
pub use state::{Board, UnmakeInfo};
pub use types::{CastlingRights, Color, Move, Piece, Square, UciMove, MAX_MOVES};

pub(crate) use types::{
    CastleSide, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
    PROMOTION_PIECES,
};
