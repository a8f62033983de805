//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square index
//! - `Move` and `UciMove` - generated moves and their wire form
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, UciMove, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{
    CastleSide, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
pub(crate) use piece::PROMOTION_PIECES;
