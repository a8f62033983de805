pub mod board;
pub mod engine;
pub mod perft;
pub mod uci;
mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use engine::{search, EngineCore, SearchBudget, SearchConfig, SearchOutcome};
pub use uci::{Flow, UciHandler};
