//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `draw.rs` - Fifty-move rule and repetition
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions, FEN errors and search terminals
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod proptest;
