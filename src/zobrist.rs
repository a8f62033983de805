//! Zobrist hashing for chess positions.
//!
//! Hashes are updated incrementally by make/unmake and used for repetition
//! detection and for checking that a reverted move restored the position.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // One key per castling bitmask value.
    castling_keys: [u64; 16],
    // Only the file of the en passant target matters.
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5EED_CAFE_F00D_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        let mut castling_keys = [0; 16];
        // The empty mask keeps a zero key so positions without rights hash neutrally.
        for key in castling_keys.iter_mut().skip(1) {
            *key = rng.gen();
        }

        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn side(&self) -> u64 {
        self.black_to_move_key
    }

    #[inline]
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        self.castling_keys[rights.bits() as usize]
    }

    #[inline]
    pub(crate) fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant_keys[sq.file() as usize])
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
