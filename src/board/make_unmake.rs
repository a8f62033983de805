use crate::zobrist::ZOBRIST;

use super::{Board, CastleSide, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Square of the pawn removed by an en passant capture.
    #[inline]
    fn en_passant_victim(mv: Move) -> Option<Square> {
        Square::new(mv.from().rank(), mv.to().file())
    }

    /// Rook (from, to) squares for a castling move.
    #[inline]
    fn castling_rook_squares(mv: Move) -> Option<(Square, Square)> {
        let side = if mv.is_castle_kingside() {
            CastleSide::King
        } else {
            CastleSide::Queen
        };
        let (from_file, to_file) = side.rook_files();
        let rank = mv.from().rank();
        Square::new(rank, from_file).zip(Square::new(rank, to_file))
    }

    /// Play `mv` on the board, returning what `unmake_move` needs to take it back.
    ///
    /// `mv` must come from [`Board::generate_moves`] on this position. A move whose
    /// origin is empty leaves the board untouched.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let mut info = UnmakeInfo {
            moved: None,
            captured: None,
            previous_castling: self.castling,
            previous_en_passant: self.en_passant,
            previous_halfmove_clock: self.halfmove_clock,
            previous_hash: self.hash,
        };

        let us = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());
        let Some((_, piece)) = self.take(from) else {
            return info;
        };
        info.moved = Some(piece);

        self.hash ^= ZOBRIST.castling(self.castling) ^ ZOBRIST.en_passant(self.en_passant);

        info.captured = if mv.is_en_passant() {
            Self::en_passant_victim(mv).and_then(|sq| self.take(sq))
        } else {
            self.take(to)
        };
        self.put(to, us, mv.promotion().unwrap_or(piece));

        if mv.is_castling() {
            if let Some((rook_from, rook_to)) = Self::castling_rook_squares(mv) {
                if let Some((color, rook)) = self.take(rook_from) {
                    self.put(rook_to, color, rook);
                }
            }
        }

        self.castling.touch(from);
        self.castling.touch(to);
        self.en_passant = if mv.is_double_pawn_push() {
            from.offset(us.pawn_direction(), 0)
        } else {
            None
        };
        self.halfmove_clock = if piece == Piece::Pawn || info.captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = !us;

        self.hash ^= ZOBRIST.castling(self.castling)
            ^ ZOBRIST.en_passant(self.en_passant)
            ^ ZOBRIST.side();
        self.history.push(info.previous_hash);
        info
    }

    /// Take back `mv`, restoring the exact state saved by `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let Some(piece) = info.moved else {
            return;
        };
        let (from, to) = (mv.from(), mv.to());
        let us = !self.side_to_move;

        self.take(to);
        self.put(from, us, piece);

        if mv.is_castling() {
            if let Some((rook_from, rook_to)) = Self::castling_rook_squares(mv) {
                if let Some((color, rook)) = self.take(rook_to) {
                    self.put(rook_from, color, rook);
                }
            }
        }

        if let Some((color, captured)) = info.captured {
            let sq = if mv.is_en_passant() {
                Self::en_passant_victim(mv)
            } else {
                Some(to)
            };
            if let Some(sq) = sq {
                self.put(sq, color, captured);
            }
        }

        if us == Color::Black {
            self.fullmove_number -= 1;
        }
        self.side_to_move = us;
        self.castling = info.previous_castling;
        self.en_passant = info.previous_en_passant;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.hash = info.previous_hash;
        self.history.pop();
    }
}
