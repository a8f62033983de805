//! Legal move generation for the mailbox board.

use super::{
    Board, CastleSide, Color, Move, Piece, Square, MAX_MOVES, PROMOTION_PIECES,
};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

impl Board {
    /// All legal moves for the side to move, in generation order.
    ///
    /// The list never exceeds [`MAX_MOVES`]; anything beyond is dropped.
    pub fn generate_moves(&mut self) -> Vec<Move> {
        let mut pseudo = Vec::with_capacity(64);
        self.generate_pseudo_moves(&mut pseudo);

        let us = self.side_to_move;
        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            let info = self.make_move(mv);
            let safe = self
                .king_square(us)
                .map_or(true, |king| !self.is_square_attacked(king, !us));
            self.unmake_move(mv, info);
            if safe {
                legal.push(mv);
            }
        }

        if legal.len() > MAX_MOVES {
            log::warn!(
                "move list truncated from {} to {} entries",
                legal.len(),
                MAX_MOVES
            );
            legal.truncate(MAX_MOVES);
        }
        legal
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let us = self.side_to_move;
        self.king_square(us)
            .is_some_and(|king| self.is_square_attacked(king, !us))
    }

    /// Whether any piece of color `by` attacks `sq`.
    pub(crate) fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |target: Option<Square>, piece: Piece| {
            target.is_some_and(|t| self.piece_at(t) == Some((by, piece)))
        };

        // An attacking pawn sits one rank behind `sq` from its own point of view.
        let back = -by.pawn_direction();
        if holds(sq.offset(back, -1), Piece::Pawn) || holds(sq.offset(back, 1), Piece::Pawn) {
            return true;
        }
        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, df)| holds(sq.offset(dr, df), Piece::Knight))
        {
            return true;
        }
        if KING_OFFSETS
            .iter()
            .any(|&(dr, df)| holds(sq.offset(dr, df), Piece::King))
        {
            return true;
        }

        let slider_hits = |directions: &[(i8, i8)], kind: Piece| {
            directions.iter().any(|&(dr, df)| {
                let mut cur = sq.offset(dr, df);
                while let Some(t) = cur {
                    match self.piece_at(t) {
                        None => cur = t.offset(dr, df),
                        Some((color, piece)) => {
                            return color == by && (piece == kind || piece == Piece::Queen);
                        }
                    }
                }
                false
            })
        };
        slider_hits(&ROOK_DIRECTIONS, Piece::Rook) || slider_hits(&BISHOP_DIRECTIONS, Piece::Bishop)
    }

    fn generate_pseudo_moves(&self, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        for from in Square::all() {
            match self.piece_at(from) {
                Some((color, piece)) if color == us => match piece {
                    Piece::Pawn => self.generate_pawn_moves(from, moves),
                    Piece::Knight => self.generate_step_moves(from, &KNIGHT_OFFSETS, moves),
                    Piece::Bishop => self.generate_slider_moves(from, &BISHOP_DIRECTIONS, moves),
                    Piece::Rook => self.generate_slider_moves(from, &ROOK_DIRECTIONS, moves),
                    Piece::Queen => {
                        self.generate_slider_moves(from, &ROOK_DIRECTIONS, moves);
                        self.generate_slider_moves(from, &BISHOP_DIRECTIONS, moves);
                    }
                    Piece::King => {
                        self.generate_step_moves(from, &KING_OFFSETS, moves);
                        self.generate_castling_moves(from, moves);
                    }
                },
                _ => {}
            }
        }
    }

    fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let dir = us.pawn_direction();
        let start_rank = if us == Color::White { 1 } else { 6 };
        let promo_rank = (!us).back_rank();

        let push_or_promote = |to: Square, capture: bool, moves: &mut Vec<Move>| {
            if to.rank() == promo_rank {
                for piece in PROMOTION_PIECES {
                    moves.push(Move::promotion_to(from, to, piece, capture));
                }
            } else if capture {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        };

        if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
            push_or_promote(one, false, moves);
            if from.rank() == start_rank {
                if let Some(two) = one.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::double_pawn_push(from, two));
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((color, _)) if color != us => push_or_promote(to, true, moves),
                None if self.en_passant == Some(to) => moves.push(Move::en_passant(from, to)),
                _ => {}
            }
        }
    }

    fn generate_step_moves(&self, from: Square, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((color, _)) if color != us => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
    }

    fn generate_slider_moves(&self, from: Square, directions: &[(i8, i8)], moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        for &(dr, df) in directions {
            let mut cur = from.offset(dr, df);
            while let Some(to) = cur {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::quiet(from, to));
                        cur = to.offset(dr, df);
                    }
                    Some((color, _)) => {
                        if color != us {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }

    fn generate_castling_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let rank = us.back_rank();
        if Square::new(rank, 4) != Some(from) || self.is_square_attacked(from, !us) {
            return;
        }

        for side in [CastleSide::King, CastleSide::Queen] {
            if !self.castling.has(us, side) {
                continue;
            }
            let (rook_file, _) = side.rook_files();
            let rook_home = Square::new(rank, rook_file);
            if rook_home.and_then(|sq| self.piece_at(sq)) != Some((us, Piece::Rook)) {
                continue;
            }

            // Files strictly between king and rook must be empty; the king's path must be safe.
            let (between, path): (&[u8], [u8; 2]) = match side {
                CastleSide::King => (&[5, 6], [5, 6]),
                CastleSide::Queen => (&[1, 2, 3], [3, 2]),
            };
            let clear = between
                .iter()
                .filter_map(|&f| Square::new(rank, f))
                .all(|sq| self.is_empty(sq));
            let safe = path
                .iter()
                .filter_map(|&f| Square::new(rank, f))
                .all(|sq| !self.is_square_attacked(sq, !us));
            if !(clear && safe) {
                continue;
            }

            if let Some(to) = Square::new(rank, path[1]) {
                moves.push(match side {
                    CastleSide::King => Move::castle_kingside(from, to),
                    CastleSide::Queen => Move::castle_queenside(from, to),
                });
            }
        }
    }
}
