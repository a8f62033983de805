//! Static evaluation: material plus piece-square tables.

use super::{Board, Color, Piece, Square};

// Tables are laid out as seen from White's side of the board: the first row is rank 8.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

const TABLES: [&[i32; 64]; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

#[inline]
fn table_index(sq: Square, color: Color) -> usize {
    let rank = match color {
        Color::White => 7 - sq.rank(),
        Color::Black => sq.rank(),
    };
    rank as usize * 8 + sq.file() as usize
}

#[inline]
fn piece_score(piece: Piece, color: Color, sq: Square) -> i32 {
    piece.value() + TABLES[piece.index()][table_index(sq, color)]
}

impl Board {
    /// Static score in centipawns from the side to move's point of view.
    #[must_use]
    pub fn evaluate_static(&self) -> i32 {
        let white: i32 = Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .map(|(sq, color, piece)| {
                let score = piece_score(piece, color, sq);
                if color == Color::White {
                    score
                } else {
                    -score
                }
            })
            .sum();

        match self.side_to_move {
            Color::White => white,
            Color::Black => -white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(Board::new().evaluate_static(), 0);
    }

    #[test]
    fn score_is_relative_to_side_to_move() {
        let white = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        let black = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1");
        assert!(white.evaluate_static() > 800);
        assert_eq!(white.evaluate_static(), -black.evaluate_static());
    }

    #[test]
    fn mirrored_positions_score_equally() {
        let a = Board::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        let b = Board::from_fen("4k3/8/8/4p3/8/8/8/4K3 b - - 0 1");
        assert_eq!(a.evaluate_static(), b.evaluate_static());
    }
}
