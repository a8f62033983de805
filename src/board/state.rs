use crate::zobrist::ZOBRIST;

use super::{CastlingRights, Color, Piece, Square};

/// Everything `make_move` overwrites, kept so `unmake_move` can restore it exactly.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    /// Piece that left the origin square; `None` if the origin was empty and nothing moved.
    pub(crate) moved: Option<Piece>,
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_castling: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_hash: u64,
}

/// Mailbox chess position: one slot per square plus the game-state fields FEN carries.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) hash: u64,
    /// Hashes of earlier positions in the game, oldest first.
    pub(crate) history: Vec<u64>,
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            board.put_on(file, 0, Color::White, piece);
            board.put_on(file, 1, Color::White, Piece::Pawn);
            board.put_on(file, 6, Color::Black, Piece::Pawn);
            board.put_on(file, 7, Color::Black, piece);
        }
        board.castling = CastlingRights::all();
        board.hash = board.calculate_hash();
        board
    }

    fn put_on(&mut self, file: u8, rank: u8, color: Color, piece: Piece) {
        if let Some(sq) = Square::new(rank, file) {
            self.put(sq, color, piece);
        }
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [None; 2],
            hash: 0,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Piece and color standing on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Place a piece, keeping the hash and king squares in step.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
        self.hash ^= ZOBRIST.piece(color, piece, sq);
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
    }

    /// Lift whatever stands on `sq`, keeping the hash in step.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let taken = self.squares[sq.index()].take();
        if let Some((color, piece)) = taken {
            self.hash ^= ZOBRIST.piece(color, piece, sq);
        }
        taken
    }

    /// Hash computed from scratch; matches the incrementally maintained `hash`.
    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = Square::all()
            .filter_map(|sq| {
                self.piece_at(sq)
                    .map(|(color, piece)| ZOBRIST.piece(color, piece, sq))
            })
            .fold(0, |acc, key| acc ^ key);
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.side();
        }
        hash ^= ZOBRIST.castling(self.castling);
        hash ^= ZOBRIST.en_passant(self.en_passant);
        hash
    }

    /// Whether the current position already occurred since the last irreversible move.
    pub(crate) fn is_repetition(&self) -> bool {
        let reversible = self.halfmove_clock as usize;
        self.history
            .iter()
            .rev()
            .take(reversible)
            .skip(1)
            .step_by(2)
            .any(|&h| h == self.hash)
    }

    /// Fifty-move rule or repetition.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= 100 || self.is_repetition()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
