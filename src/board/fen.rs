use super::error::FenError;
use super::{
    Board, CastlingRights, Color, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Largest halfmove clock or fullmove number accepted from a FEN.
pub const MAX_FEN_COUNTER: u32 = 1_000_000;

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse::<u32>()
        .ok()
        .filter(|&n| n <= MAX_FEN_COUNTER)
        .ok_or_else(|| FenError::InvalidCounter {
            found: text.to_string(),
        })
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file: usize = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = u8::try_from(file)
                    .ok()
                    .and_then(|f| Square::new(rank, f))
                    .ok_or(FenError::InvalidFileCount {
                        rank: row,
                        files: file + 1,
                    })?;
                board.put(sq, color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount { rank: row, files: file });
            }
        }

        for color in [Color::White, Color::Black] {
            let found = Square::all()
                .filter(|&sq| board.piece_at(sq) == Some((color, Piece::King)))
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.insert(CASTLE_WHITE_K),
                    'Q' => castling.insert(CASTLE_WHITE_Q),
                    'k' => castling.insert(CASTLE_BLACK_K),
                    'q' => castling.insert(CASTLE_BLACK_Q),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        board.castling = castling;

        board.en_passant = match parts[3] {
            "-" => None,
            text => match Square::parse(text) {
                Some(sq) if sq.rank() == 2 || sq.rank() == 5 => Some(sq),
                _ => {
                    return Err(FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })
                }
            },
        };

        if let Some(text) = parts.get(4) {
            board.halfmove_clock = parse_counter(text)?;
        }
        if let Some(text) = parts.get(5) {
            board.fullmove_number = parse_counter(text)?;
        }

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match Square::new(rank, file).and_then(|sq| self.piece_at(sq)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            self.castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
