//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as an index 0-63 (a1 = 0, b1 = 1, ..., h8 = 63).
///
/// Off-board coordinates never produce a `Square`; they surface as `None` or a
/// [`SquareError`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file (both 0-7), or `None` if either is off the board.
    #[inline]
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Square(idx as u8)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by a rank/file delta, returning `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Square::new(rank as u8, file as u8)
        } else {
            None
        }
    }

    /// Parse two-character algebraic notation, returning `None` for anything off the board.
    #[must_use]
    pub fn parse(s: &str) -> Option<Square> {
        s.parse().ok()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        // Bytes below 'a' or '1' wrap around and land out of range as well.
        let file = bytes[0].wrapping_sub(b'a');
        if file > 7 {
            return Err(SquareError::FileOutOfBounds {
                file: file as usize,
            });
        }
        let rank = bytes[1].wrapping_sub(b'1');
        if rank > 7 {
            return Err(SquareError::RankOutOfBounds {
                rank: rank as usize,
            });
        }

        Ok(Square(rank * 8 + file))
    }
}
