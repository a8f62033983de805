//! Castling rights bitmask.

use std::fmt;

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 0b0001;
pub(crate) const CASTLE_WHITE_Q: u8 = 0b0010;
pub(crate) const CASTLE_BLACK_K: u8 = 0b0100;
pub(crate) const CASTLE_BLACK_Q: u8 = 0b1000;
pub(crate) const ALL_CASTLING_RIGHTS: u8 = 0b1111;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Rook (from, to) files for this wing.
    pub(crate) const fn rook_files(self) -> (u8, u8) {
        match self {
            CastleSide::King => (7, 5),
            CastleSide::Queen => (0, 3),
        }
    }
}

pub(crate) const fn castle_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::King) => CASTLE_WHITE_K,
        (Color::White, CastleSide::Queen) => CASTLE_WHITE_Q,
        (Color::Black, CastleSide::King) => CASTLE_BLACK_K,
        (Color::Black, CastleSide::Queen) => CASTLE_BLACK_Q,
    }
}

/// Castling availability for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    pub(crate) const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & castle_bit(color, side) != 0
    }

    #[inline]
    pub(crate) fn insert(&mut self, bit: u8) {
        self.0 |= bit & ALL_CASTLING_RIGHTS;
    }

    /// Drop whatever rights are tied to a king or rook standing on `sq`.
    #[inline]
    pub(crate) fn touch(&mut self, sq: Square) {
        self.0 &= !rights_lost_on(sq);
    }
}

/// Rights that disappear once anything moves from or to `sq`.
const fn rights_lost_on(sq: Square) -> u8 {
    match sq.index() {
        0 => CASTLE_WHITE_Q,
        4 => CASTLE_WHITE_K | CASTLE_WHITE_Q,
        7 => CASTLE_WHITE_K,
        56 => CASTLE_BLACK_Q,
        60 => CASTLE_BLACK_K | CASTLE_BLACK_Q,
        63 => CASTLE_BLACK_K,
        _ => 0,
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
