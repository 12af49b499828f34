//! Castling wings, their fixed home squares, and per-side castling rights.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::FenError;
use crate::side::Side;
use crate::square::Square;

/// Which rook a king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    KingSide,
    QueenSide,
}

impl Wing {
    /// Both wings, king-side first.
    pub const ALL: [Wing; 2] = [Wing::KingSide, Wing::QueenSide];

    /// Square the king starts on for `side`.
    #[inline]
    pub const fn king_home(side: Side) -> Square {
        home_rank_square(side, 4)
    }

    /// Square this wing's rook starts on.
    #[inline]
    pub const fn rook_home(self, side: Side) -> Square {
        match self {
            Wing::KingSide => home_rank_square(side, 7),
            Wing::QueenSide => home_rank_square(side, 0),
        }
    }

    /// Where the king lands: two files toward the rook.
    #[inline]
    pub const fn king_destination(self, side: Side) -> Square {
        match self {
            Wing::KingSide => home_rank_square(side, 6),
            Wing::QueenSide => home_rank_square(side, 2),
        }
    }

    /// Where the rook lands: the square the king crossed.
    #[inline]
    pub const fn rook_destination(self, side: Side) -> Square {
        match self {
            Wing::KingSide => home_rank_square(side, 5),
            Wing::QueenSide => home_rank_square(side, 3),
        }
    }

    /// Squares strictly between king and rook, which must be empty.
    pub fn between(self, side: Side) -> Bitboard {
        let files: &[i8] = match self {
            Wing::KingSide => &[5, 6],
            Wing::QueenSide => &[1, 2, 3],
        };
        files.iter().map(|&file| home_rank_square(side, file)).collect()
    }

    /// Squares the king stands on, crosses or lands on, none of which may be attacked.
    pub fn king_path(self, side: Side) -> Bitboard {
        let files: &[i8] = match self {
            Wing::KingSide => &[4, 5, 6],
            Wing::QueenSide => &[2, 3, 4],
        };
        files.iter().map(|&file| home_rank_square(side, file)).collect()
    }
}

const fn home_rank_square(side: Side, file: i8) -> Square {
    Square::from_index_unchecked((side.home_rank() * 8 + file) as u8)
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// Rights only ever get removed; there is no operation that grants one back
/// after construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether `side` may still castle toward `wing`.
    #[inline]
    pub const fn has(self, side: Side, wing: Wing) -> bool {
        self.0 & flag(side, wing) != 0
    }

    /// Return these rights with the given one added. Only used while building a position.
    #[inline]
    pub const fn with(self, side: Side, wing: Wing) -> CastleRights {
        CastleRights(self.0 | flag(side, wing))
    }

    /// Return these rights with `side`'s `wing` right removed.
    #[inline]
    pub const fn remove(self, side: Side, wing: Wing) -> CastleRights {
        CastleRights(self.0 & !flag(side, wing))
    }

    /// Return these rights with both of `side`'s rights removed.
    #[inline]
    pub const fn remove_side(self, side: Side) -> CastleRights {
        self.remove(side, Wing::KingSide).remove(side, Wing::QueenSide)
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let (side, wing) = match c {
                'K' => (Side::White, Wing::KingSide),
                'Q' => (Side::White, Wing::QueenSide),
                'k' => (Side::Black, Wing::KingSide),
                'q' => (Side::Black, Wing::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.with(side, wing))
        })
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (Side::White, Wing::KingSide, 'K'),
            (Side::White, Wing::QueenSide, 'Q'),
            (Side::Black, Wing::KingSide, 'k'),
            (Side::Black, Wing::QueenSide, 'q'),
        ]
        .into_iter()
        .filter(|&(side, wing, _)| self.has(side, wing))
        .map(|(_, _, c)| c)
        .collect()
    }
}

const fn flag(side: Side, wing: Wing) -> u8 {
    let shift = side.index() * 2
        + match wing {
            Wing::KingSide => 0,
            Wing::QueenSide => 1,
        };
    1u8 << shift
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
