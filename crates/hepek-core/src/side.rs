//! The two players.

use std::fmt;
use std::ops::Not;

/// The side a piece belongs to, or the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// Both sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opponent.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank step of a forward pawn move: +1 for White, -1 for Black.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Zero-based rank on which this side's pieces start (0 or 7).
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Zero-based rank from which this side's pawns may advance two squares.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        self.home_rank() + self.forward()
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}
