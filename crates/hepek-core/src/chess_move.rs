//! Move representation: a closed set of three instruction kinds.

use crate::castle_rights::Wing;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move for the side to move of the position it is applied to.
///
/// Moves carry no reference to a position; [`Position::apply`](crate::Position::apply)
/// consumes one and returns a new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Any piece moving from one square to another, capturing or not.
    Normal {
        from: Square,
        to: Square,
        kind: PieceKind,
        capture: bool,
    },
    /// A pawn reaching the last rank and becoming `promoted`.
    Promotion {
        from: Square,
        to: Square,
        promoted: PieceKind,
    },
    /// The king moving two squares toward a rook, which jumps over it.
    Castling(Wing),
}

impl Move {
    /// Origin square, or `None` for castling.
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } | Move::Promotion { from, .. } => Some(from),
            Move::Castling(_) => None,
        }
    }

    /// Destination square, or `None` for castling.
    pub const fn to(self) -> Option<Square> {
        match self {
            Move::Normal { to, .. } | Move::Promotion { to, .. } => Some(to),
            Move::Castling(_) => None,
        }
    }

    /// Return `true` if this is a [`Move::Normal`] flagged as a capture.
    pub const fn is_capture(self) -> bool {
        matches!(self, Move::Normal { capture: true, .. })
    }

    /// Return `true` if this is a promotion.
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    /// Return `true` if this is a castling move.
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castling(_))
    }
}
