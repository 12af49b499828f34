//! A piece together with the side that owns it.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece of a given kind belonging to a given side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    /// Create a piece from a side and kind.
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece { side, kind }
    }

    /// Parse a FEN character: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(side, kind))
    }

    /// Return the FEN character for this piece.
    #[inline]
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.side {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind.fen_char().to_ascii_uppercase())
    }
}
