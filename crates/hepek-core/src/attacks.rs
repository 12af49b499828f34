//! Attack maps: squares a side threatens to capture on.

use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// Return the two forward-diagonal squares a `side` pawn on `sq` threatens
/// (one on the a- and h-files), whatever stands on them.
pub fn pawn_attacks(sq: Square, side: Side) -> Bitboard {
    [-1, 1]
        .into_iter()
        .filter_map(|file_delta| sq.offset(file_delta, side.forward()))
        .collect()
}

impl Position {
    /// Return the squares the `side` piece of `kind` on `sq` threatens.
    ///
    /// Equal to [`Position::span`] for every kind except pawns, which threaten
    /// their capture diagonals rather than their push squares.
    pub fn attacking(&self, sq: Square, side: Side, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::Pawn => pawn_attacks(sq, side),
            _ => self.span(sq, side, kind),
        }
    }

    /// Return the union of [`Position::attacking`] over every piece of `side`.
    pub fn attack_map(&self, side: Side) -> Bitboard {
        let mut map = Bitboard::EMPTY;
        for kind in PieceKind::ALL {
            for sq in self.pieces(side, kind) {
                map |= self.attacking(sq, side, kind);
            }
        }
        map
    }

    /// Return `true` if any piece of `by` threatens `sq`.
    #[inline]
    pub fn is_attacked(&self, sq: Square, by: Side) -> bool {
        self.attack_map(by).contains(sq)
    }
}
