//! The position value: twelve piece masks, side to move, castling, en passant, and the half-move clock.

use std::fmt;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Twelve occupancy masks, indexed by [`Side::index`] then [`PieceKind::index`].
pub type PieceMasks = [[Bitboard; PieceKind::COUNT]; Side::COUNT];

/// Complete, immutable chess position.
///
/// Every transition produces a fresh value via [`Position::apply`]; nothing
/// outside this crate can change the fields of an existing one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Which side moves next.
    side_to_move: Side,
    /// One mask per side per piece kind.
    pieces: PieceMasks,
    /// Plies since the last capture or pawn move.
    halfmove_clock: u32,
    /// Remaining castling rights.
    castling: CastleRights,
    /// Square skipped by a pawn's two-square advance on the previous ply.
    en_passant: Option<Square>,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting_position() -> Position {
        let mut pieces = [[Bitboard::EMPTY; PieceKind::COUNT]; Side::COUNT];
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for side in Side::ALL {
            for (file, kind) in back_rank.into_iter().enumerate() {
                let sq = Square::from_index_unchecked((side.home_rank() * 8) as u8 + file as u8);
                pieces[side.index()][kind.index()] |= sq.bitboard();
            }
        }
        pieces[Side::White.index()][PieceKind::Pawn.index()] = Bitboard::RANK_2;
        pieces[Side::Black.index()][PieceKind::Pawn.index()] = Bitboard::RANK_7;

        Position {
            side_to_move: Side::White,
            pieces,
            halfmove_clock: 0,
            castling: CastleRights::ALL,
            en_passant: None,
        }
    }

    /// Same as [`Position::starting_position`].
    #[inline]
    pub fn new() -> Position {
        Position::starting_position()
    }

    /// Build a position from raw components, checking the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`PositionError`] found by [`Position::validate`].
    pub fn from_parts(
        side_to_move: Side,
        pieces: PieceMasks,
        halfmove_clock: u32,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Result<Position, PositionError> {
        let position = Position {
            side_to_move,
            pieces,
            halfmove_clock,
            castling,
            en_passant,
        };
        if let Err(err) = position.validate() {
            debug!(error = %err, "rejected position");
            return Err(err);
        }
        Ok(position)
    }

    /// Check the structural invariants: no shared squares, one king per side,
    /// no pawns on the back ranks, a plausible en passant target, and the side
    /// that just moved not left in check.
    pub fn validate(&self) -> Result<(), PositionError> {
        let mut seen = Bitboard::EMPTY;
        for side in Side::ALL {
            for kind in PieceKind::ALL {
                let mask = self.pieces(side, kind);
                if let Some(square) = (seen & mask).lowest_set_square() {
                    return Err(PositionError::OverlappingPieces { square });
                }
                seen |= mask;
            }
        }

        for side in Side::ALL {
            let count = self.pieces(side, PieceKind::King).count();
            if count != 1 {
                return Err(PositionError::InvalidKingCount { side, count });
            }
        }

        let pawns = self.pieces(Side::White, PieceKind::Pawn) | self.pieces(Side::Black, PieceKind::Pawn);
        if (pawns & Bitboard::BACK_RANKS).is_nonempty() {
            return Err(PositionError::PawnsOnBackRank);
        }

        let mover = self.side_to_move.flip();

        if let Some(square) = self.en_passant {
            // The pawn that skipped `square` belongs to the side that just moved:
            // it stands one step beyond the target, and its origin is now empty.
            let skipped_rank = mover.pawn_start_rank() + mover.forward();
            let pushed = square.offset(0, mover.forward());
            let origin = square.offset(0, -mover.forward());
            let plausible = square.rank() == skipped_rank
                && !self.is_occupied(square)
                && pushed.is_some_and(|sq| self.pieces(mover, PieceKind::Pawn).contains(sq))
                && origin.is_some_and(|sq| !self.is_occupied(sq));
            if !plausible {
                return Err(PositionError::InvalidEnPassant {
                    square,
                    side: self.side_to_move,
                });
            }
        }

        if self.is_attacked(self.king_square(mover), self.side_to_move) {
            return Err(PositionError::OpponentInCheck { side: mover });
        }

        Ok(())
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Return the half-move clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the mask for one side's pieces of one kind.
    #[inline]
    pub fn pieces(&self, side: Side, kind: PieceKind) -> Bitboard {
        self.pieces[side.index()][kind.index()]
    }

    /// Return every square holding a piece of `side`.
    pub fn side_occupancy(&self, side: Side) -> Bitboard {
        self.pieces[side.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &mask| acc | mask)
    }

    /// Return the union of all twelve piece masks.
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.side_occupancy(Side::White) | self.side_occupancy(Side::Black)
    }

    /// Return `true` if any piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupancy().contains(sq)
    }

    /// Return the side owning the piece on `sq`.
    ///
    /// # Errors
    ///
    /// [`PositionError::UnoccupiedSquare`] if `sq` is empty. Callers should only
    /// ask about squares already known to be occupied.
    pub fn owner_of(&self, sq: Square) -> Result<Side, PositionError> {
        Side::ALL
            .into_iter()
            .find(|&side| self.side_occupancy(side).contains(sq))
            .ok_or(PositionError::UnoccupiedSquare { square: sq })
    }

    /// Return the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Side::ALL.into_iter().find_map(|side| {
            PieceKind::ALL
                .into_iter()
                .find(|&kind| self.pieces(side, kind).contains(sq))
                .map(|kind| Piece::new(side, kind))
        })
    }

    /// Return the square of `side`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `side` has no king, which a validated position never allows.
    pub fn king_square(&self, side: Side) -> Square {
        self.pieces(side, PieceKind::King)
            .lowest_set_square()
            .expect("position must have a king for each side")
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }

    /// Flip one piece bit in or out of `side`'s `kind` mask.
    #[inline]
    pub(crate) fn toggle(&mut self, side: Side, kind: PieceKind, sq: Square) {
        self.pieces[side.index()][kind.index()] ^= sq.bitboard();
    }

    /// Clear `sq` from all six of `side`'s masks.
    #[inline]
    pub(crate) fn clear_square(&mut self, side: Side, sq: Square) {
        let keep = !sq.bitboard();
        for mask in &mut self.pieces[side.index()] {
            *mask &= keep;
        }
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self.to_fen())
    }
}

/// Wrapper for printing a position as an 8x8 grid, rank 8 at the top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0i8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0i8..8 {
                let c = Square::from_coords(file, rank)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
