//! Move execution via copy-make.

use crate::castle_rights::{CastleRights, Wing};
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;

impl Position {
    /// Apply a move and return the resulting position. Copy-make: `self` is not modified.
    ///
    /// The move must be one generated for this position (see
    /// [`Position::legal_moves`]); applying an arbitrary move can produce a
    /// position that breaks the structural invariants.
    pub fn apply(&self, mv: Move) -> Position {
        let mut next = *self;
        let us = self.side_to_move();
        let them = us.flip();

        // Any move other than a double push closes the en passant window.
        next.set_en_passant(None);

        match mv {
            Move::Normal {
                from,
                to,
                kind,
                capture,
            } => {
                debug_assert!(self.pieces(us, kind).contains(from), "no {us} {kind:?} on {from}");
                debug_assert!(capture || !self.is_occupied(to), "uncaptured piece on {to}");

                if capture {
                    next.clear_square(them, to);
                }

                // En passant: the captured pawn stands behind the target square.
                if kind == PieceKind::Pawn
                    && self.en_passant() == Some(to)
                    && from.file() != to.file()
                    && let Some(victim) = to.offset(0, -us.forward())
                {
                    next.clear_square(them, victim);
                }

                next.toggle(us, kind, from);
                next.toggle(us, kind, to);

                if capture || kind == PieceKind::Pawn {
                    next.set_halfmove_clock(0);
                } else {
                    next.set_halfmove_clock(self.halfmove_clock() + 1);
                }

                if kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
                    next.set_en_passant(from.offset(0, us.forward()));
                }

                next.set_castling(surviving_rights(&next));
            }

            Move::Promotion { from, to, promoted } => {
                debug_assert!(self.pieces(us, PieceKind::Pawn).contains(from), "no {us} pawn on {from}");

                // A promotion may capture diagonally; clearing an empty square is a no-op.
                next.clear_square(them, to);
                next.toggle(us, PieceKind::Pawn, from);
                next.toggle(us, promoted, to);
                next.set_halfmove_clock(0);
                next.set_castling(surviving_rights(&next));
            }

            Move::Castling(wing) => {
                debug_assert!(self.castling().has(us, wing), "{us} has no {wing:?} right");

                next.toggle(us, PieceKind::King, Wing::king_home(us));
                next.toggle(us, PieceKind::King, wing.king_destination(us));
                next.toggle(us, PieceKind::Rook, wing.rook_home(us));
                next.toggle(us, PieceKind::Rook, wing.rook_destination(us));
                next.set_halfmove_clock(self.halfmove_clock() + 1);
                next.set_castling(self.castling().remove_side(us));
            }
        }

        next.set_side_to_move(them);
        next
    }
}

/// Drop every right whose king or rook has left its home square.
///
/// Checked for both sides, so capturing a rook in its corner also removes the
/// victim's right on that wing.
fn surviving_rights(position: &Position) -> CastleRights {
    let mut rights = position.castling();
    for side in Side::ALL {
        if !position.pieces(side, PieceKind::King).contains(Wing::king_home(side)) {
            rights = rights.remove_side(side);
        }
        for wing in Wing::ALL {
            if !position.pieces(side, PieceKind::Rook).contains(wing.rook_home(side)) {
                rights = rights.remove(side, wing);
            }
        }
    }
    rights
}
