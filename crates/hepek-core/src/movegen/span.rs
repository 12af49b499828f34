//! Per-piece reachable squares under blocking rules, before check filtering.

use crate::attacks::pawn_attacks;
use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

// Offsets are (file delta, rank delta) so edge checks are per coordinate.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0), (-1, 1), (0, 1), (1, 1),
    (1, 0), (1, -1), (0, -1), (-1, -1),
];
const KING_STEPS: [(i8, i8); 8] = QUEEN_DIRECTIONS;
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, 1), (-1, 2), (1, 2), (2, 1),
    (2, -1), (1, -2), (-1, -2), (-2, -1),
];

impl Position {
    /// Return the squares a `side` piece of `kind` on `sq` can move to,
    /// respecting blockers and captures but ignoring checks.
    pub fn span(&self, sq: Square, side: Side, kind: PieceKind) -> Bitboard {
        debug_assert!(
            self.pieces(side, kind).contains(sq),
            "no {side} {kind:?} on {sq}"
        );
        let friendly = self.side_occupancy(side);
        let enemy = self.side_occupancy(side.flip());

        match kind {
            PieceKind::King => jumping(sq, &KING_STEPS, friendly),
            PieceKind::Queen => sliding(sq, &QUEEN_DIRECTIONS, friendly, enemy),
            PieceKind::Rook => sliding(sq, &ROOK_DIRECTIONS, friendly, enemy),
            PieceKind::Bishop => sliding(sq, &BISHOP_DIRECTIONS, friendly, enemy),
            PieceKind::Knight => jumping(sq, &KNIGHT_JUMPS, friendly),
            PieceKind::Pawn => self.pawn_span(sq, side, enemy),
        }
    }

    fn pawn_span(&self, sq: Square, side: Side, enemy: Bitboard) -> Bitboard {
        let occupied = self.occupancy();
        let forward = side.forward();
        let mut span = Bitboard::EMPTY;

        if let Some(single) = sq.offset(0, forward)
            && !occupied.contains(single)
        {
            span = span.with(single);
            if sq.rank() == side.pawn_start_rank()
                && let Some(double) = single.offset(0, forward)
                && !occupied.contains(double)
            {
                span = span.with(double);
            }
        }

        for target in pawn_attacks(sq, side) {
            if enemy.contains(target) || self.en_passant() == Some(target) {
                span = span.with(target);
            }
        }

        span
    }
}

/// Walk each direction until the edge, stopping before a friendly piece and on an enemy one.
fn sliding(from: Square, directions: &[(i8, i8)], friendly: Bitboard, enemy: Bitboard) -> Bitboard {
    let mut span = Bitboard::EMPTY;
    for &(file_delta, rank_delta) in directions {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            if friendly.contains(next) {
                break;
            }
            span = span.with(next);
            if enemy.contains(next) {
                break;
            }
            current = next;
        }
    }
    span
}

fn jumping(from: Square, offsets: &[(i8, i8)], friendly: Bitboard) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(file_delta, rank_delta)| from.offset(file_delta, rank_delta))
        .filter(|&to| !friendly.contains(to))
        .collect()
}
