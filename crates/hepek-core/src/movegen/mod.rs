//! Legal move generation.
//!
//! Candidates come from [`Position::span`]; each one is kept only if applying
//! it leaves the mover's king outside the opponent's attack map.

mod span;

use tracing::trace;

use crate::bitboard::Bitboard;
use crate::castle_rights::Wing;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Position {
    /// Generate every legal move for the side to move.
    ///
    /// Order: piece kind (king, queen, rook, bishop, knight, pawn), then origin
    /// square, then destination square, with promotions as queen, rook, bishop,
    /// knight; castling king-side then queen-side comes last.
    pub fn legal_moves(&self) -> Vec<Move> {
        let us = self.side_to_move();
        let mut moves = Vec::with_capacity(64);

        for kind in PieceKind::ALL {
            for from in self.pieces(us, kind) {
                for to in self.span(from, us, kind) {
                    if kind == PieceKind::Pawn && Bitboard::BACK_RANKS.contains(to) {
                        for promoted in PieceKind::PROMOTIONS {
                            let mv = Move::Promotion { from, to, promoted };
                            if !self.in_check_after(mv) {
                                moves.push(mv);
                            }
                        }
                    } else {
                        let en_passant = kind == PieceKind::Pawn && self.en_passant() == Some(to);
                        let mv = Move::Normal {
                            from,
                            to,
                            kind,
                            capture: self.is_occupied(to) || en_passant,
                        };
                        if !self.in_check_after(mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }

        for wing in Wing::ALL {
            if self.can_castle(wing) {
                moves.push(Move::Castling(wing));
            }
        }

        trace!(count = moves.len(), side = %us, "generated legal moves");
        moves
    }

    /// Return `true` if the side to move has at least one legal move.
    pub fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// Return `true` if playing `mv` would leave the mover's own king attacked.
    ///
    /// Works on a copy; `self` is unchanged.
    pub fn in_check_after(&self, mv: Move) -> bool {
        let us = self.side_to_move();
        let next = self.apply(mv);
        next.is_attacked(next.king_square(us), us.flip())
    }

    /// Castling needs the right, king and rook on their home squares, empty
    /// squares between them, and no attacked square on the king's path.
    fn can_castle(&self, wing: Wing) -> bool {
        let us = self.side_to_move();
        self.castling().has(us, wing)
            && self.pieces(us, PieceKind::King).contains(Wing::king_home(us))
            && self.pieces(us, PieceKind::Rook).contains(wing.rook_home(us))
            && (self.occupancy() & wing.between(us)).is_empty()
            && (self.attack_map(us.flip()) & wing.king_path(us)).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::castle_rights::Wing;
    use crate::chess_move::Move;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    fn position(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_20_moves() {
        let moves = Position::starting_position().legal_moves();
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|mv| matches!(mv, Move::Normal { kind: PieceKind::Knight, .. }))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn enumeration_order() {
        let moves = Position::starting_position().legal_moves();
        assert_eq!(
            moves[0],
            Move::Normal { from: Square::B1, to: Square::A3, kind: PieceKind::Knight, capture: false }
        );
        assert_eq!(
            moves[19],
            Move::Normal { from: Square::H2, to: Square::H4, kind: PieceKind::Pawn, capture: false }
        );
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        // King e1, knight e2, black rook e8.
        let pos = position("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let knight_moves = pos
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == Some(Square::E2))
            .count();
        assert_eq!(knight_moves, 0);
    }

    #[test]
    fn double_check_allows_king_moves_only() {
        // King e1; black knight f3 and rook e8 both give check.
        let pos = position("4r1k1/8/8/8/8/5n2/8/3QK3 w - - 0 1");
        for mv in pos.legal_moves() {
            assert!(
                matches!(mv, Move::Normal { kind: PieceKind::King, .. }),
                "only king moves resolve a double check, got {mv:?}"
            );
        }
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        // Black queen e2 defended by the rook on e8.
        let pos = position("4r2k/8/8/8/8/8/4q3/4K3 w - - 0 1");
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn king_can_capture_undefended_piece() {
        let pos = position("7k/8/8/8/8/8/4q3/4K3 w - - 0 1");
        let moves = pos.legal_moves();
        assert_eq!(
            moves,
            vec![Move::Normal { from: Square::E1, to: Square::E2, kind: PieceKind::King, capture: true }]
        );
    }

    #[test]
    fn castling_both_wings() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = pos.legal_moves();
        assert!(moves.contains(&Move::Castling(Wing::KingSide)));
        assert!(moves.contains(&Move::Castling(Wing::QueenSide)));
        assert_eq!(moves.len(), 26);
    }

    #[test]
    fn castling_blocked_by_attacked_crossing_square() {
        // Bishop a6 covers f1.
        let pos = position("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = pos.legal_moves();
        assert!(!moves.contains(&Move::Castling(Wing::KingSide)));
        assert!(moves.contains(&Move::Castling(Wing::QueenSide)));
    }

    #[test]
    fn castling_blocked_by_attacked_landing_square() {
        // Black king-side: rook on g1 covers g8.
        let pos = position("r3k2r/8/8/8/8/8/8/4K1R1 b kq - 0 1");
        let moves = pos.legal_moves();
        assert!(!moves.contains(&Move::Castling(Wing::KingSide)));
        assert!(moves.contains(&Move::Castling(Wing::QueenSide)));
    }

    #[test]
    fn castling_not_out_of_check() {
        let pos = position("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!pos.legal_moves().iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn queen_side_castling_ignores_attacked_b_file() {
        // Rook b8 covers b1, which the king never crosses.
        let pos = position("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(pos.legal_moves().contains(&Move::Castling(Wing::QueenSide)));
    }

    #[test]
    fn castling_needs_empty_between_squares() {
        let pos = position("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
        assert!(!pos.legal_moves().iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn castling_needs_rook_on_home_square() {
        // Right still recorded but the rook is gone.
        let pos = position("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
        assert!(!pos.legal_moves().iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn en_passant_is_generated_as_capture() {
        let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep = Move::Normal { from: Square::E5, to: Square::D6, kind: PieceKind::Pawn, capture: true };
        assert!(pos.legal_moves().contains(&ep));
    }

    #[test]
    fn en_passant_discovered_check_is_illegal() {
        // King a5, pawns b5/c5, rook h5: bxc6 would open the fifth rank.
        let pos = position("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        assert!(!pos.legal_moves().iter().any(|mv| mv.to() == Some(Square::C6)));
    }

    #[test]
    fn promotion_generates_four_moves() {
        let pos = position("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promotions: Vec<_> = pos
            .legal_moves()
            .into_iter()
            .filter_map(|mv| match mv {
                Move::Promotion { promoted, .. } => Some(promoted),
                _ => None,
            })
            .collect();
        assert_eq!(
            promotions,
            vec![PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]
        );
    }

    #[test]
    fn promotion_candidates_are_filtered_for_check() {
        // The b7 pawn is pinned by the h7 rook; neither b8 nor bxc8 is allowed.
        let pos = position("2b1k3/KP5r/8/8/8/8/8/8 w - - 0 1");
        assert!(!pos.legal_moves().iter().any(|mv| mv.is_promotion()));
    }

    #[test]
    fn capturing_promotion_is_generated() {
        let pos = position("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let captures = pos
            .legal_moves()
            .into_iter()
            .filter(|mv| matches!(mv, Move::Promotion { to: Square::B8, .. }))
            .count();
        assert_eq!(captures, 4);
    }

    #[test]
    fn in_check_after_does_not_mutate() {
        let pos = position("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let snapshot = pos;
        let mv = Move::Normal { from: Square::E2, to: Square::C3, kind: PieceKind::Knight, capture: false };
        assert!(pos.in_check_after(mv));
        assert_eq!(pos, snapshot);
    }

    #[test]
    fn has_legal_moves_polarity() {
        assert!(Position::starting_position().has_legal_moves());
        let mated = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(!mated.has_legal_moves());
    }
}
