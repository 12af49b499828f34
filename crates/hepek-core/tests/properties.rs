//! Integration tests for the rules core.
//!
//! Walks every position reachable from a handful of fixtures to a small depth
//! and checks the structural and transition properties on each ply.

use hepek_core::{Move, PieceKind, Position, STARTING_FEN, Side, Square, Status, Wing, perft};

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const EN_PASSANT_PIN_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

const PROMOTIONS_FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

/// Helper: call `check` on every (position, move, child) triple reachable within `depth` plies.
fn walk(position: &Position, depth: usize, check: &mut impl FnMut(&Position, Move, &Position)) {
    if depth == 0 {
        return;
    }
    for mv in position.legal_moves() {
        let child = position.apply(mv);
        check(position, mv, &child);
        walk(&child, depth - 1, check);
    }
}

fn fixtures() -> Vec<(Position, usize)> {
    vec![
        (STARTING_FEN.parse().unwrap(), 3),
        (KIWIPETE_FEN.parse().unwrap(), 2),
        (EN_PASSANT_PIN_FEN.parse().unwrap(), 3),
        (PROMOTIONS_FEN.parse().unwrap(), 2),
    ]
}

fn piece_count(position: &Position) -> u32 {
    position.occupancy().count()
}

// ── Structural invariants ─────────────────────────────────────────────────────

#[test]
fn reachable_positions_keep_structural_invariants() {
    for (root, depth) in fixtures() {
        walk(&root, depth, &mut |_, mv, child| {
            if let Err(err) = child.validate() {
                panic!("{mv:?} from {root:?} produced an invalid position: {err}");
            }
            for side in Side::ALL {
                assert_eq!(child.pieces(side, PieceKind::King).count(), 1);
            }
        });
    }
}

#[test]
fn apply_leaves_input_untouched() {
    for (root, depth) in fixtures() {
        walk(&root, depth.min(2), &mut |parent, mv, _| {
            let snapshot = *parent;
            let _ = parent.apply(mv);
            assert_eq!(*parent, snapshot);
        });
    }
}

#[test]
fn no_legal_move_leaves_own_king_attacked() {
    for (root, depth) in fixtures() {
        walk(&root, depth, &mut |parent, mv, child| {
            let mover = parent.side_to_move();
            assert!(
                !child.is_attacked(child.king_square(mover), mover.flip()),
                "{mv:?} from {parent:?} leaves the king in check"
            );
        });
    }
}

// ── Transition properties ─────────────────────────────────────────────────────

#[test]
fn side_to_move_alternates() {
    for (root, depth) in fixtures() {
        walk(&root, depth, &mut |parent, _, child| {
            assert_eq!(child.side_to_move(), parent.side_to_move().flip());
        });
    }

    let start = Position::starting_position();
    let first = start.legal_moves()[0];
    let after_one = start.apply(first);
    let reply = after_one.legal_moves()[0];
    assert_eq!(after_one.apply(reply).side_to_move(), start.side_to_move());
}

#[test]
fn captures_remove_exactly_one_piece() {
    let mut captures = 0;
    for (root, depth) in fixtures() {
        walk(&root, depth, &mut |parent, mv, child| match mv {
            Move::Normal { capture: true, .. } => {
                captures += 1;
                assert_eq!(
                    piece_count(child),
                    piece_count(parent) - 1,
                    "{mv:?} from {parent:?}"
                );
            }
            Move::Normal { capture: false, .. } | Move::Castling(_) => {
                assert_eq!(piece_count(child), piece_count(parent), "{mv:?} from {parent:?}");
            }
            Move::Promotion { .. } => {}
        });
    }
    assert!(captures > 0);
}

#[test]
fn en_passant_target_lives_for_one_ply() {
    for (root, depth) in fixtures() {
        walk(&root, depth, &mut |_, mv, child| match mv {
            Move::Normal {
                from,
                to,
                kind: PieceKind::Pawn,
                ..
            } if from.rank().abs_diff(to.rank()) == 2 => {
                let midpoint = Square::from_coords(from.file(), (from.rank() + to.rank()) / 2);
                assert_eq!(child.en_passant(), midpoint);
            }
            _ => assert_eq!(child.en_passant(), None, "{mv:?} kept an en passant target"),
        });
    }
}

#[test]
fn castling_rights_never_return() {
    for (root, depth) in fixtures() {
        walk(&root, depth, &mut |parent, mv, child| {
            for side in Side::ALL {
                for wing in Wing::ALL {
                    if !parent.castling().has(side, wing) {
                        assert!(
                            !child.castling().has(side, wing),
                            "{mv:?} restored {side} {wing:?} castling"
                        );
                    }
                }
            }
        });
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn initial_position_has_twenty_moves() {
    let moves = Position::starting_position().legal_moves();
    assert_eq!(moves.len(), 20);
    let pawn_moves = moves
        .iter()
        .filter(|mv| matches!(mv, Move::Normal { kind: PieceKind::Pawn, .. }))
        .count();
    assert_eq!(pawn_moves, 16);
}

#[test]
fn king_side_castling_blocked_by_attack() {
    // Black bishop on a6 covers f1.
    let position: Position = "4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
    let moves = position.legal_moves();
    assert!(!moves.contains(&Move::Castling(Wing::KingSide)));
    assert!(moves.contains(&Move::Castling(Wing::QueenSide)));
}

#[test]
fn promotion_branches_four_ways() {
    let position: Position = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    let promotions: Vec<PieceKind> = position
        .legal_moves()
        .into_iter()
        .filter_map(|mv| match mv {
            Move::Promotion { from, to, promoted } => {
                assert_eq!((from, to), (Square::A7, Square::A8));
                Some(promoted)
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        promotions,
        [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]
    );
}

#[test]
fn scholars_mate_is_checkmate() {
    let position: Position = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1"
        .parse()
        .unwrap();
    assert!(position.is_checkmate());
    assert_eq!(position.status(), Status::Checkmate);
    assert!(position.legal_moves().is_empty());
}

#[test]
fn perft_through_public_api() {
    assert_eq!(perft(&Position::starting_position(), 3), 8_902);
    let position: Position = EN_PASSANT_PIN_FEN.parse().unwrap();
    assert_eq!(perft(&position, 3), 2_812);
}
