//! Perft (performance test) for move generation correctness verification.

use crate::chess_move::Move;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk-counting optimization: no recursive apply).
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&position.apply(mv), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown, in [`Position::legal_moves`] order.
///
/// Each root move counts as one ply, so every entry is at least 1.
pub fn divide(position: &Position, depth: usize) -> Vec<(Move, u64)> {
    position
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, perft(&position.apply(mv), depth.saturating_sub(1))))
        .collect()
}
