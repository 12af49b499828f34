//! Terminal-state queries: check, checkmate, stalemate.

use crate::position::Position;

/// Outcome of a position from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The side to move has at least one legal move.
    Ongoing,
    /// In check with no legal move.
    Checkmate,
    /// Not in check, but no legal move.
    Stalemate,
}

impl Position {
    /// Return `true` if the side to move's king is attacked.
    pub fn is_check(&self) -> bool {
        let us = self.side_to_move();
        self.is_attacked(self.king_square(us), us.flip())
    }

    /// Return `true` if the side to move is in check and has no legal move.
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    /// Return `true` if the side to move is not in check but has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    /// Classify the position, generating moves only once.
    pub fn status(&self) -> Status {
        if self.has_legal_moves() {
            Status::Ongoing
        } else if self.is_check() {
            Status::Checkmate
        } else {
            Status::Stalemate
        }
    }
}
