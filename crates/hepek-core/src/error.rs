//! Error types for position construction, queries, and FEN parsing.

use crate::side::Side;
use crate::square::Square;

/// A position invariant was broken, or a query was made outside its precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// Ownership was asked of a square that holds no piece.
    #[error("square {square} is not occupied by either side")]
    UnoccupiedSquare {
        /// The queried square.
        square: Square,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {side}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        side: Side,
        /// Number of kings found.
        count: u32,
    },
    /// Two piece masks claim the same square.
    #[error("more than one piece on {square}")]
    OverlappingPieces {
        /// The lowest contested square.
        square: Square,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side that just moved left its own king attacked.
    #[error("{side} king is attacked while it is not {side} to move")]
    OpponentInCheck {
        /// The side not to move.
        side: Side,
    },
    /// The en passant target is not a square a pawn could have just skipped.
    #[error("invalid en passant target {square} for {side} to move")]
    InvalidEnPassant {
        /// The rejected target.
        square: Square,
        /// The side to move.
        side: Side,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active side field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid side string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed fields do not describe a legal position.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying validation error.
        #[from]
        source: PositionError,
    },
}
