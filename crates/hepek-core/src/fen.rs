//! FEN string parsing and serialization for [`Position`].
//!
//! The full-move number is read and range-checked but not kept; [`Position::to_fen`]
//! always writes `1` in that field.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{PieceMasks, Position};
use crate::side::Side;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        parse(fen).inspect_err(|err| debug!(%fen, error = %err, "rejected FEN"))
    }
}

fn parse(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }

    let pieces = parse_placement(fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Side::White,
        "b" => Side::Black,
        other => {
            return Err(FenError::InvalidSide {
                found: other.to_string(),
            });
        }
    };

    let castling = CastleRights::from_fen(fields[2])?;

    let en_passant = if fields[3] == "-" {
        None
    } else {
        Some(
            Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?,
        )
    };

    let halfmove_clock = fields[4].parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
        field: "halfmove clock",
        found: fields[4].to_string(),
    })?;

    match fields[5].parse::<u32>() {
        Ok(n) if n >= 1 => {}
        _ => {
            return Err(FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: fields[5].to_string(),
            });
        }
    }

    Ok(Position::from_parts(side_to_move, pieces, halfmove_clock, castling, en_passant)?)
}

fn parse_placement(placement: &str) -> Result<PieceMasks, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut pieces = [[Bitboard::EMPTY; PieceKind::COUNT]; Side::COUNT];

    // FEN lists rank 8 first.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as i8;
        let mut file: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file as i8, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file + 1,
            })?;
            pieces[piece.side.index()][piece.kind.index()] |= sq.bitboard();
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength { rank_index, length: file });
        }
    }

    Ok(pieces)
}

impl Position {
    /// Serialize to FEN. The full-move field is always `1`.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0i8..8).rev() {
            let mut empty = 0;

            for file in 0i8..8 {
                match Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        let side = match self.side_to_move() {
            Side::White => 'w',
            Side::Black => 'b',
        };
        write!(f, " {side} {}", self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} 1", self.halfmove_clock())
    }
}
