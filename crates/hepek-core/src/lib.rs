//! Chess rules core: position representation, legal move generation, and game status.

mod attacks;
mod bitboard;
mod castle_rights;
mod chess_move;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod side;
mod square;
mod status;

pub use attacks::pawn_attacks;
pub use bitboard::Bitboard;
pub use castle_rights::{CastleRights, Wing};
pub use chess_move::Move;
pub use error::{FenError, PositionError};
pub use fen::STARTING_FEN;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{PieceMasks, Position, PrettyPosition};
pub use side::Side;
pub use square::Square;
pub use status::Status;
