//! Value types for the board model.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind};
pub use piece::{Piece, PieceKind, Team};
pub use square::Square;
