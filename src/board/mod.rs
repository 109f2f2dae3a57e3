//! Board model, move generation, and check detection.
//!
//! The board is an 8x8 grid of squares holding at most one piece each.
//! Every transformation returns a fresh, independently owned board; nothing
//! ever mutates a board in place once it is visible to a caller. That
//! copy-on-write discipline is what lets the search explore sibling branches
//! without corrupting one another.
//!
//! # Example
//! ```
//! use chess_ai::board::{Board, CastlingRights, Team};
//!
//! let board = Board::standard();
//! let moves = board.legal_moves(Team::Player, None, CastlingRights::all());
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod check;
mod error;
mod layout;
mod movegen;
mod state;
mod types;


pub use builder::BoardBuilder;
pub use error::LayoutError;
pub use state::Board;
pub use types::{CastlingRights, Move, MoveKind, Piece, PieceKind, Square, Team};
