//! A chess rules engine with an adversarial search core.
//!
//! The crate is split into three layers:
//!
//! - [`board`]: the position itself. Piece and square types, copy-on-write
//!   board transformations, ASCII layouts, and the two-tier move generator
//!   (raw piece movement, then the legality filter that rejects moves
//!   leaving the mover's king attacked).
//! - [`search`]: fixed-depth minimax with alpha-beta pruning over board
//!   snapshots, scored by static material evaluation.
//! - [`game`]: the turn machine. Validates submitted moves, runs the
//!   searcher for the opposing side, handles pawn promotion, and settles
//!   checkmate and stalemate.
//!
//! ```
//! use chess_ai::{Game, Move, Outcome, SearchConfig, Square};
//!
//! let mut game = Game::new(SearchConfig { depth: 2, ..SearchConfig::default() });
//! game.submit_move(&Move::standard(Square::at(1, 4), Square::at(3, 4)))?;
//! let reply = game.play_opponent_turn()?;
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! println!("opponent played {reply}");
//! # Ok::<(), chess_ai::GameError>(())
//! ```

pub mod board;
pub mod game;
pub mod search;

pub use board::{
    Board, BoardBuilder, CastlingRights, LayoutError, Move, MoveKind, Piece, PieceKind,
    Square, Team,
};
pub use game::{Game, GameError, GameState, Outcome, Phase};
pub use search::{evaluate, PieceValues, SearchConfig, Searcher};
