//! The turn machine.
//!
//! [`Game`] arbitrates a match between a human-driven side and the built-in
//! searcher. It owns the authoritative [`GameState`], validates submitted
//! moves against the legal move generator, tracks the pawn-promotion
//! side-state, and settles the outcome after every completed move. Callers
//! never mutate the position directly; they only see cloned snapshots.

mod state;

pub use state::GameState;

use std::fmt;

use crate::board::{Board, Move, Piece, PieceKind, Square, Team};
use crate::search::{SearchConfig, Searcher};

/// How a finished game ended, or that it has not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// The named team delivered mate.
    Checkmate(Team),
    Stalemate,
}

/// What the game is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The named team is to move.
    Turn(Team),
    /// The named team must choose a promotion piece before play continues.
    PromotionPending(Team),
    Finished(Outcome),
}

/// A rejected request against the [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The move is not among the legal moves of the side to move.
    IllegalMove { from: Square, to: Square },
    /// The game has already ended.
    GameOver,
    /// A promotion choice is outstanding and must be resolved first.
    PromotionPending,
    /// A promotion choice was supplied but no pawn is awaiting one.
    NoPendingPromotion,
    /// Pawns and kings are not promotion targets.
    InvalidPromotion { kind: PieceKind },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { from, to } => {
                write!(f, "illegal move from {from} to {to}")
            }
            GameError::GameOver => write!(f, "the game is over"),
            GameError::PromotionPending => {
                write!(f, "a promotion choice is pending")
            }
            GameError::NoPendingPromotion => {
                write!(f, "no pawn is awaiting promotion")
            }
            GameError::InvalidPromotion { kind } => {
                write!(f, "a pawn cannot promote to a {kind:?}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A match between the Player side and the searcher-driven Opponent.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    searcher: Searcher,
    pending_promotion: Option<Square>,
    outcome: Outcome,
}

impl Game {
    /// A fresh game from the standard position, Player to move, with the
    /// searcher playing Opponent.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Game::from_state(GameState::standard(), config)
    }

    /// A game from a custom position. Castling rights are inferred from
    /// home squares as in [`GameState::with_board`].
    #[must_use]
    pub fn with_board(board: Board, turn: Team, config: SearchConfig) -> Self {
        Game::from_state(GameState::with_board(board, turn), config)
    }

    fn from_state(state: GameState, config: SearchConfig) -> Self {
        let mut game = Game {
            state,
            searcher: Searcher::new(Team::Opponent, config),
            pending_promotion: None,
            outcome: Outcome::InProgress,
        };
        game.refresh_outcome();
        game
    }

    /// A snapshot of the current position.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.state.board.clone()
    }

    #[inline]
    #[must_use]
    pub const fn current_turn(&self) -> Team {
        self.state.turn
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The square whose pawn is awaiting a promotion choice, if any.
    #[inline]
    #[must_use]
    pub const fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.outcome != Outcome::InProgress {
            Phase::Finished(self.outcome)
        } else if self.pending_promotion.is_some() {
            // The turn flipped when the pawn advanced; the chooser is the
            // side that just moved.
            Phase::PromotionPending(self.state.turn.flip())
        } else {
            Phase::Turn(self.state.turn)
        }
    }

    /// Legal moves for the piece on `from`. Empty while the game is over,
    /// a promotion is pending, or the piece does not belong to the side to
    /// move.
    #[must_use]
    pub fn query_legal_moves(&self, from: Square) -> Vec<Move> {
        if self.outcome != Outcome::InProgress || self.pending_promotion.is_some() {
            return Vec::new();
        }
        self.state.legal_moves_from(from)
    }

    /// Play `mv` for the side to move.
    ///
    /// The move must be one the generator produces for the current
    /// position; anything else is rejected and the game is unchanged. A
    /// pawn reaching its promotion rank leaves the game in the
    /// promotion-pending phase until [`Game::apply_promotion_choice`]
    /// resolves it.
    pub fn submit_move(&mut self, mv: &Move) -> Result<(), GameError> {
        if self.outcome != Outcome::InProgress {
            return Err(GameError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(GameError::PromotionPending);
        }
        if !self.state.legal_moves_from(mv.from).contains(mv) {
            return Err(GameError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        let mover = self.state.turn;
        self.state = self.state.apply(mv);
        if Self::reached_promotion_rank(&self.state.board, mv.to, mover) {
            self.pending_promotion = Some(mv.to);
        } else {
            self.refresh_outcome();
        }
        Ok(())
    }

    /// Resolve a pending promotion by replacing the pawn with `kind`.
    pub fn apply_promotion_choice(&mut self, kind: PieceKind) -> Result<(), GameError> {
        let at = self.pending_promotion.ok_or(GameError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(GameError::InvalidPromotion { kind });
        }
        // The pawn belongs to the side that just moved.
        let team = self.state.turn.flip();
        let mv = Move::promotion(at, Piece::new(kind, team));
        self.state = self.state.resolve_promotion(&mv);
        self.pending_promotion = None;
        self.refresh_outcome();
        Ok(())
    }

    /// Let the searcher pick and play a move for its side. Returns the
    /// move it chose. An AI pawn reaching its promotion rank promotes to a
    /// queen immediately; the pending phase exists for interactive callers
    /// only.
    pub fn play_opponent_turn(&mut self) -> Result<Move, GameError> {
        if self.outcome != Outcome::InProgress {
            return Err(GameError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(GameError::PromotionPending);
        }
        debug_assert_eq!(self.state.turn, self.searcher.team());
        // Outcome is refreshed after every completed move, so an
        // in-progress game always has at least one legal move here.
        let mv = self
            .searcher
            .select_move(&self.state)
            .ok_or(GameError::GameOver)?;
        let mover = self.state.turn;
        self.state = self.state.apply(&mv);
        if Self::reached_promotion_rank(&self.state.board, mv.to, mover) {
            let promoted = Piece::new(PieceKind::Queen, mover);
            let choice = Move::promotion(mv.to, promoted);
            self.state = self.state.resolve_promotion(&choice);
        }
        self.refresh_outcome();
        Ok(mv)
    }

    fn reached_promotion_rank(board: &Board, to: Square, mover: Team) -> bool {
        to.x == mover.promotion_rank()
            && matches!(
                board.piece_at(to),
                Some(p) if p.kind == PieceKind::Pawn && p.team == mover
            )
    }

    /// Settle the outcome for the side now to move: no legal moves means
    /// checkmate when in check, stalemate otherwise.
    fn refresh_outcome(&mut self) {
        if !self.state.legal_moves().is_empty() {
            return;
        }
        let side = self.state.turn;
        self.outcome = if self.state.board.is_king_in_check(side) {
            Outcome::Checkmate(side.flip())
        } else {
            Outcome::Stalemate
        };
    }
}
