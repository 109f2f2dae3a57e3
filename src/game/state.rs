//! Authoritative per-turn state.

use crate::board::{Board, CastlingRights, Move, MoveKind, PieceKind, Square, Team};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the rules engine needs between turns: the board, whose move it
/// is, the previous move (en passant window), and the surviving castling
/// rights.
///
/// A `GameState` is replaced, never mutated: [`GameState::apply`] returns the
/// successor state and leaves the receiver untouched, mirroring the board's
/// own copy-on-write discipline. The search recurses over these snapshots.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    pub turn: Team,
    pub last_move: Option<Move>,
    pub castling: CastlingRights,
}

impl GameState {
    /// The standard opening position, Player to move.
    #[must_use]
    pub fn standard() -> Self {
        GameState {
            board: Board::standard(),
            turn: Team::Player,
            last_move: None,
            castling: CastlingRights::all(),
        }
    }

    /// A custom scenario.
    ///
    /// Castling rights are inferred from the layout: a wing's right is
    /// granted exactly when both the king and that wing's rook stand on
    /// their home squares (pieces found there are assumed unmoved).
    #[must_use]
    pub fn with_board(board: Board, turn: Team) -> Self {
        let mut castling = CastlingRights::none();
        for team in Team::BOTH {
            let back = team.back_rank();
            let king_home = matches!(
                board.piece_at(Square::at(back, 4)),
                Some(p) if p.kind == PieceKind::King && p.team == team
            );
            if !king_home {
                continue;
            }
            for (rook_file, kingside) in [(7usize, true), (0usize, false)] {
                if matches!(
                    board.piece_at(Square::at(back, rook_file)),
                    Some(p) if p.kind == PieceKind::Rook && p.team == team
                ) {
                    castling.grant(team, kingside);
                }
            }
        }
        GameState {
            board,
            turn,
            last_move: None,
            castling,
        }
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .legal_moves(self.turn, self.last_move.as_ref(), self.castling)
    }

    /// Legal moves for the piece on `from`; empty unless it belongs to the
    /// side to move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        match self.board.piece_at(from) {
            Some(piece) if piece.team == self.turn => {
                self.board
                    .legal_moves_from(from, self.last_move.as_ref(), self.castling)
            }
            _ => Vec::new(),
        }
    }

    /// Apply `mv` and return the successor state: new board, turn flipped,
    /// `last_move` recorded, castling rights downgraded as appropriate.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> GameState {
        let mut castling = self.castling;
        if let Some(piece) = self.board.piece_at(mv.from) {
            match piece.kind {
                PieceKind::King => castling.revoke_all(piece.team),
                PieceKind::Rook => {
                    Self::revoke_for_rook_square(&mut castling, mv.from, piece.team);
                }
                _ => {}
            }
        }
        // Capturing a rook on its home square kills that wing for its owner
        if let Some(captured) = self.board.piece_at(mv.to) {
            if captured.kind == PieceKind::Rook {
                Self::revoke_for_rook_square(&mut castling, mv.to, captured.team);
            }
        }

        GameState {
            board: self.board.apply_move(mv),
            turn: self.turn.flip(),
            last_move: Some(*mv),
            castling,
        }
    }

    /// Replace the pawn awaiting promotion without flipping the turn; the
    /// turn already passed when the pawn advanced.
    #[must_use]
    pub(crate) fn resolve_promotion(&self, mv: &Move) -> GameState {
        debug_assert!(matches!(mv.kind, MoveKind::Promotion { .. }));
        GameState {
            board: self.board.apply_move(mv),
            turn: self.turn,
            last_move: self.last_move,
            castling: self.castling,
        }
    }

    fn revoke_for_rook_square(castling: &mut CastlingRights, sq: Square, team: Team) {
        let back = team.back_rank();
        if sq == Square::at(back, 7) {
            castling.revoke(team, true);
        } else if sq == Square::at(back, 0) {
            castling.revoke(team, false);
        }
    }
}
