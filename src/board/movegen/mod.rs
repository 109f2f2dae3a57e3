//! Two-tier move generation.
//!
//! The pseudo-legal tier enumerates geometrically valid destinations per
//! piece kind, respecting blockers and team occupancy but ignoring king
//! safety. The legal tier simulates each pseudo-legal move on a board copy
//! and discards it when the mover's own king would be attacked afterwards.
//!
//! The split is structural, not an optimization: deciding "is the king
//! attacked" enumerates the enemy's *pseudo-legal* moves only. Filtering
//! those through the legal tier would recurse back into the attack question
//! without end.

mod kings;
mod knights;
mod pawns;
mod sliders;
mod tables;

use sliders::{BISHOP_DIRS, ROOK_DIRS};

use super::{Board, CastlingRights, Move, PieceKind, Square, Team};

impl Board {
    /// Pseudo-legal moves for the piece on `from`; empty when the square is.
    ///
    /// `last_move` is consulted only by pawn generation (en passant window).
    /// Castling never appears at this tier.
    #[must_use]
    pub fn pseudo_moves_from(&self, from: Square, last_move: Option<&Move>) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let team = piece.team;
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, team, last_move),
            PieceKind::Rook => self.slider_moves(from, team, &ROOK_DIRS),
            PieceKind::Bishop => self.slider_moves(from, team, &BISHOP_DIRS),
            PieceKind::Queen => {
                let mut moves = self.slider_moves(from, team, &ROOK_DIRS);
                moves.extend(self.slider_moves(from, team, &BISHOP_DIRS));
                moves
            }
            PieceKind::Knight => self.knight_moves(from, team),
            PieceKind::King => self.king_moves(from, team),
        }
    }

    /// Legal moves for the piece on `from`: pseudo-legal moves that do not
    /// leave the mover's own king in check, plus castling when its
    /// preconditions hold.
    #[must_use]
    pub fn legal_moves_from(
        &self,
        from: Square,
        last_move: Option<&Move>,
        rights: CastlingRights,
    ) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let team = piece.team;
        let mut moves: Vec<Move> = self
            .pseudo_moves_from(from, last_move)
            .into_iter()
            .filter(|mv| !self.apply_move(mv).is_king_in_check(team))
            .collect();
        if piece.kind == PieceKind::King {
            moves.extend(self.castling_moves(from, team, rights));
        }
        moves
    }

    /// Every legal move available to `team`, in scan order over the squares.
    #[must_use]
    pub fn legal_moves(
        &self,
        team: Team,
        last_move: Option<&Move>,
        rights: CastlingRights,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for (sq, piece) in self.pieces() {
            if piece.team == team {
                moves.extend(self.legal_moves_from(sq, last_move, rights));
            }
        }
        moves
    }
}
