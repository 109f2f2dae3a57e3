use super::super::{Board, Move, MoveKind, PieceKind, Square, Team};

impl Board {
    /// Pseudo-legal pawn moves from `from`.
    ///
    /// `last_move` enables the en passant window: a capture is offered only
    /// when the immediately preceding move was an enemy pawn's double step
    /// landing laterally adjacent on the same rank.
    ///
    /// A move onto the far rank is still a plain relocation here; replacing
    /// the pawn is a separate in-place [`MoveKind::Promotion`] issued by the
    /// turn state machine.
    pub(crate) fn pawn_moves(
        &self,
        from: Square,
        team: Team,
        last_move: Option<&Move>,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = team.forward();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::standard(from, forward));
                // Double step: only from the starting rank, both squares empty
                if from.x == team.pawn_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::standard(from, double));
                        }
                    }
                }
            }
        }

        for dy in [-1, 1] {
            if let Some(target) = from.offset(dir, dy) {
                if let Some(occupant) = self.piece_at(target) {
                    if occupant.team != team {
                        moves.push(Move::capture(from, target));
                    }
                }
            }
        }

        if let Some(mv) = self.en_passant_move(from, team, last_move) {
            moves.push(mv);
        }

        moves
    }

    fn en_passant_move(&self, from: Square, team: Team, last_move: Option<&Move>) -> Option<Move> {
        let last = last_move?;
        let moved = self.piece_at(last.to)?;
        // The window exists for exactly one ply after an enemy pawn's double step
        if moved.team == team || moved.kind != PieceKind::Pawn || !last.is_double_step() {
            return None;
        }
        if last.to.x != from.x || last.to.y.abs_diff(from.y) != 1 {
            return None;
        }
        let to = Square::new((from.x as isize + team.forward()) as usize, last.to.y)?;
        if !self.is_empty(to) {
            return None;
        }
        Some(Move::en_passant(from, to, last.to))
    }
}
