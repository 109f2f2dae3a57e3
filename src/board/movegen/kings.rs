use super::super::{Board, CastlingRights, Move, PieceKind, Square, Team};
use super::tables::KING_TARGETS;

impl Board {
    /// Pseudo-legal king steps from `from`: the eight adjacent squares,
    /// excluding own-occupied destinations. Castling is not generated here;
    /// its preconditions consult attack information and belong to the legal
    /// tier.
    pub(crate) fn king_moves(&self, from: Square, team: Team) -> Vec<Move> {
        let mut moves = Vec::new();
        for &to in &KING_TARGETS[from.index()] {
            match self.piece_at(to) {
                None => moves.push(Move::standard(from, to)),
                Some(occupant) if occupant.team != team => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
        moves
    }

    /// Castling moves for a king standing on its home square.
    ///
    /// Standard rule: the right must still be held (king and rook unmoved),
    /// every square between them empty, the king not currently in check, and
    /// neither the square the king passes through nor the landing square
    /// attacked.
    pub(crate) fn castling_moves(
        &self,
        from: Square,
        team: Team,
        rights: CastlingRights,
    ) -> Vec<Move> {
        let back = team.back_rank();
        if from != Square::at(back, 4) {
            return Vec::new();
        }

        let mut moves = Vec::new();

        if rights.has(team, true)
            && self.is_empty(Square::at(back, 5))
            && self.is_empty(Square::at(back, 6))
            && self.has_rook(Square::at(back, 7), team)
            && self.king_path_is_safe(from, &[Square::at(back, 5), Square::at(back, 6)], team)
        {
            moves.push(Move::castling(
                from,
                Square::at(back, 6),
                Square::at(back, 7),
                Square::at(back, 5),
            ));
        }

        if rights.has(team, false)
            && self.is_empty(Square::at(back, 1))
            && self.is_empty(Square::at(back, 2))
            && self.is_empty(Square::at(back, 3))
            && self.has_rook(Square::at(back, 0), team)
            && self.king_path_is_safe(from, &[Square::at(back, 3), Square::at(back, 2)], team)
        {
            moves.push(Move::castling(
                from,
                Square::at(back, 2),
                Square::at(back, 0),
                Square::at(back, 3),
            ));
        }

        moves
    }

    fn has_rook(&self, sq: Square, team: Team) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.kind == PieceKind::Rook && p.team == team)
    }

    /// The king may not castle out of, through, or into check. Transit squares
    /// are tested by relocating the king onto each and re-running the attack
    /// scan on the resulting board copy.
    fn king_path_is_safe(&self, from: Square, transit: &[Square], team: Team) -> bool {
        if self.is_king_in_check(team) {
            return false;
        }
        transit.iter().all(|&sq| {
            !self
                .apply_move(&Move::standard(from, sq))
                .is_king_in_check(team)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::BoardBuilder;
    use super::*;

    #[test]
    fn center_king_steps_to_eight_squares() {
        let board = BoardBuilder::new()
            .piece(Square::at(3, 3), Team::Player, PieceKind::King)
            .build();
        assert_eq!(board.king_moves(Square::at(3, 3), Team::Player).len(), 8);
    }

    #[test]
    fn king_excludes_own_occupied_squares() {
        let board = Board::standard();
        assert!(board.king_moves(Square::at(0, 4), Team::Player).is_empty());
    }

    fn castling_ready() -> Board {
        BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(0, 0), Team::Player, PieceKind::Rook)
            .piece(Square::at(0, 7), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::King)
            .build()
    }

    #[test]
    fn both_wings_offered_when_clear() {
        let board = castling_ready();
        let moves = board.castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all());
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == Square::at(0, 6)));
        assert!(moves.iter().any(|m| m.to == Square::at(0, 2)));
    }

    #[test]
    fn withheld_without_the_right() {
        let board = castling_ready();
        let mut rights = CastlingRights::all();
        rights.revoke(Team::Player, true);
        let moves = board.castling_moves(Square::at(0, 4), Team::Player, rights);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::at(0, 2));
    }

    #[test]
    fn withheld_when_path_is_occupied() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(0, 7), Team::Player, PieceKind::Rook)
            .piece(Square::at(0, 5), Team::Player, PieceKind::Bishop)
            .build();
        assert!(board
            .castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all())
            .is_empty());
    }

    #[test]
    fn withheld_while_in_check() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(0, 7), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::Rook)
            .build();
        assert!(board
            .castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all())
            .is_empty());
    }

    #[test]
    fn withheld_when_king_would_pass_through_attack() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(0, 7), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 5), Team::Opponent, PieceKind::Rook)
            .build();
        assert!(board
            .castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all())
            .is_empty());
    }

    #[test]
    fn withheld_when_landing_square_is_attacked() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(0, 7), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 6), Team::Opponent, PieceKind::Rook)
            .build();
        assert!(board
            .castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all())
            .is_empty());
    }

    #[test]
    fn queenside_b_file_attack_does_not_block() {
        // Only the squares the king crosses need to be safe
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(0, 0), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 1), Team::Opponent, PieceKind::Rook)
            .build();
        let moves = board.castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all());
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::at(0, 2));
    }

    #[test]
    fn withheld_when_rook_is_missing() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .build();
        assert!(board
            .castling_moves(Square::at(0, 4), Team::Player, CastlingRights::all())
            .is_empty());
    }
}
