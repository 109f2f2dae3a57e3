use super::super::{Board, Move, Square, Team};

/// Rook ray directions (along rank and file)
pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop ray directions (diagonals)
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Pseudo-legal sliding moves from `from` along `dirs`, stopping each ray
    /// at the first occupied square; that square is a capture when enemy-owned.
    ///
    /// Queens slide along both rook and bishop rays.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        team: Team,
        dirs: &[(isize, isize)],
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for &(dx, dy) in dirs {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dx, dy) {
                match self.piece_at(to) {
                    None => moves.push(Move::standard(from, to)),
                    Some(occupant) => {
                        if occupant.team != team {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
        moves
    }
}
