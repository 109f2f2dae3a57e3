//! Check detection.

use super::{Board, MoveKind, Team};

impl Board {
    /// Returns true when `team`'s king is attacked on this board.
    ///
    /// Scans every enemy-owned square's pseudo-legal moves for a capture
    /// landing on the king. Strictly the pseudo-legal tier: this function is
    /// itself called by the legality filter, so consulting filtered moves
    /// here would recurse without end.
    ///
    /// A board with no king of `team` (possible in custom scenarios) is never
    /// in check.
    #[must_use]
    pub fn is_king_in_check(&self, team: Team) -> bool {
        let Some(king_sq) = self.find_king(team) else {
            return false;
        };
        for (sq, piece) in self.pieces() {
            if piece.team == team {
                continue;
            }
            for mv in self.pseudo_moves_from(sq, None) {
                if mv.to == king_sq && matches!(mv.kind, MoveKind::Capture) {
                    return true;
                }
            }
        }
        false
    }
}
