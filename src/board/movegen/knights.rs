use super::super::{Board, Move, Square, Team};
use super::tables::KNIGHT_TARGETS;

impl Board {
    /// Pseudo-legal knight moves from `from`: the eight L-shaped offsets,
    /// excluding own-occupied and off-board destinations.
    pub(crate) fn knight_moves(&self, from: Square, team: Team) -> Vec<Move> {
        let mut moves = Vec::new();
        for &to in &KNIGHT_TARGETS[from.index()] {
            match self.piece_at(to) {
                None => moves.push(Move::standard(from, to)),
                Some(occupant) if occupant.team != team => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
        moves
    }
}
