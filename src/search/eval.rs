//! Material evaluation.

use crate::board::{Board, PieceKind, Team};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-kind material weights in centipawns.
///
/// The king carries a weight large enough to dominate any material swing so
/// that leaf positions where a king was captured score as decisive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceValues {
    pub pawn: i32,
    pub rook: i32,
    pub knight: i32,
    pub bishop: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        PieceValues {
            pawn: 100,
            rook: 500,
            knight: 320,
            bishop: 330,
            queen: 900,
            king: 20_000,
        }
    }
}

impl PieceValues {
    #[inline]
    #[must_use]
    pub const fn value_of(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Rook => self.rook,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Static evaluation from `team`'s perspective: own material minus enemy
/// material. Symmetric, so `evaluate(b, t, v) == -evaluate(b, t.flip(), v)`.
#[must_use]
pub fn evaluate(board: &Board, team: Team, values: &PieceValues) -> i32 {
    let mut score = 0;
    for (_, piece) in board.pieces() {
        let value = values.value_of(piece.kind);
        if piece.team == team {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}
