//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// What a move does to the board beyond relocating a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Relocation onto an empty square
    Standard,
    /// Relocation onto an enemy-occupied square, removing the occupant
    Capture,
    /// Diagonal pawn relocation that removes the pawn on `captured`
    EnPassant { captured: Square },
    /// King relocation paired with a rook relocation in the same step
    Castling { rook_from: Square, rook_to: Square },
    /// In-place replacement of a pawn that reached the far rank; never relocates
    Promotion { promoted: Piece },
}

/// A fully self-describing move.
///
/// Applying a `Move` to a [`Board`](crate::board::Board) requires no context
/// beyond the board itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// A quiet relocation
    #[inline]
    #[must_use]
    pub const fn standard(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Standard,
        }
    }

    /// A capturing relocation
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Capture,
        }
    }

    /// An en passant capture; `captured` names the pawn being removed
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::EnPassant { captured },
        }
    }

    /// A castling move; `from`/`to` describe the king, the rook moves alongside
    #[inline]
    #[must_use]
    pub const fn castling(from: Square, to: Square, rook_from: Square, rook_to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Castling { rook_from, rook_to },
        }
    }

    /// An in-place promotion of the pawn standing on `at`
    #[inline]
    #[must_use]
    pub const fn promotion(at: Square, promoted: Piece) -> Self {
        Move {
            from: at,
            to: at,
            kind: MoveKind::Promotion { promoted },
        }
    }

    /// Returns true if the move removes an enemy piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant { .. })
    }

    /// True when the pawn double-stepped, which opens the en passant window
    #[inline]
    #[must_use]
    pub fn is_double_step(&self) -> bool {
        matches!(self.kind, MoveKind::Standard)
            && self.from.y == self.to.y
            && self.from.x.abs_diff(self.to.x) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Promotion { promoted } => {
                write!(f, "{}={}", self.from, promoted.kind.to_char())
            }
            MoveKind::Castling { .. } => {
                if self.to.y > self.from.y {
                    write!(f, "O-O")
                } else {
                    write!(f, "O-O-O")
                }
            }
            _ => write!(f, "{}{}", self.from, self.to),
        }
    }
}
