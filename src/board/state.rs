//! Board representation and move application.

use super::{Move, MoveKind, Piece, PieceKind, Square, Team};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8x8 grid of squares, each holding at most one piece.
///
/// A board is always fully populated and independently owned: `Clone` is a
/// deep copy, and every transformation returns a new board, leaving the input
/// untouched. Search branches therefore never share mutable state.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// An empty board
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard opening position.
    ///
    /// Player pieces occupy ranks x=0..2, Opponent pieces x=6..8; both queens
    /// stand on file y=3, both kings on y=4.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (y, &kind) in back_rank.iter().enumerate() {
            board.set_piece(Square::at(0, y), Piece::new(kind, Team::Player));
            board.set_piece(Square::at(7, y), Piece::new(kind, Team::Opponent));
            board.set_piece(Square::at(1, y), Piece::new(PieceKind::Pawn, Team::Player));
            board.set_piece(Square::at(6, y), Piece::new(PieceKind::Pawn, Team::Opponent));
        }
        board
    }

    /// The piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.x][sq.y]
    }

    /// Returns true if `sq` holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.x][sq.y].is_none()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.x][sq.y] = Some(piece);
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.x][sq.y] = None;
    }

    /// Iterate the occupied squares in scan order (x outer, y inner)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Locate the king of `team`, if present (custom scenarios may omit one)
    #[must_use]
    pub fn find_king(&self, team: Team) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.team == team)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces owned by `team`
    #[must_use]
    pub fn piece_count(&self, team: Team) -> usize {
        self.pieces().filter(|(_, p)| p.team == team).count()
    }

    /// Apply `mv` to a fresh copy of this board and return it.
    ///
    /// The receiver is never mutated; the result shares no storage with it.
    /// Moving from an empty square indicates an upstream construction bug and
    /// panics in debug builds.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        match mv.kind {
            MoveKind::Standard | MoveKind::Capture => {
                next.relocate(mv.from, mv.to);
            }
            MoveKind::EnPassant { captured } => {
                next.clear_square(captured);
                next.relocate(mv.from, mv.to);
            }
            MoveKind::Castling { rook_from, rook_to } => {
                next.relocate(mv.from, mv.to);
                next.relocate(rook_from, rook_to);
            }
            MoveKind::Promotion { promoted } => {
                debug_assert!(
                    matches!(next.piece_at(mv.from), Some(p) if p.kind == PieceKind::Pawn),
                    "promotion applied to a non-pawn square {}",
                    mv.from
                );
                next.set_piece(mv.from, promoted);
            }
        }
        next
    }

    fn relocate(&mut self, from: Square, to: Square) {
        debug_assert!(
            self.piece_at(from).is_some(),
            "move from empty square {from}"
        );
        self.squares[to.x][to.y] = self.squares[from.x][from.y].take();
    }
}
