//! Fluent builder for constructing board positions.
//!
//! Used by the custom-scenario mode and by tests to set up positions piece
//! by piece.
//!
//! # Example
//! ```
//! use chess_ai::board::{BoardBuilder, PieceKind, Square, Team};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4).unwrap(), Team::Player, PieceKind::King)
//!     .piece(Square::new(7, 4).unwrap(), Team::Opponent, PieceKind::King)
//!     .build();
//! ```

use super::{Board, Piece, PieceKind, Square, Team};

/// A fluent builder for [`Board`] positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a piece, replacing any prior occupant of the square
    #[must_use]
    pub fn piece(mut self, square: Square, team: Team, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, team)));
        self
    }

    /// Remove whatever occupies `square`
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, piece) in self.pieces {
            board.set_piece(sq, piece);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_pieces() {
        let board = BoardBuilder::new()
            .piece(Square::at(3, 3), Team::Player, PieceKind::Queen)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::King)
            .build();
        assert_eq!(
            board.piece_at(Square::at(3, 3)),
            Some(Piece::new(PieceKind::Queen, Team::Player))
        );
        assert_eq!(board.piece_count(Team::Opponent), 1);
    }

    #[test]
    fn later_placement_wins_the_square() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 0), Team::Player, PieceKind::Rook)
            .piece(Square::at(0, 0), Team::Opponent, PieceKind::Knight)
            .build();
        assert_eq!(
            board.piece_at(Square::at(0, 0)),
            Some(Piece::new(PieceKind::Knight, Team::Opponent))
        );
    }

    #[test]
    fn clear_removes_a_placement() {
        let board = BoardBuilder::new()
            .piece(Square::at(2, 2), Team::Player, PieceKind::Bishop)
            .clear(Square::at(2, 2))
            .build();
        assert!(board.is_empty(Square::at(2, 2)));
    }
}
