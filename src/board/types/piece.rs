//! Piece and team types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides of the game.
///
/// `Player` is the human-controlled side, `Opponent` the computer-controlled
/// side. A piece's team never changes once assigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    Player,
    Opponent,
}

impl Team {
    /// Both teams in index order (Player=0, Opponent=1)
    pub const BOTH: [Team; 2] = [Team::Player, Team::Opponent];

    /// The other team
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Team {
        match self {
            Team::Player => Team::Opponent,
            Team::Opponent => Team::Player,
        }
    }

    /// Back rank for this team (Player pieces start at x=0, Opponent at x=7)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Team::Player => 0,
            Team::Opponent => 7,
        }
    }

    /// Rank a pawn of this team starts on
    #[inline]
    #[must_use]
    pub const fn pawn_rank(self) -> usize {
        match self {
            Team::Player => 1,
            Team::Opponent => 6,
        }
    }

    /// Rank a pawn of this team promotes on
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Team::Player => 7,
            Team::Opponent => 0,
        }
    }

    /// Direction of pawn advance along x (+1 for Player, -1 for Opponent)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Team::Player => 1,
            Team::Opponent => -1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Player => write!(f, "Player"),
            Team::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a lowercase character (p, r, n, b, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert to a lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true if a pawn may promote to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }
}

/// A piece: a kind owned by a team.
///
/// Value semantics, a fact about a square rather than an identity that
/// persists across board copies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Piece { kind, team }
    }

    /// Character form with case based on team (uppercase for Player)
    #[inline]
    #[must_use]
    pub fn to_layout_char(self) -> char {
        let c = self.kind.to_char();
        if self.team == Team::Player {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Parse a piece from a layout character (uppercase Player, lowercase Opponent)
    #[must_use]
    pub fn from_layout_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::Player
        } else {
            Team::Opponent
        };
        Some(Piece { kind, team })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_involution() {
        for team in Team::BOTH {
            assert_eq!(team.flip().flip(), team);
        }
    }

    #[test]
    fn pawn_direction_points_at_promotion_rank() {
        for team in Team::BOTH {
            let start = team.pawn_rank() as isize;
            let steps = (team.promotion_rank() as isize - start) / team.forward();
            assert!(steps > 0);
        }
    }

    #[test]
    fn layout_char_round_trip() {
        for team in Team::BOTH {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, team);
                assert_eq!(Piece::from_layout_char(piece.to_layout_char()), Some(piece));
            }
        }
    }

    #[test]
    fn promotion_targets_exclude_pawn_and_king() {
        assert!(!PieceKind::Pawn.is_promotion_target());
        assert!(!PieceKind::King.is_promotion_target());
        assert!(PieceKind::Queen.is_promotion_target());
        assert!(PieceKind::Knight.is_promotion_target());
    }
}
