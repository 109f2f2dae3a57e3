//! Castling rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Team;

const CASTLE_PLAYER_K: u8 = 1 << 0;
const CASTLE_PLAYER_Q: u8 = 1 << 1;
const CASTLE_OPPONENT_K: u8 = 1 << 2;
const CASTLE_OPPONENT_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_PLAYER_K | CASTLE_PLAYER_Q | CASTLE_OPPONENT_K | CASTLE_OPPONENT_Q;

/// Castling rights as a bitmask, one bit per (team, wing).
///
/// A right is held while the relevant king and rook are both unmoved; it is
/// lost permanently once either moves (or the rook is captured).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check a specific right (`kingside` false means queenside)
    #[inline]
    #[must_use]
    pub const fn has(self, team: Team, kingside: bool) -> bool {
        self.0 & Self::bit_for(team, kingside) != 0
    }

    /// Grant a specific right
    #[inline]
    pub fn grant(&mut self, team: Team, kingside: bool) {
        self.0 |= Self::bit_for(team, kingside);
    }

    /// Revoke a specific right
    #[inline]
    pub fn revoke(&mut self, team: Team, kingside: bool) {
        self.0 &= !Self::bit_for(team, kingside);
    }

    /// Revoke both rights of a team (king moved)
    #[inline]
    pub fn revoke_all(&mut self, team: Team) {
        self.revoke(team, true);
        self.revoke(team, false);
    }

    const fn bit_for(team: Team, kingside: bool) -> u8 {
        match (team, kingside) {
            (Team::Player, true) => CASTLE_PLAYER_K,
            (Team::Player, false) => CASTLE_PLAYER_Q,
            (Team::Opponent, true) => CASTLE_OPPONENT_K,
            (Team::Opponent, false) => CASTLE_OPPONENT_Q,
        }
    }
}
