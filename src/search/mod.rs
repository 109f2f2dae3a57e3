//! Adversarial move selection.
//!
//! Fixed-depth minimax with alpha-beta pruning over copy-on-write
//! [`GameState`] snapshots. The searcher plays one side; plies where that
//! side moves are max nodes, the reply plies are min nodes. Leaves are
//! scored by static material ([`eval::evaluate`]) from the searcher's
//! perspective, so the same sign convention holds at every node and the
//! two node kinds are exact mirrors of each other.
//!
//! Moves are visited non-pawns first. Piece moves are the likelier cutoff
//! candidates, so this ordering lets alpha-beta prune earlier without
//! changing the chosen move.

pub mod eval;

pub use eval::{evaluate, PieceValues};

use crate::board::{Move, PieceKind, Team};
use crate::game::GameState;

/// Knobs for a [`Searcher`].
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Plies to look ahead. Must be at least 1.
    pub depth: u32,
    pub values: PieceValues,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            values: PieceValues::default(),
        }
    }
}

/// A fixed-depth alpha-beta searcher playing for one team.
#[derive(Clone, Copy, Debug)]
pub struct Searcher {
    team: Team,
    depth: u32,
    values: PieceValues,
}

impl Searcher {
    /// # Panics
    ///
    /// Panics if `config.depth` is zero; a zero-ply search cannot rank
    /// moves.
    #[must_use]
    pub fn new(team: Team, config: SearchConfig) -> Self {
        assert!(config.depth >= 1, "search depth must be at least 1");
        Searcher {
            team,
            depth: config.depth,
            values: config.values,
        }
    }

    #[inline]
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Pick the best move for this searcher's team in `state`, or `None`
    /// when the team has no legal move (mate or stalemate).
    ///
    /// Ties are broken in favour of the earliest candidate in visit
    /// order, so results are deterministic for a given position.
    #[must_use]
    pub fn select_move(&self, state: &GameState) -> Option<Move> {
        debug_assert_eq!(state.turn, self.team);
        let mut nodes: u64 = 0;
        let mut best: Option<(Move, i32)> = None;

        for mv in ordered_moves(state) {
            let child = state.apply(&mv);
            let score = self.min_value(&child, i32::MIN, i32::MAX, 1, &mut nodes);
            #[cfg(feature = "logging")]
            log::trace!("candidate {mv} scored {score}");
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        #[cfg(feature = "logging")]
        if let Some((mv, score)) = best {
            log::debug!(
                "selected {mv} (score {score}, depth {}, {nodes} nodes)",
                self.depth
            );
        }
        let _ = nodes;
        best.map(|(mv, _)| mv)
    }

    /// Max node: this searcher's team to move.
    fn max_value(
        &self,
        state: &GameState,
        mut alpha: i32,
        beta: i32,
        ply: u32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if ply == self.depth {
            return evaluate(&state.board, self.team, &self.values);
        }
        let mut value = i32::MIN;
        for mv in ordered_moves(state) {
            let child = state.apply(&mv);
            value = value.max(self.min_value(&child, alpha, beta, ply + 1, nodes));
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    /// Min node: the enemy to move. Mirror of [`Self::max_value`].
    fn min_value(
        &self,
        state: &GameState,
        alpha: i32,
        mut beta: i32,
        ply: u32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if ply == self.depth {
            return evaluate(&state.board, self.team, &self.values);
        }
        let mut value = i32::MAX;
        for mv in ordered_moves(state) {
            let child = state.apply(&mv);
            value = value.min(self.max_value(&child, alpha, beta, ply + 1, nodes));
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Legal moves for the side to move, non-pawn movers first.
fn ordered_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut pawn_moves = Vec::new();
    for (sq, piece) in state.board.pieces() {
        if piece.team != state.turn {
            continue;
        }
        let out = if piece.kind == PieceKind::Pawn {
            &mut pawn_moves
        } else {
            &mut moves
        };
        out.extend(state.legal_moves_from(sq));
    }
    moves.extend(pawn_moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder, MoveKind, Square};

    fn searcher(team: Team, depth: u32) -> Searcher {
        Searcher::new(
            team,
            SearchConfig {
                depth,
                values: PieceValues::default(),
            },
        )
    }

    /// Plain minimax with identical leaf scoring; the pruned search must
    /// agree with it on both choice and value.
    fn minimax(state: &GameState, team: Team, ply: u32, depth: u32, maximizing: bool) -> i32 {
        if ply == depth {
            return evaluate(&state.board, team, &PieceValues::default());
        }
        let children: Vec<i32> = ordered_moves(state)
            .iter()
            .map(|mv| minimax(&state.apply(mv), team, ply + 1, depth, !maximizing))
            .collect();
        if maximizing {
            children.into_iter().max().unwrap_or(i32::MIN)
        } else {
            children.into_iter().min().unwrap_or(i32::MAX)
        }
    }

    #[test]
    fn depth_one_grabs_the_hanging_queen() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(3, 0), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::King)
            .piece(Square::at(3, 5), Team::Opponent, PieceKind::Queen)
            .build();
        let state = GameState::with_board(board, Team::Player);
        let mv = searcher(Team::Player, 1).select_move(&state);
        assert_eq!(
            mv,
            Some(Move::capture(Square::at(3, 0), Square::at(3, 5)))
        );
    }

    #[test]
    fn depth_two_declines_a_defended_pawn() {
        // The pawn on (4, 4) is guarded by the rook behind it; a two-ply
        // search sees the recapture and keeps the queen home.
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(1, 1), Team::Player, PieceKind::Queen)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::King)
            .piece(Square::at(4, 4), Team::Opponent, PieceKind::Pawn)
            .piece(Square::at(6, 4), Team::Opponent, PieceKind::Rook)
            .build();
        let state = GameState::with_board(board, Team::Player);
        let mv = searcher(Team::Player, 2)
            .select_move(&state)
            .unwrap();
        assert_ne!(mv.to, Square::at(4, 4));
    }

    #[test]
    fn pruned_search_matches_plain_minimax() {
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(2, 2), Team::Player, PieceKind::Rook)
            .piece(Square::at(1, 6), Team::Player, PieceKind::Knight)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::King)
            .piece(Square::at(5, 1), Team::Opponent, PieceKind::Bishop)
            .piece(Square::at(6, 6), Team::Opponent, PieceKind::Pawn)
            .build();
        let state = GameState::with_board(board, Team::Player);

        let s = searcher(Team::Player, 3);
        let mut nodes = 0;
        let pruned: Vec<i32> = ordered_moves(&state)
            .iter()
            .map(|mv| s.min_value(&state.apply(mv), i32::MIN, i32::MAX, 1, &mut nodes))
            .collect();
        let plain: Vec<i32> = ordered_moves(&state)
            .iter()
            .map(|mv| minimax(&state.apply(mv), Team::Player, 1, 3, false))
            .collect();
        // Pruned interior values may be bounds rather than exact, but the
        // root scores fed back to move selection must agree.
        assert_eq!(pruned, plain);
    }

    #[test]
    fn non_pawn_moves_come_first() {
        let state = GameState::standard();
        let moves = ordered_moves(&state);
        let first_pawn = moves
            .iter()
            .position(|mv| {
                matches!(
                    state.board.piece_at(mv.from),
                    Some(p) if p.kind == PieceKind::Pawn
                )
            })
            .unwrap();
        assert!(moves[first_pawn..].iter().all(|mv| matches!(
            state.board.piece_at(mv.from),
            Some(p) if p.kind == PieceKind::Pawn
        )));
        assert_eq!(first_pawn, 4);
    }

    #[test]
    fn no_legal_moves_yields_none() {
        // Stalemate: a cornered bare king with every flight square covered.
        let board = Board::from_layout(
            "k . . . . . . .\n\
             . . R . . . . .\n\
             . R . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . K . . .",
        )
        .unwrap();
        let state = GameState::with_board(board, Team::Opponent);
        assert!(searcher(Team::Opponent, 2).select_move(&state).is_none());
    }

    #[test]
    fn first_best_candidate_wins_ties() {
        // Bare kings: every move scores identically, so the searcher must
        // return the first candidate in visit order.
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(7, 4), Team::Opponent, PieceKind::King)
            .build();
        let state = GameState::with_board(board, Team::Player);
        let expected = ordered_moves(&state)[0];
        assert_eq!(searcher(Team::Player, 2).select_move(&state), Some(expected));
    }

    #[test]
    fn mate_in_one_is_found() {
        // Back-rank ladder: the rook on (6, 0) cuts off the escape rank
        // while the rook on (5, 1) slides up its file to deliver mate.
        let board = BoardBuilder::new()
            .piece(Square::at(0, 4), Team::Player, PieceKind::King)
            .piece(Square::at(6, 0), Team::Player, PieceKind::Rook)
            .piece(Square::at(5, 1), Team::Player, PieceKind::Rook)
            .piece(Square::at(7, 6), Team::Opponent, PieceKind::King)
            .build();
        let state = GameState::with_board(board, Team::Player);
        let mv = searcher(Team::Player, 3).select_move(&state).unwrap();
        assert_eq!(mv.from, Square::at(5, 1));
        assert_eq!(mv.to.x, 7);
        let after = state.apply(&mv);
        assert!(after.legal_moves().is_empty());
        assert!(after.board.is_king_in_check(Team::Opponent));
        assert!(matches!(mv.kind, MoveKind::Standard));
    }
}
