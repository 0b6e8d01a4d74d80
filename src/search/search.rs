//! Depth-limited alpha-beta minimax over board positions.
//!
//! Red is the maximizing side, Black the minimizing one. Children are
//! ordered best-first by static evaluation with a canonical content-based
//! tie-break, so pruning behavior is reproducible across runs.

use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Color, BOARD_SIZE};
use crate::eval::evaluate_with;
use crate::game::State;
use crate::movegen;

/// Sentinel exceeding every reachable score, including `eval::WIN`
pub const INFINITE: i32 = 10_000_000;

/// Outcome of one root decision. Stalemate hands the state back unchanged;
/// the caller must stop looping on it.
#[derive(Debug)]
pub enum Decision {
    Play(State),
    Stalemate(State),
}

/// Main search engine
pub struct Search {
    /// Search parameters
    params: SearchParams,

    /// Statistics for the most recent decision
    stats: SearchStats,
}

impl Search {
    /// Create new search engine
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            stats: SearchStats::new(),
        }
    }

    /// Create search with the default depth limit
    pub fn with_defaults() -> Self {
        Self::new(SearchParams::new())
    }

    /// Get search parameters
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Get search statistics
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best next state for the side to move.
    ///
    /// Runs a fixed-depth alpha-beta search below every root candidate and
    /// wraps the winner into a new `State` with the parent link set and the
    /// side flipped. A position with zero legal moves is a stalemate and is
    /// returned unchanged.
    pub fn decide(&mut self, state: State) -> Decision {
        self.stats.reset();
        self.stats.start_timing();

        let set = movegen::legal_positions(&state.board, state.side_to_move);
        let best = match state.side_to_move {
            Color::Red => self.root_max(set.boards),
            Color::Black => self.root_min(set.boards),
        };
        self.stats.update_timing();

        match best {
            Some(board) => Decision::Play(state.advance(board)),
            None => Decision::Stalemate(state),
        }
    }

    /// Root ply for Red: argmax over the candidates
    fn root_max(&mut self, candidates: Vec<Board>) -> Option<Board> {
        let mut alpha = -INFINITE;
        let mut value = -INFINITE;
        let mut best = None;
        for child in self.ordered(candidates, Color::Red) {
            self.stats.inc_node();
            self.stats.inc_root_node();
            let score = self.min_value(&child, alpha, INFINITE, 2);
            if best.is_none() || score > value {
                value = score;
                best = Some(child);
            }
            alpha = alpha.max(value);
        }
        best
    }

    /// Root ply for Black: argmin over the candidates
    fn root_min(&mut self, candidates: Vec<Board>) -> Option<Board> {
        let mut beta = INFINITE;
        let mut value = INFINITE;
        let mut best = None;
        for child in self.ordered(candidates, Color::Black) {
            self.stats.inc_node();
            self.stats.inc_root_node();
            let score = self.max_value(&child, -INFINITE, beta, 2);
            if best.is_none() || score < value {
                value = score;
                best = Some(child);
            }
            beta = beta.min(value);
        }
        best
    }

    /// Value of a position with Red to move
    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        self.stats.inc_node();
        if depth >= self.params.max_depth || board.is_terminal() {
            return evaluate_with(board, self.params.eval);
        }

        let set = movegen::legal_positions(board, Color::Red);
        if set.boards.is_empty() {
            // Red is stalemated in this line; worst case for the maximizer.
            return -INFINITE;
        }

        let mut value = -INFINITE;
        for child in self.ordered(set.boards, Color::Red) {
            value = value.max(self.min_value(&child, alpha, beta, depth + 1));
            if value >= beta {
                self.stats.inc_cutoff();
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    /// Value of a position with Black to move
    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32, depth: u8) -> i32 {
        self.stats.inc_node();
        if depth >= self.params.max_depth || board.is_terminal() {
            return evaluate_with(board, self.params.eval);
        }

        let set = movegen::legal_positions(board, Color::Black);
        if set.boards.is_empty() {
            return INFINITE;
        }

        let mut value = INFINITE;
        for child in self.ordered(set.boards, Color::Black) {
            value = value.min(self.max_value(&child, alpha, beta, depth + 1));
            if value <= alpha {
                self.stats.inc_cutoff();
                return value;
            }
            beta = beta.min(value);
        }
        value
    }

    /// Order candidates best-first for `to_move` (descending score for Red,
    /// ascending for Black). Ties break on the boards' canonical signature
    /// so the ordering is identical across runs and platforms.
    fn ordered(&self, boards: Vec<Board>, to_move: Color) -> Vec<Board> {
        let mut scored: Vec<(i32, [u8; BOARD_SIZE * BOARD_SIZE], Board)> = boards
            .into_iter()
            .map(|b| (evaluate_with(&b, self.params.eval), b.signature(), b))
            .collect();
        scored.sort_unstable_by(|a, b| {
            let by_score = match to_move {
                Color::Red => b.0.cmp(&a.0),
                Color::Black => a.0.cmp(&b.0),
            };
            by_score.then_with(|| a.1.cmp(&b.1))
        });
        scored.into_iter().map(|(_, _, board)| board).collect()
    }
}
