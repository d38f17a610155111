//! Depth-bounded negamax with alpha-beta pruning.
//!
//! The search mutates one board in place. Every move is tried through a
//! [`ProbeGuard`](crate::core::ProbeGuard), so the edge is cleared again
//! before the next sibling is looked at, including when a cutoff stops the
//! scan early.
//!
//! Scores are from the point of view of the player to move:
//! - Completing `k` boxes keeps the turn: the child is searched with the
//!   same sign and `k` is added
//! - Any other move passes the turn: the child is searched with the
//!   negated window and its value negated

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, Edge};
use crate::rules::order_moves;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Bound larger than any reachable score. Negating it never overflows.
pub const SCORE_INF: i32 = 1_000_000;

/// Leaf reward for a box one side from completion.
pub const THREE_SIDED_BONUS: i32 = 100;

/// Leaf penalty for a box that the next move can turn into a gift.
pub const TWO_SIDED_PENALTY: i32 = -50;

/// Static evaluation at the search horizon.
///
/// Sums `+100` for every box with three sides and `-50` for every box with
/// two. The value does not depend on who is to move.
#[must_use]
pub fn heuristic(board: &Board) -> i32 {
    board
        .degrees()
        .map(|(_, degree)| match degree {
            3 => THREE_SIDED_BONUS,
            2 => TWO_SIDED_PENALTY,
            _ => 0,
        })
        .sum()
}

/// Best root move and its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub edge: Edge,
    pub value: i32,
}

/// Negamax search context.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create a new search engine.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics for the most recent [`search`](Self::search) call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best of `candidates` for the player to move.
    ///
    /// Candidates are ordered by [`order_moves`] first. The first ordered
    /// candidate is returned unless a later one scores strictly higher.
    /// Returns `None` when there are no candidates.
    ///
    /// The board is identical to its input state when this returns.
    pub fn search(&mut self, board: &mut Board, candidates: &[Edge]) -> Option<SearchResult> {
        let start = Instant::now();
        self.stats.reset();

        let mut moves = candidates.to_vec();
        order_moves(board, &mut moves);

        let mut best = SearchResult {
            edge: *moves.first()?,
            value: -SCORE_INF,
        };
        let child_depth = self.config.depth.saturating_sub(1);
        let mut alpha = -SCORE_INF;

        for edge in moves {
            let value = self.evaluate_move(board, edge, child_depth, alpha, SCORE_INF);
            if value > best.value {
                best = SearchResult { edge, value };
            }
            alpha = alpha.max(best.value);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            edge = %best.edge,
            value = best.value,
            candidates = candidates.len(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "negamax root search finished"
        );

        Some(best)
    }

    /// Negamax value of the position for the player to move.
    ///
    /// Returns the heuristic at depth 0 and 0 when no move is left.
    pub fn negamax(&mut self, board: &mut Board, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return heuristic(board);
        }

        let mut moves = board.legal_moves();
        if moves.is_empty() {
            return 0;
        }
        order_moves(board, &mut moves);

        let mut best = -SCORE_INF;
        for edge in moves {
            let value = self.evaluate_move(board, edge, depth - 1, alpha, beta);
            best = best.max(value);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Value, for the player to move, of drawing `edge` and searching the
    /// reply to `depth`.
    ///
    /// The window is shifted by the boxes the move completes so the child
    /// bound stays exact when the turn is retained.
    pub fn evaluate_move(
        &mut self,
        board: &mut Board,
        edge: Edge,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        let completed = board.completions(edge) as i32;
        let mut probe = board.probe(edge);

        if completed > 0 {
            completed + self.negamax(&mut probe, depth, alpha - completed, beta - completed)
        } else {
            -self.negamax(&mut probe, depth, -beta, -alpha)
        }
    }
}
