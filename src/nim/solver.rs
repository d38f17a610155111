//! Loony-endgame move selection by nim-sum.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, Edge, GameRng};

use super::component::nim_sum;

/// Move chosen by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimDecision {
    pub edge: Edge,
    /// True if the move leaves the opponent a zero nim-sum.
    pub winning: bool,
}

/// Endgame oracle for positions where every move gives a box away.
#[derive(Clone, Copy, Debug, Default)]
pub struct NimSumSolver;

impl NimSumSolver {
    pub fn new() -> Self {
        Self
    }

    /// Candidates that leave a zero nim-sum, in candidate order.
    ///
    /// Each candidate is drawn in place, scored and cleared again; the board
    /// is unchanged when this returns.
    pub fn winning_moves(&self, board: &mut Board, candidates: &[Edge]) -> Vec<Edge> {
        candidates
            .iter()
            .copied()
            .filter(|&edge| nim_sum(&board.probe(edge)) == 0)
            .collect()
    }

    /// Pick uniformly among winning candidates, or among all candidates if
    /// none wins. Returns `None` only when `candidates` is empty.
    pub fn decide(
        &self,
        board: &mut Board,
        candidates: &[Edge],
        rng: &mut GameRng,
    ) -> Option<NimDecision> {
        let winning = self.winning_moves(board, candidates);
        let decision = match rng.choose(&winning) {
            Some(&edge) => NimDecision { edge, winning: true },
            None => NimDecision {
                edge: *rng.choose(candidates)?,
                winning: false,
            },
        };

        trace!(
            edge = %decision.edge,
            winning = decision.winning,
            winning_count = winning.len(),
            candidates = candidates.len(),
            "nim-sum endgame decision"
        );
        Some(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nim::component::tests::chain_and_loop;
    use crate::rules::{MoveClass, MovePartition};

    #[test]
    fn test_winning_move_breaks_the_loop() {
        let mut board = chain_and_loop();
        let snapshot = board.clone();

        // Closing the loop's corner turns it into a chain of 3, and 3 ^ 3 = 0.
        // Capping the chain's tail leaves chain 2 and loop 1: 2 ^ 1 = 3.
        let candidates = [Edge::vertical(0, 0), Edge::horizontal(5, 0)];
        let winning = NimSumSolver::new().winning_moves(&mut board, &candidates);

        assert_eq!(winning, vec![Edge::vertical(0, 0)]);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_decide_prefers_winning() {
        let mut board = chain_and_loop();
        let candidates = [Edge::horizontal(5, 0), Edge::vertical(0, 0)];

        for seed in 0..10 {
            let decision = NimSumSolver::new()
                .decide(&mut board, &candidates, &mut GameRng::new(seed))
                .unwrap();
            assert_eq!(decision.edge, Edge::vertical(0, 0));
            assert!(decision.winning);
        }
    }

    #[test]
    fn test_decide_falls_back_to_any_candidate() {
        let mut board = chain_and_loop();
        let candidates = [Edge::horizontal(5, 0)];

        let decision = NimSumSolver::new()
            .decide(&mut board, &candidates, &mut GameRng::new(1))
            .unwrap();
        assert_eq!(decision.edge, Edge::horizontal(5, 0));
        assert!(!decision.winning);
    }

    #[test]
    fn test_decide_without_candidates() {
        let mut board = Board::new(2, 2);
        assert!(NimSumSolver::new()
            .decide(&mut board, &[], &mut GameRng::new(0))
            .is_none());
    }

    #[test]
    fn test_loony_position_from_play() {
        // Play random safe moves until only unsafe moves are left.
        let mut rng = GameRng::new(11);
        let mut board = Board::new(4, 4);
        loop {
            let partition = MovePartition::of(&board);
            match rng.choose(&partition.safe) {
                Some(&edge) => board.draw(edge).unwrap(),
                None => break,
            }
        }

        let partition = MovePartition::of(&board);
        assert!(partition.winning.is_empty());
        assert!(!partition.unsafe_moves.is_empty());
        assert!(partition
            .unsafe_moves
            .iter()
            .all(|&edge| crate::rules::classify(&board, edge) == MoveClass::Unsafe));

        let snapshot = board.clone();
        let solver = NimSumSolver::new();
        let decision = solver
            .decide(&mut board, &partition.unsafe_moves, &mut rng)
            .unwrap();

        assert!(partition.unsafe_moves.contains(&decision.edge));
        assert_eq!(board, snapshot);
        if decision.winning {
            board.draw(decision.edge).unwrap();
            assert_eq!(nim_sum(&board), 0);
        }
    }
}
