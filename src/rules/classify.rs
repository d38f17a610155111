//! One-ply move classification.
//!
//! Each legal edge falls into exactly one tier, decided by the degrees of
//! the (at most two) boxes it bounds *before* it is drawn:
//!
//! | Tier      | Condition                          | Effect                       |
//! |-----------|------------------------------------|------------------------------|
//! | `Winning` | some adjacent box has degree 3     | completes a box, move again  |
//! | `Unsafe`  | otherwise, some box has degree 2   | hands the opponent a box     |
//! | `Safe`    | otherwise                          | gives nothing away           |

use serde::{Deserialize, Serialize};

use crate::core::{Board, Edge, GameRng};

/// Ordering score for a winning move.
pub const WINNING_ORDER_SCORE: i32 = 100;

/// Ordering score for an unsafe move.
pub const UNSAFE_ORDER_SCORE: i32 = -100;

/// Tier of a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveClass {
    Winning,
    Safe,
    Unsafe,
}

/// Classify one undrawn edge.
#[must_use]
pub fn classify(board: &Board, edge: Edge) -> MoveClass {
    let degrees = board.adjacent_degrees(edge);
    if degrees.contains(&3) {
        MoveClass::Winning
    } else if degrees.contains(&2) {
        MoveClass::Unsafe
    } else {
        MoveClass::Safe
    }
}

/// Cheap score used to order moves before searching them.
#[must_use]
pub fn order_score(board: &Board, edge: Edge) -> i32 {
    match classify(board, edge) {
        MoveClass::Winning => WINNING_ORDER_SCORE,
        MoveClass::Unsafe => UNSAFE_ORDER_SCORE,
        MoveClass::Safe => 0,
    }
}

/// Sort moves by descending [`order_score`], keeping enumeration order
/// among equals.
pub fn order_moves(board: &Board, moves: &mut [Edge]) {
    moves.sort_by_key(|&edge| std::cmp::Reverse(order_score(board, edge)));
}

/// Legal moves split into the three tiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovePartition {
    pub winning: Vec<Edge>,
    pub safe: Vec<Edge>,
    pub unsafe_moves: Vec<Edge>,
}

impl MovePartition {
    /// Classify every legal move on the board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self::from_moves(board, board.legal_moves())
    }

    /// Classify the given moves, keeping their order within each tier.
    #[must_use]
    pub fn from_moves(board: &Board, moves: impl IntoIterator<Item = Edge>) -> Self {
        let mut partition = Self::default();
        for edge in moves {
            match classify(board, edge) {
                MoveClass::Winning => partition.winning.push(edge),
                MoveClass::Safe => partition.safe.push(edge),
                MoveClass::Unsafe => partition.unsafe_moves.push(edge),
            }
        }
        partition
    }

    /// Total number of classified moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.winning.len() + self.safe.len() + self.unsafe_moves.len()
    }

    /// True if no moves were classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first non-empty tier in the order winning, safe, unsafe.
    #[must_use]
    pub fn best_tier(&self) -> Option<(MoveClass, &[Edge])> {
        [
            (MoveClass::Winning, self.winning.as_slice()),
            (MoveClass::Safe, self.safe.as_slice()),
            (MoveClass::Unsafe, self.unsafe_moves.as_slice()),
        ]
        .into_iter()
        .find(|(_, moves)| !moves.is_empty())
    }

    /// Greedy pick: uniform over the best non-empty tier.
    pub fn greedy_pick(&self, rng: &mut GameRng) -> Option<Edge> {
        let (_, tier) = self.best_tier()?;
        rng.choose(tier).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 board where box (0, 0) has three sides and box (1, 1) has two.
    fn fixture() -> Board {
        Board::with_edges(
            2,
            2,
            [
                Edge::horizontal(0, 0),
                Edge::horizontal(0, 1),
                Edge::vertical(0, 0),
                Edge::horizontal(1, 2),
                Edge::vertical(2, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_classify_tiers() {
        let board = fixture();
        // Right side of (0, 0) completes it.
        assert_eq!(classify(&board, Edge::vertical(1, 0)), MoveClass::Winning);
        // Left side of (1, 1) brings it to three.
        assert_eq!(classify(&board, Edge::vertical(1, 1)), MoveClass::Unsafe);
        // Top of (1, 0) touches only a degree-0 box.
        assert_eq!(classify(&board, Edge::horizontal(1, 0)), MoveClass::Safe);
    }

    #[test]
    fn test_winning_beats_unsafe() {
        // Edge between a degree-3 box and a degree-2 box is still winning.
        let board = Board::with_edges(
            2,
            1,
            [
                Edge::horizontal(0, 0),
                Edge::horizontal(0, 1),
                Edge::vertical(0, 0),
                Edge::horizontal(1, 0),
                Edge::horizontal(1, 1),
            ],
        )
        .unwrap();
        assert_eq!(classify(&board, Edge::vertical(1, 0)), MoveClass::Winning);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let board = fixture();
        let partition = MovePartition::of(&board);

        assert_eq!(partition.len(), board.remaining_moves());
        for edge in &partition.winning {
            assert!(!partition.safe.contains(edge));
            assert!(!partition.unsafe_moves.contains(edge));
        }
        for edge in &partition.safe {
            assert!(!partition.unsafe_moves.contains(edge));
        }
    }

    #[test]
    fn test_best_tier_order() {
        let board = fixture();
        let partition = MovePartition::of(&board);
        let (class, moves) = partition.best_tier().unwrap();
        assert_eq!(class, MoveClass::Winning);
        assert_eq!(moves, &[Edge::vertical(1, 0)]);

        let mut rng = GameRng::new(3);
        assert_eq!(partition.greedy_pick(&mut rng), Some(Edge::vertical(1, 0)));
    }

    #[test]
    fn test_empty_partition() {
        let partition = MovePartition::default();
        assert!(partition.is_empty());
        assert!(partition.best_tier().is_none());
        assert!(partition.greedy_pick(&mut GameRng::new(0)).is_none());
    }

    #[test]
    fn test_order_moves_descending() {
        let board = fixture();
        let mut moves = board.legal_moves();
        order_moves(&board, &mut moves);

        assert_eq!(moves[0], Edge::vertical(1, 0));
        let scores: Vec<_> = moves.iter().map(|&m| order_score(&board, m)).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
