//! Uniform random agent, the baseline every other strategy must beat.

use crate::core::{Board, Edge, GameRng};

use super::Agent;

/// Picks any undrawn edge with equal probability.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, board: &Board) -> Edge {
        let moves = board.legal_moves();
        match self.rng.choose(&moves) {
            Some(&edge) => edge,
            None => panic!("random agent asked to move on a full board"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_legal() {
        let mut agent = RandomAgent::new(3);
        let mut board = Board::new(3, 2);
        while !board.is_full() {
            let edge = agent.decide(&board);
            board.draw(edge).unwrap();
        }
        assert_eq!(board.drawn_count(), board.edge_count());
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let board = Board::new(4, 4);
        let mut a = RandomAgent::new(5);
        let mut b = RandomAgent::new(5);
        for _ in 0..10 {
            assert_eq!(a.decide(&board), b.decide(&board));
        }
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_panics() {
        let mut board = Board::new(1, 1);
        for edge in board.legal_moves() {
            board.draw(edge).unwrap();
        }
        RandomAgent::new(0).decide(&board);
    }
}
