//! Tiered decision procedure shared by every non-random strategy.
//!
//! Each turn:
//! 1. Winning moves exist: take one at random. Never searched.
//! 2. Safe moves exist: pick one at random, or in the late game let
//!    negamax choose among them (searching strategies only).
//! 3. Only unsafe moves: ask the nim-sum solver (nim strategies), search
//!    them in the late game (searching strategies), or pick at random.

use tracing::trace;

use crate::core::{Board, Edge, GameRng};
use crate::nim::NimSumSolver;
use crate::rules::{MoveClass, MovePartition};
use crate::search::{SearchConfig, SearchEngine, SearchStats};

use super::config::{AgentConfig, Strategy};
use super::{Agent, AgentError};

/// Agent running the winning / safe / unsafe tiers with optional search
/// and nim-sum endgame.
#[derive(Clone, Debug)]
pub struct TieredAgent {
    config: AgentConfig,
    rng: GameRng,
    engine: SearchEngine,
    solver: NimSumSolver,
}

impl TieredAgent {
    pub fn new(config: AgentConfig) -> Self {
        let engine = SearchEngine::new(SearchConfig::default().with_depth(config.search_depth));
        Self {
            rng: GameRng::new(config.seed),
            engine,
            solver: NimSumSolver::new(),
            config,
        }
    }

    /// Configuration this agent was built from.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Statistics of the most recent negamax search.
    pub fn last_search_stats(&self) -> &SearchStats {
        self.engine.stats()
    }

    /// True once the free-edge fraction is at or below the transition ratio.
    #[must_use]
    pub fn is_late_game(&self, board: &Board) -> bool {
        board.remaining_moves() as f64 <= board.edge_count() as f64 * self.config.transition_ratio
    }

    /// Run the tiers. `None` only if the board has no legal move.
    pub fn choose_move(&mut self, board: &Board) -> Option<Edge> {
        let partition = MovePartition::of(board);
        let (class, tier) = partition.best_tier()?;
        let strategy = self.config.strategy;
        let late = self.is_late_game(board);

        let edge = match class {
            MoveClass::Unsafe if strategy.uses_nim_sum() => {
                let mut scratch = board.clone();
                self.solver.decide(&mut scratch, tier, &mut self.rng)?.edge
            }
            MoveClass::Safe | MoveClass::Unsafe if late && strategy.searches() => {
                self.search(board, tier)?
            }
            _ => partition.greedy_pick(&mut self.rng)?,
        };

        trace!(
            agent = strategy.name(),
            %edge,
            tier = ?class,
            late,
            remaining = board.remaining_moves(),
            "tiered decision"
        );
        Some(edge)
    }

    fn search(&mut self, board: &Board, candidates: &[Edge]) -> Option<Edge> {
        let mut scratch = board.clone();
        self.engine
            .search(&mut scratch, candidates)
            .map(|result| result.edge)
    }
}

impl Agent for TieredAgent {
    fn name(&self) -> &str {
        self.config.strategy.name()
    }

    fn initialize(&mut self) -> Result<(), AgentError> {
        let ratio = self.config.transition_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(AgentError::InvalidConfig(format!(
                "transition ratio {ratio} is outside [0, 1]"
            )));
        }
        if self.config.strategy.searches() && self.config.search_depth == 0 {
            return Err(AgentError::InvalidConfig(format!(
                "{} strategy needs a search depth of at least 1",
                self.config.strategy
            )));
        }
        if self.config.strategy == Strategy::Random {
            return Err(AgentError::InvalidConfig(
                "random strategy is served by RandomAgent".to_string(),
            ));
        }
        Ok(())
    }

    fn decide(&mut self, board: &Board) -> Edge {
        match self.choose_move(board) {
            Some(edge) => edge,
            None => panic!("{} agent asked to move on a full board", self.name()),
        }
    }
}
