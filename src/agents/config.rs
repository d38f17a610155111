//! Agent configuration and strategy presets.

use serde::{Deserialize, Serialize};

use super::random::RandomAgent;
use super::tiered::TieredAgent;
use super::Agent;

/// Decision strategy of an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform over every legal move.
    Random,
    /// Winning, then safe, then unsafe tier; uniform within a tier.
    Greedy,
    /// Greedy early; negamax over the best non-winning tier late.
    Negamax,
    /// Greedy while safe moves exist; nim-sum in the loony endgame.
    Nimber,
    /// Greedy early, negamax over safe moves late, nim-sum endgame.
    Hybrid,
}

impl Strategy {
    /// True if the strategy runs negamax in the late game.
    #[must_use]
    pub fn searches(self) -> bool {
        matches!(self, Strategy::Negamax | Strategy::Hybrid)
    }

    /// True if the strategy consults the nim-sum solver.
    #[must_use]
    pub fn uses_nim_sum(self) -> bool {
        matches!(self, Strategy::Nimber | Strategy::Hybrid)
    }

    /// Short lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Negamax => "negamax",
            Strategy::Nimber => "nimber",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunable agent parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Which decision procedure to run.
    pub strategy: Strategy,

    /// Negamax depth for strategies that search.
    pub search_depth: u32,

    /// Fraction of the board's edges still free at or below which the late
    /// game starts (0.2 = last 20% of moves).
    pub transition_ratio: f64,

    /// Seed for the agent's tie-breaking RNG.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::hybrid()
    }
}

impl AgentConfig {
    /// Uniform random mover.
    pub fn random() -> Self {
        Self {
            strategy: Strategy::Random,
            search_depth: 0,
            transition_ratio: 0.0,
            seed: 42,
        }
    }

    /// Three-tier greedy mover.
    pub fn greedy() -> Self {
        Self {
            strategy: Strategy::Greedy,
            ..Self::random()
        }
    }

    /// Greedy early, depth-4 negamax over the last 20% of moves.
    pub fn negamax() -> Self {
        Self {
            strategy: Strategy::Negamax,
            search_depth: 4,
            transition_ratio: 0.2,
            seed: 42,
        }
    }

    /// Greedy plus nim-sum endgame.
    pub fn nimber() -> Self {
        Self {
            strategy: Strategy::Nimber,
            ..Self::random()
        }
    }

    /// Greedy, depth-5 late-game negamax, nim-sum endgame.
    pub fn hybrid() -> Self {
        Self {
            strategy: Strategy::Hybrid,
            search_depth: 5,
            transition_ratio: 0.2,
            seed: 42,
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the negamax depth.
    #[must_use]
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the late-game transition ratio.
    #[must_use]
    pub fn with_transition_ratio(mut self, ratio: f64) -> Self {
        self.transition_ratio = ratio;
        self
    }

    /// Build the configured agent.
    pub fn build(&self) -> Box<dyn Agent> {
        match self.strategy {
            Strategy::Random => Box::new(RandomAgent::new(self.seed)),
            _ => Box::new(TieredAgent::new(self.clone())),
        }
    }
}
