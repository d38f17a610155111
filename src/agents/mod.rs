//! Pluggable move-choosing agents.
//!
//! Every agent implements one capability trait, [`Agent`]. Concrete
//! strategies are selected by [`AgentConfig`] rather than by subclassing:
//!
//! ```rust
//! use dots_arena::agents::{Agent, AgentConfig};
//! use dots_arena::core::Board;
//!
//! let mut agent = AgentConfig::hybrid().with_seed(7).build();
//! agent.initialize().unwrap();
//!
//! let board = Board::new(3, 3);
//! let edge = agent.decide(&board);
//! assert!(board.validate(edge).is_ok());
//! ```

pub mod config;
pub mod random;
pub mod tiered;

use thiserror::Error;

use crate::core::{Board, Edge};

pub use config::{AgentConfig, Strategy};
pub use random::RandomAgent;
pub use tiered::TieredAgent;

/// Errors an agent can report before play starts.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid agent configuration: {0}")]
    InvalidConfig(String),

    #[error("agent failed to initialize: {0}")]
    InitializationFailed(String),
}

/// A player's decision procedure.
///
/// ## Contract
///
/// - `initialize` runs once per battle, before the first `decide`. An error
///   aborts the battle.
/// - `decide` runs once per turn with the current board and must return one
///   edge. The board is never full when `decide` is called.
/// - Returning an illegal edge forfeits the battle; it is not a crash.
pub trait Agent: Send {
    /// Short name for logs and results.
    fn name(&self) -> &str;

    /// Prepare for a new battle.
    fn initialize(&mut self) -> Result<(), AgentError> {
        Ok(())
    }

    /// Choose the next edge to draw.
    fn decide(&mut self, board: &Board) -> Edge;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initialize(&mut self) -> Result<(), AgentError> {
        (**self).initialize()
    }

    fn decide(&mut self, board: &Board) -> Edge {
        (**self).decide(board)
    }
}
