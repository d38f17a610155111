//! # dots-arena
//!
//! A Dots and Boxes battle engine and a set of agents to play it.
//!
//! Players take turns drawing edges on a grid of boxes. Drawing the fourth
//! side of a box scores it and grants another move; the player with more
//! boxes once the board is full wins.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: The arena owns the live board. Agents get a shared
//!    reference and clone it when they need to experiment.
//!
//! 2. **Guaranteed restore**: Search and the nim solver mutate their copy
//!    in place through a drop guard that writes every probed edge back,
//!    including on early exits.
//!
//! 3. **Configuration over subclassing**: One `Agent` trait; strategies are
//!    picked by `AgentConfig`.
//!
//! ## Modules
//!
//! - `core`: Edges, the board, players, move errors, RNG
//! - `rules`: Winning / safe / unsafe move classification and ordering
//! - `search`: Negamax with alpha-beta pruning
//! - `nim`: Chain and loop decomposition and the nim-sum endgame solver
//! - `agents`: The `Agent` trait and its strategies
//! - `arena`: Battles, batches and their results

pub mod core;
pub mod rules;
pub mod search;
pub mod nim;
pub mod agents;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{Board, Edge, GameRng, MoveError, Orientation, PlayerId, PlayerPair};

pub use crate::rules::{classify, MoveClass, MovePartition};

pub use crate::search::{SearchConfig, SearchEngine, SearchResult, SearchStats};

pub use crate::nim::{nim_sum, Component, ComponentKind, NimSumSolver};

pub use crate::agents::{Agent, AgentConfig, AgentError, RandomAgent, Strategy, TieredAgent};

pub use crate::arena::{
    Arena, ArenaConfig, ArenaError, BattleResult, BatchResults, Forfeit, ForfeitReason,
    MoveRecord, TimingRecord, Winner,
};
