//! Battles and batches between two agents.
//!
//! [`Arena`] owns the board and is the only thing that commits moves. It
//! asks each agent in turn for an edge, validates it, credits completed
//! boxes and hands over the turn when nothing was completed. An illegal
//! edge forfeits the battle.
//!
//! ```rust
//! use dots_arena::agents::AgentConfig;
//! use dots_arena::arena::{Arena, ArenaConfig};
//! use dots_arena::core::PlayerId;
//!
//! let config = ArenaConfig::default().with_size(3, 3).with_batch_size(2);
//! let mut arena = Arena::new(
//!     config,
//!     AgentConfig::greedy().with_seed(1).build(),
//!     AgentConfig::random().with_seed(2).build(),
//! );
//!
//! let result = arena.battle(PlayerId::FIRST).unwrap();
//! assert_eq!(result.scores().sum(), 9);
//!
//! let batch = arena.batch_run().unwrap();
//! assert_eq!(batch.len(), 4);
//! ```

pub mod battle;
pub mod config;
pub mod result;

use thiserror::Error;

use crate::agents::AgentError;
use crate::core::PlayerId;

pub use battle::Arena;
pub use config::ArenaConfig;
pub use result::{
    BattleResult, BatchResults, Forfeit, ForfeitReason, MoveRecord, TimingRecord, Winner,
};

/// Errors that abort a battle or batch.
///
/// Bad moves are not errors here; they end the battle as a forfeit.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("{agent} ({player}) failed to initialize")]
    AgentInitialization {
        player: PlayerId,
        agent: String,
        #[source]
        source: AgentError,
    },
}
