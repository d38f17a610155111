//! Core types: players, edges, the board, move errors, RNG.
//!
//! Everything else in the crate is built on these. The board is the only
//! mutable game state; agents and search borrow or clone it.

pub mod board;
pub mod edge;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{AdjacentBoxes, Board, ProbeGuard};
pub use edge::{Edge, Orientation};
pub use error::{BoardDataError, MoveError};
pub use player::{InvalidPlayerId, PlayerId, PlayerPair};
pub use rng::GameRng;
