//! Sprague-Grundy endgame oracle.
//!
//! Once no winning or safe move is left, the position is scored as a sum of
//! impartial games: each degree-2 component contributes a nimber and the
//! position is lost for the player to move when their XOR is zero.
//!
//! The loop value is fixed at 1 whatever the loop's length. That is a
//! simplification of the exact loop values and is relied on by the agents'
//! tuning, so it is kept as is.

pub mod component;
pub mod solver;

pub use component::{find_components, nim_sum, Component, ComponentKind};
pub use solver::{NimDecision, NimSumSolver};
