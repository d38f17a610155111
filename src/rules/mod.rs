//! Game rules shared by agents and search.
//!
//! The Arena owns legality and scoring; this module holds the pure,
//! board-only judgements agents build on:
//! - Which tier (winning / safe / unsafe) a move falls into
//! - How to order moves so good ones are searched first

pub mod classify;

pub use classify::{
    classify, order_moves, order_score, MoveClass, MovePartition, UNSAFE_ORDER_SCORE,
    WINNING_ORDER_SCORE,
};
