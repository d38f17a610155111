//! Depth-bounded negamax search for the late game.
//!
//! ## Usage
//!
//! ```rust
//! use dots_arena::core::Board;
//! use dots_arena::search::{SearchConfig, SearchEngine};
//!
//! let mut board = Board::new(2, 2);
//! let snapshot = board.clone();
//! let moves = board.legal_moves();
//!
//! let mut engine = SearchEngine::new(SearchConfig::default().with_depth(3));
//! let best = engine.search(&mut board, &moves).unwrap();
//!
//! assert!(moves.contains(&best.edge));
//! assert_eq!(board, snapshot);
//! ```

pub mod config;
pub mod negamax;
pub mod stats;

pub use config::SearchConfig;
pub use negamax::{heuristic, SearchEngine, SearchResult, SCORE_INF};
pub use stats::SearchStats;
