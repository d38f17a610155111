//! Negamax statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one root search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior and leaf nodes visited.
    pub nodes: u64,

    /// Static evaluations at depth 0.
    pub leaf_evaluations: u64,

    /// Sibling scans stopped by an alpha-beta cutoff.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
