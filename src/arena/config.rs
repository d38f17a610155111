//! Arena configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Board size, batch size and optional per-move time limit.
///
/// ```
/// use std::time::Duration;
/// use dots_arena::arena::ArenaConfig;
///
/// let config = ArenaConfig::default()
///     .with_size(3, 3)
///     .with_batch_size(10)
///     .with_move_time_limit(Duration::from_millis(250));
/// assert_eq!(config.box_count(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Boxes per row.
    pub xsize: usize,

    /// Boxes per column.
    pub ysize: usize,

    /// Battles per starting seat in `batch_run`.
    pub batch_size: usize,

    /// Decisions slower than this forfeit. `None` disables the check.
    pub move_time_limit: Option<Duration>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            xsize: 5,
            ysize: 5,
            batch_size: 80,
            move_time_limit: None,
        }
    }
}

impl ArenaConfig {
    #[must_use]
    pub fn with_size(mut self, xsize: usize, ysize: usize) -> Self {
        self.xsize = xsize;
        self.ysize = ysize;
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[must_use]
    pub fn with_move_time_limit(mut self, limit: Duration) -> Self {
        self.move_time_limit = Some(limit);
        self
    }

    /// Number of boxes on the configured board.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.xsize * self.ysize
    }
}
