//! Move validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::edge::Edge;

/// Why an edge cannot be drawn.
///
/// In a battle any of these forfeits the match for the player who
/// submitted the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("edge {edge} lies outside a {xsize}x{ysize} board")]
    OutOfBounds { edge: Edge, xsize: usize, ysize: usize },

    #[error("edge {edge} runs off the edge of the grid")]
    OffGrid { edge: Edge },

    #[error("edge {edge} is already drawn")]
    AlreadyDrawn { edge: Edge },

    #[error("orientation {0} is neither 0 (horizontal) nor 1 (vertical)")]
    InvalidOrientation(u8),
}

/// Why serialized board data cannot be turned back into a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardDataError {
    #[error("board dimensions {xsize}x{ysize} must be positive")]
    EmptyDimension { xsize: usize, ysize: usize },

    #[error(transparent)]
    Edge(#[from] MoveError),
}
