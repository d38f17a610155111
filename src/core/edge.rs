//! Edge coordinates: the only kind of move in Dots and Boxes.
//!
//! An edge is addressed by the dot it starts from and the direction it is
//! drawn in:
//! - `Horizontal` (z = 0) joins dot `(x, y)` to `(x + 1, y)`
//! - `Vertical` (z = 1) joins dot `(x, y)` to `(x, y + 1)`
//!
//! `x` grows to the right and `y` grows downwards.

use serde::{Deserialize, Serialize};

use super::error::MoveError;

/// Direction an edge is drawn in from its starting dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Drawn to the right (z = 0).
    Horizontal,
    /// Drawn downwards (z = 1).
    Vertical,
}

impl Orientation {
    /// The raw `z` axis value.
    #[must_use]
    pub const fn z(self) -> u8 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }

    /// Parse a raw `z` axis value.
    pub fn from_z(z: u8) -> Result<Self, MoveError> {
        match z {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(MoveError::InvalidOrientation(other)),
        }
    }
}

/// A single edge of the board, `(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Column of the starting dot.
    pub x: usize,
    /// Row of the starting dot.
    pub y: usize,
    /// Drawing direction.
    pub orientation: Orientation,
}

impl Edge {
    /// Create an edge.
    #[must_use]
    pub const fn new(x: usize, y: usize, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Horizontal edge from `(x, y)` to `(x + 1, y)`.
    #[must_use]
    pub const fn horizontal(x: usize, y: usize) -> Self {
        Self::new(x, y, Orientation::Horizontal)
    }

    /// Vertical edge from `(x, y)` to `(x, y + 1)`.
    #[must_use]
    pub const fn vertical(x: usize, y: usize) -> Self {
        Self::new(x, y, Orientation::Vertical)
    }

    /// Build an edge from raw `(x, y, z)` coordinates.
    ///
    /// Only the orientation is checked here; bounds depend on the board.
    pub fn from_xyz(x: usize, y: usize, z: u8) -> Result<Self, MoveError> {
        Ok(Self::new(x, y, Orientation::from_z(z)?))
    }

    /// Raw `(x, y, z)` coordinates.
    #[must_use]
    pub const fn xyz(self) -> (usize, usize, u8) {
        (self.x, self.y, self.orientation.z())
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.orientation.z())
    }
}
