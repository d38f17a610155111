//! Board state: edge flags plus cached per-box degrees.
//!
//! ## Layout
//!
//! Edges are stored in a flat `Vec<bool>` addressed as `edge[x][y][z]` with
//! `x in 0..=xsize`, `y in 0..=ysize`, `z in {0, 1}`. The slots for a
//! horizontal edge at `x == xsize` and a vertical edge at `y == ysize` exist
//! but are never drawn.
//!
//! Box `(x, y)` is bounded by `(x, y, 0)`, `(x, y + 1, 0)`, `(x, y, 1)` and
//! `(x + 1, y, 1)`. Its degree (number of drawn sides) is kept up to date on
//! every flip, so clearing an edge also restores the degrees it touched.
//!
//! ## Probing
//!
//! Search code mutates a board in place and must always put it back.
//! [`Board::probe`] draws an edge and returns a [`ProbeGuard`] that restores
//! the edge's prior value when dropped, whichever way the caller's scope
//! exits.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::edge::{Edge, Orientation};
use super::error::{BoardDataError, MoveError};

/// Boxes touching one edge (one on the boundary, otherwise two).
pub type AdjacentBoxes = SmallVec<[(usize, usize); 2]>;

/// A Dots and Boxes board of `xsize` by `ysize` boxes.
///
/// Serializes as its dimensions and the list of drawn edges; the cached
/// degrees are rebuilt on load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData", into = "BoardData")]
pub struct Board {
    xsize: usize,
    ysize: usize,
    edges: Vec<bool>,
    degrees: Vec<u8>,
    drawn: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(xsize: usize, ysize: usize) -> Self {
        assert!(xsize > 0 && ysize > 0, "Board dimensions must be positive");

        Self {
            xsize,
            ysize,
            edges: vec![false; (xsize + 1) * (ysize + 1) * 2],
            degrees: vec![0; xsize * ysize],
            drawn: 0,
        }
    }

    /// Create a board with the given edges already drawn.
    ///
    /// Fails on the first edge that is off the board or listed twice.
    pub fn with_edges(
        xsize: usize,
        ysize: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, MoveError> {
        let mut board = Self::new(xsize, ysize);
        for edge in edges {
            board.draw(edge)?;
        }
        Ok(board)
    }

    /// Number of box columns.
    #[must_use]
    pub fn xsize(&self) -> usize {
        self.xsize
    }

    /// Number of box rows.
    #[must_use]
    pub fn ysize(&self) -> usize {
        self.ysize
    }

    /// Total number of boxes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.xsize * self.ysize
    }

    /// Total number of drawable edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.xsize * (self.ysize + 1) + self.ysize * (self.xsize + 1)
    }

    /// Number of edges drawn so far.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn
    }

    /// Number of edges still available.
    #[must_use]
    pub fn remaining_moves(&self) -> usize {
        self.edge_count() - self.drawn
    }

    /// True once every edge is drawn.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining_moves() == 0
    }

    /// Check that an edge exists on this board and is still free.
    pub fn validate(&self, edge: Edge) -> Result<(), MoveError> {
        if edge.x > self.xsize || edge.y > self.ysize {
            return Err(MoveError::OutOfBounds {
                edge,
                xsize: self.xsize,
                ysize: self.ysize,
            });
        }
        if !self.on_grid(edge) {
            return Err(MoveError::OffGrid { edge });
        }
        if self.edges[self.slot(edge)] {
            return Err(MoveError::AlreadyDrawn { edge });
        }
        Ok(())
    }

    /// True if the edge is a real edge of this board, drawn or not.
    #[must_use]
    pub fn on_grid(&self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => edge.x < self.xsize && edge.y <= self.ysize,
            Orientation::Vertical => edge.x <= self.xsize && edge.y < self.ysize,
        }
    }

    /// True if the edge is drawn. Off-grid edges are never drawn.
    #[must_use]
    pub fn is_drawn(&self, edge: Edge) -> bool {
        self.on_grid(edge) && self.edges[self.slot(edge)]
    }

    /// Draw a validated edge.
    pub fn draw(&mut self, edge: Edge) -> Result<(), MoveError> {
        self.validate(edge)?;
        self.set(edge, true);
        Ok(())
    }

    /// Draw an edge for the lifetime of the returned guard.
    ///
    /// The edge's prior value is written back when the guard drops.
    ///
    /// # Panics
    ///
    /// Panics if the edge is not on the grid.
    pub fn probe(&mut self, edge: Edge) -> ProbeGuard<'_> {
        assert!(self.on_grid(edge), "cannot probe off-grid edge {edge}");
        let prior = self.edges[self.slot(edge)];
        self.set(edge, true);
        ProbeGuard {
            board: self,
            edge,
            prior,
        }
    }

    /// Number of drawn sides of box `(x, y)`.
    #[must_use]
    pub fn box_degree(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.xsize && y < self.ysize);
        self.degrees[x * self.ysize + y]
    }

    /// Number of boxes with all four sides drawn.
    #[must_use]
    pub fn completed_boxes(&self) -> usize {
        self.degrees.iter().filter(|&&d| d == 4).count()
    }

    /// Iterate over `((x, y), degree)` for every box, column by column.
    pub fn degrees(&self) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        let ysize = self.ysize;
        self.degrees
            .iter()
            .enumerate()
            .map(move |(i, &d)| ((i / ysize, i % ysize), d))
    }

    /// Boxes bounded by an on-grid edge.
    #[must_use]
    pub fn adjacent_boxes(&self, edge: Edge) -> AdjacentBoxes {
        let mut boxes = AdjacentBoxes::new();
        let Edge { x, y, .. } = edge;
        match edge.orientation {
            Orientation::Horizontal => {
                if y > 0 {
                    boxes.push((x, y - 1));
                }
                if y < self.ysize {
                    boxes.push((x, y));
                }
            }
            Orientation::Vertical => {
                if x > 0 {
                    boxes.push((x - 1, y));
                }
                if x < self.xsize {
                    boxes.push((x, y));
                }
            }
        }
        boxes
    }

    /// Current degree of each box bounded by `edge`.
    #[must_use]
    pub fn adjacent_degrees(&self, edge: Edge) -> SmallVec<[u8; 2]> {
        self.adjacent_boxes(edge)
            .into_iter()
            .map(|(x, y)| self.box_degree(x, y))
            .collect()
    }

    /// Boxes that drawing `edge` now would complete.
    #[must_use]
    pub fn completions(&self, edge: Edge) -> u32 {
        self.adjacent_degrees(edge).iter().filter(|&&d| d == 3).count() as u32
    }

    /// Every drawn edge, in the same order as [`Board::legal_moves`].
    #[must_use]
    pub fn drawn_edges(&self) -> Vec<Edge> {
        self.on_grid_edges()
            .filter(|&edge| self.edges[self.slot(edge)])
            .collect()
    }

    /// Every undrawn edge: horizontal edges first, then vertical, each in
    /// column-major order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Edge> {
        self.on_grid_edges()
            .filter(|&edge| !self.edges[self.slot(edge)])
            .collect()
    }

    fn on_grid_edges(&self) -> impl Iterator<Item = Edge> {
        let (xsize, ysize) = (self.xsize, self.ysize);
        let horizontal =
            (0..xsize).flat_map(move |x| (0..=ysize).map(move |y| Edge::horizontal(x, y)));
        let vertical =
            (0..=xsize).flat_map(move |x| (0..ysize).map(move |y| Edge::vertical(x, y)));
        horizontal.chain(vertical)
    }

    fn slot(&self, edge: Edge) -> usize {
        (edge.x * (self.ysize + 1) + edge.y) * 2 + edge.orientation.z() as usize
    }

    fn set(&mut self, edge: Edge, value: bool) {
        let slot = self.slot(edge);
        if self.edges[slot] == value {
            return;
        }
        self.edges[slot] = value;

        for (x, y) in self.adjacent_boxes(edge) {
            let degree = &mut self.degrees[x * self.ysize + y];
            if value {
                *degree += 1;
            } else {
                *degree -= 1;
            }
        }

        if value {
            self.drawn += 1;
        } else {
            self.drawn -= 1;
        }
    }
}

/// Wire form of a [`Board`].
#[derive(Serialize, Deserialize)]
struct BoardData {
    xsize: usize,
    ysize: usize,
    edges: Vec<Edge>,
}

impl From<Board> for BoardData {
    fn from(board: Board) -> Self {
        Self {
            xsize: board.xsize,
            ysize: board.ysize,
            edges: board.drawn_edges(),
        }
    }
}

impl TryFrom<BoardData> for Board {
    type Error = BoardDataError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        if data.xsize == 0 || data.ysize == 0 {
            return Err(BoardDataError::EmptyDimension {
                xsize: data.xsize,
                ysize: data.ysize,
            });
        }
        Ok(Board::with_edges(data.xsize, data.ysize, data.edges)?)
    }
}

/// Scoped in-place edge probe.
///
/// Dereferences to the probed board so recursive search can keep going
/// deeper through the guard.
pub struct ProbeGuard<'a> {
    board: &'a mut Board,
    edge: Edge,
    prior: bool,
}

impl Deref for ProbeGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ProbeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        self.board.set(self.edge, self.prior);
    }
}
