//! Chain and loop discovery over degree-2 boxes.
//!
//! Two degree-2 boxes belong to the same component when the edge they
//! share is already drawn. A component touching a degree-3 box has an open
//! end and counts as a chain; any other component counts as a loop.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Edge};

/// Shape of a degree-2 component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Chain,
    Loop,
}

/// Connected group of degree-2 boxes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Member boxes in discovery order.
    pub boxes: Vec<(usize, usize)>,
    pub kind: ComponentKind,
}

impl Component {
    /// Grundy value: a chain of length N is worth N, every loop is worth 1.
    #[must_use]
    pub fn nimber(&self) -> u32 {
        match self.kind {
            ComponentKind::Chain => self.boxes.len() as u32,
            ComponentKind::Loop => 1,
        }
    }
}

/// Find every degree-2 component on the board.
///
/// Boxes are scanned column by column; each component is flooded with an
/// explicit work stack.
#[must_use]
pub fn find_components(board: &Board) -> Vec<Component> {
    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut components = Vec::new();

    for x in 0..board.xsize() {
        for y in 0..board.ysize() {
            if board.box_degree(x, y) != 2 || !visited.insert((x, y)) {
                continue;
            }

            let mut boxes = Vec::new();
            let mut stack = vec![(x, y)];
            while let Some(cell) = stack.pop() {
                boxes.push(cell);
                for next in linked_neighbors(board, cell) {
                    if board.box_degree(next.0, next.1) == 2 && visited.insert(next) {
                        stack.push(next);
                    }
                }
            }

            let kind = if boxes.iter().any(|&cell| touches_three_sided(board, cell)) {
                ComponentKind::Chain
            } else {
                ComponentKind::Loop
            };
            components.push(Component { boxes, kind });
        }
    }

    components
}

/// XOR of the nimbers of every component.
#[must_use]
pub fn nim_sum(board: &Board) -> u32 {
    find_components(board)
        .iter()
        .fold(0, |acc, component| acc ^ component.nimber())
}

/// Neighbors reachable through an already-drawn shared edge.
fn linked_neighbors(board: &Board, (x, y): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let up = (y > 0 && board.is_drawn(Edge::horizontal(x, y))).then(|| (x, y - 1));
    let down = (y + 1 < board.ysize() && board.is_drawn(Edge::horizontal(x, y + 1)))
        .then_some((x, y + 1));
    let left = (x > 0 && board.is_drawn(Edge::vertical(x, y))).then(|| (x - 1, y));
    let right = (x + 1 < board.xsize() && board.is_drawn(Edge::vertical(x + 1, y)))
        .then_some((x + 1, y));
    [up, down, left, right].into_iter().flatten()
}

/// True if any orthogonal neighbor on the board has exactly three sides.
fn touches_three_sided(board: &Board, (x, y): (usize, usize)) -> bool {
    let candidates = [
        y.checked_sub(1).map(|ny| (x, ny)),
        (y + 1 < board.ysize()).then_some((x, y + 1)),
        x.checked_sub(1).map(|nx| (nx, y)),
        (x + 1 < board.xsize()).then_some((x + 1, y)),
    ];
    candidates
        .into_iter()
        .flatten()
        .any(|(nx, ny)| board.box_degree(nx, ny) == 3)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 6x2 board holding a 2x2 loop in columns 0-1 and a three-box chain
    /// along row 0 in columns 3-5 whose first box sits on top of a
    /// three-sided box.
    pub(crate) fn chain_and_loop() -> Board {
        Board::with_edges(
            6,
            2,
            [
                // Loop: the inner cross of the 2x2 block.
                Edge::vertical(1, 0),
                Edge::horizontal(0, 1),
                Edge::horizontal(1, 1),
                Edge::vertical(1, 1),
                // Chain: (3, 0) - (4, 0) - (5, 0).
                Edge::horizontal(3, 0),
                Edge::vertical(4, 0),
                Edge::vertical(5, 0),
                Edge::vertical(6, 0),
                // Three-sided box (3, 1) below the chain head.
                Edge::horizontal(3, 2),
                Edge::vertical(3, 1),
                Edge::vertical(4, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_fixture_degrees() {
        let board = chain_and_loop();
        for cell in [(0, 0), (1, 0), (0, 1), (1, 1), (3, 0), (4, 0), (5, 0)] {
            assert_eq!(board.box_degree(cell.0, cell.1), 2, "box {cell:?}");
        }
        assert_eq!(board.box_degree(3, 1), 3);
        assert_eq!(board.box_degree(2, 0), 0);
        assert_eq!(board.box_degree(2, 1), 1);
    }

    #[test]
    fn test_chain_and_loop_components() {
        let board = chain_and_loop();
        let components = find_components(&board);
        assert_eq!(components.len(), 2);

        let ring = &components[0];
        assert_eq!(ring.kind, ComponentKind::Loop);
        assert_eq!(ring.boxes.len(), 4);
        assert_eq!(ring.nimber(), 1);

        let chain = &components[1];
        assert_eq!(chain.kind, ComponentKind::Chain);
        assert_eq!(chain.boxes.len(), 3);
        assert_eq!(chain.nimber(), 3);
    }

    #[test]
    fn test_chain_and_loop_nim_sum() {
        assert_eq!(nim_sum(&chain_and_loop()), 3 ^ 1);
        assert_eq!(nim_sum(&chain_and_loop()), 2);
    }

    #[test]
    fn test_loop_nimber_ignores_length() {
        let component = Component {
            boxes: vec![(0, 0); 6],
            kind: ComponentKind::Loop,
        };
        assert_eq!(component.nimber(), 1);
    }

    #[test]
    fn test_undrawn_shared_edge_splits_boxes() {
        // Two degree-2 boxes side by side with the shared edge open.
        let board = Board::with_edges(
            2,
            1,
            [
                Edge::horizontal(0, 0),
                Edge::horizontal(0, 1),
                Edge::horizontal(1, 0),
                Edge::horizontal(1, 1),
            ],
        )
        .unwrap();
        let components = find_components(&board);
        assert_eq!(components.len(), 2);
        assert!(components.iter().all(|c| c.boxes.len() == 1 && c.kind == ComponentKind::Loop));
        assert_eq!(nim_sum(&board), 0);
    }

    #[test]
    fn test_empty_board_has_no_components() {
        let board = Board::new(4, 4);
        assert!(find_components(&board).is_empty());
        assert_eq!(nim_sum(&board), 0);
    }

    #[test]
    fn test_long_snake_does_not_recurse() {
        // 1 x 200 strip, every box linked to the next through its right edge.
        let xsize = 200;
        let edges = (1..xsize).map(|x| Edge::vertical(x, 0));
        let board = Board::with_edges(xsize, 1, edges).unwrap();

        let components = find_components(&board);
        // Interior boxes have degree 2; the two ends have degree 1.
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].boxes.len(), xsize - 2);
    }
}
