use fixedbitset::FixedBitSet;

use crate::{routing::node_state::NodeState, search_space::NodeStates};

use super::Cell;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Area {
    /// Shared by every impassable cell, never holds search state.
    Blocked,
    Open(NodeState<Cell>),
}

/// Dense per-run state of every cell of a terrain.
///
/// An open cell is materialized the first time its state leaves
/// `Unvisited`. Writes to blocked cells are ignored.
#[derive(Debug, Clone)]
pub struct AreaGrid {
    cols: usize,
    areas: Vec<Area>,
    materialized: usize,
}

impl AreaGrid {
    pub fn new(rows: usize, cols: usize, blocked: &FixedBitSet) -> Self {
        let areas = (0..rows * cols)
            .map(|index| {
                if blocked.contains(index) {
                    Area::Blocked
                } else {
                    Area::Open(NodeState::Unvisited)
                }
            })
            .collect();

        AreaGrid {
            cols,
            areas,
            materialized: 0,
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        matches!(self.area(cell), Some(Area::Blocked))
    }

    fn area(&self, cell: Cell) -> Option<&Area> {
        if cell.col >= self.cols {
            return None;
        }
        self.areas.get(cell.row * self.cols + cell.col)
    }
}

impl NodeStates<Cell> for AreaGrid {
    #[inline(always)]
    fn state(&self, node: Cell) -> NodeState<Cell> {
        match self.area(node) {
            Some(Area::Open(state)) => *state,
            _ => NodeState::Unvisited,
        }
    }

    fn set_state(&mut self, node: Cell, state: NodeState<Cell>) {
        if node.col >= self.cols {
            return;
        }

        if let Some(Area::Open(current)) = self.areas.get_mut(node.row * self.cols + node.col) {
            if !current.is_visited() && state.is_visited() {
                self.materialized += 1;
            }
            *current = state;
        }
    }

    fn reached_count(&self) -> usize {
        self.materialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_grid() -> AreaGrid {
        let mut blocked = FixedBitSet::with_capacity(6);
        blocked.insert(1);
        AreaGrid::new(2, 3, &blocked)
    }

    #[test]
    fn blocked_cells_hold_no_state() {
        let mut grid = create_grid();

        assert!(grid.is_blocked(Cell::new(0, 1)));
        grid.set_state(Cell::new(0, 1), NodeState::Start);

        assert_eq!(grid.state(Cell::new(0, 1)), NodeState::Unvisited);
        assert_eq!(grid.reached_count(), 0);
    }

    #[test]
    fn counts_materialized_cells_once() {
        let mut grid = create_grid();
        let start = Cell::new(0, 0);

        grid.set_state(start, NodeState::Start);
        for distance in [3.0, 2.0] {
            grid.set_state(
                Cell::new(1, 2),
                NodeState::ReachedFrom {
                    previous: start,
                    distance,
                },
            );
        }

        assert_eq!(grid.reached_count(), 2);
        assert_eq!(grid.state(Cell::new(1, 2)).distance(), Some(2.0));
    }

    #[test]
    fn cells_outside_the_grid_are_ignored() {
        let mut grid = create_grid();

        grid.set_state(Cell::new(0, 3), NodeState::Start);
        grid.set_state(Cell::new(2, 0), NodeState::Start);

        assert_eq!(grid.state(Cell::new(0, 3)), NodeState::Unvisited);
        assert_eq!(grid.reached_count(), 0);
    }
}
