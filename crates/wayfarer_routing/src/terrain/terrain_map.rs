use fixedbitset::FixedBitSet;
use tracing::instrument;

use crate::{
    error::{RoutingError, TerrainError},
    routing::{
        instrumentation::RouteInstrumentation,
        routing_algorithm::RoutingAlgorithm,
        shortest_path_algorithm::{CalcPathOptions, CalcPathResult},
    },
    search_space::SearchSpace,
};

use super::{Cell, area_grid::AreaGrid};

/// Rectangular grid of open and blocked cells.
///
/// Every open cell is linked to its open neighbors among the eight
/// surrounding cells. Moving one cell straight costs `1`, diagonally
/// `sqrt(2)`.
#[derive(Debug, Clone)]
pub struct TerrainMap {
    rows: usize,
    cols: usize,
    blocked: FixedBitSet,
    instrumentation: RouteInstrumentation,
}

impl TerrainMap {
    /// `true` marks a blocked cell.
    pub fn new(blocked: &[Vec<bool>]) -> Result<Self, TerrainError> {
        let rows = blocked.len();
        let cols = blocked.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(TerrainError::Empty);
        }

        let mut mask = FixedBitSet::with_capacity(rows * cols);
        for (row, cells) in blocked.iter().enumerate() {
            if cells.len() != cols {
                return Err(TerrainError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }

            for (col, is_blocked) in cells.iter().enumerate() {
                mask.set(row * cols + col, *is_blocked);
            }
        }

        Ok(TerrainMap {
            rows,
            cols,
            blocked: mask,
            instrumentation: RouteInstrumentation::default(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.blocked.contains(self.index(cell))
    }

    pub fn open_count(&self) -> usize {
        self.rows * self.cols - self.blocked.count_ones(..)
    }

    pub fn reset(&mut self) {
        self.instrumentation.reset();
    }

    pub fn queue_insertion_count(&self) -> usize {
        self.instrumentation.queue_insertion_count()
    }

    pub fn traveled_distance(&self) -> f64 {
        self.instrumentation.traveled_distance()
    }

    #[instrument(skip(self, options), level = "debug")]
    pub fn route(
        &mut self,
        algorithm: RoutingAlgorithm,
        start: Cell,
        target: Cell,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<Cell>, RoutingError> {
        self.check_cell(start)?;
        self.check_cell(target)?;

        self.reset();
        let result = algorithm.calc_path(&*self, start, target, options)?;
        self.instrumentation.record(&result);

        Ok(result)
    }

    pub fn route_first_path(
        &mut self,
        start: Cell,
        target: Cell,
    ) -> Result<Option<Vec<Cell>>, RoutingError> {
        self.route_cells(RoutingAlgorithm::FirstPath, start, target)
    }

    pub fn route_dijkstra(
        &mut self,
        start: Cell,
        target: Cell,
    ) -> Result<Option<Vec<Cell>>, RoutingError> {
        self.route_cells(RoutingAlgorithm::Dijkstra, start, target)
    }

    pub fn route_astar(
        &mut self,
        start: Cell,
        target: Cell,
    ) -> Result<Option<Vec<Cell>>, RoutingError> {
        self.route_cells(RoutingAlgorithm::AStar, start, target)
    }

    /// Draws the terrain, one line per row: `#` blocked, `.` open, `o`
    /// explored, `*` on the route, `S` and `T` for its endpoints.
    pub fn render(&self, route: Option<&[Cell]>, visited: &[Cell]) -> String {
        let mut canvas: Vec<Vec<char>> = (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        if self.is_blocked(Cell::new(row, col)) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect();

        let mut paint = |cell: Cell, c: char| {
            if self.in_bounds(cell) {
                canvas[cell.row][cell.col] = c;
            }
        };

        for cell in visited {
            paint(*cell, 'o');
        }

        if let Some(route) = route {
            for cell in route {
                paint(*cell, '*');
            }
            if let Some(target) = route.last() {
                paint(*target, 'T');
            }
            if let Some(start) = route.first() {
                paint(*start, 'S');
            }
        }

        let mut picture = String::with_capacity(self.rows * (self.cols + 1));
        for row in canvas {
            picture.extend(row);
            picture.push('\n');
        }
        picture
    }

    fn route_cells(
        &mut self,
        algorithm: RoutingAlgorithm,
        start: Cell,
        target: Cell,
    ) -> Result<Option<Vec<Cell>>, RoutingError> {
        let result = self.route(algorithm, start, target, None)?;
        Ok(result.path.map(|path| path.into_nodes()))
    }

    fn check_cell(&self, cell: Cell) -> Result<(), RoutingError> {
        if !self.in_bounds(cell) {
            return Err(RoutingError::OutOfBounds {
                row: cell.row,
                col: cell.col,
            });
        }

        if self.is_blocked(cell) {
            return Err(RoutingError::BlockedCell {
                row: cell.row,
                col: cell.col,
            });
        }

        Ok(())
    }

    #[inline(always)]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

impl SearchSpace for TerrainMap {
    type NodeId = Cell;
    type States = AreaGrid;

    fn contains(&self, node: Cell) -> bool {
        self.in_bounds(node) && !self.is_blocked(node)
    }

    /// Open cells of the surrounding 3x3 block, row by row.
    fn neighbors(&self, node: Cell, buf: &mut Vec<Cell>) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (Some(row), Some(col)) =
                    (node.row.checked_add_signed(dr), node.col.checked_add_signed(dc))
                else {
                    continue;
                };

                let cell = Cell::new(row, col);
                if self.contains(cell) {
                    buf.push(cell);
                }
            }
        }
    }

    #[inline(always)]
    fn distance(&self, from: Cell, to: Cell) -> f64 {
        from.distance(&to)
    }

    fn node_states(&self) -> AreaGrid {
        AreaGrid::new(self.rows, self.cols, &self.blocked)
    }
}
