//! Maze carving
//!
//! Randomized recursive backtracker over the cell graph. Starts on a
//! boundary cell, walks to random unvisited neighbors, carving the shared
//! wall each time, and backtracks along its path when stuck. Every cell is
//! visited exactly once, so the carved walls form a spanning tree.

use std::collections::HashMap;

use log::{debug, trace};

use crate::rng::GameRng;

use super::cell::{CellAddress, CellIndex, Direction, address, is_boundary, neighbors};
use super::grid::opening;
use super::optimize::smooth_corners;
use super::{CarveError, Dimensions, Grid};

/// Cells reached so far, with their grid addresses
///
/// Lives for one carve call only.
struct VisitedCells {
    dims: Dimensions,
    cells: HashMap<CellIndex, CellAddress>,
}

impl VisitedCells {
    fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: HashMap::with_capacity(dims.total_cells()),
        }
    }

    fn visit(&mut self, cell: CellIndex) {
        let previous = self.cells.insert(cell, address(cell, self.dims));
        debug_assert!(previous.is_none(), "cell {} visited twice", cell.get());
    }

    fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains_key(&cell)
    }

    fn address(&self, cell: CellIndex) -> Option<&CellAddress> {
        self.cells.get(&cell)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    /// Present neighbors of `cell` that have not been visited yet
    fn unvisited_neighbors(&self, cell: CellIndex) -> Vec<(Direction, CellIndex)> {
        neighbors(cell, self.dims)
            .present()
            .filter(|&(_, next)| !self.contains(next))
            .collect()
    }
}

/// Pick the cell the walk starts from, among the boundary cells
fn start_cell(dims: Dimensions, rng: &mut GameRng) -> Result<CellIndex, CarveError> {
    let boundary: Vec<CellIndex> = CellIndex::all(dims)
        .filter(|&cell| is_boundary(cell, dims))
        .collect();

    rng.choose(&boundary)
        .copied()
        .ok_or(CarveError::NoBoundaryCell(dims))
}

/// Carve a perfect maze into `grid` and return its (start, goal) cells
///
/// The goal is the cell that ended the longest walk from the start seen
/// during carving. Lone corners are smoothed before returning.
pub fn carve(
    dims: Dimensions,
    grid: &mut Grid,
    rng: &mut GameRng,
) -> Result<(CellIndex, CellIndex), CarveError> {
    if grid.dims() != dims {
        return Err(CarveError::GridMismatch {
            expected: dims,
            found: grid.dims(),
        });
    }

    let total = dims.total_cells();
    let start = start_cell(dims, rng)?;

    let mut visited = VisitedCells::new(dims);
    let mut path = vec![start];
    let mut furthest = (1, start);
    visited.visit(start);

    while visited.len() < total {
        let Some(&current) = path.last() else {
            debug_assert!(false, "path emptied before every cell was visited");
            return Err(CarveError::Exhausted {
                visited: visited.len(),
                total,
            });
        };

        let candidates = visited.unvisited_neighbors(current);
        let Some(&(direction, next)) = rng.choose(&candidates) else {
            path.pop();
            continue;
        };

        let Some(addr) = visited.address(current) else {
            debug_assert!(false, "cell {} is on the path but unvisited", current.get());
            return Err(CarveError::UnvisitedPathCell(current.get()));
        };
        let wall = addr.edge(direction);
        grid.set(wall, opening(direction));
        visited.visit(next);
        path.push(next);

        trace!(
            "carved {} -> {} ({}), path length {}",
            current.get(),
            next.get(),
            direction,
            path.len()
        );

        if path.len() > furthest.0 {
            furthest = (path.len(), next);
        }
    }

    let corner = grid.glyphs().corner;
    smooth_corners(grid, corner);

    let goal = furthest.1;
    debug!(
        "carved {} maze: start {} goal {} at path length {}",
        dims,
        start.get(),
        goal.get(),
        furthest.0
    );

    Ok((start, goal))
}
