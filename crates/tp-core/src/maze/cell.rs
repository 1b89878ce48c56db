//! Cell addressing
//!
//! Maps a linear cell index to its neighbors in the maze graph and to the
//! text-grid positions that draw it. Every other module goes through these
//! functions for coordinate math.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{CellIndexError, Dimensions};

/// Row-major cell number in `1..=length * width`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct CellIndex(usize);

/// Cell numbers start at 1; the upper end depends on the maze.
impl TryFrom<usize> for CellIndex {
    type Error = CellIndexError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(CellIndexError(n));
        }
        Ok(Self(n))
    }
}

impl CellIndex {
    /// Index of cell `n`, if it lies inside the maze
    pub fn new(n: usize, dims: Dimensions) -> Option<Self> {
        (1..=dims.total_cells()).contains(&n).then_some(Self(n))
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// 1-based row of the cell
    pub const fn row(self, dims: Dimensions) -> usize {
        (self.0 - 1) / dims.length + 1
    }

    /// 1-based column of the cell
    pub const fn col(self, dims: Dimensions) -> usize {
        (self.0 - 1) % dims.length + 1
    }

    /// The cell whose center is drawn at `pos`
    pub fn from_center(pos: GridPos, dims: Dimensions) -> Option<Self> {
        if pos.row % 2 == 0 || pos.col % 2 == 0 {
            return None;
        }
        let row = pos.row.div_ceil(2);
        let col = pos.col.div_ceil(2);
        if row > dims.width || col > dims.length {
            return None;
        }
        Self::new((row - 1) * dims.length + col, dims)
    }

    /// Every cell of a maze, in index order
    pub fn all(dims: Dimensions) -> impl Iterator<Item = CellIndex> {
        (1..=dims.total_cells()).map(CellIndex)
    }
}

/// Position in the rendered text grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Movement direction between adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Adjacent cells of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub top: Option<CellIndex>,
    pub bottom: Option<CellIndex>,
    pub left: Option<CellIndex>,
    pub right: Option<CellIndex>,
}

impl Neighbors {
    pub const fn get(&self, direction: Direction) -> Option<CellIndex> {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Neighbors that exist, as (direction, cell) pairs
    pub fn present(self) -> impl Iterator<Item = (Direction, CellIndex)> {
        [
            (Direction::Up, self.top),
            (Direction::Down, self.bottom),
            (Direction::Left, self.left),
            (Direction::Right, self.right),
        ]
        .into_iter()
        .filter_map(|(dir, cell)| cell.map(|c| (dir, c)))
    }
}

/// Grid coordinates of one cell's center, edges and right-hand corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    pub center: GridPos,
    pub top: GridPos,
    pub bottom: GridPos,
    pub left: GridPos,
    pub right: GridPos,
    pub top_right: GridPos,
    pub bottom_right: GridPos,
}

impl CellAddress {
    /// Wall shared with the neighbor in `direction`
    pub const fn edge(&self, direction: Direction) -> GridPos {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Cells adjacent to `cell`; left and right never wrap to another row
pub fn neighbors(cell: CellIndex, dims: Dimensions) -> Neighbors {
    let n = cell.get();
    let col = cell.col(dims);

    Neighbors {
        top: n.checked_sub(dims.length).and_then(|i| CellIndex::new(i, dims)),
        bottom: CellIndex::new(n + dims.length, dims),
        left: if col > 1 { CellIndex::new(n - 1, dims) } else { None },
        right: if col < dims.length { CellIndex::new(n + 1, dims) } else { None },
    }
}

/// Grid positions drawing `cell`
///
/// Cell (r, c) has its center at (2r-1, 2c-1); walls sit one step away
/// and corners diagonally.
pub fn address(cell: CellIndex, dims: Dimensions) -> CellAddress {
    let row = 2 * cell.row(dims) - 1;
    let col = 2 * cell.col(dims) - 1;

    CellAddress {
        center: GridPos::new(row, col),
        top: GridPos::new(row - 1, col),
        bottom: GridPos::new(row + 1, col),
        left: GridPos::new(row, col - 1),
        right: GridPos::new(row, col + 1),
        top_right: GridPos::new(row - 1, col + 1),
        bottom_right: GridPos::new(row + 1, col + 1),
    }
}

/// A cell on the outer edge of the maze (fewer than four neighbors)
pub fn is_boundary(cell: CellIndex, dims: Dimensions) -> bool {
    neighbors(cell, dims).present().count() < 4
}
