//! Player movement over a rendered maze
//!
//! A move is legal when the neighbor exists and the wall glyph between the
//! two cells has been carved.

use super::Grid;
use super::cell::{CellIndex, Direction, address, neighbors};

/// Whether a player on `from` can walk one cell in `direction`
pub fn can_move(grid: &Grid, from: CellIndex, direction: Direction) -> bool {
    let dims = grid.dims();
    if neighbors(from, dims).get(direction).is_none() {
        return false;
    }
    grid.is_open(address(from, dims).edge(direction))
}

/// Cell reached by trying to walk from `from` in `direction`
///
/// Blocked moves leave the player where it is.
pub fn step(grid: &Grid, from: CellIndex, direction: Direction) -> CellIndex {
    if !can_move(grid, from, direction) {
        return from;
    }
    neighbors(from, grid.dims()).get(direction).unwrap_or(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Dimensions;
    use strum::IntoEnumIterator;

    fn cell(n: usize, dims: Dimensions) -> CellIndex {
        CellIndex::new(n, dims).unwrap()
    }

    #[test]
    fn test_uncarved_wall_blocks() {
        let dims = Dimensions::new(5, 5);
        let mut grid = Grid::build(dims, 1).unwrap();
        let from = cell(7, dims);

        assert!(!can_move(&grid, from, Direction::Right));
        grid.open_wall(from, Direction::Right);
        assert!(can_move(&grid, from, Direction::Right));
        assert!(can_move(&grid, cell(8, dims), Direction::Left));
    }

    #[test]
    fn test_step() {
        let dims = Dimensions::new(3, 3);
        let mut grid = Grid::build(dims, 1).unwrap();
        let middle = cell(5, dims);
        for direction in Direction::iter() {
            grid.open_wall(middle, direction);
        }

        assert_eq!(step(&grid, middle, Direction::Left), cell(4, dims));
        assert_eq!(step(&grid, middle, Direction::Right), cell(6, dims));
        assert_eq!(step(&grid, middle, Direction::Up), cell(2, dims));
        assert_eq!(step(&grid, middle, Direction::Down), cell(8, dims));

        // From a corner only the carved direction moves.
        let corner = cell(1, dims);
        assert_eq!(step(&grid, corner, Direction::Left), corner);
        assert_eq!(step(&grid, corner, Direction::Up), corner);
        assert_eq!(step(&grid, corner, Direction::Right), corner);
    }

    #[test]
    fn test_border_never_opens() {
        let dims = Dimensions::new(5, 5);
        let grid = Grid::build(dims, 1).unwrap();
        assert!(!can_move(&grid, cell(1, dims), Direction::Up));
        assert!(!can_move(&grid, cell(25, dims), Direction::Right));
    }
}
