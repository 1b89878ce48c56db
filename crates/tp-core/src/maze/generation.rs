//! Maze generation entry point
//!
//! level -> dimensions -> all-walls grid -> carved maze with start and goal.

use log::debug;
use serde::Serialize;

use crate::rng::GameRng;

use super::cell::{CellIndex, GridPos, address};
use super::render::{GOAL_MARKER, START_MARKER, render_lines};
use super::{Dimensions, GenerationError, Grid, WallStyle, carve, solve};

/// A fully carved maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeResult {
    pub grid: Grid,
    pub start: CellIndex,
    pub goal: CellIndex,
    pub dims: Dimensions,
}

impl MazeResult {
    /// Grid position of the start cell's center
    pub fn start_position(&self) -> GridPos {
        address(self.start, self.dims).center
    }

    /// Grid position of the goal cell's center
    pub fn goal_position(&self) -> GridPos {
        address(self.goal, self.dims).center
    }

    /// Printable rows with the start and goal marked
    pub fn render(&self) -> Vec<String> {
        render_lines(
            &self.grid,
            &[
                (self.start_position(), START_MARKER),
                (self.goal_position(), GOAL_MARKER),
            ],
        )
    }
}

/// Generate the maze for `level`, sized to fit `bound`
///
/// Either returns a complete maze or an error; there are no partial results.
pub fn generate(
    level: u32,
    bound: Dimensions,
    intensity: i32,
    rng: &mut GameRng,
) -> Result<MazeResult, GenerationError> {
    let style = WallStyle::try_from(intensity)?;
    let dims = solve(level, bound, rng)?;

    let mut grid = Grid::with_style(dims, style);
    let (start, goal) = carve(dims, &mut grid, rng)?;

    debug!("generated level {} maze {} in {} style", level, dims, style);

    Ok(MazeResult {
        grid,
        start,
        goal,
        dims,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{SizeError, WallCharError};

    #[test]
    fn test_generate() {
        let mut rng = GameRng::new(42);
        let maze = generate(0, Dimensions::new(20, 10), 1, &mut rng).unwrap();

        assert_eq!(maze.dims.total_cells(), 100);
        assert_eq!(maze.grid.dims(), maze.dims);
        assert_eq!(maze.grid.num_rows(), 2 * maze.dims.width + 1);
        assert_eq!(maze.grid.openings(), 99);
        assert_ne!(maze.start, maze.goal);
    }

    #[test]
    fn test_generate_invalid_intensity() {
        let mut rng = GameRng::new(42);
        let err = generate(0, Dimensions::new(20, 10), -1, &mut rng).unwrap_err();
        assert_eq!(err, GenerationError::WallChar(WallCharError(-1)));
        assert!(err.to_string().contains("Invalid value of intensity found:"));
    }

    #[test]
    fn test_generate_too_small() {
        let mut rng = GameRng::new(42);
        let err = generate(0, Dimensions::new(4, 4), 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Size(SizeError { cells: 100, .. })
        ));
    }

    #[test]
    fn test_render_marks_start_and_goal() {
        let mut rng = GameRng::new(3);
        let maze = generate(0, Dimensions::new(10, 10), 1, &mut rng).unwrap();
        let lines = maze.render();

        assert_eq!(lines.len(), 21);
        let text = lines.concat();
        assert_eq!(text.matches(START_MARKER).count(), 1);
        assert_eq!(text.matches(GOAL_MARKER).count(), 1);
    }

    #[test]
    fn test_positions_are_centers() {
        let mut rng = GameRng::new(8);
        let maze = generate(1, Dimensions::new(30, 30), 2, &mut rng).unwrap();
        assert_eq!(
            CellIndex::from_center(maze.start_position(), maze.dims),
            Some(maze.start)
        );
        assert_eq!(
            CellIndex::from_center(maze.goal_position(), maze.dims),
            Some(maze.goal)
        );
    }
}
