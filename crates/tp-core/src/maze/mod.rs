//! Maze system
//!
//! Contains the dimension solver, cell addressing, grid building, carving,
//! the cosmetic wall pass and movement checks over the rendered grid.

mod carve;
mod cell;
mod dimensions;
mod errors;
mod generation;
mod glyph;
mod grid;
mod movement;
mod optimize;
mod render;

pub use carve::carve;
pub use cell::{CellAddress, CellIndex, Direction, GridPos, Neighbors, address, is_boundary, neighbors};
pub use dimensions::{Dimensions, factorize, maze_area, solve};
pub use errors::{CarveError, CellIndexError, GenerationError, SizeError, WallCharError};
pub use generation::{MazeResult, generate};
pub use glyph::{WallGlyphs, WallStyle};
pub use grid::Grid;
pub use movement::{can_move, step};
pub use optimize::optimize;
pub use render::{GOAL_MARKER, START_MARKER};
