//! Maze generation errors

use thiserror::Error;

use super::Dimensions;

/// The level needs more cells than the display bound can hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("display area {bound} is too small for level {level} ({cells} cells)")]
pub struct SizeError {
    pub level: u32,
    pub cells: usize,
    pub bound: Dimensions,
}

/// The intensity does not select any known wall glyph set
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid value of intensity found: {0}")]
pub struct WallCharError(pub i32);

/// An invariant of the carving algorithm was broken
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarveError {
    #[error("maze {0} has no boundary cell to start from")]
    NoBoundaryCell(Dimensions),

    #[error("grid was built for maze {found}, expected {expected}")]
    GridMismatch { expected: Dimensions, found: Dimensions },

    #[error("path stack emptied with {visited} of {total} cells visited")]
    Exhausted { visited: usize, total: usize },

    #[error("cell {0} is on the carving path but was never visited")]
    UnvisitedPathCell(usize),
}

/// Any failure of a full generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Size(#[from] SizeError),

    #[error(transparent)]
    WallChar(#[from] WallCharError),

    #[error(transparent)]
    Carve(#[from] CarveError),
}

/// A cell number outside the maze numbering, which starts at 1
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cell index {0} is not a maze cell")]
pub struct CellIndexError(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carve_error_messages() {
        assert_eq!(
            CarveError::UnvisitedPathCell(7).to_string(),
            "cell 7 is on the carving path but was never visited"
        );
        assert_eq!(
            CarveError::Exhausted { visited: 3, total: 9 }.to_string(),
            "path stack emptied with 3 of 9 cells visited"
        );
    }

    #[test]
    fn test_generation_error_is_transparent() {
        let err = GenerationError::from(CarveError::UnvisitedPathCell(2));
        assert_eq!(err.to_string(), CarveError::UnvisitedPathCell(2).to_string());
    }
}
