//! Maze sizing
//!
//! Turns a game level into a cell count and factorizes that count into a
//! length and width that fit the display bound.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rng::GameRng;
use crate::{
    BASE_SEED, DISPLAY_CELL_COLUMNS, DISPLAY_FOOTER_ROWS, DISPLAY_HEADER_ROWS,
    DISPLAY_LEFT_MARGIN, LEVEL_STEP, MAX_LEVEL, MIN_EDGE,
};

use super::SizeError;

/// Number of cells along each axis of a maze
///
/// `length` counts cells along the horizontal edge, `width` along the
/// vertical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: usize,
    pub width: usize,
}

impl Dimensions {
    pub const fn new(length: usize, width: usize) -> Self {
        Self { length, width }
    }

    /// Total number of cells, saturating at `usize::MAX` for huge bounds
    pub const fn total_cells(&self) -> usize {
        self.length.saturating_mul(self.width)
    }

    /// Rows of the rendered grid
    pub const fn grid_rows(&self) -> usize {
        2 * self.width + 1
    }

    /// Columns of the rendered grid
    pub const fn grid_cols(&self) -> usize {
        2 * self.length + 1
    }

    /// Check whether `self` fits inside `bound` without rotating
    pub const fn fits_within(&self, bound: &Dimensions) -> bool {
        self.length <= bound.length && self.width <= bound.width
    }

    /// Largest cell bound that can be drawn on a terminal of `cols` x `rows`
    ///
    /// Leaves room for the left margin, the header text above the maze and
    /// the score line below it.
    pub fn fit_display(cols: u16, rows: u16) -> Self {
        let usable_cols = cols.saturating_sub(DISPLAY_LEFT_MARGIN + 1);
        let usable_rows = rows.saturating_sub(DISPLAY_HEADER_ROWS + DISPLAY_FOOTER_ROWS + 1);
        Self {
            length: (usable_cols / DISPLAY_CELL_COLUMNS) as usize,
            width: (usable_rows / 2) as usize,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.length, self.width)
    }
}

/// Number of cells in the maze of the given level
///
/// Levels above [`MAX_LEVEL`] are clamped so the area stays bounded.
pub fn maze_area(level: u32) -> usize {
    level.min(MAX_LEVEL) as usize * LEVEL_STEP + BASE_SEED
}

/// Every (length, width) pair with `length * width == area` that fits in `bound`
///
/// Both edges are at least [`MIN_EDGE`]. Pairs are listed from the most
/// square one down; a rectangular factor pair contributes both orientations
/// when both fit.
pub fn factorize(area: usize, bound: Dimensions) -> Vec<Dimensions> {
    let mut sizes = Vec::new();

    for small in (MIN_EDGE..=area.isqrt()).rev() {
        if area % small != 0 {
            continue;
        }
        let large = area / small;

        let wide = Dimensions::new(large, small);
        if wide.fits_within(&bound) {
            sizes.push(wide);
        }

        let tall = Dimensions::new(small, large);
        if small != large && tall.fits_within(&bound) {
            sizes.push(tall);
        }
    }

    sizes
}

/// Pick the maze dimensions for `level` inside `bound`
pub fn solve(level: u32, bound: Dimensions, rng: &mut GameRng) -> Result<Dimensions, SizeError> {
    let cells = maze_area(level);
    let too_small = SizeError { level, cells, bound };

    if cells > bound.total_cells() {
        return Err(too_small);
    }

    let candidates = factorize(cells, bound);
    let chosen = rng.choose(&candidates).copied().ok_or(too_small)?;

    debug!(
        "level {} needs {} cells: {} candidates within {}, chose {}",
        level,
        cells,
        candidates.len(),
        bound,
        chosen
    );

    Ok(chosen)
}
