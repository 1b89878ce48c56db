//! Rendered maze grid
//!
//! A `2 * width + 1` by `2 * length + 1` table of glyphs. Odd row and odd
//! column positions are cell centers; the rest are walls and corners.

use serde::Serialize;

use crate::{BLANK_CENTER, OPEN_HORIZONTAL, OPEN_VERTICAL};

use super::cell::{CellIndex, Direction, GridPos, address, neighbors};
use super::{Dimensions, WallCharError, WallGlyphs, WallStyle};

/// Glyph written into a wall when it is carved
pub(crate) const fn opening(direction: Direction) -> &'static str {
    match direction {
        Direction::Up | Direction::Down => OPEN_HORIZONTAL,
        Direction::Left | Direction::Right => OPEN_VERTICAL,
    }
}

/// Maze drawn as rows of glyphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    dims: Dimensions,
    style: WallStyle,
    cells: Vec<Vec<&'static str>>,
}

impl Grid {
    /// All-walls grid for `dims`, drawn in the style selected by `intensity`
    pub fn build(dims: Dimensions, intensity: i32) -> Result<Self, WallCharError> {
        let style = WallStyle::try_from(intensity)?;
        Ok(Self::with_style(dims, style))
    }

    /// All-walls grid for `dims` in `style`
    pub fn with_style(dims: Dimensions, style: WallStyle) -> Self {
        let glyphs = style.glyphs();
        let cells = (0..dims.grid_rows())
            .map(|row| {
                (0..dims.grid_cols())
                    .map(|col| match (row % 2, col % 2) {
                        (0, 1) => glyphs.horizontal,
                        (1, 1) => BLANK_CENTER,
                        _ => glyphs.vertical,
                    })
                    .collect()
            })
            .collect();

        Self { dims, style, cells }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn style(&self) -> WallStyle {
        self.style
    }

    pub fn glyphs(&self) -> WallGlyphs {
        self.style.glyphs()
    }

    pub fn rows(&self) -> &[Vec<&'static str>] {
        &self.cells
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Glyph at `pos`, if `pos` is inside the grid
    pub fn get(&self, pos: GridPos) -> Option<&'static str> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub(crate) fn set(&mut self, pos: GridPos, glyph: &'static str) {
        self.cells[pos.row][pos.col] = glyph;
    }

    /// Whether the glyph at `pos` lets a player through
    pub fn is_open(&self, pos: GridPos) -> bool {
        self.get(pos).is_some_and(|glyph| glyph.contains(' '))
    }

    /// Carve the wall between `cell` and its neighbor in `direction`
    ///
    /// Returns false when there is no neighbor on that side.
    pub fn open_wall(&mut self, cell: CellIndex, direction: Direction) -> bool {
        if neighbors(cell, self.dims).get(direction).is_none() {
            return false;
        }
        let pos = address(cell, self.dims).edge(direction);
        self.set(pos, opening(direction));
        true
    }

    /// Number of carved walls between cells
    pub fn openings(&self) -> usize {
        let last_row = self.num_rows().saturating_sub(1);
        let last_col = self.num_cols().saturating_sub(1);

        (1..last_row)
            .flat_map(|row| (1..last_col).map(move |col| GridPos::new(row, col)))
            .filter(|pos| (pos.row + pos.col) % 2 == 1)
            .filter(|&pos| self.is_open(pos))
            .count()
    }

    /// One string per row, ready to print
    pub fn to_lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.concat()).collect()
    }
}
