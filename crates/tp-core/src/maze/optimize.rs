//! Cosmetic corner pass
//!
//! Corners start out drawn with the vertical wall glyph. Once the vertical
//! walls above and below a corner have been carved away, the corner sits
//! alone in a horizontal wall and is redrawn with the style's corner glyph.

use super::cell::{CellIndex, GridPos, address};
use super::{Grid, WallCharError, WallStyle};

/// Redraw lone corners with the corner glyph of `intensity`
pub fn optimize(grid: &mut Grid, intensity: i32) -> Result<(), WallCharError> {
    let style = WallStyle::try_from(intensity)?;
    smooth_corners(grid, style.glyphs().corner);
    Ok(())
}

/// Only ever writes corner positions, so carved openings are untouched.
pub(crate) fn smooth_corners(grid: &mut Grid, corner: &'static str) {
    let dims = grid.dims();

    for cell in CellIndex::all(dims) {
        let addr = address(cell, dims);
        for pos in [addr.bottom_right, addr.top_right] {
            if vertical_walls_open(grid, pos) {
                grid.set(pos, corner);
            }
        }
    }
}

/// Every existing position directly above and below `pos` is open
fn vertical_walls_open(grid: &Grid, pos: GridPos) -> bool {
    let above = pos
        .row
        .checked_sub(1)
        .and_then(|row| grid.get(GridPos::new(row, pos.col)));
    let below = grid.get(GridPos::new(pos.row + 1, pos.col));

    match (above, below) {
        (None, None) => false,
        (above, below) => above.is_none_or(is_space) && below.is_none_or(is_space),
    }
}

fn is_space(glyph: &str) -> bool {
    glyph.contains(' ')
}
