//! Text rendering of a maze with markers on cell centers

use super::Grid;
use super::cell::GridPos;

/// Marker drawn on the player's starting cell
pub const START_MARKER: char = '@';

/// Marker drawn on the goal cell
pub const GOAL_MARKER: char = '#';

/// Grid rows as strings, with each marker centered on its cell
pub(crate) fn render_lines(grid: &Grid, markers: &[(GridPos, char)]) -> Vec<String> {
    grid.rows()
        .iter()
        .enumerate()
        .map(|(row, glyphs)| {
            glyphs
                .iter()
                .enumerate()
                .map(|(col, glyph)| {
                    match markers.iter().find(|(pos, _)| pos.row == row && pos.col == col) {
                        Some((_, marker)) => format!(" {marker} "),
                        None => (*glyph).to_string(),
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Dimensions;

    #[test]
    fn test_render_markers() {
        let grid = Grid::build(Dimensions::new(2, 1), 1).unwrap();
        let lines = render_lines(
            &grid,
            &[(GridPos::new(1, 1), START_MARKER), (GridPos::new(1, 3), GOAL_MARKER)],
        );
        assert_eq!(lines, vec!["|---|---|", "| @ | # |", "|---|---|"]);
    }

    #[test]
    fn test_render_without_markers_matches_grid() {
        let grid = Grid::build(Dimensions::new(5, 5), 2).unwrap();
        assert_eq!(render_lines(&grid, &[]), grid.to_lines());
    }
}
