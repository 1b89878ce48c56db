//! Core maze constants
//!
//! Level sizing, minimum edge length and the glyphs used for openings.

/// Number of cells in the training level (level 0)
pub const BASE_SEED: usize = 100;

/// Cell count difference between two consecutive levels
pub const LEVEL_STEP: usize = 10;

/// Highest level; larger levels are clamped to this one
pub const MAX_LEVEL: u32 = 290;

/// Smallest allowed edge length (in cells) of a maze
pub const MIN_EDGE: usize = 5;

/// Cell center before anything is placed on it
pub const BLANK_CENTER: &str = "   ";

/// Carved horizontal wall (between a cell and the one above or below it)
pub const OPEN_HORIZONTAL: &str = "   ";

/// Carved vertical wall (between a cell and the one left or right of it)
pub const OPEN_VERTICAL: &str = " ";

/// Display layout used when fitting a maze into a terminal
///
/// Two header rows and one footer row leave room for a 10x10 level 0 maze
/// on an 80x24 terminal.
pub const DISPLAY_LEFT_MARGIN: u16 = 3;
pub const DISPLAY_HEADER_ROWS: u16 = 2;
pub const DISPLAY_FOOTER_ROWS: u16 = 1;

/// Terminal columns taken by one cell (center plus its right wall)
pub const DISPLAY_CELL_COLUMNS: u16 = 4;

/// Score points per remaining second
pub const SCORE_PER_SECOND: i64 = 100;
