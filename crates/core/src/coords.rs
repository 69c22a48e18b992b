//! Mapping between screen characters and grid cells.
//!
//! Every cell is [`CELL_WIDTH`] columns wide and one row tall. Resize, pointer
//! handling and the renderer all go through these helpers so the ratio lives
//! in one place.

use crate::types::CELL_WIDTH;

/// Grid dimensions `(height, width)` for a screen of `height x width` characters.
pub fn grid_size(screen_height: u16, screen_width: u16) -> (usize, usize) {
    (
        screen_height as usize,
        (screen_width / CELL_WIDTH) as usize,
    )
}

/// Grid `(row, col)` under the screen coordinate `(x, y)`.
///
/// Returns `None` for negative coordinates. Callers still need a bounds check
/// against the grid.
pub fn to_grid(x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || y < 0 {
        return None;
    }
    Some((y as usize, x as usize / CELL_WIDTH as usize))
}

/// Screen coordinate `(x, y)` of the left character of cell `(row, col)`.
pub fn to_screen(row: usize, col: usize) -> (usize, usize) {
    (col * CELL_WIDTH as usize, row)
}
