//! LifeView: maps `core::AppState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each grid cell becomes [`CELL_WIDTH`] characters on one row. What those
//! characters show is decided in priority order:
//!
//! 1. the cursor glyph, when paused and the cell is under the cursor
//! 2. the overlay text covering that cell, when the overlay is shown
//! 3. blanks
//!
//! Live cells additionally get a position-derived background color.

use crate::core::{to_screen, AppState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CELL_WIDTH;

/// Background used outside the grid and for dead cells.
pub const FLAT_BG: Rgb = Rgb::new(0, 0, 0);

/// Keybinding legend shown under the status lines of the overlay.
const LEGEND: [&str; 9] = [
    " p            pause / resume",
    " ?            show / hide this help",
    " w a s d      move cursor (paused)",
    " h j k l      move cursor (paused)",
    " arrows       move cursor (paused)",
    " t / space    toggle cell (paused)",
    " left click   make cell alive",
    " right click  make cell dead",
    " q / ctrl+c   quit",
];

/// Background color of a live cell at `(row, col)` on a `height x width` grid.
///
/// Red follows the column fraction, green the row fraction and blue the
/// product of the remaining fractions. Fractions run from the first to the
/// last row/column, so each channel spans the full `0..=255`; a single row or
/// column counts as fraction 0. Integer math keeps it exact.
pub fn gradient(height: usize, width: usize, row: usize, col: usize) -> Rgb {
    if row >= height || col >= width {
        return FLAT_BG;
    }
    let (dh, dw) = ((height as u64 - 1).max(1), (width as u64 - 1).max(1));
    let (r, c) = (row as u64, col as u64);
    Rgb::new(
        (255 * c / dw) as u8,
        (255 * r / dh) as u8,
        (255 * (dw - c) * (dh - r) / (dw * dh)) as u8,
    )
}

/// Overlay text, one entry per grid row starting at the top.
pub fn overlay_lines(state: &AppState) -> Vec<String> {
    let status = if state.paused() { "PAUSED" } else { "RUNNING" };
    let mut lines = Vec::with_capacity(LEGEND.len() + 5);
    lines.push(" Conway's Game of Life".to_string());
    lines.push(String::new());
    lines.push(format!(" Generation: {}", state.generation()));
    lines.push(format!(" Status:     {status}"));
    lines.push(String::new());
    lines.extend(LEGEND.iter().map(|s| s.to_string()));
    lines
}

/// A lightweight terminal renderer for the Life grid.
#[derive(Debug, Clone)]
pub struct LifeView {
    cursor_glyph: [char; CELL_WIDTH as usize],
    text: CellStyle,
    cursor: CellStyle,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            cursor_glyph: ['[', ']'],
            text: CellStyle {
                fg: Rgb::new(230, 230, 230),
                bg: FLAT_BG,
                bold: false,
            },
            cursor: CellStyle {
                fg: Rgb::new(255, 220, 80),
                bg: FLAT_BG,
                bold: true,
            },
        }
    }
}

impl LifeView {
    /// Render into an existing framebuffer, resizing it to the grid.
    ///
    /// An unsized state yields an empty framebuffer.
    pub fn render_into(&self, state: &AppState, fb: &mut FrameBuffer) {
        if !state.is_initialized() {
            fb.resize(0, 0);
            return;
        }

        let grid = state.grid();
        let (height, width) = (grid.height(), grid.width());
        let (screen_w, _) = to_screen(0, width);
        fb.resize(screen_w as u16, height as u16);

        let overlay: Vec<Vec<char>> = if state.overlay_shown() {
            overlay_lines(state)
                .iter()
                .take(height)
                .map(|line| line.chars().collect())
                .collect()
        } else {
            Vec::new()
        };

        for cell in grid.cells() {
            let (x, y) = to_screen(cell.row, cell.col);
            let bg = if cell.alive {
                gradient(height, width, cell.row, cell.col)
            } else {
                FLAT_BG
            };

            if state.shows_cursor_at(cell.row, cell.col) {
                let style = self.cursor.with_bg(bg);
                for (dx, &ch) in self.cursor_glyph.iter().enumerate() {
                    fb.put_char((x + dx) as u16, y as u16, ch, style);
                }
                continue;
            }

            let style = self.text.with_bg(bg);
            let line = overlay.get(cell.row);
            for dx in 0..CELL_WIDTH as usize {
                let ch = line
                    .and_then(|chars| chars.get(x + dx))
                    .copied()
                    .unwrap_or(' ');
                fb.put_char((x + dx) as u16, y as u16, ch, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &AppState) -> FrameBuffer {
        let mut fb = FrameBuffer::default();
        self.render_into(state, &mut fb);
        fb
    }
}
