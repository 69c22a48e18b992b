//! Grid module - the cell field the simulation runs on
//!
//! The grid is a `height x width` field where each cell is alive or dead.
//! Uses a flat vector in row-major order (`row * width + col`) for cache locality.
//! Coordinates are `(row, col)`, both 0-based, `row` top to bottom.
//! A zero-sized grid is valid and simply has no cells.

/// A single cell as seen by callers iterating the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// Dense grid of cells, fixed size until replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Create a grid with the given `(row, col)` cells alive.
    ///
    /// Coordinates outside the grid are skipped.
    pub fn from_alive(height: usize, width: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(height, width);
        for &(row, col) in alive {
            grid.set(row, col, true);
        }
        grid
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the state of the cell at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Out-of-bounds positions read as dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Set the cell at `(row, col)`.
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flip the cell at `(row, col)`, returning its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<bool> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        Some(self.cells[i])
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// All cells, rows top-to-bottom and columns left-to-right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, &alive)| Cell {
            row: i / width,
            col: i % width,
            alive,
        })
    }

    /// Coordinates of the live cells in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|c| c.alive)
            .map(|c| (c.row, c.col))
            .collect()
    }

    /// Resize in place and kill every cell.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn reset(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.cells.clear();
        self.cells.resize(height * width, false);
    }

    pub(crate) fn raw(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}
