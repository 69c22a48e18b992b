//! Simulation engine - one generation of Conway's Game of Life
//!
//! Rules, applied to every cell at once against the previous generation:
//!
//! - Live cell with fewer than 2 live neighbors dies (underpopulation)
//! - Live cell with 2 or 3 live neighbors survives
//! - Live cell with more than 3 live neighbors dies (overpopulation)
//! - Dead cell with exactly 3 live neighbors becomes alive (reproduction)
//!
//! The field does not wrap: positions past an edge count as dead.

use crate::grid::Grid;

/// Offsets of the 8 neighbors (N, S, E, W and the diagonals).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells among the 8 neighbors of `(row, col)`.
pub fn alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if grid.is_alive(r, c) {
            count += 1;
        }
    }
    count
}

/// Next state of a single cell.
#[inline]
pub fn next_cell(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation into `dst`.
///
/// `dst` is resized to match `src`; its previous contents are irrelevant.
/// This is the allocation-free path once `dst` has the right capacity.
pub fn step_into(src: &Grid, dst: &mut Grid) {
    if dst.height() != src.height() || dst.width() != src.width() {
        dst.reset(src.height(), src.width());
    }

    let width = src.width();
    let out = dst.raw_mut();
    for (i, &alive) in src.raw().iter().enumerate() {
        let neighbors = alive_neighbors(src, i / width, i % width);
        out[i] = next_cell(alive, neighbors);
    }
}

/// Compute the next generation as a new grid.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.height(), grid.width());
    step_into(grid, &mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cell_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_cell(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_cell(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_corner_cell_has_at_most_three_neighbors() {
        let full = Grid::from_alive(3, 3, &[
            (0, 0), (0, 1), (0, 2),
            (1, 0), (1, 1), (1, 2),
            (2, 0), (2, 1), (2, 2),
        ]);
        assert_eq!(alive_neighbors(&full, 0, 0), 3);
        assert_eq!(alive_neighbors(&full, 2, 2), 3);
        assert_eq!(alive_neighbors(&full, 0, 1), 5);
        assert_eq!(alive_neighbors(&full, 1, 1), 8);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A live cell on the far edge must not count as a neighbor of column 0.
        let grid = Grid::from_alive(3, 5, &[(1, 4)]);
        assert_eq!(alive_neighbors(&grid, 1, 0), 0);
    }

    #[test]
    fn test_zero_sized_grid_steps_to_itself() {
        let empty = Grid::new(0, 0);
        assert_eq!(step(&empty), empty);

        let no_cols = Grid::new(4, 0);
        assert_eq!(step(&no_cols), no_cols);
    }

    #[test]
    fn test_step_into_resizes_scratch() {
        let src = Grid::from_alive(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut scratch = Grid::new(1, 1);
        step_into(&src, &mut scratch);
        assert_eq!(scratch, src);
    }

    #[test]
    fn test_step_reads_only_the_old_generation() {
        // Row of three: if step mutated in place the middle column would
        // already see the updated top cell and produce a different result.
        let grid = Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let next = step(&grid);
        assert_eq!(next.alive_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }
}
