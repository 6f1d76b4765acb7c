//! Double-buffered Game of Life grid.
//!
//! The grid owns two equally sized cell buffers. One holds the current
//! generation, the other the generation before it. Each step flips an
//! `active` selector so the old current buffer becomes the read-only source
//! and the old previous buffer becomes the write target. No cell data is
//! copied by the swap.

use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::rule::{ALIVE, DEAD, advance_row};
use crate::schema::SimulationConfig;

/// Largest supported extent on either axis.
pub const MAX_DIMENSION: usize = 255;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Grid dimensions {width}x{height} exceed maximum of {max}x{max}")]
    DimensionsTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Grid {width}x{height} is smaller than the {required_width}x{required_height} pattern")]
    GridTooSmall {
        width: usize,
        height: usize,
        required_width: usize,
        required_height: usize,
    },
}

/// Game of Life grid with a current and a previous generation.
///
/// Cells are stored row-major, indexed by `y * width + x`, with values
/// [`DEAD`] or [`ALIVE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Both generation buffers, always `width * height` cells each.
    buffers: [Vec<u8>; 2],
    /// Index of the buffer holding the current generation.
    active: usize,
    /// Number of completed steps.
    generation: u64,
}

impl Grid {
    /// Allocate a grid with every cell dead in both generations.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GridError::DimensionsTooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }

        let size = width * height;
        log::debug!("Allocating {}x{} grid ({} cells per buffer)", width, height, size);

        Ok(Self {
            width,
            height,
            buffers: [vec![DEAD; size], vec![DEAD; size]],
            active: 0,
            generation: 0,
        })
    }

    /// Allocate a grid sized by a simulation configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, GridError> {
        Self::new(config.width, config.height)
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of steps taken since allocation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total cell count (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current generation, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.buffers[self.active]
    }

    /// Generation before the last step. Meaningless before the first step.
    #[inline]
    pub fn previous(&self) -> &[u8] {
        &self.buffers[self.active ^ 1]
    }

    /// Iterate over rows of the current generation.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells().chunks_exact(self.width)
    }

    /// Whether the cell at `(x, y)` is alive in the current generation.
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.idx(x, y)?;
        Ok(self.cells()[idx] != DEAD)
    }

    /// Set the cell at `(x, y)` in the current generation.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.idx(x, y)?;
        self.buffers[self.active][idx] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Mark an in-range cell alive. Callers guarantee `x < width` and `y < height`.
    #[inline]
    pub(crate) fn revive(&mut self, x: usize, y: usize) {
        let idx = y * self.width + x;
        self.buffers[self.active][idx] = ALIVE;
    }

    /// Kill every cell in the current generation.
    pub fn clear(&mut self) {
        self.buffers[self.active].fill(DEAD);
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells().iter().filter(|&&c| c != DEAD).count()
    }

    /// Advance the simulation by one generation.
    pub fn step(&mut self) {
        let width = self.width;
        let height = self.height;

        self.active ^= 1;
        let (source, target) = self.split_buffers();

        #[cfg(not(target_arch = "wasm32"))]
        target
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| advance_row(source, row, y, width, height));

        #[cfg(target_arch = "wasm32")]
        for (y, row) in target.chunks_mut(width).enumerate() {
            advance_row(source, row, y, width, height);
        }

        self.generation += 1;
        log::trace!("Stepped to generation {}", self.generation);
    }

    /// Run simulation for specified number of steps.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Convert (x, y) coordinates to a flat index, checking bounds.
    #[inline]
    fn idx(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Split into (previous, current) so a step can read one and write the other.
    fn split_buffers(&mut self) -> (&[u8], &mut [u8]) {
        let [first, second] = &mut self.buffers;
        if self.active == 0 {
            (second.as_slice(), first.as_mut_slice())
        } else {
            (first.as_slice(), second.as_mut_slice())
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell == DEAD { "." } else { "O" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in live {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive(x, y).unwrap() {
                    live.push((x, y));
                }
            }
        }
        live
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(8, 5).unwrap();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.cells().len(), 40);
        assert_eq!(grid.previous().len(), 40);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 10),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(matches!(
            Grid::new(10, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(256, 10),
            Err(GridError::DimensionsTooLarge { .. })
        ));
        assert!(Grid::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(6, 4).unwrap();
        assert!(matches!(
            grid.is_alive(6, 0),
            Err(GridError::OutOfBounds { x: 6, y: 0, .. })
        ));
        assert!(matches!(
            grid.is_alive(0, 4),
            Err(GridError::OutOfBounds { x: 0, y: 4, .. })
        ));
        assert!(grid.set(6, 4, true).is_err());
        assert_eq!(grid.is_alive(5, 3), Ok(false));
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut grid = grid_with(4, 4, &block);

        for _ in 0..5 {
            grid.step();
            assert_eq!(live_cells(&grid), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
        }
        assert_eq!(grid.generation(), 5);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        grid.step();
        assert_eq!(live_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        grid.step();
        assert_eq!(live_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_previous_holds_prior_generation() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.cells().to_vec();

        grid.step();
        assert_eq!(grid.previous(), before.as_slice());
        assert_ne!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_corner_block_survives_boundary() {
        // A block touching the corner is still stable without wraparound
        let mut grid = grid_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        grid.run(3);
        assert_eq!(live_cells(&grid), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_glider_dies_at_hard_edge() {
        // With no wraparound a glider eventually collapses into a block in the corner
        let mut grid = grid_with(6, 6, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        grid.run(40);
        assert_eq!(live_cells(&grid), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_with(4, 4, &[(0, 0), (3, 3)]);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_display() {
        let grid = grid_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(grid.to_string(), "O..\n..O\n");
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..=24, 1usize..=24).prop_flat_map(|(width, height)| {
            proptest::collection::vec(any::<bool>(), width * height).prop_map(move |cells| {
                let mut grid = Grid::new(width, height).unwrap();
                for (i, alive) in cells.into_iter().enumerate() {
                    grid.set(i % width, i / width, alive).unwrap();
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_step_preserves_buffer_sizes(grid in arb_grid(), steps in 0u64..12) {
            let mut grid = grid;
            let size = grid.width() * grid.height();
            grid.run(steps);
            prop_assert_eq!(grid.cells().len(), size);
            prop_assert_eq!(grid.previous().len(), size);
            prop_assert!(grid.cells().iter().all(|&c| c == DEAD || c == ALIVE));
        }

        #[test]
        fn prop_step_is_deterministic(grid in arb_grid(), steps in 0u64..12) {
            let mut a = grid.clone();
            let mut b = grid;
            a.run(steps);
            b.run(steps);
            prop_assert_eq!(a.cells(), b.cells());
        }
    }
}
