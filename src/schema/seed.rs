//! Seed types for initializing Game of Life simulations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::compute::{Grid, GridError};

/// Bounding box width of the glider gun (last column is empty).
pub const GLIDER_GUN_WIDTH: usize = 37;
/// Bounding box height of the glider gun.
pub const GLIDER_GUN_HEIGHT: usize = 11;

/// Gosper glider gun, one string per row, `X` marks a live cell.
const GLIDER_GUN: [&str; GLIDER_GUN_HEIGHT] = [
    "........................X...........",
    "......................X.X...........",
    "............XX......XX............XX",
    "...........X...X....XX............XX",
    "XX........X.....X...XX..............",
    "XX........X...X.XX....X.X...........",
    "..........X.....X.......X...........",
    "...........X...X....................",
    "............XX......................",
    "....................................",
    "....................................",
];

/// Complete seed specification for simulation initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::GliderGun,
        }
    }
}

/// Predefined patterns for initialization.
///
/// Positions are the top-left cell of the pattern's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Gosper glider gun centered in the grid.
    GliderGun,
    /// 2x2 still life.
    Block { x: usize, y: usize },
    /// Period-2 oscillator, starting vertical.
    Blinker { x: usize, y: usize },
    /// Glider travelling towards +x, +y.
    Glider { x: usize, y: usize },
    /// Uniform random soup.
    Random {
        /// Probability each cell starts alive, clamped to [0, 1].
        density: f32,
        /// Random seed.
        seed: u64,
    },
    /// Custom list of live (x, y) cells.
    Custom { cells: Vec<(usize, usize)> },
}

impl Seed {
    /// Clear the grid's current generation and stamp the pattern into it.
    ///
    /// Cells falling outside the grid are skipped. Only the glider gun can
    /// fail, and it leaves the grid untouched when it does.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        match &self.pattern {
            Pattern::GliderGun => return seed_glider_gun(grid),
            Pattern::Block { x, y } => {
                grid.clear();
                stamp(grid, *x, *y, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
            }
            Pattern::Blinker { x, y } => {
                grid.clear();
                stamp(grid, *x, *y, &[(0, 0), (0, 1), (0, 2)]);
            }
            Pattern::Glider { x, y } => {
                grid.clear();
                stamp(grid, *x, *y, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
            }
            Pattern::Random { density, seed } => {
                grid.clear();
                apply_random(grid, *density, *seed);
            }
            Pattern::Custom { cells } => {
                grid.clear();
                stamp(grid, 0, 0, cells);
            }
        }
        log::debug!(
            "Seeded {:?} with {} live cells",
            self.pattern,
            grid.population()
        );
        Ok(())
    }
}

/// Seed a Gosper glider gun centered in the grid.
///
/// Clears the current generation first. The previous generation is left
/// as-is until the next step overwrites it.
pub fn seed_glider_gun(grid: &mut Grid) -> Result<(), GridError> {
    let width = grid.width();
    let height = grid.height();
    if width < GLIDER_GUN_WIDTH || height < GLIDER_GUN_HEIGHT {
        return Err(GridError::GridTooSmall {
            width,
            height,
            required_width: GLIDER_GUN_WIDTH,
            required_height: GLIDER_GUN_HEIGHT,
        });
    }

    let offset_x = (width - GLIDER_GUN_WIDTH) / 2;
    let offset_y = (height - GLIDER_GUN_HEIGHT) / 2;

    grid.clear();
    for (y, row) in GLIDER_GUN.iter().enumerate() {
        for (x, _) in row.bytes().enumerate().filter(|&(_, b)| b == b'X') {
            grid.revive(x + offset_x, y + offset_y);
        }
    }

    log::debug!(
        "Seeded glider gun at offset ({}, {}) in {}x{} grid",
        offset_x,
        offset_y,
        width,
        height
    );
    Ok(())
}

/// Set each offset cell relative to `(x, y)`, skipping anything off-grid.
fn stamp(grid: &mut Grid, x: usize, y: usize, cells: &[(usize, usize)]) {
    for &(dx, dy) in cells {
        let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if cx < grid.width() && cy < grid.height() {
            grid.revive(cx, cy);
        }
    }
}

fn apply_random(grid: &mut Grid, density: f32, seed: u64) {
    let density = density.clamp(0.0, 1.0) as f64;
    let mut rng = StdRng::seed_from_u64(seed);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if rng.gen_bool(density) {
                grid.revive(x, y);
            }
        }
    }
}
