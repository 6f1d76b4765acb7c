//! Simulation statistics for monitoring.

use serde::{Deserialize, Serialize};

use super::Grid;

/// Snapshot of a grid's size, age and population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub population: usize,
}

impl GridStats {
    /// Compute statistics from the current generation.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            generation: grid.generation(),
            population: grid.population(),
        }
    }

    /// Fraction of cells alive (0.0-1.0).
    pub fn density(&self) -> f32 {
        self.population as f32 / (self.width * self.height) as f32
    }
}
