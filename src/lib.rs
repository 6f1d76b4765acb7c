//! Life Engine - Conway's Game of Life on a bounded grid.
//!
//! This crate provides a small, deterministic implementation of the
//! standard B3/S23 rule on a fixed-size, non-wrapping grid. Rendering and
//! tick scheduling are left to the caller, which reads cell states after
//! each step.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and pattern seeding
//! - `compute`: Double-buffered grid and the transition rule
//!
//! # Example
//!
//! ```rust
//! use life_engine::{
//!     compute::Grid,
//!     schema::seed_glider_gun,
//! };
//!
//! let mut grid = Grid::new(40, 30)?;
//! seed_glider_gun(&mut grid)?;
//!
//! for _ in 0..100 {
//!     grid.step();
//! }
//!
//! for y in 0..grid.height() {
//!     for x in 0..grid.width() {
//!         let _alive = grid.is_alive(x, y)?;
//!     }
//! }
//! # Ok::<(), life_engine::compute::GridError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, GridError, GridStats};
pub use schema::{ConfigError, Pattern, Seed, SimulationConfig, seed_glider_gun};
