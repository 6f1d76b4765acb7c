//! Compute module - Grid storage and generation stepping.

mod grid;
mod rule;
mod stats;

pub use grid::*;
pub use rule::*;
pub use stats::*;
