//! B3/S23 transition rule for Conway's Game of Life.
//!
//! The grid has a hard boundary: neighbors that fall outside
//! `[0, width) x [0, height)` do not contribute to the count.

/// Cell value for a dead cell.
pub const DEAD: u8 = 0;
/// Cell value for a live cell.
pub const ALIVE: u8 = 1;

/// Relative offsets of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Compute next cell state: birth on 3, survival on 2 or 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Count live neighbors of `(x, y)` in a row-major `width * height` buffer.
///
/// Out-of-bounds neighbors are skipped (no wraparound).
#[inline]
pub fn count_live_neighbors(cells: &[u8], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut count = 0u8;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if nx < width && ny < height {
            count += cells[ny * width + nx];
        }
    }
    count
}

/// Write row `y` of the next generation into `row`, reading from `source`.
pub(crate) fn advance_row(source: &[u8], row: &mut [u8], y: usize, width: usize, height: usize) {
    for (x, cell) in row.iter_mut().enumerate() {
        let alive = source[y * width + x] != DEAD;
        let neighbors = count_live_neighbors(source, width, height, x, y);
        *cell = if next_state(alive, neighbors) { ALIVE } else { DEAD };
    }
}
