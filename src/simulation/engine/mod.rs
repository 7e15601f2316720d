use crate::simulation::config::GRID_SIZE;
use crate::simulation::grid::{Grid, is_valid_index};

/// Moore neighborhood as `(row, col)` offsets.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Advances the grid by exactly one generation.
///
/// The two phases must stay separate: every neighbor count is taken from the current
/// generation before any alive flag is rewritten.
pub fn step(grid: &mut Grid) {
    count_neighbors(grid);
    apply_rules(grid);
    grid.generation += 1;
}

/// Phase one. Overwrites every cell's neighbor count from the current alive flags.
///
/// Only counts are written here, so the alive flags read by later cells are still the
/// ones from the current generation.
pub fn count_neighbors(grid: &mut Grid) {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let count = live_neighbors(grid, row, col);
            grid.cell_mut(row, col).set_neighbors(count);
        }
    }
}

/// Phase two. Each cell reads only its own count, so in-place updates stay synchronous.
pub fn apply_rules(grid: &mut Grid) {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let cell = grid.cell_mut(row, col);
            let alive = next_state(cell.is_alive(), cell.neighbors());
            cell.set_alive(alive);
        }
    }
}

/// Live cells around `(row, col)`. Positions off the board count as dead.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in MOORE_OFFSETS {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if is_valid_index(r, c) && grid.get_cell(r as usize, c as usize).is_alive() {
            count += 1;
        }
    }
    count
}

/// B3/S23.
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (false, 3) => true,
        (true, 2 | 3) => true,
        _ => false,
    }
}
