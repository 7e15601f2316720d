use bevy::prelude::*;
use rand::Rng;

use crate::simulation::config::GRID_SIZE;

/// A single square of the board.
///
/// `row` and `col` are fixed once the cell is placed; only the neighbor count and the
/// alive flag change while the simulation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    neighbors: u8,
    alive: bool,
}

impl Cell {
    const fn dead(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            neighbors: 0,
            alive: false,
        }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Live neighbors counted during the last tick.
    pub const fn neighbors(&self) -> u8 {
        self.neighbors
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: u8) {
        self.neighbors = neighbors;
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}

/// True iff `(row, col)` lies on the board.
///
/// Takes signed coordinates so that neighbor offsets and cursor positions left of or above the
/// board are rejected instead of wrapping around.
pub const fn is_valid_index(row: i32, col: i32) -> bool {
    row >= 0 && row < GRID_SIZE as i32 && col >= 0 && col < GRID_SIZE as i32
}

/// Systems that change `Grid` in `Update`. Anything presenting the grid runs after this set,
/// so an edit shows up in the same frame it was made.
#[derive(SystemSet, Hash, Debug, Clone, PartialEq, Eq)]
pub struct GridEdit;

/// The 40x40 board. Allocated once at startup and mutated in place afterwards.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub generation: u64,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|row| std::array::from_fn(|col| Cell::dead(row, col))),
            generation: 0,
        }
    }

    /// Converts signed coordinates into an index that is safe to dereference.
    pub fn try_index(row: i32, col: i32) -> Option<(usize, usize)> {
        is_valid_index(row, col).then_some((row as usize, col as usize))
    }

    /// Snapshot of the cell at `(row, col)`. Panics on an index off the board.
    pub fn get_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Sets the alive flag. Neighbor counts are left alone until the next tick.
    ///
    /// Callers validate the index first; an index off the board panics.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col].set_alive(alive);
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row][col]
    }

    /// Row-major iteration over every cell.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }

    pub fn population(&self) -> usize {
        self.iter().filter(|cell| cell.is_alive()).count()
    }

    /// `(row, col)` of every live cell in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.row(), cell.col()))
            .collect()
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_alive(false);
            cell.set_neighbors(0);
        }
        self.generation = 0;
    }

    /// Refills the board, each cell alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for cell in self.cells.iter_mut().flatten() {
            cell.set_alive(rng.random_bool(density));
            cell.set_neighbors(0);
        }
        self.generation = 0;
    }
}
