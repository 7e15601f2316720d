use bevy::prelude::*;
use thiserror::Error;

use crate::plugins::mouse_position::MouseGridPosition;
use crate::simulation::grid::{Grid, GridEdit};

pub struct PatternPlugin;

impl Plugin for PatternPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, stamp_pattern_at_cursor.in_set(GridEdit));
    }
}

/// A preset given as `(row, col)` offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Presets in hotkey order, `1` through `5`.
pub const PATTERNS: [&Pattern; 5] = [&BLINKER, &GLIDER, &TOAD, &BEACON, &R_PENTOMINO];

const PATTERN_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("{pattern} does not fit with its corner at row {row}, column {col}")]
    OutOfBounds {
        pattern: &'static str,
        row: i32,
        col: i32,
    },
}

impl Grid {
    /// Makes every cell of `pattern` alive, with its top-left corner at `origin` (`x` = column).
    ///
    /// Nothing is written unless the whole pattern lands on the board.
    pub fn stamp(&mut self, pattern: &Pattern, origin: IVec2) -> Result<(), PatternError> {
        let cells = pattern
            .cells
            .iter()
            .map(|&(dr, dc)| Grid::try_index(origin.y + dr, origin.x + dc))
            .collect::<Option<Vec<_>>>()
            .ok_or(PatternError::OutOfBounds {
                pattern: pattern.name,
                row: origin.y,
                col: origin.x,
            })?;

        for (row, col) in cells {
            self.set_alive(row, col, true);
        }
        Ok(())
    }
}

fn stamp_pattern_at_cursor(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<MouseGridPosition>,
    mut grid: ResMut<Grid>,
) {
    let Some(pattern) = PATTERN_KEYS
        .iter()
        .position(|&key| keys.just_pressed(key))
        .map(|i| PATTERNS[i])
    else {
        return;
    };
    let Some(origin) = mouse.cur else {
        return;
    };

    match grid.stamp(pattern, origin) {
        Ok(()) => info!("Stamped {} at row {}, column {}", pattern.name, origin.y, origin.x),
        Err(e) => warn!("{e}"),
    }
}
