use bevy::prelude::*;

use crate::simulation::config::{CELL_WIDTH, WINDOW_SIZE};

/// Converts a cursor position (logical pixels, origin top-left) into grid coordinates.
///
/// `x` maps to the column and `y` to the row. The result can lie off the board; callers
/// validate it before touching the grid.
#[inline(always)]
pub fn window_to_cell(window_pos: Vec2) -> IVec2 {
    IVec2::new(
        (window_pos.x / CELL_WIDTH).floor() as i32,
        (window_pos.y / CELL_WIDTH).floor() as i32,
    )
}

/// World-space center of a cell. The 2D camera sits at the window center with y pointing up.
#[inline(always)]
pub fn cell_to_world(row: usize, col: usize) -> Vec2 {
    let half = WINDOW_SIZE as f32 / 2.0;
    Vec2::new(
        col as f32 * CELL_WIDTH + (CELL_WIDTH / 2.0) - half,
        half - (row as f32 * CELL_WIDTH + (CELL_WIDTH / 2.0)),
    )
}

/// Every cell on the line from `from` to `to`, both ends included (Bresenham).
///
/// Keeps fast mouse strokes from skipping cells between two frames.
pub fn cells_between(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let mut x = from.x;
    let mut y = from.y;
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) / 2;

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        cells.push(IVec2::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x += sx;
        }
        if e2 < dy {
            err += dx;
            y += sy;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_positions_divide_by_cell_width() {
        assert_eq!(window_to_cell(Vec2::new(0.0, 0.0)), IVec2::new(0, 0));
        assert_eq!(window_to_cell(Vec2::new(24.9, 24.9)), IVec2::new(0, 0));
        assert_eq!(window_to_cell(Vec2::new(25.0, 51.0)), IVec2::new(1, 2));
        assert_eq!(window_to_cell(Vec2::new(999.0, 999.0)), IVec2::new(39, 39));
        assert_eq!(window_to_cell(Vec2::new(1000.0, 10.0)), IVec2::new(40, 0));
    }

    #[test]
    fn positions_left_of_the_window_stay_negative() {
        assert_eq!(window_to_cell(Vec2::new(-0.5, 3.0)), IVec2::new(-1, 0));
    }

    #[test]
    fn corner_cells_map_to_window_corners() {
        assert_eq!(cell_to_world(0, 0), Vec2::new(-487.5, 487.5));
        assert_eq!(cell_to_world(39, 39), Vec2::new(487.5, -487.5));
    }

    #[test]
    fn single_point_line() {
        assert_eq!(cells_between(IVec2::new(3, 3), IVec2::new(3, 3)), vec![IVec2::new(3, 3)]);
    }

    #[test]
    fn lines_have_no_gaps() {
        let cells = cells_between(IVec2::new(0, 0), IVec2::new(7, -3));
        assert_eq!(cells.first(), Some(&IVec2::new(0, 0)));
        assert_eq!(cells.last(), Some(&IVec2::new(7, -3)));
        assert_eq!(cells.len(), 8);
        for pair in cells.windows(2) {
            let step = (pair[1] - pair[0]).abs();
            assert!(step.x <= 1 && step.y <= 1);
        }
    }
}
