use bevy::prelude::*;

use crate::plugins::mouse_position::MouseGridPosition;
use crate::simulation::coords::cells_between;
use crate::simulation::grid::{Grid, GridEdit};

/// Left button paints cells alive, right button paints them dead.
pub struct MouseDrawPlugin;

impl Plugin for MouseDrawPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaintStroke>();
        app.add_systems(Update, paint_cells.in_set(GridEdit));
    }
}

#[derive(Resource, Default)]
struct PaintStroke {
    last_pos: Option<IVec2>,
}

fn paint_cells(
    mut stroke: ResMut<PaintStroke>,
    mouse_position_res: Res<MouseGridPosition>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut grid: ResMut<Grid>,
) {
    let alive = if buttons.pressed(MouseButton::Left) {
        true
    } else if buttons.pressed(MouseButton::Right) {
        false
    } else {
        stroke.last_pos = None;
        return;
    };

    let Some(cur_pos) = mouse_position_res.cur else {
        stroke.last_pos = None;
        return;
    };
    let prev_pos = stroke.last_pos.unwrap_or(cur_pos);

    for pos in cells_between(prev_pos, cur_pos) {
        let Some((row, col)) = Grid::try_index(pos.y, pos.x) else {
            continue;
        };
        // Skip no-op writes so the sprites are only re-synced on a real change.
        if grid.get_cell(row, col).is_alive() != alive {
            grid.set_alive(row, col, alive);
        }
    }
    stroke.last_pos = Some(cur_pos);
}
