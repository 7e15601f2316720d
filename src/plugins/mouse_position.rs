use bevy::{prelude::*, window::PrimaryWindow};

use crate::simulation::coords::window_to_cell;

pub struct MousePositionPlugin;

impl Plugin for MousePositionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MouseGridPosition>();
        app.add_systems(PreUpdate, update_mouse_position);
    }
}

/// Cell under the cursor as `(x = column, y = row)`. May lie off the board.
#[derive(Resource, Default, Debug)]
pub struct MouseGridPosition {
    pub cur: Option<IVec2>,
}

pub fn update_mouse_position(
    mut mouse_grid_pos: ResMut<MouseGridPosition>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    mouse_grid_pos.cur = window.cursor_position().map(window_to_cell);
}
