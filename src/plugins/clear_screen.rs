use bevy::prelude::*;

use crate::simulation::grid::{Grid, GridEdit};

pub struct ClearScreenPlugin;

impl Plugin for ClearScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, clear_screen.in_set(GridEdit));
    }
}

fn clear_screen(keys: Res<ButtonInput<KeyCode>>, mut grid: ResMut<Grid>) {
    if keys.just_pressed(KeyCode::KeyC) {
        grid.clear();
        info!("Grid cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_kills_every_cell() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Grid>()
            .add_systems(Update, clear_screen);

        {
            let mut grid = app.world_mut().resource_mut::<Grid>();
            grid.set_alive(1, 1, true);
            grid.set_alive(39, 0, true);
            grid.generation = 12;
        }

        app.update();
        assert_eq!(app.world().resource::<Grid>().population(), 2);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyC);
        app.update();

        let grid = app.world().resource::<Grid>();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation, 0);
    }
}
