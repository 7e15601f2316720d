use bevy::prelude::*;

use crate::simulation::config::{FRAMES_PER_STEP, LifeSettings};
use crate::simulation::engine;
use crate::simulation::grid::{Grid, GridEdit};

pub struct SchedulerPlugin;

impl Plugin for SchedulerPlugin {
    fn build(&self, app: &mut App) {
        let frames_per_step = app
            .world()
            .get_resource::<LifeSettings>()
            .map_or(FRAMES_PER_STEP, |settings| settings.frames_per_step);

        app.insert_resource(TickScheduler::new(frames_per_step))
            .add_systems(Update, (toggle_running, step_once.in_set(GridEdit)))
            .add_systems(FixedUpdate, advance_simulation);
    }
}

/// Run flag plus a frame counter that wraps every `frames_per_step` frames.
///
/// A frame here is one `FixedUpdate` tick (60 Hz), not one rendered frame.
/// The counter is not a timer: it moves once per frame whether or not the simulation runs.
#[derive(Resource, Debug)]
pub struct TickScheduler {
    pub running: bool,
    frame_counter: u32,
    frames_per_step: u32,
}

impl TickScheduler {
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            running: false,
            frame_counter: 0,
            frames_per_step: frames_per_step.max(1),
        }
    }

    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    /// Flips the run flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Counts one frame. Returns true when a generation is due.
    pub fn advance_frame(&mut self) -> bool {
        self.frame_counter += 1;
        if self.frame_counter >= self.frames_per_step {
            self.frame_counter = 0;
        }
        self.running && self.frame_counter == 0
    }
}

fn toggle_running(keys: Res<ButtonInput<KeyCode>>, mut scheduler: ResMut<TickScheduler>) {
    if keys.just_pressed(KeyCode::Space) {
        let state = if scheduler.toggle() { "started" } else { "stopped" };
        info!("Simulation has {state}");
    }
}

fn step_once(
    keys: Res<ButtonInput<KeyCode>>,
    scheduler: Res<TickScheduler>,
    mut grid: ResMut<Grid>,
) {
    if !scheduler.running && keys.just_pressed(KeyCode::KeyN) {
        engine::step(&mut grid);
        info!("Stepped to generation {}", grid.generation);
    }
}

pub(crate) fn advance_simulation(mut scheduler: ResMut<TickScheduler>, mut grid: ResMut<Grid>) {
    // Counting frames is not a change anyone presents; only the run flag is.
    if scheduler.bypass_change_detection().advance_frame() {
        engine::step(&mut grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Grid>()
            .insert_resource(TickScheduler::new(15))
            .add_systems(Update, (toggle_running, step_once, advance_simulation));
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release_all();
        keys.clear();
        keys.press(key);
    }

    fn release_all(app: &mut App) {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release_all();
        keys.clear();
    }

    fn blinker(app: &mut App) {
        let mut grid = app.world_mut().resource_mut::<Grid>();
        for col in 19..=21 {
            grid.set_alive(20, col, true);
        }
    }

    #[test]
    fn steps_every_nth_frame_while_running() {
        let mut scheduler = TickScheduler::new(3);
        assert!(!scheduler.advance_frame());
        scheduler.toggle();

        let due: Vec<bool> = (0..7).map(|_| scheduler.advance_frame()).collect();
        assert_eq!(due, [false, true, false, false, true, false, false]);
    }

    #[test]
    fn counter_moves_while_paused() {
        let mut scheduler = TickScheduler::new(4);
        for _ in 0..4 {
            assert!(!scheduler.advance_frame());
        }
        scheduler.toggle();
        assert!(!scheduler.advance_frame());
        assert!(!scheduler.advance_frame());
        assert!(!scheduler.advance_frame());
        assert!(scheduler.advance_frame());
    }

    #[test]
    fn zero_frames_per_step_steps_every_frame() {
        let mut scheduler = TickScheduler::new(0);
        assert_eq!(scheduler.frames_per_step(), 1);
        scheduler.toggle();
        assert!(scheduler.advance_frame());
        assert!(scheduler.advance_frame());
    }

    #[test]
    fn space_toggles_running() {
        let mut app = test_app();

        press(&mut app, KeyCode::Space);
        app.update();
        assert!(app.world().resource::<TickScheduler>().running);

        release_all(&mut app);
        app.update();
        assert!(app.world().resource::<TickScheduler>().running);

        press(&mut app, KeyCode::Space);
        app.update();
        assert!(!app.world().resource::<TickScheduler>().running);
    }

    #[test]
    fn running_app_advances_one_generation_per_cadence() {
        let mut app = test_app();
        blinker(&mut app);

        press(&mut app, KeyCode::Space);
        app.update();
        release_all(&mut app);
        for _ in 1..15 {
            app.update();
        }

        let grid = app.world().resource::<Grid>();
        assert_eq!(grid.generation, 1);
        assert_eq!(grid.alive_cells(), vec![(19, 20), (20, 20), (21, 20)]);
    }

    #[test]
    fn paused_app_never_steps() {
        let mut app = test_app();
        blinker(&mut app);
        for _ in 0..60 {
            app.update();
        }
        assert_eq!(app.world().resource::<Grid>().generation, 0);
    }

    #[test]
    fn n_steps_once_only_while_paused() {
        let mut app = test_app();
        blinker(&mut app);

        press(&mut app, KeyCode::KeyN);
        app.update();
        assert_eq!(app.world().resource::<Grid>().generation, 1);

        app.world_mut().resource_mut::<TickScheduler>().running = true;
        press(&mut app, KeyCode::KeyN);
        app.update();
        assert_eq!(app.world().resource::<Grid>().generation, 1);
    }
}
