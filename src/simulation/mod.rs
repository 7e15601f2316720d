use bevy::prelude::*;

pub mod config;
pub mod coords;
pub mod draw;
pub mod engine;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod scheduler;
pub mod stats_boards;

use crate::plugins::clear_screen::ClearScreenPlugin;
use crate::plugins::mouse_position::MousePositionPlugin;
use crate::plugins::seeded_rng::SeededRngPlugin;

use self::config::LifeSettings;
use self::draw::MouseDrawPlugin;
use self::grid::Grid;
use self::patterns::PatternPlugin;
use self::render::{GridOverlayPlugin, SimulationRenderPlugin};
use self::scheduler::SchedulerPlugin;
use self::stats_boards::StatsBoardPlugin;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LifeSettings>();
        app.init_resource::<Grid>();

        let settings = app.world().resource::<LifeSettings>().clone();
        app.insert_resource(Time::<Fixed>::from_hz(settings.frame_rate_hz));

        app.add_plugins(SchedulerPlugin);
        app.add_plugins(SimulationRenderPlugin);
        app.add_plugins(GridOverlayPlugin);
        app.add_plugins(MousePositionPlugin);
        app.add_plugins(MouseDrawPlugin);
        app.add_plugins(PatternPlugin);
        app.add_plugins(ClearScreenPlugin);
        app.add_plugins(SeededRngPlugin::new(settings.seed));
        app.add_plugins(StatsBoardPlugin);
    }
}
