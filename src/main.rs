mod plugins;
mod simulation;

use bevy::{
    dev_tools::fps_overlay::FpsOverlayPlugin,
    prelude::*,
    window::{PresentMode, WindowResolution},
};

use crate::simulation::SimulationPlugin;
use crate::simulation::config::WINDOW_SIZE;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Conway's Game of Life".into(),
            resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_SIZE)
                .with_scale_factor_override(1.0),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(FpsOverlayPlugin::default());
    app.insert_resource(ClearColor(Color::BLACK));

    app.add_plugins(SimulationPlugin);

    app.add_systems(Startup, spawn_camera);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::default()));
}
