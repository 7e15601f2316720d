use std::{collections::BTreeMap, fmt::Display};

use bevy::prelude::*;

use crate::simulation::grid::{Grid, GridEdit};
use crate::simulation::scheduler::TickScheduler;

#[derive(Resource, Default)]
pub struct StatsBoard {
    data: BTreeMap<String, String>,
}

impl StatsBoard {
    /// Insert or update a stat.
    /// Accepts any value that implements Display (f32, int, strings, etc.)
    pub fn insert<V: Display>(&mut self, key: &str, value: V) {
        self.data.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// One `key: value` line per stat, sorted by key.
    pub fn render(&self) -> String {
        if self.data.is_empty() {
            return "No Stats".to_string();
        }

        let mut output = String::new();
        for (key, value) in &self.data {
            use std::fmt::Write;
            let _ = writeln!(output, "{}: {}", key, value);
        }
        output
    }
}

pub struct StatsBoardPlugin;

impl Plugin for StatsBoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatsBoard>()
            .add_systems(Startup, setup_stats_ui)
            .add_systems(
                Update,
                (collect_simulation_stats, update_stats_display)
                    .chain()
                    .after(GridEdit),
            );
    }
}

#[derive(Component)]
struct StatsText;

fn setup_stats_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::BLACK.with_alpha(0.7)),
            GlobalZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Initializing Stats..."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                StatsText,
            ));
        });
}

fn collect_simulation_stats(
    grid: Res<Grid>,
    scheduler: Res<TickScheduler>,
    mut stats: ResMut<StatsBoard>,
) {
    if !grid.is_changed() && !scheduler.is_changed() {
        return;
    }

    stats.insert("Generation", grid.generation);
    stats.insert("Population", grid.population());
    stats.insert(
        "State",
        if scheduler.running { "Running" } else { "Paused" },
    );
    stats.insert("Frames per generation", scheduler.frames_per_step());
}

fn update_stats_display(board: Res<StatsBoard>, mut query: Query<&mut Text, With<StatsText>>) {
    if board.is_changed() {
        for mut text in &mut query {
            **text = board.render();
        }
    }
}
