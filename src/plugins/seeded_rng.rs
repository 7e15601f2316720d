use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::simulation::config::LifeSettings;
use crate::simulation::grid::{Grid, GridEdit};

/// Holds the RNG used for random fills, so a given seed always produces the same boards.
#[derive(Resource)]
pub struct GlobalRng(pub StdRng);

pub struct SeededRngPlugin {
    pub seed: u64,
}

impl SeededRngPlugin {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Plugin for SeededRngPlugin {
    fn build(&self, app: &mut App) {
        let rng = StdRng::seed_from_u64(self.seed);
        app.insert_resource(GlobalRng(rng))
            .add_systems(Update, random_fill.in_set(GridEdit));
    }
}

fn random_fill(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<LifeSettings>,
    mut rng: ResMut<GlobalRng>,
    mut grid: ResMut<Grid>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        grid.randomize(&mut rng.0, settings.fill_density);
        info!("Random fill, population {}", grid.population());
    }
}
