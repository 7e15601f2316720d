use bevy::prelude::*;

/// Rows and columns of the board. The board never resizes.
pub const GRID_SIZE: usize = 40;

/// Side length of the window in logical pixels.
pub const WINDOW_SIZE: u32 = 1000;

// The one place the cell size is defined.
pub const CELL_WIDTH: f32 = WINDOW_SIZE as f32 / GRID_SIZE as f32;

/// Rendered frames between two generations.
pub const FRAMES_PER_STEP: u32 = 15;

pub const FRAME_RATE_HZ: f64 = 60.0;

#[derive(Resource, Clone, Debug)]
pub struct LifeSettings {
    pub frames_per_step: u32,
    pub frame_rate_hz: f64,
    pub seed: u64,
    /// Chance for each cell to be alive after a random fill.
    pub fill_density: f64,
    pub alive_color: Color,
    pub dead_color: Color,
    pub grid_line_color: Color,
    pub hover_color: Color,
}

impl Default for LifeSettings {
    fn default() -> Self {
        Self {
            frames_per_step: FRAMES_PER_STEP,
            frame_rate_hz: FRAME_RATE_HZ,
            seed: 42,
            fill_density: 0.3,
            alive_color: Color::WHITE,
            dead_color: Color::BLACK,
            grid_line_color: Color::srgb(0.96, 0.96, 0.96),
            hover_color: Color::srgb(0.5, 0.5, 0.5).with_alpha(0.4),
        }
    }
}
