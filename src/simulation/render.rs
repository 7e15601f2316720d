use bevy::prelude::*;

use crate::plugins::mouse_position::MouseGridPosition;
use crate::simulation::config::{CELL_WIDTH, GRID_SIZE, LifeSettings, WINDOW_SIZE};
use crate::simulation::coords::cell_to_world;
use crate::simulation::grid::{Cell, Grid, GridEdit};

/// One sprite per cell, kept in step with `Grid`.
pub struct SimulationRenderPlugin;

impl Plugin for SimulationRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_cell_sprites)
            .add_systems(Update, sync_cell_sprites.after(GridEdit));
    }
}

/// Gizmo drawing on top of the cells: grid lines and the hovered cell.
pub struct GridOverlayPlugin;

impl Plugin for GridOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_grid_lines, draw_hover_cursor));
    }
}

/// Links a sprite to the grid cell it displays.
#[derive(Component, Debug)]
pub struct CellSprite {
    pub row: usize,
    pub col: usize,
}

/// Live cells fill their square; dead cells leave a thin gap toward the next cell.
fn cell_look(cell: &Cell, settings: &LifeSettings) -> (Color, Vec2) {
    if cell.is_alive() {
        (settings.alive_color, Vec2::splat(CELL_WIDTH))
    } else {
        (settings.dead_color, Vec2::splat(CELL_WIDTH - 3.0))
    }
}

fn spawn_cell_sprites(mut commands: Commands, grid: Res<Grid>, settings: Res<LifeSettings>) {
    for cell in grid.iter() {
        let (color, size) = cell_look(cell, &settings);
        commands.spawn((
            Sprite::from_color(color, size),
            Transform::from_translation(cell_to_world(cell.row(), cell.col()).extend(0.0)),
            CellSprite {
                row: cell.row(),
                col: cell.col(),
            },
        ));
    }
}

fn sync_cell_sprites(
    grid: Res<Grid>,
    settings: Res<LifeSettings>,
    mut q_sprites: Query<(&CellSprite, &mut Sprite)>,
) {
    if !grid.is_changed() {
        return;
    }

    for (cell_sprite, mut sprite) in &mut q_sprites {
        let cell = grid.get_cell(cell_sprite.row, cell_sprite.col);
        let (color, size) = cell_look(&cell, &settings);
        sprite.color = color;
        sprite.custom_size = Some(size);
    }
}

/// Cosmetic only; derived from the fixed board dimensions.
fn draw_grid_lines(mut gizmos: Gizmos, settings: Res<LifeSettings>) {
    let half = WINDOW_SIZE as f32 / 2.0;
    for i in 1..GRID_SIZE {
        let offset = i as f32 * CELL_WIDTH - half;
        gizmos.line_2d(
            Vec2::new(offset, -half),
            Vec2::new(offset, half),
            settings.grid_line_color,
        );
        gizmos.line_2d(
            Vec2::new(-half, offset),
            Vec2::new(half, offset),
            settings.grid_line_color,
        );
    }
}

fn draw_hover_cursor(
    mouse_position_res: Res<MouseGridPosition>,
    settings: Res<LifeSettings>,
    mut gizmos: Gizmos,
) {
    let Some(pos) = mouse_position_res.cur else {
        return;
    };
    let Some((row, col)) = Grid::try_index(pos.y, pos.x) else {
        return;
    };
    gizmos.rect_2d(
        Isometry2d::from_translation(cell_to_world(row, col)),
        Vec2::splat(CELL_WIDTH * 0.9),
        settings.hover_color,
    );
}
