use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Fixed orthographic camera mapping the logical world rect onto the window,
/// whatever its physical resolution. Origin bottom-left, y up.
fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: cfg.world.width,
                height: cfg.world.height,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(cfg.world.width * 0.5, cfg.world.height * 0.5, 1000.0),
    ));
}
