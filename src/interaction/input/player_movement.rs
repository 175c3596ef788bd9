use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::core::components::Player;
use crate::core::config::GameConfig;
use crate::core::system::system_order::InputSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(OnEnter(AppState::Playing), spawn_player)
            .add_systems(
                Update,
                (sync_pointer, move_player)
                    .chain()
                    .in_set(InputSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnExit(AppState::Playing), despawn_player);
    }
}

/// World-space pointer snapshot for the current frame. Kept as a plain
/// resource so headless tests can substitute a fixed pointer.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerState {
    pub active: bool,
    pub world_pos: Vec2,
}

fn spawn_player(mut commands: Commands, assets: Res<GameAssets>, cfg: Res<GameConfig>) {
    let size = cfg.player.size;
    let x = cfg.world.width * 0.5;
    let y = cfg.player.start_offset_y + size * 0.5;
    commands.spawn((
        Player,
        Sprite {
            image: assets.images.dog.clone(),
            custom_size: Some(Vec2::splat(size)),
            ..default()
        },
        Transform::from_xyz(x, y, 1.0),
    ));
    info!(target: "player", "player spawned at ({x:.0}, {y:.0})");
}

/// Unprojects the primary touch (preferred) or the held-button cursor into
/// world space via the game camera.
pub fn sync_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut pointer: ResMut<PointerState>,
) {
    pointer.active = false;
    let Ok(window) = windows_q.single() else {
        return;
    };
    let screen_pos = touches.iter().next().map(|t| t.position()).or_else(|| {
        buttons
            .pressed(MouseButton::Left)
            .then(|| window.cursor_position())
            .flatten()
    });
    let Some(screen_pos) = screen_pos else {
        return;
    };
    let Ok((camera, cam_tf)) = camera_q.single() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(cam_tf, screen_pos) else {
        return;
    };
    pointer.active = true;
    pointer.world_pos = world_pos;
}

/// Pointer positioning first; held arrow keys then adjust relative to it.
/// The final position is clamped so the sprite never leaves the world.
pub fn move_player(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    pointer: Res<PointerState>,
    cfg: Res<GameConfig>,
    mut q: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut tf) = q.single_mut() else {
        return;
    };
    if pointer.active {
        tf.translation.x = pointer.world_pos.x;
    }
    let dt = time.delta_secs();
    if keys.pressed(KeyCode::ArrowLeft) {
        tf.translation.x -= cfg.player.speed * dt;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        tf.translation.x += cfg.player.speed * dt;
    }
    let half = cfg.player.size * 0.5;
    tf.translation.x = tf.translation.x.clamp(half, cfg.world.width - half);
}

fn despawn_player(mut commands: Commands, q: Query<Entity, With<Player>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
