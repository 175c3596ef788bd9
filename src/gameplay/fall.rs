use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{overlaps, sprite_bounds, Chicken, Player};
use crate::core::config::GameConfig;
use crate::core::events::{ChickenCaught, ChickenMissed};
use crate::core::system::system_order::FallSet;
use crate::gameplay::score::GameState;

pub struct FallPlugin;

impl Plugin for FallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            fall_and_catch
                .in_set(FallSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Single pass over all chickens: advance, then remove the ones that left the
/// screen or hit the dog. Off-screen removal is checked before the overlap so
/// a chicken below the bottom edge can never score. Removal goes through
/// `Commands`, which keeps the traversal safe.
pub fn fall_and_catch(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
    mut state: ResMut<GameState>,
    player_q: Query<&Transform, With<Player>>,
    mut chicken_q: Query<(Entity, &mut Transform), (With<Chicken>, Without<Player>)>,
    mut caught: EventWriter<ChickenCaught>,
    mut missed: EventWriter<ChickenMissed>,
) {
    let step = cfg.chickens.fall_speed * time.delta_secs();
    let player_bounds = player_q
        .single()
        .ok()
        .map(|tf| sprite_bounds(tf.translation.truncate(), cfg.player.size));

    for (entity, mut tf) in &mut chicken_q {
        tf.translation.y -= step;
        let bounds = sprite_bounds(tf.translation.truncate(), cfg.chickens.size);
        if bounds.max.y < 0.0 {
            commands.entity(entity).despawn();
            missed.write(ChickenMissed(entity));
            continue;
        }
        let Some(player_bounds) = player_bounds else {
            continue;
        };
        if overlaps(bounds, player_bounds) {
            state.score += 1;
            caught.write(ChickenCaught {
                entity,
                score: state.score,
            });
            commands.entity(entity).despawn();
            debug!(target: "catch", "chicken caught, score={}", state.score);
        }
    }
}
