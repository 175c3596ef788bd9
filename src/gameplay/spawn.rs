use bevy::prelude::*;
use rand::Rng;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::core::components::Chicken;
use crate::core::config::GameConfig;
use crate::core::events::ChickenSpawned;
use crate::core::system::system_order::SpawnSet;

pub struct ChickenSpawnPlugin;

impl Plugin for ChickenSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_initial_chicken)
            .add_systems(
                Update,
                spawn_on_interval
                    .in_set(SpawnSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnExit(AppState::Playing), despawn_chickens);
    }
}

/// Wall-clock spawn cadence; repeating, so the rate is frame-rate independent.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnTimer(pub Timer);

fn spawn_initial_chicken(
    mut commands: Commands,
    assets: Res<GameAssets>,
    cfg: Res<GameConfig>,
    mut spawned: EventWriter<ChickenSpawned>,
) {
    commands.insert_resource(SpawnTimer(Timer::from_seconds(
        cfg.chickens.spawn_interval,
        TimerMode::Repeating,
    )));
    spawn_chicken(&mut commands, &assets, &cfg, &mut spawned);
}

pub fn spawn_on_interval(
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    mut commands: Commands,
    assets: Res<GameAssets>,
    cfg: Res<GameConfig>,
    mut spawned: EventWriter<ChickenSpawned>,
) {
    timer.tick(time.delta());
    // At most one spawn per frame, even if several intervals elapsed.
    if timer.just_finished() {
        spawn_chicken(&mut commands, &assets, &cfg, &mut spawned);
    }
}

fn spawn_chicken(
    commands: &mut Commands,
    assets: &GameAssets,
    cfg: &GameConfig,
    spawned: &mut EventWriter<ChickenSpawned>,
) {
    let half = cfg.chickens.size * 0.5;
    let x = rand::thread_rng().gen_range(0.0..cfg.world.width - cfg.chickens.size) + half;
    let y = cfg.world.height + half;
    let entity = commands
        .spawn((
            Chicken,
            Sprite {
                image: assets.images.chicken.clone(),
                // chickens are drawn at the dog's sprite size
                custom_size: Some(Vec2::splat(cfg.player.size)),
                ..default()
            },
            // z above the dog: chickens pass in front of it
            Transform::from_xyz(x, y, 2.0),
        ))
        .id();
    spawned.write(ChickenSpawned(entity));
    debug!(target: "spawn", "chicken spawned at x={x:.1}");
}

fn despawn_chickens(mut commands: Commands, q: Query<Entity, With<Chicken>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
    commands.remove_resource::<SpawnTimer>();
}
