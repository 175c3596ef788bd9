use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::assets::GameAssets;
use crate::core::events::ChickenCaught;
use crate::core::system::system_order::FallSet;

/// Marker for the looping background track entity.
#[derive(Component)]
pub struct BackgroundMusic;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), start_music)
            .add_systems(
                Update,
                play_catch_sound
                    .after(FallSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnExit(AppState::Playing), stop_music);
    }
}

fn start_music(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        BackgroundMusic,
        AudioPlayer(assets.audio.music.clone()),
        PlaybackSettings::LOOP,
    ));
    info!(target: "audio", "background track started");
}

/// One fire-and-forget playback entity per catch; no completion tracking.
fn play_catch_sound(
    mut caught: EventReader<ChickenCaught>,
    mut commands: Commands,
    assets: Res<GameAssets>,
) {
    for _ in caught.read() {
        commands.spawn((
            AudioPlayer(assets.audio.catch_sfx.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

fn stop_music(mut commands: Commands, q: Query<Entity, With<BackgroundMusic>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
