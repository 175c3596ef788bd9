//! Centralized asset handle ownership (sprites, audio).
//! A single plugin loads and exposes the handles so other modules don't
//! hardcode paths; the handles are dropped exactly once at teardown.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;

#[derive(Debug, Clone, Default)]
pub struct ImageAssets {
    pub dog: Handle<Image>,
    pub chicken: Handle<Image>,
}

#[derive(Debug, Clone, Default)]
pub struct AudioAssets {
    pub catch_sfx: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameAssets {
    pub images: ImageAssets,
    pub audio: AudioAssets,
}

pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameAssets>()
            .add_systems(Startup, load_assets)
            .add_systems(OnExit(AppState::Playing), release_assets);
    }
}

fn load_assets(
    mut assets: ResMut<GameAssets>,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    assets.images.dog = asset_server.load(cfg.assets.dog_image.clone());
    assets.images.chicken = asset_server.load(cfg.assets.chicken_image.clone());
    assets.audio.catch_sfx = asset_server.load(cfg.assets.catch_sound.clone());
    assets.audio.music = asset_server.load(cfg.assets.music.clone());
    info!(target: "assets", "asset handles dispatched");
}

pub fn release_assets(mut commands: Commands) {
    commands.remove_resource::<GameAssets>();
    info!(target: "assets", "asset handles released");
}
