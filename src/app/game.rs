use bevy::prelude::*;

use crate::app::state::AppState;
use crate::audio::GameAudioPlugin;
use crate::core::assets::GameAssetsPlugin;
use crate::core::config::GameConfig;
use crate::core::events::{ChickenCaught, ChickenMissed, ChickenSpawned};
use crate::core::system::system_order::{FallSet, InputSet, SpawnSet};
use crate::gameplay::fall::FallPlugin;
use crate::gameplay::score::ScorePlugin;
use crate::gameplay::spawn::ChickenSpawnPlugin;
use crate::interaction::input::player_movement::PlayerPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::hud::HudPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<GameConfig>()
            .add_event::<ChickenSpawned>()
            .add_event::<ChickenCaught>()
            .add_event::<ChickenMissed>()
            .configure_sets(
                Update,
                (InputSet, SpawnSet.after(InputSet), FallSet.after(SpawnSet)),
            )
            .add_plugins((
                CameraPlugin,
                GameAssetsPlugin,
                PlayerPlugin,
                ChickenSpawnPlugin,
                FallPlugin,
                ScorePlugin,
                HudPlugin,
                GameAudioPlugin,
                AutoClosePlugin,
            ))
            .add_systems(Startup, log_config_warnings)
            .add_systems(
                Update,
                advance_to_playing.run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnEnter(AppState::ShutDown), request_exit);
    }
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
}

/// Asset handle dispatch happens during startup; nothing else gates entry.
fn advance_to_playing(mut next: ResMut<NextState<AppState>>) {
    next.set(AppState::Playing);
}

fn request_exit(mut ev_exit: EventWriter<AppExit>) {
    info!(target: "session", "shutdown complete, requesting app exit");
    ev_exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn plugin_registers_state_and_events() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.add_plugins(GamePlugin);
        assert!(app.world().contains_resource::<State<AppState>>());
        assert!(app.world().contains_resource::<Events<ChickenCaught>>());
        assert!(app.world().contains_resource::<Events<ChickenSpawned>>());
        assert!(app.world().contains_resource::<Events<ChickenMissed>>());
        assert!(app.world().contains_resource::<GameConfig>());
    }
}
