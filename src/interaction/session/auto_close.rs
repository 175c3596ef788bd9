//! Optional timed shutdown (`window.autoClose` seconds) for demo and smoke
//! runs. Expiry drives the normal teardown path instead of killing the app.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
struct SessionTimeout(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), arm_session_timeout)
            .add_systems(
                Update,
                expire_session.run_if(resource_exists::<SessionTimeout>),
            );
    }
}

fn arm_session_timeout(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "auto close armed for {secs}s");
        commands.insert_resource(SessionTimeout(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn expire_session(
    time: Res<Time>,
    mut timeout: ResMut<SessionTimeout>,
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
) {
    timeout.tick(time.delta());
    if timeout.just_finished() {
        info!(target: "session", "auto close timer elapsed, shutting down");
        commands.remove_resource::<SessionTimeout>();
        next.set(AppState::ShutDown);
    }
}
