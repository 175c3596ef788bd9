use bevy::prelude::*;

/// High-level app lifecycle state.
/// Loading -> Playing -> ShutDown, strictly linear; no re-entry within a session.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Asset handles are being dispatched to the asset server.
    #[default]
    Loading,
    /// Active gameplay.
    Playing,
    /// Graceful teardown; gameplay entities and asset handles are released on the way in.
    ShutDown,
}
