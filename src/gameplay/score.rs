use bevy::prelude::*;

use crate::app::state::AppState;

/// Session-scoped tally. The score only ever increases, one per catch.
#[derive(Resource, Debug, Default)]
pub struct GameState {
    pub score: u32,
}

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .add_systems(OnEnter(AppState::Playing), reset_score);
    }
}

fn reset_score(mut state: ResMut<GameState>) {
    state.score = 0;
}
