use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::FallSet;
use crate::gameplay::score::GameState;

/// Marker for the score readout in the top-left corner.
#[derive(Component)]
pub struct ScoreText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_score_text)
            .add_systems(
                Update,
                update_score_text
                    .after(FallSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnExit(AppState::Playing), despawn_score_text);
    }
}

fn spawn_score_text(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        ScoreText,
        Text2d::new(score_line(0)),
        TextFont {
            font_size: 24.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Anchor::TopLeft,
        // drawn first, i.e. beneath the sprites
        Transform::from_xyz(0.0, cfg.world.height, 0.5),
    ));
}

fn update_score_text(state: Res<GameState>, mut q: Query<&mut Text2d, With<ScoreText>>) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    text.0 = score_line(state.score);
}

fn score_line(score: u32) -> String {
    format!("Chickens caught: {score}")
}

fn despawn_score_text(mut commands: Commands, q: Query<Entity, With<ScoreText>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
