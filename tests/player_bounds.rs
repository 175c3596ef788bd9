use std::time::Duration;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use chicken_rain::core::components::Player;
use chicken_rain::core::config::GameConfig;
use chicken_rain::interaction::input::player_movement::{move_player, PointerState};

/// Headless app with a deterministic 10 ms frame and the movement system
/// wired directly, so the pointer can be faked through `PointerState`.
fn movement_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin));
    app.insert_resource(GameConfig::default());
    app.init_resource::<PointerState>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
        10,
    )));
    app.add_systems(Update, move_player);
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(400.0, 52.0, 1.0)))
        .id();
    app.update(); // first update only primes the clock
    (app, player)
}

fn player_x(app: &App, player: Entity) -> f32 {
    app.world().get::<Transform>(player).unwrap().translation.x
}

#[test]
fn no_input_leaves_position_unchanged() {
    let (mut app, player) = movement_app();
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(player_x(&app, player), 400.0);
}

#[test]
fn held_arrow_key_moves_at_configured_speed() {
    let (mut app, player) = movement_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    for _ in 0..10 {
        app.update();
    }
    // 0.1 s at 200 u/s
    assert!((player_x(&app, player) - 380.0).abs() < 1e-3);
}

#[test]
fn clamping_stops_the_player_at_both_edges() {
    let (mut app, player) = movement_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    for _ in 0..300 {
        app.update();
    }
    // left sprite edge rests on x = 0
    assert_eq!(player_x(&app, player), 32.0);

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::ArrowLeft);
        keys.press(KeyCode::ArrowRight);
    }
    for _ in 0..500 {
        app.update();
    }
    // right sprite edge rests on x = 800
    assert_eq!(player_x(&app, player), 768.0);
}

#[test]
fn active_pointer_centers_the_player() {
    let (mut app, player) = movement_app();
    *app.world_mut().resource_mut::<PointerState>() = PointerState {
        active: true,
        world_pos: Vec2::new(123.0, 300.0),
    };
    app.update();
    assert_eq!(player_x(&app, player), 123.0);
}

#[test]
fn pointer_takes_priority_over_held_keys() {
    let (mut app, player) = movement_app();
    *app.world_mut().resource_mut::<PointerState>() = PointerState {
        active: true,
        world_pos: Vec2::new(600.0, 0.0),
    };
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    app.update();
    // repositioned to the pointer first, then nudged by the key for one frame
    assert!((player_x(&app, player) - 598.0).abs() < 1e-3);
}

#[test]
fn pointer_outside_the_world_is_clamped() {
    let (mut app, player) = movement_app();
    *app.world_mut().resource_mut::<PointerState>() = PointerState {
        active: true,
        world_pos: Vec2::new(10_000.0, 0.0),
    };
    app.update();
    assert_eq!(player_x(&app, player), 768.0);

    app.world_mut().resource_mut::<PointerState>().world_pos = Vec2::new(-10_000.0, 0.0);
    app.update();
    assert_eq!(player_x(&app, player), 32.0);
}
