use bevy::prelude::*;
use clap::Parser;

use chicken_rain::core::config::GameConfig;
use chicken_rain::GamePlugin;

#[derive(Parser, Debug)]
#[command(name = "chicken_rain", about = "Catch falling chickens before they hit the ground")]
struct Cli {
    /// Path to the RON config file.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() {
    let cli = Cli::parse();

    // Load configuration (fall back to defaults if missing or malformed)
    let cfg = match GameConfig::load_from_file(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}: {e}; using default config", cli.config);
            GameConfig::default()
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
}
