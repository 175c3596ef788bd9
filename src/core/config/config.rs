use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Exit this many seconds after gameplay starts; 0 disables (demo/smoke runs).
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
            title: "Chicken Rain".into(),
            auto_close: 0.0,
        }
    }
}

/// Logical world rectangle; gameplay coordinates live in [0,width]x[0,height]
/// regardless of the physical window size.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sprite side length; also the catch rectangle size.
    pub size: f32,
    /// Horizontal keyboard speed in world units per second.
    pub speed: f32,
    /// Gap between the floor and the sprite's bottom edge at spawn.
    pub start_offset_y: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 64.0,
            speed: 200.0,
            start_offset_y: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChickenConfig {
    pub size: f32,
    /// Downward speed in world units per second.
    pub fall_speed: f32,
    /// Wall-clock seconds between spawns, independent of frame rate.
    pub spawn_interval: f32,
}
impl Default for ChickenConfig {
    fn default() -> Self {
        Self {
            size: 64.0,
            fall_speed: 200.0,
            spawn_interval: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPathsConfig {
    pub dog_image: String,
    pub chicken_image: String,
    pub catch_sound: String,
    pub music: String,
}
impl Default for AssetPathsConfig {
    fn default() -> Self {
        Self {
            dog_image: "images/dog.png".into(),
            chicken_image: "images/chicken.png".into(),
            catch_sound: "sounds/catch.wav".into(),
            music: "music/rain.wav".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub chickens: ChickenConfig,
    pub assets: AssetPathsConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.world.width <= 0.0 || self.world.height <= 0.0 {
            w.push("world dimensions must be > 0".into());
        }
        if self.player.size <= 0.0 {
            w.push("player.size must be > 0".into());
        }
        if self.player.size > self.world.width {
            w.push(format!(
                "player.size {} wider than the world; clamping leaves no room to move",
                self.player.size
            ));
        }
        if self.player.speed < 0.0 {
            w.push("player.speed negative -> arrow keys move the wrong way".into());
        } else if self.player.speed == 0.0 {
            w.push("player.speed is 0; keyboard movement disabled".into());
        }
        if self.player.start_offset_y + self.player.size > self.world.height {
            w.push("player spawn sits above the top edge".into());
        }
        if self.chickens.size <= 0.0 {
            w.push("chickens.size must be > 0".into());
        }
        if self.chickens.fall_speed <= 0.0 {
            w.push(format!(
                "chickens.fall_speed {} non-positive; chickens will never leave the screen",
                self.chickens.fall_speed
            ));
        }
        if self.chickens.spawn_interval <= 0.0 {
            w.push(format!(
                "chickens.spawn_interval {} non-positive; a chicken spawns every frame",
                self.chickens.spawn_interval
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_canonical_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.world.width, 800.0);
        assert_eq!(cfg.world.height, 480.0);
        assert_eq!(cfg.player.size, 64.0);
        assert_eq!(cfg.player.speed, 200.0);
        assert_eq!(cfg.player.start_offset_y, 20.0);
        assert_eq!(cfg.chickens.size, 64.0);
        assert_eq!(cfg.chickens.fall_speed, 200.0);
        assert_eq!(cfg.chickens.spawn_interval, 1.0);
    }

    #[test]
    fn default_config_validates_clean() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn partial_ron_overrides_merge_with_defaults() {
        let cfg: GameConfig = ron::from_str(
            r#"(
                window: ( title: "Test", autoClose: 2.5 ),
                chickens: ( spawn_interval: 0.25 ),
            )"#,
        )
        .unwrap();
        assert_eq!(cfg.window.title, "Test");
        assert_eq!(cfg.window.auto_close, 2.5);
        assert_eq!(cfg.chickens.spawn_interval, 0.25);
        // untouched sections keep their defaults
        assert_eq!(cfg.world.width, 800.0);
        assert_eq!(cfg.player.speed, 200.0);
    }

    #[test]
    fn validate_flags_degenerate_values() {
        let mut cfg = GameConfig::default();
        cfg.world.width = 0.0;
        cfg.chickens.spawn_interval = 0.0;
        cfg.chickens.fall_speed = -1.0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("world dimensions")));
        assert!(warnings.iter().any(|w| w.contains("spawn_interval")));
        assert!(warnings.iter().any(|w| w.contains("fall_speed")));
    }

    #[test]
    fn missing_file_reports_error_and_falls_back() {
        let (cfg, err) = GameConfig::load_or_default("does/not/exist.ron");
        assert_eq!(cfg, GameConfig::default());
        assert!(err.unwrap().contains("read config"));
    }
}
