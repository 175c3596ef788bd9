pub mod config;

pub use config::{
    AssetPathsConfig, ChickenConfig, GameConfig, PlayerConfig, WindowConfig, WorldConfig,
};
