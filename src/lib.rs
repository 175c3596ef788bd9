pub mod app;
pub mod audio;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::AppState;
pub use crate::core::components::{Chicken, Player};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::core::events::{ChickenCaught, ChickenMissed, ChickenSpawned};
