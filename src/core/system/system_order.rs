//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Input (pointer/keyboard -> player position, clamped)
//! 2. Spawn (timer-driven chicken creation)
//! 3. Fall (falling movement, off-screen removal, catch detection)
//! 4. Reactions (HUD text, audio) run after Fall via per-system ordering
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SpawnSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct FallSet;
