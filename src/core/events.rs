use bevy::prelude::*;

/// A new chicken entered the world at the top edge.
#[derive(Event, Debug)]
pub struct ChickenSpawned(pub Entity);

/// The dog caught a chicken; `score` is the running total after this catch.
#[derive(Event, Debug)]
pub struct ChickenCaught {
    pub entity: Entity,
    pub score: u32,
}

/// A chicken fell past the bottom edge and was removed silently.
#[derive(Event, Debug)]
pub struct ChickenMissed(pub Entity);
