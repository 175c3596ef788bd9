use bevy::prelude::*;

/// Marker for the player-controlled dog sprite. Exactly one exists while playing.
#[derive(Component, Debug)]
pub struct Player;

/// Marker for a falling chicken.
#[derive(Component, Debug)]
pub struct Chicken;

/// Axis-aligned bounds of a sprite of side `size` centered on `center`.
pub fn sprite_bounds(center: Vec2, size: f32) -> Rect {
    Rect::from_center_size(center, Vec2::splat(size))
}

/// Strict overlap: the shared area must be non-zero, touching edges don't count.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}
