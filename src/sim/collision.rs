//! Circle overlap tests
//!
//! Everything on the field is a circle, so collision is center distance
//! against summed radii.

use glam::Vec2;

/// Circles overlap when their centers are strictly closer than the summed
/// radii; touching circles do not overlap.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Echo contact needs `tolerance` pixels of real overlap, so grazing an echo
/// is survivable.
#[inline]
pub fn echo_contact(player: Vec2, player_radius: f32, echo: Vec2, echo_radius: f32, tolerance: f32) -> bool {
    player.distance(echo) < player_radius + echo_radius - tolerance
}
