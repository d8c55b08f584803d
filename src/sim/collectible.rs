//! The collectible item

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use crate::Field;

/// Uniform random point at least `margin` away from every field edge
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, field: Field, margin: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(margin..=field.width - margin),
        rng.random_range(margin..=field.height - margin),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    pub margin: f32,
    /// Animation phase (seconds since spawn)
    pub pulse: f32,
}

impl Collectible {
    /// Create and immediately place the item
    pub fn new<R: Rng + ?Sized>(rng: &mut R, field: Field, radius: f32, margin: f32) -> Self {
        let mut item = Self {
            pos: Vec2::ZERO,
            radius,
            margin,
            pulse: 0.0,
        };
        item.respawn(rng, field);
        item
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, field: Field) {
        self.pos = random_point(rng, field, self.margin);
        self.pulse = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        self.pulse += dt;
    }

    pub fn collides_with(&self, point: Vec2, radius: f32) -> bool {
        circles_overlap(self.pos, self.radius, point, radius)
    }
}
