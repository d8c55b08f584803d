//! Powerups: one at a time, spawned on a timer with a weighted-random kind

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::collectible::random_point;
use super::collision::circles_overlap;
use crate::Field;
use crate::palette::Rgb;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Echo collisions eat the echo for bonus score instead of killing
    GhostEater,
    /// Echoes stop replaying
    TimeFreeze,
    /// Player collision radius shrinks
    Shrink,
}

/// Icon drawn inside a powerup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupIcon {
    Skull,
    Snowflake,
    Diamond,
}

/// Fixed per-kind configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerupConfig {
    pub color: Rgb,
    pub icon: PowerupIcon,
    /// Effect duration in seconds
    pub duration: f32,
    /// Relative spawn weight
    pub spawn_weight: u32,
    pub label: &'static str,
}

const GHOST_EATER: PowerupConfig = PowerupConfig {
    color: Rgb(255, 50, 50),
    icon: PowerupIcon::Skull,
    duration: 5.0,
    spawn_weight: 1,
    label: "GHOST EATER",
};

const TIME_FREEZE: PowerupConfig = PowerupConfig {
    color: Rgb(80, 180, 255),
    icon: PowerupIcon::Snowflake,
    duration: 5.0,
    spawn_weight: 3,
    label: "TIME FREEZE",
};

const SHRINK: PowerupConfig = PowerupConfig {
    color: Rgb(180, 80, 255),
    icon: PowerupIcon::Diamond,
    duration: 6.0,
    spawn_weight: 3,
    label: "SHRINK",
};

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [
        PowerupKind::GhostEater,
        PowerupKind::TimeFreeze,
        PowerupKind::Shrink,
    ];

    pub fn config(self) -> &'static PowerupConfig {
        match self {
            PowerupKind::GhostEater => &GHOST_EATER,
            PowerupKind::TimeFreeze => &TIME_FREEZE,
            PowerupKind::Shrink => &SHRINK,
        }
    }

    /// Weighted random kind (ghost eater is the rare one)
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match Self::ALL.choose_weighted(rng, |kind| kind.config().spawn_weight) {
            Ok(kind) => *kind,
            Err(e) => {
                log::warn!("Weighted powerup choice failed ({e}), defaulting to time freeze");
                PowerupKind::TimeFreeze
            }
        }
    }
}

/// The single powerup slot on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub kind: PowerupKind,
    pub active: bool,
    pub radius: f32,
    pub margin: f32,
    /// Seconds between collection and the next spawn
    pub spawn_interval: f32,
    /// Counts toward `spawn_interval` while inactive
    pub spawn_timer: f32,
    /// Animation phase while on the field
    pub pulse: f32,
}

impl Powerup {
    pub fn new(radius: f32, margin: f32, spawn_interval: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            kind: PowerupKind::TimeFreeze,
            active: false,
            radius,
            margin,
            spawn_interval,
            spawn_timer: 0.0,
            pulse: 0.0,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R, field: Field) {
        if self.active {
            self.pulse += dt;
            return;
        }
        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval {
            let kind = PowerupKind::choose(rng);
            let pos = random_point(rng, field, self.margin);
            self.force_spawn(kind, pos);
        }
    }

    /// Put a specific powerup on the field right now
    pub fn force_spawn(&mut self, kind: PowerupKind, pos: Vec2) {
        self.kind = kind;
        self.pos = pos;
        self.active = true;
        self.spawn_timer = 0.0;
        self.pulse = 0.0;
        log::debug!("Powerup {:?} spawned at ({:.0}, {:.0})", kind, pos.x, pos.y);
    }

    /// Take the powerup off the field, returning its kind if it was there
    pub fn collect(&mut self) -> Option<PowerupKind> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.spawn_timer = 0.0;
        Some(self.kind)
    }

    pub fn collides_with(&self, point: Vec2, radius: f32) -> bool {
        self.active && circles_overlap(self.pos, self.radius, point, radius)
    }

    /// Back to an empty slot with a fresh spawn timer
    pub fn clear(&mut self) {
        self.active = false;
        self.spawn_timer = 0.0;
        self.pulse = 0.0;
    }
}
