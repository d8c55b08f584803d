//! Echo Dodge - an arcade game where your own past hunts you
//!
//! Core modules:
//! - `sim`: Simulation (movement, echoes, powerups, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host audio preferences
//! - `audio`: Sound event dispatch
//! - `palette`: Colors and render-color rules

pub mod audio;
pub mod palette;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the tick-based thresholds are authored against
    pub const NOMINAL_FPS: f32 = 60.0;
    /// Fixed simulation timestep (one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / NOMINAL_FPS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player trail capacity (rendering only)
    pub const PLAYER_TRAIL_LENGTH: usize = 20;
    /// Echo trail capacity (rendering only)
    pub const ECHO_TRAIL_LENGTH: usize = 15;
}

/// Bounded play field, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: consts::FIELD_WIDTH,
            height: consts::FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a circle's center so the whole circle stays on the field
    #[inline]
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(radius, self.width - radius),
            pos.y.clamp(radius, self.height - radius),
        )
    }
}
