//! Gameplay tuning
//!
//! Balance values for the simulation. Keep this separate from host
//! preferences (`Settings`): everything here changes how the game plays.
//! Missing JSON fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Field;
use crate::consts::NOMINAL_FPS;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Field width in pixels
    pub field_width: f32,
    /// Field height in pixels
    pub field_height: f32,

    /// Player displacement per tick along one axis
    pub player_speed: f32,
    /// Normal player collision radius
    pub player_radius: f32,
    /// Player collision radius while a Shrink effect is live
    pub shrink_radius: f32,

    /// Echo collision radius
    pub echo_radius: f32,
    /// Seconds between echo spawns
    pub echo_interval: f32,
    /// Seconds after session start before any echo can kill
    pub session_grace: f32,
    /// Seconds of replay an echo needs before it can kill (converted to ticks)
    pub echo_grace: f32,
    /// Echo hits need this much overlap beyond tangency
    pub overlap_tolerance: f32,
    /// Score awarded per echo eaten
    pub ghost_eater_bonus: u64,

    /// Collectible radius
    pub item_radius: f32,
    /// Minimum distance of a collectible from the field edges
    pub item_margin: f32,

    /// Powerup radius
    pub powerup_radius: f32,
    /// Minimum distance of a powerup from the field edges
    pub powerup_margin: f32,
    /// Seconds between a powerup leaving the field and the next one spawning
    pub powerup_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: crate::consts::FIELD_WIDTH,
            field_height: crate::consts::FIELD_HEIGHT,

            player_speed: 4.0,
            player_radius: 12.0,
            shrink_radius: 6.0,

            echo_radius: 12.0,
            echo_interval: 5.0,
            session_grace: 1.0,
            echo_grace: 1.0,
            overlap_tolerance: 4.0,
            ghost_eater_bonus: 5,

            item_radius: 8.0,
            item_margin: 40.0,

            powerup_radius: 12.0,
            powerup_margin: 50.0,
            powerup_interval: 8.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read tuning from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        // serde_json reads out-of-range floats such as 1e39 as infinity
        let all = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_speed", self.player_speed),
            ("player_radius", self.player_radius),
            ("shrink_radius", self.shrink_radius),
            ("echo_radius", self.echo_radius),
            ("echo_interval", self.echo_interval),
            ("session_grace", self.session_grace),
            ("echo_grace", self.echo_grace),
            ("overlap_tolerance", self.overlap_tolerance),
            ("item_radius", self.item_radius),
            ("item_margin", self.item_margin),
            ("powerup_radius", self.powerup_radius),
            ("powerup_margin", self.powerup_margin),
            ("powerup_interval", self.powerup_interval),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(TuningError::Invalid(format!("{name} must be finite, got {value}")));
            }
        }
        for (name, value) in [
            ("session_grace", self.session_grace),
            ("echo_grace", self.echo_grace),
            ("overlap_tolerance", self.overlap_tolerance),
        ] {
            if value < 0.0 {
                return Err(TuningError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_speed", self.player_speed),
            ("player_radius", self.player_radius),
            ("shrink_radius", self.shrink_radius),
            ("echo_radius", self.echo_radius),
            ("echo_interval", self.echo_interval),
            ("item_radius", self.item_radius),
            ("powerup_radius", self.powerup_radius),
            ("powerup_interval", self.powerup_interval),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.shrink_radius > self.player_radius {
            return Err(TuningError::Invalid(format!(
                "shrink_radius {} exceeds player_radius {}",
                self.shrink_radius, self.player_radius
            )));
        }

        let min_dim = self.field_width.min(self.field_height);
        if self.player_radius * 2.0 > min_dim {
            return Err(TuningError::Invalid("player does not fit on the field".into()));
        }
        for (name, margin) in [("item_margin", self.item_margin), ("powerup_margin", self.powerup_margin)] {
            if margin < 0.0 || margin * 2.0 > min_dim {
                return Err(TuningError::Invalid(format!(
                    "{name} {margin} leaves no room on a {}x{} field",
                    self.field_width, self.field_height
                )));
            }
        }

        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Ticks an echo must replay before it can kill, at the nominal frame rate
    pub fn echo_grace_ticks(&self) -> usize {
        (self.echo_grace * NOMINAL_FPS).round().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().echo_grace_ticks(), 60);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "echo_interval": 3.0, "ghost_eater_bonus": 10 }"#).unwrap();
        assert_eq!(tuning.echo_interval, 3.0);
        assert_eq!(tuning.ghost_eater_bonus, 10);
        assert_eq!(tuning.player_radius, Tuning::default().player_radius);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "echo_interval": 0.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "shrink_radius": 20.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "item_margin": 400.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(Tuning::from_json("{ not json"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_rejects_non_finite() {
        // 1e39 overflows f32 and parses as infinity
        for json in [
            r#"{ "field_width": 1e39 }"#,
            r#"{ "item_margin": 1e39 }"#,
            r#"{ "session_grace": 1e39 }"#,
            r#"{ "overlap_tolerance": -1e39 }"#,
        ] {
            assert!(
                matches!(Tuning::from_json(json), Err(TuningError::Invalid(_))),
                "accepted {json}"
            );
        }

        let tuning = Tuning {
            echo_grace: f32::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/definitely/not/here.json");
        assert_eq!(tuning, Tuning::default());
    }
}
