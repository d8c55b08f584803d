//! Active power-up effects
//!
//! Each collected powerup adds an independent timer. Re-collecting a kind
//! that is already running adds a second timer rather than refreshing the
//! first; rules only ever ask whether a kind is present.

use serde::{Deserialize, Serialize};

use super::powerup::PowerupKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PowerupKind,
    /// Total duration in seconds
    pub duration: f32,
    /// Seconds left
    pub remaining: f32,
}

impl ActiveEffect {
    pub fn new(kind: PowerupKind) -> Self {
        let duration = kind.config().duration;
        Self {
            kind,
            duration,
            remaining: duration,
        }
    }

    /// Count down; returns true while the effect is still live
    pub fn update(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }

    /// Remaining fraction: 1.0 when fresh, 0.0 when spent
    pub fn progress(&self) -> f32 {
        (self.remaining / self.duration).max(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vec<ActiveEffect>,
}

impl ActiveEffects {
    pub fn add(&mut self, kind: PowerupKind) {
        self.effects.push(ActiveEffect::new(kind));
    }

    /// Count every effect down and drop the expired ones.
    /// Returns the kinds that expired this call, in insertion order.
    pub fn update(&mut self, dt: f32) -> Vec<PowerupKind> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            let live = effect.update(dt);
            if !live {
                expired.push(effect.kind);
            }
            live
        });
        expired
    }

    pub fn has(&self, kind: PowerupKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Distinct kinds currently live, in first-collected order
    pub fn kinds(&self) -> Vec<PowerupKind> {
        let mut kinds: Vec<PowerupKind> = Vec::with_capacity(PowerupKind::ALL.len());
        for effect in &self.effects {
            if !kinds.contains(&effect.kind) {
                kinds.push(effect.kind);
            }
        }
        kinds
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
