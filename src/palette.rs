//! Colors shared between the simulation and whatever draws it

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, PowerupKind};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Scale each channel down (for darker fills)
    pub const fn dim(self, divisor: u8) -> Self {
        Self(self.0 / divisor, self.1 / divisor, self.2 / divisor)
    }
}

pub const PLAYER: Rgb = Rgb(0, 200, 255);
pub const GAME_OVER: Rgb = Rgb(255, 80, 80);

/// Each new echo takes the next color, wrapping around
pub const ECHO_PALETTE: [Rgb; 8] = [
    Rgb(255, 80, 80),   // red
    Rgb(255, 160, 50),  // orange
    Rgb(255, 255, 80),  // yellow
    Rgb(80, 255, 80),   // green
    Rgb(180, 80, 255),  // purple
    Rgb(255, 80, 200),  // pink
    Rgb(80, 255, 200),  // teal
    Rgb(200, 200, 255), // light blue
];

#[inline]
pub fn echo_color(index: u32) -> Rgb {
    ECHO_PALETTE[index as usize % ECHO_PALETTE.len()]
}

/// Color to draw the player with this frame
///
/// Effects are checked in priority order; the first one present wins.
pub fn player_color(phase: GamePhase, active: &[PowerupKind], base: Rgb) -> Rgb {
    if phase == GamePhase::GameOver {
        return GAME_OVER.dim(2);
    }
    [PowerupKind::GhostEater, PowerupKind::TimeFreeze, PowerupKind::Shrink]
        .into_iter()
        .find(|kind| active.contains(kind))
        .map(|kind| kind.config().color)
        .unwrap_or(base)
}
