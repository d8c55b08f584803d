//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform code:
//! - One tick per frame, fixed step order
//! - One seeded RNG owned by `GameState`
//! - `GameState` is the only owner of entity state

pub mod collectible;
pub mod collision;
pub mod echo;
pub mod effects;
pub mod player;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collectible::Collectible;
pub use collision::{circles_overlap, echo_contact};
pub use echo::Echo;
pub use effects::{ActiveEffect, ActiveEffects};
pub use player::Player;
pub use powerup::{Powerup, PowerupConfig, PowerupIcon, PowerupKind};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
