//! Game state and session lifecycle
//!
//! `GameState` is the only owner of simulation entities; `tick` is the only
//! thing that mutates it during play.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collectible::Collectible;
use super::echo::Echo;
use super::effects::ActiveEffects;
use super::player::Player;
use super::powerup::{Powerup, PowerupKind};
use crate::palette::{self, Rgb};
use crate::{Field, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; simulation frozen until restart
    GameOver,
}

/// Things that happened during a tick, for audio and other one-shot feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ItemCollected,
    PowerupCollected(PowerupKind),
    EffectExpired(PowerupKind),
    EchoSpawned,
    GhostEaten,
    GameOver { score: u64, new_best: bool },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed
    pub seed: u64,
    pub tuning: Tuning,
    pub field: Field,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score this process has seen; survives `reset`
    pub best_score: u64,
    /// Elapsed session time in seconds
    pub time: f32,
    /// Ticks simulated this session
    pub time_ticks: u64,
    /// Seconds accumulated toward the next echo
    pub echo_timer: f32,
    /// Echoes ever spawned this session (color index source)
    pub echo_count: u32,
    pub echoes_eaten: u32,
    pub player: Player,
    pub echoes: Vec<Echo>,
    pub item: Collectible,
    pub powerup: Powerup,
    pub effects: ActiveEffects,
    /// Pending events, drained by the host
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game with custom tuning. Invalid tuning is logged and
    /// replaced by the defaults.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Using default tuning: {}", e);
                Tuning::default()
            }
        };
        let field = tuning.field();
        let mut rng = Pcg32::seed_from_u64(seed);
        let item = Collectible::new(&mut rng, field, tuning.item_radius, tuning.item_margin);

        Self {
            seed,
            field,
            phase: GamePhase::Playing,
            score: 0,
            best_score: 0,
            time: 0.0,
            time_ticks: 0,
            echo_timer: 0.0,
            echo_count: 0,
            echoes_eaten: 0,
            player: Player::new(field.center(), tuning.player_speed, tuning.player_radius),
            echoes: Vec::new(),
            item,
            powerup: Powerup::new(tuning.powerup_radius, tuning.powerup_margin, tuning.powerup_interval),
            effects: ActiveEffects::default(),
            events: Vec::new(),
            rng,
            tuning,
        }
    }

    /// Start a fresh run. Keeps the best score and the RNG stream.
    pub fn reset(&mut self) {
        self.player.reset(self.field.center(), self.tuning.player_radius);
        self.echoes.clear();
        self.effects.clear();
        self.item.respawn(&mut self.rng, self.field);
        self.powerup.clear();
        self.score = 0;
        self.time = 0.0;
        self.time_ticks = 0;
        self.echo_timer = 0.0;
        self.echo_count = 0;
        self.echoes_eaten = 0;
        self.events.clear();
        self.phase = GamePhase::Playing;
        log::info!("New run started (best so far: {})", self.best_score);
    }

    /// Snapshot the player's path into a new echo
    pub fn spawn_echo(&mut self) {
        let echo = Echo::new(&self.player.path_history, self.echo_count, self.tuning.echo_radius);
        log::debug!(
            "Echo #{} spawned replaying {} points",
            self.echo_count,
            echo.path().len()
        );
        self.echoes.push(echo);
        self.echo_count += 1;
        self.events.push(GameEvent::EchoSpawned);
    }

    /// End the run and record the best score
    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
        }
        log::info!(
            "Game over at {:.1}s: score {} (best {}), {} echoes, {} eaten",
            self.time,
            self.score,
            self.best_score,
            self.echoes.len(),
            self.echoes_eaten
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_best,
        });
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seconds until the next echo spawns
    pub fn echo_countdown(&self) -> f32 {
        (self.tuning.echo_interval - self.echo_timer).max(0.0)
    }

    /// Player radius implied by the current effect set
    pub fn effective_player_radius(&self) -> f32 {
        if self.effects.has(PowerupKind::Shrink) {
            self.tuning.shrink_radius
        } else {
            self.tuning.player_radius
        }
    }

    /// Player color for this frame
    pub fn player_color(&self) -> Rgb {
        palette::player_color(self.phase, &self.effects.kinds(), palette::PLAYER)
    }
}
