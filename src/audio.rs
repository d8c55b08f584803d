//! Sound effect dispatch
//!
//! Game events map to sound effects through an exhaustive match. Playback
//! goes through an `AudioSink`, so the simulation never knows what backend
//! (if any) makes the noise.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Item picked up: quick ascending bleep
    ItemCollect,
    /// Powerup picked up: ascending arpeggio
    PowerupCollect,
    /// An effect ran out
    EffectExpire,
    /// New echo on the field: low ominous tone
    EchoSpawn,
    /// Echo eaten under ghost eater: rising pop
    GhostEaten,
    /// Run ended: descending notes
    GameOver,
    /// Run ended with a new best score
    HighScore,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Triangle,
}

/// One note of a sound effect, played back to back with the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub secs: f32,
    pub volume: f32,
    pub wave: Wave,
    /// Fade-out length at the end of the note
    pub fade: f32,
}

const fn tone(freq: f32, secs: f32, volume: f32, wave: Wave, fade: f32) -> Tone {
    Tone {
        freq,
        secs,
        volume,
        wave,
        fade,
    }
}

use Wave::{Sine, Square, Triangle};

const ITEM_COLLECT: &[Tone] = &[
    tone(880.0, 0.06, 0.2, Sine, 0.02),
    tone(1320.0, 0.08, 0.18, Sine, 0.04),
];
const POWERUP_COLLECT: &[Tone] = &[
    tone(440.0, 0.07, 0.18, Triangle, 0.02),
    tone(660.0, 0.07, 0.18, Triangle, 0.02),
    tone(880.0, 0.1, 0.22, Triangle, 0.05),
];
const EFFECT_EXPIRE: &[Tone] = &[
    tone(660.0, 0.06, 0.12, Triangle, 0.02),
    tone(440.0, 0.1, 0.12, Triangle, 0.06),
];
const ECHO_SPAWN: &[Tone] = &[tone(110.0, 0.35, 0.12, Sine, 0.2)];
const GHOST_EATEN: &[Tone] = &[
    tone(300.0, 0.03, 0.25, Square, 0.01),
    tone(600.0, 0.05, 0.2, Sine, 0.02),
    tone(900.0, 0.07, 0.18, Sine, 0.04),
];
const GAME_OVER: &[Tone] = &[
    tone(440.0, 0.2, 0.2, Triangle, 0.05),
    tone(370.0, 0.2, 0.2, Triangle, 0.05),
    tone(330.0, 0.2, 0.2, Triangle, 0.05),
    tone(220.0, 0.45, 0.18, Triangle, 0.3),
];
const HIGH_SCORE: &[Tone] = &[
    tone(523.0, 0.1, 0.2, Triangle, 0.02),
    tone(659.0, 0.1, 0.2, Triangle, 0.02),
    tone(784.0, 0.1, 0.2, Triangle, 0.02),
    tone(1047.0, 0.3, 0.22, Triangle, 0.2),
];

impl SoundEffect {
    /// Note sequence a synthesizing backend should render
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::ItemCollect => ITEM_COLLECT,
            SoundEffect::PowerupCollect => POWERUP_COLLECT,
            SoundEffect::EffectExpire => EFFECT_EXPIRE,
            SoundEffect::EchoSpawn => ECHO_SPAWN,
            SoundEffect::GhostEaten => GHOST_EATEN,
            SoundEffect::GameOver => GAME_OVER,
            SoundEffect::HighScore => HIGH_SCORE,
        }
    }

    /// Total length in seconds
    pub fn duration(self) -> f32 {
        self.tones().iter().map(|t| t.secs).sum()
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::ItemCollected => SoundEffect::ItemCollect,
            GameEvent::PowerupCollected(_) => SoundEffect::PowerupCollect,
            GameEvent::EffectExpired(_) => SoundEffect::EffectExpire,
            GameEvent::EchoSpawned => SoundEffect::EchoSpawn,
            GameEvent::GhostEaten => SoundEffect::GhostEaten,
            GameEvent::GameOver { new_best: true, .. } => SoundEffect::HighScore,
            GameEvent::GameOver { new_best: false, .. } => SoundEffect::GameOver,
        }
    }
}

/// Something that can make noise. Fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} ({:.2}s) at volume {:.2}", effect, effect.duration(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        };
        manager.apply_settings(settings);
        manager
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the sound for every event, in order
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::from(*event));
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
