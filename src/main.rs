//! Echo Dodge entry point
//!
//! Headless native host: drives the simulation at a fixed step with an
//! autopilot standing in for the keyboard, and logs what happens.
//!
//! Usage: `echo-dodge [tuning.json] [runs]`

use glam::Vec2;

use echo_dodge::audio::{AudioManager, LogSink};
use echo_dodge::consts::{MAX_SUBSTEPS, SIM_DT};
use echo_dodge::sim::{GamePhase, GameState, TickInput, tick};
use echo_dodge::{Settings, Tuning};

/// Simulated seconds before a run is cut short
const RUN_TIME_LIMIT: f32 = 120.0;
/// Echoes closer than this push the autopilot away
const DANGER_RADIUS: f32 = 60.0;

struct Game {
    state: GameState,
    audio: AudioManager<LogSink>,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(seed: u64, tuning: Tuning, settings: &Settings) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            audio: AudioManager::new(LogSink, settings),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.input = autopilot(&self.state);
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            let events = self.state.drain_events();
            self.audio.play_events(&events);
        }
    }
}

/// Pick directions: flee close echoes, otherwise chase the powerup or item
fn autopilot(state: &GameState) -> TickInput {
    let me = state.player.pos;

    let threat = state
        .echoes
        .iter()
        .map(|e| e.pos())
        .filter(|p| p.distance(me) < DANGER_RADIUS)
        .fold(Vec2::ZERO, |acc, p| acc + (me - p).normalize_or_zero());

    let goal = if threat != Vec2::ZERO {
        threat
    } else if state.powerup.active {
        state.powerup.pos - me
    } else {
        state.item.pos - me
    };

    let dead_zone = state.player.speed / 2.0;
    TickInput {
        left: goal.x < -dead_zone,
        right: goal.x > dead_zone,
        up: goal.y < -dead_zone,
        down: goal.y > dead_zone,
        restart: false,
    }
}

fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

fn main() {
    env_logger::init();
    log::info!("Echo Dodge (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let settings = Settings::default();

    let seed = seed_from_clock();
    log::info!("Seed {seed}, {runs} run(s)");
    let mut game = Game::new(seed, tuning, &settings);

    for run in 1..=runs {
        if run > 1 {
            if game.state.phase == GamePhase::GameOver {
                let restart = TickInput {
                    restart: true,
                    ..Default::default()
                };
                tick(&mut game.state, &restart, SIM_DT);
            } else {
                game.state.reset();
            }
        }

        while game.state.phase == GamePhase::Playing && game.state.time < RUN_TIME_LIMIT {
            game.update(SIM_DT);
        }

        let s = &game.state;
        println!(
            "run {run}: score {:>3}  time {:>6.1}s  echoes {:>2}  eaten {:>2}  best {}",
            s.score,
            s.time,
            s.echoes.len(),
            s.echoes_eaten,
            s.best_score
        );
        if s.phase == GamePhase::Playing {
            log::info!("Run {run} hit the time limit");
        }
    }
}
