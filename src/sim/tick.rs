//! Per-frame simulation tick
//!
//! Step order matters: effects expire before movement, echoes spawn before
//! they advance, and collection happens before echo collision.

use super::collision::echo_contact;
use super::powerup::PowerupKind;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start a new run (only honored after game over)
    pub restart: bool,
}

impl TickInput {
    /// Fold held directions into (dx, dy); down beats up, right beats left
    pub fn direction(&self) -> (i8, i8) {
        let mut dx = 0;
        let mut dy = 0;
        if self.up {
            dy = -1;
        }
        if self.down {
            dy = 1;
        }
        if self.left {
            dx = -1;
        }
        if self.right {
            dx = 1;
        }
        (dx, dy)
    }
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
        }
        return;
    }

    state.time += dt;
    state.time_ticks += 1;

    // Stacked timers of one kind can run out together; report the kind once
    let expired = state.effects.update(dt);
    for (i, kind) in expired.iter().enumerate() {
        if expired[..i].contains(kind) {
            continue;
        }
        log::debug!("{} wore off", kind.config().label);
        state.events.push(GameEvent::EffectExpired(*kind));
    }
    state.player.radius = state.effective_player_radius();

    let (dx, dy) = input.direction();
    state.player.move_by(dx, dy, state.field);

    state.echo_timer += dt;
    if state.echo_timer >= state.tuning.echo_interval {
        state.echo_timer = 0.0;
        state.spawn_echo();
    }

    if !state.effects.has(PowerupKind::TimeFreeze) {
        for echo in &mut state.echoes {
            echo.advance();
        }
    }

    state.item.update(dt);
    state.powerup.update(dt, &mut state.rng, state.field);

    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    if state.item.collides_with(player_pos, player_radius) {
        state.score += 1;
        state.item.respawn(&mut state.rng, state.field);
        state.events.push(GameEvent::ItemCollected);
    }

    if state.powerup.collides_with(player_pos, player_radius) {
        if let Some(kind) = state.powerup.collect() {
            log::debug!("Collected {}", kind.config().label);
            state.effects.add(kind);
            state.events.push(GameEvent::PowerupCollected(kind));
        }
    }

    check_echo_collisions(state);
}

/// Echo collisions, after both grace periods
fn check_echo_collisions(state: &mut GameState) {
    if state.time <= state.tuning.session_grace {
        return;
    }

    let grace_ticks = state.tuning.echo_grace_ticks();
    let tolerance = state.tuning.overlap_tolerance;
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let ghost_eater = state.effects.has(PowerupKind::GhostEater);

    let mut eaten = 0;
    let mut i = 0;
    while i < state.echoes.len() {
        let echo = &state.echoes[i];
        let hit = echo.frame_index > grace_ticks
            && echo_contact(player_pos, player_radius, echo.pos(), echo.radius, tolerance);
        if !hit {
            i += 1;
            continue;
        }

        if ghost_eater {
            state.echoes.remove(i);
            state.echoes_eaten += 1;
            state.score += state.tuning.ghost_eater_bonus;
            eaten += 1;
        } else {
            state.game_over();
            return;
        }
    }

    if eaten > 0 {
        log::debug!("Ate {eaten} echo(es)");
        state.events.push(GameEvent::GhostEaten);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::Echo;

    fn right() -> TickInput {
        TickInput {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_direction_folding() {
        assert_eq!(TickInput::default().direction(), (0, 0));
        let all = TickInput {
            up: true,
            down: true,
            left: true,
            right: true,
            restart: false,
        };
        assert_eq!(all.direction(), (1, 1));
        let up_left = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(up_left.direction(), (-1, -1));
    }

    #[test]
    fn test_echo_spawns_on_interval() {
        let mut state = GameState::new(12345);
        state.item.pos = glam::Vec2::new(40.0, 40.0);
        // 5s at 60Hz, plus slack for float accumulation
        for _ in 0..301 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.echoes.len(), 1);
        assert_eq!(state.echo_count, 1);
        assert!(state.events.contains(&GameEvent::EchoSpawned));
        assert!(state.echo_timer < 0.1);
    }

    #[test]
    fn test_game_over_freezes_until_restart() {
        let mut state = GameState::new(1);
        state.score = 4;
        state.game_over();
        let pos = state.player.pos;
        let time = state.time;

        for _ in 0..10 {
            tick(&mut state, &right(), SIM_DT);
        }
        assert_eq!(state.player.pos, pos);
        assert_eq!(state.time, time);
        assert_eq!(state.phase, GamePhase::GameOver);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 4);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(1);
        state.item.pos = glam::Vec2::new(40.0, 40.0);
        tick(&mut state, &right(), SIM_DT);
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.player.path_history.len(), 2);
    }

    #[test]
    fn test_shrink_changes_radius_and_reverts() {
        let mut state = GameState::new(9);
        state.item.pos = glam::Vec2::new(40.0, 40.0);
        state.effects.add(PowerupKind::Shrink);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.radius, 6.0);

        tick(&mut state, &TickInput::default(), 6.0);
        assert!(!state.effects.has(PowerupKind::Shrink));
        assert_eq!(state.player.radius, 12.0);
        assert!(state.events.contains(&GameEvent::EffectExpired(PowerupKind::Shrink)));
    }

    #[test]
    fn test_stacked_expiry_reports_kind_once() {
        let mut state = GameState::new(9);
        state.item.pos = glam::Vec2::new(40.0, 40.0);
        state.effects.add(PowerupKind::TimeFreeze);
        state.effects.add(PowerupKind::TimeFreeze);
        tick(&mut state, &TickInput::default(), 6.0);

        assert!(state.effects.is_empty());
        let expired: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::EffectExpired(_)))
            .collect();
        assert_eq!(expired, vec![GameEvent::EffectExpired(PowerupKind::TimeFreeze)]);
    }

    #[test]
    fn test_no_kill_during_session_grace() {
        let mut state = GameState::new(3);
        state.item.pos = glam::Vec2::new(40.0, 40.0);
        let mut echo = Echo::new(&[state.player.pos; 200], 0, 12.0);
        echo.frame_index = 100;
        state.echoes.push(echo);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_young_echo_cannot_kill() {
        let mut state = GameState::new(3);
        state.item.pos = glam::Vec2::new(40.0, 40.0);
        state.time = 10.0;
        let echo = Echo::new(&[state.player.pos; 200], 0, 12.0);
        state.echoes.push(echo);
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        // cursor now at 60: not past the 60-tick grace yet
        assert_eq!(state.phase, GamePhase::Playing);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
    }
}
