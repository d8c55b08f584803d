//! Player movement and path recording

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Field;
use crate::consts::PLAYER_TRAIL_LENGTH;

/// The player's dot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Displacement per tick along a single axis
    pub speed: f32,
    /// Current collision radius (shrinks under the Shrink effect)
    pub radius: f32,
    /// Every accepted position since the last reset, oldest first
    pub path_history: Vec<Vec2>,
    /// Recent positions for rendering, oldest first
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            speed,
            radius,
            path_history: Vec::new(),
            trail: VecDeque::with_capacity(PLAYER_TRAIL_LENGTH + 1),
        }
    }

    /// Move one tick in direction (dx, dy), each in {-1, 0, 1}, and record
    /// the resulting position.
    ///
    /// A zero direction still records a point, so echoes replay pauses too.
    pub fn move_by(&mut self, dx: i8, dy: i8, field: Field) {
        let mut dir = Vec2::new(f32::from(dx.signum()), f32::from(dy.signum()));
        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= std::f32::consts::FRAC_1_SQRT_2;
        }

        self.pos = field.clamp_circle(self.pos + dir * self.speed, self.radius);
        self.record();
    }

    fn record(&mut self) {
        self.path_history.push(self.pos);

        self.trail.push_back(self.pos);
        if self.trail.len() > PLAYER_TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Teleport to `pos` and forget all history
    pub fn reset(&mut self, pos: Vec2, radius: f32) {
        self.pos = pos;
        self.radius = radius;
        self.path_history.clear();
        self.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), 4.0, 12.0)
    }

    #[test]
    fn test_moves_in_each_direction() {
        let field = Field::default();
        let cases = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        for (dx, dy) in cases {
            let mut p = player_at(100.0, 100.0);
            p.move_by(dx, dy, field);
            assert_eq!(p.pos, Vec2::new(100.0 + 4.0 * dx as f32, 100.0 + 4.0 * dy as f32));
        }
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let field = Field::default();
        let mut straight = player_at(100.0, 100.0);
        straight.move_by(1, 0, field);
        let mut diagonal = player_at(100.0, 100.0);
        diagonal.move_by(1, 1, field);

        let straight_dx = straight.pos.x - 100.0;
        let diagonal_dx = diagonal.pos.x - 100.0;
        assert!(diagonal_dx < straight_dx);
        assert!(((diagonal.pos - Vec2::splat(100.0)).length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamped_at_edges() {
        let field = Field::default();
        let mut p = player_at(5.0, 595.0);
        p.move_by(-1, 1, field);
        assert_eq!(p.pos, Vec2::new(12.0, 588.0));

        let mut p = player_at(795.0, 5.0);
        p.move_by(1, -1, field);
        assert_eq!(p.pos, Vec2::new(788.0, 12.0));
    }

    #[test]
    fn test_stationary_still_records() {
        let mut p = player_at(100.0, 100.0);
        p.move_by(0, 0, Field::default());
        p.move_by(0, 0, Field::default());
        assert_eq!(p.path_history, vec![Vec2::new(100.0, 100.0); 2]);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut p = player_at(100.0, 100.0);
        for _ in 0..(PLAYER_TRAIL_LENGTH + 5) {
            p.move_by(1, 0, Field::default());
        }
        assert_eq!(p.trail.len(), PLAYER_TRAIL_LENGTH);
        assert_eq!(p.trail.back().copied(), Some(p.pos));
        assert_eq!(p.trail.front().copied(), Some(p.path_history[5]));
        assert_eq!(p.path_history.len(), PLAYER_TRAIL_LENGTH + 5);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut p = player_at(100.0, 100.0);
        p.move_by(1, 0, Field::default());
        p.radius = 6.0;
        p.reset(Vec2::new(400.0, 300.0), 12.0);
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        assert_eq!(p.radius, 12.0);
        assert!(p.path_history.is_empty());
        assert!(p.trail.is_empty());
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            start_x in 12.0f32..788.0,
            start_y in 12.0f32..588.0,
            moves in prop::collection::vec((-1i8..=1, -1i8..=1), 1..200),
        ) {
            let field = Field::default();
            let mut p = player_at(start_x, start_y);
            for (dx, dy) in &moves {
                p.move_by(*dx, *dy, field);
                prop_assert!(p.pos.x >= p.radius && p.pos.x <= field.width - p.radius);
                prop_assert!(p.pos.y >= p.radius && p.pos.y <= field.height - p.radius);
            }
            prop_assert_eq!(p.path_history.len(), moves.len());
        }

        #[test]
        fn prop_diagonal_axis_step_is_shorter(sx in prop::bool::ANY, sy in prop::bool::ANY) {
            let field = Field::default();
            let dx: i8 = if sx { 1 } else { -1 };
            let dy: i8 = if sy { 1 } else { -1 };
            let mut diag = player_at(400.0, 300.0);
            diag.move_by(dx, dy, field);
            let mut straight = player_at(400.0, 300.0);
            straight.move_by(dx, 0, field);
            prop_assert!((diag.pos.x - 400.0).abs() < (straight.pos.x - 400.0).abs());
            prop_assert!((diag.pos.y - 300.0).abs() < 4.0);
        }
    }
}
