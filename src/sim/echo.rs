//! Echoes: ghosts replaying a frozen copy of the player's path

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ECHO_TRAIL_LENGTH;
use crate::palette::{Rgb, echo_color};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Echo {
    /// Snapshot of the path at spawn time; never modified afterwards
    path: Vec<Vec2>,
    /// Replay cursor into `path`
    pub frame_index: usize,
    pub radius: f32,
    pub color: Rgb,
    /// Set once the cursor reaches the end of the path; never cleared
    pub finished: bool,
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
}

impl Echo {
    /// Snapshot `path` and pick a color from the palette by `color_index`
    pub fn new(path: &[Vec2], color_index: u32, radius: f32) -> Self {
        Self {
            path: path.to_vec(),
            frame_index: 0,
            radius,
            color: echo_color(color_index),
            finished: false,
            trail: VecDeque::with_capacity(ECHO_TRAIL_LENGTH + 1),
        }
    }

    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Current replay position; holds at the last point once finished
    pub fn pos(&self) -> Vec2 {
        self.path
            .get(self.frame_index)
            .or_else(|| self.path.last())
            .copied()
            .unwrap_or(Vec2::ZERO)
    }

    /// Step one point along the path
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        match self.path.get(self.frame_index) {
            Some(&point) => {
                self.trail.push_back(point);
                if self.trail.len() > ECHO_TRAIL_LENGTH {
                    self.trail.pop_front();
                }
                self.frame_index += 1;
                self.finished = self.frame_index >= self.path.len();
            }
            None => self.finished = true,
        }
    }
}
