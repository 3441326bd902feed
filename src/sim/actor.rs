//! The player-controlled physics body
//!
//! Velocity is in pixels per tick and persists between ticks. Horizontal
//! motion is resolved completely before vertical motion each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::level::Platform;
use super::rect::Rect;
use crate::config::Config;
use crate::renderer::{Drawable, Renderer, colors};

/// Vertical contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalMode {
    Grounded,
    Airborne,
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Bounding box in screen space
    pub rect: Rect,
    pub vel: Vec2,
}

impl Actor {
    /// Spawn at the right scroll limit, standing on the floor
    pub fn new(config: &Config) -> Self {
        let mut rect = Rect::new(0.0, 0.0, config.actor_width, config.actor_height);
        rect.set_right(config.right_limit);
        rect.set_bottom(config.screen_height);
        Self {
            rect,
            vel: Vec2::ZERO,
        }
    }

    /// Advance one tick: horizontal then vertical
    pub fn update(&mut self, platforms: &[Platform], config: &Config) {
        self.update_horizontal(platforms);
        self.update_vertical(platforms, config);
    }

    /// Move by `vel.x` and push out of any platform hit. Never touches `vel.x`.
    pub fn update_horizontal(&mut self, platforms: &[Platform]) {
        self.rect.x += self.vel.x;
        collision::resolve_horizontal(&mut self.rect, self.vel.x, platforms);
    }

    /// Apply gravity, move by `vel.y`, then land on / bump against platforms
    /// and the floor. Returns true if the body touched a surface.
    pub fn update_vertical(&mut self, platforms: &[Platform], config: &Config) -> bool {
        // Gravity applies even when grounded; the floor/platform clamp cancels it.
        self.vel.y += config.gravity;
        self.rect.y += self.vel.y;

        let hit_platform = collision::resolve_vertical(&mut self.rect, &mut self.vel, platforms);
        let hit_floor = collision::resolve_floor(&mut self.rect, &mut self.vel, config.screen_height);
        hit_platform || hit_floor
    }

    /// Standing on a platform or the floor. Probes a copy of the box shifted
    /// down by `ground_probe`; the body itself is not moved.
    pub fn is_grounded(&self, platforms: &[Platform], config: &Config) -> bool {
        let probe = self.rect.offset(Vec2::new(0.0, config.ground_probe));
        collision::hits_any(&probe, platforms) || self.rect.bottom() >= config.screen_height
    }

    pub fn vertical_mode(&self, platforms: &[Platform], config: &Config) -> VerticalMode {
        if self.is_grounded(platforms, config) {
            VerticalMode::Grounded
        } else {
            VerticalMode::Airborne
        }
    }

    /// Launch upward. Only works from the ground; returns whether it fired.
    pub fn jump(&mut self, platforms: &[Platform], config: &Config) -> bool {
        if self.is_grounded(platforms, config) {
            self.vel.y = config.jump_force;
            return true;
        }
        false
    }

    /// Cancel part of gravity while jump is held in the air
    pub fn float(&mut self, platforms: &[Platform], config: &Config) {
        if !self.is_grounded(platforms, config) {
            self.vel.y += config.float_boost();
        }
    }

    /// Start at minimum speed, then ramp toward the cap
    pub fn accelerate_left(&mut self, config: &Config) {
        if self.vel.x > -config.speed_min {
            self.vel.x = -config.speed_min;
        } else if self.vel.x <= -config.speed_max {
            self.vel.x = -config.speed_max;
        } else {
            self.vel.x -= config.accel_x;
        }
    }

    /// Mirror of [`Actor::accelerate_left`]
    pub fn accelerate_right(&mut self, config: &Config) {
        if self.vel.x < config.speed_min {
            self.vel.x = config.speed_min;
        } else if self.vel.x >= config.speed_max {
            self.vel.x = config.speed_max;
        } else {
            self.vel.x += config.accel_x;
        }
    }

    /// Halt horizontal motion instantly
    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }
}

impl Drawable for Actor {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.rect, colors::ACTOR);
    }
}
