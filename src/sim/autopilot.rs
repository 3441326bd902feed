//! Demo-mode input provider
//!
//! Plays the game without a human: runs right, jumps at anything taller than
//! its footing, holds jump while rising, and skips levels it gets stuck on.

use super::rect::Rect;
use super::state::GameState;
use super::tick::TickInput;

/// Ticks without forward progress before the autopilot gives up on a level
pub const DEFAULT_STALL_TICKS: u32 = 180;

#[derive(Debug, Clone)]
pub struct Autopilot {
    stall_limit: u32,
    level_index: usize,
    best_world_x: f32,
    stalled_ticks: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_STALL_TICKS)
    }
}

impl Autopilot {
    pub fn new(stall_limit: u32) -> Self {
        Self {
            stall_limit,
            level_index: 0,
            best_world_x: f32::INFINITY,
            stalled_ticks: 0,
        }
    }

    /// Decide this tick's input from the current state
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        self.track_progress(state);

        let grounded = state.is_grounded();
        let jump_held = if grounded {
            // Let go for a tick after landing so the latch resets
            obstacle_ahead(state) && !state.jump_lock
        } else {
            state.jump_lock && state.actor.vel.y < 0.0
        };

        TickInput {
            move_left: false,
            move_right: true,
            jump_held,
            jump_just_pressed: jump_held && !state.jump_lock,
            skip_requested: self.stalled_ticks >= self.stall_limit,
            quit_requested: false,
        }
    }

    /// Progress is measured as decreasing level-space x
    fn track_progress(&mut self, state: &GameState) {
        let index = state.levels.current_index();
        if index != self.level_index {
            self.level_index = index;
            self.best_world_x = f32::INFINITY;
            self.stalled_ticks = 0;
        }

        let world_x = state.actor_world_x();
        if world_x < self.best_world_x {
            self.best_world_x = world_x;
            self.stalled_ticks = 0;
        } else {
            self.stalled_ticks += 1;
            if self.stalled_ticks == self.stall_limit {
                log::warn!(
                    "Autopilot stuck on level `{}` at x={world_x}, skipping",
                    state.level().name
                );
            }
        }
    }
}

/// A platform within one line-width ahead whose top is above the actor's feet
fn obstacle_ahead(state: &GameState) -> bool {
    let actor = &state.actor.rect;
    let lookahead = Rect::new(
        actor.right(),
        actor.top(),
        state.config.line_width,
        actor.height,
    );
    state
        .level()
        .platforms
        .iter()
        .any(|p| p.rect.intersects(&lookahead) && p.rect.top() < actor.bottom())
}
