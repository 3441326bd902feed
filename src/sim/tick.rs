//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. All motion is
//! measured per tick; `FixedTimestep` decides how many ticks a frame gets.

use serde::{Deserialize, Serialize};

use super::level::Advance;
use super::state::{GameEvent, GameState, RunPhase};
use crate::consts::MAX_SUBSTEPS;

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump control is currently down
    pub jump_held: bool,
    /// Jump control went down since the previous tick
    pub jump_just_pressed: bool,
    /// Skip to the next level
    pub skip_requested: bool,
    pub quit_requested: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    state.events.clear();

    if input.quit_requested {
        log::info!("Quit requested at tick {}", state.time_ticks);
        state.phase = RunPhase::Quit;
        state.events.push(GameEvent::QuitRequested);
        return;
    }

    state.time_ticks += 1;

    apply_jump(state, input);
    apply_horizontal(state, input);

    // Physics: actor first, then the level
    let level = state.levels.current_mut();
    state.actor.update(&level.platforms, &state.config);
    level.update();

    apply_scroll_band(state);

    let grounded = state.is_grounded();
    if grounded && !state.was_grounded {
        state.events.push(GameEvent::Landed);
    }
    state.was_grounded = grounded;

    // Completion is a threshold crossing in level space
    if input.skip_requested {
        advance_level(state, true);
    } else if state.actor_world_x() < state.level().end_threshold {
        advance_level(state, false);
    }
}

/// Jump on the first tick the control is held, float on the following ones
fn apply_jump(state: &mut GameState, input: &TickInput) {
    if !input.jump_held || input.jump_just_pressed {
        state.jump_lock = false;
    }
    if !input.jump_held {
        return;
    }

    let platforms = &state.levels.current().platforms;
    if state.jump_lock {
        state.actor.float(platforms, &state.config);
    } else {
        if state.actor.jump(platforms, &state.config) {
            state.events.push(GameEvent::Jumped);
        }
        state.jump_lock = true;
    }
}

/// Both directions held keeps the current speed; neither held stops dead
fn apply_horizontal(state: &mut GameState, input: &TickInput) {
    let config = &state.config;
    match (input.move_left, input.move_right) {
        (true, true) => {}
        (false, true) => state.actor.accelerate_right(config),
        (true, false) => state.actor.accelerate_left(config),
        (false, false) => state.actor.stop(),
    }
}

/// Keep the actor inside the scroll band by moving the world instead
fn apply_scroll_band(state: &mut GameState) {
    let right_limit = state.config.right_limit;
    let left_limit = state.config.left_limit;
    let level = state.levels.current_mut();
    let rect = &mut state.actor.rect;

    if rect.right() >= right_limit {
        let diff = rect.right() - right_limit;
        rect.set_right(right_limit);
        level.shift_world(-diff);
    }

    if rect.left() <= left_limit {
        let diff = left_limit - rect.left();
        rect.set_left(left_limit);
        level.shift_world(diff);
    }
}

/// Move to the next level, or finish the run after the last one
fn advance_level(state: &mut GameState, skipped: bool) {
    let from = state.levels.current_index();
    match state.levels.advance() {
        Advance::Next(to) => {
            state.actor.rect.set_left(state.config.left_limit);
            let verb = if skipped { "Skipped" } else { "Completed" };
            log::info!(
                "{verb} level {} `{}` at tick {}; now on `{}`",
                from + 1,
                state.levels.levels()[from].name,
                state.time_ticks,
                state.level().name
            );
            state.events.push(if skipped {
                GameEvent::LevelSkipped { from, to }
            } else {
                GameEvent::LevelCompleted { from, to }
            });
        }
        Advance::Finished => {
            log::info!("Run finished after {} ticks", state.time_ticks);
            state.phase = RunPhase::Finished;
            state.events.push(GameEvent::RunFinished);
        }
    }
}

/// Converts variable frame time into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add a frame's elapsed time and return how many ticks to run.
    ///
    /// Capped at `MAX_SUBSTEPS` per frame; time beyond the cap is dropped so a
    /// long stall does not cause a burst of catch-up ticks.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            self.accumulator -= self.dt;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::level::{Level, LevelSet};

    fn flat_state(levels: usize) -> GameState {
        let config = Config::default();
        let levels = (0..levels)
            .map(|i| Level::from_lines(format!("level{i}"), &["a", "b", "c"], &config).unwrap())
            .collect();
        GameState::new(config, LevelSet::new(levels).unwrap())
    }

    fn right() -> TickInput {
        TickInput {
            move_right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_on_floor() {
        let mut state = flat_state(1);
        let start = state.actor.rect;
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.actor.rect, start);
            assert_eq!(state.actor.vel.y, 0.0);
        }
        assert_eq!(state.time_ticks, 100);
        assert!(state.is_running());
    }

    #[test]
    fn test_both_directions_hold_speed() {
        let mut state = flat_state(1);
        tick(&mut state, &right());
        tick(&mut state, &right());
        let vx = state.actor.vel.x;

        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &both);
            assert_eq!(state.actor.vel.x, vx);
        }

        tick(&mut state, &TickInput::default());
        assert_eq!(state.actor.vel.x, 0.0);
    }

    #[test]
    fn test_right_limit_scrolls_world() {
        let mut state = flat_state(1);
        let config = state.config.clone();
        tick(&mut state, &right());

        assert_eq!(state.actor.rect.right(), config.right_limit);
        assert_eq!(state.level().world_shift, -config.speed_min);
        assert_eq!(
            state.level().platforms[0].rect.x,
            config.start_offset - config.speed_min
        );
    }

    #[test]
    fn test_left_limit_scrolls_world() {
        let mut state = flat_state(1);
        let config = state.config.clone();
        state.actor.rect.set_left(config.left_limit);

        tick(
            &mut state,
            &TickInput {
                move_left: true,
                ..Default::default()
            },
        );

        assert_eq!(state.actor.rect.left(), config.left_limit);
        assert_eq!(state.level().world_shift, config.speed_min);
    }

    #[test]
    fn test_jump_then_float_while_held() {
        let mut state = flat_state(1);
        let config = state.config.clone();
        let held = TickInput {
            jump_held: true,
            jump_just_pressed: true,
            ..Default::default()
        };

        tick(&mut state, &held);
        assert!(state.jump_lock);
        assert_eq!(state.actor.vel.y, config.jump_force + config.gravity);
        assert!(state.drain_events().contains(&GameEvent::Jumped));

        let still_held = TickInput {
            jump_held: true,
            ..Default::default()
        };
        tick(&mut state, &still_held);
        let expected = config.jump_force + 2.0 * config.gravity + config.float_boost();
        assert!((state.actor.vel.y - expected).abs() < 1e-5);

        tick(&mut state, &TickInput::default());
        assert!(!state.jump_lock);
    }

    #[test]
    fn test_held_jump_does_not_rebound() {
        let mut state = flat_state(1);
        let held = TickInput {
            jump_held: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        for _ in 0..120 {
            tick(&mut state, &held);
            events.extend(state.drain_events());
        }
        // landed long ago; holding must not trigger a second jump
        assert!(state.is_grounded());
        assert_eq!(state.actor.vel.y, 0.0);
        let jumps = events.iter().filter(|e| **e == GameEvent::Jumped).count();
        assert_eq!(jumps, 1);
    }

    #[test]
    fn test_landing_event() {
        let mut state = flat_state(1);
        let held = TickInput {
            jump_held: true,
            ..Default::default()
        };
        tick(&mut state, &held);
        let mut landed = false;
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
            landed |= state.events.contains(&GameEvent::Landed);
        }
        assert!(landed);
    }

    #[test]
    fn test_crossing_threshold_advances() {
        let mut state = flat_state(2);
        let config = state.config.clone();
        let threshold = state.level().end_threshold;
        let shift = threshold - state.actor.rect.x - 1.0;
        state.levels.current_mut().shift_world(shift);
        assert!(state.actor_world_x() < threshold);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.levels.current_index(), 1);
        assert_eq!(state.actor.rect.x, config.left_limit);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::LevelCompleted { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut state = flat_state(2);
        let threshold = state.level().end_threshold;
        let shift = threshold - state.actor.rect.x;
        state.levels.current_mut().shift_world(shift);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.levels.current_index(), 0);
    }

    #[test]
    fn test_skip_advances_and_finishes() {
        let mut state = flat_state(2);
        let skip = TickInput {
            skip_requested: true,
            ..Default::default()
        };

        tick(&mut state, &skip);
        assert_eq!(state.levels.current_index(), 1);
        assert!(state.is_running());
        assert_eq!(state.events, vec![GameEvent::LevelSkipped { from: 0, to: 1 }]);

        tick(&mut state, &skip);
        assert_eq!(state.phase, RunPhase::Finished);
        assert_eq!(state.levels.current_index(), 1);
        assert_eq!(state.events, vec![GameEvent::RunFinished]);

        // terminal: further ticks do nothing
        let ticks = state.time_ticks;
        tick(&mut state, &right());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_events_cover_only_latest_tick() {
        let mut state = flat_state(1);
        let jump = TickInput {
            jump_held: true,
            jump_just_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &jump);
        assert_eq!(state.events, vec![GameEvent::Jumped]);

        // undrained events do not pile up
        for _ in 0..600 {
            tick(&mut state, &jump);
            tick(&mut state, &TickInput::default());
            assert!(state.events.len() <= 2);
        }
        tick(&mut state, &right());
        tick(&mut state, &right());
        assert!(state.events.len() <= 1);
    }

    #[test]
    fn test_quit() {
        let mut state = flat_state(1);
        let quit = TickInput {
            quit_requested: true,
            move_right: true,
            ..Default::default()
        };
        let before = state.actor.rect;
        tick(&mut state, &quit);
        assert_eq!(state.phase, RunPhase::Quit);
        assert_eq!(state.actor.rect, before);
    }

    #[test]
    fn test_walk_into_step_keeps_speed() {
        let config = Config::default();
        // second line is indented so its platform stands up off the floor
        let level = Level::from_lines("step", &["a", "    b"], &config).unwrap();
        let mut state = GameState::new(config.clone(), LevelSet::new(vec![level]).unwrap());
        state.actor.vel.x = config.speed_max;

        for _ in 0..60 {
            tick(&mut state, &right());
        }

        let wall = state.level().platforms[1].rect;
        assert_eq!(state.actor.rect.right(), wall.left());
        assert_eq!(state.actor.vel.x, config.speed_max);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            right(),
            TickInput {
                move_right: true,
                jump_held: true,
                jump_just_pressed: true,
                ..Default::default()
            },
            TickInput {
                move_right: true,
                jump_held: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];

        let mut a = flat_state(2);
        let mut b = flat_state(2);
        for _ in 0..20 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.actor.rect, b.actor.rect);
        assert_eq!(a.actor.vel, b.actor.vel);
        assert_eq!(a.level().world_shift, b.level().world_shift);
    }

    #[test]
    fn test_fixed_timestep_counts_ticks() {
        let mut step = FixedTimestep::new(0.25);
        assert_eq!(step.advance(0.1), 0);
        assert_eq!(step.advance(0.2), 1);
        assert_eq!(step.advance(0.5), 2);
    }

    #[test]
    fn test_fixed_timestep_caps_substeps() {
        let mut step = FixedTimestep::new(0.25);
        assert_eq!(step.advance(100.0), MAX_SUBSTEPS);
        // backlog was dropped
        assert!(step.advance(0.0) <= 1);
    }
}
