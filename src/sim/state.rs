//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. Config is immutable after startup.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::level::{Level, LevelSet};
use crate::config::Config;
use crate::renderer::{Drawable, Renderer};

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    Playing,
    /// Advanced past the last level
    Finished,
    /// Player asked to quit
    Quit,
}

/// Notable things that happened during a tick, for the caller to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    /// Reached the end of `from` and moved on to `to`
    LevelCompleted { from: usize, to: usize },
    /// Skipped from `from` to `to`
    LevelSkipped { from: usize, to: usize },
    RunFinished,
    QuitRequested,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub levels: LevelSet,
    pub actor: Actor,
    pub phase: RunPhase,
    /// Set once a held jump has fired; later ticks float instead
    pub jump_lock: bool,
    /// Whether the actor ended the previous tick on a surface
    pub was_grounded: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick; cleared when the next tick runs
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a run on the first level
    pub fn new(config: Config, levels: LevelSet) -> Self {
        let actor = Actor::new(&config);
        Self {
            config,
            levels,
            actor,
            phase: RunPhase::Playing,
            jump_lock: false,
            was_grounded: true,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn level(&self) -> &Level {
        self.levels.current()
    }

    /// Actor x in level space (undoing the scroll)
    pub fn actor_world_x(&self) -> f32 {
        self.actor.rect.x + self.level().world_shift
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Playing
    }

    pub fn is_grounded(&self) -> bool {
        self.actor.is_grounded(&self.levels.current().platforms, &self.config)
    }

    /// Draw the current level, then the actor on top
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.level().render(renderer);
        self.actor.render(renderer);
    }

    /// Take the events raised by the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
