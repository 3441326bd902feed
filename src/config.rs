//! Game tunables
//!
//! Built once at startup and passed by reference to every component that
//! needs it. Loaded from an optional JSON file; missing keys keep defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Immutable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Screen ===
    pub screen_width: f32,
    /// Also the floor line
    pub screen_height: f32,

    // === Terrain ===
    /// Width of one platform (one source line)
    pub line_width: f32,
    /// Height added per indent level
    pub line_height: f32,
    /// World x of the first platform
    pub start_offset: f32,
    /// Indent unit for sources with no indented line
    pub default_indent_unit: f32,
    /// Spaces per tab when normalizing source lines
    pub tab_width: usize,

    // === Scrolling ===
    pub left_limit: f32,
    pub right_limit: f32,

    // === Movement (per tick) ===
    pub speed_min: f32,
    pub speed_max: f32,
    pub accel_x: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub float_gravity_factor: f32,
    pub ground_probe: f32,

    // === Actor ===
    pub actor_width: f32,
    pub actor_height: f32,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            line_width: LINE_WIDTH,
            line_height: LINE_HEIGHT,
            start_offset: START_OFFSET,
            default_indent_unit: DEFAULT_INDENT_UNIT,
            tab_width: TAB_WIDTH,

            left_limit: LEFT_LIMIT,
            right_limit: RIGHT_LIMIT,

            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            accel_x: ACCEL_X,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            float_gravity_factor: FLOAT_GRAVITY_FACTOR,
            ground_probe: GROUND_PROBE,

            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,

            tick_rate: (1.0 / SIM_DT).round() as u32,
        }
    }
}

impl Config {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("line_width", self.line_width),
            ("line_height", self.line_height),
            ("default_indent_unit", self.default_indent_unit),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("speed_min", self.speed_min),
            ("ground_probe", self.ground_probe),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.left_limit >= self.right_limit {
            return Err(ConfigError::Invalid(format!(
                "left_limit ({}) must be less than right_limit ({})",
                self.left_limit, self.right_limit
            )));
        }
        if self.speed_min > self.speed_max {
            return Err(ConfigError::Invalid(format!(
                "speed_min ({}) must not exceed speed_max ({})",
                self.speed_min, self.speed_max
            )));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be non-zero".into()));
        }
        Ok(())
    }

    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Per-tick velocity change while floating (negative, opposes gravity)
    pub fn float_boost(&self) -> f32 {
        -(self.float_gravity_factor * self.gravity)
    }
}
