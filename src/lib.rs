//! Code Terrain - a side-scrolling platformer built from source indentation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain generation, physics, progression)
//! - `levels`: Level text sources (file loading, line normalization)
//! - `renderer`: Draw-call seam and headless renderers
//! - `config`: Data-driven tunables

pub mod config;
pub mod error;
pub mod levels;
pub mod renderer;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, LevelError};

/// Default tunables. `Config::default()` is built from these.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1600.0;
    pub const SCREEN_HEIGHT: f32 = 900.0;

    /// Platform dimensions (one platform per source line)
    pub const LINE_WIDTH: f32 = 180.0;
    pub const LINE_HEIGHT: f32 = 65.0;

    /// World x of the first platform
    pub const START_OFFSET: f32 = 700.0;
    /// Scroll band, in screen space
    pub const RIGHT_LIMIT: f32 = 500.0;
    pub const LEFT_LIMIT: f32 = 150.0;

    /// Horizontal speed, pixels per tick
    pub const SPEED_MIN: f32 = 6.0;
    pub const SPEED_MAX: f32 = 12.0;
    /// Horizontal acceleration per tick while a direction is held
    pub const ACCEL_X: f32 = 0.04;

    /// Initial vertical velocity of a jump (negative is up)
    pub const JUMP_FORCE: f32 = -13.0;
    /// Gravity, pixels per tick²
    pub const GRAVITY: f32 = 1.0;
    /// Fraction of gravity cancelled while jump is held in the air
    pub const FLOAT_GRAVITY_FACTOR: f32 = 0.45;

    /// Player bounding box
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 60.0;

    /// Indent unit used when a source has no indented lines
    pub const DEFAULT_INDENT_UNIT: f32 = 2.0;
    /// Spaces per tab when normalizing source lines
    pub const TAB_WIDTH: usize = 2;
    /// Distance below the feet probed by the grounded check (1px is unreliable)
    pub const GROUND_PROBE: f32 = 2.0;
}
