//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, motion measured per tick
//! - Stable iteration order (platforms in source-line order)
//! - No file I/O, rendering backends, or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod terrain;
pub mod tick;

pub use actor::{Actor, VerticalMode};
pub use autopilot::Autopilot;
pub use level::{Advance, Level, LevelSet, LevelSource, Platform};
pub use rect::Rect;
pub use state::{GameEvent, GameState, RunPhase};
pub use terrain::{PlatformSpec, generate_platforms, indent_unit};
pub use tick::{FixedTimestep, TickInput, tick};
