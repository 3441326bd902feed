//! Levels and level progression

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::terrain::{self, PlatformSpec};
use crate::config::Config;
use crate::error::LevelError;
use crate::renderer::{Drawable, Renderer, colors};

/// A static, solid platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

impl From<&PlatformSpec> for Platform {
    fn from(spec: &PlatformSpec) -> Self {
        Self::new(Rect::new(spec.x, spec.y, spec.width, spec.height))
    }
}

impl Drawable for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.rect, colors::PLATFORM);
    }
}

/// Normalized text lines of one level, as handed over by a source provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSource {
    pub name: String,
    pub lines: Vec<String>,
}

/// One playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Display name (source file name)
    pub name: String,
    pub platforms: Vec<Platform>,
    /// How far this level has been scrolled; negative once the player moves right
    pub world_shift: f32,
    /// Completion happens once `actor.x + world_shift` drops below this
    pub end_threshold: f32,
}

impl Level {
    pub fn new(name: impl Into<String>, platforms: Vec<Platform>, end_threshold: f32) -> Self {
        Self {
            name: name.into(),
            platforms,
            world_shift: 0.0,
            end_threshold,
        }
    }

    /// Build a level from generated geometry
    pub fn from_specs(name: impl Into<String>, specs: &[PlatformSpec]) -> Result<Self, LevelError> {
        let name = name.into();
        let Some(end_threshold) = terrain::end_threshold(specs) else {
            return Err(LevelError::Empty { name });
        };
        let platforms = specs.iter().map(Platform::from).collect();
        Ok(Self::new(name, platforms, end_threshold))
    }

    /// Generate a level from normalized source lines
    pub fn from_lines(
        name: impl Into<String>,
        lines: &[impl AsRef<str>],
        config: &Config,
    ) -> Result<Self, LevelError> {
        let name = name.into();
        let unit = terrain::indent_unit(lines, config.default_indent_unit);
        let uneven = lines
            .iter()
            .map(|line| terrain::indent_level(line.as_ref(), unit))
            .filter(|level| level.fract() != 0.0)
            .count();
        if uneven > 0 {
            log::warn!("Level `{name}`: {uneven} lines are not a multiple of the {unit}-space indent");
        }

        let specs = terrain::generate_platforms(lines, config);
        Self::from_specs(name, &specs)
    }

    /// Per-tick update of non-static elements. Platforms are static, so this
    /// does nothing yet.
    pub fn update(&mut self) {}

    /// Scroll the whole level horizontally
    pub fn shift_world(&mut self, dx: f32) {
        self.world_shift += dx;
        for platform in &mut self.platforms {
            platform.rect.x += dx;
        }
    }

    /// Draw background then platforms
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear(colors::BACKGROUND);
        for platform in &self.platforms {
            platform.render(renderer);
        }
    }
}

/// Result of moving to the next level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Now on the level with this index
    Next(usize),
    /// There was no next level; the run is over
    Finished,
}

/// Ordered levels plus the one currently being played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSet {
    levels: Vec<Level>,
    current: usize,
}

impl LevelSet {
    /// Wrap pre-built levels. At least one level is required.
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }
        Ok(Self { levels, current: 0 })
    }

    /// Generate every level up front from its source text
    pub fn from_sources(sources: &[LevelSource], config: &Config) -> Result<Self, LevelError> {
        let levels = sources
            .iter()
            .map(|source| {
                let level = Level::from_lines(&source.name, &source.lines, config)?;
                log::info!(
                    "Built level `{}`: {} platforms, end at {}",
                    level.name,
                    level.platforms.len(),
                    level.end_threshold
                );
                Ok(level)
            })
            .collect::<Result<Vec<_>, LevelError>>()?;
        Self::new(levels)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; a level set holds at least one level
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current]
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.levels.len()
    }

    /// Move to the next level. The index never leaves range: advancing from
    /// the last level reports `Finished` and stays put.
    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            return Advance::Finished;
        }
        self.current += 1;
        Advance::Next(self.current)
    }
}
