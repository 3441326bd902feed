//! Terrain generation from source text
//!
//! Each line becomes one fixed-width platform, laid out left to right in line
//! order. A line's indentation sets how tall its platform is: one indent unit
//! raises the platform by one `line_height`.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Geometry for one generated platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl PlatformSpec {
    /// World x of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Number of leading whitespace characters
pub fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Leading-space count of the first indented line, or `default` if no line
/// is indented
pub fn indent_unit(lines: &[impl AsRef<str>], default: f32) -> f32 {
    lines
        .iter()
        .map(|line| leading_spaces(line.as_ref()))
        .find(|&spaces| spaces > 0)
        .map_or(default, |spaces| spaces as f32)
}

/// Indent level of a line; fractional when the indentation is not a multiple
/// of the unit
#[inline]
pub fn indent_level(line: &str, unit: f32) -> f32 {
    leading_spaces(line) as f32 / unit
}

/// Convert normalized source lines into platform geometry.
///
/// Lines are expected with tabs already expanded and trailing whitespace
/// trimmed. An empty input produces no platforms.
pub fn generate_platforms(lines: &[impl AsRef<str>], config: &Config) -> Vec<PlatformSpec> {
    let unit = indent_unit(lines, config.default_indent_unit);

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let height = indent_level(line.as_ref(), unit) * config.line_height;
            PlatformSpec {
                width: config.line_width,
                height,
                x: config.start_offset + i as f32 * config.line_width,
                y: config.screen_height - height,
            }
        })
        .collect()
}

/// World x past which the level counts as cleared: the negated right edge of
/// the last platform. `None` for an empty level.
pub fn end_threshold(specs: &[PlatformSpec]) -> Option<f32> {
    specs.last().map(|last| -last.right())
}
