//! Rendering seam
//!
//! The simulation never rasterizes anything itself. It emits draw calls
//! through [`Renderer`]; backends decide what a filled rectangle means.

pub mod ascii;
pub mod draw_list;

pub use ascii::AsciiFrame;
pub use draw_list::{DrawList, RectInstance};

use crate::sim::Rect;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Receives draw calls for one frame
pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    /// Fill a screen-space rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Something with on-screen bounds that knows how to draw itself
pub trait Drawable {
    fn bounds(&self) -> Rect;
    fn render(&self, renderer: &mut dyn Renderer);
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const PLATFORM: Color = [0.0, 1.0, 0.0, 1.0];
    pub const ACTOR: Color = [1.0, 0.0, 0.0, 1.0];
}
