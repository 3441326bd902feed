//! Recorded draw calls, laid out for upload as an instance buffer

use bytemuck::{Pod, Zeroable};

use super::{Color, Renderer};
use crate::sim::Rect;

/// One filled rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub const fn new(rect: Rect, color: Color) -> Self {
        Self {
            position: [rect.x, rect.y],
            size: [rect.width, rect.height],
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position[0], self.position[1], self.size[0], self.size[1])
    }
}

/// A renderer that just records what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: Option<Color>,
    /// In draw order
    pub instances: Vec<RectInstance>,
}

impl DrawList {
    /// Raw bytes of the instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.instances.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.instances.push(RectInstance::new(rect, color));
    }
}
