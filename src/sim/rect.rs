//! Axis-aligned rectangle geometry
//!
//! Screen space: x/y is the top-left corner and y grows downward, so `top()`
//! is the smallest y and `bottom()` the largest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move so the left edge sits at `left`
    #[inline]
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Move so the right edge sits at `right`
    #[inline]
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    /// Move so the top edge sits at `top`
    #[inline]
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Move so the bottom edge sits at `bottom`
    #[inline]
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Zero width or height
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Copy of this rectangle moved by `delta`
    pub fn offset(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// True if the two rectangles share positive area.
    ///
    /// Touching edges do not count, and an empty rectangle never intersects
    /// anything. A box resting exactly on a platform is therefore not
    /// colliding with it.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
