//! Collision queries and response against static platforms
//!
//! Movement is resolved one axis at a time. Each pass gathers every platform
//! overlapping the moved box first and then resolves them in level order, so a
//! box wedged between two platforms is clamped against both.

use glam::Vec2;

use super::level::Platform;
use super::rect::Rect;

/// Indices of all platforms overlapping `bounds`, in level order
pub fn overlapping(bounds: &Rect, platforms: &[Platform]) -> Vec<usize> {
    platforms
        .iter()
        .enumerate()
        .filter(|(_, p)| p.rect.intersects(bounds))
        .map(|(i, _)| i)
        .collect()
}

/// True if `bounds` overlaps any platform
pub fn hits_any(bounds: &Rect, platforms: &[Platform]) -> bool {
    platforms.iter().any(|p| p.rect.intersects(bounds))
}

/// Push `bounds` out of the platforms it overlaps after moving by `vx`.
///
/// Positional clamp only: the caller's velocity is left alone so held input
/// keeps pressing against the wall.
pub fn resolve_horizontal(bounds: &mut Rect, vx: f32, platforms: &[Platform]) {
    for i in overlapping(bounds, platforms) {
        let block = &platforms[i].rect;
        if vx > 0.0 {
            bounds.set_right(block.left());
        } else if vx < 0.0 {
            bounds.set_left(block.right());
        }
    }
}

/// Snap `bounds` onto or under the platforms it overlaps after moving by
/// `velocity.y`. Returns true if any platform was touched.
///
/// Every contact zeroes `velocity.y`, so only the first contact in a pass
/// moves the box.
pub fn resolve_vertical(bounds: &mut Rect, velocity: &mut Vec2, platforms: &[Platform]) -> bool {
    let hits = overlapping(bounds, platforms);
    for &i in &hits {
        let block = &platforms[i].rect;
        if velocity.y > 0.0 {
            bounds.set_bottom(block.top());
        } else if velocity.y < 0.0 {
            bounds.set_top(block.bottom());
        }
        velocity.y = 0.0;
    }
    !hits.is_empty()
}

/// Clamp `bounds` to the floor line. Returns true if it landed (or rests) there.
pub fn resolve_floor(bounds: &mut Rect, velocity: &mut Vec2, floor: f32) -> bool {
    if bounds.bottom() >= floor && velocity.y >= 0.0 {
        velocity.y = 0.0;
        bounds.set_bottom(floor);
        return true;
    }
    false
}
