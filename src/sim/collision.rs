//! Axis-aligned collision detection

use glam::IVec2;

use crate::gfx::Sprite;

/// An axis-aligned box in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The box a sprite occupies when blitted at `pos`.
    pub fn of_sprite(sprite: &Sprite, pos: IVec2) -> Self {
        Self::new(pos.x, pos.y, sprite.width() as i32, sprite.height() as i32)
    }
}

/// Strict-inequality overlap test on all four axes. Boxes that share only a
/// boundary edge do not overlap.
pub fn overlaps(a: Aabb, b: Aabb) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
