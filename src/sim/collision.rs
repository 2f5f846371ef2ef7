//! Axis-aligned box tests
//!
//! Boxes are anchored at their top-left corner. Overlap is strict on both
//! axes, so boxes that only share an edge do not collide.

use glam::Vec2;

use super::state::Entity;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Strict overlap of two top-left anchored rectangles
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

#[inline]
pub fn entities_overlap(a: &Entity, b: &Entity) -> bool {
    rects_overlap(a.pos, a.size, b.pos, b.size)
}

/// Keep a box of `size` fully inside the playfield
pub fn clamp_to_playfield(pos: Vec2, size: Vec2) -> Vec2 {
    let max = Vec2::new(CANVAS_WIDTH - size.x, CANVAS_HEIGHT - size.y).max(Vec2::ZERO);
    pos.clamp(Vec2::ZERO, max)
}
