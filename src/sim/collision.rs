//! Collision predicates for axis-aligned boxes and the tile grid
//!
//! Pure functions only; the per-tick resolution order lives in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;

/// Axis-aligned box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict point containment: a point exactly on the boundary is outside.
    /// Projectile hits use this, so grazing shots on the hitbox edge miss.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x > self.min.x && p.x < max.x && p.y > self.min.y && p.y < max.y
    }

    /// Open-interval overlap test between two boxes
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Map a world position to the (row, col) of the tile containing it.
/// Returns `None` for positions outside the grid's coordinate range.
pub fn cell_at(pos: Vec2) -> Option<(usize, usize)> {
    if pos.x < 0.0 || pos.y < 0.0 {
        return None;
    }
    let col = (pos.x / TILE_SIZE).floor() as usize;
    let row = (pos.y / TILE_SIZE).floor() as usize;
    Some((row, col))
}

/// Soft separation for two overlapping boxes: the offset to apply to `a`,
/// pushing it away from `b`'s center along whichever axis has the larger
/// center-to-center distance. Zero when the boxes do not overlap.
pub fn separation_push(a: &Aabb, b: &Aabb, push: f32) -> Vec2 {
    if !a.intersects(b) {
        return Vec2::ZERO;
    }
    let delta = a.center() - b.center();
    if delta.x.abs() > delta.y.abs() {
        Vec2::new(push.copysign(delta.x), 0.0)
    } else {
        Vec2::new(0.0, push.copysign(delta.y))
    }
}
