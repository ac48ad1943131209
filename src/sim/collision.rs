//! Axis-aligned collision tests
//!
//! Every overlap decision in the game - player vs wall, ghost, pellet or
//! power pellet - goes through the same strict AABB predicate.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in board pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap test.
    ///
    /// Rectangles that share only an edge or a corner do NOT intersect; an
    /// entity may graze a wall exactly without triggering correction.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
