// Defines an Axis-Aligned Bounding Box

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// An Axis-Aligned Bounding Box in screen space: `min` is the top-left
/// corner and `max` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new Aabb.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        Aabb {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Box with its top-left corner at `origin`.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn top(&self) -> f64 {
        self.min.y
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// The same box moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Strict overlap of the vertical spans; touching edges do not count.
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.min.y < other.max.y && self.max.y > other.min.y
    }

    /// Strict overlap of the horizontal spans; touching edges do not count.
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }

    /// Checks if this box overlaps with another box on both axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }
}
