//! Circle and axis-aligned rectangle primitives
//!
//! Everything in the simulation collides as a circle; rectangles only bound
//! the world and the menu buttons.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A collision circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Touching or overlapping circles intersect. Compares squared distances.
    #[inline]
    pub fn intersects(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Axis-aligned rectangle, `min` is the lower-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Build world bounds from compass edges
    pub fn from_bounds(north: f32, south: f32, east: f32, west: f32) -> Self {
        Self {
            min: Vec2::new(west, south),
            max: Vec2::new(east, north),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        (self.max - self.min).abs()
    }

    /// Inclusive containment
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        !(point.x < self.min.x || point.x > self.max.x || point.y < self.min.y || point.y > self.max.y)
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Shrink every edge by `margin`. `None` if nothing is left.
    pub fn inset(&self, margin: f32) -> Option<Rect> {
        let shrunk = Rect::new(self.min + Vec2::splat(margin), self.max - Vec2::splat(margin));
        (shrunk.min.x <= shrunk.max.x && shrunk.min.y <= shrunk.max.y).then_some(shrunk)
    }
}
