//! Coordinate types for the battle lane.
//!
//! The lane is a side view: `x` grows to the right (towards incoming enemies),
//! `y` grows downwards with the ground plane at a fixed `y`.

use serde::{Deserialize, Serialize};

/// Position of something on the lane, in lane units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LanePosition {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl LanePosition {
    /// Creates a new lane position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Signed horizontal gap from `self` to `other` (positive when `other` is ahead).
    #[must_use]
    pub fn gap_to(&self, other: &LanePosition) -> f32 {
        other.x - self.x
    }

    /// Returns a copy shifted by the given offsets.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned size of an entity's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Width in lane units
    pub width: f32,
    /// Height in lane units
    pub height: f32,
}

impl Extent {
    /// Creates a new extent.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
