//! The boundary with whatever draws the simulation.
//!
//! The core never draws. It hands box and line geometry to a
//! [`RenderTarget`] implemented by the driver (a window, a test recorder...),
//! shifted by the offsets in [`RenderContext`].

use serde::{Deserialize, Serialize};

use crate::collision::Aabb;
use crate::math::Vec2;
use crate::world::BodyHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Draw-time state owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderContext {
    /// Translation applied to everything drawn (camera scroll).
    pub offset: Vec2,
}

impl RenderContext {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }
}

pub trait RenderTarget {
    type Error;

    /// Draws one body. `bounds` already includes the render offset; the
    /// body's appearance is up to the target.
    fn draw_box(&mut self, body: BodyHandle, bounds: Aabb) -> Result<(), Self::Error>;

    /// Draws a straight line between two points that already include the
    /// render offset.
    fn draw_line(&mut self, from: Vec2, to: Vec2, colour: Rgb, width: f32) -> Result<(), Self::Error>;
}
