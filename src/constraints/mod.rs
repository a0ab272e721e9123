use std::fmt::Debug;

use log::warn;
use snafu::ensure;

use crate::common::error::InvalidArgumentSnafu;
use crate::common::{PhysicsConfig, Result};
use crate::math::{Vec2, Vector};
use crate::objects::Body;
use crate::world::{BodyHandle, ObjectStack};

pub mod attraction_joint;
pub mod repulsion_joint;

// Re-export the joint types for easier access
pub use attraction_joint::AttractionJoint;
pub use repulsion_joint::RepulsionJoint;

/// A pairwise distance constraint enforced once per tick.
///
/// Joints hold no state between ticks: enforcement only reads the two
/// bodies' current positions and pushes corrective forces into them.
pub trait Joint: Debug {
    /// Applies this tick's corrective forces. A joint whose bodies are no
    /// longer registered does nothing.
    fn enforce(&self, bodies: &mut ObjectStack, config: &PhysicsConfig);

    /// The two bodies this joint connects.
    fn link(&self) -> &JointLink;

    /// Width of the line drawn for this joint, in pixels.
    fn line_width(&self) -> f32;

    /// Attachment points (body center plus offset) in world space.
    fn anchors(&self, bodies: &ObjectStack) -> Option<(Vec2, Vec2)> {
        let link = self.link();
        let a = bodies.get(link.body_a)?;
        let b = bodies.get(link.body_b)?;
        Some((a.center() + link.offset_a, b.center() + link.offset_b))
    }
}

/// Parameters shared by every joint kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLink {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    /// Force per unit of distance violation.
    pub hardness: f64,
    /// Attachment point of body A relative to its center. Only used for
    /// drawing.
    pub offset_a: Vec2,
    pub offset_b: Vec2,
}

impl JointLink {
    pub(crate) fn new(body_a: BodyHandle, body_b: BodyHandle, distance: f64, hardness: f64) -> Result<Self> {
        ensure!(
            body_a != body_b,
            InvalidArgumentSnafu {
                reason: "a joint cannot connect a body to itself",
            }
        );
        ensure!(
            distance.is_finite() && distance >= 0.0,
            InvalidArgumentSnafu {
                reason: format!("joint distance must be finite and non-negative, got {distance}"),
            }
        );
        ensure!(
            hardness.is_finite() && hardness >= 0.0,
            InvalidArgumentSnafu {
                reason: format!("joint hardness must be finite and non-negative, got {hardness}"),
            }
        );
        Ok(Self {
            body_a,
            body_b,
            hardness,
            offset_a: Vec2::ZERO,
            offset_b: Vec2::ZERO,
        })
    }

    /// Both bodies, plus the vector from A's top-left corner to B's.
    pub(crate) fn separation<'a>(&self, bodies: &'a mut ObjectStack) -> Option<(&'a mut Body, &'a mut Body, Vector)> {
        let Some((a, b)) = bodies.pair_mut(self.body_a, self.body_b) else {
            warn!(
                "Joint between {:?} and {:?} references a missing body",
                self.body_a, self.body_b
            );
            return None;
        };
        let separation = (b.position() - a.position()).to_vector();
        Some((a, b, separation))
    }
}
