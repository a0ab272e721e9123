use log::trace;

use super::{Joint, JointLink};
use crate::common::{PhysicsConfig, Result};
use crate::integration::forces::apply_vector_force;
use crate::math::{Vec2, Vector};
use crate::world::{BodyHandle, ObjectStack};

/// Rope-like joint: pulls two bodies together once they drift further apart
/// than `max_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractionJoint {
    pub link: JointLink,
    pub max_distance: f64,
}

impl AttractionJoint {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, max_distance: f64, hardness: f64) -> Result<Self> {
        Ok(Self {
            link: JointLink::new(body_a, body_b, max_distance, hardness)?,
            max_distance,
        })
    }

    /// Sets where the rope is drawn from on each body, relative to its center.
    pub fn with_offsets(mut self, offset_a: Vec2, offset_b: Vec2) -> Self {
        self.link.offset_a = offset_a;
        self.link.offset_b = offset_b;
        self
    }
}

impl Joint for AttractionJoint {
    /// Applies `(distance - max_distance) * hardness` to both bodies, each
    /// towards the other.
    fn enforce(&self, bodies: &mut ObjectStack, config: &PhysicsConfig) {
        let Some((a, b, separation)) = self.link.separation(bodies) else {
            return;
        };
        let distance = separation.magnitude();
        if distance <= self.max_distance {
            return;
        }

        let magnitude = (distance - self.max_distance) * self.link.hardness;
        trace!(
            "rope {:?}-{:?} stretched by {:.3}, pulling with {magnitude:.3}",
            self.link.body_a,
            self.link.body_b,
            distance - self.max_distance
        );
        apply_vector_force(a, Vector::polar(magnitude, separation.angle()), config);
        apply_vector_force(b, Vector::polar(magnitude, separation.angle() - 180.0), config);
    }

    fn link(&self) -> &JointLink {
        &self.link
    }

    fn line_width(&self) -> f32 {
        3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Material, PhysicsError};
    use crate::objects::Body;
    const EPSILON: f64 = 1e-9;

    fn two_bodies(distance: f64) -> (ObjectStack, BodyHandle, BodyHandle) {
        let mut stack = ObjectStack::new();
        let size = Vec2::new(10.0, 10.0);
        let a = stack.insert(Body::new(Vec2::ZERO, size, 1.0, Material::BASIC).unwrap());
        let b = stack.insert(Body::new(Vec2::new(distance, 0.0), size, 1.0, Material::BASIC).unwrap());
        (stack, a, b)
    }

    #[test]
    fn test_attraction_joint_new() {
        let (_, a, b) = two_bodies(1.0);
        let joint = AttractionJoint::new(a, b, 100.0, 2.0).unwrap();
        assert_eq!(joint.link.body_a, a);
        assert_eq!(joint.link.body_b, b);
        assert_eq!(joint.max_distance, 100.0);
        assert_eq!(joint.link.hardness, 2.0);
    }

    #[test]
    fn test_attraction_joint_rejects_bad_parameters() {
        let (_, a, b) = two_bodies(1.0);
        assert!(matches!(
            AttractionJoint::new(a, b, -1.0, 1.0),
            Err(PhysicsError::InvalidArgument { .. })
        ));
        assert!(AttractionJoint::new(a, b, 1.0, f64::NAN).is_err());
        assert!(AttractionJoint::new(a, a, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_enforce_stretched_pulls_both_inward() {
        let (mut stack, a, b) = two_bodies(150.0);
        let joint = AttractionJoint::new(a, b, 100.0, 1.0).unwrap();
        joint.enforce(&mut stack, &PhysicsConfig::default());

        let body_a = stack.get(a).unwrap();
        let body_b = stack.get(b).unwrap();
        let (ax, ay) = body_a.accumulated_forces()[0].to_projections();
        let (bx, by) = body_b.accumulated_forces()[0].to_projections();
        assert!((ax - 50.0).abs() < EPSILON);
        assert!((bx + 50.0).abs() < EPSILON);
        assert!(ay.abs() < EPSILON && by.abs() < EPSILON);

        // dv = F / m * 0.01
        assert!((body_a.velocity.x - 0.5).abs() < EPSILON);
        assert!((body_b.velocity.x + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_enforce_slack_is_noop() {
        let (mut stack, a, b) = two_bodies(80.0);
        let joint = AttractionJoint::new(a, b, 100.0, 1.0).unwrap();
        joint.enforce(&mut stack, &PhysicsConfig::default());
        assert!(stack.get(a).unwrap().accumulated_forces().is_empty());
        assert!(stack.get(b).unwrap().accumulated_forces().is_empty());
        assert_eq!(stack.get(a).unwrap().velocity, Vec2::ZERO);
    }

    #[test]
    fn test_enforce_with_missing_body_is_noop() {
        let (mut stack, a, b) = two_bodies(150.0);
        let joint = AttractionJoint::new(a, b, 100.0, 1.0).unwrap();
        stack.remove(b);
        joint.enforce(&mut stack, &PhysicsConfig::default());
        assert!(stack.get(a).unwrap().accumulated_forces().is_empty());
    }

    #[test]
    fn test_anchors_use_centers_and_offsets() {
        let (stack, a, b) = two_bodies(150.0);
        let joint = AttractionJoint::new(a, b, 100.0, 1.0)
            .unwrap()
            .with_offsets(Vec2::new(1.0, 0.0), Vec2::new(0.0, -2.0));
        let (from, to) = joint.anchors(&stack).unwrap();
        assert_eq!(from, Vec2::new(6.0, 5.0));
        assert_eq!(to, Vec2::new(155.0, 3.0));
        assert_eq!(joint.line_width(), 3.0);
    }
}
