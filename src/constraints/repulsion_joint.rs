use log::trace;

use super::{Joint, JointLink};
use crate::common::{PhysicsConfig, Result};
use crate::integration::forces::apply_vector_force;
use crate::math::{Vec2, Vector};
use crate::world::{BodyHandle, ObjectStack};

/// Spring-like joint that only repels: pushes two bodies apart while they
/// are closer than `min_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepulsionJoint {
    pub link: JointLink,
    pub min_distance: f64,
}

impl RepulsionJoint {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, min_distance: f64, hardness: f64) -> Result<Self> {
        Ok(Self {
            link: JointLink::new(body_a, body_b, min_distance, hardness)?,
            min_distance,
        })
    }

    pub fn with_offsets(mut self, offset_a: Vec2, offset_b: Vec2) -> Self {
        self.link.offset_a = offset_a;
        self.link.offset_b = offset_b;
        self
    }
}

impl Joint for RepulsionJoint {
    /// Applies `(min_distance - distance) * hardness` to both bodies, each
    /// away from the other.
    fn enforce(&self, bodies: &mut ObjectStack, config: &PhysicsConfig) {
        let Some((a, b, separation)) = self.link.separation(bodies) else {
            return;
        };
        let distance = separation.magnitude();
        if distance >= self.min_distance {
            return;
        }

        let magnitude = (self.min_distance - distance) * self.link.hardness;
        trace!(
            "spring {:?}-{:?} compressed by {:.3}, pushing with {magnitude:.3}",
            self.link.body_a,
            self.link.body_b,
            self.min_distance - distance
        );
        // Same directions as the rope, reversed.
        apply_vector_force(a, -Vector::polar(magnitude, separation.angle()), config);
        apply_vector_force(b, -Vector::polar(magnitude, separation.angle() - 180.0), config);
    }

    fn link(&self) -> &JointLink {
        &self.link
    }

    fn line_width(&self) -> f32 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Material;
    use crate::objects::Body;
    const EPSILON: f64 = 1e-9;

    fn two_bodies(offset: Vec2) -> (ObjectStack, BodyHandle, BodyHandle) {
        let mut stack = ObjectStack::new();
        let size = Vec2::new(10.0, 10.0);
        let a = stack.insert(Body::new(Vec2::ZERO, size, 1.0, Material::BASIC).unwrap());
        let b = stack.insert(Body::new(offset, size, 1.0, Material::BASIC).unwrap());
        (stack, a, b)
    }

    #[test]
    fn test_enforce_compressed_pushes_apart() {
        let (mut stack, a, b) = two_bodies(Vec2::new(30.0, 0.0));
        let joint = RepulsionJoint::new(a, b, 50.0, 2.0).unwrap();
        joint.enforce(&mut stack, &PhysicsConfig::default());

        let force_a = stack.get(a).unwrap().accumulated_forces()[0];
        let force_b = stack.get(b).unwrap().accumulated_forces()[0];
        assert!((force_a.magnitude() - 40.0).abs() < EPSILON);
        assert!((force_b.magnitude() - 40.0).abs() < EPSILON);

        let (ax, _) = force_a.to_projections();
        let (bx, _) = force_b.to_projections();
        assert!((ax + 40.0).abs() < EPSILON);
        assert!((bx - 40.0).abs() < EPSILON);
        assert!(stack.get(a).unwrap().velocity.x < 0.0);
        assert!(stack.get(b).unwrap().velocity.x > 0.0);
    }

    #[test]
    fn test_enforce_vertical_pair() {
        let (mut stack, a, b) = two_bodies(Vec2::new(0.0, 20.0));
        let joint = RepulsionJoint::new(a, b, 50.0, 1.0).unwrap();
        joint.enforce(&mut stack, &PhysicsConfig::default());

        // b is below a: a goes up, b goes down.
        let (_, ay) = stack.get(a).unwrap().accumulated_forces()[0].to_projections();
        let (_, by) = stack.get(b).unwrap().accumulated_forces()[0].to_projections();
        assert!((ay + 30.0).abs() < EPSILON);
        assert!((by - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_enforce_far_enough_is_noop() {
        let (mut stack, a, b) = two_bodies(Vec2::new(60.0, 0.0));
        let joint = RepulsionJoint::new(a, b, 50.0, 1.0).unwrap();
        joint.enforce(&mut stack, &PhysicsConfig::default());
        assert!(stack.get(a).unwrap().accumulated_forces().is_empty());
        assert!(stack.get(b).unwrap().accumulated_forces().is_empty());
    }

    #[test]
    fn test_line_width() {
        let (_, a, b) = two_bodies(Vec2::new(60.0, 0.0));
        assert_eq!(RepulsionJoint::new(a, b, 50.0, 1.0).unwrap().line_width(), 1.0);
    }
}
