//! Force functions. Each one changes a body's velocity for one tick
//! (semi-implicit Euler over `PhysicsConfig::step`) and records the force in
//! the body's per-tick buffer, where collision resolution picks it up.

use crate::common::config::DRAG_CORRECTION;
use crate::common::PhysicsConfig;
use crate::math::Vector;
use crate::objects::Body;

/// Applies `force` to the body: `v += F / m * step` on both axes.
pub fn apply_vector_force(body: &mut Body, force: Vector, config: &PhysicsConfig) {
    let (x, y) = force.to_projections();
    let step = config.step();
    body.velocity.x += x / body.mass() * step;
    body.velocity.y += y / body.mass() * step;
    body.record_force(force);
}

/// Accelerates the body downward by `gravity * step`.
///
/// The weight is recorded at 180°, not at the 90° "down" of the vector
/// convention. Collision push-through selects forces by angle, so this
/// bookkeeping angle decides which side a body's weight is transmitted to.
pub fn apply_gravity(body: &mut Body, config: &PhysicsConfig) {
    body.velocity.y += config.gravity * config.step();
    let weight = config.gravity * body.mass();
    let angle = if weight >= 0.0 { 180.0 } else { 0.0 };
    body.record_force(Vector::polar(weight.abs(), angle));
}

/// Quadratic drag opposing the velocity on each axis independently.
///
/// The drag vector is applied through [`apply_vector_force`] and then
/// recorded a second time, so it weighs double in push-through.
pub fn apply_air_resistance(body: &mut Body, config: &PhysicsConfig) {
    let dims = body.size() * DRAG_CORRECTION;
    let velocity = body.velocity;
    let per_axis = |speed: f64, extent: f64| {
        let drag = config.aerodynamic_resistance
            * (config.air_density * speed * speed / 2.0)
            * extent
            * extent;
        if speed > 0.0 {
            -drag
        } else {
            drag
        }
    };

    let drag = Vector::from_projections(per_axis(velocity.x, dims.x), per_axis(velocity.y, dims.y));
    apply_vector_force(body, drag, config);
    body.record_force(drag);
}

/// The force that changes a body's speed by `velocity` within one tick.
pub fn velocity_to_force(velocity: f64, mass: f64, config: &PhysicsConfig) -> f64 {
    velocity / config.step() * mass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Material;
    use crate::math::Vec2;
    const EPSILON: f64 = 1e-9;

    fn test_body(mass: f64) -> Body {
        Body::new(Vec2::ZERO, Vec2::new(10.0, 10.0), mass, Material::BASIC).unwrap()
    }

    #[test]
    fn test_apply_vector_force() {
        let config = PhysicsConfig::default();
        let mut body = test_body(2.0);
        let force = Vector::new(10.0, 0.0).unwrap();
        apply_vector_force(&mut body, force, &config);

        // a = F/m = 5, dv = a * 0.01
        assert!((body.velocity.x - 0.05).abs() < EPSILON);
        assert!(body.velocity.y.abs() < EPSILON);
        assert_eq!(body.accumulated_forces(), &[force]);
    }

    #[test]
    fn test_apply_vector_force_respects_time_scale() {
        let config = PhysicsConfig {
            time_scale: 2.0,
            ..PhysicsConfig::default()
        };
        let mut body = test_body(1.0);
        apply_vector_force(&mut body, Vector::new(1.0, 90.0).unwrap(), &config);
        assert!((body.velocity.y - 0.02).abs() < EPSILON);
    }

    #[test]
    fn test_apply_gravity() {
        let config = PhysicsConfig::default();
        let mut body = test_body(3.0);
        apply_gravity(&mut body, &config);

        assert!((body.velocity.y - 0.098).abs() < EPSILON);
        assert_eq!(body.velocity.x, 0.0);
        let forces = body.accumulated_forces();
        assert_eq!(forces.len(), 1);
        assert!((forces[0].magnitude() - 9.8 * 3.0).abs() < EPSILON);
        assert_eq!(forces[0].angle(), 180.0);
    }

    #[test]
    fn test_air_resistance_opposes_motion_and_is_recorded_twice() {
        let config = PhysicsConfig::default();
        let mut body = test_body(1.0).with_velocity(Vec2::new(10.0, -4.0));
        apply_air_resistance(&mut body, &config);

        let extent = 10.0 * DRAG_CORRECTION;
        let drag_x = 1.05 * (1.275 * 100.0 / 2.0) * extent * extent;
        let drag_y = 1.05 * (1.275 * 16.0 / 2.0) * extent * extent;

        assert!((body.velocity.x - (10.0 - drag_x * 0.01)).abs() < EPSILON);
        assert!((body.velocity.y - (-4.0 + drag_y * 0.01)).abs() < EPSILON);

        let forces = body.accumulated_forces();
        assert_eq!(forces.len(), 2);
        assert_eq!(forces[0], forces[1]);
        let (fx, fy) = forces[0].to_projections();
        assert!((fx + drag_x).abs() < EPSILON);
        assert!((fy - drag_y).abs() < EPSILON);
    }

    #[test]
    fn test_air_resistance_at_rest_is_zero() {
        let config = PhysicsConfig::default();
        let mut body = test_body(1.0);
        apply_air_resistance(&mut body, &config);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(body.accumulated_forces().iter().all(|f| f.magnitude() == 0.0));
    }

    #[test]
    fn test_velocity_to_force() {
        let config = PhysicsConfig::default();
        // dv = F/m * 0.01  =>  F = dv / 0.01 * m
        assert!((velocity_to_force(0.5, 2.0, &config) - 100.0).abs() < EPSILON);
    }
}
