//! Per-axis collision resolution for a moving body.
//!
//! A body's box is moved by its velocity into a tentative box, which is then
//! checked against every other registered body in four passes: right, up,
//! left, down. Each pass only clamps the edges of its own direction, so a
//! body can be stopped on more than one side in the same tick. The fixed
//! order makes diagonal corner hits resolve asymmetrically.

use log::trace;

use super::Aabb;
use crate::common::PhysicsConfig;
use crate::integration::forces::apply_vector_force;
use crate::math::{Vec2, Vector};
use crate::objects::Body;
use crate::world::{BodyHandle, ObjectStack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// The order the passes run in.
    pub const PASS_ORDER: [Direction; 4] = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];

    /// Whether `obstacle` can be hit at all when moving this way from
    /// `current`. Bodies entirely behind the moving edge are skipped.
    fn reaches(self, current: &Aabb, obstacle: &Aabb) -> bool {
        match self {
            Direction::Right => obstacle.right() > current.left(),
            Direction::Up => obstacle.top() < current.bottom(),
            Direction::Left => obstacle.left() < current.right(),
            Direction::Down => obstacle.bottom() > current.top(),
        }
    }

    /// The tentative leading edge crosses the obstacle's facing edge while
    /// the current box overlaps it on the other axis.
    fn hits(self, current: &Aabb, tentative: &Aabb, obstacle: &Aabb) -> bool {
        match self {
            Direction::Right => tentative.right() > obstacle.left() && current.overlaps_vertically(obstacle),
            Direction::Up => tentative.top() < obstacle.bottom() && current.overlaps_horizontally(obstacle),
            Direction::Left => tentative.left() < obstacle.right() && current.overlaps_vertically(obstacle),
            Direction::Down => tentative.bottom() > obstacle.top() && current.overlaps_horizontally(obstacle),
        }
    }

    /// Puts the tentative box flush against the obstacle, keeping its size.
    fn clamp(self, tentative: &mut Aabb, obstacle: &Aabb, size: Vec2) {
        match self {
            Direction::Right => {
                tentative.min.x = obstacle.left() - size.x;
                tentative.max.x = tentative.min.x + size.x;
            }
            Direction::Up => {
                tentative.min.y = obstacle.bottom();
                tentative.max.y = obstacle.bottom() + size.y;
            }
            Direction::Left => {
                tentative.min.x = obstacle.right();
                tentative.max.x = tentative.min.x + size.x;
            }
            Direction::Down => {
                tentative.min.y = obstacle.top() - size.y;
                tentative.max.y = obstacle.top();
            }
        }
    }

    fn is_moving_towards(self, velocity: Vec2) -> bool {
        match self {
            Direction::Right => velocity.x > 0.0,
            Direction::Up => velocity.y < 0.0,
            Direction::Left => velocity.x < 0.0,
            Direction::Down => velocity.y > 0.0,
        }
    }

    /// Angles (degrees, as stored) of the forces that push into an
    /// obstacle on this side.
    fn pushes(self, angle: f64) -> bool {
        match self {
            Direction::Right => 0.0 < angle && angle < 180.0,
            Direction::Up => (270.0 < angle && angle <= 360.0) || (0.0 <= angle && angle < 90.0),
            Direction::Left => 180.0 < angle && angle < 360.0,
            Direction::Down => 180.0 < angle && angle < 270.0,
        }
    }

    /// Reverses the velocity component along this direction, keeping
    /// `bounciness` of it.
    fn bounce(self, velocity: &mut Vec2, bounciness: f64) {
        match self {
            Direction::Right | Direction::Left => velocity.x -= velocity.x * (1.0 + bounciness),
            Direction::Up | Direction::Down => velocity.y -= velocity.y * (1.0 + bounciness),
        }
    }
}

/// The body touched on each side during the last motion step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub right: Option<BodyHandle>,
    pub up: Option<BodyHandle>,
    pub left: Option<BodyHandle>,
    pub down: Option<BodyHandle>,
}

impl Contacts {
    pub fn get(&self, direction: Direction) -> Option<BodyHandle> {
        match direction {
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Left => self.left,
            Direction::Down => self.down,
        }
    }

    fn set(&mut self, direction: Direction, handle: BodyHandle) {
        let slot = match direction {
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Left => &mut self.left,
            Direction::Down => &mut self.down,
        };
        *slot = Some(handle);
    }

    pub fn is_empty(&self) -> bool {
        Direction::PASS_ORDER.iter().all(|&d| self.get(d).is_none())
    }
}

fn sum_where(forces: &[Vector], mut keep: impl FnMut(f64) -> bool) -> Vector {
    forces.iter().copied().filter(|f| keep(f.angle())).sum()
}

/// Friction against the surface the body lands on, applied to the body
/// itself against its horizontal motion. A body with no horizontal motion
/// gets none.
fn apply_friction(body: &mut Body, surface: &Body, config: &PhysicsConfig) {
    let heading = if body.velocity.x > 0.0 {
        180.0
    } else if body.velocity.x < 0.0 {
        0.0
    } else {
        return;
    };
    let normal = sum_where(body.accumulated_forces(), |angle| 90.0 < angle && angle < 270.0);
    let magnitude = body.material.friction() * surface.material.friction() * normal.to_projections().1;
    // A normal pointing away from the surface presses nothing.
    if let Ok(friction) = Vector::new(magnitude, heading) {
        apply_vector_force(body, friction, config);
    }
}

/// Runs the four passes and returns the final box and the contacts found.
/// The body's velocity is updated in place; its box is left untouched.
pub(crate) fn resolve(body: &mut Body, others: &mut ObjectStack, config: &PhysicsConfig) -> (Aabb, Contacts) {
    let current = body.aabb();
    let size = body.size();
    let mut tentative = current.translated(body.velocity);
    let mut contacts = Contacts::default();

    for direction in Direction::PASS_ORDER {
        for (handle, other) in others.iter_mut() {
            let obstacle = other.aabb();
            if !direction.reaches(&current, &obstacle) || !direction.hits(&current, &tentative, &obstacle) {
                continue;
            }

            direction.clamp(&mut tentative, &obstacle, size);
            contacts.set(direction, handle);
            trace!("collision {direction:?} with {handle:?}");

            if !direction.is_moving_towards(body.velocity) {
                continue;
            }
            if direction == Direction::Down {
                apply_friction(body, other, config);
            }
            if !other.do_not_push {
                let push = sum_where(body.accumulated_forces(), |angle| direction.pushes(angle));
                apply_vector_force(other, push, config);
            }
            direction.bounce(&mut body.velocity, body.material.bounciness());
        }
    }

    (tentative, contacts)
}
