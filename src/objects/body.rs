use log::trace;
use snafu::ensure;

use crate::collision::resolution::{self, Contacts};
use crate::collision::Aabb;
use crate::common::error::{InvalidDimensionsSnafu, InvalidMassSnafu};
use crate::common::{Material, PhysicsConfig, Result};
use crate::math::{Vec2, Vector};
use crate::render::{RenderContext, RenderTarget};
use crate::world::{BodyHandle, ObjectStack};

/// A rectangular physical entity.
///
/// The box is always axis-aligned and its size never changes after
/// construction. Forces applied during a tick are kept in a per-tick buffer
/// that collision resolution reads to decide how hard this body pushes on
/// what it runs into; the buffer is cleared once motion has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    // Geometry
    aabb: Aabb,
    size: Vec2,

    // Physical properties
    mass: f64,
    pub material: Material,

    // Primary state
    pub velocity: Vec2,

    /// Other bodies never transmit their force into this one.
    pub do_not_push: bool,
    /// Picked up by [`crate::PhysicsWorld::step`].
    pub affected_by_gravity: bool,
    /// Picked up by [`crate::PhysicsWorld::step`].
    pub air_resistance: bool,

    // Forces applied since the last call to `apply_motion`
    forces: Vec<Vector>,
    contacts: Contacts,
}

impl Body {
    /// Creates a body whose top-left corner sits at `position`.
    ///
    /// Fails when the mass is not a positive finite number or when either
    /// dimension is not positive.
    pub fn new(position: Vec2, size: Vec2, mass: f64, material: Material) -> Result<Self> {
        ensure!(mass.is_finite() && mass > 0.0, InvalidMassSnafu { mass });
        ensure!(
            size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0,
            InvalidDimensionsSnafu {
                width: size.x,
                height: size.y
            }
        );

        Ok(Self {
            aabb: Aabb::from_origin_size(position, size),
            size,
            mass,
            material,
            velocity: Vec2::ZERO,
            do_not_push: false,
            affected_by_gravity: true,
            air_resistance: true,
            forces: Vec::new(),
            contacts: Contacts::default(),
        })
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Turns the body into scenery: it cannot be pushed and ignores gravity
    /// and drag. It still collides with whatever moves into it.
    pub fn immovable(mut self) -> Self {
        self.do_not_push = true;
        self.affected_by_gravity = false;
        self.air_resistance = false;
        self
    }

    /// Top-left corner.
    pub fn position(&self) -> Vec2 {
        self.aabb.min
    }

    /// Moves the body without going through collision resolution.
    pub fn set_position(&mut self, position: Vec2) {
        self.aabb = Aabb::from_origin_size(position, self.size);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    pub fn center(&self) -> Vec2 {
        self.aabb.center()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Bodies touched during the last `apply_motion`, one per side.
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Forces applied since the last `apply_motion`.
    pub fn accumulated_forces(&self) -> &[Vector] {
        &self.forces
    }

    pub(crate) fn record_force(&mut self, force: Vector) {
        self.forces.push(force);
    }

    /// Moves the body by its velocity, resolving collisions against every
    /// body in `others` in the order right, up, left, down.
    ///
    /// `others` must not contain this body. Bodies it runs into may receive
    /// part of this body's accumulated force. The force buffer is empty
    /// afterwards.
    pub fn apply_motion(&mut self, others: &mut ObjectStack, config: &PhysicsConfig) {
        let (aabb, contacts) = resolution::resolve(self, others, config);
        trace!(
            "body moved {:?} -> {:?}, contacts {:?}",
            self.aabb.min,
            aabb.min,
            contacts
        );
        self.aabb = aabb;
        self.contacts = contacts;
        self.forces.clear();
    }

    /// Hands the body's current box, shifted by the render offset, to the
    /// render target.
    pub fn render<T: RenderTarget>(
        &self,
        handle: BodyHandle,
        ctx: &RenderContext,
        target: &mut T,
    ) -> Result<(), T::Error> {
        target.draw_box(handle, self.aabb.translated(ctx.offset))
    }
}
