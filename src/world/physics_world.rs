use log::{debug, trace, warn};
use snafu::ensure;

use super::{BodyHandle, ObjectStack};
use crate::common::error::InvalidArgumentSnafu;
use crate::common::{Material, PhysicsConfig, Result};
use crate::constraints::Joint;
use crate::integration::forces;
use crate::math::{Vec2, Vector};
use crate::objects::Body;
use crate::render::{RenderContext, RenderTarget, Rgb};

/// Owns every body and joint of a simulation together with its tunables.
///
/// A driver either calls [`PhysicsWorld::step`] once per frame, or runs the
/// phases itself in this order: force functions on each body,
/// [`PhysicsWorld::enforce_joints`], [`PhysicsWorld::apply_motion`] on each
/// body, [`PhysicsWorld::flush_removals`].
#[derive(Debug)]
pub struct PhysicsWorld {
    objects: ObjectStack,
    // Store joints as boxed trait objects
    joints: Vec<Box<dyn Joint>>,
    pub config: PhysicsConfig,
    pub render_context: RenderContext,
    pending_removals: Vec<BodyHandle>,
}

impl PhysicsWorld {
    /// Creates a new, empty world with default settings.
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        debug!("Creating physics world with {config:?}");
        Self {
            objects: ObjectStack::new(),
            joints: Vec::new(),
            config,
            render_context: RenderContext::default(),
            pending_removals: Vec::new(),
        }
    }

    /// Registers a body, making it collidable, and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = self.objects.insert(body);
        debug!("Registered body {handle:?}");
        handle
    }

    /// Builds a body and registers it in one go.
    pub fn spawn(&mut self, position: Vec2, size: Vec2, mass: f64, material: Material) -> Result<BodyHandle> {
        let body = Body::new(position, size, mass, material)?;
        Ok(self.add_body(body))
    }

    /// Adds any joint that implements the `Joint` trait and returns its index.
    ///
    /// Both bodies must be registered and not scheduled for removal.
    pub fn add_joint(&mut self, joint: impl Joint + 'static) -> Result<usize> {
        let link = joint.link();
        for handle in [link.body_a, link.body_b] {
            ensure!(
                self.objects.contains(handle) && !self.pending_removals.contains(&handle),
                InvalidArgumentSnafu {
                    reason: format!("joint references unregistered body {handle:?}"),
                }
            );
        }
        self.joints.push(Box::new(joint));
        Ok(self.joints.len() - 1)
    }

    pub fn remove_joint(&mut self, index: usize) -> Option<Box<dyn Joint>> {
        (index < self.joints.len()).then(|| self.joints.remove(index))
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.objects.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.objects.get_mut(handle)
    }

    pub fn objects(&self) -> &ObjectStack {
        &self.objects
    }

    pub fn joints(&self) -> &[Box<dyn Joint>] {
        &self.joints
    }

    fn with_body(&mut self, handle: BodyHandle, apply: impl FnOnce(&mut Body, &PhysicsConfig)) {
        match self.objects.get_mut(handle) {
            Some(body) => apply(body, &self.config),
            None => warn!("Ignoring force on unknown body {handle:?}"),
        }
    }

    pub fn apply_gravity(&mut self, handle: BodyHandle) {
        self.with_body(handle, forces::apply_gravity);
    }

    pub fn apply_vector_force(&mut self, handle: BodyHandle, force: Vector) {
        self.with_body(handle, |body, config| forces::apply_vector_force(body, force, config));
    }

    pub fn apply_air_resistance(&mut self, handle: BodyHandle) {
        self.with_body(handle, forces::apply_air_resistance);
    }

    /// Enforces every joint once.
    pub fn enforce_joints(&mut self) {
        for joint in &self.joints {
            joint.enforce(&mut self.objects, &self.config);
        }
    }

    /// Moves one body by its velocity, resolving collisions against every
    /// other registered body.
    pub fn apply_motion(&mut self, handle: BodyHandle) {
        let Some(mut body) = self.objects.take(handle) else {
            warn!("Cannot move unknown body {handle:?}");
            return;
        };
        body.apply_motion(&mut self.objects, &self.config);
        self.objects.restore(handle, body);
    }

    /// Schedules a body for removal. It keeps colliding until
    /// [`PhysicsWorld::flush_removals`] runs, which `step` does at the end of
    /// every tick.
    pub fn remove_body(&mut self, handle: BodyHandle) {
        if !self.objects.contains(handle) {
            warn!("Cannot remove unknown body {handle:?}");
            return;
        }
        if !self.pending_removals.contains(&handle) {
            self.pending_removals.push(handle);
        }
    }

    /// Applies scheduled removals and returns the detached bodies. Joints
    /// attached to a removed body are dropped with it.
    pub fn flush_removals(&mut self) -> Vec<Body> {
        let removed: Vec<Body> = self
            .pending_removals
            .drain(..)
            .filter_map(|handle| self.objects.remove(handle))
            .collect();

        if !removed.is_empty() {
            let objects = &self.objects;
            let before = self.joints.len();
            self.joints.retain(|joint| {
                let link = joint.link();
                objects.contains(link.body_a) && objects.contains(link.body_b)
            });
            debug!(
                "Removed {} bodies and {} dependent joints",
                removed.len(),
                before - self.joints.len()
            );
        }
        removed
    }

    /// First registered body matching `predicate`.
    pub fn fetch_one(&self, mut predicate: impl FnMut(&Body) -> bool) -> Option<BodyHandle> {
        self.objects
            .iter()
            .find(|(_, body)| predicate(body))
            .map(|(handle, _)| handle)
    }

    /// Up to `amount` bodies matching `predicate`, in registry order.
    pub fn fetch(&self, mut predicate: impl FnMut(&Body) -> bool, amount: usize) -> Result<Vec<BodyHandle>> {
        ensure!(
            amount >= 1,
            InvalidArgumentSnafu {
                reason: "amount must be a natural number",
            }
        );
        Ok(self
            .objects
            .iter()
            .filter(|(_, body)| predicate(body))
            .map(|(handle, _)| handle)
            .take(amount)
            .collect())
    }

    /// Advances the simulation by one tick.
    ///
    /// Applies gravity and air resistance to the bodies that opted in,
    /// enforces joints, moves every body in registry order and finally
    /// applies pending removals.
    pub fn step(&mut self) {
        let config = self.config;
        for (_, body) in self.objects.iter_mut() {
            if body.affected_by_gravity {
                forces::apply_gravity(body, &config);
            }
            if body.air_resistance {
                forces::apply_air_resistance(body, &config);
            }
        }

        self.enforce_joints();

        for handle in self.objects.handles() {
            self.apply_motion(handle);
        }

        self.flush_removals();
        trace!("Tick done with {} bodies", self.objects.len());
    }

    /// Draws every body, then every joint in `joint_colour`.
    pub fn render<T: RenderTarget>(&self, target: &mut T, joint_colour: Rgb) -> Result<(), T::Error> {
        let offset = self.render_context.offset;
        for (handle, body) in self.objects.iter() {
            body.render(handle, &self.render_context, target)?;
        }
        for joint in &self.joints {
            if let Some((from, to)) = joint.anchors(&self.objects) {
                target.draw_line(from + offset, to + offset, joint_colour, joint.line_width())?;
            }
        }
        Ok(())
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
