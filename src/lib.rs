//! Continuum: a small 2D physics simulator for axis-aligned rectangular
//! bodies driven one tick at a time.

pub mod math;
pub mod common;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod constraints;
pub mod world;
pub mod render;

// Re-export key types for easier use
pub use math::{Vec2, Vector};
pub use common::{Material, PhysicsConfig, PhysicsError, Result};
pub use objects::Body;
pub use collision::{Aabb, Contacts, Direction};
pub use integration::forces::{apply_air_resistance, apply_gravity, apply_vector_force, velocity_to_force};
pub use constraints::{AttractionJoint, Joint, RepulsionJoint};
pub use world::{BodyHandle, Comparison, Field, ObjectStack, PhysicsWorld, Query};
pub use render::{RenderContext, RenderTarget, Rgb};
