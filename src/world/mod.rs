pub mod object_stack;
pub mod physics_world;
pub mod query;

pub use object_stack::{BodyHandle, ObjectStack};
pub use physics_world::PhysicsWorld;
pub use query::{Comparison, Field, Query};
