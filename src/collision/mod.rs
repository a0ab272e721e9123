pub mod aabb;
pub mod resolution;

// Re-export key types
pub use aabb::Aabb;
pub use resolution::{Contacts, Direction};
