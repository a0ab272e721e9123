pub mod config;
pub mod error;
pub mod material;

pub use config::PhysicsConfig;
pub use error::{PhysicsError, Result};
pub use material::Material;
