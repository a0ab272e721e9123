pub mod forces;

pub use forces::{apply_air_resistance, apply_gravity, apply_vector_force, velocity_to_force};
