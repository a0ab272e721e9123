//! Error type shared by every fallible constructor in the crate.

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PhysicsError {
    #[snafu(display("Vector magnitude must be a finite number, zero or more, got {magnitude}"))]
    InvalidMagnitude { magnitude: f64 },

    #[snafu(display("Invalid argument: {reason}"))]
    InvalidArgument { reason: String },

    #[snafu(display("Body mass must be a positive finite number, got {mass}"))]
    InvalidMass { mass: f64 },

    #[snafu(display("Body dimensions must be positive, got {width}x{height}"))]
    InvalidDimensions { width: f64, height: f64 },

    #[snafu(display(
        "Material needs non-negative friction and bounciness, got friction {friction}, bounciness {bounciness}"
    ))]
    InvalidMaterial { friction: f64, bounciness: f64 },

    #[snafu(display("Could not parse physics configuration"))]
    ConfigParse { source: serde_json::Error },
}

pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;
