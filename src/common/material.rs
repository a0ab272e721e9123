//! Defines surface properties shared between bodies.

use serde::{Deserialize, Serialize};
use snafu::ensure;

use super::error::{InvalidMaterialSnafu, PhysicsError};
use super::Result;

/// Friction and bounce behaviour of a body's surface.
///
/// Materials are immutable once built and are copied into every body that
/// uses them, so one preset can back any number of bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMaterial")]
pub struct Material {
    /// Friction multiplier. 0 makes a perfectly slippery surface.
    friction: f64,
    /// Share of the approach speed kept after a collision.
    /// 0 = the body stops on that axis, 1 = fully elastic.
    bounciness: f64,
}

impl Material {
    /// General purpose, barely bouncy.
    pub const BASIC: Material = Material {
        friction: 1.0,
        bounciness: 0.06,
    };
    /// Perfectly elastic.
    pub const REBOUNCE: Material = Material {
        friction: 1.0,
        bounciness: 1.0,
    };
    /// No friction and no bounce.
    pub const SUPERSLIP: Material = Material {
        friction: 0.0,
        bounciness: 0.0,
    };

    /// Creates a new material. Both values must be zero or more.
    pub fn new(friction: f64, bounciness: f64) -> Result<Self> {
        ensure!(
            friction >= 0.0 && bounciness >= 0.0,
            InvalidMaterialSnafu {
                friction,
                bounciness
            }
        );
        Ok(Self {
            friction,
            bounciness,
        })
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn bounciness(&self) -> f64 {
        self.bounciness
    }
}

/// Unvalidated form read from serialized data.
#[derive(Deserialize)]
struct RawMaterial {
    friction: f64,
    bounciness: f64,
}

impl TryFrom<RawMaterial> for Material {
    type Error = PhysicsError;

    fn try_from(raw: RawMaterial) -> Result<Self> {
        Material::new(raw.friction, raw.bounciness)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::BASIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PhysicsError;

    #[test]
    fn test_material_new() {
        let m = Material::new(0.5, 0.25).unwrap();
        assert_eq!(m.friction(), 0.5);
        assert_eq!(m.bounciness(), 0.25);
    }

    #[test]
    fn test_material_rejects_negative_values() {
        assert!(matches!(
            Material::new(-0.1, 0.5),
            Err(PhysicsError::InvalidMaterial { .. })
        ));
        assert!(Material::new(0.1, -0.5).is_err());
        assert!(Material::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let m: Material = serde_json::from_str(r#"{ "friction": 0.3, "bounciness": 0.7 }"#).unwrap();
        assert_eq!(m, Material::new(0.3, 0.7).unwrap());
        assert!(serde_json::from_str::<Material>(r#"{ "friction": -1.0, "bounciness": 0.0 }"#).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Material::default(), Material::BASIC);
        assert_eq!(Material::REBOUNCE.bounciness(), 1.0);
        assert_eq!(Material::SUPERSLIP.friction(), 0.0);
    }
}
