//! Global tunables consumed by the force functions.
//!
//! A configuration can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "gravity": 9.8,
//!   "time_scale": 1.0,
//!   "air_density": 1.275,
//!   "aerodynamic_resistance": 1.05
//! }
//! ```
//!
//! Missing keys fall back to the defaults above.

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::error::ConfigParseSnafu;
use super::Result;

/// Nominal length of one tick in seconds, before `time_scale` is applied.
pub const NOMINAL_STEP: f64 = 0.01;

/// Scales body dimensions down to the drag formula's units.
pub const DRAG_CORRECTION: f64 = 0.02786;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravitational acceleration, pointing down.
    pub gravity: f64,
    /// Time dilation applied to the nominal step. At 1, a tick is 0.01 s.
    pub time_scale: f64,
    pub air_density: f64,
    /// Aerodynamic resistance (drag) coefficient.
    pub aerodynamic_resistance: f64,
}

impl PhysicsConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context(ConfigParseSnafu)
    }

    /// Effective duration of one tick.
    pub fn step(&self) -> f64 {
        NOMINAL_STEP * self.time_scale
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            time_scale: 1.0,
            air_density: 1.275,
            aerodynamic_resistance: 1.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PhysicsError;

    #[test]
    fn test_default_config() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, 9.8);
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.step(), NOMINAL_STEP);
    }

    #[test]
    fn test_from_json_partial() {
        let config = PhysicsConfig::from_json(r#"{ "gravity": 1.62, "time_scale": 2.0 }"#).unwrap();
        assert_eq!(config.gravity, 1.62);
        assert_eq!(config.time_scale, 2.0);
        assert_eq!(config.air_density, 1.275);
        assert_eq!(config.aerodynamic_resistance, 1.05);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PhysicsConfig::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, PhysicsError::ConfigParse { .. }));
    }
}
