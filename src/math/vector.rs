//! Polar 2D vector used for forces.
//!
//! Angles are in degrees, measured in screen space: 0° points right, 90°
//! points down (y grows downward), ±180° points left and -90° points up.
//! Every arithmetic operation goes through the Cartesian projections and
//! rebuilds magnitude and angle with [`Vector::from_projections`], so the
//! stored angle of a computed vector always lies in [-180, 180].

use std::ops::{Add, Div, Mul, Neg, Sub};

use snafu::ensure;

use super::Vec2;
use crate::common::error::{InvalidArgumentSnafu, InvalidMagnitudeSnafu};
use crate::common::Result;

/// Division that yields 0 instead of failing when the divisor is 0.
pub(crate) fn safe_division(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    magnitude: f64,
    angle: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector {
        magnitude: 0.0,
        angle: 0.0,
    };

    /// Creates a vector from a length and an angle in degrees.
    ///
    /// Any finite angle is accepted. Fails with `InvalidMagnitude` when the
    /// magnitude is negative or not finite.
    pub fn new(magnitude: f64, angle: f64) -> Result<Self> {
        ensure!(
            magnitude.is_finite() && magnitude >= 0.0,
            InvalidMagnitudeSnafu { magnitude }
        );
        ensure!(
            angle.is_finite(),
            InvalidArgumentSnafu {
                reason: format!("vector angle must be finite, got {angle}"),
            }
        );
        Ok(Self { magnitude, angle })
    }

    /// Unchecked constructor for magnitudes already known to be non-negative.
    pub(crate) fn polar(magnitude: f64, angle: f64) -> Self {
        debug_assert!(!(magnitude < 0.0), "negative magnitude {magnitude}");
        Self { magnitude, angle }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Projections on the X and Y axis.
    pub fn to_projections(&self) -> (f64, f64) {
        let radians = self.angle.to_radians();
        (self.magnitude * radians.cos(), self.magnitude * radians.sin())
    }

    /// Builds a vector from its X and Y projections.
    ///
    /// The zero vector comes out with magnitude 0 and angle 0.
    pub fn from_projections(x: f64, y: f64) -> Self {
        let magnitude = (x * x + y * y).sqrt();
        if magnitude == 0.0 {
            return Self::ZERO;
        }
        // Rounding can push the ratio a hair past ±1.
        let ratio = safe_division(x, magnitude).clamp(-1.0, 1.0);
        let mut angle = ratio.acos().to_degrees();
        if y < 0.0 {
            angle = -angle;
        }
        Self { magnitude, angle }
    }

    /// Multiplies both projections by `scalar`. A negative scalar reverses
    /// the direction.
    pub fn scale(self, scalar: f64) -> Self {
        let (x, y) = self.to_projections();
        Self::from_projections(x * scalar, y * scalar)
    }

    /// Cartesian form of this vector.
    pub fn to_vec2(self) -> Vec2 {
        self.to_projections().into()
    }

    /// Sample points along the vector, `step` apart, shifted by `origin`.
    ///
    /// The first point sits one `step` from the origin and the last one never
    /// lies beyond the vector's tip. The returned iterator can be cloned to
    /// walk the same points again. Fails when the step is not positive or the
    /// vector has grown past finite range through arithmetic.
    pub fn list_points(&self, step: f64, origin: Vec2) -> Result<ListPoints> {
        ensure!(
            self.magnitude.is_finite() && self.angle.is_finite(),
            InvalidArgumentSnafu {
                reason: format!("cannot sample points along a non-finite vector {self:?}"),
            }
        );
        ensure!(
            step.is_finite() && step > 0.0,
            InvalidArgumentSnafu {
                reason: format!("point step must be a positive finite number, got {step}"),
            }
        );
        Ok(ListPoints {
            direction: Vector {
                magnitude: 1.0,
                angle: self.angle,
            }
            .to_vec2(),
            magnitude: self.magnitude,
            step,
            origin,
            index: 1,
        })
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (x1, y1) = self.to_projections();
        let (x2, y2) = other.to_projections();
        Self::from_projections(x1 + x2, y1 + y2)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let (x1, y1) = self.to_projections();
        let (x2, y2) = other.to_projections();
        Self::from_projections(x1 - x2, y1 - y2)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    /// Divides both projections; dividing by zero yields the zero vector.
    fn div(self, scalar: f64) -> Self {
        let (x, y) = self.to_projections();
        Self::from_projections(safe_division(x, scalar), safe_division(y, scalar))
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl std::iter::Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector::ZERO, |acc, v| acc + v)
    }
}

/// Iterator returned by [`Vector::list_points`].
#[derive(Debug, Clone)]
pub struct ListPoints {
    direction: Vec2,
    magnitude: f64,
    step: f64,
    origin: Vec2,
    index: u64,
}

impl Iterator for ListPoints {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        let length = self.step * self.index as f64;
        if length > self.magnitude {
            return None;
        }
        self.index += 1;
        Some(self.origin + self.direction * length)
    }
}
