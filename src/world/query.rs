//! Typed lookups over registered bodies.

use serde::{Deserialize, Serialize};

use crate::objects::Body;

/// A numeric attribute of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Left,
    Top,
    Right,
    Bottom,
    Width,
    Height,
    Mass,
    VelocityX,
    VelocityY,
    Friction,
    Bounciness,
}

impl Field {
    pub fn read(self, body: &Body) -> f64 {
        let aabb = body.aabb();
        match self {
            Field::Left => aabb.left(),
            Field::Top => aabb.top(),
            Field::Right => aabb.right(),
            Field::Bottom => aabb.bottom(),
            Field::Width => body.size().x,
            Field::Height => body.size().y,
            Field::Mass => body.mass(),
            Field::VelocityX => body.velocity.x,
            Field::VelocityY => body.velocity.y,
            Field::Friction => body.material.friction(),
            Field::Bounciness => body.material.bounciness(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
            Comparison::Less => lhs < rhs,
            Comparison::LessOrEqual => lhs <= rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// `field <comparison> value`, e.g. "left edge greater than 100".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub field: Field,
    pub comparison: Comparison,
    pub value: f64,
}

impl Query {
    pub fn new(field: Field, comparison: Comparison, value: f64) -> Self {
        Self {
            field,
            comparison,
            value,
        }
    }

    pub fn matches(&self, body: &Body) -> bool {
        self.comparison.holds(self.field.read(body), self.value)
    }
}
