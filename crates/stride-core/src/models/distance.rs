//! Distance model: a single value or a low/high range in miles.

use serde::{Deserialize, Serialize};

/// Planned distance of a workout, always stored in miles.
///
/// Templates write a single distance as a bare number and a range as a
/// two-element array (`[8, 10]`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Distance {
    /// A single distance
    Single(f64),
    /// An inclusive `[low, high]` range
    Range(f64, f64),
}

impl Distance {
    /// Representative value used for volume totals; ranges count their
    /// midpoint.
    pub fn midpoint(&self) -> f64 {
        match *self {
            Distance::Single(value) => value,
            Distance::Range(low, high) => (low + high) / 2.0,
        }
    }

    /// Applies `f` to every endpoint, keeping the shape.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Distance::Single(value) => Distance::Single(f(value)),
            Distance::Range(low, high) => Distance::Range(f(low), f(high)),
        }
    }
}
