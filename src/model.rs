use std::fmt;
use std::ops::Add;

use ordered_float::OrderedFloat;

/// Total cost of traversing one or more edges.
///
/// Costs are finite-or-infinite, non-negative and never NaN, which makes them
/// totally ordered and therefore usable as heap priorities and map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Sentinel for "no distance known yet" during relaxation.
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    /// Returns None if the value is negative or NaN.
    pub fn new(value: f64) -> Option<Self> {
        (value >= 0.0).then_some(Self(OrderedFloat(value)))
    }

    pub fn get(&self) -> f64 {
        self.0.into_inner()
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected weighted edge between two labelled nodes.
/// The endpoint order carries no meaning: (a, b, w) and (b, a, w) describe
/// the same connection and both traversal directions cost w.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }
}
