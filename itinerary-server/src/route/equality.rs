//! "Same point" strategies.
//!
//! The deriver only draws a segment between two points it considers
//! different. Exact float equality is the default; a tolerance can be
//! swapped in when coordinates come from independent geocoder lookups.

use crate::domain::Coordinate;

/// Decides whether two coordinates are the same point for drawing purposes.
pub trait PointEquality {
    /// Returns true if `a` and `b` should be treated as one point.
    fn same_point(&self, a: &Coordinate, b: &Coordinate) -> bool;
}

/// Exact float equality on both components.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactEquality;

impl PointEquality for ExactEquality {
    fn same_point(&self, a: &Coordinate, b: &Coordinate) -> bool {
        a.equals(b)
    }
}

/// Component-wise tolerance in degrees.
///
/// Two points are the same if both latitude and longitude differ by at most
/// `epsilon_degrees`.
#[derive(Debug, Clone, Copy)]
pub struct WithinTolerance {
    pub epsilon_degrees: f64,
}

impl WithinTolerance {
    /// Create a tolerance strategy. Negative or non-finite values behave as
    /// zero.
    pub fn new(epsilon_degrees: f64) -> Self {
        let epsilon_degrees = if epsilon_degrees.is_finite() {
            epsilon_degrees.max(0.0)
        } else {
            0.0
        };
        Self { epsilon_degrees }
    }
}

impl PointEquality for WithinTolerance {
    fn same_point(&self, a: &Coordinate, b: &Coordinate) -> bool {
        (a.latitude() - b.latitude()).abs() <= self.epsilon_degrees
            && (a.longitude() - b.longitude()).abs() <= self.epsilon_degrees
    }
}

impl<F> PointEquality for F
where
    F: Fn(&Coordinate, &Coordinate) -> bool,
{
    fn same_point(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self(a, b)
    }
}
