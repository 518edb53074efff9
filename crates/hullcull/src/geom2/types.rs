//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the parallelism epsilon for segment crossing.
//! - `Point`: coordinate with derived polar angle and plain arithmetic methods.
//! - `Segment`: directed edge `p1 → p2`.
//! - `det2`: 2×2 determinant with two points as columns.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeomCfg {
    /// Segments whose direction determinant is below this are treated as parallel.
    pub eps_parallel: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_parallel: 1e-5 }
    }
}

/// Point (or vector) in the plane.
///
/// The polar angle is derived on demand, so it always agrees with `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Polar angle `atan2(y, x)` from the origin.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(&self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }

    /// Direction angle from `self` to `other`: `atan2(dy, dx)`.
    ///
    /// Vertically aligned points (`other.x == self.x`) get exactly `0`, not ±π/2.
    #[inline]
    pub fn angle_to(&self, other: &Point) -> f64 {
        if other.x == self.x {
            return 0.0;
        }
        (other.y - self.y).atan2(other.x - self.x)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Directed segment `p1 → p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Direction vector `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Point {
        self.p2.sub(&self.p1)
    }
}

/// Determinant of `[[p1.x, p2.x], [p1.y, p2.y]]` (points as columns).
///
/// Equals `p1.x * p2.y - p2.x * p1.y`; one shoelace term.
#[inline]
pub fn det2(p1: Point, p2: Point) -> f64 {
    Matrix2::from_columns(&[p1.to_vector(), p2.to_vector()]).determinant()
}
