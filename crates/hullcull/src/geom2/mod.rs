//! 2D convex-polygon geometry (vertex representation).
//!
//! Purpose
//! - Provide `ConvexHull` with an always-consistent cached area and edge list.
//! - Keep the predicates small and explicit: ray-cast containment, parametric
//!   segment crossing, and the intersection polygon of two convex hulls.
//!
//! Conventions
//! - Vertices are assumed (not verified) to be convex and CCW.
//! - Containment uses a half-open `[y0, y1)` crossing rule; `Point::angle_to`
//!   returns `0` for vertically aligned points. Both are load-bearing for the
//!   CCW sort in `intersect`.
//!
//! Code cross-refs: `ConvexHull`, `Point`, `Segment`, `GeomCfg`

mod hull;
mod intersect;
mod predicates;
pub mod rand;
mod types;
pub(crate) mod util;

pub use hull::ConvexHull;
pub use intersect::{intersecting_polygon, intersection_vertices, sort_ccw};
pub use predicates::{point_in_polygon, segments_intersect};
pub use types::{det2, GeomCfg, Point, Segment};
