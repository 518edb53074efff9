//! Intersection polygon of two convex hulls.
//!
//! Strategy
//! - Collect vertices of each hull lying inside the other, then every crossing
//!   of an edge of `a` with an edge of `b` (O(|a|·|b|)).
//! - Fewer than three points means no meaningful overlap.
//! - Order CCW around the first collected point and build a new hull.
//!
//! Coincident points are kept: repeated consecutive vertices add nothing to the
//! shoelace sum.

use super::hull::ConvexHull;
use super::predicates::segments_intersect;
use super::types::{GeomCfg, Point};

/// Boundary points of the overlap region of `a` and `b`, unordered.
///
/// Order: vertices of `a` inside `b`, vertices of `b` inside `a`, then edge
/// crossings row-major over the edges of `a`.
pub fn intersection_vertices(a: &ConvexHull, b: &ConvexHull, cfg: GeomCfg) -> Vec<Point> {
    let mut out = Vec::with_capacity(a.vertex_count() + b.vertex_count());
    out.extend(a.vertices().iter().copied().filter(|&p| b.contains(p)));
    out.extend(b.vertices().iter().copied().filter(|&p| a.contains(p)));
    for ea in a.edges() {
        for eb in b.edges() {
            if let Some(p) = segments_intersect(ea, eb, cfg.eps_parallel) {
                out.push(p);
            }
        }
    }
    out
}

/// Sort points by their direction angle seen from the first point (stable).
///
/// Keys come from `Point::angle_to`, so points vertically aligned with the pivot
/// share key `0` with the pivot itself. An empty slice is left as is.
pub fn sort_ccw(points: &mut [Point]) {
    let Some(&pivot) = points.first() else {
        return;
    };
    let mut keyed: Vec<(f64, Point)> = points.iter().map(|p| (pivot.angle_to(p), *p)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (slot, (_, p)) in points.iter_mut().zip(keyed) {
        *slot = p;
    }
}

/// Intersection polygon of two convex hulls, or `None` if they do not overlap.
///
/// The result carries the id of `a`.
pub fn intersecting_polygon(a: &ConvexHull, b: &ConvexHull, cfg: GeomCfg) -> Option<ConvexHull> {
    let mut points = intersection_vertices(a, b, cfg);
    if points.len() < 3 {
        return None;
    }
    sort_ccw(&mut points);
    ConvexHull::new(a.id(), points).ok()
}
