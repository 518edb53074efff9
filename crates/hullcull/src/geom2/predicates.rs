//! Containment and crossing predicates.
//!
//! - `point_in_polygon`: ray cast toward `x = -inf`, half-open y rule.
//! - `segments_intersect`: Cramer's rule on `p1 + t(p2-p1) = p3 + u(p4-p3)`.

use super::types::{Point, Segment};

/// Ray-casting containment over a closed vertex loop.
///
/// The ray runs from `p` toward `(-inf, p.y)`. An edge counts when `p.y` lies in
/// `[y0, y1)` or `[y1, y0)`, so a vertex exactly at height `p.y` is counted once.
/// Points on the boundary are classified deterministically but not symmetrically.
pub fn point_in_polygon(vertices: &[Point], p: Point) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let crosses_height = (a.y <= p.y && b.y > p.y) || (b.y <= p.y && a.y > p.y);
        if crosses_height {
            // a.y != b.y here, so the division is safe.
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if cross_x < p.x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Crossing point of two closed segments, if any.
///
/// Returns `None` when `|det| < eps`: parallel and collinear-overlapping segments
/// are not reported (overlap regions are picked up by containment instead).
pub fn segments_intersect(l1: &Segment, l2: &Segment, eps: f64) -> Option<Point> {
    let a = l1.direction();
    // second direction reversed: p3 - p4
    let b = l2.p1.sub(&l2.p2);
    let d = l2.p1.sub(&l1.p1);

    let det = a.x * b.y - a.y * b.x;
    if det.abs() < eps {
        return None;
    }

    let t = (d.x * b.y - d.y * b.x) / det;
    let u = (a.x * d.y - a.y * d.x) / det;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(l1.p1.add(&a.scale(t)))
}
