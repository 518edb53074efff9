use super::types::Point;

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.sub(&a);
    let ac = c.sub(&a);
    ab.x * ac.y - ab.y * ac.x
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order, no collinear points).
///
/// Returns `None` if fewer than 3 hull vertices remain.
pub(crate) fn convex_hull_ccw(points: &[Point]) -> Option<Vec<Point>> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| a.sub(b).to_vector().norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    (hull.len() >= 3).then_some(hull)
}
