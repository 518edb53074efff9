//! Convex polygon entity with cached area and derived edges.

use super::predicates::point_in_polygon;
use super::types::{det2, Point, Segment};
use crate::error::{Error, Result};

/// Minimum number of vertices of a polygon.
const MIN_VERTICES: usize = 3;

/// Convex polygon in V-rep.
///
/// Invariants:
/// - `vertices.len() >= 3` (convexity and CCW order are assumed, not checked).
/// - `edges[i] = (vertices[i], vertices[(i + 1) % n])`.
/// - `area` is the absolute shoelace area of the current vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    id: i64,
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    area: f64,
}

impl ConvexHull {
    /// Build from a vertex list; fails with `InvalidPolygon` on fewer than 3 vertices.
    pub fn new(id: i64, vertices: Vec<Point>) -> Result<Self> {
        check_vertex_count(&vertices)?;
        let area = compute_area(&vertices);
        let edges = compute_edges(&vertices);
        Ok(Self {
            id,
            vertices,
            edges,
            area,
        })
    }

    /// Replace all vertices; area and edges are recomputed together.
    ///
    /// On error the hull is left untouched.
    pub fn replace_vertices(&mut self, vertices: Vec<Point>) -> Result<()> {
        check_vertex_count(&vertices)?;
        self.area = compute_area(&vertices);
        self.edges = compute_edges(&vertices);
        self.vertices = vertices;
        Ok(())
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ray-cast containment (see `point_in_polygon`).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(&self.vertices, p)
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

fn check_vertex_count(vertices: &[Point]) -> Result<()> {
    if vertices.len() < MIN_VERTICES {
        return Err(Error::InvalidPolygon {
            vertices: vertices.len(),
        });
    }
    Ok(())
}

/// Shoelace: `|Σ det(v_i, v_{i+1})| / 2` with wraparound; orientation-agnostic.
fn compute_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let sum: f64 = (0..n)
        .map(|i| det2(vertices[i], vertices[(i + 1) % n]))
        .sum();
    (0.5 * sum).abs()
}

fn compute_edges(vertices: &[Point]) -> Vec<Segment> {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}
