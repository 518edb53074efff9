//! Planar convex-polygon overlap culling.
//!
//! Layers, leaf-first:
//! - `geom2`: points, segments, `ConvexHull`, containment and crossing
//!   predicates, the intersection polygon of two convex hulls, and seeded
//!   random hulls (`geom2::rand`).
//! - `cull`: pairwise overlap votes and the filtered collection.
//! - `io`: the `{"convex hulls": [...]}` JSON document.
//!
//! API Policy
//! - The crate is consumed by the `hullcull` CLI in this workspace. Breaking
//!   changes are fine when they make the geometry easier to audit.

pub mod cull;
mod error;
pub mod geom2;
pub mod io;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cull::{eliminate_overlapping, CullCfg, CullReport};
pub use error::{Error, Result};
pub use geom2::{ConvexHull, GeomCfg, Point, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cull::{
        cull_with_report, eliminate_overlapping, removal_mask, removal_mask_par, CullCfg,
        CullReport,
    };
    pub use crate::geom2::{
        det2, intersecting_polygon, intersection_vertices, point_in_polygon, segments_intersect,
        sort_ccw, ConvexHull, GeomCfg, Point, Segment,
    };
    pub use crate::geom2::rand::{draw_hull, draw_hulls, RadialCfg, ReplayToken, VertexCount};
    pub use crate::io::{hulls_from_json, hulls_to_json, HullsDoc};
}
