use std::path::PathBuf;

/// Failures surfaced by the library.
///
/// Degenerate geometry (near-parallel edges, fewer than three overlap points)
/// is not an error; those paths return `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A polygon needs at least three vertices.
    #[error("invalid polygon: {vertices} vertices given, at least 3 required")]
    InvalidPolygon { vertices: usize },

    /// Overlap threshold must be a finite fraction in [0, 1].
    #[error("invalid overlap threshold {0}: expected a value in [0, 1]")]
    InvalidThreshold(f64),

    /// Parallel-segment tolerance must be finite and non-negative.
    #[error("invalid parallel tolerance {0}: expected a finite value >= 0")]
    InvalidTolerance(f64),

    #[error("malformed hull document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
