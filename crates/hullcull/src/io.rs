//! JSON document of convex hulls.
//!
//! Wire shape (field names are fixed):
//! `{ "convex hulls": [ { "ID": <int>, "apexes": [ { "x": <f64>, "y": <f64> }, ... ] } ] }`
//!
//! Apex order is kept verbatim; orientation and convexity are not checked.
//! Hulls with fewer than three apexes are rejected with `Error::InvalidPolygon`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom2::{ConvexHull, Point};

/// Top-level document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HullsDoc {
    #[serde(rename = "convex hulls")]
    pub hulls: Vec<HullRecord>,
}

/// One hull as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    pub apexes: Vec<Point>,
}

/// Build hulls from a parsed document.
pub fn hulls_from_json(doc: &HullsDoc) -> Result<Vec<ConvexHull>> {
    doc.hulls
        .iter()
        .map(|r| ConvexHull::new(r.id, r.apexes.clone()))
        .collect()
}

/// Document for a hull collection (ids and vertex order preserved).
pub fn hulls_to_json(hulls: &[ConvexHull]) -> HullsDoc {
    HullsDoc {
        hulls: hulls
            .iter()
            .map(|h| HullRecord {
                id: h.id(),
                apexes: h.vertices().to_vec(),
            })
            .collect(),
    }
}

pub fn from_str(s: &str) -> Result<Vec<ConvexHull>> {
    let doc: HullsDoc = serde_json::from_str(s)?;
    hulls_from_json(&doc)
}

pub fn to_string_pretty(hulls: &[ConvexHull]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&hulls_to_json(hulls))?)
}

/// Read and validate a hull document from disk.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Vec<ConvexHull>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let hulls = from_str(&raw)?;
    tracing::debug!(path = %path.display(), hulls = hulls.len(), "read hull document");
    Ok(hulls)
}

/// Write a hull document, creating parent directories as needed.
pub fn write_path<P: AsRef<Path>>(path: P, hulls: &[ConvexHull]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, to_string_pretty(hulls)?).map_err(io_err)?;
    tracing::debug!(path = %path.display(), hulls = hulls.len(), "wrote hull document");
    Ok(())
}
