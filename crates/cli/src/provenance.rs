//! Typed provenance sidecar written next to every cull output.
//!
//! `<out-stem>.provenance.json` records the build stamp, the `CullCfg` that ran,
//! and the `CullReport` it produced, so a survivor file can be traced back to
//! the exact threshold and tolerance.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use hullcull::{CullCfg, CullReport};

/// Code revision and crate version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stamp {
    pub code_rev: String,
    pub version: &'static str,
}

impl Stamp {
    pub fn current() -> Self {
        Self {
            code_rev: git_rev(),
            version: hullcull::VERSION,
        }
    }
}

/// One cull run: where the hulls came from, how they were culled, what survived.
#[derive(Debug, Serialize)]
pub struct CullRecord<'a> {
    #[serde(flatten)]
    pub stamp: Stamp,
    pub input: &'a Path,
    pub output: &'a Path,
    pub cfg: CullCfg,
    /// Hull count before culling.
    pub hulls: usize,
    pub report: &'a CullReport,
}

impl CullRecord<'_> {
    /// Write the sidecar for `self.output`; returns its path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(self.output);
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "provenance written");
        Ok(path)
    }
}

/// `dir/kept.json` -> `dir/kept.provenance.json`.
fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hulls".to_owned());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then runtime) or `git rev-parse HEAD`, else "unknown".
fn git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_output() {
        let derived = sidecar_path(Path::new("/tmp/output/kept.json"));
        assert_eq!(derived, Path::new("/tmp/output/kept.provenance.json"));
        let bare = sidecar_path(Path::new("survivors"));
        assert_eq!(bare, Path::new("survivors.provenance.json"));
    }

    #[test]
    fn record_serializes_cfg_and_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("kept.json");
        let report = CullReport {
            kept: vec![3],
            removed: vec![1, 2],
            pairs: 3,
            overlapping_pairs: 1,
        };
        let record = CullRecord {
            stamp: Stamp::current(),
            input: &input,
            output: &output,
            cfg: CullCfg::new(0.5).unwrap().with_parallel(true),
            hulls: 3,
            report: &report,
        };
        let path = record.write().unwrap();
        assert_eq!(path, dir.path().join("kept.provenance.json"));

        let v: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(v["version"], hullcull::VERSION);
        assert!(v["code_rev"].is_string());
        assert_eq!(v["input"], input.to_string_lossy().as_ref());
        assert_eq!(v["cfg"]["threshold"], 0.5);
        assert_eq!(v["cfg"]["geom"]["eps_parallel"], 1e-5);
        assert_eq!(v["cfg"]["parallel"], true);
        assert_eq!(v["hulls"], 3);
        assert_eq!(v["report"]["removed"], serde_json::json!([1, 2]));
        assert_eq!(v["report"]["overlapping_pairs"], 1);
    }
}
