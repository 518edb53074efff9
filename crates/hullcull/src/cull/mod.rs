//! Overlap elimination over a collection of convex hulls.
//!
//! Model
//! - Every unordered pair `(i, j)`, `i < j`, is evaluated independently and
//!   emits removal `Votes`: `i` when the overlap exceeds `threshold · area(i)`,
//!   `j` when it exceeds `threshold · area(j)`.
//! - Votes are merged into a removal mask only after all pairs are evaluated,
//!   so the result does not depend on evaluation order. The rayon path
//!   (`removal_mask_par`) yields the same mask as the sequential one.
//!
//! Cost: O(n²) pairs, each O(|edges_i|·|edges_j|).
//!
//! Code cross-refs: `geom2::intersecting_polygon`, `CullCfg`

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::geom2::{intersecting_polygon, ConvexHull, GeomCfg};

/// Overlap culling configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CullCfg {
    /// Relative overlap in [0, 1] above which a hull is removed.
    pub threshold: f64,
    pub geom: GeomCfg,
    /// Evaluate pairs on the rayon pool.
    pub parallel: bool,
}

impl CullCfg {
    /// Sequential config with default tolerances; rejects thresholds outside [0, 1].
    pub fn new(threshold: f64) -> Result<Self> {
        let cfg = Self {
            threshold,
            geom: GeomCfg::default(),
            parallel: false,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check threshold and tolerance; configs built by struct literal or
    /// `with_geom` are only checked here.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        let eps = self.geom.eps_parallel;
        if !eps.is_finite() || eps < 0.0 {
            return Err(Error::InvalidTolerance(eps));
        }
        Ok(())
    }

    #[inline]
    pub fn with_geom(mut self, geom: GeomCfg) -> Self {
        self.geom = geom;
        self
    }

    #[inline]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Removal votes emitted by one pair (at most two indices).
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Votes {
    /// Overlap area, `None` if the pair does not intersect.
    pub overlap: Option<f64>,
    pub remove: Vec<usize>,
}

/// Evaluate the pair `(i, j)`. Callers guarantee both indices are in range.
pub(crate) fn pair_votes(hulls: &[ConvexHull], i: usize, j: usize, cfg: CullCfg) -> Votes {
    let (a, b) = (&hulls[i], &hulls[j]);
    let Some(inter) = intersecting_polygon(a, b, cfg.geom) else {
        return Votes::default();
    };
    let overlap = inter.area();
    let mut remove = Vec::with_capacity(2);
    if overlap > cfg.threshold * a.area() {
        remove.push(i);
    }
    if overlap > cfg.threshold * b.area() {
        remove.push(j);
    }
    if !remove.is_empty() {
        tracing::trace!(a = a.id(), b = b.id(), overlap, ?remove, "overlap votes");
    }
    Votes {
        overlap: Some(overlap),
        remove,
    }
}

/// Pair statistics gathered while merging votes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PairStats {
    pairs: usize,
    overlapping: usize,
}

fn merge(mask: &mut [bool], stats: &mut PairStats, votes: Votes) {
    stats.pairs += 1;
    if votes.overlap.is_some() {
        stats.overlapping += 1;
    }
    for k in votes.remove {
        mask[k] = true;
    }
}

fn row_votes(hulls: &[ConvexHull], i: usize, cfg: CullCfg) -> Vec<Votes> {
    ((i + 1)..hulls.len())
        .map(|j| pair_votes(hulls, i, j, cfg))
        .collect()
}

fn mask_with_stats(hulls: &[ConvexHull], cfg: CullCfg) -> (Vec<bool>, PairStats) {
    let n = hulls.len();
    let mut mask = vec![false; n];
    let mut stats = PairStats::default();
    if n < 2 {
        return (mask, stats);
    }
    let rows: Vec<Vec<Votes>> = if cfg.parallel {
        (0..n - 1)
            .into_par_iter()
            .map(|i| row_votes(hulls, i, cfg))
            .collect()
    } else {
        (0..n - 1).map(|i| row_votes(hulls, i, cfg)).collect()
    };
    for votes in rows.into_iter().flatten() {
        merge(&mut mask, &mut stats, votes);
    }
    (mask, stats)
}

/// Sequential removal mask: `mask[k]` is true if hull `k` must be dropped.
pub fn removal_mask(hulls: &[ConvexHull], cfg: CullCfg) -> Result<Vec<bool>> {
    cfg.validate()?;
    Ok(mask_with_stats(hulls, cfg.with_parallel(false)).0)
}

/// Parallel removal mask on the rayon pool; equal to `removal_mask`.
pub fn removal_mask_par(hulls: &[ConvexHull], cfg: CullCfg) -> Result<Vec<bool>> {
    cfg.validate()?;
    Ok(mask_with_stats(hulls, cfg.with_parallel(true)).0)
}

/// Outcome of a cull, for logs and provenance.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CullReport {
    pub kept: Vec<i64>,
    pub removed: Vec<i64>,
    pub pairs: usize,
    pub overlapping_pairs: usize,
}

/// Surviving hulls (original order) plus a report.
pub fn cull_with_report(
    hulls: &[ConvexHull],
    cfg: CullCfg,
) -> Result<(Vec<ConvexHull>, CullReport)> {
    cfg.validate()?;
    let (mask, stats) = mask_with_stats(hulls, cfg);
    let mut report = CullReport {
        pairs: stats.pairs,
        overlapping_pairs: stats.overlapping,
        ..CullReport::default()
    };
    let mut out = Vec::with_capacity(hulls.len());
    for (h, removed) in hulls.iter().zip(mask) {
        if removed {
            report.removed.push(h.id());
        } else {
            report.kept.push(h.id());
            out.push(h.clone());
        }
    }
    tracing::debug!(
        hulls = hulls.len(),
        kept = report.kept.len(),
        removed = report.removed.len(),
        pairs = report.pairs,
        overlapping = report.overlapping_pairs,
        threshold = cfg.threshold,
        parallel = cfg.parallel,
        "cull finished"
    );
    Ok((out, report))
}

/// Hulls never voted for removal, in original order.
pub fn eliminate_overlapping(hulls: &[ConvexHull], cfg: CullCfg) -> Result<Vec<ConvexHull>> {
    cull_with_report(hulls, cfg).map(|(out, _)| out)
}

#[cfg(test)]
mod tests;
