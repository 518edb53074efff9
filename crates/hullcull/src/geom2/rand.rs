//! Random convex hulls in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of convex hull collections for
//!   fixtures, benches, and `hullcull generate`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the CCW convex hull, then translate the result to a
//!   uniformly drawn centre in `[0, spread]²`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `ConvexHull`, `util::convex_hull_ccw`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::ConvexHull;
use super::types::Point;
use super::util::convex_hull_ccw;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Side of the square the centres are drawn from. `0` keeps every hull at the origin.
    pub spread: f64,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 10 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            spread: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one random convex hull (CCW) with the given id.
///
/// Returns `None` only if jitter collapses the hull below three vertices.
pub fn draw_hull(cfg: RadialCfg, tok: ReplayToken, id: i64) -> Option<ConvexHull> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let spread = cfg.spread.max(0.0);
    let centre = Point::new(rng.gen::<f64>() * spread, rng.gen::<f64>() * spread);
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            centre.add(&Point::new(th.cos(), th.sin()).scale(r))
        })
        .collect();
    let hull = convex_hull_ccw(&pts)?;
    ConvexHull::new(id, hull).ok()
}

/// Draw `count` hulls with ids `0..count`, skipping degenerate draws.
pub fn draw_hulls(cfg: RadialCfg, seed: u64, count: usize) -> Vec<ConvexHull> {
    (0..count as u64)
        .filter_map(|index| draw_hull(cfg, ReplayToken { seed, index }, index as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_reproducible() {
        let cfg = RadialCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_hull(cfg, tok, 3), draw_hull(cfg, tok, 3));
        let other = draw_hull(cfg, ReplayToken { seed: 7, index: 4 }, 3);
        assert_ne!(draw_hull(cfg, tok, 3), other);
    }

    #[test]
    fn fixed_count_hulls_are_ccw_and_bounded() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(8),
            spread: 0.0,
            ..RadialCfg::default()
        };
        for h in draw_hulls(cfg, 2025, 20) {
            assert!(h.vertex_count() >= 3 && h.vertex_count() <= 8);
            let signed: f64 = h
                .edges()
                .iter()
                .map(|e| crate::geom2::det2(e.p1, e.p2))
                .sum();
            assert!(signed > 0.0, "hull {} not CCW", h.id());
            assert!(h.contains(Point::new(0.0, 0.0)));
            let rmax = 1.25 * cfg.base_radius + 1e-9;
            assert!(h
                .vertices()
                .iter()
                .all(|p| p.to_vector().norm() <= rmax));
        }
    }

    #[test]
    fn ids_follow_draw_index() {
        let hulls = draw_hulls(RadialCfg::default(), 1, 5);
        let ids: Vec<i64> = hulls.iter().map(|h| h.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
