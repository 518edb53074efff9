use super::*;
use crate::geom2::rand::{draw_hulls, RadialCfg, VertexCount};
use crate::geom2::Point;

fn square(id: i64, x0: f64, y0: f64, side: f64) -> ConvexHull {
    let v = vec![
        Point::new(x0, y0),
        Point::new(x0 + side, y0),
        Point::new(x0 + side, y0 + side),
        Point::new(x0, y0 + side),
    ];
    ConvexHull::new(id, v).unwrap()
}

fn ids(hulls: &[ConvexHull]) -> Vec<i64> {
    hulls.iter().map(|h| h.id()).collect()
}

#[test]
fn threshold_must_be_a_fraction() {
    assert!(CullCfg::new(0.0).is_ok());
    assert!(CullCfg::new(1.0).is_ok());
    for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(CullCfg::new(bad), Err(Error::InvalidThreshold(_))));
    }
    let literal = CullCfg {
        threshold: 2.0,
        geom: GeomCfg::default(),
        parallel: false,
    };
    assert!(eliminate_overlapping(&[], literal).is_err());
    assert!(removal_mask(&[], literal).is_err());
    assert!(removal_mask_par(&[], literal).is_err());
}

#[test]
fn tolerance_must_be_finite_and_non_negative() {
    let hulls = vec![square(1, 0.0, 0.0, 1.0), square(2, 0.5, 0.5, 1.0)];
    let base = CullCfg::new(0.5).unwrap();
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let cfg = base.with_geom(GeomCfg { eps_parallel: bad });
        assert!(matches!(cfg.validate(), Err(Error::InvalidTolerance(_))));
        assert!(matches!(
            cull_with_report(&hulls, cfg),
            Err(Error::InvalidTolerance(_))
        ));
        assert!(removal_mask(&hulls, cfg).is_err());
        assert!(removal_mask_par(&hulls, cfg.with_parallel(true)).is_err());
    }
    let zero = base.with_geom(GeomCfg { eps_parallel: 0.0 });
    assert!(zero.validate().is_ok());
}

#[test]
fn identical_squares_are_both_removed() {
    let hulls = vec![square(1, 0.0, 0.0, 1.0), square(2, 0.0, 0.0, 1.0)];
    let out = eliminate_overlapping(&hulls, CullCfg::new(0.5).unwrap()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn corner_overlap_keeps_both() {
    let hulls = vec![square(1, 0.0, 0.0, 1.0), square(2, 0.8, 0.8, 1.0)];
    let out = eliminate_overlapping(&hulls, CullCfg::new(0.5).unwrap()).unwrap();
    assert_eq!(ids(&out), vec![1, 2]);
}

#[test]
fn small_hull_inside_large_one_is_removed_alone() {
    let big = square(10, 0.0, 0.0, 1.0);
    let small = ConvexHull::new(
        20,
        vec![Point::new(0.2, 0.2), Point::new(0.8, 0.3), Point::new(0.4, 0.7)],
    )
    .unwrap();
    let hulls = vec![big, small];
    let cfg = CullCfg::new(0.5).unwrap();

    let votes = pair_votes(&hulls, 0, 1, cfg);
    assert!((votes.overlap.unwrap() - 0.14).abs() < 1e-12);
    assert_eq!(votes.remove, vec![1]);

    let (out, report) = cull_with_report(&hulls, cfg).unwrap();
    assert_eq!(ids(&out), vec![10]);
    assert_eq!(report.kept, vec![10]);
    assert_eq!(report.removed, vec![20]);
    assert_eq!((report.pairs, report.overlapping_pairs), (1, 1));
}

#[test]
fn disjoint_pair_emits_no_votes() {
    let hulls = vec![square(1, 0.0, 0.0, 1.0), square(2, 5.0, 5.0, 1.0)];
    let votes = pair_votes(&hulls, 0, 1, CullCfg::new(0.0).unwrap());
    assert_eq!(votes, Votes::default());
}

#[test]
fn order_is_preserved_and_threshold_one_keeps_all() {
    let hulls = vec![
        square(3, 0.0, 0.0, 1.0),
        square(1, 10.0, 0.0, 1.0),
        square(2, 0.0, 0.0, 1.0),
        square(0, 20.0, 0.0, 1.0),
    ];
    let out = eliminate_overlapping(&hulls, CullCfg::new(0.5).unwrap()).unwrap();
    assert_eq!(ids(&out), vec![1, 0]);
    // overlap can never exceed the full area of either hull
    let all = eliminate_overlapping(&hulls, CullCfg::new(1.0).unwrap()).unwrap();
    assert_eq!(ids(&all), vec![3, 1, 2, 0]);
}

#[test]
fn empty_and_singleton_collections_pass_through() {
    let cfg = CullCfg::new(0.1).unwrap();
    assert!(eliminate_overlapping(&[], cfg).unwrap().is_empty());
    let one = vec![square(4, 0.0, 0.0, 2.0)];
    let (out, report) = cull_with_report(&one, cfg).unwrap();
    assert_eq!(out, one);
    assert_eq!(report.pairs, 0);
    assert_eq!(removal_mask(&one, cfg).unwrap(), vec![false]);
}

#[test]
fn parallel_mask_matches_sequential() {
    let cfg_draw = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 9 },
        spread: 6.0,
        ..RadialCfg::default()
    };
    let hulls = draw_hulls(cfg_draw, 42, 60);
    for threshold in [0.0, 0.2, 0.5, 0.9] {
        let cfg = CullCfg::new(threshold).unwrap();
        let seq = removal_mask(&hulls, cfg).unwrap();
        let par = removal_mask_par(&hulls, cfg).unwrap();
        assert_eq!(seq, par, "threshold {threshold}");
        let a = eliminate_overlapping(&hulls, cfg).unwrap();
        let b = eliminate_overlapping(&hulls, cfg.with_parallel(true)).unwrap();
        assert_eq!(ids(&a), ids(&b));
    }
}

#[test]
fn zero_threshold_removes_every_overlapping_hull() {
    let hulls = vec![
        square(1, 0.0, 0.0, 1.0),
        square(2, 0.0, 0.0, 1.0),
        square(3, 5.0, 5.0, 1.0),
    ];
    let mask = removal_mask(&hulls, CullCfg::new(0.0).unwrap()).unwrap();
    assert_eq!(mask, vec![true, true, false]);
}
