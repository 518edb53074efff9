//! Print the overlap of a square and a triangle poking out of its bottom edge.
//!
//! Usage:
//!   cargo run -p hullcull --example overlap_demo

use hullcull::geom2::{intersecting_polygon, segments_intersect};
use hullcull::{ConvexHull, GeomCfg, Point, Segment};

fn main() -> hullcull::Result<()> {
    let square = ConvexHull::new(
        0,
        vec![
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ],
    )?;
    let triangle = ConvexHull::new(
        1,
        vec![
            Point::new(0.0, 0.0),
            Point::new(-0.5, -1.1),
            Point::new(0.5, -1.1),
        ],
    )?;

    match intersecting_polygon(&square, &triangle, GeomCfg::default()) {
        Some(inter) => {
            println!("overlap area {:.6}", inter.area());
            for p in inter.vertices() {
                println!("  {p}");
            }
        }
        None => println!("no overlap"),
    }

    println!("(0, 0) inside: {}", square.contains(Point::new(0.0, 0.0)));
    println!("(2, 2) inside: {}", square.contains(Point::new(2.0, 2.0)));

    let diag = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let vert = Segment::new(Point::new(0.5, 0.0), Point::new(0.5, 1.0));
    match segments_intersect(&diag, &vert, GeomCfg::default().eps_parallel) {
        Some(p) => println!("segments cross at {p}"),
        None => println!("segments do not cross"),
    }
    Ok(())
}
