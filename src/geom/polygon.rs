use anyhow::{Result, ensure};

use crate::Point;
use crate::geom::EPS;

/// A convex polygon in the transverse (x, y) plane.
///
/// Vertices must be given in counter-clockwise order; the z coordinate of
/// the vertices is ignored. Containment is boundary-inclusive: a point
/// lying on an edge or a vertex (within `EPS`) counts as inside. Boundary
/// ties carry no physical meaning here, the rule only has to be
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pts: Vec<Point>,
}

impl Polygon {
    pub fn new(pts: Vec<Point>) -> Result<Self> {
        ensure!(
            pts.len() >= 3,
            "polygon needs at least 3 vertices, got {}",
            pts.len()
        );
        ensure!(
            is_counter_clockwise(&pts),
            "polygon vertices must be convex and counter-clockwise"
        );
        Ok(Self { pts })
    }

    /// Checks if the transverse point (x, y) lies inside the polygon.
    ///
    /// A convex polygon contains a point iff the point is on the left of
    /// (or on) every edge when walking the boundary counter-clockwise.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.pts.len();
        for i in 0..n {
            let a = self.pts[i];
            let b = self.pts[(i + 1) % n];
            if cross2d(b.x - a.x, b.y - a.y, x - a.x, y - a.y) < -EPS {
                return false;
            }
        }
        true
    }
}

/// z component of the 2D cross product (u x v).
fn cross2d(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    ux * vy - uy * vx
}

fn is_counter_clockwise(pts: &[Point]) -> bool {
    let n = pts.len();
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        let c = pts[(i + 2) % n];
        if cross2d(b.x - a.x, b.y - a.y, c.x - b.x, c.y - b.y) < -EPS {
            return false;
        }
    }
    true
}
