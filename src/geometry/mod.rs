//! Spatial point primitives and the coincidence helpers built on them.

mod point;

pub use point::Point;

/// Default minimum separation between two distinct points, in the linear unit
/// of their CRS.  Pairs closer than this are treated as coincident.
pub const MIN_POINT_SEPARATION: f64 = 0.001;

/// Removes near-duplicate points from a list, keeping the first occurrence of
/// each coincident cluster.
///
/// A point is dropped when it is coincident (within `tolerance`) with a point
/// already kept.  Points whose CRS differs from a kept point can never be
/// coincident with it and survive, so mixed-CRS lists are deduplicated per
/// reference system.
pub fn dedup_points(points: &[Point], tolerance: f64) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !p.already_present_within(&kept, tolerance) {
            kept.push(p.clone());
        }
    }
    kept
}
