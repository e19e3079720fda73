use std::cmp::Ordering;

use super::clip::clip;
use super::types::{GeomError, Point2};
use crate::parallelogram_area;

/// Vertex mean. `None` for an empty slice.
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Sort vertices counter-clockwise by angle around their centroid.
///
/// Produces a valid polygon order for convex (or star-shaped about the
/// centroid) vertex sets.
pub fn sort_polygon(points: &[Point2]) -> Vec<Point2> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Point2)> = points
        .iter()
        .map(|&p| ((p.y - c.y).atan2(p.x - c.x), p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Intersection of two convex vertex sets given in any order.
///
/// Both inputs are angle-sorted first, then `a` is clipped by `b`.
pub fn polygon_intersection(a: &[Point2], b: &[Point2]) -> Result<Vec<Point2>, GeomError> {
    clip(&sort_polygon(a), &sort_polygon(b))
}

/// Shoelace area; positive for counter-clockwise order.
pub fn signed_area(polygon: &[Point2]) -> f64 {
    let twice: f64 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(&p, &q)| parallelogram_area(p, q))
        .sum();
    0.5 * twice
}

#[inline]
fn ccw(a: Point2, b: Point2, c: Point2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Proper crossing test for segments `p1p2` and `q1q2`.
///
/// Collinear overlaps and touching endpoints report `false`.
pub fn segments_intersect(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> bool {
    ccw(p1, q1, q2) != ccw(p2, q1, q2) && ccw(p1, p2, q1) != ccw(p1, p2, q2)
}

/// Axis-aligned box around `points`, padded by `margin`, in counter-clockwise order.
pub fn bounding_square(points: &[Point2], margin: f64) -> Option<[Point2; 4]> {
    let first = points.first()?;
    let (mut lo, mut hi) = (*first, *first);
    for p in points {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    lo.add_scalar_mut(-margin);
    hi.add_scalar_mut(margin);
    Some([
        Point2::new(lo.x, lo.y),
        Point2::new(hi.x, lo.y),
        Point2::new(hi.x, hi.y),
        Point2::new(lo.x, hi.y),
    ])
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
pub fn convex_hull(points: &[Point2]) -> Option<Vec<Point2>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    (hull.len() >= 3).then_some(hull)
}

#[inline]
fn turn(a: Point2, b: Point2, c: Point2) -> f64 {
    parallelogram_area(b - a, c - a)
}
