//! Point-in-polygon classification.
//!
//! Even-odd ray casting towards +x, followed by an optional exact on-edge pass.
//! Boundary hits take precedence over the ray-cast result. Horizontal edges
//! never straddle the ray and therefore never toggle.
//!
//! Precondition: `polygon` is simple with at least three vertices. Fewer
//! vertices are not rejected here (see `api::flat` for the checked entry point).

use super::types::{GeomCfg, Point2};

/// Where a point lies relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Outside,
    /// Only reported when the boundary check was requested.
    OnBoundary,
}

impl Location {
    /// Membership with the boundary counted as inside.
    #[inline]
    pub fn is_member(self) -> bool {
        !matches!(self, Location::Outside)
    }
}

/// Classify `point` against `polygon` with exact arithmetic.
pub fn classify(point: Point2, polygon: &[Point2], check_boundary: bool) -> Location {
    classify_with(point, polygon, check_boundary, &GeomCfg::default())
}

/// Classify with the tolerances in `cfg` (only `eps_boundary` is used).
pub fn classify_with(
    point: Point2,
    polygon: &[Point2],
    check_boundary: bool,
    cfg: &GeomCfg,
) -> Location {
    let inside = crossing_parity(point, polygon);
    if check_boundary && on_boundary(point, polygon, cfg.eps_boundary) {
        return Location::OnBoundary;
    }
    if inside {
        Location::Inside
    } else {
        Location::Outside
    }
}

/// Boolean membership: interior by the even-odd rule, or on the boundary when checked.
#[inline]
pub fn point_in_polygon(point: Point2, polygon: &[Point2], check_boundary: bool) -> bool {
    classify(point, polygon, check_boundary).is_member()
}

/// Pairs `(p[i], p[j])` where `j` is the predecessor of `i`, wrapping at 0.
fn predecessor_edges(polygon: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    polygon
        .iter()
        .scan(polygon.last().copied(), |prev, &pi| {
            let pj = prev.replace(pi)?;
            Some((pi, pj))
        })
}

fn crossing_parity(point: Point2, polygon: &[Point2]) -> bool {
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    for (pi, pj) in predecessor_edges(polygon) {
        if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
    }
    inside
}

fn on_boundary(point: Point2, polygon: &[Point2], eps: f64) -> bool {
    let (x, y) = (point.x, point.y);
    predecessor_edges(polygon).any(|(pi, pj)| {
        let in_box = x >= pi.x.min(pj.x) - eps
            && x <= pi.x.max(pj.x) + eps
            && y >= pi.y.min(pj.y) - eps
            && y <= pi.y.max(pj.y) + eps;
        if !in_box {
            return false;
        }
        let lhs = (pj.x - pi.x) * (y - pi.y);
        let rhs = (pj.y - pi.y) * (x - pi.x);
        if eps == 0.0 {
            lhs == rhs
        } else {
            (lhs - rhs).abs() <= eps
        }
    })
}
