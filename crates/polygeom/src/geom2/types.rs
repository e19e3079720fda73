//! Basic 2D types, tolerances and errors for membership tests and clipping.
//!
//! - `Point2`: plain `Vector2<f64>`; polygons are `&[Point2]`, implicitly closed.
//! - `ClipEdge`: directed clip edge with the closed half-plane predicate and
//!   the line-intersection solver used by Sutherland–Hodgman.
//! - `GeomCfg`: opt-in tolerances. `Default` is exact comparison everywhere.
//!
//! Code cross-refs: `classify::classify_with`, `clip::clip_with`

use std::collections::TryReserveError;
use std::fmt;

use nalgebra::Vector2;

use crate::parallelogram_area as cross;

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// Both fields default to `0.0`, which reproduces exact floating comparisons.
/// Positive values loosen the tests:
/// - `eps_boundary`: collinearity `|cross| <= eps` and bounding boxes grown by `eps`.
/// - `eps_side`: half-plane membership `cross >= -eps`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeomCfg {
    pub eps_boundary: f64,
    pub eps_side: f64,
}

impl GeomCfg {
    /// Same slack for boundary and side tests.
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps_boundary: eps,
            eps_side: eps,
        }
    }
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.eps_boundary == 0.0 && self.eps_side == 0.0
    }
}

/// Directed edge `start → end` of a clip polygon.
///
/// "Inside" is the closed half-plane to the left of the edge, so a
/// counter-clockwise clip polygon keeps its interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipEdge {
    pub start: Point2,
    pub end: Point2,
}

impl ClipEdge {
    #[inline]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Edges `(p[k], p[k+1])` including the wrap-around edge `(p[K-1], p[0])`.
    pub fn edges_of(polygon: &[Point2]) -> impl Iterator<Item = ClipEdge> + '_ {
        polygon
            .iter()
            .zip(polygon.iter().cycle().skip(1))
            .map(|(&start, &end)| ClipEdge::new(start, end))
    }

    /// Closed half-plane test; points on the edge line count as inside.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        let d = self.end - self.start;
        d.x * (p.y - self.start.y) >= d.y * (p.x - self.start.x)
    }

    /// Half-plane test with slack: `cross >= -eps`.
    #[inline]
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        if eps == 0.0 {
            return self.contains(p);
        }
        let d = self.end - self.start;
        d.x * (p.y - self.start.y) - d.y * (p.x - self.start.x) >= -eps
    }

    /// Intersection of the line through `s, e` with the edge's line.
    ///
    /// `None` when the determinant is exactly zero (parallel or coincident lines).
    pub fn intersect(&self, s: Point2, e: Point2) -> Option<Point2> {
        let dc = self.start - self.end;
        let dp = s - e;
        let n1 = cross(self.start, self.end);
        let n2 = cross(s, e);
        let det = cross(dc, dp);
        if det == 0.0 {
            return None;
        }
        Some(Point2::new(
            (n1 * dp.x - n2 * dc.x) / det,
            (n1 * dp.y - n2 * dc.y) / det,
        ))
    }
}

/// Errors surfaced by the core algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A working buffer could not be allocated; no partial result is returned.
    ResourceExhausted(TryReserveError),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::ResourceExhausted(err) => {
                write!(f, "could not allocate clipping buffers: {err}")
            }
        }
    }
}

impl std::error::Error for GeomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeomError::ResourceExhausted(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for GeomError {
    fn from(err: TryReserveError) -> Self {
        GeomError::ResourceExhausted(err)
    }
}
