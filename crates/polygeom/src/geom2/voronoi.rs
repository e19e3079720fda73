//! Voronoi regions bounded by a polygon.
//!
//! Model
//! - The region of site `i` is `bounds` cut by every bisector half-plane
//!   `{x : |x - s_i| <= |x - s_j|}`, `j != i`. Each cut is one
//!   Sutherland–Hodgman pass against the bisector line, so no unbounded
//!   cells ever appear.
//! - `regions[i]` belongs to `sites[i]` and keeps the orientation of `bounds`.
//! - Coincident sites share the same region.
//!
//! Concave bounds are accepted. A region that the bounds split in two comes
//! back as one vertex list joined along a zero-width bridge on the bisector.
//!
//! Cost is `O(n²·m)` for `n` sites and `m` region vertices.

use std::fmt;

use super::classify::point_in_polygon;
use super::clip::{clip_half_plane, try_with_capacity, ClipCfg, Parallel};
use super::types::{ClipEdge, GeomError, Point2};
use super::util::bounding_square;

/// Padding around the site extent when no bounds are given.
pub const DEFAULT_MARGIN: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoronoiError {
    BoundsTooSmall { count: usize },
    /// First site (by index) not inside or on `bounds`.
    SiteOutside { index: usize },
    Geom(GeomError),
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::BoundsTooSmall { count } => {
                write!(f, "bounds must have at least three points (got {count})")
            }
            VoronoiError::SiteOutside { index } => write!(
                f,
                "all points must be within the bounds (site {index} is outside)"
            ),
            VoronoiError::Geom(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for VoronoiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VoronoiError::Geom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeomError> for VoronoiError {
    fn from(err: GeomError) -> Self {
        VoronoiError::Geom(err)
    }
}

/// Axis-aligned square around `sites`, padded by `DEFAULT_MARGIN` (CCW).
pub fn default_bounds(sites: &[Point2]) -> Option<[Point2; 4]> {
    bounding_square(sites, DEFAULT_MARGIN)
}

/// Directed bisector line of `a` and `b` with `a` on its left.
pub fn bisector(a: Point2, b: Point2) -> ClipEdge {
    let n = b - a;
    let mid = (a + b) * 0.5;
    ClipEdge::new(mid, mid + Point2::new(-n.y, n.x))
}

/// One region per site, each clipped to `bounds`.
///
/// `bounds = None` uses `default_bounds(sites)`. Sites on the boundary of
/// `bounds` are accepted. No sites gives no regions.
pub fn bounded_voronoi(
    sites: &[Point2],
    bounds: Option<&[Point2]>,
) -> Result<Vec<Vec<Point2>>, VoronoiError> {
    let padded;
    let bounds = match bounds {
        Some(b) => b,
        None => match default_bounds(sites) {
            Some(sq) => {
                padded = sq;
                &padded[..]
            }
            None => return Ok(Vec::new()),
        },
    };
    if bounds.len() < 3 {
        return Err(VoronoiError::BoundsTooSmall {
            count: bounds.len(),
        });
    }
    if let Some(index) = sites.iter().position(|&s| !point_in_polygon(s, bounds, true)) {
        return Err(VoronoiError::SiteOutside { index });
    }

    // A bisector cut never meets a crossing segment head-on; Skip only
    // matters for NaN input.
    let cfg = ClipCfg {
        on_parallel: Parallel::Skip,
        ..ClipCfg::default()
    };
    let mut regions = Vec::new();
    regions.try_reserve(sites.len()).map_err(GeomError::from)?;
    for (i, &site) in sites.iter().enumerate() {
        let mut region = try_with_capacity(bounds.len())?;
        region.extend_from_slice(bounds);
        for (j, &other) in sites.iter().enumerate() {
            if j == i || other == site || region.is_empty() {
                continue;
            }
            region = clip_half_plane(&region, &bisector(site, other), &cfg)?;
        }
        regions.push(region);
    }
    Ok(regions)
}
