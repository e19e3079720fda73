//! Planar polygon geometry: point-in-polygon tests and convex clipping.
//!
//! - `geom2`: the algorithms over `&[Point2]` (even-odd classification,
//!   Sutherland–Hodgman clipping, bounded Voronoi regions, polygon utilities,
//!   random samplers).
//! - `api`: curated re-exports plus `api::flat`, the checked entry points over
//!   flat `[x0, y0, x1, y1, ...]` coordinate buffers used by bindings and the CLI.
//!
//! Everything here is stateless; calls may run concurrently without coordination.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_convex_polygon, ConvexCfg, SampleKey};
    pub use crate::geom2::{
        bounded_voronoi, classify, classify_with, clip, clip_to_bounds, clip_with,
        point_in_polygon, polygon_intersection, signed_area, sort_polygon, ClipCfg, ClipEdge,
        GeomCfg, GeomError, Location, Parallel, Point2, VoronoiError,
    };
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise (the 2D cross product).
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
