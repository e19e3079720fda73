//! Planar polygon geometry: point classification and convex clipping.
//!
//! Purpose
//! - `classify`: even-odd ray casting with an optional on-boundary pass.
//! - `clip`: Sutherland–Hodgman clipping against a convex clip polygon.
//! - `voronoi`: bounded Voronoi regions, built from the same clipping pass.
//! - All are stateless pure functions over `&[Point2]`; polygons are
//!   implicitly closed (no repeated first vertex).
//!
//! Numerics
//! - Exact `f64` comparisons by default (no epsilon anywhere). Tolerances are
//!   opt-in through `GeomCfg` and the `*_with` variants.
//! - Parallel crossings yield no intersection internally (`Option`); the
//!   default `Parallel::Nan` policy turns that into a NaN vertex in the output.
//!
//! Code cross-refs: `ClipEdge`, `Location`, `ClipCfg`, `api::flat`

mod classify;
mod clip;
pub mod rand;
mod types;
mod util;
pub mod voronoi;

pub use classify::{classify, classify_with, point_in_polygon, Location};
pub use clip::{clip, clip_to_bounds, clip_with, ClipCfg, Parallel};
pub use types::{ClipEdge, GeomCfg, GeomError, Point2};
pub use util::{
    bounding_square, centroid, convex_hull, polygon_intersection, segments_intersect,
    signed_area, sort_polygon,
};
pub use voronoi::{bounded_voronoi, VoronoiError};

#[cfg(test)]
mod tests;
