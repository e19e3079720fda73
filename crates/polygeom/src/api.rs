//! Curated API surface.
//!
//! - Re-exports of the algorithms most callers need.
//! - `flat`: checked entry points over flat coordinate buffers. This is where
//!   input shape is validated; `geom2` itself assumes well-formed polygons.

pub mod flat;

pub use crate::geom2::{
    bounded_voronoi, classify, clip, clip_to_bounds, point_in_polygon, polygon_intersection,
    ClipCfg, GeomCfg, GeomError, Location, Parallel, Point2, VoronoiError,
};
pub use flat::InputError;
