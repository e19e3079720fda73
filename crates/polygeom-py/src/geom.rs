//! Geometric helper bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{flatten, map_input_err, Rows};
use polygeom::api::flat;
use polygeom::geom2::{self, Point2};
use pyo3::prelude::*;

/// Signed area of a polygon given as `[(x, y), ...]` (positive for CCW).
#[pyfunction]
pub fn polygon_area(polygon: Rows) -> PyResult<f64> {
    let pts = flat::points_from_flat(&flatten(&polygon, "polygon")?, "polygon")
        .map_err(map_input_err)?;
    Ok(geom2::signed_area(&pts))
}

/// Sort vertices counter-clockwise around their centroid.
#[pyfunction]
pub fn sort_polygon(polygon: Rows) -> PyResult<Vec<(f64, f64)>> {
    let pts = flat::points_from_flat(&flatten(&polygon, "polygon")?, "polygon")
        .map_err(map_input_err)?;
    Ok(flat::points_to_pairs(&geom2::sort_polygon(&pts)))
}

/// Proper crossing test for segments `p1p2` and `q1q2`.
#[pyfunction]
pub fn line_intersect(p1: (f64, f64), p2: (f64, f64), q1: (f64, f64), q2: (f64, f64)) -> bool {
    let v = |(x, y): (f64, f64)| Point2::new(x, y);
    geom2::segments_intersect(v(p1), v(p2), v(q1), v(q2))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(polygon_area, m)?)?;
    m.add_function(wrap_pyfunction!(sort_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(line_intersect, m)?)?;
    Ok(())
}
