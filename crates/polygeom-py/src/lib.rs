//! PyO3 bindings for the `polygeom` membership and clipping primitives.
//!
//! Notes
//! - Keep bindings thin: sequences of `(x, y)` rows in (tuples, lists or a
//!   2D numpy array), tuples out. Shape validation happens in
//!   `polygeom::api::flat`, so Python sees the same `ValueError` messages as
//!   every other caller.
//! - Allocation failure while clipping surfaces as `MemoryError`.

mod common;
mod geom;

use common::{flatten, map_input_err, Rows};
use polygeom::api::flat;
use pyo3::prelude::*;

/// Check whether a point lies inside a polygon (boundary counted if requested).
#[pyfunction]
#[pyo3(signature = (point, polygon, check_boundary = false))]
fn point_in_polygon(
    point: Vec<f64>,
    polygon: Rows,
    check_boundary: bool,
) -> PyResult<bool> {
    let polygon = flatten(&polygon, "polygon")?;
    flat::point_in_polygon(&point, &polygon, check_boundary).map_err(map_input_err)
}

/// Clip `subject` by the convex, counter-clockwise polygon `clip`.
#[pyfunction]
fn polygon_intersection(subject: Rows, clip: Rows) -> PyResult<Vec<(f64, f64)>> {
    flat::polygon_intersection(&flatten(&subject, "subject")?, &flatten(&clip, "clip")?)
        .map_err(map_input_err)
}

/// One bounded Voronoi region per site (bounds default to the padded site extent).
#[pyfunction]
#[pyo3(signature = (points, bounds = None))]
fn bounded_voronoi(points: Rows, bounds: Option<Rows>) -> PyResult<Vec<Vec<(f64, f64)>>> {
    let sites = flatten(&points, "sites")?;
    let bounds = bounds.map(|b| flatten(&b, "bounds")).transpose()?;
    flat::bounded_voronoi(&sites, bounds.as_deref()).map_err(map_input_err)
}

#[pymodule]
fn polygeom_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(point_in_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_intersection, m)?)?;
    m.add_function(wrap_pyfunction!(bounded_voronoi, m)?)?;
    geom::register(m)?;
    m.add("__version__", polygeom::VERSION)?;
    Ok(())
}
