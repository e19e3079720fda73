use polygeom::api::flat::{self, InputError};
use polygeom::geom2::GeomError;
use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;

/// Polygon rows as extracted from any Python sequence of pairs: tuples,
/// lists of lists, or a 2D numpy array.
pub type Rows = Vec<Vec<f64>>;

/// Flatten rows into `[x0, y0, x1, y1, ...]`; rows that are not pairs raise `ValueError`.
pub fn flatten(rows: &[Vec<f64>], what: &'static str) -> PyResult<Vec<f64>> {
    flat::flatten_rows(rows, what).map_err(map_input_err)
}

pub fn map_input_err(err: InputError) -> PyErr {
    match err {
        InputError::Geom(GeomError::ResourceExhausted(inner)) => {
            PyMemoryError::new_err(inner.to_string())
        }
        other => PyValueError::new_err(other.to_string()),
    }
}
