//! Checked entry points over flat, row-major coordinate buffers.
//!
//! Buffers are `[x0, y0, x1, y1, ...]`. Shape problems (odd lengths, a point
//! that is not 2D, too few vertices) are rejected here with `InputError`
//! before any geometry runs. Results are freshly allocated and owned by the
//! caller.

use std::fmt;

use crate::geom2::{self, ClipCfg, GeomCfg, GeomError, Location, Point2, VoronoiError};

/// Malformed input detected at the buffer boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The buffer does not hold whole `(x, y)` pairs.
    OddLength { what: &'static str, len: usize },
    /// The query point does not have exactly two coordinates.
    PointDim { len: usize },
    /// Row `index` of a nested `[[x, y], ...]` input is not a pair.
    RowDim {
        what: &'static str,
        index: usize,
        len: usize,
    },
    /// A membership polygon needs at least three vertices.
    TooFewVertices { what: &'static str, count: usize },
    /// A clipping polygon without vertices.
    Empty { what: &'static str },
    Geom(GeomError),
    Voronoi(VoronoiError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::OddLength { what, len } => write!(
                f,
                "{what} buffer has odd length {len}; expected flat (x, y) pairs"
            ),
            InputError::PointDim { len } => {
                write!(f, "point must have exactly two coordinates, got {len}")
            }
            InputError::RowDim { what, index, len } => write!(
                f,
                "{what} point {index} must have exactly two coordinates, got {len}"
            ),
            InputError::TooFewVertices { what, count } => {
                write!(f, "{what} must have at least three points (got {count})")
            }
            InputError::Empty { what } => write!(f, "{what} polygon has no vertices"),
            InputError::Geom(err) => write!(f, "{err}"),
            InputError::Voronoi(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Geom(err) => Some(err),
            InputError::Voronoi(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeomError> for InputError {
    fn from(err: GeomError) -> Self {
        InputError::Geom(err)
    }
}

/// Decode `[x0, y0, x1, y1, ...]` into points.
pub fn points_from_flat(buf: &[f64], what: &'static str) -> Result<Vec<Point2>, InputError> {
    if buf.len() % 2 != 0 {
        return Err(InputError::OddLength {
            what,
            len: buf.len(),
        });
    }
    Ok(buf
        .chunks_exact(2)
        .map(|c| Point2::new(c[0], c[1]))
        .collect())
}

impl From<VoronoiError> for InputError {
    fn from(err: VoronoiError) -> Self {
        match err {
            VoronoiError::Geom(err) => InputError::Geom(err),
            other => InputError::Voronoi(other),
        }
    }
}

/// Flatten nested rows (`[[x, y], ...]`, as handed over by host runtimes)
/// into `[x0, y0, x1, y1, ...]`, rejecting rows that are not pairs.
pub fn flatten_rows<R: AsRef<[f64]>>(
    rows: &[R],
    what: &'static str,
) -> Result<Vec<f64>, InputError> {
    let mut flat = Vec::with_capacity(rows.len() * 2);
    for (index, row) in rows.iter().enumerate() {
        match *row.as_ref() {
            [x, y] => flat.extend([x, y]),
            ref other => {
                return Err(InputError::RowDim {
                    what,
                    index,
                    len: other.len(),
                })
            }
        }
    }
    Ok(flat)
}

/// Owned `(x, y)` pairs for handing back to a host runtime.
pub fn points_to_pairs(points: &[Point2]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

fn point_from_flat(point: &[f64]) -> Result<Point2, InputError> {
    match *point {
        [x, y] => Ok(Point2::new(x, y)),
        _ => Err(InputError::PointDim { len: point.len() }),
    }
}

fn membership_polygon(polygon: &[f64]) -> Result<Vec<Point2>, InputError> {
    let poly = points_from_flat(polygon, "polygon")?;
    if poly.len() < 3 {
        return Err(InputError::TooFewVertices {
            what: "polygon",
            count: poly.len(),
        });
    }
    Ok(poly)
}

fn clipping_polygon(buf: &[f64], what: &'static str) -> Result<Vec<Point2>, InputError> {
    let poly = points_from_flat(buf, what)?;
    if poly.is_empty() {
        return Err(InputError::Empty { what });
    }
    Ok(poly)
}

/// Even-odd membership, with boundary points counted when `check_boundary` is set.
pub fn point_in_polygon(
    point: &[f64],
    polygon: &[f64],
    check_boundary: bool,
) -> Result<bool, InputError> {
    classify(point, polygon, check_boundary, &GeomCfg::default()).map(Location::is_member)
}

/// Three-way classification with explicit tolerances.
pub fn classify(
    point: &[f64],
    polygon: &[f64],
    check_boundary: bool,
    cfg: &GeomCfg,
) -> Result<Location, InputError> {
    let p = point_from_flat(point)?;
    let poly = membership_polygon(polygon)?;
    Ok(geom2::classify_with(p, &poly, check_boundary, cfg))
}

/// Clip `subject` by the convex, counter-clockwise `clip` polygon.
///
/// Vertex order is taken as given (no sorting). Parallel crossings show up as
/// `(NaN, NaN)` pairs.
pub fn polygon_intersection(subject: &[f64], clip: &[f64]) -> Result<Vec<(f64, f64)>, InputError> {
    polygon_intersection_with(subject, clip, &ClipCfg::default())
}

pub fn polygon_intersection_with(
    subject: &[f64],
    clip: &[f64],
    cfg: &ClipCfg,
) -> Result<Vec<(f64, f64)>, InputError> {
    let subject = clipping_polygon(subject, "subject")?;
    let clip = clipping_polygon(clip, "clip")?;
    let out = geom2::clip_with(&subject, &clip, cfg)?;
    Ok(points_to_pairs(&out))
}

/// Bounded Voronoi regions, one per site, as owned pairs.
///
/// `bounds = None` pads the site extent (see `geom2::voronoi::default_bounds`).
pub fn bounded_voronoi(
    sites: &[f64],
    bounds: Option<&[f64]>,
) -> Result<Vec<Vec<(f64, f64)>>, InputError> {
    let sites = points_from_flat(sites, "sites")?;
    let bounds = bounds.map(|b| points_from_flat(b, "bounds")).transpose()?;
    let regions = geom2::bounded_voronoi(&sites, bounds.as_deref())?;
    Ok(regions.iter().map(|r| points_to_pairs(r)).collect())
}
