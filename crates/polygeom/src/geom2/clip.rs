//! Sutherland–Hodgman clipping against a convex clip polygon.
//!
//! Each clip edge is one pass: the previous pass's output is taken as an
//! immutable snapshot and a fresh output list is built from it. Vertices on
//! an edge line are kept (closed half-planes). Once a pass empties the list,
//! every later pass stays empty and the result is empty.
//!
//! Preconditions
//! - `clip` is convex and counter-clockwise (left side = inside). A clockwise
//!   clip polygon selects nothing.
//! - `subject` is simple; it may be concave.
//!
//! Buffers are reserved fallibly; allocation failure aborts with
//! `GeomError::ResourceExhausted` and drops everything built so far.

use super::classify::point_in_polygon;
use super::types::{ClipEdge, GeomCfg, GeomError, Point2};
use super::util::sort_polygon;

/// What to emit when a crossing segment is parallel to the clip edge
/// (zero determinant, no unique intersection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallel {
    /// Emit `(NaN, NaN)` in place of the intersection.
    #[default]
    Nan,
    /// Drop the intersection vertex.
    Skip,
}

/// Clipping configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipCfg {
    pub geom: GeomCfg,
    pub on_parallel: Parallel,
}

/// Clip `subject` by the convex region bounded by `clip` (exact arithmetic).
pub fn clip(subject: &[Point2], clip: &[Point2]) -> Result<Vec<Point2>, GeomError> {
    clip_with(subject, clip, &ClipCfg::default())
}

/// Clip with explicit tolerance and degenerate-intersection policy.
pub fn clip_with(
    subject: &[Point2],
    clip: &[Point2],
    cfg: &ClipCfg,
) -> Result<Vec<Point2>, GeomError> {
    let mut output = try_with_capacity(subject.len())?;
    output.extend_from_slice(subject);

    for edge in ClipEdge::edges_of(clip) {
        if output.is_empty() {
            break;
        }
        output = clip_half_plane(&output, &edge, cfg)?;
    }
    Ok(output)
}

/// One Sutherland–Hodgman pass: keep the part of `input` left of `edge`'s line.
///
/// The line is unbounded, so `edge` need not belong to any polygon.
pub(crate) fn clip_half_plane(
    input: &[Point2],
    edge: &ClipEdge,
    cfg: &ClipCfg,
) -> Result<Vec<Point2>, GeomError> {
    let eps = cfg.geom.eps_side;
    let mut output = try_with_capacity(input.len())?;
    let Some(&last) = input.last() else {
        return Ok(output);
    };

    let mut s = last;
    let mut s_in = edge.contains_eps(s, eps);
    for &e in input {
        let e_in = edge.contains_eps(e, eps);
        if e_in {
            if !s_in {
                emit_crossing(&mut output, edge, s, e, cfg.on_parallel)?;
            }
            emit(&mut output, e)?;
        } else if s_in {
            emit_crossing(&mut output, edge, s, e, cfg.on_parallel)?;
        }
        s = e;
        s_in = e_in;
    }
    Ok(output)
}

/// Clip convex cells (e.g. Voronoi regions) to a bounding polygon.
///
/// Cells whose vertices all lie in `bounds` (boundary included) are returned
/// unchanged. Every other cell is angle-sorted and used as the convex clip
/// polygon for `bounds`, so `bounds` itself may be concave.
pub fn clip_to_bounds(
    cells: &[Vec<Point2>],
    bounds: &[Point2],
) -> Result<Vec<Vec<Point2>>, GeomError> {
    cells
        .iter()
        .map(|cell| {
            if cell.iter().all(|&v| point_in_polygon(v, bounds, true)) {
                let mut kept = try_with_capacity(cell.len())?;
                kept.extend_from_slice(cell);
                Ok(kept)
            } else {
                clip(bounds, &sort_polygon(cell))
            }
        })
        .collect()
}

pub(crate) fn try_with_capacity(n: usize) -> Result<Vec<Point2>, GeomError> {
    let mut v = Vec::new();
    v.try_reserve(n)?;
    Ok(v)
}

#[inline]
fn emit(out: &mut Vec<Point2>, p: Point2) -> Result<(), GeomError> {
    out.try_reserve(1)?;
    out.push(p);
    Ok(())
}

fn emit_crossing(
    out: &mut Vec<Point2>,
    edge: &ClipEdge,
    s: Point2,
    e: Point2,
    on_parallel: Parallel,
) -> Result<(), GeomError> {
    match (edge.intersect(s, e), on_parallel) {
        (Some(p), _) => emit(out, p),
        (None, Parallel::Nan) => emit(out, Point2::new(f64::NAN, f64::NAN)),
        (None, Parallel::Skip) => Ok(()),
    }
}
