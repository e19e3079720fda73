//! JSON input documents for the CLI.
//!
//! - A polygon is `[[x, y], ...]`.
//! - A clip document is `{"subject": [[x, y], ...], "clip": [[x, y], ...]}`.
//! - A source of `-` reads from stdin; anything else is a file path.

use anyhow::{anyhow, Context, Result};
use polygeom::Point2;
use serde::Deserialize;
use std::fs;
use std::io::Read;

/// Subject and clip polygon in one document.
#[derive(Debug, Deserialize)]
pub struct ClipDoc {
    pub subject: Vec<[f64; 2]>,
    pub clip: Vec<[f64; 2]>,
}

pub fn read_source(src: &str) -> Result<String> {
    if src == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(src).with_context(|| format!("reading {src}"))
}

pub fn parse_polygon(text: &str) -> Result<Vec<[f64; 2]>> {
    serde_json::from_str(text).context("polygon must be a JSON array of [x, y] pairs")
}

pub fn parse_clip_doc(text: &str) -> Result<ClipDoc> {
    serde_json::from_str(text).context("expected {\"subject\": [[x, y], ...], \"clip\": [[x, y], ...]}")
}

pub fn load_polygon(src: &str) -> Result<Vec<[f64; 2]>> {
    parse_polygon(&read_source(src)?).with_context(|| format!("parsing {src}"))
}

pub fn load_clip_doc(src: &str) -> Result<ClipDoc> {
    parse_clip_doc(&read_source(src)?).with_context(|| format!("parsing {src}"))
}

/// Parse `x,y` into a point.
pub fn parse_point(s: &str) -> Result<Point2> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("point must be written as x,y"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x coordinate {x:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y coordinate {y:?}"))?;
    Ok(Point2::new(x, y))
}

pub fn to_points(pairs: &[[f64; 2]]) -> Vec<Point2> {
    pairs.iter().map(|&[x, y]| Point2::new(x, y)).collect()
}

pub fn flatten(points: &[Point2]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
