//! Seeded random convex polygons for property tests, benches and demos.
//!
//! `n` vertices sit at jittered angles and radii around the origin; the
//! result is their convex hull. For `n >= 5` no angular gap reaches π, so
//! the origin stays strictly inside.

use super::types::Point2;
use super::util::convex_hull;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampler settings.
#[derive(Clone, Copy, Debug)]
pub struct ConvexCfg {
    /// Vertex count is drawn from `min_vertices..=max_vertices` (at least 3).
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub radius: f64,
    /// Fraction of the angular step; capped at 0.49.
    pub angle_jitter: f64,
    pub radius_jitter: f64,
}

impl Default for ConvexCfg {
    fn default() -> Self {
        Self::with_vertices(12)
    }
}

impl ConvexCfg {
    pub fn with_vertices(n: usize) -> Self {
        Self::with_vertex_range(n, n)
    }

    pub fn with_vertex_range(min_vertices: usize, max_vertices: usize) -> Self {
        Self {
            min_vertices,
            max_vertices,
            radius: 1.0,
            angle_jitter: 0.3,
            radius_jitter: 0.25,
        }
    }

    fn vertex_count(&self, rng: &mut StdRng) -> usize {
        let lo = self.min_vertices.max(3);
        rng.gen_range(lo..=self.max_vertices.max(lo))
    }
}

/// Names one draw: the same `(seed, index)` always yields the same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleKey {
    pub seed: u64,
    pub index: u64,
}

impl SampleKey {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw a random convex polygon (CCW vertex list) around the origin.
///
/// `None` only if the hull collapses (fewer than three distinct vertices).
pub fn draw_convex_polygon(cfg: ConvexCfg, key: SampleKey) -> Option<Vec<Point2>> {
    let mut rng = key.rng();
    let n = cfg.vertex_count(&mut rng);
    let step = std::f64::consts::TAU / n as f64;
    let aj = cfg.angle_jitter.clamp(0.0, 0.49) * step;
    let rj = cfg.radius_jitter.max(0.0);
    let radius = cfg.radius.max(1e-9);
    let phase = rng.gen_range(0.0..std::f64::consts::TAU);
    let pts: Vec<Point2> = (0..n)
        .map(|k| {
            let th = phase + k as f64 * step + rng.gen_range(-1.0..=1.0) * aj;
            let r = radius * (1.0 + rng.gen_range(-1.0..=1.0) * rj).max(1e-6);
            Point2::new(r * th.cos(), r * th.sin())
        })
        .collect();
    convex_hull(&pts)
}

/// Translate and scale a polygon: `p ↦ scale * p + offset`.
pub fn transform(polygon: &[Point2], scale: f64, offset: Point2) -> Vec<Point2> {
    polygon.iter().map(|p| p * scale + offset).collect()
}
