//! Bound a handful of convex cells, then a Voronoi diagram, and print the result.
//!
//! Usage:
//!   cargo run -p polygeom --example bounded_cells
//!
//! Cells inside the bounds come back unchanged; cells that spill over are
//! clipped. Each line shows the cell index, its vertex count and its area.
//! The Voronoi part splits the same bounds between three sites.

use polygeom::geom2::rand::{draw_convex_polygon, transform, ConvexCfg, SampleKey};
use polygeom::geom2::{bounded_voronoi, bounding_square, clip_to_bounds, signed_area, Point2};

fn main() {
    let cfg = ConvexCfg::with_vertex_range(5, 9);
    let centers = [(0.0, 0.0), (2.0, 0.5), (-1.5, 2.0), (3.5, 3.5)];
    let cells: Vec<Vec<Point2>> = centers
        .iter()
        .enumerate()
        .filter_map(|(i, &(x, y))| {
            let key = SampleKey {
                seed: 2025,
                index: i as u64,
            };
            draw_convex_polygon(cfg, key).map(|p| transform(&p, 0.8, Point2::new(x, y)))
        })
        .collect();
    let Some(bounds) = bounding_square(&[Point2::new(-1.0, -1.0), Point2::new(3.0, 3.0)], 0.0)
    else {
        return;
    };
    match clip_to_bounds(&cells, &bounds) {
        Ok(clipped) => {
            for (i, (before, after)) in cells.iter().zip(&clipped).enumerate() {
                println!(
                    "cell {i}: {} -> {} vertices, area {:.4} -> {:.4}",
                    before.len(),
                    after.len(),
                    signed_area(before),
                    signed_area(after)
                );
            }
        }
        Err(err) => eprintln!("clipping failed: {err}"),
    }

    let sites = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.5),
        Point2::new(1.0, 2.5),
    ];
    match bounded_voronoi(&sites, Some(&bounds[..])) {
        Ok(regions) => {
            for (i, region) in regions.iter().enumerate() {
                println!(
                    "site {i}: {} vertices, area {:.4}",
                    region.len(),
                    signed_area(region)
                );
            }
        }
        Err(err) => eprintln!("voronoi failed: {err}"),
    }
}
