use super::rand::{draw_convex_polygon, transform, ConvexCfg, SampleKey};
use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn poly(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn square4() -> Vec<Point2> {
    poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
}

/// Same vertices up to order, within `tol`.
fn same_vertex_set(a: &[Point2], b: &[Point2], tol: f64) -> bool {
    a.len() == b.len()
        && a.iter().all(|p| b.iter().any(|q| (p - q).norm() <= tol))
        && b.iter().all(|q| a.iter().any(|p| (p - q).norm() <= tol))
}

#[test]
fn point_inside_and_outside_square() {
    let sq = square4();
    assert_eq!(classify(vector![2.0, 2.0], &sq, false), Location::Inside);
    assert_eq!(classify(vector![5.0, 5.0], &sq, false), Location::Outside);
    assert!(!point_in_polygon(vector![4.1, 2.0], &sq, false));
    assert!(!point_in_polygon(vector![0.0, 4.1], &sq, false));
}

#[test]
fn boundary_points_are_members_when_checked() {
    let sq = square4();
    // vertex, horizontal edge, vertical edge, corner
    for p in [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![4.0, 2.0],
        vector![4.0, 4.0],
    ] {
        assert_eq!(classify(p, &sq, true), Location::OnBoundary, "{p:?}");
        assert!(point_in_polygon(p, &sq, true));
    }
    let notched = poly(&[(0.0, 0.0), (2.0, 2.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
    assert!(point_in_polygon(vector![1.0, 1.0], &notched, true));
}

#[test]
fn unchecked_boundary_follows_ray_cast_tie_break() {
    let sq = square4();
    // Right edge crosses at x = 4 and `4 < 4` fails: no toggle.
    assert_eq!(classify(vector![4.0, 2.0], &sq, false), Location::Outside);
    // Left edge: `0 < 0` fails; the right edge toggles.
    assert_eq!(classify(vector![0.0, 2.0], &sq, false), Location::Inside);
    // Bottom edge: both side edges straddle y = 0 (0 > 0 is false), the right one toggles.
    assert_eq!(classify(vector![2.0, 0.0], &sq, false), Location::Inside);
    // Top edge: nothing straddles y = 4.
    assert_eq!(classify(vector![2.0, 4.0], &sq, false), Location::Outside);
}

#[test]
fn concave_polygon_with_touching_vertices() {
    let bow = poly(&[
        (0.0, 0.0),
        (2.0, 2.0),
        (0.0, 4.0),
        (4.0, 4.0),
        (2.0, 2.0),
        (4.0, 0.0),
    ]);
    assert!(point_in_polygon(vector![2.0, 2.0], &bow, true));
    assert!(point_in_polygon(vector![1.0, 1.0], &bow, true));
    assert!(!point_in_polygon(vector![4.0, 5.0], &bow, false));
}

#[test]
fn horizontal_edges_do_not_toggle() {
    // Staircase with a horizontal edge exactly on the ray.
    let stairs = poly(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0),
    ]);
    assert_eq!(classify(vector![1.0, 2.0], &stairs, false), Location::Inside);
    assert_eq!(classify(vector![3.0, 3.0], &stairs, false), Location::Outside);
    assert_eq!(classify(vector![3.0, 2.0], &stairs, true), Location::OnBoundary);
}

#[test]
fn tolerance_is_opt_in() {
    let sq = square4();
    let p = vector![4.0 + 1e-12, 2.0];
    assert_eq!(classify(p, &sq, true), Location::Outside);
    assert_eq!(
        classify_with(p, &sq, true, &GeomCfg::with_eps(1e-9)),
        Location::OnBoundary
    );
    assert_eq!(
        classify_with(p, &sq, true, &GeomCfg::default()),
        classify(p, &sq, true)
    );
}

#[test]
fn degenerate_polygons_do_not_panic() {
    assert_eq!(classify(vector![0.0, 0.0], &[], true), Location::Outside);
    let seg = poly(&[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(classify(vector![0.5, 0.0], &seg, true), Location::OnBoundary);
    assert_eq!(classify(vector![0.5, 0.5], &seg, true), Location::Outside);
}

#[test]
fn half_plane_predicate_is_closed() {
    let edge = ClipEdge::new(vector![0.0, 0.0], vector![2.0, 2.0]);
    assert!(edge.contains(vector![1.0, 1.0]));
    assert!(edge.contains(vector![1.0, 3.0]));
    assert!(!edge.contains(vector![3.0, 1.0]));
    assert!(edge.contains_eps(vector![1.0 + 1e-12, 1.0], 1e-9));
}

#[test]
fn line_intersection_and_parallel_lines() {
    let edge = ClipEdge::new(vector![1.0, 0.0], vector![1.0, 2.0]);
    let p = edge
        .intersect(vector![0.0, 0.0], vector![2.0, 2.0])
        .expect("crossing");
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
    assert!(edge.intersect(vector![0.0, 0.0], vector![0.0, 2.0]).is_none());
    assert!(edge.intersect(vector![1.0, 5.0], vector![1.0, 7.0]).is_none());
}

#[test]
fn clip_overlapping_squares() {
    let clip_sq = poly(&[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)]);
    let out = clip(&square4(), &clip_sq).unwrap();
    let expected = poly(&[(4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)]);
    assert!(same_vertex_set(&out, &expected, 1e-12), "{out:?}");
    assert!((signed_area(&out) - 4.0).abs() < 1e-12);
}

#[test]
fn clip_by_inner_square_returns_inner_square() {
    let subject = poly(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]);
    let inner = poly(&[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 3.0)]);
    let out = clip(&subject, &inner).unwrap();
    assert!(same_vertex_set(&out, &inner, 1e-12), "{out:?}");
}

#[test]
fn clip_disjoint_squares_is_empty() {
    let a = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let b = poly(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)]);
    assert!(clip(&a, &b).unwrap().is_empty());
    assert!(clip(&b, &a).unwrap().is_empty());
}

#[test]
fn clip_degenerate_inputs() {
    let sq = square4();
    assert!(clip(&[], &sq).unwrap().is_empty());
    // No clip edges: zero passes, subject comes back unchanged.
    assert_eq!(clip(&sq, &[]).unwrap(), sq);
}

#[test]
fn clockwise_clip_polygon_keeps_nothing() {
    let cw = poly(&[(2.0, 2.0), (2.0, 6.0), (6.0, 6.0), (6.0, 2.0)]);
    assert!(clip(&square4(), &cw).unwrap().is_empty());
}

#[test]
fn clip_concave_subject_by_convex_window() {
    // U shape clipped by a band through both arms.
    let u = poly(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0),
    ]);
    let band = poly(&[(-1.0, 2.0), (4.0, 2.0), (4.0, 4.0), (-1.0, 4.0)]);
    let out = clip(&u, &band).unwrap();
    // Two 1x1 arms joined by a zero-width bridge along y = 2.
    assert!((signed_area(&out) - 2.0).abs() < 1e-12);
}

#[test]
fn clip_twice_is_stable() {
    let clip_sq = poly(&[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)]);
    let once = clip(&square4(), &clip_sq).unwrap();
    let twice = clip(&once, &clip_sq).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn clip_cells_to_bounds() {
    let bounds = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let inner = poly(&[(0.2, 0.2), (0.4, 0.2), (0.3, 0.4)]);
    // Unordered vertex set sticking out of the right side.
    let spill = poly(&[(0.5, 0.5), (2.0, 1.0), (2.0, 0.0), (0.5, 0.0)]);
    let out = clip_to_bounds(&[inner.clone(), spill], &bounds).unwrap();
    assert_eq!(out[0], inner);
    let expected = poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.5, 0.5)]);
    assert!(same_vertex_set(&out[1], &expected, 1e-12), "{:?}", out[1]);
}

#[test]
fn polygon_intersection_accepts_unordered_vertices() {
    let a = poly(&[(4.0, 4.0), (0.0, 0.0), (0.0, 4.0), (4.0, 0.0)]);
    let b = poly(&[(6.0, 6.0), (2.0, 2.0), (6.0, 2.0), (2.0, 6.0)]);
    let out = polygon_intersection(&a, &b).unwrap();
    let expected = poly(&[(4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)]);
    assert!(same_vertex_set(&out, &expected, 1e-12), "{out:?}");
}

#[test]
fn sort_polygon_orders_counter_clockwise() {
    let shuffled = poly(&[(4.0, 4.0), (1.0, 1.0), (1.0, 4.0), (4.0, 1.0)]);
    let sorted = sort_polygon(&shuffled);
    assert_eq!(
        sorted,
        poly(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)])
    );
    assert!(signed_area(&sorted) > 0.0);
    assert!(sort_polygon(&[]).is_empty());
}

#[test]
fn segment_crossing_test() {
    let (p1, p2) = (vector![0.0, 0.0], vector![2.0, 2.0]);
    assert!(segments_intersect(p1, p2, vector![0.0, 2.0], vector![2.0, 0.0]));
    assert!(!segments_intersect(p1, p2, vector![2.0, 2.0], vector![4.0, 4.0]));
    assert!(!segments_intersect(p1, p2, vector![3.0, 0.0], vector![4.0, 1.0]));
}

#[test]
fn bounding_square_pads_extent() {
    let pts = poly(&[(0.2, 0.5), (0.8, 0.1), (0.4, 0.9)]);
    let b = bounding_square(&pts, 0.1).unwrap();
    assert!((b[0] - vector![0.1, 0.0]).norm() < 1e-12);
    assert!((b[2] - vector![0.9, 1.0]).norm() < 1e-12);
    assert!(signed_area(&b) > 0.0);
    assert!(bounding_square(&[], 0.1).is_none());
    assert_eq!(centroid(&pts).map(|c| (c.x * 10.0).round()), Some(5.0));
}

fn sample(seed: u64, index: u64) -> Vec<Point2> {
    let cfg = ConvexCfg::with_vertex_range(5, 14);
    draw_convex_polygon(cfg, SampleKey { seed, index }).expect("convex sample")
}

proptest! {
    #[test]
    fn classify_invariant_under_rotation(
        seed in any::<u64>(),
        index in 0u64..1000,
        shift in 0usize..32,
        x in -2.0f64..2.0,
        y in -2.0f64..2.0,
        check_boundary in any::<bool>(),
    ) {
        let p = sample(seed, index);
        let mut rotated = p.clone();
        rotated.rotate_left(shift % p.len());
        let q = vector![x, y];
        prop_assert_eq!(
            classify(q, &p, check_boundary),
            classify(q, &rotated, check_boundary)
        );
        // Vertices themselves are always on the boundary.
        let v = p[shift % p.len()];
        prop_assert_eq!(classify(v, &rotated, true), Location::OnBoundary);
    }

    #[test]
    fn strict_interior_and_exterior(seed in any::<u64>(), index in 0u64..1000) {
        let p = sample(seed, index);
        prop_assert_eq!(classify(Point2::zeros(), &p, false), Location::Inside);
        for v in &p {
            prop_assert_eq!(classify(v * 0.5, &p, false), Location::Inside);
            prop_assert_eq!(classify(v * 1.5, &p, true), Location::Outside);
        }
    }

    #[test]
    fn clip_by_containing_polygon_is_identity(seed in any::<u64>(), index in 0u64..1000) {
        let outer = sample(seed, index);
        let inner = transform(&sample(seed, index + 1), 0.3, Point2::zeros());
        // `inner` has radius <= 0.375 while `outer` contains the disc of radius ~0.4.
        let inner: Vec<Point2> = inner
            .into_iter()
            .filter(|v| classify(*v, &outer, false) == Location::Inside)
            .collect();
        prop_assume!(inner.len() >= 3);
        prop_assert_eq!(clip(&inner, &outer).unwrap(), inner);
    }

    #[test]
    fn clip_disjoint_polygons_is_empty(seed in any::<u64>(), index in 0u64..1000, dy in -5.0f64..5.0) {
        let a = sample(seed, index);
        let b = transform(&sample(seed, index + 1), 1.0, vector![10.0, dy]);
        prop_assert!(clip(&a, &b).unwrap().is_empty());
        prop_assert!(clip(&b, &a).unwrap().is_empty());
    }

    #[test]
    fn reclipping_keeps_the_region(
        seed in any::<u64>(),
        index in 0u64..1000,
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
    ) {
        let a = sample(seed, index);
        let b = transform(&sample(seed, index + 1), 1.0, vector![dx, dy]);
        let once = clip(&a, &b).unwrap();
        prop_assume!(once.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
        let cfg = ClipCfg { geom: GeomCfg::with_eps(1e-9), ..ClipCfg::default() };
        let twice = clip_with(&once, &b, &cfg).unwrap();
        prop_assert_eq!(&twice, &once);
        prop_assert!((signed_area(&twice) - signed_area(&once)).abs() <= 1e-12);
        prop_assert!(signed_area(&once) <= signed_area(&a) + 1e-12);
    }
}
