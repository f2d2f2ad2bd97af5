use super::*;
use crate::geom::rand::{draw_star_polygon, draw_star_with_hole, ReplayToken, StarCfg, VertexCount};
use crate::geom::{point_in_polygon, signed_area};
use crate::hole::{cut_hole_in_shape, cut_holes_in_shape};
use crate::shapes;
use nalgebra::vector;
use proptest::prelude::*;

/// Centroid of the ring and the points halfway from it to each vertex.
fn interior_samples(hole: &Polygon) -> Vec<Vector2<f64>> {
    let hp = hole.points();
    let c = hp.iter().sum::<Vector2<f64>>() / hp.len() as f64;
    std::iter::once(c).chain(hp.iter().map(|v| (c + v) * 0.5)).collect()
}

/// Regular `k`-gon; stands in for holes of any orientation.
fn regular(center: Vector2<f64>, r: f64, k: usize, phase: f64) -> Polygon {
    let step = std::f64::consts::TAU / k as f64;
    Polygon::new(
        (0..k)
            .map(|j| {
                let th = phase + j as f64 * step;
                center + vector![th.cos(), th.sin()] * r
            })
            .collect(),
    )
    .unwrap()
}

fn square10() -> Polygon {
    Polygon::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
}

/// Index range, triple grouping, every vertex referenced.
fn assert_valid(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0);
    let mut used = vec![false; mesh.vertices.len()];
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len(), "index {i} out of range");
        used[i as usize] = true;
    }
    assert!(used.iter().all(|u| *u), "unreferenced vertex in output");
}

fn assert_winding(mesh: &Mesh, order: WindingOrder) {
    for (k, a) in mesh.signed_areas().enumerate() {
        assert!(a * order.sign() > 0.0, "triangle {k} has signed area {a}");
    }
}

/// Point strictly inside some triangle of the mesh.
fn covers(mesh: &Mesh, p: Vector2<f64>) -> bool {
    mesh.triangles().any(|[a, b, c]| {
        let s = cross(a, b, c).signum();
        cross(a, b, p) * s > 1e-12 && cross(b, c, p) * s > 1e-12 && cross(c, a, p) * s > 1e-12
    })
}

#[test]
fn square_clockwise() {
    let mesh = triangulate(&square10(), WindingOrder::Clockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_valid(&mesh);
    assert_winding(&mesh, WindingOrder::Clockwise);
    assert!((mesh.area() - 100.0).abs() < 1e-9);
    let signed: f64 = mesh.signed_areas().sum();
    assert!((signed + 100.0).abs() < 1e-9);
}

#[test]
fn square_counter_clockwise() {
    let mesh = triangulate(&square10(), WindingOrder::CounterClockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_winding(&mesh, WindingOrder::CounterClockwise);
    let signed: f64 = mesh.signed_areas().sum();
    assert!((signed - 100.0).abs() < 1e-9);
}

#[test]
fn input_orientation_does_not_matter() {
    let cw_input = square10().reversed();
    for order in [WindingOrder::Clockwise, WindingOrder::CounterClockwise] {
        let mesh = triangulate(&cw_input, order).unwrap();
        assert_winding(&mesh, order);
        assert!((mesh.area() - 100.0).abs() < 1e-9);
    }
}

#[test]
fn triangle_passes_through() {
    let tri = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]).unwrap();
    let mesh = triangulate(&tri, WindingOrder::CounterClockwise).unwrap();
    assert_eq!(mesh.vertices, tri.points());
    assert_eq!(mesh.indices, vec![0, 1, 2]);
}

#[test]
fn concave_l_shape() {
    let l = Polygon::from_xy(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ])
    .unwrap();
    let mesh = triangulate(&l, WindingOrder::Clockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    assert_valid(&mesh);
    assert_winding(&mesh, WindingOrder::Clockwise);
    assert!((mesh.area() - 20.0).abs() < 1e-9);
    // The notch is not covered.
    assert!(!covers(&mesh, vector![4.0, 4.0]));
}

#[test]
fn collinear_vertices_are_kept_when_possible() {
    // (5,0) sits on the bottom edge and still ends up in a triangle.
    let p = Polygon::from_xy(&[
        (0.0, 0.0),
        (5.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ])
    .unwrap();
    let mesh = triangulate(&p, WindingOrder::CounterClockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 3);
    assert_eq!(mesh.vertices.len(), 5);
    assert!(mesh.signed_areas().all(|a| a > 0.0));
    assert!((mesh.area() - 100.0).abs() < 1e-9);
}

#[test]
fn repeated_vertex_is_compacted_away() {
    let p = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ])
    .unwrap();
    let mesh = triangulate(&p, WindingOrder::CounterClockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.vertices.len(), 4);
    assert_valid(&mesh);
    assert_winding(&mesh, WindingOrder::CounterClockwise);
    assert!((mesh.area() - 100.0).abs() < 1e-9);
}

#[test]
fn square_with_centered_hole() {
    let outer = square10();
    let hole = Polygon::from_xy(&[(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)]).unwrap();
    let merged = cut_hole_in_shape(&outer, &hole).unwrap();
    let n = merged.len();
    assert_eq!(n, 10);
    let mesh = triangulate(&merged, WindingOrder::Clockwise).unwrap();
    assert_eq!(mesh.triangle_count(), n - 2);
    assert_valid(&mesh);
    assert_winding(&mesh, WindingOrder::Clockwise);
    assert!((mesh.area() - 84.0).abs() < 1e-9);
    // Seam duplicates stay distinct output vertices.
    assert_eq!(mesh.vertices.len(), n);
    for [a, b, c] in mesh.triangles() {
        let g = (a + b + c) / 3.0;
        let in_hole = g.x > 3.0 && g.x < 7.0 && g.y > 3.0 && g.y < 7.0;
        assert!(!in_hole, "centroid {g:?} inside the hole");
    }
}

#[test]
fn demo_shape_excludes_all_three_holes() {
    let merged = shapes::demo_shape().unwrap();
    assert_eq!(merged.len(), 6 + 3 * (6 + 2));
    let mesh = triangulate(&merged, WindingOrder::Clockwise).unwrap();
    assert_valid(&mesh);
    assert_winding(&mesh, WindingOrder::Clockwise);
    assert!(mesh.triangle_count() <= merged.len() - 2);
    assert!((mesh.area() - (60_000.0 - 3.0 * 4_800.0)).abs() < 1e-6);
    for dy in [-90.0, 0.0, 90.0] {
        assert!(!covers(&mesh, vector![-20.0, dy]));
        assert!(!covers(&mesh, vector![20.0, dy]));
    }
    assert!(covers(&mesh, vector![71.3, 3.7]));
}

#[test]
fn hole_grids_side_by_side() {
    for k in [2, 3, 4, 8] {
        let merged = shapes::holed_square(10.0, k).unwrap();
        let mesh = triangulate(&merged, WindingOrder::Clockwise).unwrap();
        assert_valid(&mesh);
        assert_winding(&mesh, WindingOrder::Clockwise);
        assert_eq!(mesh.triangle_count(), merged.len() - 2, "k = {k}");
        assert!((mesh.area() - 75.0).abs() < 1e-9, "k = {k}");
        for hole in shapes::hole_grid(10.0, k).unwrap() {
            for p in interior_samples(&hole) {
                assert!(!covers(&mesh, p), "k = {k}: {p:?} covered");
            }
        }
    }
}

#[test]
fn holes_given_left_to_right() {
    let holes = [
        shapes::square(vector![1.25, 1.25], 2.5).unwrap(),
        shapes::square(vector![1.25, 6.25], 2.5).unwrap(),
        shapes::square(vector![6.25, 1.25], 2.5).unwrap(),
    ];
    let merged = cut_holes_in_shape(&square10(), &holes).unwrap();
    let mesh = triangulate(&merged, WindingOrder::CounterClockwise).unwrap();
    assert_winding(&mesh, WindingOrder::CounterClockwise);
    assert!((mesh.area() - (100.0 - 3.0 * 6.25)).abs() < 1e-9);
    for hole in &holes {
        assert!(interior_samples(hole).into_iter().all(|p| !covers(&mesh, p)));
    }
    assert!(covers(&mesh, vector![8.1, 6.3]));
}

#[test]
fn too_few_or_flat_is_invalid() {
    assert!(matches!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)]),
        Err(GeometryError::InvalidPolygon { .. })
    ));
    let flat = Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
    assert!(matches!(
        triangulate(&flat, WindingOrder::Clockwise),
        Err(GeometryError::InvalidPolygon { .. })
    ));
}

#[test]
fn symmetric_bowtie_is_invalid() {
    let bowtie = Polygon::from_xy(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]).unwrap();
    assert!(matches!(
        triangulate(&bowtie, WindingOrder::Clockwise),
        Err(GeometryError::InvalidPolygon { .. })
    ));
}

/// Big CCW triangle continued into a small CW loop; the connecting edges cross.
fn doubled_loop() -> Polygon {
    Polygon::from_xy(&[
        (0.0, 0.0),
        (20.0, 0.0),
        (10.0, 20.0),
        (6.0, 3.0),
        (7.0, 9.0),
        (10.0, 12.0),
    ])
    .unwrap()
}

#[test]
fn self_intersecting_ring_has_no_ear() {
    let p = doubled_loop();
    assert!((p.signed_area() - 168.5).abs() < 1e-9);
    assert_eq!(
        triangulate(&p, WindingOrder::Clockwise),
        Err(GeometryError::NoEarFound { remaining: 6 })
    );
}

#[test]
fn simplicity_check_reports_crossing_edges() {
    let cfg = GeomCfg {
        check_simple: true,
        ..GeomCfg::default()
    };
    assert!(matches!(
        triangulate_with_cfg(&doubled_loop(), WindingOrder::Clockwise, &cfg),
        Err(GeometryError::InvalidPolygon { .. })
    ));
    // Seams are not crossings.
    let hole = Polygon::from_xy(&[(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)]).unwrap();
    let merged = cut_hole_in_shape(&square10(), &hole).unwrap();
    assert!(triangulate_with_cfg(&merged, WindingOrder::Clockwise, &cfg).is_ok());
}

#[test]
fn tolerance_scales_with_coordinates() {
    let s = 1e-6;
    let tiny = Polygon::new(square10().points().iter().map(|p| p * s).collect()).unwrap();
    let mesh = triangulate(&tiny, WindingOrder::CounterClockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert!((mesh.area() - 100.0 * s * s).abs() < 1e-20);

    let huge = Polygon::new(square10().points().iter().map(|p| p * 1e6).collect()).unwrap();
    let mesh = triangulate(&huge, WindingOrder::CounterClockwise).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn random_stars_seeded() {
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 64 },
        ..StarCfg::default()
    };
    for index in 0..128 {
        let p = draw_star_polygon(cfg, ReplayToken { seed: 2024, index });
        let mesh = triangulate(&p, WindingOrder::Clockwise).unwrap();
        assert_valid(&mesh);
        assert_eq!(mesh.triangle_count(), p.len() - 2, "sample {index}");
        assert!((mesh.area() - p.signed_area().abs()).abs() < 1e-9 * p.signed_area().abs());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_area_winding_and_indices(seed in any::<u64>(), index in 0u64..1_000, ccw in any::<bool>()) {
        let p = draw_star_polygon(StarCfg::default(), ReplayToken { seed, index });
        let order = if ccw { WindingOrder::CounterClockwise } else { WindingOrder::Clockwise };
        let mesh = triangulate(&p, order).unwrap();
        let area = signed_area(p.points()).abs();
        prop_assert!((mesh.area() - area).abs() <= 1e-9 * area);
        prop_assert_eq!(mesh.winding_order(), Some(order));
        prop_assert_eq!(mesh.indices.len() % 3, 0);
        prop_assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn prop_holes_are_never_covered(seed in any::<u64>(), index in 0u64..1_000) {
        let (outer, hole) = draw_star_with_hole(StarCfg::default(), ReplayToken { seed, index });
        let merged = cut_hole_in_shape(&outer, &hole).unwrap();
        prop_assert_eq!(merged.len(), outer.len() + hole.len() + 2);
        let mesh = triangulate(&merged, WindingOrder::Clockwise).unwrap();
        let expected = outer.signed_area().abs() - hole.signed_area().abs();
        prop_assert!((mesh.area() - expected).abs() <= 1e-9 * expected);
        for p in interior_samples(&hole) {
            prop_assert!(point_in_polygon(hole.points(), p));
            prop_assert!(!covers(&mesh, p));
        }
    }

    /// Up to six disjoint regular holes in a 100×100 square, one per 25×25 cell,
    /// each kept at least 0.5 away from its cell border.
    #[test]
    fn prop_disjoint_holes_are_never_covered(
        specs in prop::collection::vec(
            (
                0usize..16,
                -5.0..5.0f64,
                -5.0..5.0f64,
                2.0..7.0f64,
                3usize..9,
                0.0..std::f64::consts::TAU,
            ),
            1..7,
        ),
        ccw in any::<bool>(),
    ) {
        let mut used = [false; 16];
        let mut holes = Vec::new();
        for (cell, dx, dy, r, k, phase) in specs {
            if std::mem::replace(&mut used[cell], true) {
                continue;
            }
            let (i, j) = ((cell / 4) as f64, (cell % 4) as f64);
            let center = vector![i * 25.0 + 12.5 + dx, j * 25.0 + 12.5 + dy];
            holes.push(regular(center, r, k, phase));
        }
        let outer = shapes::square(vector![0.0, 0.0], 100.0).unwrap();
        let merged = cut_holes_in_shape(&outer, &holes).unwrap();
        prop_assert_eq!(merged.len(), 4 + holes.iter().map(|h| h.len() + 2).sum::<usize>());

        let order = if ccw { WindingOrder::CounterClockwise } else { WindingOrder::Clockwise };
        let mesh = triangulate(&merged, order).unwrap();
        prop_assert_eq!(mesh.winding_order(), Some(order));
        let expected = 10_000.0 - holes.iter().map(|h| h.signed_area().abs()).sum::<f64>();
        prop_assert!((mesh.area() - expected).abs() <= 1e-9 * 10_000.0);
        for hole in &holes {
            for p in interior_samples(hole) {
                prop_assert!(!covers(&mesh, p));
            }
        }
    }
}
