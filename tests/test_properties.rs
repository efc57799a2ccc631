// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

mod common;

use approx::assert_relative_eq;
use common::{all_collinear, canonical, covered_area, hull_area, integer_cloud, ring_cloud, uniform_cloud};
use dagtri::{
    Delaunay, DelaunayError, DelaunayParams, InsertionOrder, LegalityRule, Point2, Triangulate2D,
    boundary_edges, find_delaunay_violations, find_overloaded_edges,
};
use proptest::prelude::*;

/// Runs one triangulation and checks the mesh invariants: every kept point
/// is used, `2N - h - 2` triangles, no edge shared by more than two
/// triangles, the hull fully covered and no point inside a circumcircle.
fn check_cloud(points: &[Point2<f64>], params: DelaunayParams) -> Vec<[usize; 3]> {
    let result = Delaunay::new(params).unwrap().triangulate(points).unwrap();
    let inserted = points.len() - result.skipped.len();

    let mut used = result.indices();
    used.extend(&result.skipped);
    used.sort_unstable();
    used.dedup();
    assert_eq!(used, (0..points.len()).collect::<Vec<_>>());

    let boundary = boundary_edges(&result.triangles).len();
    assert_eq!(result.triangles.len(), 2 * inserted - boundary - 2);
    assert!(find_overloaded_edges(&result.triangles).is_empty());
    assert_relative_eq!(covered_area(points, &result.triangles), hull_area(points), max_relative = 1e-9);
    assert_eq!(find_delaunay_violations(points, &result.triangles, 1e-9).unwrap(), vec![]);
    canonical(&result.triangles)
}

#[test]
fn test_uniform_clouds_default_params() {
    for seed in 0..20 {
        let points = uniform_cloud(seed, 100, 100.0);
        let sequential = check_cloud(&points, DelaunayParams::default());
        let shuffled = check_cloud(
            &points,
            DelaunayParams::default().with_insertion_order(InsertionOrder::Shuffled { seed }),
        );
        assert_eq!(sequential, shuffled, "seed {seed}");
    }
}

#[test]
fn test_integer_clouds_default_params() {
    for seed in 0..100 {
        let points: Vec<Point2<f64>> = integer_cloud(seed, 10 + seed as usize % 31)
            .iter()
            .map(|p| Point2::new(p.x as f64, p.y as f64))
            .collect();
        check_cloud(&points, DelaunayParams::default());
    }
}

#[test]
fn test_result_does_not_depend_on_bounding_size() {
    let points = uniform_cloud(5, 80, 10.0);
    let small = check_cloud(&points, DelaunayParams::default().with_special_points_factor(4.0));
    let large = check_cloud(&points, DelaunayParams::default().with_special_points_factor(1e6));
    assert_eq!(small, large);
}

/// The finite-corner rules need the hull to stay clear of interior points.
#[test]
fn test_ring_clouds_finite_corner_rules() {
    for seed in 0..12 {
        let points = ring_cloud(seed, 20 + 10 * seed as usize);
        check_cloud(&points, DelaunayParams::default().with_legality(LegalityRule::CaseTable));
    }

    let params = DelaunayParams::default()
        .with_legality(LegalityRule::Circumcircle)
        .with_special_points_factor(1000.0);
    for seed in 100..110 {
        let points = ring_cloud(seed, 150);
        let sequential = check_cloud(&points, params.clone());
        let shuffled = check_cloud(
            &points,
            params.clone().with_insertion_order(InsertionOrder::Shuffled { seed }),
        );
        assert_eq!(sequential, shuffled, "seed {seed}");
    }
}

#[test]
fn test_unit_scale_cloud() {
    let points: Vec<Point2<f64>> = uniform_cloud(42, 80, 1.0);
    check_cloud(&points, DelaunayParams::default().with_epsilon(1e-6));
}

#[test]
fn test_f32_and_f64_agree() {
    let points = uniform_cloud(7, 60, 100.0);
    let narrow: Vec<Point2<f32>> = points.iter().map(|p| Point2::new(p.x as f32, p.y as f32)).collect();
    let widened: Vec<Point2<f64>> = narrow.iter().map(|p| Point2::new(p.x as f64, p.y as f64)).collect();

    let delaunay = Delaunay::default();
    let a = delaunay.triangulate(&narrow).unwrap();
    let b = delaunay.triangulate(&widened).unwrap();
    assert_eq!(a.triangles, b.triangles);
}

proptest! {
    #[test]
    fn prop_integer_clouds_are_delaunay(
        coords in prop::collection::vec(prop::array::uniform2(-1000i32..1000), 3..40)
    ) {
        let points: Vec<Point2<i32>> = coords.iter().map(|&c| Point2::from(c)).collect();
        let working: Vec<Point2<f64>> = coords.iter().map(|c| Point2::new(c[0] as f64, c[1] as f64)).collect();

        match Delaunay::default().triangulate(&points) {
            Err(DelaunayError::Degenerate { .. }) => prop_assert!(all_collinear(&working)),
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
            Ok(result) => {
                let mut distinct = coords.clone();
                distinct.sort_unstable();
                distinct.dedup();
                let inserted = coords.len() - result.skipped.len();
                prop_assert_eq!(inserted, distinct.len());

                prop_assert!(find_overloaded_edges(&result.triangles).is_empty());
                prop_assert!(find_delaunay_violations(&points, &result.triangles, 1e-9).unwrap().is_empty());
                let boundary = boundary_edges(&result.triangles).len();
                prop_assert_eq!(result.triangles.len(), 2 * inserted - boundary - 2);
                let covered = covered_area(&working, &result.triangles);
                let hull = hull_area(&working);
                prop_assert!((covered - hull).abs() <= 1e-9 * hull, "covered {} of hull {}", covered, hull);
            }
        }
    }
}
