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
use common::{canonical, covered_area, hull_area};
use dagtri::kernel::orient2d;
use dagtri::{
    Delaunay, DelaunayError, DelaunayParams, DuplicatePolicy, InsertionOrder, LegalityRule, Point2, Triangulate2D,
    Winding, boundary_edges, find_delaunay_violations, triangulate,
};

fn points(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
    coords.iter().map(|&c| Point2::from(c)).collect()
}

fn grid(width: i32, height: i32) -> Vec<Point2<i32>> {
    (0..height)
        .flat_map(|j| (0..width).map(move |i| Point2::new(i, j)))
        .collect()
}

#[test]
fn test_unit_square() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let result = triangulate(&pts).unwrap();
    assert_eq!(canonical(&result.triangles), vec![[0, 1, 2], [0, 2, 3]]);
    assert_eq!(result.indices().len(), 6);
    assert!(result.skipped.is_empty());
}

#[test]
fn test_square_with_center() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
    let result = triangulate(&pts).unwrap();
    assert_eq!(
        canonical(&result.triangles),
        vec![[0, 1, 4], [0, 3, 4], [1, 2, 4], [2, 3, 4]]
    );
    // the center lands on the diagonal
    assert_eq!(result.stats.splits_2_to_4, 1);
}

#[test]
fn test_point_on_edge() {
    let pts = points(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0), (1.0, 0.0)]);
    let result = triangulate(&pts).unwrap();
    assert_eq!(canonical(&result.triangles), vec![[0, 2, 3], [1, 2, 3]]);
    assert_eq!(result.stats.splits_2_to_4, 1);
}

#[test]
fn test_rectangle_with_midpoints() {
    let pts = points(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 3.0),
        (0.0, 3.0),
        (2.0, 0.0),
        (4.0, 1.5),
        (2.0, 3.0),
        (0.0, 1.5),
        (2.0, 1.5),
    ]);
    let result = triangulate(&pts).unwrap();
    assert_eq!(
        canonical(&result.triangles),
        vec![
            [0, 4, 7],
            [1, 4, 5],
            [2, 5, 6],
            [3, 6, 7],
            [4, 5, 8],
            [4, 7, 8],
            [5, 6, 8],
            [6, 7, 8]
        ]
    );
}

#[test]
fn test_sliver_interior_point_is_kept() {
    // the last point is within epsilon of two sides of the sliver, 50 away
    // from every corner
    let pts = points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 0.0015), (50.0, 0.0007)]);
    let result = triangulate(&pts).unwrap();
    assert!(result.skipped.is_empty());
    assert_eq!(canonical(&result.triangles), vec![[0, 1, 3], [0, 2, 3], [1, 2, 3]]);
}

#[test]
fn test_point_near_two_edges_is_not_coincident() {
    let pts = points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 1.0), (0.05, 0.0003)]);
    let result = triangulate(&pts).unwrap();
    assert!(result.skipped.is_empty());
    assert_eq!(canonical(&result.triangles), vec![[0, 1, 3], [0, 2, 3], [1, 2, 3]]);

    let delaunay = Delaunay::new(DelaunayParams::default().with_duplicates(DuplicatePolicy::Reject)).unwrap();
    assert_eq!(delaunay.triangulate(&pts).unwrap().triangles.len(), 3);
}

#[test]
fn test_duplicate_point_is_skipped() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    let result = triangulate(&pts).unwrap();
    assert_eq!(result.skipped, vec![4]);
    assert_eq!(canonical(&result.triangles), vec![[0, 1, 2], [0, 2, 3]]);
    assert!(result.indices().iter().all(|&i| i != 4));
}

#[test]
fn test_duplicate_point_rejected() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 1.0)]);
    let delaunay = Delaunay::new(DelaunayParams::default().with_duplicates(DuplicatePolicy::Reject)).unwrap();
    assert_eq!(
        delaunay.triangulate(&pts),
        Err(DelaunayError::CoincidentPoint { index: 4 })
    );
}

#[test]
fn test_collinear_points_are_degenerate() {
    let pts = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(triangulate(&pts), Err(DelaunayError::Degenerate { points: 3 }));

    let pts = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (1.0, 1.0)]);
    assert_eq!(triangulate(&pts), Err(DelaunayError::Degenerate { points: 5 }));
}

#[test]
fn test_insufficient_input() {
    let two = points(&[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(triangulate(&two), Err(DelaunayError::InsufficientInput { found: 2 }));

    let none: Vec<Point2<f64>> = Vec::new();
    assert_eq!(triangulate(&none), Err(DelaunayError::InsufficientInput { found: 0 }));
}

#[test]
fn test_non_finite_coordinate() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (f64::NAN, 1.0), (0.0, 1.0)]);
    assert_eq!(triangulate(&pts), Err(DelaunayError::NonFiniteCoordinate { index: 2 }));
}

#[test]
fn test_invalid_parameters() {
    assert!(matches!(
        Delaunay::new(DelaunayParams::default().with_special_points_factor(1.0)),
        Err(DelaunayError::InvalidParameter { name: "special_points_factor", .. })
    ));
    assert!(matches!(
        Delaunay::new(DelaunayParams::default().with_epsilon(-1.0)),
        Err(DelaunayError::InvalidParameter { name: "epsilon", .. })
    ));
}

#[test]
fn test_integer_grid() {
    for (w, h) in [(3, 3), (4, 4), (6, 5), (10, 10)] {
        let pts = grid(w, h);
        let result = triangulate(&pts).unwrap();
        let expected = 2 * (w - 1) as usize * (h - 1) as usize;
        assert_eq!(result.triangles.len(), expected, "{w}x{h} grid");
        assert!(find_delaunay_violations(&pts, &result.triangles, 1e-9).unwrap().is_empty());

        // 2N - h - 2 with every boundary point on the hull
        let n = pts.len();
        let boundary = boundary_edges(&result.triangles).len();
        assert_eq!(boundary, 2 * (w + h - 2) as usize);
        assert_eq!(result.triangles.len(), 2 * n - boundary - 2);
    }
}

#[test]
fn test_grid_shuffled_insertion() {
    let pts = grid(6, 5);
    for seed in [1, 2, 3] {
        let params = DelaunayParams::default().with_insertion_order(InsertionOrder::Shuffled { seed });
        let result = Delaunay::new(params).unwrap().triangulate(&pts).unwrap();
        assert_eq!(result.triangles.len(), 40);
        assert!(find_delaunay_violations(&pts, &result.triangles, 1e-9).unwrap().is_empty());
    }
}

#[test]
fn test_counter_clockwise_winding() {
    let pts = points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (1.0, 2.0), (3.0, 1.0)]);
    let params = DelaunayParams::default().with_winding(Winding::CounterClockwise);
    let ccw = Delaunay::new(params).unwrap().triangulate(&pts).unwrap();
    for t in &ccw.triangles {
        assert!(orient2d(&pts[t[0]], &pts[t[1]], &pts[t[2]]) > 0.0, "{t:?} is not counter-clockwise");
    }

    let ascending = triangulate(&pts).unwrap();
    assert!(ascending.triangles.iter().all(|t| t[0] < t[1] && t[1] < t[2]));
    assert_eq!(canonical(&ccw.triangles), canonical(&ascending.triangles));
}

#[test]
fn test_coverage_matches_hull() {
    let pts = points(&[
        (0.0, 0.0),
        (5.0, -1.0),
        (9.0, 2.0),
        (7.0, 8.0),
        (2.0, 7.0),
        (-1.0, 4.0),
        (3.0, 3.0),
        (6.0, 4.0),
        (4.0, 1.0),
    ]);
    for legality in [LegalityRule::Symbolic, LegalityRule::CaseTable, LegalityRule::Circumcircle] {
        let params = DelaunayParams::default().with_legality(legality);
        let result = Delaunay::new(params).unwrap().triangulate(&pts).unwrap();
        assert_relative_eq!(covered_area(&pts, &result.triangles), hull_area(&pts), max_relative = 1e-12);
        assert_eq!(result.triangles.len(), 2 * pts.len() - 6 - 2);
        assert!(find_delaunay_violations(&pts, &result.triangles, 1e-9).unwrap().is_empty());
    }
}

#[test]
fn test_stats_are_reported() {
    let pts = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
    let result = triangulate(&pts).unwrap();
    assert_eq!(result.stats.splits_1_to_3 + result.stats.splits_2_to_4, 5);
    assert!(result.stats.dag_nodes > 1);
    assert_eq!(result.len(), 4);
}
