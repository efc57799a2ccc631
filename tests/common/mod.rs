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

#![allow(dead_code)]

use std::f64::consts::TAU;

use dagtri::Point2;
use dagtri::kernel::orient2d;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Each triple sorted, then the list sorted.
pub fn canonical(triangles: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut out: Vec<[usize; 3]> = triangles
        .iter()
        .map(|t| {
            let mut t = *t;
            t.sort_unstable();
            t
        })
        .collect();
    out.sort_unstable();
    out
}

pub fn covered_area(points: &[Point2<f64>], triangles: &[[usize; 3]]) -> f64 {
    triangles
        .iter()
        .map(|t| orient2d(&points[t[0]], &points[t[1]], &points[t[2]]).abs() / 2.0)
        .sum()
}

/// Area of the convex hull (monotone chain, collinear points dropped).
pub fn hull_area(points: &[Point2<f64>]) -> f64 {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted.dedup();

    let mut hull: Vec<Point2<f64>> = Vec::new();
    for pass in [sorted.clone(), sorted.iter().rev().copied().collect()] {
        let start = hull.len();
        for p in pass {
            while hull.len() >= start + 2 && orient2d(&hull[hull.len() - 2], &hull[hull.len() - 1], &p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
    }

    let n = hull.len();
    (0..n)
        .map(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        .abs()
        / 2.0
}

/// `HULL` points on a slightly perturbed circle of radius 1000 around
/// `(1000, 1000)`, then uniform points in the concentric disk of radius 800.
/// The hull is exactly the ring, and no interior point comes near it.
pub const HULL: usize = 12;

pub fn ring_cloud(seed: u64, n: usize) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points: Vec<Point2<f64>> = (0..HULL)
        .map(|i| {
            let angle = TAU * i as f64 / HULL as f64;
            let radius = 1000.0 + rng.random_range(-5.0..5.0);
            Point2::new(1000.0 + radius * angle.cos(), 1000.0 + radius * angle.sin())
        })
        .collect();
    while points.len() < n {
        let x: f64 = rng.random_range(-800.0..800.0);
        let y: f64 = rng.random_range(-800.0..800.0);
        if x * x + y * y <= 800.0 * 800.0 {
            points.push(Point2::new(1000.0 + x, 1000.0 + y));
        }
    }
    points
}

/// `n` points drawn uniformly from `[0, side)^2`.
pub fn uniform_cloud(seed: u64, n: usize, side: f64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.random_range(0.0..side), rng.random_range(0.0..side)))
        .collect()
}

/// `n` integer points drawn uniformly from `[-1000, 1000)^2`.
pub fn integer_cloud(seed: u64, n: usize) -> Vec<Point2<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.random_range(-1000..1000), rng.random_range(-1000..1000)))
        .collect()
}

/// `true` when every point lies on one line (or all coincide).
pub fn all_collinear(points: &[Point2<f64>]) -> bool {
    let Some(a) = points.first() else {
        return true;
    };
    let Some(b) = points.iter().find(|p| *p != a) else {
        return true;
    };
    points.iter().all(|p| orient2d(a, b, p) == 0.0)
}
