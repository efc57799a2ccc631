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

//! Point-in-triangle classification and DAG descent.

use std::cmp::Ordering;

use super::dag::{Dag, NodeId};
use super::store::{Triangle, VertexId};
use super::vertices::Vertices;
use crate::geometry::Point2;
use crate::kernel::orient2d;

/// Position of a point relative to a triangle `(v0, v1, v2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Outside,
    Interior,
    /// Exactly on edge 0 = `v0 v1`, 1 = `v1 v2` or 2 = `v2 v0`.
    OnEdge(usize),
    /// Strictly inside, but within `epsilon` of an edge between two input
    /// points.
    NearEdge(usize),
    /// Within `epsilon` of an input point of the triangle.
    OnVertex,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub location: Location,
    /// Smallest absolute barycentric coordinate of the point. Drives the
    /// nearest-child fallback of the descent.
    pub distance: f64,
}

/// Classifies input point `r` against `tri`.
///
/// Containment is decided by exact orientation tests, so a point on the
/// boundary of two triangles belongs to both. `epsilon` applies in input
/// units: to the distance from `r` to each input vertex of the triangle, then
/// to its distance from each edge joining two input points.
pub fn classify(vertices: &Vertices, r: VertexId, tri: Triangle, epsilon: f64) -> Classification {
    let [v0, v1, v2] = tri.vertices();
    let p = vertices.get(r);
    let corners = [vertices.get(v0), vertices.get(v1), vertices.get(v2)];
    let distance = barycentric_distance(p, corners);
    let outside = Classification {
        location: Location::Outside,
        distance,
    };

    if !tri.is_synthetic() && !in_box(p, corners, epsilon) {
        return outside;
    }
    let winding = vertices.orient(v0, v1, v2);
    if winding == Ordering::Equal {
        return Classification {
            location: Location::Outside,
            distance: f64::INFINITY,
        };
    }

    let edges = [(v0, v1), (v1, v2), (v2, v0)];
    let sides = edges.map(|(a, b)| vertices.orient(a, b, r));
    if sides.contains(&winding.reverse()) {
        return outside;
    }

    let near_vertex = tri
        .vertices()
        .iter()
        .filter_map(|&v| vertices.real(v))
        .any(|q| q.distance(p) < epsilon);
    let location = if near_vertex {
        Location::OnVertex
    } else {
        match sides.iter().filter(|s| **s == Ordering::Equal).count() {
            0 => near_edge(vertices, p, &edges, epsilon).map_or(Location::Interior, Location::NearEdge),
            1 => Location::OnEdge(sides.iter().position(|s| *s == Ordering::Equal).unwrap_or(0)),
            _ => Location::OnVertex,
        }
    };
    Classification { location, distance }
}

fn barycentric_distance(p: &Point2<f64>, [a, b, c]: [&Point2<f64>; 3]) -> f64 {
    let area = orient2d(a, b, c);
    if area == 0.0 || !area.is_finite() {
        return f64::INFINITY;
    }
    [orient2d(a, b, p), orient2d(b, c, p), orient2d(c, a, p)]
        .iter()
        .map(|s| (s / area).abs())
        .fold(f64::INFINITY, f64::min)
}

fn in_box(p: &Point2<f64>, [a, b, c]: [&Point2<f64>; 3], epsilon: f64) -> bool {
    let min_x = a.x.min(b.x).min(c.x);
    let max_x = a.x.max(b.x).max(c.x);
    let min_y = a.y.min(b.y).min(c.y);
    let max_y = a.y.max(b.y).max(c.y);
    p.x >= min_x - epsilon && p.x <= max_x + epsilon && p.y >= min_y - epsilon && p.y <= max_y + epsilon
}

/// Closest edge between two input points lying within `epsilon` of `p`.
fn near_edge(vertices: &Vertices, p: &Point2<f64>, edges: &[(VertexId, VertexId); 3], epsilon: f64) -> Option<usize> {
    edges
        .iter()
        .enumerate()
        .filter_map(|(i, &(a, b))| {
            let (a, b) = (vertices.real(a)?, vertices.real(b)?);
            Some((i, orient2d(a, b, p).abs() / a.distance(b)))
        })
        .filter(|(_, d)| *d < epsilon)
        .min_by(|x, y| x.1.total_cmp(&y.1))
        .map(|(i, _)| i)
}

/// Leaf reached by a descent and how the point sits in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descent {
    pub leaf: NodeId,
    pub location: Location,
    /// Number of levels where no child contained the point and the nearest
    /// one was taken instead.
    pub fallbacks: usize,
}

/// Walks from the root to the leaf containing input point `r`.
///
/// At each level the first child that does not classify the point as outside
/// is followed. When every child rejects it, the child with the smallest
/// distance is followed and the point is treated as interior there. Returns
/// `None` only for an internal node without children.
pub fn descend(dag: &Dag, vertices: &Vertices, r: VertexId, epsilon: f64) -> Option<Descent> {
    let mut node = Dag::ROOT;
    let mut location = Location::Interior;
    let mut fallbacks = 0;

    while !dag.is_leaf(node) {
        let mut nearest: Option<(NodeId, f64)> = None;
        let mut found = None;

        for &child in dag.children(node) {
            let c = classify(vertices, r, dag.triangle(child), epsilon);
            if c.location != Location::Outside {
                found = Some((child, c.location));
                break;
            }
            if nearest.is_none_or(|(_, d)| c.distance < d) {
                nearest = Some((child, c.distance));
            }
        }

        (node, location) = match found {
            Some(hit) => hit,
            None => {
                fallbacks += 1;
                (nearest?.0, Location::Interior)
            }
        };
    }

    Some(Descent {
        leaf: node,
        location,
        fallbacks,
    })
}
