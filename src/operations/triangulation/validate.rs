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

//! Checks that can be run on any triangulation result.

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::error::DelaunayError;
use crate::geometry::Point2;
use crate::kernel::circumcircle;
use crate::numeric::scalar::Scalar;

/// A point found strictly inside the circumcircle of a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Position of the triangle in the checked list.
    pub triangle: usize,
    /// Index of the offending point.
    pub point: usize,
}

/// Every `(triangle, point)` pair where the point lies inside the triangle's
/// circumcircle by more than `tolerance`, relative to the squared radius.
///
/// Brute force over all points. Triangles with collinear corners have no
/// circumcircle and are not reported.
pub fn find_delaunay_violations<T: Scalar>(
    points: &[Point2<T>],
    triangles: &[[usize; 3]],
    tolerance: f64,
) -> Result<Vec<Violation>, DelaunayError> {
    let working = points
        .iter()
        .enumerate()
        .map(|(index, p)| p.to_f64().ok_or(DelaunayError::NonFiniteCoordinate { index }))
        .collect::<Result<Vec<_>, _>>()?;

    let mut violations = Vec::new();
    for (ti, t) in triangles.iter().enumerate() {
        if let Some(&index) = t.iter().find(|&&i| i >= working.len()) {
            return Err(DelaunayError::IndexOutOfRange { triangle: ti, index });
        }
        let Some((center, radius2)) = circumcircle(&working[t[0]], &working[t[1]], &working[t[2]]) else {
            continue;
        };
        let limit = radius2 * (1.0 - tolerance);
        violations.extend(
            working
                .iter()
                .enumerate()
                .filter(|(j, p)| !t.contains(j) && center.distance_squared(p) < limit)
                .map(|(point, _)| Violation { triangle: ti, point }),
        );
    }
    Ok(violations)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

fn edge_incidence(triangles: &[[usize; 3]]) -> AHashMap<Edge, SmallVec<[usize; 2]>> {
    let mut edges: AHashMap<Edge, SmallVec<[usize; 2]>> =
        AHashMap::with_capacity_and_hasher(triangles.len() * 3, Default::default());
    for (ti, &[a, b, c]) in triangles.iter().enumerate() {
        for e in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
            edges.entry(e).or_default().push(ti);
        }
    }
    edges
}

fn edges_with<F: Fn(usize) -> bool>(triangles: &[[usize; 3]], keep: F) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = edge_incidence(triangles)
        .into_iter()
        .filter(|(_, tris)| keep(tris.len()))
        .map(|(Edge(a, b), _)| (a, b))
        .collect();
    out.sort_unstable();
    out
}

/// Edges used by exactly one triangle, i.e. the boundary of the mesh.
/// Endpoints are ordered `(min, max)` and the list is sorted.
pub fn boundary_edges(triangles: &[[usize; 3]]) -> Vec<(usize, usize)> {
    edges_with(triangles, |count| count == 1)
}

/// Edges used by more than two triangles. Empty for a valid planar mesh.
pub fn find_overloaded_edges(triangles: &[[usize; 3]]) -> Vec<(usize, usize)> {
    edges_with(triangles, |count| count > 2)
}
