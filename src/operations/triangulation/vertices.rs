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

//! Vertex coordinates and the orientation and circle tests over them.

use std::cmp::Ordering;

use super::store::VertexId;
use super::super_triangle::BoundingTriangle;
use crate::geometry::Point2;
use crate::kernel::{SymbolicPoint, in_circumcircle, in_circumcircle_symbolic, orient2d_sign, orient2d_symbolic};

/// Input points plus the synthetic bounding vertices, addressed by [`VertexId`].
///
/// Synthetic vertices always have finite corner coordinates. When `symbolic`
/// is set, predicates touching them use the receding form of the bounding
/// triangle instead.
pub(super) struct Vertices {
    points: Vec<Point2<f64>>,
    corners: [Point2<f64>; 3],
    receding: [SymbolicPoint; 3],
    symbolic: bool,
}

impl Vertices {
    pub(super) fn new(points: Vec<Point2<f64>>, bounding: &BoundingTriangle, symbolic: bool) -> Self {
        Self {
            points,
            corners: bounding.corners(),
            receding: bounding.receding(),
            symbolic,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.points.len()
    }

    /// Coordinates of `v`; the corner position for a synthetic vertex.
    #[inline]
    pub(super) fn get(&self, v: VertexId) -> &Point2<f64> {
        if v < 0 {
            &self.corners[(v + 3) as usize]
        } else {
            &self.points[v as usize]
        }
    }

    /// Coordinates of an input point, `None` for a synthetic vertex.
    #[inline]
    pub(super) fn real(&self, v: VertexId) -> Option<&Point2<f64>> {
        usize::try_from(v).ok().and_then(|i| self.points.get(i))
    }

    fn symbolic(&self, v: VertexId) -> SymbolicPoint {
        if v < 0 {
            self.receding[(v + 3) as usize]
        } else {
            SymbolicPoint::finite(self.points[v as usize])
        }
    }

    fn is_symbolic(&self, vs: &[VertexId]) -> bool {
        self.symbolic && vs.iter().any(|v| *v < 0)
    }

    /// Exact orientation of `a, b, c`.
    pub(super) fn orient(&self, a: VertexId, b: VertexId, c: VertexId) -> Ordering {
        if self.is_symbolic(&[a, b, c]) {
            orient2d_symbolic(&self.symbolic(a), &self.symbolic(b), &self.symbolic(c))
        } else {
            orient2d_sign(self.get(a), self.get(b), self.get(c))
        }
    }

    /// `true` when `d` is strictly inside the circle through `a, b, c`.
    pub(super) fn in_circle(&self, a: VertexId, b: VertexId, c: VertexId, d: VertexId) -> bool {
        if self.is_symbolic(&[a, b, c, d]) {
            in_circumcircle_symbolic(&self.symbolic(a), &self.symbolic(b), &self.symbolic(c), &self.symbolic(d))
        } else {
            in_circumcircle(self.get(a), self.get(b), self.get(c), self.get(d))
        }
    }
}
