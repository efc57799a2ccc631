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

use crate::error::DelaunayError;
use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

mod access;
mod dag;
pub mod delaunay;
mod legalize;
mod locate;
pub mod params;
mod store;
mod super_triangle;
pub mod validate;
mod vertices;

pub use delaunay::Delaunay;
pub use legalize::EdgeConfiguration;
pub use params::{DelaunayParams, DuplicatePolicy, InsertionOrder, LegalityRule, Winding};
pub use validate::{Violation, boundary_edges, find_delaunay_violations, find_overloaded_edges};

pub trait Triangulate2D {
    fn triangulate<T: Scalar>(&self, points: &[Point2<T>]) -> Result<Triangulation, DelaunayError>;
}

/// Counters collected while building a triangulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub splits_1_to_3: usize,
    pub splits_2_to_4: usize,
    /// 2-4 splits of a point lying within `epsilon` of the split edge rather
    /// than exactly on it. Included in `splits_2_to_4`.
    pub near_edge_splits: usize,
    pub flips: usize,
    /// DAG levels where the nearest child was followed instead of a containing one.
    pub fallbacks: usize,
    pub dag_nodes: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    /// Index triples into the input slice.
    pub triangles: Vec<[usize; 3]>,
    /// Input points left out because they coincide with an earlier vertex.
    pub skipped: Vec<usize>,
    pub stats: BuildStats,
}

impl Triangulation {
    /// Triangles flattened into one index buffer.
    pub fn indices(&self) -> Vec<usize> {
        self.triangles.iter().flatten().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Triangulates `points` with [`DelaunayParams::default`].
pub fn triangulate<T: Scalar>(points: &[Point2<T>]) -> Result<Triangulation, DelaunayError> {
    Delaunay::default().triangulate(points)
}
