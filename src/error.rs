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

//! Errors reported by the triangulation engine.

use thiserror::Error;

/// Failure modes of [`Delaunay::triangulate`](crate::Delaunay).
///
/// Input errors are detected before any triangle is built. The structural
/// variants (`NeighborNotFound`, `MissingApex`, `NonManifoldEdge`,
/// `MembershipCorrupted`, `PointLocationFailed`, `MissingVertex`) mean an internal invariant of
/// the history DAG or the per-vertex access lists broke; the run is aborted
/// instead of returning a partial mesh.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DelaunayError {
    /// Fewer than three input points.
    #[error("at least 3 points are required to triangulate, found {found}")]
    InsufficientInput {
        /// Number of points supplied.
        found: usize,
    },

    /// A tuning parameter is outside its accepted range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears on [`DelaunayParams`](crate::DelaunayParams).
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Accepted range.
        reason: &'static str,
    },

    /// A coordinate is NaN, infinite or not representable as `f64`.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the point in the input slice.
        index: usize,
    },

    /// The point coincides with an already inserted point and duplicates are rejected.
    #[error("point {index} coincides with an already inserted vertex")]
    CoincidentPoint {
        /// Position of the point in the input slice.
        index: usize,
    },

    /// No triangle made only of input points survived, e.g. all points are collinear.
    #[error("input of {points} points spans no triangle (collinear or coincident)")]
    Degenerate {
        /// Number of points supplied.
        points: usize,
    },

    /// The edge being split by a point has no unique neighbouring triangle.
    #[error("edge ({p1}, {p2}) has no unique neighbouring triangle")]
    NeighborNotFound {
        /// First endpoint.
        p1: isize,
        /// Second endpoint.
        p2: isize,
    },

    /// A triangle adjacent to the edge has no vertex opposite to it.
    #[error("no opposite vertex found across edge ({p1}, {p2})")]
    MissingApex {
        /// First endpoint.
        p1: isize,
        /// Second endpoint.
        p2: isize,
    },

    /// More than two current triangles share the edge.
    #[error("edge ({p1}, {p2}) is shared by more than two triangles")]
    NonManifoldEdge {
        /// First endpoint.
        p1: isize,
        /// Second endpoint.
        p2: isize,
    },

    /// A vertex access list does not reference a triangle it should.
    #[error("access list of vertex {vertex} is out of sync with the triangle history")]
    MembershipCorrupted {
        /// Vertex whose list is stale.
        vertex: isize,
    },

    /// Descent through the history DAG reached a node without children to follow.
    #[error("point {index} could not be located in the triangle history")]
    PointLocationFailed {
        /// Position of the point in the input slice.
        index: usize,
    },

    /// An input point that was not skipped is absent from every output triangle.
    #[error("point {index} was inserted but belongs to no output triangle")]
    MissingVertex {
        /// Position of the point in the input slice.
        index: usize,
    },

    /// Legalization after inserting `point` did not converge.
    #[error("legalizing point {point} exceeded {limit} edge flips")]
    FlipLimitExceeded {
        /// Position of the point in the input slice.
        point: usize,
        /// Flip budget for a single insertion.
        limit: usize,
    },

    /// A triangle references a point that does not exist.
    #[error("triangle {triangle} references point {index} which is out of range")]
    IndexOutOfRange {
        /// Position of the triangle in the checked list.
        triangle: usize,
        /// Offending vertex index.
        index: usize,
    },
}
