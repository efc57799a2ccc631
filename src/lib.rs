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

//! Incremental Delaunay triangulation of planar point sets.
//!
//! ```
//! use dagtri::{Point2, triangulate};
//!
//! let square = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let mesh = triangulate(&square).unwrap();
//! assert_eq!(mesh.triangles.len(), 2);
//! assert_eq!(mesh.indices().len(), 6);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod operations;

pub use error::DelaunayError;
pub use geometry::Point2;
pub use numeric::Scalar;
pub use operations::triangulation::{
    BuildStats, Delaunay, DelaunayParams, DuplicatePolicy, InsertionOrder, LegalityRule, Triangulate2D,
    Triangulation, Violation, Winding, boundary_edges, find_delaunay_violations, find_overloaded_edges,
    triangulate,
};
