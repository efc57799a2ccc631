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

//! Bounding triangle enclosing every input point.

use crate::geometry::{Point2, bounds};
use crate::kernel::SymbolicPoint;

/// The synthetic vertices `-3, -2, -1`, in that order.
///
/// With box center `c` and half extents `(hx, hy)` the vertices point from
/// `c` along `(-hx, -hy)`, `(0, hy)` and `(hx, 0)`. A zero half extent borrows
/// the other one, and an input collapsed to a single location uses `1.0` on
/// both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingTriangle {
    pub center: Point2<f64>,
    pub directions: [Point2<f64>; 3],
    /// `margin * factor`: how far along its direction each vertex is placed
    /// when it needs finite coordinates.
    pub scale: f64,
}

impl BoundingTriangle {
    pub fn enclosing(points: &[Point2<f64>], margin: f64, factor: f64) -> Self {
        let (lo, hi) = bounds(points).unwrap_or_default();
        let center = Point2::new((lo.x + hi.x) / 2.0, (lo.y + hi.y) / 2.0);

        let (hx, hy) = (center.x - lo.x, center.y - lo.y);
        let (hx, hy) = match (hx == 0.0, hy == 0.0) {
            (true, true) => (1.0, 1.0),
            (true, false) => (hy, hy),
            (false, true) => (hx, hx),
            (false, false) => (hx, hy),
        };

        Self {
            center,
            directions: [Point2::new(-hx, -hy), Point2::new(0.0, hy), Point2::new(hx, 0.0)],
            scale: margin * factor,
        }
    }

    /// Finite coordinates: `c + scale * direction`.
    pub fn corners(&self) -> [Point2<f64>; 3] {
        self.directions
            .map(|d| Point2::new(self.center.x + self.scale * d.x, self.center.y + self.scale * d.y))
    }

    /// The same vertices pushed out to infinity.
    pub fn receding(&self) -> [SymbolicPoint; 3] {
        self.directions.map(|d| SymbolicPoint::receding(self.center, d))
    }
}
