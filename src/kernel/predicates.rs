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

//! Filtered geometric predicates.
//!
//! Each predicate evaluates its determinant in `f64` together with a static
//! error bound. When the magnitude of the result does not clear the bound the
//! sign is recomputed exactly with rationals.

use std::cmp::Ordering;

use crate::geometry::Point2;
use crate::numeric::exact::{incircle_exact, orient2d_exact};

const EPSILON: f64 = f64::EPSILON * 0.5;
const CCW_ERRBOUND: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
const ICC_ERRBOUND: f64 = (10.0 + 96.0 * EPSILON) * EPSILON;

/// Twice the signed area of `a, b, c`; positive when counter-clockwise.
#[inline(always)]
pub fn orient2d(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Sign of [`orient2d`], exact for every finite input.
pub fn orient2d_sign(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> Ordering {
    let left = (b.x - a.x) * (c.y - a.y);
    let right = (b.y - a.y) * (c.x - a.x);
    let det = left - right;
    let bound = CCW_ERRBOUND * (left.abs() + right.abs());

    if det > bound {
        Ordering::Greater
    } else if det < -bound {
        Ordering::Less
    } else {
        orient2d_exact(a, b, c)
    }
}

fn incircle_with_permanent(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
    d: &Point2<f64>,
) -> (f64, f64) {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    (det, permanent)
}

/// Incircle determinant: positive when `d` is inside the circle through a
/// counter-clockwise `a, b, c`.
pub fn incircle(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>, d: &Point2<f64>) -> f64 {
    incircle_with_permanent(a, b, c, d).0
}

/// Sign of [`incircle`], exact for every finite input.
pub fn incircle_sign(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
    d: &Point2<f64>,
) -> Ordering {
    let (det, permanent) = incircle_with_permanent(a, b, c, d);
    let bound = ICC_ERRBOUND * permanent;

    if det > bound {
        Ordering::Greater
    } else if det < -bound {
        Ordering::Less
    } else {
        incircle_exact(a, b, c, d)
    }
}

/// `true` when `d` lies strictly inside the circumcircle of `a, b, c`,
/// whatever the winding of the triangle. Collinear `a, b, c` have no circle
/// and always answer `false`.
pub fn in_circumcircle(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
    d: &Point2<f64>,
) -> bool {
    match orient2d_sign(a, b, c) {
        Ordering::Equal => false,
        Ordering::Greater => incircle_sign(a, b, c, d) == Ordering::Greater,
        Ordering::Less => incircle_sign(a, b, c, d) == Ordering::Less,
    }
}

/// Circumcenter and squared circumradius, `None` for collinear input.
pub fn circumcircle(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
) -> Option<(Point2<f64>, f64)> {
    let ab = *b - *a;
    let ac = *c - *a;
    let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
    if d == 0.0 || !d.is_finite() {
        return None;
    }

    let ab2 = ab.x * ab.x + ab.y * ab.y;
    let ac2 = ac.x * ac.x + ac.y * ac.y;
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;
    Some((Point2::new(a.x + ux, a.y + uy), ux * ux + uy * uy))
}
