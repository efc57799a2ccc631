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

//! Predicates over points that may lie at infinity.
//!
//! A [`SymbolicPoint`] is `base + t * direction` with `t` growing without
//! bound; a zero direction is an ordinary point. The determinants become
//! polynomials in `t` and their sign is read off the leading nonzero
//! coefficient, so every answer is the one a single, large enough `t` would
//! give. Inputs made only of ordinary points go through the filtered
//! predicates instead.

use std::cmp::Ordering;

use super::predicates::{incircle_sign, orient2d_sign};
use crate::geometry::Point2;
use crate::numeric::exact::ExactPolynomial;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolicPoint {
    pub base: Point2<f64>,
    pub direction: Point2<f64>,
}

impl SymbolicPoint {
    pub const fn finite(p: Point2<f64>) -> Self {
        Self {
            base: p,
            direction: Point2::new(0.0, 0.0),
        }
    }

    /// The point reached from `base` by travelling along `direction` forever.
    pub const fn receding(base: Point2<f64>, direction: Point2<f64>) -> Self {
        Self { base, direction }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.direction.x == 0.0 && self.direction.y == 0.0
    }
}

struct PolyPoint {
    x: ExactPolynomial,
    y: ExactPolynomial,
}

impl PolyPoint {
    fn lift(p: &SymbolicPoint) -> Self {
        PolyPoint {
            x: ExactPolynomial::linear(p.base.x, p.direction.x),
            y: ExactPolynomial::linear(p.base.y, p.direction.y),
        }
    }

    fn relative_to(&self, origin: &PolyPoint) -> PolyPoint {
        PolyPoint {
            x: &self.x - &origin.x,
            y: &self.y - &origin.y,
        }
    }

    fn cross(&self, other: &PolyPoint) -> ExactPolynomial {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    fn norm_squared(&self) -> ExactPolynomial {
        &(&self.x * &self.x) + &(&self.y * &self.y)
    }
}

/// Orientation of `a, b, c`; `Greater` means counter-clockwise.
pub fn orient2d_symbolic(a: &SymbolicPoint, b: &SymbolicPoint, c: &SymbolicPoint) -> Ordering {
    if a.is_finite() && b.is_finite() && c.is_finite() {
        return orient2d_sign(&a.base, &b.base, &c.base);
    }
    let a = PolyPoint::lift(a);
    let ab = PolyPoint::lift(b).relative_to(&a);
    let ac = PolyPoint::lift(c).relative_to(&a);
    ab.cross(&ac).sign_at_infinity()
}

/// Incircle sign; `Greater` means `d` is inside the circle through a
/// counter-clockwise `a, b, c`.
pub fn incircle_symbolic(a: &SymbolicPoint, b: &SymbolicPoint, c: &SymbolicPoint, d: &SymbolicPoint) -> Ordering {
    if [a, b, c, d].iter().all(|p| p.is_finite()) {
        return incircle_sign(&a.base, &b.base, &c.base, &d.base);
    }
    let d = PolyPoint::lift(d);
    let ad = PolyPoint::lift(a).relative_to(&d);
    let bd = PolyPoint::lift(b).relative_to(&d);
    let cd = PolyPoint::lift(c).relative_to(&d);

    let a_term = &ad.norm_squared() * &bd.cross(&cd);
    let b_term = &bd.norm_squared() * &cd.cross(&ad);
    let c_term = &cd.norm_squared() * &ad.cross(&bd);
    (&(&a_term + &b_term) + &c_term).sign_at_infinity()
}

/// `true` when `d` is strictly inside the circle through `a, b, c`, whatever
/// their winding. With a vertex at infinity the circle opens into the half
/// plane on that vertex's side of the other two.
pub fn in_circumcircle_symbolic(a: &SymbolicPoint, b: &SymbolicPoint, c: &SymbolicPoint, d: &SymbolicPoint) -> bool {
    match orient2d_symbolic(a, b, c) {
        Ordering::Equal => false,
        winding => incircle_symbolic(a, b, c, d) == winding,
    }
}
