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

//! Exact rational evaluation of the geometric predicates.
//!
//! Every finite `f64` is a dyadic rational, so lifting the inputs into
//! [`rug::Rational`] and evaluating the determinant there yields the true sign.
//! [`ExactPolynomial`] extends this to coordinates that grow without bound.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use rug::Rational;

use crate::geometry::Point2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    /// Lifts a finite `f64`. Non-finite values map to zero; callers only pass
    /// validated coordinates.
    pub fn from_f64(value: f64) -> Self {
        ExactRational(Rational::from_f64(value).unwrap_or_default())
    }

    pub fn sign(&self) -> Ordering {
        self.0.cmp0()
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

struct ExactPoint {
    x: ExactRational,
    y: ExactRational,
}

impl ExactPoint {
    fn lift(p: &Point2<f64>) -> Self {
        ExactPoint {
            x: ExactRational::from_f64(p.x),
            y: ExactRational::from_f64(p.y),
        }
    }

    fn relative_to(&self, origin: &ExactPoint) -> ExactPoint {
        ExactPoint {
            x: &self.x - &origin.x,
            y: &self.y - &origin.y,
        }
    }

    fn cross(&self, other: &ExactPoint) -> ExactRational {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    fn norm_squared(&self) -> ExactRational {
        &(&self.x * &self.x) + &(&self.y * &self.y)
    }
}

/// Exact sign of `(b - a) x (c - a)`. `Greater` means counter-clockwise.
pub fn orient2d_exact(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> Ordering {
    let a = ExactPoint::lift(a);
    let ab = ExactPoint::lift(b).relative_to(&a);
    let ac = ExactPoint::lift(c).relative_to(&a);
    ab.cross(&ac).sign()
}

/// Exact sign of the incircle determinant. `Greater` means `d` lies inside the
/// circle through a counter-clockwise `a, b, c`.
pub fn incircle_exact(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
    d: &Point2<f64>,
) -> Ordering {
    let d = ExactPoint::lift(d);
    let ad = ExactPoint::lift(a).relative_to(&d);
    let bd = ExactPoint::lift(b).relative_to(&d);
    let cd = ExactPoint::lift(c).relative_to(&d);

    let a_term = &ad.norm_squared() * &bd.cross(&cd);
    let b_term = &bd.norm_squared() * &cd.cross(&ad);
    let c_term = &cd.norm_squared() * &ad.cross(&bd);
    (&(&a_term + &b_term) + &c_term).sign()
}

/// Polynomial in a single unbounded parameter `t`, lowest degree first.
///
/// Used for points that recede to infinity: their coordinates are linear in
/// `t` and a determinant over them is a polynomial whose sign for large `t`
/// is the sign of its leading nonzero coefficient.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExactPolynomial(pub Vec<ExactRational>);

impl ExactPolynomial {
    /// `base + slope * t`.
    pub fn linear(base: f64, slope: f64) -> Self {
        ExactPolynomial(vec![ExactRational::from_f64(base), ExactRational::from_f64(slope)])
    }

    /// Sign of the polynomial once `t` is large enough.
    pub fn sign_at_infinity(&self) -> Ordering {
        self.0
            .iter()
            .rev()
            .map(ExactRational::sign)
            .find(|s| *s != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl<'a, 'b> Add<&'b ExactPolynomial> for &'a ExactPolynomial {
    type Output = ExactPolynomial;

    fn add(self, rhs: &'b ExactPolynomial) -> ExactPolynomial {
        let (long, short) = if self.0.len() >= rhs.0.len() { (self, rhs) } else { (rhs, self) };
        let mut result = long.clone();
        for (c, s) in result.0.iter_mut().zip(&short.0) {
            *c = &*c + s;
        }
        result
    }
}

impl<'a, 'b> Sub<&'b ExactPolynomial> for &'a ExactPolynomial {
    type Output = ExactPolynomial;

    fn sub(self, rhs: &'b ExactPolynomial) -> ExactPolynomial {
        let zero = ExactRational::default();
        let len = self.0.len().max(rhs.0.len());
        ExactPolynomial(
            (0..len)
                .map(|i| self.0.get(i).unwrap_or(&zero) - rhs.0.get(i).unwrap_or(&zero))
                .collect(),
        )
    }
}

impl<'a, 'b> Mul<&'b ExactPolynomial> for &'a ExactPolynomial {
    type Output = ExactPolynomial;

    fn mul(self, rhs: &'b ExactPolynomial) -> ExactPolynomial {
        if self.0.is_empty() || rhs.0.is_empty() {
            return ExactPolynomial::default();
        }
        let mut result = vec![ExactRational::default(); self.0.len() + rhs.0.len() - 1];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate() {
                result[i + j] = &result[i + j] + &(a * b);
            }
        }
        ExactPolynomial(result)
    }
}
